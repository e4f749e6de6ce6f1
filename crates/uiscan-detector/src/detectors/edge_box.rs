//! Edge-boundary detector for rectangular button outlines.

use uiscan_core::{BoundingBox, EdgeScanSettings, ElementKind};
use uiscan_raster::{sobel_magnitude, GrayBuffer, PixelBuffer};

use crate::detection::{PixelDetector, RawDetection};

/// Detector scanning a Sobel edge map for rectangle outlines with a
/// flat-filled interior.
///
/// The width/height search is first-fit: the scan commits to the first
/// passing combination per origin and never revisits, trading a possible
/// undersized box for a linear scan. The area-descending dedup afterwards is
/// what recovers the maximal rectangle when several origins see the same
/// button.
pub struct EdgeBoxDetector {
    settings: EdgeScanSettings,
}

impl EdgeBoxDetector {
    /// Create a detector with default settings.
    pub fn new() -> Self {
        Self {
            settings: EdgeScanSettings::default(),
        }
    }

    /// Create a detector with explicit settings.
    pub fn with_settings(settings: EdgeScanSettings) -> Self {
        Self { settings }
    }

    fn is_edge(&self, edges: &GrayBuffer, x: u32, y: u32) -> bool {
        edges
            .get(x, y)
            .is_some_and(|v| v >= self.settings.edge_threshold)
    }

    /// Grow a rectangle from an origin sitting on an edge sample.
    ///
    /// Commits to the first width whose right edge at the origin row is an
    /// edge sample, then to the first height whose bottom corners are both
    /// edge samples and whose interior passes the uniformity probe.
    fn grow_rect(
        &self,
        image: &PixelBuffer,
        edges: &GrayBuffer,
        x: u32,
        y: u32,
    ) -> Option<BoundingBox> {
        let s = &self.settings;

        let mut width = None;
        let mut w = s.min_width;
        while w <= s.max_width {
            if x + w >= image.width() {
                break;
            }
            if self.is_edge(edges, x + w, y) {
                width = Some(w);
                break;
            }
            w += s.size_step;
        }
        let w = width?;

        let mut h = s.min_height;
        while h <= s.max_height {
            if y + h >= image.height() {
                break;
            }
            if self.is_edge(edges, x, y + h)
                && self.is_edge(edges, x + w, y + h)
                && self.interior_is_uniform(image, x, y, w, h)
            {
                return Some(BoundingBox::new(
                    x as i32,
                    y as i32,
                    (x + w) as i32,
                    (y + h) as i32,
                ));
            }
            h += s.size_step;
        }

        None
    }

    /// Probe a 3x3 grid of interior samples (center plus quarter-extent
    /// offsets) against the exact-center color.
    ///
    /// Rejects edge-bounded regions that are not flat-filled, such as text
    /// blocks or gradients.
    fn interior_is_uniform(&self, image: &PixelBuffer, x: u32, y: u32, w: u32, h: u32) -> bool {
        let cx = x + w / 2;
        let cy = y + h / 2;
        let Some(center) = image.rgb(cx, cy) else {
            return false;
        };
        let (qw, qh) = (w / 4, h / 4);

        for dy in [-1i32, 0, 1] {
            for dx in [-1i32, 0, 1] {
                let sx = (cx as i64 + dx as i64 * qw as i64) as u32;
                let sy = (cy as i64 + dy as i64 * qh as i64) as u32;
                let Some(sample) = image.rgb(sx, sy) else {
                    return false;
                };
                let diff: u32 = (0..3)
                    .map(|c| (sample[c] as i32 - center[c] as i32).unsigned_abs())
                    .sum();
                if diff > self.settings.interior_tolerance {
                    return false;
                }
            }
        }

        true
    }

    /// Largest-first survivor pass over raw candidates.
    ///
    /// Keeps a candidate only if its center is outside every already-kept
    /// box, which yields non-overlapping, largest-first survivors without an
    /// overlap metric.
    fn dedup(mut candidates: Vec<BoundingBox>) -> Vec<BoundingBox> {
        // Stable sort: ties keep raster scan order, so output is
        // deterministic.
        candidates.sort_by(|a, b| b.area().cmp(&a.area()));

        let mut kept: Vec<BoundingBox> = Vec::new();
        for candidate in candidates {
            let center = candidate.center();
            if kept.iter().any(|k| k.contains(&center)) {
                continue;
            }
            kept.push(candidate);
        }
        kept
    }
}

impl Default for EdgeBoxDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelDetector for EdgeBoxDetector {
    fn name(&self) -> &'static str {
        "edge-box"
    }

    fn detect(&self, image: &PixelBuffer) -> Vec<RawDetection> {
        let edges = sobel_magnitude(&image.to_gray());
        let stride = self.settings.scan_stride as usize;

        let mut candidates = Vec::new();
        for y in (0..image.height()).step_by(stride) {
            for x in (0..image.width()).step_by(stride) {
                // Origins must sit on a detected border.
                if !self.is_edge(&edges, x, y) {
                    continue;
                }
                if let Some(bbox) = self.grow_rect(image, &edges, x, y) {
                    candidates.push(bbox);
                }
            }
        }

        Self::dedup(candidates)
            .into_iter()
            .map(|bbox| {
                RawDetection::new(ElementKind::Button, bbox).with_center(bbox.center())
            })
            .collect()
    }
}
