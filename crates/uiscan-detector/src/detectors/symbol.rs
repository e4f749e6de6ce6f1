//! Contrast-symbol detector for small icon/symbol regions.

use uiscan_core::{ElementKind, SymbolSettings};
use uiscan_raster::{box_mean, connected_components, dilate, BitMask, PixelBuffer};

use crate::detection::{PixelDetector, RawDetection};
use crate::fusion::OccupancyGrid;

/// Detector masking pixels that stand out from their local neighborhood and
/// labeling the resulting blobs at several dilation radii.
///
/// A single dilation radius either merges close-together glyphs into one
/// blob or fragments one icon into specks; running every pass and keeping
/// the first claim per grid cell lets the sharpest reading of each real
/// symbol survive. Findings are emitted as buttons: symbols are treated as
/// clickable affordances, not labeled as icons.
pub struct SymbolDetector {
    settings: SymbolSettings,
}

impl SymbolDetector {
    /// Create a detector with default settings.
    pub fn new() -> Self {
        Self {
            settings: SymbolSettings::default(),
        }
    }

    /// Create a detector with explicit settings.
    pub fn with_settings(settings: SymbolSettings) -> Self {
        Self { settings }
    }

    /// Mask of pixels whose intensity stands out from the local mean.
    fn contrast_mask(&self, image: &PixelBuffer) -> BitMask {
        let gray = image.to_gray();
        let mean = box_mean(&gray, self.settings.mean_radius);
        let width = gray.width();

        let mut mask = BitMask::new(width, gray.height());
        for (i, (&sample, &local)) in gray.data().iter().zip(mean.data()).enumerate() {
            if (sample - local).abs() > self.settings.contrast_threshold {
                mask.set((i as u32) % width, (i as u32) / width, true);
            }
        }
        mask
    }
}

impl Default for SymbolDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelDetector for SymbolDetector {
    fn name(&self) -> &'static str {
        "contrast-symbol"
    }

    fn detect(&self, image: &PixelBuffer) -> Vec<RawDetection> {
        let mask = self.contrast_mask(image);
        let mut claimed = OccupancyGrid::new(self.settings.dedup_cell_size);
        let mut results = Vec::new();

        for pass in &self.settings.passes {
            let grown = dilate(&mask, pass.iterations);
            for bbox in connected_components(&grown) {
                let (w, h) = (bbox.width(), bbox.height());
                if w < pass.min_size
                    || w > self.settings.max_size
                    || h < pass.min_size
                    || h > self.settings.max_size
                {
                    continue;
                }
                // First pass to claim a cell wins: radius 0 runs first, so
                // the tightest box is preferred.
                if claimed.claim(bbox.center()) {
                    results.push(RawDetection::new(ElementKind::Button, bbox));
                }
            }
        }

        results
    }
}
