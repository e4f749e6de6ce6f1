//! Core detection types and traits.

use uiscan_core::{BoundingBox, DetectedElement, DetectionSettings, ElementKind, Point};
use uiscan_raster::PixelBuffer;

use crate::detectors::{ColorRegionDetector, EdgeBoxDetector, SymbolDetector};
use crate::fusion;

/// Raw detection result before fusion.
///
/// Detectors never assign ids; the fusion stage numbers accepted elements and
/// fills any field left unset here.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDetection {
    /// Kind of control
    pub kind: ElementKind,
    /// Bounding box in image coordinates
    pub bbox: BoundingBox,
    /// Center point; fusion substitutes the bbox midpoint when unset
    pub center: Option<Point>,
    /// Confidence; fusion substitutes the default when unset
    pub confidence: Option<f32>,
}

impl RawDetection {
    /// Create a detection with center and confidence left for fusion to fill.
    pub fn new(kind: ElementKind, bbox: BoundingBox) -> Self {
        Self {
            kind,
            bbox,
            center: None,
            confidence: None,
        }
    }

    /// Attach an explicitly computed center.
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }

    /// Center used for dedup: the explicit one if set, else the bbox midpoint.
    pub fn effective_center(&self) -> Point {
        self.center.unwrap_or_else(|| self.bbox.center())
    }
}

/// Trait for pixel-based element detectors.
///
/// Implementations are pure functions of the input buffer: no shared state,
/// no side effects beyond logging. `Send + Sync` so the detectors can run
/// from separate threads feeding one fusion call.
pub trait PixelDetector: Send + Sync {
    /// Detector name for logging and as the fusion source label.
    fn name(&self) -> &'static str;

    /// Detect elements in the buffer.
    fn detect(&self, image: &PixelBuffer) -> Vec<RawDetection>;
}

/// Detection pipeline that runs detectors and fuses their outputs.
///
/// The order detectors are added is the fusion priority order: when two
/// detections land in the same dedup cell, the one from the earlier detector
/// survives.
pub struct DetectionPipeline {
    detectors: Vec<Box<dyn PixelDetector>>,
    settings: DetectionSettings,
}

impl DetectionPipeline {
    /// Create an empty pipeline with default settings.
    pub fn new() -> Self {
        Self {
            detectors: Vec::new(),
            settings: DetectionSettings::default(),
        }
    }

    /// Standard pipeline: color regions, then edge-bounded rectangles, then
    /// contrast symbols.
    ///
    /// Color-region detections are the most precise (exact palette match plus
    /// connected components), so they claim dedup cells before the cheaper
    /// edge and symbol heuristics.
    pub fn standard() -> Self {
        let settings = DetectionSettings::default();
        let mut pipeline = Self {
            detectors: Vec::new(),
            settings: settings.clone(),
        };
        pipeline.add_detector(Box::new(ColorRegionDetector::new()));
        pipeline.add_detector(Box::new(EdgeBoxDetector::with_settings(
            settings.edge_scan.clone(),
        )));
        pipeline.add_detector(Box::new(SymbolDetector::with_settings(
            settings.symbol.clone(),
        )));
        pipeline
    }

    /// Append a detector at the lowest priority position.
    pub fn add_detector(&mut self, detector: Box<dyn PixelDetector>) {
        self.detectors.push(detector);
    }

    /// Run all detectors and fuse their outputs into the final element list.
    pub fn detect(&self, image: &PixelBuffer) -> Vec<DetectedElement> {
        let mut sources = Vec::with_capacity(self.detectors.len());

        for detector in &self.detectors {
            let detections = detector.detect(image);
            tracing::debug!(
                detector = detector.name(),
                count = detections.len(),
                "detector pass complete"
            );
            sources.push((detector.name(), detections));
        }

        fusion::fuse(sources, &self.settings.fusion)
    }
}

impl Default for DetectionPipeline {
    fn default() -> Self {
        Self::new()
    }
}
