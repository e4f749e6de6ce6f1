//! Detection settings.
//!
//! All thresholds ship with fixed defaults; the structs stay serializable so
//! an external configuration layer can be added without touching detectors.

use serde::{Deserialize, Serialize};

/// Settings for the edge-boundary rectangle scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeScanSettings {
    /// Minimum gradient magnitude for a sample to count as an edge
    pub edge_threshold: f32,
    /// Stride between candidate origins, both axes
    pub scan_stride: u32,
    /// Smallest candidate width in pixels (inclusive)
    pub min_width: u32,
    /// Largest candidate width in pixels (inclusive)
    pub max_width: u32,
    /// Smallest candidate height in pixels (inclusive)
    pub min_height: u32,
    /// Largest candidate height in pixels (inclusive)
    pub max_height: u32,
    /// Step between successive width/height candidates
    pub size_step: u32,
    /// Maximum summed per-channel difference from the center color for an
    /// interior sample to count as uniform
    pub interior_tolerance: u32,
}

impl Default for EdgeScanSettings {
    fn default() -> Self {
        Self {
            edge_threshold: 30.0,
            scan_stride: 5,
            min_width: 25,
            max_width: 300,
            min_height: 20,
            max_height: 80,
            size_step: 5,
            interior_tolerance: 60,
        }
    }
}

/// One dilation pass of the contrast-symbol detector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DilationPass {
    /// Number of 4-neighbor dilation iterations applied to the contrast mask
    pub iterations: u32,
    /// Smallest accepted box side for this pass
    pub min_size: i32,
}

/// Settings for the contrast-symbol detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolSettings {
    /// Radius of the local-mean box filter (window side = 2*radius + 1)
    pub mean_radius: u32,
    /// Minimum |pixel - local mean| for a pixel to count as content
    pub contrast_threshold: f32,
    /// Dilation passes, run in order; the first pass to claim a grid cell
    /// wins, so tighter passes go first
    pub passes: Vec<DilationPass>,
    /// Largest accepted box side across all passes
    pub max_size: i32,
    /// Cell side for the cross-pass center dedup
    pub dedup_cell_size: i32,
}

impl Default for SymbolSettings {
    fn default() -> Self {
        Self {
            mean_radius: 10,
            contrast_threshold: 25.0,
            passes: vec![
                DilationPass {
                    iterations: 0,
                    min_size: 6,
                },
                DilationPass {
                    iterations: 2,
                    min_size: 8,
                },
                DilationPass {
                    iterations: 4,
                    min_size: 8,
                },
            ],
            max_size: 50,
            dedup_cell_size: 10,
        }
    }
}

/// Settings for the fusion/dedup stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionSettings {
    /// Side of the quantization cell used to treat two centers as the same
    /// control
    pub cell_size: i32,
    /// Confidence assigned to elements whose detector did not supply one
    pub default_confidence: f32,
}

impl Default for FusionSettings {
    fn default() -> Self {
        Self {
            cell_size: 10,
            default_confidence: 0.8,
        }
    }
}

/// Aggregate detection settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DetectionSettings {
    /// Edge-boundary scan settings
    pub edge_scan: EdgeScanSettings,
    /// Contrast-symbol settings
    pub symbol: SymbolSettings,
    /// Fusion settings
    pub fusion: FusionSettings,
}

impl DetectionSettings {
    /// Validate settings values.
    pub fn validate(&self) -> crate::Result<()> {
        if self.edge_scan.scan_stride == 0 || self.edge_scan.size_step == 0 {
            return Err(crate::Error::Config(
                "edge_scan stride and step must be > 0".to_string(),
            ));
        }
        if self.edge_scan.min_width > self.edge_scan.max_width
            || self.edge_scan.min_height > self.edge_scan.max_height
        {
            return Err(crate::Error::Config(
                "edge_scan size ranges must satisfy min <= max".to_string(),
            ));
        }
        if self.symbol.passes.is_empty() {
            return Err(crate::Error::Config(
                "symbol.passes must not be empty".to_string(),
            ));
        }
        if self.symbol.dedup_cell_size <= 0 {
            return Err(crate::Error::Config(
                "symbol.dedup_cell_size must be > 0".to_string(),
            ));
        }
        if self.fusion.cell_size <= 0 {
            return Err(crate::Error::Config(
                "fusion.cell_size must be > 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.fusion.default_confidence) {
            return Err(crate::Error::Config(
                "fusion.default_confidence must be in [0, 1]".to_string(),
            ));
        }
        Ok(())
    }
}
