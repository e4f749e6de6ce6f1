//! # uiscan
//!
//! Multi-strategy raster UI-element detection for screenshots.
//!
//! Given a screenshot image, uiscan locates rectangular UI controls with
//! three independent pixel-based strategies (color-region matching,
//! edge-boundary scanning, local-contrast symbol masking) and fuses their
//! outputs into one deduplicated element list.
//!
//! ## Architecture
//!
//! This is Layer 3 - the binary crate that ties together:
//! - uiscan-core: core types
//! - uiscan-raster: pixel substrate
//! - uiscan-detector: detectors and fusion
//!
//! The library surface is the [`detect_file`] entry point plus the report
//! types implementing the JSON output contract.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use uiscan_core::{DetectedElement, Error, Result};
use uiscan_detector::DetectionPipeline;
use uiscan_raster::PixelBuffer;

/// Successful detection result, serialized to stdout as a single JSON
/// object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Detected elements, ids 1..N in fusion acceptance order
    pub elements: Vec<DetectedElement>,
    /// Wall-clock time of the call in milliseconds
    pub elapsed_ms: u64,
}

/// Failure payload for stderr.
///
/// Usage errors carry only the message; anything past argument parsing also
/// carries an explicitly empty element list so a failed call can never be
/// mistaken for a low-yield detection.
pub fn failure_report(error: &Error) -> serde_json::Value {
    match error {
        Error::Usage(_) => serde_json::json!({ "error": error.to_string() }),
        _ => serde_json::json!({ "error": error.to_string(), "elements": [] }),
    }
}

/// Run the standard detection pipeline over a screenshot file.
///
/// Decode failures and detection failures are both reported as errors;
/// there is no partially successful result.
pub fn detect_file(path: &Path) -> Result<DetectionReport> {
    let started = Instant::now();

    let decoded = image::open(path).map_err(|e| Error::ImageLoad {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let buffer = PixelBuffer::from_image(&decoded);
    tracing::debug!(
        width = buffer.width(),
        height = buffer.height(),
        "screenshot decoded"
    );

    let elements = DetectionPipeline::standard().detect(&buffer);
    let elapsed_ms = started.elapsed().as_millis() as u64;
    tracing::info!(count = elements.len(), elapsed_ms, "detection complete");

    Ok(DetectionReport {
        elements,
        elapsed_ms,
    })
}
