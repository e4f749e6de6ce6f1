//! Fusion/dedup stage merging detector outputs into the final element list.

use std::collections::HashSet;

use uiscan_core::{DetectedElement, FusionSettings, Point};

use crate::detection::RawDetection;

/// Set of quantized center cells claimed during one fusion call.
///
/// Owned by the call stack; nothing outlives the fusion call. Two detections
/// whose centers quantize to the same cell are treated as the same control.
#[derive(Debug)]
pub struct OccupancyGrid {
    cell_size: i32,
    cells: HashSet<(i32, i32)>,
}

impl OccupancyGrid {
    /// Create an empty grid with the given cell size.
    pub fn new(cell_size: i32) -> Self {
        Self {
            cell_size,
            cells: HashSet::new(),
        }
    }

    /// Cell key for a center point.
    fn cell(&self, center: Point) -> (i32, i32) {
        (
            center.x.div_euclid(self.cell_size),
            center.y.div_euclid(self.cell_size),
        )
    }

    /// Claim the cell for a center point.
    ///
    /// Returns true if the cell was free, false if an earlier detection
    /// already holds it.
    pub fn claim(&mut self, center: Point) -> bool {
        self.cells.insert(self.cell(center))
    }
}

/// Merge detector outputs in priority order into the final element list.
///
/// `sources` is the explicitly ordered list of `(source label, detections)`
/// pairs; earlier sources win dedup conflicts. One occupancy grid covers the
/// whole call, so duplicates within a single source collapse too. Accepted
/// elements receive 1-based sequential ids and defaults for every field the
/// detector left unset.
pub fn fuse(
    sources: Vec<(&'static str, Vec<RawDetection>)>,
    settings: &FusionSettings,
) -> Vec<DetectedElement> {
    let mut grid = OccupancyGrid::new(settings.cell_size);
    let mut elements = Vec::new();

    for (source, detections) in sources {
        let mut dropped = 0usize;
        for detection in detections {
            let center = detection.effective_center();
            if !grid.claim(center) {
                dropped += 1;
                continue;
            }
            elements.push(DetectedElement {
                id: elements.len() as u32 + 1,
                kind: detection.kind,
                bbox: detection.bbox,
                center,
                confidence: detection.confidence.unwrap_or(settings.default_confidence),
                label: String::new(),
                interactable: true,
            });
        }
        if dropped > 0 {
            tracing::debug!(source, dropped, "dropped duplicate detections");
        }
    }

    elements
}
