//! Element types for detected UI controls.

use serde::{Deserialize, Serialize};

use crate::{BoundingBox, Point};

/// Kind of UI control a detection represents.
///
/// Fixed at detection time and never reclassified downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Clickable button
    Button,
    /// Small pictographic control
    Icon,
    /// Horizontal value slider
    Slider,
    /// Vertical or horizontal scrollbar
    Scrollbar,
    /// Tab header
    Tab,
    /// Editable text field
    TextField,
    /// Checkbox
    Checkbox,
    /// On/off toggle switch
    Toggle,
}

impl ElementKind {
    /// Lowercase wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Button => "button",
            ElementKind::Icon => "icon",
            ElementKind::Slider => "slider",
            ElementKind::Scrollbar => "scrollbar",
            ElementKind::Tab => "tab",
            ElementKind::TextField => "textfield",
            ElementKind::Checkbox => "checkbox",
            ElementKind::Toggle => "toggle",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully assembled UI element detection.
///
/// Produced only by the fusion stage; detectors emit raw detections without
/// ids. Serializes as
/// `{"id", "type", "bbox": [x1,y1,x2,y2], "center": [x,y], "confidence",
/// "label", "interactable"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedElement {
    /// Sequential id, 1-based in fusion acceptance order
    pub id: u32,
    /// Kind of control
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Bounding box in image coordinates
    pub bbox: BoundingBox,
    /// Center point, always within the bounding box
    pub center: Point,
    /// Detection confidence in [0, 1]
    pub confidence: f32,
    /// Optional text label (empty when unknown)
    pub label: String,
    /// Whether the element is assumed clickable
    pub interactable: bool,
}
