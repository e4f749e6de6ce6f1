//! Color-region detector matching fixed palette signatures.

use uiscan_core::{BoundingBox, ElementKind};
use uiscan_raster::{connected_components, BitMask, PixelBuffer};

use crate::detection::{PixelDetector, RawDetection};

/// How the boxes matched by a signature are classified.
#[derive(Debug, Clone, Copy)]
enum ClassifyRule {
    /// Every accepted box gets this kind.
    Kind(ElementKind),
    /// Accent-colored widgets share one palette color across control types;
    /// the box's own shape disambiguates.
    AccentShape,
    /// Titlebar close button; derives synthetic minimize/maximize boxes to
    /// its left.
    CaptionClose,
}

/// A palette rule: target color, per-channel tolerance, size gates, and the
/// classification applied to surviving component boxes.
#[derive(Debug, Clone, Copy)]
struct ColorSignature {
    name: &'static str,
    target: [u8; 3],
    tolerance: u8,
    min_width: i32,
    max_width: i32,
    min_height: i32,
    max_height: i32,
    rule: ClassifyRule,
}

/// Fixed signature table, consulted in order on every detection call.
///
/// The order is load-bearing: earlier entries emit earlier, and the fusion
/// stage lets the first claimant of a dedup cell win, so specific signatures
/// sit above the generic button fills. The max-size gates exist to reject
/// whole-window matches on near-uniform themes.
const SIGNATURES: [ColorSignature; 14] = [
    ColorSignature {
        name: "caption-close",
        target: [232, 17, 35],
        tolerance: 40,
        min_width: 20,
        max_width: 60,
        min_height: 15,
        max_height: 50,
        rule: ClassifyRule::CaptionClose,
    },
    ColorSignature {
        name: "accent-widget",
        target: [0, 120, 215],
        tolerance: 40,
        min_width: 8,
        max_width: 200,
        min_height: 6,
        max_height: 80,
        rule: ClassifyRule::AccentShape,
    },
    ColorSignature {
        name: "toggle-on",
        target: [16, 137, 62],
        tolerance: 24,
        min_width: 30,
        max_width: 64,
        min_height: 14,
        max_height: 30,
        rule: ClassifyRule::Kind(ElementKind::Toggle),
    },
    ColorSignature {
        name: "toggle-off",
        target: [118, 118, 118],
        tolerance: 8,
        min_width: 30,
        max_width: 64,
        min_height: 14,
        max_height: 30,
        rule: ClassifyRule::Kind(ElementKind::Toggle),
    },
    ColorSignature {
        name: "checkbox-frame",
        target: [102, 102, 102],
        tolerance: 10,
        min_width: 10,
        max_width: 26,
        min_height: 10,
        max_height: 26,
        rule: ClassifyRule::Kind(ElementKind::Checkbox),
    },
    ColorSignature {
        name: "icon-glyph",
        target: [64, 64, 64],
        tolerance: 12,
        min_width: 8,
        max_width: 24,
        min_height: 8,
        max_height: 24,
        rule: ClassifyRule::Kind(ElementKind::Icon),
    },
    ColorSignature {
        name: "scrollbar-thumb",
        target: [194, 194, 194],
        tolerance: 6,
        min_width: 6,
        max_width: 22,
        min_height: 24,
        max_height: 600,
        rule: ClassifyRule::Kind(ElementKind::Scrollbar),
    },
    ColorSignature {
        name: "scrollbar-track",
        target: [205, 205, 205],
        tolerance: 6,
        min_width: 6,
        max_width: 22,
        min_height: 40,
        max_height: 2000,
        rule: ClassifyRule::Kind(ElementKind::Scrollbar),
    },
    ColorSignature {
        name: "slider-track",
        target: [158, 158, 158],
        tolerance: 8,
        min_width: 60,
        max_width: 400,
        min_height: 2,
        max_height: 10,
        rule: ClassifyRule::Kind(ElementKind::Slider),
    },
    ColorSignature {
        name: "tab-strip",
        target: [243, 243, 243],
        tolerance: 4,
        min_width: 60,
        max_width: 240,
        min_height: 28,
        max_height: 48,
        rule: ClassifyRule::Kind(ElementKind::Tab),
    },
    ColorSignature {
        name: "textfield-light",
        target: [255, 255, 255],
        tolerance: 3,
        min_width: 80,
        max_width: 600,
        min_height: 18,
        max_height: 50,
        rule: ClassifyRule::Kind(ElementKind::TextField),
    },
    ColorSignature {
        name: "textfield-dark",
        target: [30, 30, 30],
        tolerance: 6,
        min_width: 80,
        max_width: 600,
        min_height: 18,
        max_height: 50,
        rule: ClassifyRule::Kind(ElementKind::TextField),
    },
    ColorSignature {
        name: "button-light",
        target: [225, 225, 225],
        tolerance: 12,
        min_width: 20,
        max_width: 300,
        min_height: 12,
        max_height: 80,
        rule: ClassifyRule::Kind(ElementKind::Button),
    },
    ColorSignature {
        name: "button-dark",
        target: [51, 51, 51],
        tolerance: 10,
        min_width: 20,
        max_width: 300,
        min_height: 12,
        max_height: 80,
        rule: ClassifyRule::Kind(ElementKind::Button),
    },
];

/// Detector matching fixed palette signatures with per-channel tolerance,
/// classifying connected components by signature and geometry.
pub struct ColorRegionDetector {
    signatures: &'static [ColorSignature],
}

impl ColorRegionDetector {
    /// Create a detector over the built-in signature table.
    pub fn new() -> Self {
        Self {
            signatures: &SIGNATURES,
        }
    }

    /// Mask of pixels within per-channel tolerance of the signature color.
    fn signature_mask(image: &PixelBuffer, signature: &ColorSignature) -> BitMask {
        let width = image.width();
        let tolerance = signature.tolerance as i16;
        let mut mask = BitMask::new(width, image.height());

        for (i, px) in image.data().chunks_exact(3).enumerate() {
            let hit = (0..3).all(|c| {
                (px[c] as i16 - signature.target[c] as i16).abs() <= tolerance
            });
            if hit {
                let x = (i as u32) % width;
                let y = (i as u32) / width;
                mask.set(x, y, true);
            }
        }

        mask
    }

    /// Classify an accepted component box, or reject it.
    fn classify(signature: &ColorSignature, bbox: BoundingBox) -> Option<ElementKind> {
        match signature.rule {
            ClassifyRule::Kind(kind) => Some(kind),
            ClassifyRule::CaptionClose => Some(ElementKind::Button),
            ClassifyRule::AccentShape => {
                let (w, h) = (bbox.width(), bbox.height());
                if w <= 24 && h <= 24 {
                    Some(ElementKind::Icon)
                } else if h <= 24 && w > 50 {
                    Some(ElementKind::Slider)
                } else if w <= 200 && h <= 80 && bbox.area() < 15_000 {
                    Some(ElementKind::Button)
                } else {
                    None
                }
            }
        }
    }

    /// Synthetic minimize/maximize boxes for an accepted close-button box.
    ///
    /// Maximize sits immediately left of the close box, minimize left of
    /// that, both at the close box's size. Emitted only when the minimize
    /// box stays on-canvas; an off-canvas pair is dropped, not clamped, so a
    /// truncated titlebar never yields a fabricated location.
    fn caption_synthetics(close: BoundingBox) -> Option<[BoundingBox; 2]> {
        let w = close.width();
        let minimize = BoundingBox::new(close.x1 - 2 * w, close.y1, close.x1 - w, close.y2);
        if minimize.x1 < 0 {
            return None;
        }
        let maximize = BoundingBox::new(close.x1 - w, close.y1, close.x1, close.y2);
        Some([minimize, maximize])
    }
}

impl Default for ColorRegionDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelDetector for ColorRegionDetector {
    fn name(&self) -> &'static str {
        "color-region"
    }

    fn detect(&self, image: &PixelBuffer) -> Vec<RawDetection> {
        let mut results = Vec::new();

        for signature in self.signatures {
            let mask = Self::signature_mask(image, signature);
            let mut accepted = 0usize;

            for bbox in connected_components(&mask) {
                let (w, h) = (bbox.width(), bbox.height());
                if w < signature.min_width
                    || w > signature.max_width
                    || h < signature.min_height
                    || h > signature.max_height
                {
                    continue;
                }
                let Some(kind) = Self::classify(signature, bbox) else {
                    continue;
                };

                results.push(RawDetection::new(kind, bbox).with_center(bbox.center()));
                accepted += 1;

                if matches!(signature.rule, ClassifyRule::CaptionClose) {
                    if let Some(synthetics) = Self::caption_synthetics(bbox) {
                        for synthetic in synthetics {
                            results.push(
                                RawDetection::new(ElementKind::Button, synthetic)
                                    .with_center(synthetic.center()),
                            );
                        }
                    }
                }
            }

            if accepted > 0 {
                tracing::debug!(signature = signature.name, accepted, "signature matched");
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Canvas;
    use uiscan_core::Point;

    #[test]
    fn test_signature_table_gates_consistent() {
        for signature in &SIGNATURES {
            assert!(
                signature.min_width <= signature.max_width,
                "{} width gate inverted",
                signature.name
            );
            assert!(
                signature.min_height <= signature.max_height,
                "{} height gate inverted",
                signature.name
            );
            assert!(signature.min_width > 0 && signature.min_height > 0);
        }
    }

    #[test]
    fn test_flat_gray_rectangle_detected_as_button() {
        let mut canvas = Canvas::new(200, 100, [0, 0, 0]);
        canvas.fill_rect(23, 17, 60, 30, [225, 225, 225]);
        let image = canvas.into_buffer();

        let detected = ColorRegionDetector::new().detect(&image);

        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].kind, ElementKind::Button);
        assert_eq!(detected[0].bbox, BoundingBox::new(23, 17, 83, 47));
        assert_eq!(detected[0].center, Some(Point::new(53, 32)));
    }

    #[test]
    fn test_tolerance_excludes_distant_colors() {
        // 20 gray levels below the button-light target, outside tolerance 12.
        let mut canvas = Canvas::new(200, 100, [0, 0, 0]);
        canvas.fill_rect(23, 17, 60, 30, [205, 205, 205]);
        let image = canvas.into_buffer();

        let detected = ColorRegionDetector::new().detect(&image);
        // Matches the scrollbar-track signature instead, but fails its
        // width gate (60 > 22), so nothing comes out.
        assert!(detected.is_empty());
    }

    #[test]
    fn test_close_button_emits_caption_synthetics() {
        let mut canvas = Canvas::new(300, 100, [0, 0, 0]);
        canvas.fill_rect(120, 20, 40, 40, [232, 17, 35]);
        let image = canvas.into_buffer();

        let detected = ColorRegionDetector::new().detect(&image);

        assert_eq!(detected.len(), 3);
        for detection in &detected {
            assert_eq!(detection.kind, ElementKind::Button);
        }
        assert_eq!(detected[0].bbox, BoundingBox::new(120, 20, 160, 60)); // close
        assert_eq!(detected[1].bbox, BoundingBox::new(40, 20, 80, 60)); // minimize
        assert_eq!(detected[2].bbox, BoundingBox::new(80, 20, 120, 60)); // maximize
    }

    #[test]
    fn test_close_button_near_left_edge_drops_synthetics() {
        // Minimize box would start at 60 - 80 = -20: off-canvas, dropped.
        let mut canvas = Canvas::new(300, 100, [0, 0, 0]);
        canvas.fill_rect(60, 20, 40, 40, [232, 17, 35]);
        let image = canvas.into_buffer();

        let detected = ColorRegionDetector::new().detect(&image);

        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].bbox, BoundingBox::new(60, 20, 100, 60));
    }

    #[test]
    fn test_close_button_at_exact_synthetic_limit() {
        // Minimize box starts at exactly 0: still on-canvas, kept.
        let mut canvas = Canvas::new(300, 100, [0, 0, 0]);
        canvas.fill_rect(80, 20, 40, 40, [232, 17, 35]);
        let image = canvas.into_buffer();

        let detected = ColorRegionDetector::new().detect(&image);
        assert_eq!(detected.len(), 3);
        assert_eq!(detected[1].bbox, BoundingBox::new(0, 20, 40, 60));
    }

    #[test]
    fn test_uniform_canvas_rejected_by_max_size() {
        let image = Canvas::new(400, 400, [225, 225, 225]).into_buffer();
        let detected = ColorRegionDetector::new().detect(&image);
        assert!(detected.is_empty());
    }

    #[test]
    fn test_accent_shape_small_square_is_icon() {
        let mut canvas = Canvas::new(100, 100, [0, 0, 0]);
        canvas.fill_rect(10, 10, 20, 20, [0, 120, 215]);
        let image = canvas.into_buffer();

        let detected = ColorRegionDetector::new().detect(&image);
        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].kind, ElementKind::Icon);
    }

    #[test]
    fn test_accent_shape_wide_strip_is_slider() {
        let mut canvas = Canvas::new(200, 100, [0, 0, 0]);
        canvas.fill_rect(10, 10, 80, 16, [0, 120, 215]);
        let image = canvas.into_buffer();

        let detected = ColorRegionDetector::new().detect(&image);
        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].kind, ElementKind::Slider);
    }

    #[test]
    fn test_accent_shape_mid_block_is_button() {
        let mut canvas = Canvas::new(200, 100, [0, 0, 0]);
        canvas.fill_rect(10, 10, 100, 40, [0, 120, 215]);
        let image = canvas.into_buffer();

        let detected = ColorRegionDetector::new().detect(&image);
        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].kind, ElementKind::Button);
    }

    #[test]
    fn test_accent_shape_oversized_area_rejected() {
        // Passes the signature size gate but the area branch: 190 x 79 has
        // area 15010, over the button cutoff, and is neither icon nor slider.
        let mut canvas = Canvas::new(300, 150, [0, 0, 0]);
        canvas.fill_rect(10, 10, 190, 79, [0, 120, 215]);
        let image = canvas.into_buffer();

        let detected = ColorRegionDetector::new().detect(&image);
        assert!(detected.is_empty());
    }

    #[test]
    fn test_diagonal_regions_stay_separate() {
        // Two same-color squares touching only at a corner must not merge.
        let mut canvas = Canvas::new(200, 200, [0, 0, 0]);
        canvas.fill_rect(20, 20, 30, 30, [225, 225, 225]);
        canvas.fill_rect(50, 50, 30, 30, [225, 225, 225]);
        let image = canvas.into_buffer();

        let detected = ColorRegionDetector::new().detect(&image);
        assert_eq!(detected.len(), 2);
        assert_eq!(detected[0].bbox, BoundingBox::new(20, 20, 50, 50));
        assert_eq!(detected[1].bbox, BoundingBox::new(50, 50, 80, 80));
    }

    #[test]
    fn test_no_match_is_not_an_error() {
        let image = Canvas::new(64, 64, [1, 2, 3]).into_buffer();
        let detected = ColorRegionDetector::new().detect(&image);
        assert!(detected.is_empty());
    }
}
