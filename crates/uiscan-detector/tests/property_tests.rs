//! Property-based tests for element detection.
//!
//! Uses proptest to generate random inputs and verify detector invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use uiscan_detector::testing::Canvas;
use uiscan_detector::{
    ColorRegionDetector, DetectionPipeline, EdgeBoxDetector, PixelDetector, SymbolDetector,
};

/// Random canvas dimensions within reasonable bounds.
fn canvas_dimensions() -> impl Strategy<Value = (u32, u32)> {
    (1u32..96, 1u32..96)
}

/// A random filled rectangle, positions and sizes as fractions of the canvas.
fn rect_spec() -> impl Strategy<Value = (f32, f32, f32, f32, [u8; 3])> {
    (
        0.0f32..1.0,
        0.0f32..1.0,
        0.05f32..0.9,
        0.05f32..0.9,
        prop::array::uniform3(any::<u8>()),
    )
}

/// Compose a canvas from a background color and up to four rectangles.
fn build_canvas(
    (width, height): (u32, u32),
    background: [u8; 3],
    rects: &[(f32, f32, f32, f32, [u8; 3])],
) -> Canvas {
    let mut canvas = Canvas::new(width, height, background);
    for &(fx, fy, fw, fh, color) in rects {
        let x = (fx * width as f32) as u32;
        let y = (fy * height as f32) as u32;
        let w = ((fw * width as f32) as u32).max(1);
        let h = ((fh * height as f32) as u32).max(1);
        canvas.fill_rect(x, y, w, h, color);
    }
    canvas
}

proptest! {
    /// Individual detectors never panic on any canvas.
    #[test]
    fn detectors_never_panic(
        dims in canvas_dimensions(),
        background in prop::array::uniform3(any::<u8>()),
        rects in prop::collection::vec(rect_spec(), 0..4)
    ) {
        let image = build_canvas(dims, background, &rects).into_buffer();

        let detectors: Vec<Box<dyn PixelDetector>> = vec![
            Box::new(ColorRegionDetector::new()),
            Box::new(EdgeBoxDetector::new()),
            Box::new(SymbolDetector::new()),
        ];
        for detector in &detectors {
            let _ = detector.detect(&image);
        }
    }

    /// Pipeline output invariants hold on arbitrary inputs: valid boxes,
    /// centers inside boxes, contiguous ids, distinct dedup cells.
    #[test]
    fn pipeline_invariants_hold(
        dims in canvas_dimensions(),
        background in prop::array::uniform3(any::<u8>()),
        rects in prop::collection::vec(rect_spec(), 0..4)
    ) {
        let image = build_canvas(dims, background, &rects).into_buffer();
        let elements = DetectionPipeline::standard().detect(&image);

        for (index, element) in elements.iter().enumerate() {
            prop_assert_eq!(element.id, index as u32 + 1);
            prop_assert!(element.bbox.x1 < element.bbox.x2);
            prop_assert!(element.bbox.y1 < element.bbox.y2);
            prop_assert!(element.bbox.contains(&element.center));
            prop_assert!((0.0..=1.0).contains(&element.confidence));
        }

        let cells: HashSet<(i32, i32)> = elements
            .iter()
            .map(|e| (e.center.x.div_euclid(10), e.center.y.div_euclid(10)))
            .collect();
        prop_assert_eq!(cells.len(), elements.len());
    }

    /// Detection is a pure function of the input: repeated runs agree.
    #[test]
    fn pipeline_is_deterministic(
        dims in canvas_dimensions(),
        background in prop::array::uniform3(any::<u8>()),
        rects in prop::collection::vec(rect_spec(), 0..3)
    ) {
        let image = build_canvas(dims, background, &rects).into_buffer();
        let pipeline = DetectionPipeline::standard();
        prop_assert_eq!(pipeline.detect(&image), pipeline.detect(&image));
    }
}
