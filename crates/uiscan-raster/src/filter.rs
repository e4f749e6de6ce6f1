//! Convolution-style filters over grayscale planes.

use crate::buffer::GrayBuffer;

/// Sobel gradient magnitude of a grayscale plane.
///
/// The 1-pixel border ring has no full 3x3 neighborhood and is left at 0, so
/// border samples never count as edges.
pub fn sobel_magnitude(plane: &GrayBuffer) -> GrayBuffer {
    let width = plane.width() as usize;
    let height = plane.height() as usize;
    let src = plane.data();
    let mut out = vec![0.0f32; width * height];

    if width >= 3 && height >= 3 {
        for y in 1..height - 1 {
            for x in 1..width - 1 {
                let at = |dx: isize, dy: isize| -> f32 {
                    src[(y as isize + dy) as usize * width + (x as isize + dx) as usize]
                };
                let gx = at(1, -1) + 2.0 * at(1, 0) + at(1, 1)
                    - at(-1, -1)
                    - 2.0 * at(-1, 0)
                    - at(-1, 1);
                let gy = at(-1, 1) + 2.0 * at(0, 1) + at(1, 1)
                    - at(-1, -1)
                    - 2.0 * at(0, -1)
                    - at(1, -1);
                out[y * width + x] = (gx * gx + gy * gy).sqrt();
            }
        }
    }

    GrayBuffer::from_raw(out, plane.width(), plane.height())
}

/// Local mean of a grayscale plane over a (2*radius + 1)^2 box window.
///
/// Uses a summed-area table so the cost is independent of the radius. Windows
/// are clipped at the borders and normalized by the clipped area, so border
/// means are averages of the pixels actually present.
pub fn box_mean(plane: &GrayBuffer, radius: u32) -> GrayBuffer {
    let width = plane.width() as usize;
    let height = plane.height() as usize;
    let src = plane.data();
    let r = radius as isize;

    // integral[y][x] = sum of src over [0, x) x [0, y)
    let mut integral = vec![0.0f64; (width + 1) * (height + 1)];
    for y in 0..height {
        let mut row_sum = 0.0f64;
        for x in 0..width {
            row_sum += src[y * width + x] as f64;
            integral[(y + 1) * (width + 1) + (x + 1)] =
                integral[y * (width + 1) + (x + 1)] + row_sum;
        }
    }

    let mut out = vec![0.0f32; width * height];
    for y in 0..height {
        let y0 = (y as isize - r).max(0) as usize;
        let y1 = ((y as isize + r + 1) as usize).min(height);
        for x in 0..width {
            let x0 = (x as isize - r).max(0) as usize;
            let x1 = ((x as isize + r + 1) as usize).min(width);
            let sum = integral[y1 * (width + 1) + x1] - integral[y0 * (width + 1) + x1]
                - integral[y1 * (width + 1) + x0]
                + integral[y0 * (width + 1) + x0];
            let area = ((y1 - y0) * (x1 - x0)) as f64;
            out[y * width + x] = (sum / area) as f32;
        }
    }

    GrayBuffer::from_raw(out, plane.width(), plane.height())
}
