//! Immutable pixel buffers.

use uiscan_core::{Error, Result};

/// Immutable RGB pixel buffer, row-major, origin top-left.
///
/// Owned by the caller of the detection pipeline; every detector takes it by
/// shared reference and none of them mutate it.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    /// Interleaved RGB samples, 3 bytes per pixel
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a buffer from interleaved RGB bytes.
    ///
    /// Returns an error if the dimensions are zero or the byte length does
    /// not match `width * height * 3`.
    pub fn from_rgb(data: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidBuffer(format!(
                "dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(Error::InvalidBuffer(format!(
                "expected {expected} bytes for {width}x{height} RGB, got {}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Create a buffer from a decoded image, converting to RGB8.
    pub fn from_image(image: &image::DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        Self {
            data: rgb.into_raw(),
            width,
            height,
        }
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGB sample at a position.
    ///
    /// Returns None if the position is out of bounds.
    pub fn rgb(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x < self.width && y < self.height {
            let idx = (y as usize * self.width as usize + x as usize) * 3;
            Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
        } else {
            None
        }
    }

    /// Raw interleaved RGB bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Convert to a grayscale plane using Rec. 601 luma weights.
    pub fn to_gray(&self) -> GrayBuffer {
        let luma = self
            .data
            .chunks_exact(3)
            .map(|px| 0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32)
            .collect();
        GrayBuffer {
            data: luma,
            width: self.width,
            height: self.height,
        }
    }
}

/// Single-channel f32 plane, row-major, same origin as `PixelBuffer`.
#[derive(Debug, Clone)]
pub struct GrayBuffer {
    data: Vec<f32>,
    width: u32,
    height: u32,
}

impl GrayBuffer {
    /// Internal constructor for planes whose shape is correct by construction.
    pub(crate) fn from_raw(data: Vec<f32>, width: u32, height: u32) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            data,
            width,
            height,
        }
    }

    /// Create a plane from raw samples.
    ///
    /// Returns an error if the dimensions are zero or the sample count does
    /// not match `width * height`.
    pub fn from_samples(data: Vec<f32>, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidBuffer(format!(
                "dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::InvalidBuffer(format!(
                "expected {expected} samples for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Plane width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Plane height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample at a position.
    ///
    /// Returns None if the position is out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.data[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Raw samples.
    pub fn data(&self) -> &[f32] {
        &self.data
    }
}
