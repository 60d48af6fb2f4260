//! Tensor types and their conversions to `image` crate buffers.

use image::{GrayImage, Luma, RgbImage, RgbaImage};
use thiserror::Error;

use super::{normalize, quantize};

/// Errors for malformed tensors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TensorError {
    /// The data buffer does not match the declared dimensions.
    #[error("Tensor data length mismatch: expected {expected} values ({width}x{height}x{channels}), got {actual}")]
    DataLengthMismatch {
        width: u32,
        height: u32,
        channels: u32,
        expected: usize,
        actual: usize,
    },

    /// Images must have 3 (RGB) or 4 (RGBA) channels.
    #[error("Unsupported channel count: {0} (expected 3 or 4)")]
    UnsupportedChannels(u32),

    /// The 8-bit buffer could not be built from the tensor.
    #[error("Failed to build {0} pixel buffer")]
    BufferConversion(&'static str),
}

fn expected_len(width: u32, height: u32, channels: u32) -> usize {
    width as usize * height as usize * channels as usize
}

/// An RGB or RGBA image with normalized float channels.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Channels per pixel (3 or 4).
    pub channels: u32,
    /// Interleaved channel values in row-major order, normally in `[0, 1]`.
    /// Length should be width * height * channels.
    pub data: Vec<f32>,
}

impl ImageTensor {
    /// Create a tensor, checking the channel count and buffer length.
    pub fn new(
        width: u32,
        height: u32,
        channels: u32,
        data: Vec<f32>,
    ) -> Result<Self, TensorError> {
        let tensor = Self {
            width,
            height,
            channels,
            data,
        };
        tensor.validate()?;
        Ok(tensor)
    }

    /// Create an all-zero (black) tensor.
    pub fn zeros(width: u32, height: u32, channels: u32) -> Self {
        Self {
            width,
            height,
            channels,
            data: vec![0.0; expected_len(width, height, channels)],
        }
    }

    /// Check the channel count and buffer length.
    pub fn validate(&self) -> Result<(), TensorError> {
        if self.channels != 3 && self.channels != 4 {
            return Err(TensorError::UnsupportedChannels(self.channels));
        }
        let expected = expected_len(self.width, self.height, self.channels);
        if self.data.len() != expected {
            return Err(TensorError::DataLengthMismatch {
                width: self.width,
                height: self.height,
                channels: self.channels,
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Host-facing shape: `[batch, height, width, channels]` with a batch of one.
    pub fn shape(&self) -> [usize; 4] {
        [
            1,
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        ]
    }

    /// Channel values of the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> &[f32] {
        let c = self.channels as usize;
        let idx = (y as usize * self.width as usize + x as usize) * c;
        &self.data[idx..idx + c]
    }

    /// Quantize to an 8-bit RGBA buffer. RGB input gets an opaque alpha.
    pub fn to_rgba_image(&self) -> Result<RgbaImage, TensorError> {
        self.validate()?;

        let pixels: Vec<u8> = match self.channels {
            4 => self.data.iter().map(|&v| quantize(v)).collect(),
            _ => self
                .data
                .chunks_exact(3)
                .flat_map(|px| [quantize(px[0]), quantize(px[1]), quantize(px[2]), 255])
                .collect(),
        };

        RgbaImage::from_raw(self.width, self.height, pixels)
            .ok_or(TensorError::BufferConversion("RGBA"))
    }

    /// Create an RGB tensor from an 8-bit RGB buffer.
    pub fn from_rgb_image(img: &RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            channels: 3,
            data: img.as_raw().iter().map(|&v| normalize(v)).collect(),
        }
    }
}

/// A single-channel mask with normalized float values.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskTensor {
    /// Mask width in pixels.
    pub width: u32,
    /// Mask height in pixels.
    pub height: u32,
    /// Values in row-major order, normally in `[0, 1]`.
    /// Length should be width * height.
    pub data: Vec<f32>,
}

impl MaskTensor {
    /// Create a mask, checking the buffer length.
    pub fn new(width: u32, height: u32, data: Vec<f32>) -> Result<Self, TensorError> {
        let tensor = Self {
            width,
            height,
            data,
        };
        tensor.validate()?;
        Ok(tensor)
    }

    /// Create an all-zero mask.
    pub fn zeros(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0.0)
    }

    /// Create a mask where every value is `value`.
    pub fn filled(width: u32, height: u32, value: f32) -> Self {
        Self {
            width,
            height,
            data: vec![value; expected_len(width, height, 1)],
        }
    }

    /// Check the buffer length.
    pub fn validate(&self) -> Result<(), TensorError> {
        let expected = expected_len(self.width, self.height, 1);
        if self.data.len() != expected {
            return Err(TensorError::DataLengthMismatch {
                width: self.width,
                height: self.height,
                channels: 1,
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Host-facing shape: `[batch, height, width]` with a batch of one.
    pub fn shape(&self) -> [usize; 3] {
        [1, self.height as usize, self.width as usize]
    }

    /// Value at (x, y).
    pub fn value(&self, x: u32, y: u32) -> f32 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Quantize to an 8-bit grayscale buffer.
    pub fn to_gray_image(&self) -> Result<GrayImage, TensorError> {
        self.validate()?;
        let pixels = self.data.iter().map(|&v| quantize(v)).collect();
        GrayImage::from_raw(self.width, self.height, pixels)
            .ok_or(TensorError::BufferConversion("grayscale"))
    }

    /// Create a mask from an 8-bit grayscale buffer.
    pub fn from_gray_image(img: &GrayImage) -> Self {
        Self::from_gray_image_with(img, normalize)
    }

    /// Create a mask from an 8-bit grayscale buffer, mapping each value with `f`.
    pub fn from_gray_image_with(img: &GrayImage, f: impl Fn(u8) -> f32) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.pixels().map(|&Luma([v])| f(v)).collect(),
        }
    }
}
