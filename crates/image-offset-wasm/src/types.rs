//! WASM-compatible wrapper types for tensors.
//!
//! These wrap the core tensor types and expose them to JavaScript as
//! dimensions plus a `Float32Array` of normalized values.

use image_offset_core::{ImageTensor, MaskTensor};
use wasm_bindgen::prelude::*;

/// An RGB or RGBA image for JavaScript.
///
/// # Memory Management
///
/// The values live in WASM memory. `data()` copies them out to a
/// `Float32Array`. Passing a tensor by value into `apply_offset` moves it
/// into WASM and invalidates the JavaScript handle.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsImageTensor {
    width: u32,
    height: u32,
    channels: u32,
    data: Vec<f32>,
}

#[wasm_bindgen]
impl JsImageTensor {
    /// Create a new JsImageTensor.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `channels` - 3 for RGB, 4 for RGBA
    /// * `data` - Interleaved values in `[0, 1]`, row-major order
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, channels: u32, data: Vec<f32>) -> JsImageTensor {
        JsImageTensor {
            width,
            height,
            channels,
            data,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Number of float values (width * height * channels when well-formed)
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.data.len()
    }

    /// Returns the values as a Float32Array (a copy).
    pub fn data(&self) -> Vec<f32> {
        self.data.clone()
    }

    /// Host-facing shape `[1, height, width, channels]`.
    pub fn shape(&self) -> Vec<u32> {
        vec![1, self.height, self.width, self.channels]
    }
}

impl JsImageTensor {
    pub(crate) fn from_core(tensor: ImageTensor) -> Self {
        Self {
            width: tensor.width,
            height: tensor.height,
            channels: tensor.channels,
            data: tensor.data,
        }
    }

    /// Convert to a core tensor, moving the data.
    pub(crate) fn into_core(self) -> ImageTensor {
        ImageTensor {
            width: self.width,
            height: self.height,
            channels: self.channels,
            data: self.data,
        }
    }
}

/// A single-channel mask for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsMaskTensor {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

#[wasm_bindgen]
impl JsMaskTensor {
    /// Create a new JsMaskTensor.
    ///
    /// # Arguments
    /// * `width` - Mask width in pixels
    /// * `height` - Mask height in pixels
    /// * `data` - Values in `[0, 1]`, row-major order
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, data: Vec<f32>) -> JsMaskTensor {
        JsMaskTensor {
            width,
            height,
            data,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.data.len()
    }

    /// Returns the values as a Float32Array (a copy).
    pub fn data(&self) -> Vec<f32> {
        self.data.clone()
    }

    /// Host-facing shape `[1, height, width]`.
    pub fn shape(&self) -> Vec<u32> {
        vec![1, self.height, self.width]
    }
}

impl JsMaskTensor {
    pub(crate) fn from_core(tensor: MaskTensor) -> Self {
        Self {
            width: tensor.width,
            height: tensor.height,
            data: tensor.data,
        }
    }

    /// Convert to a core tensor, moving the data.
    pub(crate) fn into_core(self) -> MaskTensor {
        MaskTensor {
            width: self.width,
            height: self.height,
            data: self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_image_tensor_creation() {
        let img = JsImageTensor::new(4, 2, 3, vec![0.5; 24]);
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 2);
        assert_eq!(img.channels(), 3);
        assert_eq!(img.length(), 24);
        assert_eq!(img.shape(), vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_js_image_tensor_data() {
        let data = vec![0.0, 0.25, 0.5, 1.0];
        let img = JsImageTensor::new(1, 1, 4, data.clone());
        assert_eq!(img.data(), data);
    }

    #[test]
    fn test_image_core_roundtrip() {
        let img = JsImageTensor::new(2, 1, 3, vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
        let core = img.clone().into_core();
        assert_eq!(core.width, 2);
        assert_eq!(core.channels, 3);
        assert!(core.validate().is_ok());

        let back = JsImageTensor::from_core(core);
        assert_eq!(back.data(), img.data());
    }

    #[test]
    fn test_js_mask_tensor_creation() {
        let mask = JsMaskTensor::new(3, 2, vec![1.0; 6]);
        assert_eq!(mask.width(), 3);
        assert_eq!(mask.height(), 2);
        assert_eq!(mask.length(), 6);
        assert_eq!(mask.shape(), vec![1, 2, 3]);
    }

    #[test]
    fn test_mask_core_roundtrip() {
        let mask = JsMaskTensor::new(2, 2, vec![0.0, 0.25, 0.75, 1.0]);
        let core = mask.clone().into_core();
        assert!(core.validate().is_ok());
        assert_eq!(JsMaskTensor::from_core(core).data(), mask.data());
    }

    #[test]
    fn test_malformed_tensor_detected_by_core() {
        let img = JsImageTensor::new(2, 2, 3, vec![0.0; 3]);
        assert!(img.into_core().validate().is_err());
    }
}
