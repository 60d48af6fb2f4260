//! WASM bindings for the offset operation.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! import { apply_offset, JsImageTensor } from '@image-offset/wasm';
//!
//! const image = new JsImageTensor(width, height, 4, rgbaFloats);
//! const result = apply_offset(
//!   { offset_x: 32, offset_y: -16, wrap_around: 'On', fill_color: '0,0,0', invert_mask_output: 'No' },
//!   image,
//!   undefined,
//! );
//! console.log(result.info);
//! ```

use std::str::FromStr;

use crate::types::{JsImageTensor, JsMaskTensor};
use image_offset_core::{FillColor, OffsetError, OffsetOutput, OffsetParams};
use wasm_bindgen::prelude::*;

/// Result of an offset operation.
#[wasm_bindgen]
#[derive(Debug)]
pub struct JsOffsetResult {
    image: JsImageTensor,
    mask: JsMaskTensor,
    offset_x: i32,
    offset_y: i32,
    info: String,
}

#[wasm_bindgen]
impl JsOffsetResult {
    /// Processed RGB image (a copy).
    #[wasm_bindgen(getter)]
    pub fn image(&self) -> JsImageTensor {
        self.image.clone()
    }

    /// Processed mask (a copy).
    #[wasm_bindgen(getter)]
    pub fn mask(&self) -> JsMaskTensor {
        self.mask.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn offset_x(&self) -> i32 {
        self.offset_x
    }

    #[wasm_bindgen(getter)]
    pub fn offset_y(&self) -> i32 {
        self.offset_y
    }

    #[wasm_bindgen(getter)]
    pub fn info(&self) -> String {
        self.info.clone()
    }
}

impl From<OffsetOutput> for JsOffsetResult {
    fn from(out: OffsetOutput) -> Self {
        Self {
            image: JsImageTensor::from_core(out.image),
            mask: JsMaskTensor::from_core(out.mask),
            offset_x: out.offset_x,
            offset_y: out.offset_y,
            info: out.info,
        }
    }
}

/// Shift an image and/or mask.
///
/// # Arguments
///
/// * `params` - Object with `offset_x`, `offset_y`, `wrap_around` ("Off" | "On"),
///   `fill_color` and `invert_mask_output` ("No" | "Yes"); missing fields use defaults
/// * `image` - Optional RGB/RGBA image
/// * `mask` - Optional mask
///
/// # Errors
///
/// Returns an error if `params` cannot be deserialized or a tensor is malformed.
/// An unparseable `fill_color` is not an error: a console warning is logged and
/// transparent black is used.
#[wasm_bindgen]
pub fn apply_offset(
    params: JsValue,
    image: Option<JsImageTensor>,
    mask: Option<JsMaskTensor>,
) -> Result<JsOffsetResult, JsValue> {
    let params: OffsetParams = serde_wasm_bindgen::from_value(params)
        .map_err(|e| JsValue::from_str(&format!("Invalid offset params: {}", e)))?;

    if let Err(e) = FillColor::from_str(&params.fill_color) {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "fill_color {:?} not understood ({}), using transparent black",
            params.fill_color, e
        )));
    }

    run_offset(&params, image, mask).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a fill color string into `[r, g, b, a]` (transparent black on failure).
#[wasm_bindgen]
pub fn parse_fill_color(color: &str) -> Vec<u8> {
    let c = image_offset_core::parse_fill_color(color);
    vec![c.r, c.g, c.b, c.a]
}

/// Run the core operation on wrapper types.
pub(crate) fn run_offset(
    params: &OffsetParams,
    image: Option<JsImageTensor>,
    mask: Option<JsMaskTensor>,
) -> Result<JsOffsetResult, OffsetError> {
    let image = image.map(JsImageTensor::into_core);
    let mask = mask.map(JsMaskTensor::into_core);
    image_offset_core::apply_offset(params, image.as_ref(), mask.as_ref()).map(JsOffsetResult::from)
}

/// Tests for offset bindings.
///
/// Note: `apply_offset` takes a `JsValue`, which only works on wasm32 targets.
/// These tests go through `run_offset`, which is the same code path after
/// parameter deserialization.
#[cfg(test)]
mod tests {
    use super::*;
    use image_offset_core::{MaskInversion, WrapMode};

    fn test_image(width: u32, height: u32) -> JsImageTensor {
        let data = (0..width * height * 3)
            .map(|i| (i % 256) as f32 / 255.0)
            .collect();
        JsImageTensor::new(width, height, 3, data)
    }

    #[test]
    fn test_no_input() {
        let result = run_offset(&OffsetParams::new(3, 4), None, None).unwrap();
        assert_eq!(result.image().shape(), vec![1, 64, 64, 3]);
        assert_eq!(result.mask().shape(), vec![1, 64, 64]);
        assert_eq!(result.offset_x(), 3);
        assert_eq!(result.offset_y(), 4);
        assert_eq!(result.info(), "No Image or Mask Input");
    }

    #[test]
    fn test_image_only() {
        let params = OffsetParams {
            offset_x: 1,
            wrap_around: WrapMode::On,
            invert_mask_output: MaskInversion::Yes,
            ..OffsetParams::default()
        };
        let result = run_offset(&params, Some(test_image(8, 4)), None).unwrap();

        assert_eq!(result.image().shape(), vec![1, 4, 8, 3]);
        assert_eq!(result.image().channels(), 3);
        // Synthesized mask, inverted for output
        assert!(result.mask().data().iter().all(|&v| v == 0.0));
        assert_eq!(
            result.info(),
            "Offset: (1, 0), Size: 8x4, Wrapped: On, Mask Output Inverted: Yes"
        );
    }

    #[test]
    fn test_mask_resized_to_image() {
        let mask = JsMaskTensor::new(2, 2, vec![0.0; 4]);
        let result =
            run_offset(&OffsetParams::default(), Some(test_image(6, 6)), Some(mask)).unwrap();
        assert_eq!(result.mask().shape(), vec![1, 6, 6]);
        assert!(result.mask().data().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_malformed_image_errors() {
        let bad = JsImageTensor::new(4, 4, 3, vec![0.0; 10]);
        let err = run_offset(&OffsetParams::default(), Some(bad), None).unwrap_err();
        assert!(matches!(err, OffsetError::InvalidImage(_)));
    }

    #[test]
    fn test_parse_fill_color_binding() {
        assert_eq!(parse_fill_color("ff000080"), vec![255, 0, 0, 128]);
        assert_eq!(parse_fill_color("10,20,30"), vec![10, 20, 30, 255]);
        assert_eq!(parse_fill_color("bogus"), vec![0, 0, 0, 0]);
    }
}
