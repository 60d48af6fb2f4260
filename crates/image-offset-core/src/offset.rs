//! The offset operation.
//!
//! [`apply_offset`] shifts an optional image and an optional mask by the same
//! offset, wrapping or clipping at the edges, then flattens the image over
//! the fill color.
//!
//! # Mask Conventions
//!
//! A caller-supplied ("connected") mask uses higher values for "more masked".
//! When one is present:
//! - clipped-in mask areas are filled with 255 (fully masked)
//! - the offset mask, inverted, becomes the image alpha
//! - the returned mask is `1 - mask`
//!
//! Without a connected mask but with an image, an all-255 mask is
//! synthesized, clipped-in areas are filled with 0, and the returned mask is
//! the synthesized mask as-is.
//!
//! The `invert_mask_output` toggle is applied after the alpha transfer and
//! before the output conversion above. The two inversions do not commute with
//! the complement, so this order is fixed.

use image::{GrayImage, Luma, RgbaImage};
use thiserror::Error;

use crate::color::{parse_fill_color, FillColor};
use crate::tensor::{normalize, ImageTensor, MaskTensor, TensorError};
use crate::transform::{
    apply_inverted_mask_as_alpha, clip_offset, clip_offset_with_alpha, composite_over_color,
    invert_mask, resize_mask_nearest, wrap_offset,
};
use crate::{MaskInversion, OffsetParams, WrapMode};

/// Info string returned when neither an image nor a mask is supplied.
pub const NO_INPUT_INFO: &str = "No Image or Mask Input";

/// Width and height of the placeholder output when there is no input.
pub const PLACEHOLDER_SIZE: u32 = 64;

/// Errors for malformed inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OffsetError {
    #[error("Invalid image: {0}")]
    InvalidImage(#[source] TensorError),

    #[error("Invalid mask: {0}")]
    InvalidMask(#[source] TensorError),
}

/// Result of an offset operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetOutput {
    /// Processed image, always RGB.
    pub image: ImageTensor,
    /// Processed mask.
    pub mask: MaskTensor,
    /// Echo of the requested horizontal offset.
    pub offset_x: i32,
    /// Echo of the requested vertical offset.
    pub offset_y: i32,
    /// Human-readable summary of the operation.
    pub info: String,
}

impl OffsetOutput {
    /// Placeholder output for calls without image or mask.
    fn placeholder(params: &OffsetParams) -> Self {
        Self {
            image: ImageTensor::zeros(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, 3),
            mask: MaskTensor::zeros(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE),
            offset_x: params.offset_x,
            offset_y: params.offset_y,
            info: NO_INPUT_INFO.to_string(),
        }
    }
}

/// Format the summary string for a completed operation.
pub fn format_info(
    offset_x: i32,
    offset_y: i32,
    width: u32,
    height: u32,
    wrap_around: WrapMode,
    invert_mask_output: MaskInversion,
) -> String {
    format!(
        "Offset: ({}, {}), Size: {}x{}, Wrapped: {}, Mask Output Inverted: {}",
        offset_x, offset_y, width, height, wrap_around, invert_mask_output
    )
}

/// Shift an image and/or mask.
///
/// # Arguments
///
/// * `params` - Offset, wrap mode, fill color and output-mask toggle
/// * `image` - Optional RGB or RGBA image; its size is canonical when present
/// * `mask` - Optional mask; resized (nearest neighbor) to the image size if needed
///
/// # Returns
///
/// The flattened RGB image, the processed mask, the echoed offsets and an
/// info string. With neither input, a 64x64 all-zero image and mask are
/// returned with the info [`NO_INPUT_INFO`].
///
/// # Errors
///
/// Returns an error only if a tensor's data length does not match its
/// dimensions or the image has an unsupported channel count.
pub fn apply_offset(
    params: &OffsetParams,
    image: Option<&ImageTensor>,
    mask: Option<&MaskTensor>,
) -> Result<OffsetOutput, OffsetError> {
    // Normalization
    let rgba = image
        .map(ImageTensor::to_rgba_image)
        .transpose()
        .map_err(OffsetError::InvalidImage)?;
    let input_mask = mask
        .map(MaskTensor::to_gray_image)
        .transpose()
        .map_err(OffsetError::InvalidMask)?;
    let mask_connected = input_mask.is_some();

    let canonical = rgba
        .as_ref()
        .map(|img| img.dimensions())
        .or_else(|| input_mask.as_ref().map(|m| m.dimensions()));
    let Some((width, height)) = canonical else {
        tracing::debug!("no image or mask supplied, returning placeholder");
        return Ok(OffsetOutput::placeholder(params));
    };

    let gray = match input_mask {
        Some(m) => resize_mask_nearest(&m, width, height),
        None => GrayImage::from_pixel(width, height, Luma([255])),
    };

    let dx = params.offset_x;
    let dy = params.offset_y;
    let fill = parse_fill_color(&params.fill_color);

    tracing::debug!(
        width,
        height,
        dx,
        dy,
        wrap = %params.wrap_around,
        mask_connected,
        "applying offset"
    );

    // Offset
    let shifted_image = rgba.map(|img| shift_image(&img, params, fill));

    let mask_fill = if mask_connected { 255 } else { 0 };
    let mut shifted_mask = match params.wrap_around {
        WrapMode::On => wrap_offset(&gray, dx, dy),
        WrapMode::Off => clip_offset(&gray, dx, dy, Luma([mask_fill])),
    };

    // Alpha from mask, then composite
    let out_image = match shifted_image {
        Some(mut img) => {
            if mask_connected {
                apply_inverted_mask_as_alpha(&mut img, &shifted_mask);
            }
            ImageTensor::from_rgb_image(&composite_over_color(&img, fill.to_rgba()))
        }
        None => ImageTensor::zeros(width, height, 3),
    };

    if params.invert_mask_output.is_yes() {
        invert_mask(&mut shifted_mask);
    }

    let out_mask = if mask_connected {
        MaskTensor::from_gray_image_with(&shifted_mask, |v| 1.0 - normalize(v))
    } else {
        MaskTensor::from_gray_image(&shifted_mask)
    };

    Ok(OffsetOutput {
        image: out_image,
        mask: out_mask,
        offset_x: dx,
        offset_y: dy,
        info: format_info(
            dx,
            dy,
            width,
            height,
            params.wrap_around,
            params.invert_mask_output,
        ),
    })
}

fn shift_image(image: &RgbaImage, params: &OffsetParams, fill: FillColor) -> RgbaImage {
    match params.wrap_around {
        WrapMode::On => wrap_offset(image, params.offset_x, params.offset_y),
        WrapMode::Off => {
            clip_offset_with_alpha(image, params.offset_x, params.offset_y, fill.to_rgba())
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
