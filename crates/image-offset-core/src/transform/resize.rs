//! Mask resizing.
//!
//! Masks are reconciled to the image size with nearest-neighbor sampling,
//! which keeps hard mask edges and never invents values that were not in the
//! source mask.

use image::imageops::{self, FilterType};
use image::GrayImage;

/// Resize a mask to exact dimensions using nearest-neighbor sampling.
///
/// Returns a copy when the dimensions already match. Zero-sized targets (or
/// sources) produce an all-zero mask of the requested size.
pub fn resize_mask_nearest(mask: &GrayImage, width: u32, height: u32) -> GrayImage {
    // Fast path: dimensions already match
    if mask.dimensions() == (width, height) {
        return mask.clone();
    }

    if width == 0 || height == 0 || mask.width() == 0 || mask.height() == 0 {
        return GrayImage::new(width, height);
    }

    tracing::debug!(
        from_width = mask.width(),
        from_height = mask.height(),
        width,
        height,
        "resizing mask to image dimensions"
    );
    imageops::resize(mask, width, height, FilterType::Nearest)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
