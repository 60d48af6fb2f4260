//! Normalized float tensors exchanged with the host.
//!
//! Hosts hand pixels over as `f32` values in `[0, 1]`: images as interleaved
//! RGB or RGBA rows, masks as a single channel. All pixel processing is done
//! on 8-bit `image` crate buffers, so this module owns the conversions in
//! both directions.
//!
//! # Quantization
//!
//! - Float to 8-bit: `v * 255`, clamped to `[0, 255]`, truncated (NaN maps to 0)
//! - 8-bit to float: `v / 255`

mod types;

pub use types::{ImageTensor, MaskTensor, TensorError};

/// Convert a normalized float to an 8-bit channel value.
#[inline]
pub fn quantize(v: f32) -> u8 {
    // `as` saturates and maps NaN to 0
    (v * 255.0).clamp(0.0, 255.0) as u8
}

/// Convert an 8-bit channel value to a normalized float.
#[inline]
pub fn normalize(v: u8) -> f32 {
    v as f32 / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_boundaries() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 255);
    }

    #[test]
    fn test_quantize_truncates() {
        // 0.5 * 255 = 127.5 truncates to 127
        assert_eq!(quantize(0.5), 127);
        assert_eq!(quantize(0.999), 254);
    }

    #[test]
    fn test_quantize_clamps() {
        assert_eq!(quantize(-0.5), 0);
        assert_eq!(quantize(2.0), 255);
        assert_eq!(quantize(f32::NAN), 0);
        assert_eq!(quantize(f32::INFINITY), 255);
    }

    #[test]
    fn test_normalize_roundtrip() {
        for v in 0..=255u8 {
            assert_eq!(quantize(normalize(v)), v);
        }
    }
}
