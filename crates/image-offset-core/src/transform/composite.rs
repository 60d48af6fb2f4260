//! Mask-to-alpha transfer and compositing over the fill color.

use image::{imageops, GrayImage, Rgb, RgbImage, Rgba, RgbaImage};

/// Fractional bits used by the source-over blend.
const PRECISION_BITS: u32 = 7;

#[inline]
fn shr_div255(v: u32) -> u32 {
    ((v >> 8) + v) >> 8
}

/// Overwrite the image alpha with the inverse of the mask (`alpha = 255 - mask`).
///
/// Mask values mean "how much is masked out", so fully masked pixels become
/// fully transparent. The mask must have the same dimensions as the image.
pub fn apply_inverted_mask_as_alpha(image: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(
        image.dimensions(),
        mask.dimensions(),
        "Mask and image dimensions must match"
    );

    for (px, m) in image.pixels_mut().zip(mask.pixels()) {
        px[3] = 255 - m[0];
    }
}

/// Composite one RGBA pixel over another with the source-over operator.
///
/// Integer arithmetic with 7 fractional bits; a fully transparent source
/// returns the destination unchanged and a fully opaque one returns the
/// source exactly.
#[inline]
fn composite_pixel(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let src_a = u32::from(src[3]);
    if src_a == 0 {
        return dst;
    }

    let dst_a = u32::from(dst[3]);
    let blend = dst_a * (255 - src_a);
    let out_a255 = src_a * 255 + blend;

    let coef1 = src_a * 255 * 255 * (1 << PRECISION_BITS) / out_a255;
    let coef2 = 255 * (1 << PRECISION_BITS) - coef1;

    let channel = |c: usize| -> u8 {
        let tmp = u32::from(src[c]) * coef1 + u32::from(dst[c]) * coef2;
        (shr_div255(tmp + (0x80 << PRECISION_BITS)) >> PRECISION_BITS) as u8
    };

    Rgba([
        channel(0),
        channel(1),
        channel(2),
        shr_div255(out_a255 + 0x80) as u8,
    ])
}

/// Composite an image over a solid `background` and flatten to RGB.
///
/// The composite's alpha is dropped; a transparent background therefore
/// flattens to black wherever the image is transparent too.
pub fn composite_over_color(image: &RgbaImage, background: Rgba<u8>) -> RgbImage {
    let (width, height) = image.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        let out = composite_pixel(background, *image.get_pixel(x, y));
        Rgb([out[0], out[1], out[2]])
    })
}

/// Invert every mask value in place (`v -> 255 - v`).
pub fn invert_mask(mask: &mut GrayImage) {
    imageops::invert(mask);
}
