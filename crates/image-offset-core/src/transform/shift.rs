//! Wrapped and clipped translation.
//!
//! Offsets are `i32` but all coordinate math is done in `i64`, so offsets far
//! outside the image (or at the `i32` limits) neither overflow nor panic.

use image::{imageops, ImageBuffer, Pixel, Rgba, RgbaImage};

/// Divide by 255 with rounding, for values up to `255 * 255`.
#[inline]
fn div255(v: u32) -> u8 {
    let t = v + 128;
    (((t >> 8) + t) >> 8) as u8
}

/// Shift an image cyclically: content leaving one edge re-enters at the opposite edge.
///
/// Output pixel (x, y) is input pixel `((x - dx) mod w, (y - dy) mod h)`.
/// Nothing is lost, so shifting by `(-dx, -dy)` afterwards restores the input.
///
/// # Arguments
///
/// * `src` - Source buffer (any pixel type)
/// * `dx` - Horizontal offset (positive = right)
/// * `dy` - Vertical offset (positive = down)
pub fn wrap_offset<P>(
    src: &ImageBuffer<P, Vec<P::Subpixel>>,
    dx: i32,
    dy: i32,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel,
{
    let (width, height) = src.dimensions();
    if width == 0 || height == 0 {
        return src.clone();
    }

    let w = i64::from(width);
    let h = i64::from(height);
    let shift_x = i64::from(dx).rem_euclid(w);
    let shift_y = i64::from(dy).rem_euclid(h);
    if shift_x == 0 && shift_y == 0 {
        return src.clone();
    }

    ImageBuffer::from_fn(width, height, |x, y| {
        let sx = (i64::from(x) - shift_x).rem_euclid(w) as u32;
        let sy = (i64::from(y) - shift_y).rem_euclid(h) as u32;
        *src.get_pixel(sx, sy)
    })
}

/// Shift an image onto a canvas filled with `fill`, discarding what falls off.
///
/// Source pixels are copied as-is (no blending).
pub fn clip_offset<P>(
    src: &ImageBuffer<P, Vec<P::Subpixel>>,
    dx: i32,
    dy: i32,
    fill: P,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel,
{
    let (width, height) = src.dimensions();
    let mut canvas = ImageBuffer::from_pixel(width, height, fill);
    imageops::replace(&mut canvas, src, i64::from(dx), i64::from(dy));
    canvas
}

/// Shift an RGBA image onto a `fill` canvas, using its own alpha as the paste mask.
///
/// Every channel, alpha included, is blended as
/// `div255(canvas * (255 - a) + src * a)` where `a` is the source alpha.
/// Fully transparent source pixels leave the canvas untouched; fully opaque
/// ones replace it.
pub fn clip_offset_with_alpha(src: &RgbaImage, dx: i32, dy: i32, fill: Rgba<u8>) -> RgbaImage {
    let (width, height) = src.dimensions();
    let mut canvas = RgbaImage::from_pixel(width, height, fill);

    let (dx, dy) = (i64::from(dx), i64::from(dy));
    let (w, h) = (i64::from(width), i64::from(height));

    // Destination range that receives source pixels
    let x_start = dx.clamp(0, w);
    let x_end = (dx + w).clamp(0, w);
    let y_start = dy.clamp(0, h);
    let y_end = (dy + h).clamp(0, h);

    for y in y_start..y_end {
        for x in x_start..x_end {
            let s = src.get_pixel((x - dx) as u32, (y - dy) as u32);
            let d = canvas.get_pixel_mut(x as u32, y as u32);

            let a = u32::from(s[3]);
            for c in 0..4 {
                d[c] = div255(u32::from(d[c]) * (255 - a) + u32::from(s[c]) * a);
            }
        }
    }

    canvas
}


// ============================================================================
// Property-Based Tests
// ============================================================================
