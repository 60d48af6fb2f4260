//! Pixel operations used by the offset pipeline.
//!
//! # Pipeline Order
//!
//! [`crate::apply_offset`] applies these in a fixed order:
//! 1. Mask resize to image dimensions (nearest neighbor)
//! 2. Offset of image and mask (wrap or clip)
//! 3. Inverted mask written into the image alpha
//! 4. Composite over the fill color, flattening to RGB
//! 5. Optional output mask inversion
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - Positive x offsets move content right, positive y offsets move it down

mod composite;
mod resize;
mod shift;

pub use composite::{apply_inverted_mask_as_alpha, composite_over_color, invert_mask};
pub use resize::resize_mask_nearest;
pub use shift::{clip_offset, clip_offset_with_alpha, wrap_offset};
