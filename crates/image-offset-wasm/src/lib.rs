//! Image Offset WASM - WebAssembly bindings for the offset operation
//!
//! This crate exposes `image-offset-core` to JavaScript/TypeScript hosts.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrappers for image and mask tensors
//! - `offset` - The offset operation and fill color parsing
//!
//! # Usage
//!
//! ```typescript
//! import init, { apply_offset, JsImageTensor } from '@image-offset/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = new JsImageTensor(width, height, 3, rgbFloats);
//! const result = apply_offset({ offset_x: 10, wrap_around: 'On' }, image, undefined);
//! console.log(result.info);
//! ```

use wasm_bindgen::prelude::*;

mod offset;
mod types;

// Re-export public types
pub use offset::{apply_offset, parse_fill_color, JsOffsetResult};
pub use types::{JsImageTensor, JsMaskTensor};

/// Initialize the WASM module (called automatically on load)
///
/// Routes Rust panics to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Smallest offset the bindings are expected to receive.
#[wasm_bindgen]
pub fn offset_min() -> i32 {
    image_offset_core::OFFSET_MIN
}

/// Largest offset the bindings are expected to receive.
#[wasm_bindgen]
pub fn offset_max() -> i32 {
    image_offset_core::OFFSET_MAX
}
