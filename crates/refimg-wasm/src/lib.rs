//! refimg WASM - WebAssembly bindings for refimg
//!
//! This crate exposes the refimg-core reference-point image algebra to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - The `JsImage` handle around the core image value
//! - `shapes` - Shape primitives (rectangle, circle, sector, triangle, ...)
//! - `compose` - Anchors and the compositor
//! - `transform` - Rotation and the debug overlay
//! - `encode` - PNG and looping GIF export
//!
//! # Usage
//!
//! ```typescript
//! import init, { rectangle, change_anchor, side_by_side, rotate, encode_png } from '@refimg/wasm';
//!
//! await init();
//!
//! const head = change_anchor(rectangle(60, 15, "black"), "right", "middle");
//! const tail = change_anchor(rectangle(255, 15, "black"), "left", "middle");
//! const hand = rotate(side_by_side(head, tail), 90);
//! const png = encode_png(hand);
//! ```

use wasm_bindgen::prelude::*;

mod compose;
mod encode;
mod shapes;
mod transform;
mod types;

// Re-export public types
pub use compose::{change_anchor, compose, overlay, side_by_side, stack_vertical};
pub use encode::{encode_png, JsGifBuilder};
pub use shapes::{circle, empty_image, empty_scene, rectangle, sector, triangle};
pub use transform::{debug_overlay, rotate, rotate_with};
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
