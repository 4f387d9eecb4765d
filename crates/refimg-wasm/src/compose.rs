//! Reference-point algebra and compositor bindings.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const head = change_anchor(rectangle(60, 15, "black"), "right", "middle");
//! const tail = change_anchor(rectangle(255, 15, "black"), "left", "middle");
//! const hand = compose(head, tail);
//! ```

use crate::types::{js_error, JsImage};
use refimg_core::{anchor, compose as compositor};
use wasm_bindgen::prelude::*;

/// Move the reference point to a named anchor.
///
/// `horizontal` is one of `left`, `middle`, `right`; `vertical` one of `top`,
/// `middle`, `bottom` (`center` is accepted for `middle`). Throws on any other
/// name.
#[wasm_bindgen]
pub fn change_anchor(
    image: &JsImage,
    horizontal: &str,
    vertical: &str,
) -> Result<JsImage, JsValue> {
    anchor::change_anchor_named(image.image(), horizontal, vertical)
        .map(JsImage::from)
        .map_err(js_error)
}

/// Align the two reference points and draw `foreground` over `background`.
#[wasm_bindgen]
pub fn compose(foreground: &JsImage, background: &JsImage) -> JsImage {
    compositor::compose(foreground.image(), background.image()).into()
}

#[wasm_bindgen]
pub fn side_by_side(left: &JsImage, right: &JsImage) -> JsImage {
    compositor::side_by_side(left.image(), right.image()).into()
}

#[wasm_bindgen]
pub fn stack_vertical(top: &JsImage, bottom: &JsImage) -> JsImage {
    compositor::stack_vertical(top.image(), bottom.image()).into()
}

/// Center `foreground` over `background`.
#[wasm_bindgen]
pub fn overlay(foreground: &JsImage, background: &JsImage) -> JsImage {
    compositor::overlay(foreground.image(), background.image()).into()
}
