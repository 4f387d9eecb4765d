//! WASM bindings for rotation and the debug overlay.

use crate::types::{js_error, JsImage};
use refimg_core::{debug, transform, InterpolationFilter};
use wasm_bindgen::prelude::*;

/// Rotate counter-clockwise about the reference point, growing the canvas to
/// fit.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Minute hand at 12 o'clock
/// const upright = rotate(hand, 90.0);
/// ```
#[wasm_bindgen]
pub fn rotate(image: &JsImage, degrees: f64) -> JsImage {
    transform::rotate(image.image(), degrees).into()
}

/// [`rotate`] with an explicit `"nearest"` or `"bilinear"` filter.
#[wasm_bindgen]
pub fn rotate_with(image: &JsImage, degrees: f64, filter: &str) -> Result<JsImage, JsValue> {
    let filter = parse_filter(filter)
        .ok_or_else(|| js_error(format!("Invalid filter: {:?}", filter)))?;
    Ok(transform::rotate_with(image.image(), degrees, filter).into())
}

/// Red border plus a crosshair on the reference point.
#[wasm_bindgen]
pub fn debug_overlay(image: &JsImage) -> JsImage {
    debug::debug_overlay(image.image()).into()
}

fn parse_filter(name: &str) -> Option<InterpolationFilter> {
    match name.trim().to_ascii_lowercase().as_str() {
        "nearest" => Some(InterpolationFilter::Nearest),
        "bilinear" => Some(InterpolationFilter::Bilinear),
        _ => None,
    }
}
