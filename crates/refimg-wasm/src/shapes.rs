//! Shape primitive bindings.
//!
//! Colors are CSS-style names or `#rgb` / `#rrggbb` / `#rrggbbaa` strings.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const face = circle(150, "#545454");
//! const hand = rectangle(255, 15, "black");
//! ```

use crate::types::{js_error, parse_color, JsImage};
use refimg_core::shapes;
use wasm_bindgen::prelude::*;

/// A filled rectangle. Throws on non-positive dimensions or an unknown color.
#[wasm_bindgen]
pub fn rectangle(width: i32, height: i32, color: &str) -> Result<JsImage, JsValue> {
    let color = parse_color(color).map_err(js_error)?;
    shapes::rectangle(width, height, color)
        .map(JsImage::from)
        .map_err(js_error)
}

/// A filled circle on a `2r x 2r` canvas.
#[wasm_bindgen]
pub fn circle(radius: i32, color: &str) -> Result<JsImage, JsValue> {
    let color = parse_color(color).map_err(js_error)?;
    shapes::circle(radius, color)
        .map(JsImage::from)
        .map_err(js_error)
}

/// A pie slice sweeping `angle_degrees` clockwise from 3 o'clock.
#[wasm_bindgen]
pub fn sector(radius: i32, angle_degrees: f64, color: &str) -> Result<JsImage, JsValue> {
    let color = parse_color(color).map_err(js_error)?;
    shapes::sector(radius, angle_degrees, color)
        .map(JsImage::from)
        .map_err(js_error)
}

/// An equilateral triangle with the apex up.
#[wasm_bindgen]
pub fn triangle(side: i32, color: &str) -> Result<JsImage, JsValue> {
    let color = parse_color(color).map_err(js_error)?;
    shapes::triangle(side, color)
        .map(JsImage::from)
        .map_err(js_error)
}

#[wasm_bindgen]
pub fn empty_image() -> JsImage {
    JsImage::from(shapes::empty_image())
}

/// A fully transparent backdrop of the given size.
#[wasm_bindgen]
pub fn empty_scene(width: i32, height: i32) -> Result<JsImage, JsValue> {
    shapes::empty_scene(width, height)
        .map(JsImage::from)
        .map_err(js_error)
}
