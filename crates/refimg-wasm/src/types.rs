//! WASM-compatible wrapper types.
//!
//! [`JsImage`] is an opaque handle around the core [`Image`] value. The pixel
//! buffer stays in WASM memory and is shared between handles; JavaScript only
//! receives a copy when it calls `pixels()`.

use refimg_core::{BuildError, Color, Image};
use std::fmt::Display;
use wasm_bindgen::prelude::*;

/// An immutable image with a reference point.
///
/// The `free()` method generated by wasm-bindgen releases the handle early;
/// otherwise the finalizer does it.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsImage {
    inner: Image,
}

#[wasm_bindgen]
impl JsImage {
    /// Image width in pixels (0 for the empty image)
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Image height in pixels (0 for the empty image)
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    #[wasm_bindgen(getter)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Reference point x, `undefined` for the empty image
    #[wasm_bindgen(getter)]
    pub fn reference_x(&self) -> Option<i32> {
        self.inner.reference().map(|p| p.x)
    }

    /// Reference point y, `undefined` for the empty image
    #[wasm_bindgen(getter)]
    pub fn reference_y(&self) -> Option<i32> {
        self.inner.reference().map(|p| p.y)
    }

    /// Returns RGBA pixel data as a `Uint8Array` copy (empty for the empty
    /// image).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner
            .pixels()
            .map(|p| p.as_raw().clone())
            .unwrap_or_default()
    }
}

impl JsImage {
    pub(crate) fn image(&self) -> &Image {
        &self.inner
    }
}

impl From<Image> for JsImage {
    fn from(inner: Image) -> Self {
        Self { inner }
    }
}

/// Convert any displayable error to the string `JsValue` thrown to JavaScript.
pub(crate) fn js_error(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

pub(crate) fn parse_color(color: &str) -> Result<Color, BuildError> {
    refimg_core::decode_color(color)
}
