//! Image export WASM bindings.
//!
//! # Functions
//!
//! - [`encode_png`] - Encode one image to PNG bytes
//! - [`JsGifBuilder`] - Collect frames and encode a looping GIF
//!
//! Options are plain JS objects; missing fields, `undefined` and `null` fall
//! back to the defaults.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png, JsGifBuilder } from '@refimg/wasm';
//!
//! const png = encode_png(clock, { debug: true });
//!
//! const gif = new JsGifBuilder();
//! for (const frame of frames) gif.push_frame(frame);
//! const bytes = gif.finish({ frame_delay_ms: 40 });
//! ```

use crate::types::{js_error, JsImage};
use refimg_core::encode::{self, EncodeError, GifOptions, PngOptions};
use refimg_core::Image;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

/// Encode an image to PNG bytes.
///
/// Returns an empty `Uint8Array` for the empty image.
#[wasm_bindgen]
pub fn encode_png(image: &JsImage, options: JsValue) -> Result<Vec<u8>, JsValue> {
    let options: PngOptions = options_from_js(options)?;
    png_bytes(image.image(), &options).map_err(js_error)
}

/// Accumulates frames for a looping animated GIF.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct JsGifBuilder {
    frames: Vec<Image>,
}

#[wasm_bindgen]
impl JsGifBuilder {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsGifBuilder {
        JsGifBuilder::default()
    }

    /// Append a frame. The pixel buffer is shared, not copied.
    pub fn push_frame(&mut self, frame: &JsImage) {
        self.frames.push(frame.image().clone());
    }

    /// Number of frames pushed so far, empty ones included
    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Encode the collected frames. Throws when no frame has any pixels.
    pub fn finish(&self, options: JsValue) -> Result<Vec<u8>, JsValue> {
        let options: GifOptions = options_from_js(options)?;
        gif_bytes(&self.frames, &options).map_err(js_error)
    }
}

fn png_bytes(image: &Image, options: &PngOptions) -> Result<Vec<u8>, EncodeError> {
    let mut bytes = Vec::new();
    encode::write_png(&mut bytes, image, options)?;
    Ok(bytes)
}

fn gif_bytes(frames: &[Image], options: &GifOptions) -> Result<Vec<u8>, EncodeError> {
    let mut bytes = Vec::new();
    encode::write_gif(&mut bytes, frames, options)?;
    Ok(bytes)
}

fn options_from_js<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(js_error)
}
