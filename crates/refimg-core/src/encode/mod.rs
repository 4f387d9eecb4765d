//! Export of finished images.
//!
//! This module provides:
//! - Static PNG export ([`write_png`], [`save_png`])
//! - Looping animated GIF export ([`write_gif`], [`save_gif`])
//!
//! # Boundary Behavior
//!
//! The empty image is never encoded. Writing it as PNG is a no-op that
//! produces no bytes and creates no file. Empty frames are dropped from an
//! animated sequence, and a sequence left without frames fails with
//! [`EncodeError::EmptySequence`].
//!
//! # Examples
//!
//! ```ignore
//! use refimg_core::encode::{save_gif, GifOptions};
//!
//! save_gif("clock.gif", &frames, &GifOptions::default())?;
//! ```

mod gif;
mod png;

pub use gif::{save_gif, write_gif, GifOptions, DEFAULT_FRAME_DELAY_MS};
pub use png::{save_png, write_png, PngOptions};

use thiserror::Error;

/// Errors that can occur while exporting images.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Animated export was given no frame with any pixels
    #[error("cannot encode an animated sequence without frames")]
    EmptySequence,

    /// The codec rejected the image
    #[error("encoding failed: {0}")]
    EncodingFailed(String),

    /// Creating or writing the output failed
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<image::ImageError> for EncodeError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => EncodeError::Io(io.to_string()),
            other => EncodeError::EncodingFailed(other.to_string()),
        }
    }
}

impl From<std::io::Error> for EncodeError {
    fn from(err: std::io::Error) -> Self {
        EncodeError::Io(err.to_string())
    }
}
