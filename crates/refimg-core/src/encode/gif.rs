//! Looping animated GIF export.
//!
//! Every frame is placed at the top-left corner of a shared canvas sized to
//! the largest frame, since a GIF has one logical screen size for the whole
//! sequence.

use super::EncodeError;
use crate::raster;
use crate::types::Image;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Default delay between frames: 40 ms, i.e. 25 frames per second.
pub const DEFAULT_FRAME_DELAY_MS: u32 = 40;

fn default_frame_delay_ms() -> u32 {
    DEFAULT_FRAME_DELAY_MS
}

/// Options for animated GIF export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifOptions {
    /// Delay between consecutive frames in milliseconds
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u32,
}

impl Default for GifOptions {
    fn default() -> Self {
        Self {
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
        }
    }
}

/// Encode `frames` as an infinitely looping GIF into `writer`.
///
/// Empty images are skipped.
///
/// # Errors
///
/// - [`EncodeError::EmptySequence`] when no frame has any pixels
/// - [`EncodeError::EncodingFailed`] / [`EncodeError::Io`] from the codec
pub fn write_gif<W: Write>(
    writer: W,
    frames: &[Image],
    options: &GifOptions,
) -> Result<(), EncodeError> {
    let rasters: Vec<_> = frames.iter().filter_map(Image::pixels).collect();
    if rasters.is_empty() {
        return Err(EncodeError::EmptySequence);
    }

    let width = rasters.iter().map(|r| r.width()).max().unwrap_or(0);
    let height = rasters.iter().map(|r| r.height()).max().unwrap_or(0);
    let delay = Delay::from_numer_denom_ms(options.frame_delay_ms, 1);

    let mut encoder = GifEncoder::new(writer);
    encoder.set_repeat(Repeat::Infinite)?;
    for pixels in &rasters {
        let canvas = if pixels.dimensions() == (width, height) {
            (*pixels).clone()
        } else {
            raster::translate(pixels, (width, height), (0, 0))
        };
        encoder.encode_frame(Frame::from_parts(canvas, 0, 0, delay))?;
    }

    debug!(
        frames = rasters.len(),
        skipped = frames.len() - rasters.len(),
        width,
        height,
        frame_delay_ms = options.frame_delay_ms,
        "encoded GIF"
    );
    Ok(())
}

/// Write `frames` as a looping GIF file at `path`.
///
/// The sequence is checked before the file is created, so an
/// [`EncodeError::EmptySequence`] leaves no file behind.
pub fn save_gif(
    path: impl AsRef<Path>,
    frames: &[Image],
    options: &GifOptions,
) -> Result<(), EncodeError> {
    if frames.iter().all(Image::is_empty) {
        return Err(EncodeError::EmptySequence);
    }

    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_gif(&mut writer, frames, options)?;
    writer.flush()?;
    Ok(())
}
