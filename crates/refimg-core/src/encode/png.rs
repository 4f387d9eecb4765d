//! PNG export.

use super::EncodeError;
use crate::debug::debug_overlay;
use crate::types::Image;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Options for PNG export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PngOptions {
    /// Encode [`debug_overlay`] of the image instead of the image itself
    #[serde(default)]
    pub debug: bool,
}

/// Encode `image` as an RGBA8 PNG into `writer`.
///
/// The empty image is a no-op: nothing is written and `Ok(())` is returned.
pub fn write_png<W: Write>(
    writer: W,
    image: &Image,
    options: &PngOptions,
) -> Result<(), EncodeError> {
    if image.is_empty() {
        debug!("skipping PNG export of empty image");
        return Ok(());
    }

    let image = if options.debug {
        debug_overlay(image)
    } else {
        image.clone()
    };
    let Some(pixels) = image.pixels() else {
        return Ok(());
    };

    PngEncoder::new(writer)
        .write_image(
            pixels.as_raw(),
            pixels.width(),
            pixels.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(EncodeError::from)?;

    debug!(
        width = pixels.width(),
        height = pixels.height(),
        debug = options.debug,
        "encoded PNG"
    );
    Ok(())
}

/// Write `image` as a PNG file at `path`.
///
/// No file is created for the empty image.
pub fn save_png(
    path: impl AsRef<Path>,
    image: &Image,
    options: &PngOptions,
) -> Result<(), EncodeError> {
    if image.is_empty() {
        debug!(path = %path.as_ref().display(), "skipping PNG export of empty image");
        return Ok(());
    }

    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_png(&mut writer, image, options)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::shapes::{circle, rectangle};

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("refimg-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_write_png_round_trips_pixels() {
        let img = circle(12, Color::rgba(10, 200, 30, 255)).unwrap();
        let mut bytes = Vec::new();
        write_png(&mut bytes, &img, &PngOptions::default()).unwrap();

        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(&decoded, img.pixels().unwrap());
    }

    #[test]
    fn test_write_png_empty_writes_nothing() {
        let mut bytes = Vec::new();
        write_png(&mut bytes, &Image::empty(), &PngOptions::default()).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_write_png_debug_option() {
        let img = rectangle(60, 40, Color::WHITE).unwrap();
        let mut bytes = Vec::new();
        write_png(&mut bytes, &img, &PngOptions { debug: true }).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (70, 50));
        assert_eq!(decoded.get_pixel(0, 0).0, [0xE0, 0x10, 0x10, 255]);
    }

    #[test]
    fn test_save_png_creates_file() {
        let path = temp_path("save.png");
        let img = rectangle(8, 4, Color::BLACK).unwrap();
        save_png(&path, &img, &PngOptions::default()).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (8, 4));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_png_empty_creates_no_file() {
        let path = temp_path("empty.png");
        save_png(&path, &Image::empty(), &PngOptions::default()).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_save_png_bad_directory() {
        let path = temp_path("missing-dir").join("out.png");
        let img = rectangle(2, 2, Color::BLACK).unwrap();
        assert!(matches!(
            save_png(&path, &img, &PngOptions::default()),
            Err(EncodeError::Io(_))
        ));
    }

    #[test]
    fn test_png_options_deserialize_defaults() {
        let options: PngOptions = deserialize_from_empty_map();
        assert_eq!(options, PngOptions::default());
    }

    /// Deserialize `PngOptions` from an empty map without pulling in a format
    /// crate.
    fn deserialize_from_empty_map() -> PngOptions {
        use serde::de::value::{Error, MapDeserializer};
        let empty: Vec<(&str, bool)> = Vec::new();
        PngOptions::deserialize(MapDeserializer::<_, Error>::new(empty.into_iter())).unwrap()
    }
}
