//! Color values and color-string decoding.
//!
//! Colors are straight (non-premultiplied) RGBA with 8 bits per channel.
//! [`decode_color`] accepts:
//!
//! - CSS-style names: `"black"`, `"white"`, `"red"`, `"gray"`, ...
//! - `#rgb`, `#rrggbb` and `#rrggbbaa` hex literals
//!
//! Tuples and arrays convert directly via `From`.

use crate::error::BuildError;
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An RGBA color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to the `image` crate's pixel type.
    #[inline]
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Color::rgba(r, g, b, a)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color::rgba(r, g, b, a)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        color.to_rgba()
    }
}

impl FromStr for Color {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_color(s)
    }
}

/// Named colors, matched case-insensitively.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::rgb(0, 0, 0)),
    ("white", Color::rgb(255, 255, 255)),
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 128, 0)),
    ("lime", Color::rgb(0, 255, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("gray", Color::rgb(128, 128, 128)),
    ("grey", Color::rgb(128, 128, 128)),
    ("darkgray", Color::rgb(169, 169, 169)),
    ("lightgray", Color::rgb(211, 211, 211)),
    ("orange", Color::rgb(255, 165, 0)),
    ("purple", Color::rgb(128, 0, 128)),
    ("brown", Color::rgb(165, 42, 42)),
    ("pink", Color::rgb(255, 192, 203)),
    ("navy", Color::rgb(0, 0, 128)),
    ("gold", Color::rgb(255, 215, 0)),
    ("silver", Color::rgb(192, 192, 192)),
    ("transparent", Color::TRANSPARENT),
];

/// Decode a color name or hex literal.
///
/// # Errors
///
/// Returns [`BuildError::InvalidColor`] for unknown names and malformed hex.
///
/// # Example
///
/// ```
/// use refimg_core::color::{decode_color, Color};
///
/// assert_eq!(decode_color("black").unwrap(), Color::BLACK);
/// assert_eq!(decode_color("#E01010").unwrap(), Color::rgb(0xE0, 0x10, 0x10));
/// ```
pub fn decode_color(name_or_rgba: &str) -> Result<Color, BuildError> {
    let trimmed = name_or_rgba.trim();
    let invalid = || BuildError::InvalidColor(name_or_rgba.to_string());

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
        .map(|(_, color)| *color)
        .ok_or_else(invalid)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            // #rgb expands each digit: #f80 == #ff8800
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some(Color::rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}
