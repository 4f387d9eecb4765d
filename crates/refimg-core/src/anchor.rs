//! Reference-point algebra.
//!
//! Moves an image's reference point to one of nine structural landmarks
//! without touching its pixels. The pixel buffer is shared between input and
//! output, so the operation is O(1).
//!
//! | Horizontal | x                    | Vertical | y                     |
//! |------------|----------------------|----------|-----------------------|
//! | `Left`     | `0`                  | `Top`    | `0`                   |
//! | `Middle`   | `ceil((width-1)/2)`  | `Middle` | `ceil((height-1)/2)`  |
//! | `Right`    | `width`              | `Bottom` | `height`              |

use crate::error::BuildError;
use crate::types::{structural_middle, Image, Point};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Horizontal anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAnchor {
    Left,
    Middle,
    Right,
}

/// Vertical anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAnchor {
    Top,
    Middle,
    Bottom,
}

impl HorizontalAnchor {
    /// x coordinate of this anchor on an axis of `width` pixels.
    pub fn resolve(self, width: u32) -> i32 {
        match self {
            HorizontalAnchor::Left => 0,
            HorizontalAnchor::Middle => structural_middle(width),
            HorizontalAnchor::Right => width as i32,
        }
    }
}

impl VerticalAnchor {
    /// y coordinate of this anchor on an axis of `height` pixels.
    pub fn resolve(self, height: u32) -> i32 {
        match self {
            VerticalAnchor::Top => 0,
            VerticalAnchor::Middle => structural_middle(height),
            VerticalAnchor::Bottom => height as i32,
        }
    }
}

impl FromStr for HorizontalAnchor {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(HorizontalAnchor::Left),
            "middle" | "center" => Ok(HorizontalAnchor::Middle),
            "right" => Ok(HorizontalAnchor::Right),
            _ => Err(BuildError::InvalidAnchor(s.to_string())),
        }
    }
}

impl FromStr for VerticalAnchor {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(VerticalAnchor::Top),
            "middle" | "center" => Ok(VerticalAnchor::Middle),
            "bottom" => Ok(VerticalAnchor::Bottom),
            _ => Err(BuildError::InvalidAnchor(s.to_string())),
        }
    }
}

/// Return `image` with its reference point moved to the given anchor.
///
/// The empty image has no landmarks and is returned as is.
///
/// # Example
///
/// ```
/// use refimg_core::anchor::{change_anchor, HorizontalAnchor, VerticalAnchor};
/// use refimg_core::{shapes::rectangle, Color, Point};
///
/// let head = rectangle(60, 15, Color::BLACK).unwrap();
/// let head = change_anchor(&head, HorizontalAnchor::Right, VerticalAnchor::Middle);
/// assert_eq!(head.reference(), Some(Point::new(60, 7)));
/// ```
pub fn change_anchor(
    image: &Image,
    horizontal: HorizontalAnchor,
    vertical: VerticalAnchor,
) -> Image {
    if image.is_empty() {
        return Image::empty();
    }
    let (width, height) = image.dimensions();
    image.relabel(Point::new(
        horizontal.resolve(width),
        vertical.resolve(height),
    ))
}

/// [`change_anchor`] with anchors given by name (`"left"`, `"middle"`,
/// `"bottom"`, ...).
///
/// # Errors
///
/// Returns [`BuildError::InvalidAnchor`] when either name is unknown.
pub fn change_anchor_named(
    image: &Image,
    horizontal: &str,
    vertical: &str,
) -> Result<Image, BuildError> {
    let horizontal: HorizontalAnchor = horizontal.parse()?;
    let vertical: VerticalAnchor = vertical.parse()?;
    Ok(change_anchor(image, horizontal, vertical))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::color::Color;
    use crate::shapes::rectangle;
    use proptest::prelude::*;

    fn horizontal() -> impl Strategy<Value = HorizontalAnchor> {
        prop_oneof![
            Just(HorizontalAnchor::Left),
            Just(HorizontalAnchor::Middle),
            Just(HorizontalAnchor::Right),
        ]
    }

    fn vertical() -> impl Strategy<Value = VerticalAnchor> {
        prop_oneof![
            Just(VerticalAnchor::Top),
            Just(VerticalAnchor::Middle),
            Just(VerticalAnchor::Bottom),
        ]
    }

    proptest! {
        /// Re-anchoring to the same landmark a second time changes nothing.
        #[test]
        fn prop_change_anchor_idempotent(
            w in 1i32..64,
            h in 1i32..64,
            ha in horizontal(),
            va in vertical(),
        ) {
            let img = rectangle(w, h, Color::BLACK).unwrap();
            let once = change_anchor(&img, ha, va);
            let twice = change_anchor(&once, ha, va);
            prop_assert_eq!(once, twice);
        }

        /// Only the label moves; the pixel buffer is shared with the input.
        #[test]
        fn prop_change_anchor_shares_buffer(
            w in 1i32..64,
            h in 1i32..64,
            ha in horizontal(),
            va in vertical(),
        ) {
            let img = rectangle(w, h, Color::BLACK).unwrap();
            let moved = change_anchor(&img, ha, va);
            prop_assert!(moved.shares_pixels_with(&img));
            prop_assert_eq!(moved.dimensions(), img.dimensions());
        }

        #[test]
        fn prop_reference_lands_on_landmark(
            w in 1i32..64,
            h in 1i32..64,
            ha in horizontal(),
            va in vertical(),
        ) {
            let img = rectangle(w, h, Color::BLACK).unwrap();
            let moved = change_anchor(&img, ha, va);
            let expected = Point::new(ha.resolve(w as u32), va.resolve(h as u32));
            prop_assert_eq!(moved.reference(), Some(expected));
        }
    }
}
