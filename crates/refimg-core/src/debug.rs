//! Debug overlay: a red border around the image and a yellow crosshair on its
//! reference point.
//!
//! The overlay is assembled with the same algebra it is meant to debug
//! (anchors, compose and rotate), so a broken primitive tends to show up here
//! first.

use crate::anchor::{change_anchor, HorizontalAnchor, VerticalAnchor};
use crate::color::Color;
use crate::compose::{compose, overlay};
use crate::raster;
use crate::transform::rotate;
use crate::types::Image;
use tracing::debug;

/// Border thickness in pixels.
pub const BORDER_THICKNESS: u32 = 5;
/// Border color, `#E01010`.
pub const BORDER_COLOR: Color = Color::rgb(0xE0, 0x10, 0x10);
/// Crosshair color, `#FAC800`.
pub const CROSSHAIR_COLOR: Color = Color::rgb(0xFA, 0xC8, 0x00);

const CROSSHAIR_LENGTH: u32 = 35;
const CROSSHAIR_WIDTH: u32 = 5;

/// Solid bar with the default centered reference.
fn bar(width: u32, height: u32, color: Color) -> Image {
    Image::from_rgba(raster::new_canvas(width, height, color.to_rgba()))
}

/// Return `image` framed by a [`BORDER_THICKNESS`] pixel border with an
/// X-shaped crosshair centered on its reference point.
///
/// The frame grows the canvas by the border on every side; the reference
/// point stays on the same image pixel. A crosshair wider than the image grows
/// the canvas further. The empty image has no reference point to mark and is
/// returned as is.
pub fn debug_overlay(image: &Image) -> Image {
    let Some(reference) = image.reference() else {
        return Image::empty();
    };
    let (width, height) = image.dimensions();
    let t = BORDER_THICKNESS;

    // Top and left edges as one L shape, then the same L turned around
    let horizontal = bar(width + 2 * t, t, BORDER_COLOR);
    let vertical = bar(t, height + 2 * t, BORDER_COLOR);
    let top_left = compose(
        &change_anchor(&horizontal, HorizontalAnchor::Left, VerticalAnchor::Top),
        &change_anchor(&vertical, HorizontalAnchor::Left, VerticalAnchor::Top),
    );
    let frame = compose(
        &change_anchor(&top_left, HorizontalAnchor::Left, VerticalAnchor::Bottom),
        &change_anchor(
            &rotate(&top_left, 180.0),
            HorizontalAnchor::Left,
            VerticalAnchor::Bottom,
        ),
    );

    let framed = overlay(image, &frame).relabel(reference.offset(t as i32, t as i32));

    let arm = bar(CROSSHAIR_LENGTH, CROSSHAIR_WIDTH, CROSSHAIR_COLOR);
    let cross = rotate(&compose(&arm, &rotate(&arm, 90.0)), 45.0);

    let out = compose(&cross, &framed);
    debug!(
        width = out.width(),
        height = out.height(),
        "built debug overlay"
    );
    out
}
