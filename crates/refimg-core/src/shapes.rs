//! Shape primitives: the leaf images every composition starts from.
//!
//! Every primitive validates its dimensions before allocating anything and
//! returns [`BuildError::InvalidDimension`] for zero or negative input.
//! Unless noted otherwise the reference point is the structural center,
//! `(ceil((w - 1) / 2), ceil((h - 1) / 2))`.

use crate::color::Color;
use crate::error::{validate_dimension, BuildError};
use crate::raster::{self, Rect, TRANSPARENT};
use crate::types::Image;
use tracing::debug;

/// A fully opaque filled rectangle.
///
/// # Example
///
/// ```
/// use refimg_core::{shapes::rectangle, Color, Point};
///
/// let bar = rectangle(60, 15, Color::BLACK).unwrap();
/// assert_eq!(bar.dimensions(), (60, 15));
/// assert_eq!(bar.reference(), Some(Point::new(30, 7)));
/// ```
pub fn rectangle(width: i32, height: i32, color: Color) -> Result<Image, BuildError> {
    let width = validate_dimension("width", width)?;
    let height = validate_dimension("height", height)?;
    let canvas = raster::new_canvas(width, height, color.to_rgba());
    Ok(Image::from_rgba(canvas))
}

/// A filled circle on a transparent `2r x 2r` canvas.
pub fn circle(radius: i32, color: Color) -> Result<Image, BuildError> {
    let side = validate_dimension("radius", radius)? * 2;
    let mut canvas = raster::new_canvas(side, side, TRANSPARENT);
    raster::fill_ellipse(&mut canvas, Rect::of_size(side, side), color.to_rgba());
    Ok(Image::from_rgba(canvas))
}

/// A circular sector (pie slice) of a circle with the given radius.
///
/// The first radius points at 3 o'clock; the second lies `angle_degrees`
/// clockwise from it. Any non-zero multiple of 360, negative ones included,
/// gives the same pixels as [`circle`]. Other negative angles wrap forward.
///
/// The slice is cropped to its bounding box and the reference point moves to
/// the center of the crop. A zero sweep has no pixels and yields the empty
/// image.
pub fn sector(radius: i32, angle_degrees: f64, color: Color) -> Result<Image, BuildError> {
    let side = validate_dimension("radius", radius)? * 2;
    let mut canvas = raster::new_canvas(side, side, TRANSPARENT);
    let full_turn = angle_degrees != 0.0 && angle_degrees % 360.0 == 0.0;
    if full_turn {
        raster::fill_ellipse(&mut canvas, Rect::of_size(side, side), color.to_rgba());
    } else {
        raster::fill_pie_slice(
            &mut canvas,
            Rect::of_size(side, side),
            0.0,
            angle_degrees,
            color.to_rgba(),
        );
    }

    match raster::bounding_box(&canvas) {
        Some(bbox) => Ok(Image::from_rgba(raster::crop(&canvas, bbox))),
        None => {
            debug!(radius, angle_degrees, "sector has no pixels");
            Ok(Image::empty())
        }
    }
}

/// An equilateral triangle with the apex up.
///
/// The canvas is `side x round(side * sqrt(3) / 2)`.
pub fn triangle(side: i32, color: Color) -> Result<Image, BuildError> {
    let width = validate_dimension("side", side)?;
    let height = (width as f64 * 3f64.sqrt() / 2.0).round().max(1.0) as u32;

    let mut canvas = raster::new_canvas(width, height, TRANSPARENT);
    let (w, h) = (width as f64, height as f64);
    raster::fill_polygon(&mut canvas, &[(0.0, h), (w / 2.0, 0.0), (w, h)], color.to_rgba());
    Ok(Image::from_rgba(canvas))
}

/// The 0x0 image. It is the identity of [`compose`](crate::compose::compose)
/// and is never encoded.
pub fn empty_image() -> Image {
    Image::empty()
}

/// A fully transparent image of the given size, useful as a fixed-size
/// backdrop.
pub fn empty_scene(width: i32, height: i32) -> Result<Image, BuildError> {
    let width = validate_dimension("width", width)?;
    let height = validate_dimension("height", height)?;
    Ok(Image::from_rgba(raster::new_canvas(width, height, TRANSPARENT)))
}
