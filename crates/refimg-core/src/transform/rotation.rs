//! Rotation about an image's own reference point.
//!
//! # Algorithm
//!
//! Rotating about an arbitrary point is reduced to rotating about the canvas
//! center:
//!
//! 1. Pad the shorter side of each axis so the reference point becomes the
//!    center of the padded canvas.
//! 2. Translate the pixels into that padded transparent canvas.
//! 3. Rotate every non-transparent pixel coordinate analytically and keep the
//!    componentwise minimum. This is where the top-left of the cropped result
//!    will land, which the crop step cannot report by itself.
//! 4. Rotate the padded canvas about its center, expanding it to fit.
//! 5. Crop to the bounding box of non-transparent pixels.
//! 6. The new reference point is the rotated padded reference point minus the
//!    minimum from step 3.
//!
//! Steps 3 and 4 round independently, so the result can be off by about one
//! pixel from an exact rotation for some angles. Rotating by 0° or 360° gives
//! back the input within that tolerance.

use crate::raster::{self, InterpolationFilter, RotationMatrix};
use crate::types::{Image, Point};
use image::RgbaImage;
use tracing::{debug, trace};

/// Padding added to each side of an image so that its reference point becomes
/// the center of the padded canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CenteringPadding {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl CenteringPadding {
    /// Compute the padding for a `width x height` image with the given
    /// reference point.
    ///
    /// Distances are measured from the reference point to the first and last
    /// pixel of each axis. Only the side with the shorter distance receives
    /// padding, by the difference between the two.
    pub fn for_reference(width: u32, height: u32, reference: Point) -> Self {
        let to_left = reference.x as i64;
        let to_top = reference.y as i64;
        let to_right = width as i64 - 1 - reference.x as i64;
        let to_bottom = height as i64 - 1 - reference.y as i64;

        Self {
            top: (to_bottom - to_top).max(0) as u32,
            bottom: (to_top - to_bottom).max(0) as u32,
            left: (to_right - to_left).max(0) as u32,
            right: (to_left - to_right).max(0) as u32,
        }
    }

    /// Dimensions of the padded canvas.
    pub fn padded_size(&self, width: u32, height: u32) -> (u32, u32) {
        (
            width + self.left + self.right,
            height + self.top + self.bottom,
        )
    }
}

/// Rotate `image` counter-clockwise by `degrees` about its reference point.
///
/// The canvas grows so nothing is clipped and is then cropped tight to the
/// visible pixels. The rotated reference point becomes the result's reference
/// point. Uses nearest-neighbor sampling; see [`rotate_with`].
///
/// The empty image, and any image without a single non-transparent pixel,
/// rotates to the empty image.
///
/// # Example
///
/// ```
/// use refimg_core::{rotate, shapes::rectangle, Color};
///
/// let bar = rectangle(100, 10, Color::BLACK).unwrap();
/// let upright = rotate(&bar, 90.0);
/// assert_eq!(upright.dimensions(), (10, 100));
/// ```
pub fn rotate(image: &Image, degrees: f64) -> Image {
    rotate_with(image, degrees, InterpolationFilter::Nearest)
}

/// [`rotate`] with an explicit interpolation filter.
///
/// Bilinear sampling produces partially transparent edge pixels, which count
/// toward the bounding box; the result can therefore be a pixel larger than
/// with nearest-neighbor sampling.
pub fn rotate_with(image: &Image, degrees: f64, filter: InterpolationFilter) -> Image {
    let Some((pixels, reference)) = image.parts() else {
        return Image::empty();
    };
    let (width, height) = pixels.dimensions();

    let padding = CenteringPadding::for_reference(width, height, reference);
    let padded_size = padding.padded_size(width, height);
    let centered = raster::translate(
        pixels,
        padded_size,
        (padding.left as i64, padding.top as i64),
    );
    let padded_reference = reference.offset(padding.left as i32, padding.top as i32);
    trace!(?padding, ?padded_size, ?padded_reference, "rotation padding");

    let matrix = RotationMatrix::counter_clockwise(degrees);
    let Some(origin) = rotated_content_origin(&centered, &matrix) else {
        debug!(degrees, "rotating fully transparent image");
        return Image::empty();
    };

    let rotated = raster::rotate_expand(&centered, degrees, filter);
    let Some(bbox) = raster::bounding_box(&rotated) else {
        return Image::empty();
    };
    let cropped = raster::crop(&rotated, bbox);

    let rotated_reference = matrix.rotate_point(padded_reference);
    let new_reference = Point::new(
        rotated_reference.x - origin.x,
        rotated_reference.y - origin.y,
    );

    debug!(
        degrees,
        width = cropped.width(),
        height = cropped.height(),
        reference_x = new_reference.x,
        reference_y = new_reference.y,
        "rotated image"
    );
    Image::with_reference(cropped, new_reference)
}

/// Componentwise minimum of the rotated coordinates of every pixel with
/// non-zero alpha, or `None` if there is no such pixel.
fn rotated_content_origin(pixels: &RgbaImage, matrix: &RotationMatrix) -> Option<Point> {
    pixels
        .enumerate_pixels()
        .filter(|(_, _, p)| p[3] != 0)
        .map(|(x, y, _)| matrix.rotate_point(Point::new(x as i32, y as i32)))
        .reduce(|a, b| Point::new(a.x.min(b.x), a.y.min(b.y)))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::anchor::{HorizontalAnchor, VerticalAnchor};
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
        /// A full turn is a near-identity on size and reference point.
        #[test]
        fn prop_full_turn_near_identity(
            w in 1i32..40, h in 1i32..40,
            ha in horizontal(), va in vertical(),
        ) {
            let img = crate::anchor::change_anchor(
                &rectangle(w, h, Color::BLACK).unwrap(), ha, va,
            );
            let out = rotate(&img, 360.0);
            let (r, e) = (out.reference().unwrap(), img.reference().unwrap());
            prop_assert!((out.width() as i64 - w as i64).abs() <= 1);
            prop_assert!((out.height() as i64 - h as i64).abs() <= 1);
            prop_assert!((r.x - e.x).abs() <= 1);
            prop_assert!((r.y - e.y).abs() <= 1);
        }

        /// Quarter turns swap the axes of a rectangle.
        #[test]
        fn prop_quarter_turn_swaps_axes(w in 1i32..50, h in 1i32..50, k in -3i32..4) {
            let img = rectangle(w, h, Color::BLACK).unwrap();
            let out = rotate(&img, 90.0 * k as f64);
            let (ow, oh) = out.dimensions();
            if k % 2 == 0 {
                prop_assert_eq!((ow, oh), (w as u32, h as u32));
            } else {
                prop_assert_eq!((ow, oh), (h as u32, w as u32));
            }
        }

        /// Rotation never drops visible content.
        #[test]
        fn prop_rotation_never_empties(w in 2i32..30, h in 2i32..30, degrees in -360.0f64..360.0) {
            let img = rectangle(w, h, Color::BLACK).unwrap();
            let out = rotate(&img, degrees);
            prop_assert!(!out.is_empty());
        }
    }
}
