//! The compositor: overlaying images by aligning their reference points.
//!
//! # Canvas Sizing
//!
//! With foreground reference `(fx, fy)` and background reference `(bx, by)`:
//!
//! ```text
//! top    = max(fy, by)
//! bottom = max(fg.height - fy, bg.height - by)
//! left   = max(fx, bx)
//! right  = max(fg.width - fx, bg.width - bx)
//! ```
//!
//! The result is `(left + right) x (top + bottom)` with its reference point
//! at `(left, top)`, which is where both input reference points land.
//!
//! # Derived Combinators
//!
//! [`side_by_side`], [`stack_vertical`] and [`overlay`] re-anchor their
//! operands to canonical landmarks and then call [`compose`].

use crate::anchor::{change_anchor, HorizontalAnchor, VerticalAnchor};
use crate::raster::{self, TRANSPARENT};
use crate::types::{Image, Point};
use tracing::{debug, trace};

/// Compose `foreground` over `background`, aligning their reference points.
///
/// The empty image is the identity on both sides: composing with it returns
/// the other operand unchanged (the same buffer, the same reference point).
///
/// # Example
///
/// ```
/// use refimg_core::compose::compose;
/// use refimg_core::anchor::{change_anchor, HorizontalAnchor, VerticalAnchor};
/// use refimg_core::{shapes::rectangle, Color, Point};
///
/// let head = change_anchor(
///     &rectangle(60, 15, Color::BLACK).unwrap(),
///     HorizontalAnchor::Right,
///     VerticalAnchor::Middle,
/// );
/// let tail = change_anchor(
///     &rectangle(255, 15, Color::BLACK).unwrap(),
///     HorizontalAnchor::Left,
///     VerticalAnchor::Middle,
/// );
/// let hand = compose(&head, &tail);
/// assert_eq!(hand.dimensions(), (315, 15));
/// assert_eq!(hand.reference(), Some(Point::new(60, 7)));
/// ```
pub fn compose(foreground: &Image, background: &Image) -> Image {
    let (fg, fg_ref) = match foreground.parts() {
        Some(parts) => parts,
        None => return background.clone(),
    };
    let (bg, bg_ref) = match background.parts() {
        Some(parts) => parts,
        None => return foreground.clone(),
    };

    let (fx, fy) = (fg_ref.x as i64, fg_ref.y as i64);
    let (bx, by) = (bg_ref.x as i64, bg_ref.y as i64);
    let (fw, fh) = (fg.width() as i64, fg.height() as i64);
    let (bw, bh) = (bg.width() as i64, bg.height() as i64);

    let top = fy.max(by);
    let bottom = (fh - fy).max(bh - by);
    let left = fx.max(bx);
    let right = (fw - fx).max(bw - bx);

    let (width, height) = ((left + right) as u32, (top + bottom) as u32);
    trace!(width, height, left, top, "compose canvas");

    let mut canvas = raster::new_canvas(width, height, TRANSPARENT);
    raster::paste(&mut canvas, bg, (left - bx, top - by));
    raster::alpha_composite(&mut canvas, fg, (left - fx, top - fy));

    Image::with_reference(canvas, Point::new(left as i32, top as i32))
}

/// Place `left` and `right` next to each other, vertically centered.
///
/// The right edge of `left` touches the left edge of `right` exactly.
pub fn side_by_side(left: &Image, right: &Image) -> Image {
    compose(
        &change_anchor(left, HorizontalAnchor::Right, VerticalAnchor::Middle),
        &change_anchor(right, HorizontalAnchor::Left, VerticalAnchor::Middle),
    )
}

/// Place `top` above `bottom`, horizontally centered.
pub fn stack_vertical(top: &Image, bottom: &Image) -> Image {
    compose(
        &change_anchor(top, HorizontalAnchor::Middle, VerticalAnchor::Bottom),
        &change_anchor(bottom, HorizontalAnchor::Middle, VerticalAnchor::Top),
    )
}

/// Lay `foreground` over `background` with their centers coinciding.
pub fn overlay(foreground: &Image, background: &Image) -> Image {
    compose(
        &change_anchor(foreground, HorizontalAnchor::Middle, VerticalAnchor::Middle),
        &change_anchor(background, HorizontalAnchor::Middle, VerticalAnchor::Middle),
    )
}

/// Left fold of [`compose`] starting from the empty image.
///
/// Earlier images end up in front: `compose_all([a, b, c])` equals
/// `compose(compose(a, b), c)`.
pub fn compose_all<'a, I>(images: I) -> Image
where
    I: IntoIterator<Item = &'a Image>,
{
    let mut count = 0usize;
    let result = images.into_iter().fold(Image::empty(), |acc, image| {
        count += 1;
        compose(&acc, image)
    });
    debug!(count, width = result.width(), height = result.height(), "compose_all");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::shapes::{circle, rectangle};

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn pixel(image: &Image, x: u32, y: u32) -> [u8; 4] {
        image.pixels().unwrap().get_pixel(x, y).0
    }

    #[test]
    fn test_compose_with_empty_is_identity() {
        let img = rectangle(20, 10, RED).unwrap();
        let left = compose(&Image::empty(), &img);
        let right = compose(&img, &Image::empty());
        assert_eq!(left, img);
        assert_eq!(right, img);
        assert!(left.shares_pixels_with(&img));
        assert!(right.shares_pixels_with(&img));
    }

    #[test]
    fn test_compose_empty_with_empty() {
        assert!(compose(&Image::empty(), &Image::empty()).is_empty());
    }

    #[test]
    fn test_compose_centered_same_size() {
        let fg = rectangle(10, 10, RED).unwrap();
        let bg = rectangle(10, 10, BLUE).unwrap();
        let out = compose(&fg, &bg);
        assert_eq!(out.dimensions(), (10, 10));
        assert_eq!(out.reference(), Some(Point::new(5, 5)));
        // Opaque foreground wins everywhere
        assert_eq!(pixel(&out, 0, 0), [255, 0, 0, 255]);
        assert_eq!(pixel(&out, 9, 9), [255, 0, 0, 255]);
    }

    #[test]
    fn test_compose_foreground_on_top() {
        let fg = rectangle(4, 4, RED).unwrap();
        let bg = rectangle(10, 10, BLUE).unwrap();
        let out = compose(&fg, &bg);
        assert_eq!(out.dimensions(), (10, 10));
        // fg ref (2,2) lands on bg ref (5,5): fg occupies 3..7
        assert_eq!(pixel(&out, 3, 3), [255, 0, 0, 255]);
        assert_eq!(pixel(&out, 6, 6), [255, 0, 0, 255]);
        assert_eq!(pixel(&out, 2, 2), [0, 0, 255, 255]);
        assert_eq!(pixel(&out, 7, 7), [0, 0, 255, 255]);
    }

    #[test]
    fn test_compose_transparent_areas_show_background() {
        let fg = circle(10, RED).unwrap();
        let bg = rectangle(20, 20, BLUE).unwrap();
        let out = compose(&fg, &bg);
        assert_eq!(pixel(&out, 0, 0), [0, 0, 255, 255]);
        assert_eq!(pixel(&out, 10, 10), [255, 0, 0, 255]);
    }

    #[test]
    fn test_compose_disjoint_extents() {
        // Reference points on opposite corners: canvas spans both images
        let fg = change_anchor(
            &rectangle(3, 2, RED).unwrap(),
            HorizontalAnchor::Left,
            VerticalAnchor::Top,
        );
        let bg = change_anchor(
            &rectangle(5, 4, BLUE).unwrap(),
            HorizontalAnchor::Right,
            VerticalAnchor::Bottom,
        );
        let out = compose(&fg, &bg);
        assert_eq!(out.dimensions(), (8, 6));
        assert_eq!(out.reference(), Some(Point::new(5, 4)));
        assert_eq!(pixel(&out, 0, 0), [0, 0, 255, 255]);
        assert_eq!(pixel(&out, 7, 5), [255, 0, 0, 255]);
        // Uncovered corners are transparent
        assert_eq!(pixel(&out, 7, 0)[3], 0);
        assert_eq!(pixel(&out, 0, 5)[3], 0);
    }

    #[test]
    fn test_compose_reference_outside_bounds() {
        let fg = Image::with_reference(
            raster::new_canvas(2, 2, RED.to_rgba()),
            Point::new(-3, 0),
        );
        let bg = rectangle(2, 2, BLUE).unwrap();
        let out = compose(&fg, &bg);
        // bg ref (1,1); fg sits 3 px to the right of its reference
        assert_eq!(out.dimensions(), (6, 3));
        assert_eq!(out.reference(), Some(Point::new(1, 1)));
        assert_eq!(pixel(&out, 4, 1), [255, 0, 0, 255]);
        assert_eq!(pixel(&out, 0, 1), [0, 0, 255, 255]);
        assert_eq!(pixel(&out, 3, 1)[3], 0);
    }

    #[test]
    fn test_side_by_side_clock_hand() {
        let head = change_anchor(
            &rectangle(60, 15, Color::BLACK).unwrap(),
            HorizontalAnchor::Right,
            VerticalAnchor::Middle,
        );
        let tail = change_anchor(
            &rectangle(255, 15, Color::BLACK).unwrap(),
            HorizontalAnchor::Left,
            VerticalAnchor::Middle,
        );
        let hand = side_by_side(&head, &tail);
        assert_eq!(hand.dimensions(), (315, 15));
        assert_eq!(hand.reference(), Some(Point::new(60, 7)));
        // A single solid bar
        assert!(hand.pixels().unwrap().pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_side_by_side_centers_vertically() {
        let out = side_by_side(&rectangle(4, 10, RED).unwrap(), &rectangle(6, 4, BLUE).unwrap());
        assert_eq!(out.dimensions(), (10, 10));
        // Right block rows 3..7
        assert_eq!(pixel(&out, 4, 2)[3], 0);
        assert_eq!(pixel(&out, 4, 3), [0, 0, 255, 255]);
        assert_eq!(pixel(&out, 9, 6), [0, 0, 255, 255]);
        assert_eq!(pixel(&out, 9, 7)[3], 0);
        assert_eq!(pixel(&out, 3, 0), [255, 0, 0, 255]);
    }

    #[test]
    fn test_stack_vertical() {
        let out = stack_vertical(&rectangle(10, 3, RED).unwrap(), &rectangle(4, 5, BLUE).unwrap());
        assert_eq!(out.dimensions(), (10, 8));
        assert_eq!(pixel(&out, 0, 2), [255, 0, 0, 255]);
        assert_eq!(pixel(&out, 3, 3), [0, 0, 255, 255]);
        assert_eq!(pixel(&out, 0, 3)[3], 0);
    }

    #[test]
    fn test_overlay_centers() {
        let out = overlay(&rectangle(4, 2, RED).unwrap(), &rectangle(8, 8, BLUE).unwrap());
        assert_eq!(out.dimensions(), (8, 8));
        assert_eq!(pixel(&out, 2, 3), [255, 0, 0, 255]);
        assert_eq!(pixel(&out, 5, 4), [255, 0, 0, 255]);
        assert_eq!(pixel(&out, 1, 3), [0, 0, 255, 255]);
        assert_eq!(pixel(&out, 2, 5), [0, 0, 255, 255]);
    }

    #[test]
    fn test_overlay_ignores_prior_anchor() {
        let fg = change_anchor(
            &rectangle(4, 4, RED).unwrap(),
            HorizontalAnchor::Left,
            VerticalAnchor::Top,
        );
        let bg = rectangle(8, 8, BLUE).unwrap();
        assert_eq!(overlay(&fg, &bg), overlay(&rectangle(4, 4, RED).unwrap(), &bg));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let fg = circle(7, RED).unwrap();
        let bg = rectangle(9, 20, Color::rgba(0, 0, 255, 100)).unwrap();
        assert_eq!(compose(&fg, &bg), compose(&fg, &bg));
    }

    #[test]
    fn test_compose_semi_transparent_blend() {
        let fg = rectangle(2, 2, Color::rgba(255, 0, 0, 128)).unwrap();
        let bg = rectangle(2, 2, BLUE).unwrap();
        let out = compose(&fg, &bg);
        let p = pixel(&out, 0, 0);
        assert_eq!(p[3], 255);
        assert!(p[0] > 100 && p[2] > 100, "pixel was {:?}", p);
    }

    #[test]
    fn test_compose_all_folds_in_order() {
        let a = rectangle(2, 2, RED).unwrap();
        let b = rectangle(6, 6, BLUE).unwrap();
        let c = rectangle(10, 10, Color::BLACK).unwrap();
        let folded = compose_all([&a, &b, &c]);
        assert_eq!(folded, compose(&compose(&a, &b), &c));
        assert!(compose_all(std::iter::empty::<&Image>()).is_empty());
        assert_eq!(compose_all([&a]), a);
    }
}
