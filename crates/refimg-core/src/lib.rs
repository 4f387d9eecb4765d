//! refimg Core - reference-point image algebra
//!
//! This crate composes raster images by aligning a designated reference point
//! on each image, and rotates images about their own reference point while
//! growing the canvas so nothing is clipped. Images are immutable values;
//! every operation returns a new one.
//!
//! # Example
//!
//! ```
//! use refimg_core::anchor::{change_anchor, HorizontalAnchor, VerticalAnchor};
//! use refimg_core::{rotate, shapes, side_by_side, Color, Point};
//!
//! let head = change_anchor(
//!     &shapes::rectangle(60, 15, Color::BLACK).unwrap(),
//!     HorizontalAnchor::Right,
//!     VerticalAnchor::Middle,
//! );
//! let tail = change_anchor(
//!     &shapes::rectangle(255, 15, Color::BLACK).unwrap(),
//!     HorizontalAnchor::Left,
//!     VerticalAnchor::Middle,
//! );
//! let hand = side_by_side(&head, &tail);
//! assert_eq!(hand.dimensions(), (315, 15));
//! assert_eq!(hand.reference(), Some(Point::new(60, 7)));
//!
//! let at_three = rotate(&hand, 0.0);
//! let at_twelve = rotate(&hand, 90.0);
//! assert_eq!(at_three, hand);
//! assert_eq!(at_twelve.dimensions(), (15, 315));
//! ```
//!
//! # Logging
//!
//! Operations emit `tracing` events (`debug` for operation summaries, `trace`
//! for per-call geometry). The crate never installs a subscriber.

pub mod anchor;
pub mod color;
pub mod compose;
pub mod debug;
pub mod encode;
pub mod error;
pub mod raster;
pub mod shapes;
pub mod transform;
pub mod types;

pub use anchor::{change_anchor, HorizontalAnchor, VerticalAnchor};
pub use color::{decode_color, Color};
pub use compose::{compose, compose_all, overlay, side_by_side, stack_vertical};
pub use debug::debug_overlay;
pub use encode::{EncodeError, GifOptions, PngOptions};
pub use error::BuildError;
pub use raster::InterpolationFilter;
pub use transform::{rotate, rotate_with};
pub use types::{Image, Point};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_image_is_send_sync() {
        assert_send_sync::<Image>();
    }

    #[test]
    fn test_clock_dial_assembly() {
        // Twelve ticks around a disc, built from the public surface only
        let disc = shapes::circle(30, decode_color("gray").unwrap()).unwrap();
        let tick = change_anchor(
            &shapes::rectangle(20, 4, Color::BLACK).unwrap(),
            HorizontalAnchor::Left,
            VerticalAnchor::Middle,
        );
        let ticks: Vec<Image> = (0..12).map(|i| rotate(&tick, i as f64 * 30.0)).collect();
        let dial = compose_all(ticks.iter().chain(std::iter::once(&disc)));

        let (w, h) = dial.dimensions();
        assert!(w >= 60 && h >= 60);
        assert!((w as i64 - h as i64).abs() <= 2);
    }

    #[test]
    fn test_equal_images_hash_equally() {
        let a = shapes::rectangle(10, 4, Color::BLACK).unwrap();
        let b = shapes::rectangle(10, 4, Color::BLACK).unwrap();
        let moved = change_anchor(&a, HorizontalAnchor::Left, VerticalAnchor::Top);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        set.insert(moved);
        set.insert(Image::empty());
        set.insert(shapes::empty_image());
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_stack_and_overlay_sizes() {
        let wide = shapes::rectangle(60, 10, Color::BLACK).unwrap();
        let tall = shapes::rectangle(20, 40, Color::WHITE).unwrap();
        assert_eq!(stack_vertical(&wide, &tall).dimensions(), (60, 50));
        assert_eq!(overlay(&wide, &tall).dimensions(), (60, 40));
    }
}
