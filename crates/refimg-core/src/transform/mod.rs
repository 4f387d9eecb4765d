//! Geometric transforms on reference-point images.
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = counter-clockwise on screen
//! - Rotation happens about the image's own reference point
//! - Origin is the top-left corner, y grows down

mod rotation;

pub use rotation::{rotate, rotate_with, CenteringPadding};
