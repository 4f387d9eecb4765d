//! Core value types: the reference-pointed [`Image`] and [`Point`].

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An integer pixel coordinate relative to an image's top-left corner.
///
/// Reference points are not clamped to the image bounds: the `right` and
/// `bottom` anchors place them one pixel past the last column/row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift the point by the given offsets.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Structural middle of an axis of `len` pixels: `ceil((len - 1) / 2)`.
///
/// Computed in integers. Halving through floats rounds inconsistently
/// between odd and even lengths.
#[inline]
pub(crate) fn structural_middle(len: u32) -> i32 {
    len.saturating_sub(1).div_ceil(2) as i32
}

#[derive(Clone)]
struct Layer {
    pixels: Arc<RgbaImage>,
    reference: Point,
}

/// An immutable RGBA image carrying a reference point.
///
/// The reference point is the alignment anchor used by
/// [`compose`](crate::compose::compose) and the center used by
/// [`rotate`](crate::transform::rotate).
///
/// # Sharing
///
/// The pixel buffer sits behind an [`Arc`]. Cloning an image, or changing only
/// its reference point, shares the buffer; any operation that produces new
/// pixels allocates a new one. No method hands out mutable access to the
/// buffer, so a returned image never changes underneath its holder.
///
/// # Equality
///
/// Two images are equal when both are empty, or when both have the same
/// dimensions, the same pixel bytes and the same reference point. [`Hash`]
/// follows the same rule, so every empty image hashes identically.
#[derive(Clone, Default)]
pub struct Image {
    layer: Option<Layer>,
}

impl Image {
    /// The unique 0x0 image.
    pub fn empty() -> Self {
        Self { layer: None }
    }

    /// Wrap a raster, placing the reference point at its structural center.
    ///
    /// A raster with a zero dimension becomes the empty image.
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        let reference = Point::new(
            structural_middle(pixels.width()),
            structural_middle(pixels.height()),
        );
        Self::with_reference(pixels, reference)
    }

    /// Wrap a raster with an explicit reference point.
    ///
    /// A raster with a zero dimension becomes the empty image and the
    /// reference point is discarded.
    pub fn with_reference(pixels: RgbaImage, reference: Point) -> Self {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Self::empty();
        }
        Self {
            layer: Some(Layer {
                pixels: Arc::new(pixels),
                reference,
            }),
        }
    }

    /// Same pixels, new reference point. The buffer is shared, not copied.
    pub(crate) fn relabel(&self, reference: Point) -> Self {
        match &self.layer {
            Some(layer) => Self {
                layer: Some(Layer {
                    pixels: Arc::clone(&layer.pixels),
                    reference,
                }),
            },
            None => Self::empty(),
        }
    }

    /// Returns true for the 0x0 image.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layer.is_none()
    }

    /// Image width in pixels (0 for the empty image).
    pub fn width(&self) -> u32 {
        self.layer.as_ref().map_or(0, |l| l.pixels.width())
    }

    /// Image height in pixels (0 for the empty image).
    pub fn height(&self) -> u32 {
        self.layer.as_ref().map_or(0, |l| l.pixels.height())
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// The reference point, or `None` for the empty image.
    pub fn reference(&self) -> Option<Point> {
        self.layer.as_ref().map(|l| l.reference)
    }

    /// Read-only view of the pixel buffer, or `None` for the empty image.
    pub fn pixels(&self) -> Option<&RgbaImage> {
        self.layer.as_ref().map(|l| l.pixels.as_ref())
    }

    /// Owned copy of the pixel buffer, or `None` for the empty image.
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        self.pixels().cloned()
    }

    /// Pixel buffer and reference point together.
    pub(crate) fn parts(&self) -> Option<(&RgbaImage, Point)> {
        self.layer
            .as_ref()
            .map(|l| (l.pixels.as_ref(), l.reference))
    }

    /// Whether two images share one pixel buffer.
    #[cfg(test)]
    pub(crate) fn shares_pixels_with(&self, other: &Image) -> bool {
        match (&self.layer, &other.layer) {
            (Some(a), Some(b)) => Arc::ptr_eq(&a.pixels, &b.pixels),
            _ => false,
        }
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        match (&self.layer, &other.layer) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.reference == b.reference
                    && a.pixels.dimensions() == b.pixels.dimensions()
                    && (Arc::ptr_eq(&a.pixels, &b.pixels)
                        || a.pixels.as_raw() == b.pixels.as_raw())
            }
            _ => false,
        }
    }
}

impl Eq for Image {}

impl Hash for Image {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.layer {
            None => 0u8.hash(state),
            Some(layer) => {
                1u8.hash(state);
                layer.pixels.dimensions().hash(state);
                layer.pixels.as_raw().hash(state);
                layer.reference.hash(state);
            }
        }
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.layer {
            None => f.write_str("Image(empty)"),
            Some(layer) => f
                .debug_struct("Image")
                .field("width", &layer.pixels.width())
                .field("height", &layer.pixels.height())
                .field("reference", &layer.reference)
                .finish(),
        }
    }
}
