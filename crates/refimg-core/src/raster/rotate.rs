//! Auto-fitting raster rotation with nearest and bilinear interpolation.
//!
//! # Algorithm
//!
//! The rotation uses inverse mapping: for each pixel in the output canvas,
//! we calculate which source position lands on its center and sample there.
//! Positions outside the source are transparent.
//!
//! For counter-clockwise rotation by θ in a y-down frame the inverse
//! transform is:
//! ```text
//! src_x =  (dst_x - dst_cx) * cos(-θ) + (dst_y - dst_cy) * sin(-θ) + src_cx
//! src_y = -(dst_x - dst_cx) * sin(-θ) + (dst_y - dst_cy) * cos(-θ) + src_cy
//! ```

use super::{new_canvas, TRANSPARENT};
use crate::types::Point;
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Interpolation filter for rotation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationFilter {
    /// Nearest neighbor: hard edges, no new alpha values.
    #[default]
    Nearest,
    /// Bilinear interpolation on premultiplied alpha: smoother edges.
    Bilinear,
}

/// Trig values are snapped to this many decimals so that right angles
/// produce exact zeros.
const TRIG_DECIMALS: f64 = 1e15;

#[inline]
fn snap(v: f64) -> f64 {
    (v * TRIG_DECIMALS).round() / TRIG_DECIMALS
}

/// Counter-clockwise rotation in y-down pixel space.
///
/// The angle is negated before building the standard rotation matrix, since
/// the standard matrix turns clockwise once y points down. Every rotated
/// coordinate in the crate goes through this type so that they all share
/// one rounding policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix {
    cos: f64,
    sin: f64,
}

impl RotationMatrix {
    pub fn counter_clockwise(degrees: f64) -> Self {
        let theta = (-degrees).to_radians();
        Self {
            cos: snap(theta.cos()),
            sin: snap(theta.sin()),
        }
    }

    /// Rotate `(x, y)` about the origin.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.cos - y * self.sin,
            x * self.sin + y * self.cos,
        )
    }

    /// Inverse rotation about the origin.
    #[inline]
    pub fn apply_inverse(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.cos + y * self.sin,
            -x * self.sin + y * self.cos,
        )
    }

    /// Rotate an integer point about the origin, rounding half away from zero.
    #[inline]
    pub fn rotate_point(&self, point: Point) -> Point {
        let (x, y) = self.apply(point.x as f64, point.y as f64);
        Point::new(x.round() as i32, y.round() as i32)
    }
}

/// Compute the canvas size needed to hold a `width x height` raster rotated
/// about its center.
///
/// The rotated corners are measured in absolute coordinates and the extent is
/// `ceil(max) - floor(min)` on each axis, so exact right angles keep integer
/// sizes and arbitrary angles round outward.
pub fn compute_rotated_bounds(width: u32, height: u32, degrees: f64) -> (u32, u32) {
    let matrix = RotationMatrix::counter_clockwise(degrees);
    let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);

    let corners = [
        (0.0, 0.0),
        (width as f64, 0.0),
        (width as f64, height as f64),
        (0.0, height as f64),
    ];

    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for (x, y) in corners {
        let (rx, ry) = matrix.apply_inverse(x - cx, y - cy);
        let (rx, ry) = (rx + cx, ry + cy);
        min_x = min_x.min(rx);
        max_x = max_x.max(rx);
        min_y = min_y.min(ry);
        max_y = max_y.max(ry);
    }

    let new_w = (max_x.ceil() - min_x.floor()) as u32;
    let new_h = (max_y.ceil() - min_y.floor()) as u32;
    (new_w, new_h)
}

/// Rotate a raster counter-clockwise about its center, expanding the canvas
/// so nothing is clipped. Newly exposed area is transparent.
pub fn rotate_expand(src: &RgbaImage, degrees: f64, filter: InterpolationFilter) -> RgbaImage {
    let (src_w, src_h) = src.dimensions();
    let (dst_w, dst_h) = compute_rotated_bounds(src_w, src_h, degrees);
    trace!(src_w, src_h, dst_w, dst_h, degrees, "rotate_expand");

    let matrix = RotationMatrix::counter_clockwise(degrees);
    let (src_cx, src_cy) = (src_w as f64 / 2.0, src_h as f64 / 2.0);
    let (dst_cx, dst_cy) = (dst_w as f64 / 2.0, dst_h as f64 / 2.0);

    let mut output = new_canvas(dst_w, dst_h, TRANSPARENT);

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            // Map the destination pixel center back into the source
            let dx = dst_x as f64 + 0.5 - dst_cx;
            let dy = dst_y as f64 + 0.5 - dst_cy;
            let (sx, sy) = matrix.apply_inverse(dx, dy);
            let (src_x, src_y) = (sx + src_cx, sy + src_cy);

            let pixel = match filter {
                InterpolationFilter::Nearest => sample_nearest(src, src_x, src_y),
                InterpolationFilter::Bilinear => sample_bilinear(src, src_x - 0.5, src_y - 0.5),
            };
            output.put_pixel(dst_x, dst_y, pixel);
        }
    }

    output
}

/// Sample the pixel whose area contains `(x, y)`.
fn sample_nearest(image: &RgbaImage, x: f64, y: f64) -> Rgba<u8> {
    if x < 0.0 || y < 0.0 {
        return TRANSPARENT;
    }
    let (px, py) = (x.floor() as u64, y.floor() as u64);
    if px >= image.width() as u64 || py >= image.height() as u64 {
        return TRANSPARENT;
    }
    *image.get_pixel(px as u32, py as u32)
}

/// Get a pixel as premultiplied [f64; 4], transparent outside the image.
#[inline]
fn get_premultiplied(image: &RgbaImage, px: i64, py: i64) -> [f64; 4] {
    if px < 0 || py < 0 || px >= image.width() as i64 || py >= image.height() as i64 {
        return [0.0; 4];
    }
    let p = image.get_pixel(px as u32, py as u32);
    let a = p[3] as f64 / 255.0;
    [p[0] as f64 * a, p[1] as f64 * a, p[2] as f64 * a, p[3] as f64]
}

/// Sample a pixel using bilinear interpolation.
///
/// `(x, y)` is in pixel-index space (pixel centers at integers). The four
/// nearest pixels are weighted by distance; colors are interpolated
/// premultiplied so transparent neighbors do not bleed black into edges.
fn sample_bilinear(image: &RgbaImage, x: f64, y: f64) -> Rgba<u8> {
    let (w, h) = (image.width() as f64, image.height() as f64);
    if x <= -1.0 || y <= -1.0 || x >= w || y >= h {
        return TRANSPARENT;
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = get_premultiplied(image, x0, y0);
    let p10 = get_premultiplied(image, x0 + 1, y0);
    let p01 = get_premultiplied(image, x0, y0 + 1);
    let p11 = get_premultiplied(image, x0 + 1, y0 + 1);

    let mut acc = [0.0f64; 4];
    for i in 0..4 {
        acc[i] = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
    }

    let alpha = acc[3].clamp(0.0, 255.0).round();
    if alpha == 0.0 {
        return TRANSPARENT;
    }
    let a = acc[3] / 255.0;
    Rgba([
        (acc[0] / a).clamp(0.0, 255.0).round() as u8,
        (acc[1] / a).clamp(0.0, 255.0).round() as u8,
        (acc[2] / a).clamp(0.0, 255.0).round() as u8,
        alpha as u8,
    ])
}
