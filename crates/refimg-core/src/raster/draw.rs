//! Filled shape rasterization.
//!
//! Shapes are evaluated per pixel: a pixel is painted when its center
//! `(x + 0.5, y + 0.5)` lies inside the shape. Painting replaces the pixel,
//! it does not blend. There is no anti-aliasing.

use super::Rect;
use image::{Rgba, RgbaImage};

/// Fill the ellipse inscribed in `bounds`.
pub fn fill_ellipse(raster: &mut RgbaImage, bounds: Rect, fill: Rgba<u8>) {
    fill_where(raster, bounds, fill, |dx, dy, rx, ry| {
        inside_ellipse(dx, dy, rx, ry)
    });
}

/// Fill the pie slice of the ellipse inscribed in `bounds` between
/// `start_degrees` and `end_degrees`.
///
/// Angles are measured clockwise from the 3 o'clock direction. When
/// `end < start`, `end` is wrapped forward by whole turns. A sweep of 360°
/// or more fills the whole ellipse.
pub fn fill_pie_slice(
    raster: &mut RgbaImage,
    bounds: Rect,
    start_degrees: f64,
    end_degrees: f64,
    fill: Rgba<u8>,
) {
    let mut end = end_degrees;
    while end < start_degrees {
        end += 360.0;
    }
    let sweep = end - start_degrees;

    if sweep >= 360.0 {
        fill_ellipse(raster, bounds, fill);
        return;
    }

    let start = start_degrees.rem_euclid(360.0);
    fill_where(raster, bounds, fill, |dx, dy, rx, ry| {
        if !inside_ellipse(dx, dy, rx, ry) {
            return false;
        }
        // y grows downward, so atan2 already runs clockwise on screen
        let angle = dy.atan2(dx).to_degrees();
        let relative = (angle - start).rem_euclid(360.0);
        relative <= sweep
    });
}

/// Fill a polygon given by its vertices (even-odd rule).
pub fn fill_polygon(raster: &mut RgbaImage, points: &[(f64, f64)], fill: Rgba<u8>) {
    if points.len() < 3 {
        return;
    }

    let (w, h) = (raster.width() as f64, raster.height() as f64);
    let min_x = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let min_y = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

    let x0 = min_x.floor().clamp(0.0, w) as u32;
    let x1 = max_x.ceil().clamp(0.0, w) as u32;
    let y0 = min_y.floor().clamp(0.0, h) as u32;
    let y1 = max_y.ceil().clamp(0.0, h) as u32;

    for y in y0..y1 {
        for x in x0..x1 {
            if inside_polygon(points, x as f64 + 0.5, y as f64 + 0.5) {
                raster.put_pixel(x, y, fill);
            }
        }
    }
}

/// Paint every pixel of `bounds` (clipped to the raster) for which
/// `predicate(dx, dy, rx, ry)` holds, where `(dx, dy)` is the pixel center
/// relative to the center of `bounds` and `(rx, ry)` are its half extents.
fn fill_where<F>(raster: &mut RgbaImage, bounds: Rect, fill: Rgba<u8>, predicate: F)
where
    F: Fn(f64, f64, f64, f64) -> bool,
{
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }

    let rx = bounds.width as f64 / 2.0;
    let ry = bounds.height as f64 / 2.0;
    let cx = bounds.x as f64 + rx;
    let cy = bounds.y as f64 + ry;

    let x_end = (bounds.x + bounds.width).min(raster.width());
    let y_end = (bounds.y + bounds.height).min(raster.height());

    for y in bounds.y..y_end {
        for x in bounds.x..x_end {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            if predicate(dx, dy, rx, ry) {
                raster.put_pixel(x, y, fill);
            }
        }
    }
}

#[inline]
fn inside_ellipse(dx: f64, dy: f64, rx: f64, ry: f64) -> bool {
    (dx / rx).powi(2) + (dy / ry).powi(2) <= 1.0
}

/// Even-odd crossing test.
fn inside_polygon(points: &[(f64, f64)], x: f64, y: f64) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) {
            let x_cross = xi + (y - yi) * (xj - xi) / (yj - yi);
            if x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
