//! Raster primitives the composition engine is built on.
//!
//! Everything here works on plain [`RgbaImage`] buffers with straight
//! (non-premultiplied) alpha. The engine only ever mutates canvases it has
//! just allocated; once a buffer is wrapped in an [`Image`](crate::Image) it
//! is never touched again.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, x grows right, y grows down
//! - Offsets may be negative; pixels falling outside the destination are clipped
//! - A pixel "is transparent" when its alpha channel is exactly 0

mod draw;
mod rotate;

pub use draw::{fill_ellipse, fill_pie_slice, fill_polygon};
pub use rotate::{compute_rotated_bounds, rotate_expand, InterpolationFilter, RotationMatrix};

use image::{Rgba, RgbaImage};

/// Fully transparent fill used for every new canvas.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// An axis-aligned pixel rectangle. `x + width` and `y + height` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a whole `width x height` raster.
    pub fn of_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }
}

/// Allocate a `width x height` canvas filled with `fill`.
pub fn new_canvas(width: u32, height: u32, fill: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, fill)
}

/// Copy `src` into `dst` at `offset`, replacing the destination pixels.
pub fn paste(dst: &mut RgbaImage, src: &RgbaImage, offset: (i64, i64)) {
    blit(dst, src, offset, |_, s| s);
}

/// Blend `src` over `dst` at `offset` (Porter-Duff "over").
pub fn alpha_composite(dst: &mut RgbaImage, src: &RgbaImage, offset: (i64, i64)) {
    blit(dst, src, offset, over_pixel);
}

/// Translate `src` into a new transparent canvas of `size`, placing its
/// top-left corner at `offset`.
pub fn translate(src: &RgbaImage, size: (u32, u32), offset: (i64, i64)) -> RgbaImage {
    let mut canvas = new_canvas(size.0, size.1, TRANSPARENT);
    paste(&mut canvas, src, offset);
    canvas
}

/// Smallest rectangle containing every pixel with non-zero alpha.
///
/// Returns `None` when the raster is empty or fully transparent.
pub fn bounding_box(src: &RgbaImage) -> Option<Rect> {
    let (mut min_x, mut min_y) = (u32::MAX, u32::MAX);
    let (mut max_x, mut max_y) = (0u32, 0u32);
    let mut found = false;

    for (x, y, pixel) in src.enumerate_pixels() {
        if pixel[3] != 0 {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    found.then(|| Rect::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

/// Copy the pixels inside `rect` into a new raster.
pub fn crop(src: &RgbaImage, rect: Rect) -> RgbaImage {
    image::imageops::crop_imm(src, rect.x, rect.y, rect.width, rect.height).to_image()
}

/// Composite one straight-alpha pixel over another.
///
/// Fully opaque sources replace the destination and fully transparent sources
/// leave it bit-exact; only partial alpha goes through the blend.
#[inline]
pub fn over_pixel(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    match src[3] {
        255 => return src,
        0 => return dst,
        _ => {}
    }

    let src_a = src[3] as f32 / 255.0;
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = (src[i] as f32 * src_a + dst[i] as f32 * dst_a * (1.0 - src_a)) / out_a;
        out[i] = c.clamp(0.0, 255.0).round() as u8;
    }
    out[3] = (out_a * 255.0).clamp(0.0, 255.0).round() as u8;
    Rgba(out)
}

/// Walk the overlap of `src` placed at `offset` inside `dst`, combining pixels.
fn blit<F>(dst: &mut RgbaImage, src: &RgbaImage, offset: (i64, i64), combine: F)
where
    F: Fn(Rgba<u8>, Rgba<u8>) -> Rgba<u8>,
{
    let (dst_w, dst_h) = (dst.width() as i64, dst.height() as i64);
    let (src_w, src_h) = (src.width() as i64, src.height() as i64);
    let (ox, oy) = offset;

    // Clip the source rectangle against the destination bounds
    let x0 = ox.max(0);
    let y0 = oy.max(0);
    let x1 = (ox + src_w).min(dst_w);
    let y1 = (oy + src_h).min(dst_h);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for y in y0..y1 {
        for x in x0..x1 {
            let s = *src.get_pixel((x - ox) as u32, (y - oy) as u32);
            let d = dst.get_pixel_mut(x as u32, y as u32);
            *d = combine(*d, s);
        }
    }
}
