//! Pixel operations on an RGBA canvas.
//!
//! All operations clip to the canvas bounds; drawing partly or fully outside
//! the page is not an error.

use image::{GrayImage, Rgba, RgbaImage};

/// Set pixel (`x`, `y`) to `color` if it lies on the canvas.
#[allow(clippy::cast_sign_loss)]
fn put_clipped(canvas: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && x < i64::from(canvas.width()) && y < i64::from(canvas.height()) {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

/// Fill the rectangle with top-left (`x`, `y`) and size `width` x `height`.
#[allow(clippy::cast_possible_truncation)]
pub fn fill_rect(canvas: &mut RgbaImage, x: f32, y: f32, width: f32, height: f32, color: Rgba<u8>) {
    let x0 = x.round() as i64;
    let y0 = y.round() as i64;
    let x1 = (x + width).round() as i64;
    let y1 = (y + height).round() as i64;
    for py in y0..y1 {
        for px in x0..x1 {
            put_clipped(canvas, px, py, color);
        }
    }
}

/// Outline a rectangle with a one-pixel line.
///
/// Edges land on the pixel that contains them, so neighbouring rectangles
/// that share an edge share a single line.
#[allow(clippy::cast_possible_truncation)]
pub fn stroke_rect(
    canvas: &mut RgbaImage,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: Rgba<u8>,
) {
    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let x1 = (x + width).floor() as i64;
    let y1 = (y + height).floor() as i64;
    for px in x0..=x1 {
        put_clipped(canvas, px, y0, color);
        put_clipped(canvas, px, y1, color);
    }
    for py in y0..=y1 {
        put_clipped(canvas, x0, py, color);
        put_clipped(canvas, x1, py, color);
    }
}

/// Blend `color` into pixel (`x`, `y`) with the given coverage.
#[allow(clippy::cast_sign_loss)]
pub fn blend_pixel(canvas: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>, coverage: u8) {
    if coverage == 0
        || x < 0
        || y < 0
        || x >= i64::from(canvas.width())
        || y >= i64::from(canvas.height())
    {
        return;
    }
    let bg = *canvas.get_pixel(x as u32, y as u32);
    canvas.put_pixel(x as u32, y as u32, alpha_blend(color, bg, coverage));
}

/// Copy a grayscale bitmap onto the canvas with its top-left at (`x`, `y`).
pub fn draw_gray(canvas: &mut RgbaImage, x: i32, y: i32, bitmap: &GrayImage) {
    for (bx, by, pixel) in bitmap.enumerate_pixels() {
        let luma = pixel.0[0];
        put_clipped(
            canvas,
            i64::from(x) + i64::from(bx),
            i64::from(y) + i64::from(by),
            Rgba([luma, luma, luma, 255]),
        );
    }
}

/// Alpha blend a foreground color onto a background color.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn alpha_blend(fg: Rgba<u8>, bg: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    let a = f32::from(alpha) / 255.0 * (f32::from(fg[3]) / 255.0);
    let inv_a = 1.0 - a;

    Rgba([
        f32::from(fg[0]).mul_add(a, f32::from(bg[0]) * inv_a) as u8,
        f32::from(fg[1]).mul_add(a, f32::from(bg[1]) * inv_a) as u8,
        f32::from(fg[2]).mul_add(a, f32::from(bg[2]) * inv_a) as u8,
        255,
    ])
}
