//! Software renderer for the sheet.
//!
//! Executes a [`DisplayList`] to a pixel buffer, using the faces of a
//! [`FontCache`] for text. The renderer knows nothing about cells, symbols or
//! commands; it only runs drawing commands.

use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use sheet_layout::{Color, DisplayCommand, DisplayList, FontWeight};

use crate::canvas;
use crate::fonts::FontCache;

/// Software renderer that executes a display list to a pixel buffer.
pub struct Renderer {
    /// RGBA pixel buffer
    buffer: RgbaImage,
}

impl Renderer {
    /// Create a renderer with a white canvas of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255])),
        }
    }

    /// Execute a display list, drawing all commands to the pixel buffer.
    ///
    /// Commands are executed in order (back to front).
    pub fn render(&mut self, display_list: &DisplayList, fonts: &mut FontCache) {
        for command in display_list.commands() {
            self.execute_command(command, fonts);
        }
    }

    /// Execute a single display command.
    fn execute_command(&mut self, command: &DisplayCommand, fonts: &mut FontCache) {
        match command {
            DisplayCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => canvas::fill_rect(&mut self.buffer, *x, *y, *width, *height, rgba(*color)),
            DisplayCommand::StrokeRect {
                x,
                y,
                width,
                height,
                color,
            } => canvas::stroke_rect(&mut self.buffer, *x, *y, *width, *height, rgba(*color)),
            DisplayCommand::DrawText {
                x,
                y,
                text,
                font_size,
                font_weight,
                color,
            } => self.draw_text(fonts, text, *x, *y, *font_size, *font_weight, *color),
            DisplayCommand::DrawBitmap { x, y, bitmap } => {
                canvas::draw_gray(&mut self.buffer, *x, *y, bitmap);
            }
        }
    }

    /// Draw one line of text with its baseline origin at (`x`, `y`).
    #[allow(
        clippy::too_many_arguments,
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap
    )]
    fn draw_text(
        &mut self,
        fonts: &mut FontCache,
        text: &str,
        x: f32,
        y: f32,
        font_size: f32,
        font_weight: FontWeight,
        color: Color,
    ) {
        let face = fonts.face(font_weight, font_size);
        let color = rgba(color);
        let baseline = y.round() as i64;
        let mut cursor_x = x;

        for ch in text.chars().filter(|ch| !ch.is_control()) {
            let glyph = face.glyph(ch);
            let metrics = glyph.metrics;

            // fontdue's ymin is the offset of the bitmap's bottom edge above
            // the baseline.
            let glyph_x = cursor_x.round() as i64 + i64::from(metrics.xmin);
            let glyph_y = baseline - metrics.height as i64 - i64::from(metrics.ymin);

            for (i, coverage) in glyph.coverage.iter().enumerate() {
                let gx = (i % metrics.width) as i64;
                let gy = (i / metrics.width) as i64;
                canvas::blend_pixel(&mut self.buffer, glyph_x + gx, glyph_y + gy, color, *coverage);
            }

            cursor_x += metrics.advance_width;
        }
    }

    /// The rendered pixels.
    #[must_use]
    pub const fn image(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Consume the renderer and return its pixels.
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.buffer
    }
}

/// Write `image` to `path` as PNG.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoded.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to save PNG to '{}'", path.display()))
}

const fn rgba(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, color.a])
}
