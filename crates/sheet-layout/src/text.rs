//! Text placement: anchored single lines and word-wrapped blocks.
//!
//! Coordinates follow the usual raster convention (y grows downwards) and
//! every emitted [`DisplayCommand::DrawText`] carries its baseline origin.

use crate::metrics::{FontMetrics, FontWeight};
use crate::paint::{Color, DisplayCommand, DisplayList};

/// Font size, weight and color of a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f32,
    /// Font weight.
    pub weight: FontWeight,
    /// Fill color.
    pub color: Color,
}

impl TextStyle {
    /// Black regular text.
    #[must_use]
    pub const fn regular(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            color: Color::BLACK,
        }
    }

    /// Black bold text.
    #[must_use]
    pub const fn bold(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
            color: Color::BLACK,
        }
    }
}

/// Break `text` into lines no wider than `max_width`.
///
/// Words are separated by whitespace and packed greedily. A word that is wider
/// than `max_width` on its own gets a line to itself. Explicit newlines start
/// a new line.
#[must_use]
pub fn wrap_words(
    text: &str,
    max_width: f32,
    style: TextStyle,
    metrics: &dyn FontMetrics,
) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }
            let candidate = format!("{line} {word}");
            if metrics.text_width(&candidate, style.size, style.weight) > max_width {
                lines.push(std::mem::replace(&mut line, word.to_string()));
            } else {
                line = candidate;
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines
}

/// Draw one line of text anchored at (`x`, `y`).
///
/// `anchor_x` and `anchor_y` are fractions of the text's width and line
/// height: (0, 0) puts the baseline origin at the point, (0.5, 0.5) centers
/// the text horizontally and drops the baseline half a line below it.
#[allow(clippy::too_many_arguments)]
pub fn draw_anchored(
    list: &mut DisplayList,
    metrics: &dyn FontMetrics,
    text: &str,
    x: f32,
    y: f32,
    anchor_x: f32,
    anchor_y: f32,
    style: TextStyle,
) {
    let width = metrics.text_width(text, style.size, style.weight);
    let height = metrics.line_height(style.size, style.weight);
    list.push(DisplayCommand::DrawText {
        x: anchor_x.mul_add(-width, x),
        y: anchor_y.mul_add(height, y),
        text: text.to_string(),
        font_size: style.size,
        font_weight: style.weight,
        color: style.color,
    });
}

/// Word-wrap `text` into a box `width` wide whose top edge is at `y`, and
/// draw each line centered in the box with `line_spacing` times the font's
/// line height between baselines. Returns the number of lines drawn.
#[allow(clippy::too_many_arguments, clippy::cast_precision_loss)]
pub fn draw_wrapped(
    list: &mut DisplayList,
    metrics: &dyn FontMetrics,
    text: &str,
    x: f32,
    y: f32,
    width: f32,
    line_spacing: f32,
    style: TextStyle,
) -> usize {
    let lines = wrap_words(text, width, style, metrics);
    let line_height = metrics.line_height(style.size, style.weight);
    let center_x = width.mul_add(0.5, x);

    for (i, line) in lines.iter().enumerate() {
        let top = (i as f32 * line_height).mul_add(line_spacing, y);
        draw_anchored(list, metrics, line, center_x, top, 0.5, 1.0, style);
    }
    lines.len()
}
