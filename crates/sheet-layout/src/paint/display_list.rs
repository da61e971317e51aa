//! Display List - a sequence of drawing commands
//!
//! The display list is the output of layout. It contains every drawing
//! command needed to produce the page, back to front.

use sheet_symbols::GrayImage;

use crate::metrics::FontWeight;

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Light gray used for cell borders.
    pub const CELL_BORDER: Self = Self::rgb(220, 220, 220);

    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A single drawing command.
///
/// Commands are added to the display list in painting order (back to front).
#[derive(Debug, Clone)]
pub enum DisplayCommand {
    /// Fill a rectangle with a solid color.
    FillRect {
        /// X coordinate of the rectangle's top-left corner.
        x: f32,
        /// Y coordinate of the rectangle's top-left corner.
        y: f32,
        /// Width of the rectangle in pixels.
        width: f32,
        /// Height of the rectangle in pixels.
        height: f32,
        /// Fill color.
        color: Color,
    },

    /// Outline a rectangle with a one-pixel line.
    StrokeRect {
        /// X coordinate of the rectangle's top-left corner.
        x: f32,
        /// Y coordinate of the rectangle's top-left corner.
        y: f32,
        /// Width of the rectangle in pixels.
        width: f32,
        /// Height of the rectangle in pixels.
        height: f32,
        /// Line color.
        color: Color,
    },

    /// Draw a single line of text.
    DrawText {
        /// X coordinate of the baseline origin.
        x: f32,
        /// Y coordinate of the baseline.
        y: f32,
        /// The text content to draw.
        text: String,
        /// Font size in pixels.
        font_size: f32,
        /// Font weight.
        font_weight: FontWeight,
        /// Text color.
        color: Color,
    },

    /// Composite a grayscale bitmap (a scaled symbol) at integer coordinates.
    DrawBitmap {
        /// X coordinate of the bitmap's top-left corner.
        x: i32,
        /// Y coordinate of the bitmap's top-left corner.
        y: i32,
        /// Pixels to copy.
        bitmap: GrayImage,
    },
}

/// A list of drawing commands in painting order.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command to the display list.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// Get the commands in painting order.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }
}
