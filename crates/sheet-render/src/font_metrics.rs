//! Font metrics backed by fontdue for accurate text measurement during layout.

use sheet_layout::{FontMetrics, FontWeight};

use crate::fonts::{FontCache, advance_width, line_height};

/// Measures text with the fonts held by a [`FontCache`].
///
/// Uses `Font::metrics()` (not `Font::rasterize()`), so measuring never
/// renders bitmaps. The advance widths match the cursor advancement used by
/// the renderer.
pub struct FontdueFontMetrics<'a> {
    fonts: &'a FontCache,
}

impl<'a> FontdueFontMetrics<'a> {
    /// Create a metrics provider over the fonts in `fonts`.
    #[must_use]
    pub const fn new(fonts: &'a FontCache) -> Self {
        Self { fonts }
    }
}

impl FontMetrics for FontdueFontMetrics<'_> {
    fn text_width(&self, text: &str, font_size: f32, weight: FontWeight) -> f32 {
        advance_width(self.fonts.font(weight), text, font_size)
    }

    fn line_height(&self, font_size: f32, weight: FontWeight) -> f32 {
        line_height(self.fonts.font(weight), font_size)
    }
}
