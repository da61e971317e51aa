//! Text measurement.
//!
//! Layout needs text widths to center labels and wrap descriptions. The
//! measurements come from whatever fonts the renderer loaded, so they are
//! supplied through [`FontMetrics`].

/// Font weight used for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    /// Body text.
    #[default]
    Regular,
    /// Labels.
    Bold,
}

/// Source of text measurements.
pub trait FontMetrics {
    /// Total advance width of `text` at `font_size`.
    ///
    /// This must match the cursor advancement used when the text is drawn.
    fn text_width(&self, text: &str, font_size: f32, weight: FontWeight) -> f32;

    /// Distance between consecutive baselines at `font_size` with a line
    /// spacing of 1.0.
    fn line_height(&self, font_size: f32, weight: FontWeight) -> f32;
}

/// Fixed-ratio metrics for when no font is at hand.
///
/// Advance is 0.6 x the font size per character (10% wider for bold) and the
/// line height 1.2 x the font size.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateFontMetrics;

impl FontMetrics for ApproximateFontMetrics {
    #[allow(clippy::cast_precision_loss)]
    fn text_width(&self, text: &str, font_size: f32, weight: FontWeight) -> f32 {
        const CHAR_WIDTH_RATIO: f32 = 0.6;
        const BOLD_WIDTH_RATIO: f32 = 0.66;
        let ratio = match weight {
            FontWeight::Regular => CHAR_WIDTH_RATIO,
            FontWeight::Bold => BOLD_WIDTH_RATIO,
        };
        text.chars().filter(|c| !c.is_control()).count() as f32 * font_size * ratio
    }

    fn line_height(&self, font_size: f32, _weight: FontWeight) -> f32 {
        const LINE_HEIGHT_RATIO: f32 = 1.2;
        font_size * LINE_HEIGHT_RATIO
    }
}
