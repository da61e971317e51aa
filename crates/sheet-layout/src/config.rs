//! Sheet parameters.
//!
//! Every value is fixed at compile time. [`SheetConfig::default`] is the one
//! configuration the program prints; tests build variations of it with struct
//! update syntax.

use sheet_symbols::ErrorCorrection;

/// Parameters of the printed page.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    /// Page width in inches.
    pub page_width_in: f64,
    /// Page height in inches.
    pub page_height_in: f64,
    /// Raster resolution in dots per inch.
    pub dpi: f64,
    /// Space around the grid, in pixels. The title sits in the top margin and
    /// the footer in the bottom one.
    pub margin: f32,
    /// Number of grid columns. Must be non-zero.
    pub columns: usize,
    /// Longest code (in bytes) printed as a linear barcode.
    pub linear_max_len: usize,
    /// Error-correction level for every QR symbol on the page.
    pub error_correction: ErrorCorrection,

    /// Heading centered in the top margin.
    pub title: &'static str,
    /// Heading font size in pixels.
    pub title_size: f32,
    /// Label font size in pixels.
    pub label_size: f32,
    /// Description font size in pixels.
    pub description_size: f32,
    /// Line-height multiplier for wrapped descriptions.
    pub description_line_spacing: f32,

    /// Repository URL encoded in the footer.
    pub footer_url: &'static str,
    /// Footer URL text size in pixels.
    pub footer_text_size: f32,

    /// Where the finished PNG is written.
    pub output_path: &'static str,
}

impl Default for SheetConfig {
    /// A4 at 300 dpi, four columns.
    fn default() -> Self {
        Self {
            page_width_in: 8.27,
            page_height_in: 11.69,
            dpi: 300.0,
            margin: 60.0,
            columns: 4,
            linear_max_len: 26,
            error_correction: ErrorCorrection::Medium,
            title: "Git Barcode Sheet \u{2013} One Scan = One Command",
            title_size: 28.0,
            label_size: 13.0,
            description_size: 10.0,
            description_line_spacing: 1.3,
            footer_url: "https://github.com/arran4/git-barcode-sheet",
            footer_text_size: 11.0,
            output_path: "git-barcode-sheet-a4.png",
        }
    }
}
