//! Font loading and the face cache.
//!
//! Fonts are read once from well-known system locations, falling back to the
//! DejaVu Sans faces compiled into the binary. Text is drawn
//! through [`Face`]s, one per (weight, size), which the [`FontCache`] creates
//! on first use and keeps for the rest of the run together with every glyph
//! they have rasterized.

use std::collections::HashMap;
use std::rc::Rc;

use fontdue::{Font, FontSettings, Metrics};
use sheet_common::diagnostics::{self, Severity};
use sheet_layout::FontWeight;
use thiserror::Error;

/// Common system font paths to search for a regular font.
const FONT_SEARCH_PATHS: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/truetype/go/Go-Regular.ttf",
    // macOS
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// System font paths for bold variants.
const FONT_BOLD_SEARCH_PATHS: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    "/usr/share/fonts/truetype/go/Go-Bold.ttf",
    // macOS
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// DejaVu Sans, used when no system regular font is found.
const BUNDLED_REGULAR: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");

/// DejaVu Sans Bold, used when no system bold font is found.
const BUNDLED_BOLD: &[u8] = include_bytes!("../fonts/DejaVuSans-Bold.ttf");

/// Line height used when a font has no horizontal line metrics.
const FALLBACK_LINE_HEIGHT_RATIO: f32 = 1.2;

/// Errors produced while loading fonts.
#[derive(Debug, Error)]
pub enum FontError {
    /// Font data was read but could not be parsed.
    #[error("failed to parse {variant} font: {reason}")]
    Parse {
        /// Which variant was being parsed.
        variant: &'static str,
        /// Reason reported by the font parser.
        reason: String,
    },
}

/// Parse font data.
fn parse_font(data: &[u8], variant: &'static str) -> Result<Font, FontError> {
    Font::from_bytes(data, FontSettings::default()).map_err(|reason| FontError::Parse {
        variant,
        reason: reason.to_string(),
    })
}

/// Try each path in turn and return the first font that loads.
fn load_font_from_paths(paths: &[&str], variant: &'static str) -> Option<Font> {
    for path in paths {
        let Ok(data) = std::fs::read(path) else {
            continue;
        };
        match parse_font(&data, variant) {
            Ok(font) => {
                diagnostics::report(
                    Severity::Info,
                    "fonts",
                    &format!("loaded {variant} font: {path}"),
                );
                return Some(font);
            }
            Err(e) => diagnostics::warn("fonts", &format!("{path}: {e}")),
        }
    }
    None
}

/// The first loadable font in `paths`, or the bundled `fallback` face.
fn system_or_bundled(
    paths: &[&str],
    fallback: &[u8],
    variant: &'static str,
) -> Result<Font, FontError> {
    if let Some(font) = load_font_from_paths(paths, variant) {
        return Ok(font);
    }
    diagnostics::report(
        Severity::Info,
        "fonts",
        &format!("no system {variant} font found; using bundled DejaVu Sans"),
    );
    parse_font(fallback, variant)
}

/// Sum of advance widths of the drawable characters of `text`.
pub(crate) fn advance_width(font: &Font, text: &str, size: f32) -> f32 {
    text.chars()
        .filter(|ch| !ch.is_control())
        .map(|ch| font.metrics(ch, size).advance_width)
        .sum()
}

/// Baseline-to-baseline distance at `size`.
pub(crate) fn line_height(font: &Font, size: f32) -> f32 {
    font.horizontal_line_metrics(size)
        .map_or(size * FALLBACK_LINE_HEIGHT_RATIO, |metrics| {
            metrics.new_line_size
        })
}

/// A rasterized glyph: placement metrics plus 8-bit coverage, row-major.
#[derive(Debug, Clone)]
pub struct Glyph {
    /// Placement of the bitmap relative to the pen position.
    pub metrics: Metrics,
    /// Coverage values, `metrics.width * metrics.height` bytes.
    pub coverage: Vec<u8>,
}

/// A font prepared at one size.
pub struct Face {
    font: Rc<Font>,
    size: f32,
    line_height: f32,
    glyphs: HashMap<char, Glyph>,
}

impl Face {
    fn new(font: Rc<Font>, size: f32) -> Self {
        let line_height = line_height(&font, size);
        Self {
            font,
            size,
            line_height,
            glyphs: HashMap::new(),
        }
    }

    /// Font size in pixels.
    #[must_use]
    pub const fn size(&self) -> f32 {
        self.size
    }

    /// Baseline-to-baseline distance.
    #[must_use]
    pub const fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Advance width of `text`.
    #[must_use]
    pub fn text_width(&self, text: &str) -> f32 {
        advance_width(&self.font, text, self.size)
    }

    /// The rasterized glyph for `ch`, rendering it on first request.
    pub fn glyph(&mut self, ch: char) -> &Glyph {
        let font = &self.font;
        let size = self.size;
        self.glyphs.entry(ch).or_insert_with(|| {
            let (metrics, coverage) = font.rasterize(ch, size);
            Glyph { metrics, coverage }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FaceKey {
    weight: FontWeight,
    size_bits: u32,
}

/// Loaded fonts plus every face prepared from them.
pub struct FontCache {
    regular: Rc<Font>,
    bold: Option<Rc<Font>>,
    faces: HashMap<FaceKey, Face>,
}

impl FontCache {
    /// Load the regular and bold fonts from the system font directories.
    ///
    /// Each variant that is not installed is taken from the bundled DejaVu
    /// Sans faces instead.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if a bundled face is needed and cannot be
    /// parsed.
    pub fn from_system() -> Result<Self, FontError> {
        let regular = system_or_bundled(FONT_SEARCH_PATHS, BUNDLED_REGULAR, "regular")?;
        let bold = system_or_bundled(FONT_BOLD_SEARCH_PATHS, BUNDLED_BOLD, "bold")?;
        Ok(Self::new(regular, Some(bold)))
    }

    /// Build a cache from the bundled DejaVu Sans faces only.
    ///
    /// The result does not depend on what the host has installed.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if a bundled face cannot be parsed.
    pub fn bundled() -> Result<Self, FontError> {
        Self::from_bytes(BUNDLED_REGULAR, Some(BUNDLED_BOLD))
    }

    /// Build a cache from in-memory font files. Without a bold face, bold
    /// text uses the regular font.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if either font cannot be parsed.
    pub fn from_bytes(regular: &[u8], bold: Option<&[u8]>) -> Result<Self, FontError> {
        let regular = parse_font(regular, "regular")?;
        let bold = bold.map(|data| parse_font(data, "bold")).transpose()?;
        Ok(Self::new(regular, bold))
    }

    fn new(regular: Font, bold: Option<Font>) -> Self {
        Self {
            regular: Rc::new(regular),
            bold: bold.map(Rc::new),
            faces: HashMap::new(),
        }
    }

    /// The font used for `weight`.
    #[must_use]
    pub fn font(&self, weight: FontWeight) -> &Font {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => self.bold.as_deref().unwrap_or(self.regular.as_ref()),
        }
    }

    /// The face for `weight` at `size`, created on first use.
    pub fn face(&mut self, weight: FontWeight, size: f32) -> &mut Face {
        let key = FaceKey {
            weight,
            size_bits: size.to_bits(),
        };
        let font = match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => self.bold.as_ref().unwrap_or(&self.regular),
        };
        self.faces
            .entry(key)
            .or_insert_with(|| Face::new(Rc::clone(font), size))
    }

    /// Number of faces prepared so far.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}
