//! Rendering for the git barcode sheet.
//!
//! # Scope
//!
//! This crate provides:
//! - **Font loading** - regular and bold system fonts via fontdue, with
//!   bundled DejaVu Sans as the fallback
//! - **Face cache** - one prepared face per (weight, size), glyphs memoized
//! - **Font metrics** - real measurements for the layout engine
//! - **Software rendering** - display list to RGBA pixels
//! - **PNG output**
//!
//! [`render_sheet`] runs the whole pipeline short of writing the file:
//!
//! ```text
//! GIT_COMMANDS → SheetLayout → DisplayList → Renderer → RgbaImage
//! ```

/// Pixel operations.
pub mod canvas;
/// Font metrics over loaded fonts.
pub mod font_metrics;
/// Font loading and face cache.
pub mod fonts;
/// Display list execution.
pub mod renderer;

pub use font_metrics::FontdueFontMetrics;
pub use fonts::{Face, FontCache, FontError, Glyph};
pub use renderer::{Renderer, save_png};

use std::path::Path;

use anyhow::Result;
use image::RgbaImage;
use sheet_layout::{GitCommand, Sheet, SheetConfig, SheetLayout, SymbolEncoder};

/// A laid-out and rasterized page.
pub struct RenderedSheet {
    /// Layout result, including per-cell outcomes.
    pub sheet: Sheet,
    /// Page pixels.
    pub image: RgbaImage,
}

impl RenderedSheet {
    /// Write the page to `path` as PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        save_png(&self.image, path)
    }
}

/// Lay out `commands` with real font metrics and rasterize the page.
///
/// Encoding failures never fail this call; they are logged and reported in
/// the returned sheet's outcomes.
#[must_use]
pub fn render_sheet(
    config: &SheetConfig,
    commands: &[GitCommand],
    fonts: &mut FontCache,
    encoder: &dyn SymbolEncoder,
) -> RenderedSheet {
    let sheet = {
        let metrics = FontdueFontMetrics::new(fonts);
        SheetLayout::new(config, &metrics, encoder).lay_out(commands)
    };

    let mut renderer = Renderer::new(sheet.geometry.width, sheet.geometry.height);
    renderer.render(&sheet.display_list, fonts);

    RenderedSheet {
        sheet,
        image: renderer.into_image(),
    }
}
