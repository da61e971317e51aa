//! The sheet layout engine.
//!
//! One pass over the command table produces the whole page: background,
//! title, one bordered cell per command and the repository footer. Each cell
//! asks the [`SymbolEncoder`] for its symbol; when encoding or scaling fails
//! the failure is logged, recorded in the cell's [`CellOutcome`], and the
//! cell is left bordered but empty. Nothing in here aborts the run.

use std::fmt;

use sheet_common::diagnostics;
use sheet_symbols::{EncodingMode, GrayImage, SymbolEncoder, SymbolError};

use crate::commands::GitCommand;
use crate::config::SheetConfig;
use crate::geometry::{CellRect, PageGeometry};
use crate::metrics::FontMetrics;
use crate::paint::{Color, DisplayCommand, DisplayList};
use crate::text::{TextStyle, draw_anchored, draw_wrapped};

/// Share of the cell width a linear barcode may use.
const LINEAR_WIDTH_RATIO: f64 = 0.9;
/// Share of the cell height a linear barcode may use.
const LINEAR_HEIGHT_RATIO: f64 = 0.45;
/// Share of the cell width a QR symbol may use.
const MATRIX_WIDTH_RATIO: f64 = 0.75;
/// Share of the cell height a QR symbol may use.
const MATRIX_HEIGHT_RATIO: f64 = 0.6;
/// Gap between the cell top and a linear barcode.
const LINEAR_TOP_OFFSET: f32 = 6.0;
/// Gap between the cell top and a QR symbol.
const MATRIX_TOP_OFFSET: f32 = 8.0;
/// Gap between the symbol box and the label baseline.
const LABEL_GAP: f32 = 10.0;
/// Gap between the label baseline and the description block.
const DESCRIPTION_GAP: f32 = 14.0;
/// Horizontal padding on each side of the description block.
const DESCRIPTION_PADDING: f32 = 8.0;
/// Share of the page width the footer QR may use.
const FOOTER_WIDTH_RATIO: f64 = 0.16;
/// Share of the margin height the footer QR may use.
const FOOTER_MARGIN_RATIO: f64 = 0.9;
/// How far the footer QR reaches below the bottom margin line.
const FOOTER_OVERLAP: f32 = 4.0;
/// Distance from the page bottom to the footer text baseline.
const FOOTER_TEXT_INSET: f32 = 10.0;

/// The step at which a symbol could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// Turning text into modules.
    Encode,
    /// Fitting modules into the pixel box.
    Scale,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode => write!(f, "encode"),
            Self::Scale => write!(f, "scale"),
        }
    }
}

/// Why a symbol is missing from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolFailure {
    /// Step that failed.
    pub stage: FailureStage,
    /// Error reported by the encoder.
    pub error: SymbolError,
}

/// Where a symbol landed on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedSymbol {
    /// Left edge in pixels.
    pub x: i32,
    /// Top edge in pixels.
    pub y: i32,
    /// Bitmap width in pixels.
    pub width: u32,
    /// Bitmap height in pixels.
    pub height: u32,
}

/// Result of laying out one command.
#[derive(Debug, Clone, PartialEq)]
pub struct CellOutcome {
    /// Position of the command in the table.
    pub index: usize,
    /// The cell it occupies.
    pub cell: CellRect,
    /// Symbology chosen for its code.
    pub mode: EncodingMode,
    /// Caption printed under the symbol.
    pub label: &'static str,
    /// Number of wrapped description lines drawn, zero when the cell failed.
    pub description_lines: usize,
    /// The placed symbol, or why there is none.
    pub result: Result<PlacedSymbol, SymbolFailure>,
}

impl CellOutcome {
    /// Whether the symbol, label and description were drawn.
    #[must_use]
    pub const fn is_rendered(&self) -> bool {
        self.result.is_ok()
    }
}

/// Result of laying out the repository footer.
#[derive(Debug, Clone, PartialEq)]
pub struct FooterOutcome {
    /// URL encoded in the footer.
    pub url: &'static str,
    /// The placed QR symbol, or why there is none.
    pub result: Result<PlacedSymbol, SymbolFailure>,
}

/// A fully laid-out page.
#[derive(Debug, Clone)]
pub struct Sheet {
    /// Page and grid dimensions.
    pub geometry: PageGeometry,
    /// Drawing commands, back to front.
    pub display_list: DisplayList,
    /// One outcome per command, in table order.
    pub cells: Vec<CellOutcome>,
    /// Footer outcome.
    pub footer: FooterOutcome,
}

impl Sheet {
    /// Cells whose symbol could not be produced.
    pub fn failed_cells(&self) -> impl Iterator<Item = &CellOutcome> {
        self.cells.iter().filter(|cell| !cell.is_rendered())
    }

    /// Number of cells drawn completely.
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_rendered()).count()
    }
}

/// Lays out a command table on a page.
///
/// The engine borrows everything it needs: the configuration, the font
/// metrics used to center and wrap text, and the symbol encoder.
pub struct SheetLayout<'a> {
    config: &'a SheetConfig,
    metrics: &'a dyn FontMetrics,
    encoder: &'a dyn SymbolEncoder,
}

impl<'a> SheetLayout<'a> {
    /// Create a layout engine.
    #[must_use]
    pub fn new(
        config: &'a SheetConfig,
        metrics: &'a dyn FontMetrics,
        encoder: &'a dyn SymbolEncoder,
    ) -> Self {
        Self {
            config,
            metrics,
            encoder,
        }
    }

    /// Lay out `commands` and return the finished page.
    ///
    /// # Panics
    ///
    /// Panics if the configuration has zero columns.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn lay_out(&self, commands: &[GitCommand]) -> Sheet {
        let geometry = PageGeometry::new(self.config, commands.len());
        let page_width = geometry.width as f32;
        let page_height = geometry.height as f32;
        let mut list = DisplayList::new();

        list.push(DisplayCommand::FillRect {
            x: 0.0,
            y: 0.0,
            width: page_width,
            height: page_height,
            color: Color::WHITE,
        });

        draw_anchored(
            &mut list,
            self.metrics,
            self.config.title,
            page_width / 2.0,
            geometry.margin / 2.0,
            0.5,
            0.5,
            TextStyle::regular(self.config.title_size),
        );

        let cells = commands
            .iter()
            .enumerate()
            .map(|(index, command)| self.lay_out_cell(&mut list, &geometry, index, command))
            .collect();

        let footer = self.lay_out_footer(&mut list, &geometry);

        Sheet {
            geometry,
            display_list: list,
            cells,
            footer,
        }
    }

    /// Draw one command into its cell.
    #[allow(clippy::cast_precision_loss)]
    fn lay_out_cell(
        &self,
        list: &mut DisplayList,
        geometry: &PageGeometry,
        index: usize,
        command: &GitCommand,
    ) -> CellOutcome {
        let cell = geometry.cell(index);
        let mode = EncodingMode::for_code(command.code, self.config.linear_max_len);
        let label = command.display_label();

        list.push(DisplayCommand::StrokeRect {
            x: cell.x,
            y: cell.y,
            width: cell.width,
            height: cell.height,
            color: Color::CELL_BORDER,
        });

        let (box_width, box_height, top_offset) = symbol_box(mode, &cell);
        let mut description_lines = 0;
        let result = self
            .symbol(command.code, mode, box_width, box_height)
            .map(|bitmap| {
                let placed = place_centered(list, bitmap, cell.center_x(), cell.y + top_offset);

                let label_y = cell.y + top_offset + box_height as f32 + LABEL_GAP;
                draw_anchored(
                    list,
                    self.metrics,
                    label,
                    cell.center_x(),
                    label_y,
                    0.5,
                    0.0,
                    TextStyle::bold(self.config.label_size),
                );

                description_lines = draw_wrapped(
                    list,
                    self.metrics,
                    command.description,
                    cell.x + DESCRIPTION_PADDING,
                    label_y + DESCRIPTION_GAP,
                    2.0f32.mul_add(-DESCRIPTION_PADDING, cell.width),
                    self.config.description_line_spacing,
                    TextStyle::regular(self.config.description_size),
                );

                placed
            })
            .inspect_err(|failure| {
                diagnostics::warn(
                    "cell",
                    &format!(
                        "{} {} error for {:?}: {}",
                        mode.symbology(),
                        failure.stage,
                        command.code,
                        failure.error
                    ),
                );
            });

        CellOutcome {
            index,
            cell,
            mode,
            label,
            description_lines,
            result,
        }
    }

    /// Draw the repository QR code and its URL above the bottom edge.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn lay_out_footer(&self, list: &mut DisplayList, geometry: &PageGeometry) -> FooterOutcome {
        let page_width = geometry.width as f32;
        let page_height = geometry.height as f32;
        let url = self.config.footer_url;

        let size = (f64::from(geometry.width) * FOOTER_WIDTH_RATIO)
            .min(f64::from(geometry.margin) * FOOTER_MARGIN_RATIO)
            .max(0.0) as u32;
        let top = page_height - geometry.margin - size as f32 + FOOTER_OVERLAP;

        let result = self
            .symbol(url, EncodingMode::Matrix, size, size)
            .map(|bitmap| {
                let placed = place_centered(list, bitmap, page_width / 2.0, top);
                draw_anchored(
                    list,
                    self.metrics,
                    url,
                    page_width / 2.0,
                    page_height - FOOTER_TEXT_INSET,
                    0.5,
                    0.0,
                    TextStyle::regular(self.config.footer_text_size),
                );
                placed
            })
            .inspect_err(|failure| {
                diagnostics::warn(
                    "footer",
                    &format!("QR {} error for footer: {}", failure.stage, failure.error),
                );
            });

        FooterOutcome { url, result }
    }

    /// Encode `text` and scale it to `width` x `height`.
    fn symbol(
        &self,
        text: &str,
        mode: EncodingMode,
        width: u32,
        height: u32,
    ) -> Result<GrayImage, SymbolFailure> {
        let modules = self
            .encoder
            .encode(text, mode)
            .map_err(|error| SymbolFailure {
                stage: FailureStage::Encode,
                error,
            })?;
        self.encoder
            .scale(&modules, width, height)
            .map_err(|error| SymbolFailure {
                stage: FailureStage::Scale,
                error,
            })
    }
}

/// Pixel box and top offset for a symbol of `mode` inside `cell`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn symbol_box(mode: EncodingMode, cell: &CellRect) -> (u32, u32, f32) {
    let width = f64::from(cell.width);
    let height = f64::from(cell.height);
    match mode {
        EncodingMode::Linear => (
            (width * LINEAR_WIDTH_RATIO).max(0.0) as u32,
            (height * LINEAR_HEIGHT_RATIO).max(0.0) as u32,
            LINEAR_TOP_OFFSET,
        ),
        EncodingMode::Matrix => {
            let side = (width * MATRIX_WIDTH_RATIO)
                .min(height * MATRIX_HEIGHT_RATIO)
                .max(0.0) as u32;
            (side, side, MATRIX_TOP_OFFSET)
        }
    }
}

/// Queue `bitmap` with its top edge at `top`, centered on `center_x`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]
fn place_centered(
    list: &mut DisplayList,
    bitmap: GrayImage,
    center_x: f32,
    top: f32,
) -> PlacedSymbol {
    let (width, height) = bitmap.dimensions();
    let x = (center_x - width as f32 / 2.0) as i32;
    let y = top as i32;
    list.push(DisplayCommand::DrawBitmap { x, y, bitmap });
    PlacedSymbol {
        x,
        y,
        width,
        height,
    }
}
