//! Layout engine for the git barcode sheet.
//!
//! # Scope
//!
//! This crate implements:
//! - **Command table** - the fixed, ordered list of forty git commands
//! - **Configuration** - the compile-time page parameters
//! - **Geometry** - page size from physical size and resolution, a uniform
//!   row-major grid between the margins
//! - **Encoding selection** - Code 128 for short codes, QR for long ones
//! - **Text placement** - anchored lines and word-wrapped descriptions
//! - **Painting** - a display list of drawing commands for the renderer
//!
//! Fonts, pixels and files live in `sheet-render`. This crate only needs a
//! [`FontMetrics`] for measuring text and a [`SymbolEncoder`] for symbols.

/// The fixed command table.
pub mod commands;
/// Compile-time page parameters.
pub mod config;
/// Page and grid geometry.
pub mod geometry;
/// Text measurement.
pub mod metrics;
/// Display list.
pub mod paint;
/// The layout engine.
pub mod sheet;
/// Anchored and wrapped text.
pub mod text;

pub use commands::{GIT_COMMANDS, GitCommand};
pub use config::SheetConfig;
pub use geometry::{CellRect, PageGeometry, row_count};
pub use metrics::{ApproximateFontMetrics, FontMetrics, FontWeight};
pub use paint::{Color, DisplayCommand, DisplayList};
pub use sheet::{
    CellOutcome, FailureStage, FooterOutcome, PlacedSymbol, Sheet, SheetLayout, SymbolFailure,
};
pub use sheet_symbols::{EncodingMode, StandardEncoder, SymbolEncoder, SymbolError};
