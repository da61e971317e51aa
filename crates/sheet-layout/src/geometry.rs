//! Page and grid geometry.
//!
//! The grid fills the page between the margins. Columns are fixed by the
//! configuration, rows follow from the number of entries, and cells are
//! assigned in row-major order.

use crate::SheetConfig;

/// Number of rows needed to hold `entries` items in `columns` columns.
///
/// # Panics
///
/// Panics if `columns` is zero.
#[must_use]
pub const fn row_count(entries: usize, columns: usize) -> usize {
    assert!(columns > 0, "grid needs at least one column");
    entries.div_ceil(columns)
}

/// Pixel length of `inches` at `dpi`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn inches_to_pixels(inches: f64, dpi: f64) -> u32 {
    (inches * dpi).round().max(0.0) as u32
}

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    /// Zero-based column.
    pub col: usize,
    /// Zero-based row.
    pub row: usize,
    /// Left edge in pixels.
    pub x: f32,
    /// Top edge in pixels.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl CellRect {
    /// Horizontal center of the cell.
    #[must_use]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Derived page dimensions for a given entry count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width in pixels.
    pub width: u32,
    /// Page height in pixels.
    pub height: u32,
    /// Margin in pixels.
    pub margin: f32,
    /// Grid columns.
    pub columns: usize,
    /// Grid rows.
    pub rows: usize,
    /// Width of every cell in pixels.
    pub cell_width: f32,
    /// Height of every cell in pixels.
    pub cell_height: f32,
}

impl PageGeometry {
    /// Compute the page and grid for `entries` items.
    ///
    /// # Panics
    ///
    /// Panics if the configuration has zero columns.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(config: &SheetConfig, entries: usize) -> Self {
        let width = inches_to_pixels(config.page_width_in, config.dpi);
        let height = inches_to_pixels(config.page_height_in, config.dpi);
        let columns = config.columns;
        let rows = row_count(entries, columns);

        let grid_width = 2.0f32.mul_add(-config.margin, width as f32);
        let grid_height = 2.0f32.mul_add(-config.margin, height as f32);

        Self {
            width,
            height,
            margin: config.margin,
            columns,
            rows,
            cell_width: grid_width / columns as f32,
            // An empty grid still gets a finite cell size.
            cell_height: grid_height / rows.max(1) as f32,
        }
    }

    /// The cell holding entry `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cell(&self, index: usize) -> CellRect {
        let col = index % self.columns;
        let row = index / self.columns;
        CellRect {
            col,
            row,
            x: (col as f32).mul_add(self.cell_width, self.margin),
            y: (row as f32).mul_add(self.cell_height, self.margin),
            width: self.cell_width,
            height: self.cell_height,
        }
    }
}
