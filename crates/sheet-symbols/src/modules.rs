use crate::EncodingMode;

/// An encoded symbol as a grid of dark and light modules.
///
/// Linear symbols are a single row; every bar spans the full printed height.
/// Matrix symbols are square. Neither carries a quiet zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolModules {
    mode: EncodingMode,
    columns: usize,
    rows: usize,
    dark: Vec<bool>,
}

impl SymbolModules {
    /// Create a module grid from row-major `dark` flags.
    ///
    /// # Panics
    ///
    /// Panics if `dark.len() != columns * rows`.
    #[must_use]
    pub fn new(mode: EncodingMode, columns: usize, rows: usize, dark: Vec<bool>) -> Self {
        assert_eq!(
            dark.len(),
            columns * rows,
            "module count does not match {columns}x{rows}"
        );
        Self {
            mode,
            columns,
            rows,
            dark,
        }
    }

    /// The symbology this grid was produced by.
    #[must_use]
    pub const fn mode(&self) -> EncodingMode {
        self.mode
    }

    /// Width in modules.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Height in modules.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Whether the module at (`column`, `row`) is dark.
    ///
    /// Out-of-range positions are light.
    #[must_use]
    pub fn is_dark(&self, column: usize, row: usize) -> bool {
        column < self.columns && row < self.rows && self.dark[row * self.columns + column]
    }
}
