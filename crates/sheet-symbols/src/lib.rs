//! Symbol encoding for the git barcode sheet.
//!
//! # Scope
//!
//! This crate turns command text into printable symbols:
//! - **Linear barcodes** - Code 128 (character set B) module rows
//! - **Matrix codes** - QR module matrices with a chosen error-correction level
//! - **Scaling** - integer nearest-neighbour scaling into a fixed-size bitmap
//!
//! Encoding and scaling are separate steps so callers can tell which stage
//! failed. Both go through [`SymbolEncoder`], which lets the layout engine be
//! driven by a fake encoder in tests.

/// Code 128 encoding.
pub mod linear;
/// QR encoding.
pub mod matrix;
/// Module matrices shared by both symbologies.
pub mod modules;
/// Scaling module matrices to bitmaps.
pub mod scale;

pub use image::GrayImage;
pub use matrix::ErrorCorrection;
pub use modules::SymbolModules;

use thiserror::Error;

/// Errors produced while encoding or scaling a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// The text contains characters Code 128 cannot carry.
    #[error("unsupported Code 128 content: {reason}")]
    Linear {
        /// Reason reported by the Code 128 encoder.
        reason: String,
    },

    /// The payload does not fit any QR version at the requested level.
    #[error("QR payload rejected: {reason}")]
    Matrix {
        /// Reason reported by the QR encoder.
        reason: String,
    },

    /// The target box cannot hold one pixel per module.
    #[error("can not scale a {columns}x{rows} symbol into {width}x{height} pixels")]
    TooSmall {
        /// Symbol width in modules.
        columns: usize,
        /// Symbol height in modules.
        rows: usize,
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}

/// Which kind of symbol carries a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingMode {
    /// Code 128, wide and short.
    Linear,
    /// QR, square.
    Matrix,
}

impl EncodingMode {
    /// Choose the mode for `code`: byte length up to and including
    /// `threshold` is linear, anything longer is matrix.
    #[must_use]
    pub const fn for_code(code: &str, threshold: usize) -> Self {
        if code.len() <= threshold {
            Self::Linear
        } else {
            Self::Matrix
        }
    }

    /// Symbology name used in diagnostics.
    #[must_use]
    pub const fn symbology(self) -> &'static str {
        match self {
            Self::Linear => "Code128",
            Self::Matrix => "QR",
        }
    }
}

/// Capability that encodes text into symbols and scales them to bitmaps.
pub trait SymbolEncoder {
    /// Encode `text` as a module matrix of the given mode.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Linear`] or [`SymbolError::Matrix`] when the
    /// text cannot be represented.
    fn encode(&self, text: &str, mode: EncodingMode) -> Result<SymbolModules, SymbolError>;

    /// Scale an encoded symbol into a `width` x `height` bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::TooSmall`] when the box is smaller than the
    /// symbol.
    fn scale(
        &self,
        symbol: &SymbolModules,
        width: u32,
        height: u32,
    ) -> Result<GrayImage, SymbolError> {
        scale::scale(symbol, width, height)
    }
}

/// The real encoder: Code 128 via `barcoders`, QR via `qrcode`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEncoder {
    /// Error-correction level used for matrix codes.
    pub error_correction: ErrorCorrection,
}

impl StandardEncoder {
    /// Create an encoder using `error_correction` for QR symbols.
    #[must_use]
    pub const fn new(error_correction: ErrorCorrection) -> Self {
        Self { error_correction }
    }
}

impl SymbolEncoder for StandardEncoder {
    fn encode(&self, text: &str, mode: EncodingMode) -> Result<SymbolModules, SymbolError> {
        match mode {
            EncodingMode::Linear => linear::encode_linear(text),
            EncodingMode::Matrix => matrix::encode_matrix(text, self.error_correction),
        }
    }
}
