use qrcode::{Color, EcLevel, QrCode};

use crate::{EncodingMode, SymbolError, SymbolModules};

/// QR error-correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    /// Recovers about 7% of the symbol.
    Low,
    /// Recovers about 15% of the symbol.
    #[default]
    Medium,
    /// Recovers about 25% of the symbol.
    Quartile,
    /// Recovers about 30% of the symbol.
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => Self::L,
            ErrorCorrection::Medium => Self::M,
            ErrorCorrection::Quartile => Self::Q,
            ErrorCorrection::High => Self::H,
        }
    }
}

/// Encode `text` as a QR module matrix, picking the smallest version that
/// holds it at `level`.
///
/// # Errors
///
/// Returns [`SymbolError::Matrix`] when the payload exceeds the capacity of
/// the largest version.
pub fn encode_matrix(text: &str, level: ErrorCorrection) -> Result<SymbolModules, SymbolError> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), level.into()).map_err(
        |e| SymbolError::Matrix {
            reason: e.to_string(),
        },
    )?;

    let side = code.width();
    let dark: Vec<bool> = code
        .to_colors()
        .into_iter()
        .map(|color| color == Color::Dark)
        .collect();
    Ok(SymbolModules::new(EncodingMode::Matrix, side, side, dark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_is_square() {
        let symbol =
            encode_matrix("git submodule update --init --recursive", ErrorCorrection::Medium)
                .unwrap();
        assert_eq!(symbol.columns(), symbol.rows());
        assert_eq!(symbol.mode(), EncodingMode::Matrix);
    }

    #[test]
    fn test_finder_pattern_corner_is_dark() {
        let symbol = encode_matrix("git log --oneline", ErrorCorrection::Medium).unwrap();
        assert!(symbol.is_dark(0, 0));
        assert!(symbol.is_dark(6, 0));
        assert!(!symbol.is_dark(7, 0));
    }

    #[test]
    fn test_higher_level_never_shrinks_symbol() {
        let text = "https://github.com/arran4/git-barcode-sheet";
        let low = encode_matrix(text, ErrorCorrection::Low).unwrap();
        let high = encode_matrix(text, ErrorCorrection::High).unwrap();
        assert!(high.columns() >= low.columns());
    }

    #[test]
    fn test_oversized_payload_is_rejected() {
        let text = "x".repeat(8000);
        let err = encode_matrix(&text, ErrorCorrection::High).unwrap_err();
        assert!(matches!(err, SymbolError::Matrix { .. }));
    }
}
