use image::{GrayImage, Luma};

use crate::{EncodingMode, SymbolError, SymbolModules};

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Scale `symbol` into a bitmap of exactly `width` x `height` pixels.
///
/// Every module becomes an integer block of pixels, so bars and cells stay
/// crisp. The scaled symbol is centered on a white background. Linear symbols
/// scale horizontally only and stretch their bars over the full height;
/// matrix symbols keep their aspect ratio.
///
/// # Errors
///
/// Returns [`SymbolError::TooSmall`] if a module would be narrower than one
/// pixel in either direction.
pub fn scale(symbol: &SymbolModules, width: u32, height: u32) -> Result<GrayImage, SymbolError> {
    let too_small = || SymbolError::TooSmall {
        columns: symbol.columns(),
        rows: symbol.rows(),
        width,
        height,
    };

    let columns = u32::try_from(symbol.columns()).map_err(|_| too_small())?;
    let rows = u32::try_from(symbol.rows()).map_err(|_| too_small())?;
    if columns == 0 || rows == 0 || height == 0 {
        return Err(too_small());
    }

    match symbol.mode() {
        EncodingMode::Linear => {
            let factor = width / columns;
            if factor == 0 {
                return Err(too_small());
            }
            let offset = (width - columns * factor) / 2;
            Ok(GrayImage::from_fn(width, height, |x, _| {
                module_pixel(symbol, x, 0, offset, 0, factor)
            }))
        }
        EncodingMode::Matrix => {
            let factor = (width / columns).min(height / rows);
            if factor == 0 {
                return Err(too_small());
            }
            let offset_x = (width - columns * factor) / 2;
            let offset_y = (height - rows * factor) / 2;
            Ok(GrayImage::from_fn(width, height, |x, y| {
                module_pixel(symbol, x, y, offset_x, offset_y, factor)
            }))
        }
    }
}

/// Color of pixel (`x`, `y`) for a symbol drawn at `factor` pixels per module.
fn module_pixel(
    symbol: &SymbolModules,
    x: u32,
    y: u32,
    offset_x: u32,
    offset_y: u32,
    factor: u32,
) -> Luma<u8> {
    if x < offset_x || y < offset_y {
        return LIGHT;
    }
    let column = ((x - offset_x) / factor) as usize;
    let row = match symbol.mode() {
        EncodingMode::Linear => 0,
        EncodingMode::Matrix => ((y - offset_y) / factor) as usize,
    };
    if symbol.is_dark(column, row) {
        DARK
    } else {
        LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> SymbolModules {
        SymbolModules::new(EncodingMode::Matrix, 2, 2, vec![true, false, false, true])
    }

    #[test]
    fn test_output_has_requested_size() {
        let image = scale(&checker(), 9, 7).unwrap();
        assert_eq!(image.dimensions(), (9, 7));
    }

    #[test]
    fn test_matrix_is_centered() {
        // factor = min(9/2, 7/2) = 3 -> 6x6 symbol, offsets (1, 0)
        let image = scale(&checker(), 9, 7).unwrap();
        assert_eq!(image.get_pixel(0, 0), &LIGHT);
        assert_eq!(image.get_pixel(1, 0), &DARK);
        assert_eq!(image.get_pixel(3, 2), &DARK);
        assert_eq!(image.get_pixel(4, 0), &LIGHT);
        assert_eq!(image.get_pixel(4, 3), &DARK);
        assert_eq!(image.get_pixel(8, 6), &LIGHT);
    }

    #[test]
    fn test_linear_bars_span_full_height() {
        let bars = SymbolModules::new(EncodingMode::Linear, 3, 1, vec![true, false, true]);
        let image = scale(&bars, 6, 40).unwrap();
        for y in 0..40 {
            assert_eq!(image.get_pixel(0, y), &DARK);
            assert_eq!(image.get_pixel(2, y), &LIGHT);
            assert_eq!(image.get_pixel(5, y), &DARK);
        }
    }

    #[test]
    fn test_rejects_target_narrower_than_symbol() {
        let bars = SymbolModules::new(EncodingMode::Linear, 3, 1, vec![true, false, true]);
        assert!(matches!(
            scale(&bars, 2, 10),
            Err(SymbolError::TooSmall { columns: 3, .. })
        ));
    }

    #[test]
    fn test_rejects_zero_height() {
        assert!(scale(&checker(), 10, 0).is_err());
    }
}
