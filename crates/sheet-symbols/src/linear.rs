use barcoders::sym::code128::Code128;

use crate::{EncodingMode, SymbolError, SymbolModules};

/// Prefix that tells `barcoders` to start in character set B.
const CHARACTER_SET_B: char = 'Ɓ';

/// Printable ASCII, the range character set B carries.
const SET_B: std::ops::RangeInclusive<char> = ' '..='~';

/// Encode `text` as a Code 128 module row.
///
/// Only printable ASCII is accepted. Control characters (including the
/// newline a scanner appends on its own) and anything non-ASCII are rejected
/// before they reach the encoder, where some of them would be read as
/// character-set switches.
///
/// # Errors
///
/// Returns [`SymbolError::Linear`] for empty text or unsupported characters.
pub fn encode_linear(text: &str) -> Result<SymbolModules, SymbolError> {
    if let Some(bad) = text.chars().find(|c| !SET_B.contains(c)) {
        return Err(SymbolError::Linear {
            reason: format!("character {bad:?} is outside character set B"),
        });
    }

    let barcode = Code128::new(format!("{CHARACTER_SET_B}{text}")).map_err(|e| {
        SymbolError::Linear {
            reason: e.to_string(),
        }
    })?;

    let dark: Vec<bool> = barcode.encode().into_iter().map(|bar| bar == 1).collect();
    Ok(SymbolModules::new(EncodingMode::Linear, dark.len(), 1, dark))
}
