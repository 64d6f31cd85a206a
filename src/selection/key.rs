//! Deterministic pick driven by one hex digit of a hash key
//!
//! Used for identicon-style images: the same key always yields the same
//! colors. Each character of the key is read as one hex digit (0-15) and the
//! digit's residue modulo the palette length selects the color.

use tracing::warn;

use crate::color::{Color, Palette};
use crate::error::{Result, TessellaError};

/// Palette index selected by `key[digit]`
///
/// A character that is not a hex digit is logged and maps to index 0 instead
/// of failing the whole image.
///
/// # Errors
///
/// Returns `InvalidKey` if `digit` is past the end of `key`, and
/// `InvalidPalette` if `palette_len` is 0.
///
/// # Example
///
/// ```rust
/// use tessella::selection::pick_index_by_key;
///
/// let key = "00112233445566778899aabbccddeeff";
/// assert_eq!(pick_index_by_key(key, 4, 0).unwrap(), 0);
/// assert_eq!(pick_index_by_key(key, 4, 31).unwrap(), 3); // f = 15
/// ```
pub fn pick_index_by_key(key: &str, palette_len: usize, digit: usize) -> Result<usize> {
    if palette_len == 0 {
        return Err(TessellaError::InvalidPalette(
            "cannot pick from an empty palette".to_string(),
        ));
    }

    let character = key.as_bytes().get(digit).map(|&b| b as char).ok_or_else(|| {
        TessellaError::InvalidKey(format!(
            "digit {} is out of range for a {}-character key",
            digit,
            key.len()
        ))
    })?;

    match character.to_digit(16) {
        Some(value) => Ok(value as usize % palette_len),
        None => {
            warn!(digit, character = %character, "key digit is not hexadecimal, using index 0");
            Ok(0)
        }
    }
}

/// Color selected by `key[digit]`, see [`pick_index_by_key`]
pub fn pick_by_key(key: &str, palette: &Palette, digit: usize) -> Result<Color> {
    pick_index_by_key(key, palette.len(), digit).map(|i| palette[i])
}
