//! Frequency-weighted pick biased toward the primary color

use rand::Rng;

use crate::color::{Color, Palette};
use crate::error::{Result, TessellaError};

/// Pick the primary color with probability `freq`, otherwise a uniformly
/// random color from the rest of the palette.
///
/// # Errors
///
/// See [`check_weighted`].
pub fn pick_weighted<R: Rng + ?Sized>(rng: &mut R, palette: &Palette, freq: f64) -> Result<Color> {
    pick_weighted_index(rng, palette, freq).map(|i| palette[i])
}

/// Index-returning form of [`pick_weighted`]
///
/// Returns 0 for the primary branch and `1..len` for the rest.
pub fn pick_weighted_index<R: Rng + ?Sized>(
    rng: &mut R,
    palette: &Palette,
    freq: f64,
) -> Result<usize> {
    check_weighted(palette, freq)?;

    if rng.gen::<f64>() < freq {
        return Ok(0);
    }
    Ok(1 + rng.gen_range(0..palette.len() - 1))
}

/// Validate weighted-pick arguments without drawing
///
/// Drivers call this before writing anything to the canvas.
///
/// # Errors
///
/// Returns `InvalidConfig` if `freq` is not within `0.0..=1.0` (NaN
/// included), and `InvalidPalette` if the palette has a single color and
/// `freq < 1`, where the non-primary branch has nothing to choose from.
pub fn check_weighted(palette: &Palette, freq: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&freq) {
        return Err(TessellaError::InvalidConfig(format!(
            "weighted pick frequency must be within 0..=1 (got {})",
            freq
        )));
    }
    if palette.len() < 2 && freq < 1.0 {
        return Err(TessellaError::InvalidPalette(format!(
            "weighted pick with frequency {} needs at least 2 colors (got {})",
            freq,
            palette.len()
        )));
    }
    Ok(())
}
