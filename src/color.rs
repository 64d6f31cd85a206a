//! Colors and ordered palettes
//!
//! A [`Palette`] is never empty. Its order matters: index 0 is the primary
//! color favored by weighted picks, and the full order defines the bands
//! used by gradient and key-driven picks.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TessellaError};

/// An opaque RGB color
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `RRGGBB` or `#RRGGBB`
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(TessellaError::InvalidColor(format!(
                "expected 6 hex digits (got {:?})",
                s
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| TessellaError::InvalidColor(format!("not a hex color: {:?}", s)))
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as `#RRGGBB` (upper case), the form used for gradient stops
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = TessellaError;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}

/// A non-empty, ordered list of colors
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Color>", into = "Vec<Color>"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<Color>);

#[allow(clippy::len_without_is_empty)]
impl Palette {
    /// Create a palette from an ordered list of colors
    ///
    /// # Errors
    ///
    /// Returns `InvalidPalette` if `colors` is empty
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(TessellaError::InvalidPalette(
                "palette needs at least one color".to_string(),
            ));
        }
        Ok(Self(colors))
    }

    /// Parse a list of hex colors, e.g. `["#FF0000", "00FF00"]`
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        let colors = colors
            .iter()
            .map(|c| Color::from_hex(c.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(colors)
    }

    /// Background/foreground pair used by the two-color modes
    pub fn pair(background: Color, foreground: Color) -> Self {
        Self(vec![background, foreground])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The primary (index 0) color
    #[inline]
    pub fn primary(&self) -> Color {
        self.0[0]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.0.get(index).copied()
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.0.iter()
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.0[index]
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = TessellaError;

    fn try_from(colors: Vec<Color>) -> Result<Self> {
        Palette::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.0
    }
}
