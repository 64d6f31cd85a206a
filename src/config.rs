//! Image configuration and builder
//!
//! A [`TessellaConfig`] fully determines an image together with its palette:
//! the same configuration (seed included) always renders the same SVG.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::canvas::GradientVector;
use crate::color::Palette;
use crate::error::{Result, TessellaError};
use crate::tessellation::squares::KEYED_KEY_LEN;

/// Default canvas edge in pixels
pub const DEFAULT_SIZE: u32 = 240;
/// Default requested isogrid line count
pub const DEFAULT_LINES: u32 = 10;
/// Default probability of the primary color in weighted modes
pub const DEFAULT_PROBABILITY: f64 = 0.5;
/// Default number of quadrants per side in squares mode
pub const DEFAULT_SQUARES: u32 = 6;

/// Generation mode
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Pattern {
    /// Isogrid, weighted pick per triangle
    #[default]
    IsogridRandom,
    /// Isogrid, palette swept from left to right
    IsogridGradient,
    /// Isogrid, weighted pick mirrored about the vertical center
    IsogridMirror,
    /// Gradient background with primary-colored squares over it
    SquaresGradient,
    /// Deterministic 6x6 identicon from a hex key
    SquaresKeyed {
        /// Hex digest, at least 18 digits long
        key: String,
    },
}

impl Pattern {
    /// Short name, as accepted by request parameters
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::IsogridRandom => "random",
            Pattern::IsogridGradient => "gradient",
            Pattern::IsogridMirror => "mirror",
            Pattern::SquaresGradient => "squares",
            Pattern::SquaresKeyed { .. } => "keyed",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for one generated image
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TessellaConfig {
    /// Seed of the RNG behind every random pick
    pub seed: u32,

    /// Generation mode
    pub pattern: Pattern,

    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Requested isogrid density
    ///
    /// The effective count is recomputed from the triangle geometry and is
    /// usually one or two more than requested.
    pub lines: u32,

    /// Probability of the primary palette color (weighted modes)
    pub probability: f64,

    /// Quadrants per side (squares gradient mode)
    pub squares: u32,

    /// Direction of the squares mode background
    pub gradient_vector: GradientVector,

    /// Colors of the squares mode background; the image palette if unset
    pub gradient_palette: Option<Palette>,
}

impl Default for TessellaConfig {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            pattern: Pattern::default(),
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            lines: DEFAULT_LINES,
            probability: DEFAULT_PROBABILITY,
            squares: DEFAULT_SQUARES,
            gradient_vector: GradientVector::default(),
            gradient_palette: None,
        }
    }
}

/// Builder for creating TessellaConfig with validation
///
/// # Example
///
/// ```rust
/// use tessella::*;
///
/// let config = TessellaConfigBuilder::new()
///     .seed(42)
///     .pattern(Pattern::IsogridMirror)
///     .size(120)
///     .unwrap()
///     .probability(0.3)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.width, 120);
/// assert_eq!(config.seed, 42);
/// ```
#[derive(Debug, Clone)]
pub struct TessellaConfigBuilder {
    seed: Option<u32>,
    pattern: Pattern,
    width: u32,
    height: u32,
    lines: u32,
    probability: f64,
    squares: u32,
    gradient_vector: GradientVector,
    gradient_palette: Option<Palette>,
}

impl TessellaConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: random
    /// - pattern: `IsogridRandom`
    /// - size: 240x240
    /// - lines: 10
    /// - probability: 0.5
    /// - squares: 6
    /// - gradient: left to right through the image palette
    pub fn new() -> Self {
        Self {
            seed: None,
            pattern: Pattern::default(),
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            lines: DEFAULT_LINES,
            probability: DEFAULT_PROBABILITY,
            squares: DEFAULT_SQUARES,
            gradient_vector: GradientVector::default(),
            gradient_palette: None,
        }
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Square canvas of `size` pixels
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if size is 0
    pub fn size(self, size: u32) -> Result<Self> {
        self.dimensions(size, size)
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` if either side is 0 or exceeds `i32::MAX`
    pub fn dimensions(mut self, width: u32, height: u32) -> Result<Self> {
        for (name, value) in [("width", width), ("height", height)] {
            if value == 0 || value > i32::MAX as u32 {
                return Err(TessellaError::InvalidConfig(format!(
                    "{} must be between 1 and {} (got {})",
                    name,
                    i32::MAX,
                    value
                )));
            }
        }
        self.width = width;
        self.height = height;
        Ok(self)
    }

    /// Requested isogrid line count
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if lines is 0
    pub fn lines(mut self, lines: u32) -> Result<Self> {
        if lines == 0 {
            return Err(TessellaError::InvalidConfig(
                "line count must be positive".to_string(),
            ));
        }
        self.lines = lines;
        Ok(self)
    }

    /// Probability of the primary color
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if probability is outside `[0, 1]`
    pub fn probability(mut self, probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(TessellaError::InvalidConfig(format!(
                "probability must be within [0, 1] (got {})",
                probability
            )));
        }
        self.probability = probability;
        Ok(self)
    }

    /// Quadrants per side
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if squares is 0
    pub fn squares(mut self, squares: u32) -> Result<Self> {
        if squares == 0 {
            return Err(TessellaError::InvalidConfig(
                "square count must be positive".to_string(),
            ));
        }
        self.squares = squares;
        Ok(self)
    }

    pub fn gradient_vector(mut self, vector: GradientVector) -> Self {
        self.gradient_vector = vector;
        self
    }

    pub fn gradient_palette(mut self, palette: Palette) -> Self {
        self.gradient_palette = Some(palette);
        self
    }

    /// Build the configuration
    ///
    /// If no seed was provided, a random one is drawn.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the density does not fit the canvas width,
    /// or `InvalidKey` if a keyed pattern has too short a key.
    pub fn build(self) -> Result<TessellaConfig> {
        if self.lines > self.width {
            return Err(TessellaError::InvalidConfig(format!(
                "{} lines do not fit a {}px wide canvas",
                self.lines, self.width
            )));
        }
        if self.squares > self.width {
            return Err(TessellaError::InvalidConfig(format!(
                "{} squares do not fit a {}px wide canvas",
                self.squares, self.width
            )));
        }
        if let Pattern::SquaresKeyed { key } = &self.pattern {
            if key.len() < KEYED_KEY_LEN {
                return Err(TessellaError::InvalidKey(format!(
                    "keyed pattern needs at least {} digits (got {})",
                    KEYED_KEY_LEN,
                    key.len()
                )));
            }
        }

        let seed = self.seed.unwrap_or_else(|| rand::random());

        Ok(TessellaConfig {
            seed,
            pattern: self.pattern,
            width: self.width,
            height: self.height,
            lines: self.lines,
            probability: self.probability,
            squares: self.squares,
            gradient_vector: self.gradient_vector,
            gradient_palette: self.gradient_palette,
        })
    }
}

impl Default for TessellaConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
