//! Request parameters with documented fallbacks
//!
//! Turns already-decoded key/value pairs (from a query string, a form, a CLI)
//! into a configuration and a palette. Nothing here rejects a request: an
//! absent or invalid parameter falls back to its default and the fallback is
//! logged at debug level.
//!
//! | parameter        | meaning                              | fallback           |
//! |------------------|--------------------------------------|--------------------|
//! | `mode`           | random, gradient, mirror, squares, keyed | random         |
//! | `theme`          | registered theme name                | bg / fg            |
//! | `bg`, `fg`       | hex colors for the two-color modes   | base theme         |
//! | `colors`         | comma separated hex palette          | theme or bg / fg   |
//! | `size`           | canvas edge in pixels                | 240                |
//! | `lines`          | requested isogrid density            | 10                 |
//! | `prob`           | primary color probability            | 0.5                |
//! | `squares`        | quadrants per side                   | 6                  |
//! | `seed`           | RNG seed                             | random             |
//! | `key`            | hex digest for `keyed`               | mode becomes random|
//! | `x1 y1 x2 y2`    | gradient vector in percent           | 0 0 100 0          |

use std::collections::HashMap;
use std::io::Write;
use std::str::FromStr;

use tracing::debug;

use crate::canvas::GradientVector;
use crate::color::{Color, Palette};
use crate::config::{
    Pattern, TessellaConfig, TessellaConfigBuilder, DEFAULT_LINES, DEFAULT_PROBABILITY,
    DEFAULT_SIZE, DEFAULT_SQUARES,
};
use crate::error::Result;
use crate::render::render_svg;
use crate::tessellation::squares::KEYED_KEY_LEN;
use crate::theme;

/// Largest accepted canvas edge; bigger requests fall back to the default
pub const MAX_SIZE: u32 = 4096;

/// A fully resolved image request
#[derive(Debug, Clone, PartialEq)]
pub struct ImageParams {
    pub config: TessellaConfig,
    pub palette: Palette,
}

impl ImageParams {
    /// Resolve parameters, applying fallbacks for anything absent or invalid
    ///
    /// # Example
    ///
    /// ```rust
    /// use tessella::params::ImageParams;
    /// use tessella::Pattern;
    ///
    /// let params = ImageParams::from_pairs([
    ///     ("mode", "mirror"),
    ///     ("theme", "seascape"),
    ///     ("size", "not-a-number"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(params.config.pattern, Pattern::IsogridMirror);
    /// assert_eq!(params.config.width, 240);
    /// assert_eq!(params.palette.len(), 2);
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let params: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().trim().to_ascii_lowercase(), v.as_ref().trim().to_string()))
            .collect();

        let pattern = pattern(&params);
        let palette = palette(&params, &pattern);

        let size = parsed::<u32>(&params, "size")
            .filter(|s| (1..=MAX_SIZE).contains(s))
            .unwrap_or(DEFAULT_SIZE);
        let lines = parsed::<u32>(&params, "lines")
            .filter(|l| (1..=size).contains(l))
            .unwrap_or(DEFAULT_LINES.min(size));
        let squares = parsed::<u32>(&params, "squares")
            .filter(|s| (1..=size).contains(s))
            .unwrap_or(DEFAULT_SQUARES.min(size));
        let probability = parsed::<f64>(&params, "prob")
            .filter(|p| (0.0..=1.0).contains(p))
            .unwrap_or(DEFAULT_PROBABILITY);

        let mut builder = TessellaConfigBuilder::new()
            .pattern(pattern)
            .size(size)?
            .lines(lines)?
            .squares(squares)?
            .probability(probability)?
            .gradient_vector(gradient_vector(&params));

        if let Some(seed) = parsed::<u32>(&params, "seed") {
            builder = builder.seed(seed);
        }

        Ok(Self {
            config: builder.build()?,
            palette,
        })
    }

    /// Render the requested image as SVG
    pub fn render_svg<W: Write>(&self, out: W) -> Result<()> {
        render_svg(&self.config, &self.palette, out)
    }
}

fn parsed<T: FromStr>(params: &HashMap<String, String>, name: &str) -> Option<T> {
    let raw = params.get(name)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!(param = name, value = %raw, "ignoring unparsable parameter");
            None
        }
    }
}

fn pattern(params: &HashMap<String, String>) -> Pattern {
    let Some(mode) = params.get("mode") else {
        return Pattern::default();
    };

    match mode.to_ascii_lowercase().as_str() {
        "random" => Pattern::IsogridRandom,
        "gradient" => Pattern::IsogridGradient,
        "mirror" => Pattern::IsogridMirror,
        "squares" => Pattern::SquaresGradient,
        "keyed" => match params.get("key") {
            Some(key) if key.len() >= KEYED_KEY_LEN => Pattern::SquaresKeyed { key: key.clone() },
            _ => {
                debug!("keyed mode without a usable key, using random");
                Pattern::default()
            }
        },
        other => {
            debug!(mode = other, "unknown mode, using random");
            Pattern::default()
        }
    }
}

/// Two-color modes get the background/foreground pair, multi-color modes the
/// whole theme or `colors` list
fn palette(params: &HashMap<String, String>, pattern: &Pattern) -> Palette {
    let base = theme::base();
    let background = parsed::<Color>(params, "bg").unwrap_or(base[0]);
    let foreground = parsed::<Color>(params, "fg").unwrap_or(base[1]);
    let mut pair = Palette::pair(background, foreground);
    let mut full: Option<Palette> = None;

    if let Some(list) = params.get("colors") {
        let colors: Vec<&str> = list.split(',').map(str::trim).collect();
        match Palette::from_hex(&colors) {
            Ok(p) => full = Some(p),
            Err(err) => debug!(colors = %list, error = %err, "ignoring color list"),
        }
    }

    if let Some(name) = params.get("theme") {
        match theme::palette(name) {
            Some(p) => {
                pair = Palette::pair(p[0], p[1]);
                full = Some(p);
            }
            None => debug!(theme = %name, "unknown theme"),
        }
    }

    match pattern {
        Pattern::IsogridRandom | Pattern::IsogridMirror => pair,
        _ => full.unwrap_or(pair),
    }
}

fn gradient_vector(params: &HashMap<String, String>) -> GradientVector {
    let coordinates: Option<Vec<u8>> = ["x1", "y1", "x2", "y2"]
        .iter()
        .map(|name| parsed::<u8>(params, name).filter(|v| *v <= 100))
        .collect();

    match coordinates.as_deref() {
        Some(&[x1, y1, x2, y2]) => GradientVector::new(x1, y1, x2, y2),
        _ => GradientVector::default(),
    }
}
