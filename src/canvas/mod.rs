//! Drawing sinks
//!
//! The tessellation drivers only speak to the [`Canvas`] trait. Two sinks are
//! provided:
//! - [`SvgCanvas`]: streams SVG text into any `io::Write`
//! - [`Drawing`]: records the emitted shapes in memory

mod drawing;
mod svg;

pub use drawing::{Drawing, Shape};
pub use svg::SvgCanvas;

use std::fmt;

use glam::IVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;

/// Canvas attributes that keep renderers from anti-aliasing cell edges,
/// which would show hairlines between same-colored neighbors
pub const DEFAULT_ATTRIBUTES: &[(&str, &str)] = &[("shape-rendering", "optimizeSpeed")];

/// Fill style of an emitted shape
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fill {
    /// Opaque color, `fill:rgb(R,G,B)`
    Solid(Color),
    /// Reference to a gradient defined on the canvas, `fill:url(#id)`
    Url(String),
}

impl Fill {
    /// Solid color of the fill, if any
    pub fn color(&self) -> Option<Color> {
        match self {
            Fill::Solid(c) => Some(*c),
            Fill::Url(_) => None,
        }
    }
}

impl From<Color> for Fill {
    fn from(color: Color) -> Self {
        Fill::Solid(color)
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::Solid(c) => write!(f, "fill:{}", c),
            Fill::Url(id) => write!(f, "fill:url(#{})", id),
        }
    }
}

/// Direction of a linear gradient, in percent of the canvas (0-100)
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientVector {
    pub x1: u8,
    pub y1: u8,
    pub x2: u8,
    pub y2: u8,
}

impl GradientVector {
    pub const fn new(x1: u8, y1: u8, x2: u8, y2: u8) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl Default for GradientVector {
    /// Left to right
    fn default() -> Self {
        Self::new(0, 0, 100, 0)
    }
}

/// One color stop of a linear gradient
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient, in percent
    pub offset: u8,
    pub color: Color,
    pub opacity: f32,
}

/// Sink for the shapes of one image
///
/// Calls arrive in document order: `start`, optional definitions, shapes,
/// `end`. Implementations write incrementally; an error part-way leaves the
/// output truncated.
pub trait Canvas {
    fn start(&mut self, width: u32, height: u32, attributes: &[(&str, &str)]) -> Result<()>;

    fn polygon(&mut self, points: &[IVec2], fill: &Fill) -> Result<()>;

    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, fill: &Fill) -> Result<()>;

    fn begin_defs(&mut self) -> Result<()>;

    fn linear_gradient(
        &mut self,
        id: &str,
        vector: GradientVector,
        stops: &[GradientStop],
    ) -> Result<()>;

    fn end_defs(&mut self) -> Result<()>;

    fn end(&mut self) -> Result<()>;
}
