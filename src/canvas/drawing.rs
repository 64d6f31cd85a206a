//! In-memory recording sink

use glam::IVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Canvas, Fill, GradientStop, GradientVector};
use crate::error::Result;

/// A shape emitted to a [`Drawing`]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon {
        points: Vec<IVec2>,
        fill: Fill,
    },
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        fill: Fill,
    },
    LinearGradient {
        id: String,
        vector: GradientVector,
        stops: Vec<GradientStop>,
    },
}

/// Engine-agnostic record of one generated image
///
/// Useful to post-process shapes or to inspect a generation without parsing
/// SVG.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    pub width: u32,
    pub height: u32,
    /// Canvas attributes passed to `start`
    pub attributes: Vec<(String, String)>,
    /// Shapes and definitions in emission order
    pub shapes: Vec<Shape>,
    /// Whether `end` was called
    pub finished: bool,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emitted polygons with their fills
    pub fn polygons(&self) -> impl Iterator<Item = (&[IVec2], &Fill)> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Polygon { points, fill } => Some((points.as_slice(), fill)),
            _ => None,
        })
    }

    /// Emitted rectangles as `(x, y, width, height, fill)`
    pub fn rects(&self) -> impl Iterator<Item = (i32, i32, i32, i32, &Fill)> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Rect { x, y, width, height, fill } => Some((*x, *y, *width, *height, fill)),
            _ => None,
        })
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons().count()
    }

    pub fn rect_count(&self) -> usize {
        self.rects().count()
    }

    /// Check if nothing was drawn
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Canvas for Drawing {
    fn start(&mut self, width: u32, height: u32, attributes: &[(&str, &str)]) -> Result<()> {
        self.width = width;
        self.height = height;
        self.attributes = attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Ok(())
    }

    fn polygon(&mut self, points: &[IVec2], fill: &Fill) -> Result<()> {
        self.shapes.push(Shape::Polygon {
            points: points.to_vec(),
            fill: fill.clone(),
        });
        Ok(())
    }

    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, fill: &Fill) -> Result<()> {
        self.shapes.push(Shape::Rect {
            x,
            y,
            width,
            height,
            fill: fill.clone(),
        });
        Ok(())
    }

    fn begin_defs(&mut self) -> Result<()> {
        Ok(())
    }

    fn linear_gradient(
        &mut self,
        id: &str,
        vector: GradientVector,
        stops: &[GradientStop],
    ) -> Result<()> {
        self.shapes.push(Shape::LinearGradient {
            id: id.to_string(),
            vector,
            stops: stops.to_vec(),
        });
        Ok(())
    }

    fn end_defs(&mut self) -> Result<()> {
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
