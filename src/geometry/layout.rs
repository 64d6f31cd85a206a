//! Grid layout: effective fringe size and line count
//!
//! The requested line count is only a density hint. The fringe size derived
//! from it is replaced by the third-point distance so that two triangles
//! sharing a vertical edge close into a hexagon, and the number of lines that
//! fit the canvas is recomputed from that.

use std::ops::RangeInclusive;

use tracing::debug;

use crate::error::{Result, TessellaError};

/// Base angle at the apex of the half equilateral triangle
const APEX_HALF_ANGLE_DEGREES: f64 = 30.0;

/// Horizontal distance from a vertical edge to the opposite apex
///
/// For an edge of length `fringe` this is the height of the equilateral
/// triangle built on it, `(fringe / 2) / tan(30°)`, rounded to the nearest
/// integer coordinate.
///
/// # Example
///
/// ```rust
/// use tessella::geometry::third_point_distance;
///
/// assert_eq!(third_point_distance(10), 9);
/// assert_eq!(third_point_distance(0), 0);
/// ```
pub fn third_point_distance(fringe: i32) -> i32 {
    let half = fringe as f64 / 2.0;
    (half / APEX_HALF_ANGLE_DEGREES.to_radians().tan()).round() as i32
}

/// Resolved grid dimensions for one isogrid image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Canvas width in pixels
    pub width: i32,
    /// Canvas height in pixels
    pub height: i32,
    /// Effective edge length of one triangle (equal to `distance`)
    pub fringe: i32,
    /// Third-point distance, i.e. the width of one column
    pub distance: i32,
    /// Number of columns that fit the canvas width
    pub lines: i32,
    /// Number of rows that fit the canvas height
    pub rows: i32,
}

impl GridLayout {
    /// Resolve the layout for a canvas and a requested line count
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the canvas is empty, `target_lines` is 0,
    /// or the density is so high that a cell would be narrower than a pixel.
    pub fn new(width: u32, height: u32, target_lines: u32) -> Result<Self> {
        if target_lines == 0 {
            return Err(TessellaError::InvalidConfig(
                "line count must be positive".to_string(),
            ));
        }
        let width = to_coordinate(width, "width")?;
        let height = to_coordinate(height, "height")?;
        let target = to_coordinate(target_lines, "line count")?;

        let requested = width / target;
        if requested == 0 {
            return Err(TessellaError::InvalidConfig(format!(
                "{} lines do not fit a {}px wide canvas",
                target_lines, width
            )));
        }

        let distance = third_point_distance(requested);
        if distance == 0 {
            return Err(TessellaError::InvalidConfig(format!(
                "fringe size {} is too small to tile",
                requested
            )));
        }

        let fringe = distance;
        let layout = Self {
            width,
            height,
            fringe,
            distance,
            lines: width / fringe,
            rows: height / fringe,
        };

        debug!(
            requested_lines = target_lines,
            lines = layout.lines,
            fringe = layout.fringe,
            "isogrid layout resolved"
        );
        Ok(layout)
    }

    /// Rows to visit, one beyond each edge so boundary hexagons are clipped
    /// by the canvas rather than missing
    #[inline]
    pub fn row_range(&self) -> RangeInclusive<i32> {
        -1..=self.rows
    }

    /// Axis offset that makes [`mirror`](super::mirror) reflect about the
    /// canvas center instead of the center of the drawn columns
    #[inline]
    pub fn mirror_offset(&self) -> i32 {
        self.width - self.lines * self.fringe
    }
}

fn to_coordinate(value: u32, what: &str) -> Result<i32> {
    match i32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(TessellaError::InvalidConfig(format!(
            "{} must be between 1 and {} (got {})",
            what,
            i32::MAX,
            value
        ))),
    }
}
