//! Isogrid cell triangles
//!
//! Each grid cell holds two half-triangles. The *first* one has its vertical
//! edge spanning the cell (`y0..y0+fringe`); the *second* one is shifted down
//! by half a fringe and points the other way, filling the gap between two
//! stacked first triangles. Alternating orientation by column makes adjacent
//! columns share their vertical edges, which is what draws the hexagons.

use glam::IVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::layout::GridLayout;
use super::mirror;

/// Direction the apex of a cell's first triangle points to
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `<`: vertical edge on the right side of the column
    Left,
    /// `>`: vertical edge on the left side of the column
    Right,
}

impl Orientation {
    /// Even columns point left, odd columns point right
    #[inline]
    pub fn from_column(col: i32) -> Self {
        if col.rem_euclid(2) == 0 {
            Orientation::Left
        } else {
            Orientation::Right
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
        }
    }
}

/// Three integer vertices, ordered top of edge, apex, bottom of edge
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub points: [IVec2; 3],
}

impl Triangle {
    fn new(edge_x: i32, top: i32, bottom: i32, apex: IVec2) -> Self {
        Self {
            points: [IVec2::new(edge_x, top), apex, IVec2::new(edge_x, bottom)],
        }
    }

    #[inline]
    pub fn top(&self) -> IVec2 {
        self.points[0]
    }

    #[inline]
    pub fn apex(&self) -> IVec2 {
        self.points[1]
    }

    #[inline]
    pub fn bottom(&self) -> IVec2 {
        self.points[2]
    }

    pub fn xs(&self) -> [i32; 3] {
        self.points.map(|p| p.x)
    }

    pub fn ys(&self) -> [i32; 3] {
        self.points.map(|p| p.y)
    }

    /// Reflect about the vertical axis of a `lines`-column grid
    pub fn mirrored(&self, lines: i32, fringe: i32, axis_offset: i32) -> Self {
        let mirrored = mirror(&self.points, lines, fringe, axis_offset);
        Self {
            points: [mirrored[0], mirrored[1], mirrored[2]],
        }
    }
}

/// Outer triangle of cell `(col, row)`
///
/// `Left` puts the vertical edge at `x0 + distance` and the apex at `x0`;
/// `Right` is the mirror image inside the same column.
pub fn first_triangle(
    col: i32,
    row: i32,
    fringe: i32,
    distance: i32,
    orientation: Orientation,
) -> Triangle {
    let x0 = col * fringe;
    let y0 = row * fringe;
    let apex_y = y0 + fringe / 2;

    match orientation {
        Orientation::Left => Triangle::new(x0 + distance, y0, y0 + fringe, IVec2::new(x0, apex_y)),
        Orientation::Right => Triangle::new(x0, y0, y0 + fringe, IVec2::new(x0 + distance, apex_y)),
    }
}

/// Inner triangle of cell `(col, row)`, closing the hexagon below the first
///
/// The apex is stitched onto the bottom vertex of the first triangle.
/// Deriving it as `y0 + 2 * (fringe / 2)` drifts by a pixel for odd fringe
/// sizes and leaves a visible seam.
pub fn second_triangle(
    col: i32,
    row: i32,
    fringe: i32,
    distance: i32,
    orientation: Orientation,
) -> Triangle {
    let x0 = col * fringe;
    let top = row * fringe + fringe / 2;
    let bottom = top + fringe;
    let stitch_y = first_triangle(col, row, fringe, distance, orientation)
        .bottom()
        .y;

    match orientation.flipped() {
        Orientation::Left => Triangle::new(x0 + distance, top, bottom, IVec2::new(x0, stitch_y)),
        Orientation::Right => Triangle::new(x0, top, bottom, IVec2::new(x0 + distance, stitch_y)),
    }
}

/// Both triangles of a cell, oriented by column parity
pub fn cell_triangles(col: i32, row: i32, layout: &GridLayout) -> [Triangle; 2] {
    let orientation = Orientation::from_column(col);
    [
        first_triangle(col, row, layout.fringe, layout.distance, orientation),
        second_triangle(col, row, layout.fringe, layout.distance, orientation),
    ]
}
