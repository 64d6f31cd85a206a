//! Isogrid geometry
//!
//! Integer vertex math for the triangular lattice: effective fringe size,
//! per-cell triangles and mirroring. Everything here is a pure function of
//! its arguments.

mod layout;
mod mirror;
mod triangle;

pub use layout::{third_point_distance, GridLayout};
pub use mirror::mirror;
pub use triangle::{cell_triangles, first_triangle, second_triangle, Orientation, Triangle};
