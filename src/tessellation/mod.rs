//! Tessellation drivers
//!
//! Each driver walks the whole grid of one generation mode, asks the
//! geometry for cell shapes and a selector for fills, and streams the result
//! into a [`Canvas`](crate::canvas::Canvas). Drivers hold no state between
//! calls; randomness comes from the RNG passed in.
//!
//! - [`isogrid`]: triangles forming hexagons (random, gradient, mirror)
//! - [`squares`]: quadrants (gradient background, keyed identicon)

pub mod isogrid;
pub mod squares;
