//! Color selection algorithms
//!
//! Three independent, stateless ways to turn a palette into a fill. The
//! random ones take the caller's RNG so a seeded generator reproduces an
//! image exactly.

mod gradient;
mod key;
mod weighted;

pub use gradient::pick_gradient;
pub use key::{pick_by_key, pick_index_by_key};
pub use weighted::{check_weighted, pick_weighted, pick_weighted_index};
