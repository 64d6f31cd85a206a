//! Procedural SVG avatars from triangle and square tessellations
//!
//! Generates avatar-like geometric art: an "isogrid" of alternating triangles
//! whose unions outline hexagons, or a grid of squares, colored from a
//! palette by weighted, gradient or key-driven selection.
//!
//! # Quick Start
//!
//! ```rust
//! use tessella::*;
//!
//! let config = TessellaConfigBuilder::new()
//!     .seed(42)
//!     .pattern(Pattern::IsogridMirror)
//!     .size(240).unwrap()
//!     .build().unwrap();
//!
//! let palette = theme::palette("sugarsweets").unwrap();
//! let svg = render_svg_string(&config, &palette).unwrap();
//! assert!(svg.starts_with("<?xml"));
//! ```
//!
//! # Reproducibility
//!
//! Every random pick goes through a ChaCha8 generator seeded from
//! [`TessellaConfig::seed`]; the lower-level drivers in [`tessellation`] take
//! any `rand::Rng` instead.
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration and colors

// Modules
pub mod error;
pub mod color;
pub mod config;
pub mod geometry;
pub mod selection;
pub mod canvas;
pub mod tessellation;
pub mod theme;
pub mod params;
mod render;

// Re-export core types for convenience
pub use error::{TessellaError, Result};
pub use color::{Color, Palette};
pub use config::{Pattern, TessellaConfig, TessellaConfigBuilder};
pub use geometry::{GridLayout, Orientation, Triangle};
pub use canvas::{Canvas, Drawing, Fill, GradientStop, GradientVector, Shape, SvgCanvas};
pub use params::ImageParams;
pub use render::{render, render_svg, render_svg_string, SVG_CONTENT_TYPE};

// Re-export glam::IVec2 for convenience
pub use glam::IVec2;
