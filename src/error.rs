//! Error types for tessellation and rendering

use std::fmt;
use std::io;

/// Errors that can occur while laying out, coloring or writing an image
#[derive(Debug)]
pub enum TessellaError {
    /// Configuration validation failed (degenerate grid, bad probability, ...)
    InvalidConfig(String),
    /// Palette is too small for the requested selection algorithm
    InvalidPalette(String),
    /// Hash key cannot serve the requested digit
    InvalidKey(String),
    /// A color string could not be parsed
    InvalidColor(String),
    /// The drawing sink failed to write
    Io(io::Error),
}

impl fmt::Display for TessellaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TessellaError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            TessellaError::InvalidPalette(msg) => write!(f, "invalid palette: {}", msg),
            TessellaError::InvalidKey(msg) => write!(f, "invalid key: {}", msg),
            TessellaError::InvalidColor(msg) => write!(f, "invalid color: {}", msg),
            TessellaError::Io(err) => write!(f, "write failed: {}", err),
        }
    }
}

impl std::error::Error for TessellaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TessellaError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TessellaError {
    fn from(err: io::Error) -> Self {
        TessellaError::Io(err)
    }
}

/// Result type alias for tessellation operations
pub type Result<T> = std::result::Result<T, TessellaError>;
