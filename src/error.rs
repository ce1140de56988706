//! Error types for rasterlab operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rasterlab operations.
///
/// The rasterization algorithms themselves are total over integer input and
/// contribute no variants; errors arise only at the edges (coordinate text
/// parsing, grid construction).
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid dimensions for a pixel grid.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Coordinate text that does not parse as an integer.
    #[error("Invalid coordinates: {text:?}")]
    InvalidCoordinates {
        /// The offending input text.
        text: String,
    },
}
