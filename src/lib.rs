//! # rasterlab
//!
//! Classic line and circle rasterization algorithms as lazy pixel iterators:
//! the naive step algorithm, the digital differential analyzer (DDA),
//! Bresenham's line algorithm, and Bresenham's circle algorithm with 8-way
//! octant symmetry.
//!
//! The algorithms are total, pure functions from integer geometry to a
//! finite [`Pixel`](geometry::Pixel) sequence. Degenerate inputs (coincident
//! endpoints, zero-radius circles) emit minimal output instead of failing;
//! clipping to a display region is the consumer's job, handled by
//! [`grid::PixelGrid`].
//!
//! ## Quick start
//!
//! ```
//! use rasterlab::prelude::*;
//!
//! let segment = Segment::from_coords(5, 5, 30, 20);
//! let mut grid = PixelGrid::new(54, 26)?;
//! grid.paint(bresenham_line(segment));
//! assert_eq!(grid.set_count(), 26);
//! # Ok::<(), rasterlab::Error>(())
//! ```
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." *IBM Systems Journal*, 4(1), 25-30.
//! - Foley et al., *Computer Graphics: Principles and Practice*, ch. 3
//!   (scan conversion of lines and circles).

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]

/// Geometric primitives (points, segments, circle specifications, pixels).
pub mod geometry;

/// The rasterization algorithm suite.
pub mod raster;

/// Bounded pixel grid consumer and zoom-view geometry.
pub mod grid;

/// Coordinate text parsing.
pub mod coords;

/// Error types.
pub mod error;

pub use error::{Error, Result};

/// Commonly used types and functions for convenient imports.
///
/// ```
/// use rasterlab::prelude::*;
/// ```
pub mod prelude {
    pub use crate::coords::{parse_circle, parse_point, parse_segment};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{CircleSpec, Pixel, Point, Segment};
    pub use crate::grid::{PixelGrid, ZoomLayout};
    pub use crate::raster::{bresenham_circle, bresenham_line, dda_line, step_line};
}
