//! Rasterization algorithms.
//!
//! Four pure function families from geometric input to a finite lazy pixel
//! sequence: the naive step algorithm, the digital differential analyzer,
//! Bresenham's line algorithm, and Bresenham's circle algorithm. All are
//! total over any integer input; degenerate segments and zero-radius
//! circles emit minimal output instead of failing.
//!
//! Sequences are stateless between invocations: calling a constructor again
//! recomputes the pixels from scratch, and nothing is shared, so the
//! functions are safe to call concurrently.
//!
//! # Example
//!
//! ```
//! use rasterlab::geometry::Segment;
//! use rasterlab::raster::bresenham_line;
//!
//! let pixels: Vec<_> = bresenham_line(Segment::from_coords(5, 5, 30, 20)).collect();
//! assert_eq!(pixels.len(), 26);
//! ```

mod circle;
mod line;

pub use circle::BresenhamCircle;
pub use line::{BresenhamLine, DdaLine, StepLine};

use crate::geometry::{CircleSpec, Segment};

/// Rasterize a segment with the naive step algorithm.
///
/// Endpoints are normalized left-to-right, then one pixel is emitted per
/// integer x with `y` solved by floor division. Output length is
/// `|to.x - from.x| + 1`; steep segments produce gaps by design.
#[must_use]
pub fn step_line(segment: Segment) -> StepLine {
    StepLine::new(segment)
}

/// Rasterize a segment with the digital differential analyzer.
///
/// Output length is `max(|dx|, |dy|) + 1`; the first and last pixels are
/// the normalized endpoints.
#[must_use]
pub fn dda_line(segment: Segment) -> DdaLine {
    DdaLine::new(segment)
}

/// Rasterize a segment with Bresenham's line algorithm.
///
/// Output length after steep/left-right normalization is
/// `|to.x - from.x| + 1`, one pixel per unit of the major axis.
#[must_use]
pub fn bresenham_line(segment: Segment) -> BresenhamLine {
    BresenhamLine::new(segment)
}

/// Rasterize a circle outline with Bresenham's circle algorithm.
///
/// Emits eight symmetric pixels per octant step; pixels coinciding on the
/// symmetry axes are repeated rather than deduplicated. A zero-radius
/// circle emits one octet of the center pixel and terminates.
#[must_use]
pub fn bresenham_circle(circle: CircleSpec) -> BresenhamCircle {
    BresenhamCircle::new(circle)
}
