//! Geometric primitives for rasterization.
//!
//! All inputs to the rasterizer are integer-coordinate values; the only
//! floating-point quantity is the Euclidean distance used to derive a
//! circle's radius.

/// A 2D point with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    ///
    /// The component differences are widened to i64 first, so endpoints
    /// spanning more than `i32::MAX` do not overflow.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = (i64::from(self.x) - i64::from(other.x)) as f64;
        let dy = (i64::from(self.y) - i64::from(other.y)) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An integer pixel cell, the rasterizer's sole output type.
///
/// Structurally identical to [`Point`] but kept distinct: a `Point` is
/// geometric input supplied by the caller, a `Pixel` is a cell the canvas
/// paints. Emitted once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    /// X coordinate of the cell.
    pub x: i32,
    /// Y coordinate of the cell.
    pub y: i32,
}

impl Pixel {
    /// Create a new pixel.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Pixel {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

/// A line segment between two points.
///
/// `from == to` is a valid, degenerate segment; every algorithm still emits
/// at least the single point for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Create a segment from raw coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Signed x extent, `to.x - from.x`, widened to i64 so segments
    /// spanning the whole i32 range do not overflow.
    #[must_use]
    pub const fn dx(&self) -> i64 {
        self.to.x as i64 - self.from.x as i64
    }

    /// Signed y extent, `to.y - from.y`, widened to i64.
    #[must_use]
    pub const fn dy(&self) -> i64 {
        self.to.y as i64 - self.from.y as i64
    }

    /// Whether the segment rises faster than it runs (`|dy| > |dx|`).
    #[must_use]
    pub const fn is_steep(&self) -> bool {
        self.dy().abs() > self.dx().abs()
    }

    /// A new segment with both endpoints swapped if needed so that
    /// `from.x <= to.x`.
    ///
    /// Returns a fresh value rather than mutating in place, so a caller's
    /// segment is never silently reordered under it.
    #[must_use]
    pub const fn ordered_by_x(self) -> Self {
        if self.from.x > self.to.x {
            Self::new(self.to, self.from)
        } else {
            self
        }
    }

    /// A new segment with the x and y roles of both endpoints exchanged.
    ///
    /// Used by the steep case of Bresenham's algorithm, which works in the
    /// transposed space and swaps back on emission.
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self::new(
            Point::new(self.from.y, self.from.x),
            Point::new(self.to.y, self.to.x),
        )
    }
}

/// A circle given by its center and a point defining the radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CircleSpec {
    /// Center of the circle.
    pub center: Point,
    /// A point on (or defining) the circle.
    pub edge: Point,
}

impl CircleSpec {
    /// Create a new circle specification.
    #[must_use]
    pub const fn new(center: Point, edge: Point) -> Self {
        Self { center, edge }
    }

    /// The real-valued radius, the Euclidean distance from center to edge.
    ///
    /// Deliberately not rounded: the circle algorithm seeds its running `x`
    /// with this exact value and converges to integers through its own
    /// decrement logic. Rounding here changes the emitted set at small radii.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.center.distance(self.edge)
    }
}
