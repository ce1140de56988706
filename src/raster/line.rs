//! Line rasterization iterators.
//!
//! Three algorithms over the same contract: a finite iterator of [`Pixel`]
//! approximating the ideal segment. Each iterator owns plain integer/float
//! state, so sequences are restartable by rebuilding them and safe to drive
//! from any thread.

use crate::geometry::{Pixel, Segment};

/// Naive per-column rasterization.
///
/// One pixel per integer x from `from.x` to `to.x` inclusive, with y solved
/// directly from the line equation using floor division. Steep segments
/// (`|dy| > |dx|`) come out with visible gaps; that inaccuracy is the point
/// of the naive algorithm, not a defect.
///
/// Construct via [`step_line`](crate::raster::step_line).
#[derive(Debug, Clone)]
pub struct StepLine {
    x0: i64,
    y0: i64,
    dx: i64,
    dy: i64,
    // Cursor kept in i64 so the one-past-end increment cannot overflow
    // when to.x == i32::MAX.
    x: i64,
    x_end: i64,
}

impl StepLine {
    pub(crate) fn new(segment: Segment) -> Self {
        let s = segment.ordered_by_x();
        Self {
            x0: i64::from(s.from.x),
            y0: i64::from(s.from.y),
            dx: s.dx(),
            dy: s.dy(),
            x: i64::from(s.from.x),
            x_end: i64::from(s.to.x),
        }
    }
}

impl Iterator for StepLine {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.x > self.x_end {
            return None;
        }
        let x = self.x as i32;
        // Floor division keeps y monotone for negative slopes as well. The
        // product of two full-range i32 extents needs 64 bits plus sign, so
        // it is carried in i128; the quotient lands between 0 and dy and the
        // final y between the endpoint ys, both i32 by construction.
        let passed_y = if self.dx == 0 {
            0
        } else {
            (i128::from(self.dy) * i128::from(self.x - self.x0))
                .div_euclid(i128::from(self.dx)) as i64
        };
        self.x += 1;
        Some(Pixel::new(x, (self.y0 + passed_y) as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.x_end - self.x + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StepLine {}

/// Digital differential analyzer.
///
/// Emits the starting pixel, then `steps = max(|dx|, |dy|)` fixed
/// floating-point increments of `(dx/steps, dy/steps)`, each truncated
/// toward zero on emission.
///
/// Construct via [`dda_line`](crate::raster::dda_line).
#[derive(Debug, Clone)]
pub struct DdaLine {
    x: f64,
    y: f64,
    x_inc: f64,
    y_inc: f64,
    end: Pixel,
    remaining: u64,
    started: bool,
}

impl DdaLine {
    pub(crate) fn new(segment: Segment) -> Self {
        let s = segment.ordered_by_x();
        let dx = s.dx() as f64;
        let dy = s.dy() as f64;
        let steps = s.dx().unsigned_abs().max(s.dy().unsigned_abs());
        let (x_inc, y_inc) = if steps == 0 {
            (0.0, 0.0)
        } else {
            (dx / steps as f64, dy / steps as f64)
        };
        Self {
            x: f64::from(s.from.x),
            y: f64::from(s.from.y),
            x_inc,
            y_inc,
            end: Pixel::new(s.to.x, s.to.y),
            remaining: steps,
            started: false,
        }
    }
}

impl Iterator for DdaLine {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if !self.started {
            self.started = true;
            return Some(Pixel::new(self.x as i32, self.y as i32));
        }
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            // The accumulated position at the final step is the endpoint in
            // exact arithmetic but may sit a few ulps under an integer in
            // f64, which truncation would pull off the endpoint. Snap it.
            return Some(self.end);
        }
        self.x += self.x_inc;
        self.y += self.y_inc;
        // `as i32` truncates toward zero, matching the reference rounding
        // for negative components.
        Some(Pixel::new(self.x as i32, self.y as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize + usize::from(!self.started);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DdaLine {}

/// Bresenham's line algorithm.
///
/// Steep segments are rasterized in the transposed space and swapped back on
/// emission, so exactly one pixel is produced per unit of the major axis.
/// The error term starts at the real-valued `dx / 2` rather than its integer
/// floor; for odd `dx` this reproduces the reference tie-breaking.
///
/// Construct via [`bresenham_line`](crate::raster::bresenham_line).
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    steep: bool,
    x: i64,
    x_end: i64,
    y: i32,
    ystep: i32,
    dx: f64,
    dy: f64,
    error: f64,
}

impl BresenhamLine {
    pub(crate) fn new(segment: Segment) -> Self {
        let steep = segment.is_steep();
        let s = if steep { segment.transposed() } else { segment };
        let s = s.ordered_by_x();

        let dx = s.dx() as f64;
        let dy = s.dy().abs() as f64;
        let ystep = if s.to.y >= s.from.y { 1 } else { -1 };
        Self {
            steep,
            x: i64::from(s.from.x),
            x_end: i64::from(s.to.x),
            y: s.from.y,
            ystep,
            dx,
            dy,
            error: dx / 2.0,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.x > self.x_end {
            return None;
        }
        let x = self.x as i32;
        let pixel = if self.steep {
            Pixel::new(self.y, x)
        } else {
            Pixel::new(x, self.y)
        };

        self.x += 1;
        self.error -= self.dy;
        if self.error < 0.0 {
            self.y += self.ystep;
            self.error += self.dx;
        }
        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.x_end - self.x + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BresenhamLine {}
