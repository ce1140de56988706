//! Circle rasterization via the Bresenham/midpoint recurrence.

use crate::geometry::{CircleSpec, Pixel};

/// Symmetric pixels emitted per octant step. Coincident pixels on the
/// symmetry axes are emitted as-is, never deduplicated.
const OCTANTS: usize = 8;

/// Bresenham's circle algorithm with 8-way octant symmetry.
///
/// The running `x` extent is seeded with the *unrounded* center-to-edge
/// distance and converges to integers through the loop's own decrement and
/// error arithmetic; the `x >= y` termination check and the error update are
/// carried out in f64. Pre-rounding the radius would change the emitted set
/// at small radii.
///
/// Construct via [`bresenham_circle`](crate::raster::bresenham_circle).
#[derive(Debug, Clone)]
pub struct BresenhamCircle {
    cx: i32,
    cy: i32,
    x: f64,
    y: i64,
    radius_error: f64,
    octant: usize,
    done: bool,
}

impl BresenhamCircle {
    pub(crate) fn new(circle: CircleSpec) -> Self {
        let x = circle.radius();
        Self {
            cx: circle.center.x,
            cy: circle.center.y,
            x,
            y: 0,
            radius_error: 1.0 - x,
            // x = 0, y = 0 still satisfies x >= y: the degenerate octet of
            // the center pixel is emitted once before termination.
            done: false,
            octant: 0,
        }
    }

    /// The symmetric pixel for the current octant, with the fractional
    /// extent truncated toward zero.
    ///
    /// Sums are carried in i64 and clamped onto the i32 grid: a center near
    /// the i32 edge plus the radius extent must not overflow, and any
    /// bounded consumer drops the far-out clamped pixels.
    fn octant_pixel(&self) -> Pixel {
        let x = self.x as i64;
        let y = self.y;
        let cx = i64::from(self.cx);
        let cy = i64::from(self.cy);
        let (px, py) = match self.octant {
            0 => (cx + x, cy + y),
            1 => (cx + y, cy + x),
            2 => (cx - x, cy + y),
            3 => (cx - y, cy + x),
            4 => (cx - x, cy - y),
            5 => (cx - y, cy - x),
            6 => (cx + x, cy - y),
            _ => (cx + y, cy - x),
        };
        Pixel::new(clamp_coord(px), clamp_coord(py))
    }

    /// Advance one octant step: bump `y`, update the decision variable, and
    /// re-check the `x >= y` loop condition.
    fn advance(&mut self) {
        self.y += 1;
        if self.radius_error < 0.0 {
            self.radius_error += (2 * self.y + 1) as f64;
        } else {
            self.x -= 1.0;
            self.radius_error += 2.0 * (self.y as f64 - self.x + 1.0);
        }
        if self.x < self.y as f64 {
            self.done = true;
        }
    }
}

fn clamp_coord(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl Iterator for BresenhamCircle {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.done {
            return None;
        }
        let pixel = self.octant_pixel();
        self.octant += 1;
        if self.octant == OCTANTS {
            self.octant = 0;
            self.advance();
        }
        Some(pixel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::raster::bresenham_circle;

    fn pixels(circle: CircleSpec) -> Vec<(i32, i32)> {
        bresenham_circle(circle).map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_radius_five_cardinal_points() {
        let px = pixels(CircleSpec::new(Point::new(0, 0), Point::new(5, 0)));
        for cardinal in [(5, 0), (0, 5), (-5, 0), (0, -5)] {
            assert!(px.contains(&cardinal), "missing {cardinal:?}");
        }
    }

    #[test]
    fn test_radius_five_radial_tolerance() {
        let px = pixels(CircleSpec::new(Point::new(0, 0), Point::new(5, 0)));
        for &(x, y) in &px {
            let r = f64::from(x * x + y * y).sqrt();
            assert!(
                (r - 5.0).abs() <= 0.5,
                "pixel ({x}, {y}) strays {r} from radius 5"
            );
        }
    }

    #[test]
    fn test_octet_multiple_output() {
        let px = pixels(CircleSpec::new(Point::new(0, 0), Point::new(5, 0)));
        assert_eq!(px.len() % 8, 0);
    }

    #[test]
    fn test_zero_radius_terminates_with_single_octet() {
        let c = Point::new(3, 4);
        let px = pixels(CircleSpec::new(c, c));
        // One octet of the center pixel, repeated, then termination.
        assert_eq!(px, vec![(3, 4); 8]);
    }

    #[test]
    fn test_offset_center() {
        let px = pixels(CircleSpec::new(Point::new(10, -7), Point::new(13, -3)));
        // radius 5 circle recentered at (10, -7)
        let origin = pixels(CircleSpec::new(Point::new(0, 0), Point::new(3, 4)));
        let shifted: Vec<(i32, i32)> = origin.iter().map(|&(x, y)| (x + 10, y - 7)).collect();
        assert_eq!(px, shifted);
    }

    #[test]
    fn test_fractional_radius_differs_from_prerounded() {
        // Center (0,0), edge (1,1): distance sqrt(2) ~ 1.414. Seeding with
        // the unrounded value is load-bearing; the first octet carries the
        // truncated fractional extent.
        let px = pixels(CircleSpec::new(Point::new(0, 0), Point::new(1, 1)));
        assert_eq!(px[0], (1, 0));
        assert!(!px.is_empty());
    }

    #[test]
    fn test_center_near_i32_edge_does_not_overflow() {
        let px = pixels(CircleSpec::new(
            Point::new(i32::MAX, 0),
            Point::new(i32::MAX - 5, 0),
        ));
        assert_eq!(px.len() % 8, 0);
        // The in-range octant pixels are unaffected by clamping.
        assert!(px.contains(&(i32::MAX - 5, 0)));
        assert!(px.contains(&(i32::MAX, 5)));
    }

    #[test]
    fn test_symmetry_axes_repeat_pixels() {
        // At y = 0, the octet contains pairwise coincident pixels; they are
        // emitted verbatim, not deduplicated.
        let px = pixels(CircleSpec::new(Point::new(0, 0), Point::new(2, 0)));
        let first_octet = &px[..8];
        assert_eq!(first_octet[0], (2, 0));
        assert_eq!(first_octet[1], (0, 2));
        assert_eq!(first_octet[2], (-2, 0));
        assert_eq!(first_octet[6], (2, 0), "axis pixel repeats");
    }
}
