//! Parsing user-entered coordinate text.
//!
//! The only failure surface around the rasterizer: text from the two X/Y
//! entry fields must parse as integers before any algorithm is invoked. On
//! failure the caller reports the invalid input and leaves the previous
//! canvas contents untouched.

use crate::error::{Error, Result};
use crate::geometry::{CircleSpec, Point, Segment};

/// Parse one coordinate field, trimming surrounding whitespace.
fn parse_field(text: &str) -> Result<i32> {
    text.trim()
        .parse()
        .map_err(|_| Error::InvalidCoordinates {
            text: text.to_string(),
        })
}

/// Parse a pair of coordinate fields into a point.
///
/// # Errors
///
/// Returns [`Error::InvalidCoordinates`] naming the first field that is not
/// a decimal integer.
pub fn parse_point(x_text: &str, y_text: &str) -> Result<Point> {
    Ok(Point::new(parse_field(x_text)?, parse_field(y_text)?))
}

/// Parse the four From/To fields into a segment.
///
/// # Errors
///
/// Returns [`Error::InvalidCoordinates`] for the first non-integer field.
pub fn parse_segment(
    from_x: &str,
    from_y: &str,
    to_x: &str,
    to_y: &str,
) -> Result<Segment> {
    Ok(Segment::new(
        parse_point(from_x, from_y)?,
        parse_point(to_x, to_y)?,
    ))
}

/// Parse the four fields into a circle specification, center first.
///
/// # Errors
///
/// Returns [`Error::InvalidCoordinates`] for the first non-integer field.
pub fn parse_circle(
    center_x: &str,
    center_y: &str,
    edge_x: &str,
    edge_y: &str,
) -> Result<CircleSpec> {
    Ok(CircleSpec::new(
        parse_point(center_x, center_y)?,
        parse_point(edge_x, edge_y)?,
    ))
}
