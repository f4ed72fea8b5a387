use crate::math::{Point, Real};
use crate::query::ClipError;
use crate::shape::Line;

/// Squared distance between two points.
#[inline]
pub fn point_point_sq_distance(a: &Point, b: &Point) -> Real {
    (b - a).norm_squared()
}

/// Projects `pt` on the infinite line `line`.
///
/// Returns the squared distance between `pt` and its projection, together with the projection
/// itself (the foot of the perpendicular dropped from `pt`).
#[inline]
pub fn point_line_sq_distance(pt: &Point, line: &Line) -> (Real, Point) {
    let v = line.direction();
    let t = (pt - line.a()).dot(&v) * line.inv_sq_length();
    let foot = line.a() + v * t;
    (point_point_sq_distance(pt, &foot), foot)
}

/// Projects `pt` on the infinite line passing through `a` and `b`.
///
/// Fails with [`ClipError::DegenerateLine`] if `a` and `b` coincide.
pub fn try_point_line_sq_distance(
    pt: &Point,
    a: &Point,
    b: &Point,
) -> Result<(Real, Point), ClipError> {
    let line = Line::new(*a, *b)?;
    Ok(point_line_sq_distance(pt, &line))
}
