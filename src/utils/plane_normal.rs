use crate::math::{Point, UnitVector, DEFAULT_EPSILON};
use crate::query::ClipError;
use na::Unit;

/// The unit normal of the plane passing through `a`, `b` and `c`.
///
/// The normal is `(b - a) × (c - a)`, normalized. Fails with [`ClipError::DegeneratePlane`]
/// if the three points are collinear.
#[inline]
pub fn plane_normal(a: &Point, b: &Point, c: &Point) -> Result<UnitVector, ClipError> {
    let normal = (b - a).cross(&(c - a));
    Unit::try_new(normal, DEFAULT_EPSILON).ok_or(ClipError::DegeneratePlane)
}
