//! Half-space delimited by an arbitrary plane.
use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::query::ClipError;
use crate::utils;
use na::Unit;

/// A half-space delimited by an infinite plane, with a selected side to erase.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct HalfSpace {
    normal: UnitVector,
    point: Point,
    erase_positive: bool,
}

impl HalfSpace {
    /// A half-space erasing every point on the positive side of `normal`.
    ///
    /// The normal is normalized internally. Fails with [`ClipError::DegeneratePlane`] if it is
    /// zero.
    pub fn new(normal: Vector, point: Point) -> Result<Self, ClipError> {
        let normal = Unit::try_new(normal, DEFAULT_EPSILON).ok_or(ClipError::DegeneratePlane)?;
        Ok(HalfSpace {
            normal,
            point,
            erase_positive: true,
        })
    }

    /// A half-space erasing the side of the plane where `side_hint` lies.
    ///
    /// If the hint lies exactly on the plane, the negative side is erased.
    pub fn with_side_hint(normal: Vector, point: Point, side_hint: &Point) -> Result<Self, ClipError> {
        let mut result = Self::new(normal, point)?;
        result.erase_positive = result.signed_distance(side_hint) > 0.0;
        Ok(result)
    }

    /// A half-space erasing the positive side of its normal, with the normal flipped so that
    /// `side_hint` lies on the erased side.
    pub fn oriented_toward(normal: Vector, point: Point, side_hint: &Point) -> Result<Self, ClipError> {
        let mut result = Self::new(normal, point)?;
        if result.signed_distance(side_hint) <= 0.0 {
            result.normal = -result.normal;
        }
        Ok(result)
    }

    /// The half-space bounded by the plane through `p0`, `p1`, `p2`, erasing the side where
    /// `side_hint` lies.
    pub fn from_points(
        p0: &Point,
        p1: &Point,
        p2: &Point,
        side_hint: &Point,
    ) -> Result<Self, ClipError> {
        let normal = utils::plane_normal(p0, p1, p2)?;
        Self::with_side_hint(normal.into_inner(), *p0, side_hint)
    }

    /// The unit normal of the boundary plane.
    #[inline]
    pub fn normal(&self) -> &UnitVector {
        &self.normal
    }

    /// A point on the boundary plane.
    #[inline]
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Whether points on the positive side of the normal are erased.
    #[inline]
    pub fn erase_positive(&self) -> bool {
        self.erase_positive
    }

    /// Signed distance from `pt` to the boundary plane, positive along the normal.
    #[inline]
    pub fn signed_distance(&self, pt: &Point) -> Real {
        self.normal.dot(&(pt - self.point))
    }
}
