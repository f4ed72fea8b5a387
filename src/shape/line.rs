use crate::math::{Point, Real, Vector};
use crate::query::ClipError;

/// An infinite line passing through two distinct points.
///
/// Used as the axis of cones and cylinders. The line is only constructible from distinct
/// points, so projecting on it never divides by zero.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Line {
    a: Point,
    b: Point,
    inv_sq_length: Real,
}

impl Line {
    /// Creates the line passing through `a` and `b`.
    ///
    /// Fails with [`ClipError::DegenerateLine`] if the points coincide.
    pub fn new(a: Point, b: Point) -> Result<Self, ClipError> {
        if relative_eq!(a, b) {
            return Err(ClipError::DegenerateLine);
        }

        let sq_length = (b - a).norm_squared();
        Ok(Line {
            a,
            b,
            inv_sq_length: 1.0 / sq_length,
        })
    }

    /// The first point defining this line.
    #[inline]
    pub fn a(&self) -> Point {
        self.a
    }

    /// The second point defining this line.
    #[inline]
    pub fn b(&self) -> Point {
        self.b
    }

    /// The non-normalized direction `b - a`.
    #[inline]
    pub fn direction(&self) -> Vector {
        self.b - self.a
    }

    /// The inverse of the squared length of [`Self::direction`].
    #[inline]
    pub fn inv_sq_length(&self) -> Real {
        self.inv_sq_length
    }
}
