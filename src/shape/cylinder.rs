//! Infinite cylinder.

use crate::math::Real;
use crate::query::ClipError;
use crate::shape::Line;

/// The default radius of the cylinder eraser.
pub const DEFAULT_CYLINDER_RADIUS: Real = 36.0;

/// A cylinder of infinite length around an arbitrary axis.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Cylinder {
    axis: Line,
    radius_sq: Real,
}

impl Cylinder {
    /// Creates a new cylinder.
    ///
    /// # Arguments:
    /// * `axis` - the line the cylinder is centered on. It is treated as infinite.
    /// * `radius` - the distance from the axis to the cylinder surface.
    pub fn new(axis: Line, radius: Real) -> Result<Self, ClipError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ClipError::InvalidParameter {
                name: "radius",
                value: radius,
            });
        }

        Ok(Cylinder {
            axis,
            radius_sq: radius * radius,
        })
    }

    /// The same cylinder with a different radius.
    pub fn with_radius(self, radius: Real) -> Result<Self, ClipError> {
        Self::new(self.axis, radius)
    }

    /// The cylinder axis.
    #[inline]
    pub fn axis(&self) -> &Line {
        &self.axis
    }

    /// The cylinder radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius_sq.sqrt()
    }

    /// The squared cylinder radius.
    #[inline]
    pub fn radius_sq(&self) -> Real {
        self.radius_sq
    }
}
