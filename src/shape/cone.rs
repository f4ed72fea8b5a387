//! Screen-space eraser cone.

use crate::math::{Point, Real};
use crate::query::ClipError;
use crate::shape::Line;

/// The default size of the cone eraser cursor, measured at the camera near plane.
pub const DEFAULT_CONE_CURSOR_SIZE: Real = 0.06;

/// An infinite cone with arbitrary apex and axis.
///
/// A point at squared distance `d²` from the axis, whose projection on the axis lies at squared
/// distance `h²` from the apex, is inside the cone iff `d² <= k * h²`. The factor `k` is the
/// squared tangent of the cone half-angle.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Cone {
    axis: Line,
    apex: Point,
    radius_factor_sq: Real,
}

impl Cone {
    /// Creates a new cone from its axis, apex and squared half-angle tangent.
    pub fn new(axis: Line, apex: Point, radius_factor_sq: Real) -> Result<Self, ClipError> {
        if !radius_factor_sq.is_finite() || radius_factor_sq < 0.0 {
            return Err(ClipError::InvalidParameter {
                name: "radius_factor_sq",
                value: radius_factor_sq,
            });
        }

        Ok(Cone {
            axis,
            apex,
            radius_factor_sq,
        })
    }

    /// The cone swept by a screen-space cursor along a picking ray.
    ///
    /// `near` and `far` are the world-space points of the cursor on the camera near and far
    /// planes. The apex is placed at the eye, `near_distance` behind `near`, and the cone
    /// opens so that its radius equals `cursor_size` at the near plane.
    pub fn from_screen_ray(
        near: Point,
        far: Point,
        near_distance: Real,
        cursor_size: Real,
    ) -> Result<Self, ClipError> {
        if !near_distance.is_finite() || near_distance <= 0.0 {
            return Err(ClipError::InvalidParameter {
                name: "near_distance",
                value: near_distance,
            });
        }

        let axis = Line::new(near, far)?;
        let dir = axis.direction().normalize();
        let apex = near - dir * near_distance;
        let ratio = cursor_size / near_distance;
        Self::new(axis, apex, ratio * ratio)
    }

    /// The cone axis.
    #[inline]
    pub fn axis(&self) -> &Line {
        &self.axis
    }

    /// The cone apex.
    #[inline]
    pub fn apex(&self) -> &Point {
        &self.apex
    }

    /// The squared radius of the cone at unit distance from its apex.
    #[inline]
    pub fn radius_factor_sq(&self) -> Real {
        self.radius_factor_sq
    }
}
