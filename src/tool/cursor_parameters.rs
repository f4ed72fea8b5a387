use crate::math::{Point, Real, UnitVector};
use alloc::vec::Vec;

/// Plain geometric parameters of the shape being configured, for cursor visualization.
#[derive(Clone, Debug, PartialEq)]
pub enum CursorParameters {
    /// A clipping plane.
    Plane {
        /// A point on the plane.
        point: Point,
        /// The plane normal, pointing toward the erased side.
        normal: UnitVector,
    },
    /// A cylinder around an infinite axis.
    Cylinder {
        /// Two points on the axis.
        axis: [Point; 2],
        /// The cylinder radius.
        radius: Real,
    },
    /// A cone following the pointer.
    Cone {
        /// Two points on the axis.
        axis: [Point; 2],
        /// The cone apex.
        apex: Point,
        /// Squared radius of the cone at unit distance from its apex.
        radius_factor_sq: Real,
    },
    /// The points captured so far by a point-based gesture.
    Points(Vec<Point>),
}
