//! Linear algebra type aliases.

use na::{Isometry3, Point3, Translation3, UnitQuaternion, UnitVector3, Vector3};

/// The scalar type used throughout this crate.
pub type Real = f64;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The point type.
pub type Point = Point3<Real>;

/// The vector type.
pub type Vector = Vector3<Real>;

/// The unit vector type.
pub type UnitVector = UnitVector3<Real>;

/// The transformation matrix type.
pub type Isometry = Isometry3<Real>;

/// The rotation type.
pub type Rotation = UnitQuaternion<Real>;

/// The translation type.
pub type Translation = Translation3<Real>;
