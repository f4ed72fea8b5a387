//! Clipping shapes.
//!
//! Every shape is constructed fully configured; there is no way to obtain a shape whose
//! containment test would depend on missing parameters.

pub use self::clipping_shape::{ClippingShape, ShapeType};
pub use self::cone::{Cone, DEFAULT_CONE_CURSOR_SIZE};
pub use self::convex_polygon::{ConvexPolygon, MIN_POLYGON_POINTS};
pub use self::cylinder::{Cylinder, DEFAULT_CYLINDER_RADIUS};
pub use self::half_space::HalfSpace;
pub use self::line::Line;

mod clipping_shape;
mod cone;
mod convex_polygon;
mod cylinder;
mod half_space;
mod line;
