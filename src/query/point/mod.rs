//! Point inclusion.

#[doc(inline)]
pub use self::point_query::PointQuery;

mod point_clipping_shape;
mod point_cone;
mod point_convex_polygon;
mod point_cylinder;
mod point_halfspace;
#[doc(hidden)]
pub mod point_query;
