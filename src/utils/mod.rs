//! Geometric primitives shared by every clipping shape.

pub use self::plane_normal::plane_normal;
pub use self::point_line_distance::{
    point_line_sq_distance, point_point_sq_distance, try_point_line_sq_distance,
};

mod plane_normal;
mod point_line_distance;
