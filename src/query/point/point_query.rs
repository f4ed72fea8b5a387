use crate::math::Point;

/// Trait of shapes that can decide whether a world-space point must be hidden.
pub trait PointQuery {
    /// Tests if the given point is inside of `self`.
    fn contains_point(&self, pt: &Point) -> bool;
}
