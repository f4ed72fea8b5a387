use crate::math::Point;
use crate::query::PointQuery;
use crate::shape::HalfSpace;

impl PointQuery for HalfSpace {
    #[inline]
    fn contains_point(&self, pt: &Point) -> bool {
        (self.signed_distance(pt) > 0.0) == self.erase_positive()
    }
}
