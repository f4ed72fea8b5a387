use crate::math::Point;
use crate::query::PointQuery;
use crate::shape::ConvexPolygon;

impl PointQuery for ConvexPolygon {
    #[inline]
    fn contains_point(&self, pt: &Point) -> bool {
        self.is_inside(pt) == self.erase_positive()
    }
}
