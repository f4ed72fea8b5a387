use crate::math::Point;
use crate::query::PointQuery;
use crate::shape::Cylinder;
use crate::utils;

impl PointQuery for Cylinder {
    #[inline]
    fn contains_point(&self, pt: &Point) -> bool {
        utils::point_line_sq_distance(pt, self.axis()).0 <= self.radius_sq()
    }
}
