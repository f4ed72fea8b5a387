use crate::math::Point;
use crate::query::PointQuery;
use crate::shape::Cone;
use crate::utils;

impl PointQuery for Cone {
    #[inline]
    fn contains_point(&self, pt: &Point) -> bool {
        let (sq_dist, foot) = utils::point_line_sq_distance(pt, self.axis());
        let sq_height = utils::point_point_sq_distance(self.apex(), &foot);
        sq_dist <= self.radius_factor_sq() * sq_height
    }
}
