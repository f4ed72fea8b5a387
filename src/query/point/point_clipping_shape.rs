use crate::math::Point;
use crate::query::PointQuery;
use crate::shape::ClippingShape;

impl PointQuery for ClippingShape {
    #[inline]
    fn contains_point(&self, pt: &Point) -> bool {
        match self {
            ClippingShape::HalfSpace2D(s) | ClippingShape::HalfSpace3D(s) => s.contains_point(pt),
            ClippingShape::Cone(s) => s.contains_point(pt),
            ClippingShape::Cylinder(s) => s.contains_point(pt),
            ClippingShape::ConvexPolygon(s) => s.contains_point(pt),
        }
    }
}
