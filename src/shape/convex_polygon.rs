use crate::math::{Point, UnitVector};
use crate::query::ClipError;
use crate::utils;
use alloc::vec::Vec;

/// The minimum number of points (three near/far pairs) of a [`ConvexPolygon`].
pub const MIN_POLYGON_POINTS: usize = 6;

/// A convex polygon extruded through the view depth.
///
/// The polygon is given as a list of (near, far) point pairs, each pair being the two ends of
/// the picking ray of one click. The side planes of the extruded prism join each pair to the
/// near point of the next pair, the last pair wrapping to the first.
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexPolygon {
    points: Vec<Point>,
    planes: Vec<(Point, UnitVector)>,
    erase_positive: bool,
}

impl ConvexPolygon {
    /// Builds the extruded polygon from its near/far point pairs.
    ///
    /// The region erased is the one containing `inside_hint`: the interior of the prism if the
    /// hint lies inside it, everything else otherwise.
    ///
    /// Fails with [`ClipError::UnpairedPoints`] if `points` has an odd length,
    /// [`ClipError::InsufficientPoints`] if it has less than [`MIN_POLYGON_POINTS`] points, and
    /// [`ClipError::DegeneratePlane`] if one of the side planes is degenerate.
    pub fn new(points: Vec<Point>, inside_hint: &Point) -> Result<Self, ClipError> {
        if points.len() % 2 != 0 {
            return Err(ClipError::UnpairedPoints(points.len()));
        }

        if points.len() < MIN_POLYGON_POINTS {
            return Err(ClipError::InsufficientPoints {
                required: MIN_POLYGON_POINTS,
                captured: points.len(),
            });
        }

        let planes = (0..points.len())
            .step_by(2)
            .map(|i| -> Result<(Point, UnitVector), ClipError> {
                let next = points[(i + 2) % points.len()];
                let normal = utils::plane_normal(&points[i], &points[i + 1], &next)?;
                Ok((points[i], normal))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut result = ConvexPolygon {
            points,
            planes,
            erase_positive: false,
        };
        result.erase_positive = result.is_inside(inside_hint);
        Ok(result)
    }

    /// The near/far point pairs of this polygon.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the interior of the prism is erased (as opposed to its exterior).
    #[inline]
    pub fn erase_positive(&self) -> bool {
        self.erase_positive
    }

    /// Tests if `pt` lies strictly on the same side of every side plane.
    ///
    /// A point exactly on a plane counts as being on its negative side.
    pub fn is_inside(&self, pt: &Point) -> bool {
        let mut planes = self.planes.iter();
        let Some((origin, normal)) = planes.next() else {
            return false;
        };

        let sign = normal.dot(&(pt - origin)) > 0.0;
        planes.all(|(origin, normal)| (normal.dot(&(pt - origin)) > 0.0) == sign)
    }
}
