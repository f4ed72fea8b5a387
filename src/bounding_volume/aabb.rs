//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box (AABB).
///
/// Describes the world-space extent of a volume. Together with the voxel grid dimensions it
/// defines the size of each voxel cell and the world-space center of every voxel.
///
/// # Structure
///
/// - **mins**: The corner voxel `(0, 0, 0)` starts from
/// - **maxs**: The opposite corner
///
/// Usually `mins ≤ maxs` on every axis. A volume whose grid runs backward along an axis has
/// `mins > maxs` there: its cell size is then negative and voxel `0` still lies next to
/// `mins`.
///
/// # Example
///
/// ```rust
/// use volclip3d::bounding_volume::Aabb;
/// use volclip3d::na::{Point3, Vector3};
///
/// // The bounds of a volume given as [min_x, max_x, min_y, max_y, min_z, max_z].
/// let aabb = Aabb::from_bounds([0.0, 4.0, 0.0, 2.0, -1.0, 1.0]);
///
/// assert_eq!(aabb.center(), Point3::new(2.0, 1.0, 0.0));
/// assert_eq!(aabb.cell_size([4, 4, 4]), Vector3::new(1.0, 0.5, 0.5));
/// assert_eq!(aabb.cell_center([4, 4, 4], [0, 1, 3]), Point3::new(0.5, 0.75, 0.75));
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point,

    /// The point with maximum coordinates.
    pub maxs: Point,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point, maxs: Point) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from bounds ordered as `[min_x, max_x, min_y, max_y, min_z, max_z]`.
    ///
    /// The pairs are kept as given, even when a minimum is greater than its maximum, so that
    /// voxel `0` always sits next to the first bound of each pair.
    pub fn from_bounds(bounds: [Real; 6]) -> Aabb {
        let mut mins = Point::origin();
        let mut maxs = Point::origin();

        for i in 0..DIM {
            mins[i] = bounds[i * 2];
            maxs[i] = bounds[i * 2 + 1];
        }

        Aabb { mins, maxs }
    }

    /// Returns the center point of this AABB.
    #[inline]
    pub fn center(&self) -> Point {
        na::center(&self.mins, &self.maxs)
    }

    /// Returns the extents of this AABB along each axis.
    #[inline]
    pub fn extents(&self) -> Vector {
        self.maxs - self.mins
    }

    /// The size of one cell when this AABB is split into a grid of `dims` cells.
    ///
    /// Axes with zero cells have a zero cell size.
    pub fn cell_size(&self, dims: [usize; 3]) -> Vector {
        let extents = self.extents();
        Vector::from_fn(|i, _| {
            if dims[i] == 0 {
                0.0
            } else {
                extents[i] / dims[i] as Real
            }
        })
    }

    /// The center of the grid cell at `index` when this AABB is split into `dims` cells.
    ///
    /// Computed as `mins + cell_size * (index + 0.5)` on each axis.
    pub fn cell_center(&self, dims: [usize; 3], index: [usize; 3]) -> Point {
        let cell = self.cell_size(dims);
        Point::from(Vector::from_fn(|i, _| {
            self.mins[i] + cell[i] * (index[i] as Real + 0.5)
        }))
    }
}
