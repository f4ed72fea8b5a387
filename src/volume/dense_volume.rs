use crate::bounding_volume::Aabb;
use crate::math::Real;
use crate::query::ClipError;
use crate::volume::VolumeAccessor;
use alloc::vec;
use alloc::vec::Vec;
use num::Zero;

/// A volume storing its voxels contiguously in memory, `x` varying fastest.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseVolume<T> {
    dimensions: [usize; 3],
    bounds: Aabb,
    data: Vec<T>,
}

/// `nx * ny * nz`, or `None` if it overflows.
fn voxel_count([nx, ny, nz]: [usize; 3]) -> Option<usize> {
    nx.checked_mul(ny)?.checked_mul(nz)
}

impl<T: Copy> DenseVolume<T> {
    /// A volume with every voxel set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if the number of voxels overflows `usize`.
    pub fn new(dimensions: [usize; 3], bounds: Aabb, value: T) -> Self {
        let Some(len) = voxel_count(dimensions) else {
            panic!("the volume dimensions {:?} overflow usize", dimensions);
        };

        DenseVolume {
            dimensions,
            bounds,
            data: vec![value; len],
        }
    }

    /// A volume wrapping existing voxel data laid out `x` fastest.
    ///
    /// Fails with [`ClipError::VolumeSizeMismatch`] if `data` does not hold exactly one scalar
    /// per voxel, and with [`ClipError::InvalidParameter`] if the number of voxels overflows
    /// `usize`.
    pub fn from_data(dimensions: [usize; 3], bounds: Aabb, data: Vec<T>) -> Result<Self, ClipError> {
        let [nx, ny, nz] = dimensions;
        let expected = voxel_count(dimensions).ok_or(ClipError::InvalidParameter {
            name: "dimensions",
            value: nx as Real * ny as Real * nz as Real,
        })?;
        if data.len() != expected {
            return Err(ClipError::VolumeSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(DenseVolume {
            dimensions,
            bounds,
            data,
        })
    }

    /// The voxel scalars, `x` varying fastest.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy + Zero> DenseVolume<T> {
    /// The number of voxels whose scalar is zero.
    pub fn count_zeros(&self) -> usize {
        self.data.iter().filter(|v| v.is_zero()).count()
    }
}

impl<T: Copy + Zero> VolumeAccessor for DenseVolume<T> {
    type Scalar = T;

    #[inline]
    fn dimensions(&self) -> [usize; 3] {
        self.dimensions
    }

    #[inline]
    fn world_bounds(&self) -> Aabb {
        self.bounds
    }

    #[inline]
    fn scalar_at(&self, x: usize, y: usize, z: usize) -> T {
        self.data[self.linear_index(x, y, z)]
    }

    #[inline]
    fn set_scalar_at(&mut self, x: usize, y: usize, z: usize, value: T) {
        let i = self.linear_index(x, y, z);
        self.data[i] = value;
    }
}
