use crate::bounding_volume::Aabb;
use num::Zero;

/// Read/write access to the voxels of a 3D scalar volume owned by the host.
///
/// Voxels are addressed by integer `(x, y, z)` indices, `x` varying fastest. The world-space
/// bounds are split evenly between the voxels, so that voxel `(x, y, z)` is centered on
/// `world_bounds().cell_center(dimensions(), [x, y, z])`.
pub trait VolumeAccessor {
    /// The scalar stored in each voxel.
    type Scalar: Copy + Zero;

    /// The number of voxels along each axis.
    fn dimensions(&self) -> [usize; 3];

    /// The world-space extent of the whole voxel grid.
    fn world_bounds(&self) -> Aabb;

    /// The scalar of the voxel `(x, y, z)`.
    fn scalar_at(&self, x: usize, y: usize, z: usize) -> Self::Scalar;

    /// Overwrites the scalar of the voxel `(x, y, z)`.
    fn set_scalar_at(&mut self, x: usize, y: usize, z: usize, value: Self::Scalar);

    /// The linear index of the voxel `(x, y, z)` in an x-fastest layout.
    #[inline]
    fn linear_index(&self, x: usize, y: usize, z: usize) -> usize {
        let [nx, ny, _] = self.dimensions();
        x + nx * (y + ny * z)
    }
}

impl<V: VolumeAccessor + ?Sized> VolumeAccessor for &mut V {
    type Scalar = V::Scalar;

    #[inline]
    fn dimensions(&self) -> [usize; 3] {
        (**self).dimensions()
    }

    #[inline]
    fn world_bounds(&self) -> Aabb {
        (**self).world_bounds()
    }

    #[inline]
    fn scalar_at(&self, x: usize, y: usize, z: usize) -> Self::Scalar {
        (**self).scalar_at(x, y, z)
    }

    #[inline]
    fn set_scalar_at(&mut self, x: usize, y: usize, z: usize, value: Self::Scalar) {
        (**self).set_scalar_at(x, y, z, value)
    }
}
