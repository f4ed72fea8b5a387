//! Voxel volumes and the sweep that clips them.

pub use self::dense_volume::DenseVolume;
pub use self::volume_accessor::VolumeAccessor;
pub use self::volume_sweep::{sweep, sweep_cancellable, SweepProgress, SweepReport};

mod dense_volume;
mod volume_accessor;
mod volume_sweep;
