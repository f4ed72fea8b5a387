use crate::query::PointQuery;
use crate::volume::VolumeAccessor;
use core::ops::ControlFlow;
use core::time::Duration;
use num::Zero;
use std::time::Instant;

/// Progress of a sweep, reported once per completed `z` slice.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SweepProgress {
    /// Index of the slice just completed.
    pub slice: usize,
    /// Number of slices of the volume.
    pub num_slices: usize,
    /// Number of voxels hidden so far.
    pub hidden: usize,
}

/// Summary of a completed (or cancelled) sweep.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SweepReport {
    /// Number of voxels contained by the shape, and thus written to zero.
    pub hidden: usize,
    /// Number of hidden voxels that were not already zero.
    pub cleared: usize,
    /// Number of `z` slices fully processed.
    pub slices: usize,
    /// Whether the sweep was stopped before processing every slice.
    pub cancelled: bool,
    /// Wall-clock duration of the sweep.
    pub elapsed: Duration,
}

/// Zeroes every voxel of `volume` whose center is contained by `shape`.
///
/// Voxels are visited `z` first (outermost), then `y`, then `x`; `progress` is called with the
/// index of each completed `z` slice. Applying the same shape twice is idempotent.
pub fn sweep<V, S>(volume: &mut V, shape: &S, mut progress: impl FnMut(usize)) -> SweepReport
where
    V: VolumeAccessor + ?Sized,
    S: PointQuery + ?Sized,
{
    sweep_cancellable(volume, shape, |p| {
        progress(p.slice);
        ControlFlow::Continue(())
    })
}

/// Same as [`sweep`], but the sweep stops after the current slice as soon as `progress`
/// returns [`ControlFlow::Break`].
///
/// Slices completed before the cancellation stay clipped.
pub fn sweep_cancellable<V, S>(
    volume: &mut V,
    shape: &S,
    mut progress: impl FnMut(SweepProgress) -> ControlFlow<()>,
) -> SweepReport
where
    V: VolumeAccessor + ?Sized,
    S: PointQuery + ?Sized,
{
    let dims = volume.dimensions();
    let [nx, ny, nz] = dims;
    let bounds = volume.world_bounds();

    log::info!("Clipping a {}x{}x{} volume.", nx, ny, nz);
    let timer = Instant::now();
    let mut report = SweepReport::default();

    for z in 0..nz {
        for y in 0..ny {
            for x in 0..nx {
                if shape.contains_point(&bounds.cell_center(dims, [x, y, z])) {
                    report.hidden += 1;

                    if !volume.scalar_at(x, y, z).is_zero() {
                        report.cleared += 1;
                    }

                    volume.set_scalar_at(x, y, z, <V::Scalar as Zero>::zero());
                }
            }
        }

        report.slices += 1;
        let flow = progress(SweepProgress {
            slice: z,
            num_slices: nz,
            hidden: report.hidden,
        });

        if flow.is_break() {
            report.cancelled = report.slices < nz;
            break;
        }
    }

    report.elapsed = timer.elapsed();

    if report.cancelled {
        log::info!(
            "Clipping cancelled after {}/{} slices. Elapsed time: {:.2} seconds.",
            report.slices,
            nz,
            report.elapsed.as_secs_f64()
        );
    } else {
        log::info!(
            "Clipping finished: {} voxels hidden. Elapsed time: {:.2} seconds.",
            report.hidden,
            report.elapsed.as_secs_f64()
        );
    }

    report
}
