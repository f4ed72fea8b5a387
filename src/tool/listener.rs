use crate::gesture::AdjustmentStage;
use crate::shape::ShapeType;
use crate::volume::{SweepProgress, SweepReport};
use core::ops::ControlFlow;

/// Observer of a [`ToolController`](crate::tool::ToolController).
///
/// Typically implemented by the host to rebuild cursor visualizations, display sweep progress
/// and redraw the volume once clipped.
pub trait ToolListener {
    /// The selected clipping algorithm changed.
    fn algorithm_changed(&mut self, _algorithm: Option<ShapeType>) {}

    /// The staged adjustment moved to another stage.
    fn stage_changed(&mut self, _stage: AdjustmentStage) {}

    /// A `z` slice was swept. Returning [`ControlFlow::Break`] cancels the sweep.
    fn sweep_progress(&mut self, _progress: &SweepProgress) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// A sweep finished (or was cancelled).
    fn sweep_finished(&mut self, _report: &SweepReport) {}
}
