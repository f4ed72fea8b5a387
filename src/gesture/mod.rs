//! State machines turning raw input events into configured clipping shapes.

pub use self::gesture_session::{GesturePhase, GestureSession};
pub use self::staged_adjustment::{
    AdjustmentAxis, AdjustmentStage, ControllerDelta, StageStep, StagedAdjustment,
};

mod gesture_session;
mod staged_adjustment;
