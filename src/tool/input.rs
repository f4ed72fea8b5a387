use crate::gesture::ControllerDelta;
use crate::math::Point;

/// Set of controller buttons currently held down.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Buttons(u8);

bitflags::bitflags! {
    impl Buttons: u8 {
        /// Moves the staged adjustment forward, applying the shape from its last stage.
        const ADVANCE = 1;
        /// Moves the staged adjustment backward.
        const BACK = 1 << 1;
        /// Applies the eraser or cursor shape immediately.
        const CONFIRM = 1 << 2;
        /// Controller deltas are only applied while this button is held.
        const HOLD = 1 << 3;
    }
}

/// A discrete controller button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// See [`Buttons::ADVANCE`].
    Advance,
    /// See [`Buttons::BACK`].
    Back,
    /// See [`Buttons::CONFIRM`].
    Confirm,
    /// See [`Buttons::HOLD`].
    Hold,
}

/// The kind of a pointer click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointerClick {
    /// A click without modifier.
    #[default]
    Plain,
    /// A click with the modifier key held, finalizing polygon gestures.
    WithModifier,
}

/// Input that updates the tools without completing a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContinuousInput {
    /// The world-space picking ray under the pointer.
    Pointer {
        /// The pointer position on the camera near plane.
        near: Point,
        /// The pointer position on the camera far plane.
        far: Point,
    },
    /// Motion controller deltas.
    Controller(ControllerDelta),
}

/// Everything an input source reports during one tick.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TickInput {
    /// Buttons currently held down.
    pub buttons: Buttons,
    /// The current picking ray under the pointer, as `(near, far)` points.
    pub pointer: Option<(Point, Point)>,
    /// Controller deltas accumulated since the last tick.
    pub delta: Option<ControllerDelta>,
}
