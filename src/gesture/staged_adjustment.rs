//! Rotate-then-translate adjustment of a 3D cursor driven by motion controllers.

use crate::math::{Isometry, Point, Real, Rotation, Vector};
use crate::query::ClipError;
use crate::shape::{ClippingShape, Cylinder, HalfSpace, Line, ShapeType};
use crate::tool::ToolSettings;

/// The stage of a [`StagedAdjustment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AdjustmentStage {
    /// Controller deltas rotate the cursor around its origin.
    #[default]
    Rotating,
    /// Controller deltas translate the cursor.
    Translating,
}

/// The outcome of [`StagedAdjustment::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageStep {
    /// The adjustment moved to the given stage.
    Stage(AdjustmentStage),
    /// The last stage was confirmed: the cursor shape must be applied.
    Fire,
}

/// A view-space axis used by discrete cursor nudges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdjustmentAxis {
    /// The view horizontal axis.
    X,
    /// The view vertical axis.
    Y,
    /// The view depth axis.
    Z,
}

impl AdjustmentAxis {
    fn direction(self) -> Vector {
        match self {
            AdjustmentAxis::X => Vector::x(),
            AdjustmentAxis::Y => Vector::y(),
            AdjustmentAxis::Z => Vector::z(),
        }
    }
}

/// Orientation and position changes reported by a motion controller, in view space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ControllerDelta {
    /// Rotation as a scaled axis (axis times angle in radians).
    pub rotation: Vector,
    /// Translation.
    pub translation: Vector,
}

/// State machine adjusting a persistent 3D cursor in two stages before applying it.
///
/// The cursor's local `+Y` axis is the cylinder axis and its local `+Z` axis is the normal of
/// the clipping plane; its origin lies on both.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedAdjustment {
    stage: AdjustmentStage,
    holding: bool,
    cursor: Isometry,
}

impl Default for StagedAdjustment {
    fn default() -> Self {
        Self::new(Isometry::identity())
    }
}

impl StagedAdjustment {
    /// A new adjustment in the [`AdjustmentStage::Rotating`] stage.
    pub fn new(cursor: Isometry) -> Self {
        StagedAdjustment {
            stage: AdjustmentStage::Rotating,
            holding: false,
            cursor,
        }
    }

    /// The current stage.
    #[inline]
    pub fn stage(&self) -> AdjustmentStage {
        self.stage
    }

    /// Whether controller deltas are currently applied.
    #[inline]
    pub fn is_holding(&self) -> bool {
        self.holding
    }

    /// The cursor transform.
    #[inline]
    pub fn cursor(&self) -> &Isometry {
        &self.cursor
    }

    /// Replaces the cursor transform.
    pub fn set_cursor(&mut self, cursor: Isometry) {
        self.cursor = cursor;
    }

    /// Enables or disables the application of controller deltas.
    pub fn set_hold(&mut self, holding: bool) {
        self.holding = holding;
    }

    /// Goes back to the first stage.
    pub fn restart(&mut self) {
        self.stage = AdjustmentStage::Rotating;
    }

    /// Moves to the next stage, or requests the shape to be applied from the last stage.
    ///
    /// Firing does not restart the stages: the caller restarts them once the shape was
    /// successfully applied.
    pub fn advance(&mut self) -> StageStep {
        match self.stage {
            AdjustmentStage::Rotating => {
                self.stage = AdjustmentStage::Translating;
                StageStep::Stage(self.stage)
            }
            AdjustmentStage::Translating => StageStep::Fire,
        }
    }

    /// Moves to the previous stage, staying on the first one.
    pub fn back(&mut self) -> AdjustmentStage {
        self.stage = AdjustmentStage::Rotating;
        self.stage
    }

    /// Applies a controller delta to the cursor, if [`Self::is_holding`].
    ///
    /// Only the rotation is applied while rotating, and only the translation while translating.
    /// Returns `true` if the cursor was modified.
    pub fn apply_delta(
        &mut self,
        delta: &ControllerDelta,
        view: &Rotation,
        settings: &ToolSettings,
    ) -> bool {
        if !self.holding {
            return false;
        }

        match self.stage {
            AdjustmentStage::Rotating => {
                self.rotate(view * (delta.rotation * settings.rotation_sensitivity))
            }
            AdjustmentStage::Translating => {
                self.translate(view * (delta.translation * settings.translation_sensitivity))
            }
        }

        true
    }

    /// Rotates or translates the cursor by one discrete step along a view axis, depending on
    /// the current stage.
    pub fn nudge(
        &mut self,
        axis: AdjustmentAxis,
        increase: bool,
        view: &Rotation,
        settings: &ToolSettings,
    ) {
        let sign: Real = if increase { 1.0 } else { -1.0 };
        let dir = view * axis.direction() * sign;

        match self.stage {
            AdjustmentStage::Rotating => self.rotate(dir * settings.rotation_step),
            AdjustmentStage::Translating => self.translate(dir * settings.translation_step),
        }
    }

    fn rotate(&mut self, scaled_axis: Vector) {
        self.cursor.rotation = Rotation::from_scaled_axis(scaled_axis) * self.cursor.rotation;
    }

    fn translate(&mut self, shift: Vector) {
        self.cursor.translation.vector += shift;
    }

    /// The cylinder axis carried by the cursor: through its origin, along its local `+Y`.
    pub fn cursor_axis(&self) -> Result<Line, ClipError> {
        cursor_axis(&self.cursor)
    }

    /// The clipping plane carried by the cursor: through its origin, erasing along its local
    /// `+Z`.
    pub fn cursor_plane(&self) -> Result<HalfSpace, ClipError> {
        HalfSpace::new(self.cursor * Vector::z(), self.cursor * Point::origin())
    }

    /// Builds the clipping shape carried by the cursor for a cursor-driven algorithm.
    ///
    /// Fails with [`ClipError::NotConfigured`] for algorithms that are not cursor-driven.
    pub fn cursor_shape(
        &self,
        shape_type: ShapeType,
        settings: &ToolSettings,
    ) -> Result<ClippingShape, ClipError> {
        match shape_type {
            ShapeType::Cylinder => {
                Ok(Cylinder::new(self.cursor_axis()?, settings.cylinder_radius)?.into())
            }
            ShapeType::HalfSpace3D => Ok(ClippingShape::HalfSpace3D(self.cursor_plane()?)),
            _ => Err(ClipError::NotConfigured),
        }
    }
}

pub(crate) fn cursor_axis(cursor: &Isometry) -> Result<Line, ClipError> {
    Line::new(cursor * Point::origin(), cursor * Point::new(0.0, 1.0, 0.0))
}
