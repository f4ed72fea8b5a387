use crate::math::{Real, Rotation};
use crate::query::ClipError;
use crate::shape::{DEFAULT_CONE_CURSOR_SIZE, DEFAULT_CYLINDER_RADIUS};

/// The default scaling applied to controller translation deltas.
pub const DEFAULT_TRANSLATION_SENSITIVITY: Real = 3.0;

/// Tunable parameters of the clipping tools.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ToolSettings {
    /// Radius of the cone eraser cursor at the camera near plane.
    pub cone_cursor_size: Real,
    /// Radius of the cylinder eraser.
    pub cylinder_radius: Real,
    /// Scaling applied to controller rotation deltas.
    pub rotation_sensitivity: Real,
    /// Scaling applied to controller translation deltas.
    pub translation_sensitivity: Real,
    /// Angle, in radians, of one discrete rotation nudge.
    pub rotation_step: Real,
    /// Distance of one discrete translation nudge.
    pub translation_step: Real,
}

impl Default for ToolSettings {
    fn default() -> Self {
        ToolSettings {
            cone_cursor_size: DEFAULT_CONE_CURSOR_SIZE,
            cylinder_radius: DEFAULT_CYLINDER_RADIUS,
            rotation_sensitivity: 1.0,
            translation_sensitivity: DEFAULT_TRANSLATION_SENSITIVITY,
            rotation_step: (5.0 as Real).to_radians(),
            translation_step: 5.0,
        }
    }
}

impl ToolSettings {
    /// These settings with both eraser sizes set to `percent` percents of their defaults.
    pub fn with_cursor_size_percent(self, percent: Real) -> Result<Self, ClipError> {
        if !percent.is_finite() || percent <= 0.0 {
            return Err(ClipError::InvalidParameter {
                name: "percent",
                value: percent,
            });
        }

        let scale = percent / 100.0;
        Ok(ToolSettings {
            cone_cursor_size: DEFAULT_CONE_CURSOR_SIZE * scale,
            cylinder_radius: DEFAULT_CYLINDER_RADIUS * scale,
            ..self
        })
    }
}

/// The camera parameters the clipping tools depend on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Distance from the eye to the camera near plane.
    pub near_clip_distance: Real,
    /// Orientation of the camera, mapping view-space directions to world space.
    pub orientation: Rotation,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            near_clip_distance: 0.1,
            orientation: Rotation::identity(),
        }
    }
}
