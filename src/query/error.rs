use crate::math::Real;
use alloc::string::String;

/// Errors raised while configuring clipping shapes, collecting gestures, or sweeping volumes.
///
/// Every variant is a recoverable condition: the tool controller reports it to its host and
/// leaves both the volume and the in-progress gesture untouched.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum ClipError {
    /// The requested clipping algorithm identifier is unknown.
    #[error("unknown clipping algorithm `{0}`")]
    InvalidAlgorithm(String),
    /// A gesture was finalized before enough points were captured.
    #[error("the gesture needs {required} points but only {captured} were captured")]
    InsufficientPoints {
        /// Number of points the shape needs.
        required: usize,
        /// Number of points captured so far.
        captured: usize,
    },
    /// A polygon gesture has enough points but was not finalized by a modifier click.
    #[error("the polygon gesture must be finalized by a modifier click")]
    NotFinalized,
    /// A shape was requested before the parameters it depends on were set.
    #[error("the clipping shape has not been configured yet")]
    NotConfigured,
    /// The two points defining a line coincide.
    #[error("the line endpoints coincide")]
    DegenerateLine,
    /// The points defining a plane are collinear.
    #[error("the plane points are collinear")]
    DegeneratePlane,
    /// Convex polygon vertices must come in near/far pairs.
    #[error("polygon vertices must come in near/far pairs, got {0} points")]
    UnpairedPoints(usize),
    /// A sweep was requested while no volume is bound.
    #[error("no volume is bound to the clipping tool")]
    NoVolumeBound,
    /// A numeric parameter is out of its valid range.
    #[error("invalid value {value} for `{name}`")]
    InvalidParameter {
        /// The name of the rejected parameter.
        name: &'static str,
        /// The rejected value.
        value: Real,
    },
    /// The scalar buffer of a volume does not match its dimensions.
    #[error("volume data holds {actual} scalars but its dimensions require {expected}")]
    VolumeSizeMismatch {
        /// `nx * ny * nz`.
        expected: usize,
        /// Length of the provided buffer.
        actual: usize,
    },
}
