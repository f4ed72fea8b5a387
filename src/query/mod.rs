//! Point containment queries and error types.
//!
//! Every clipping shape implements [`PointQuery`]: a point is "contained" when it must be
//! hidden by the sweep.

pub use self::error::ClipError;
pub use self::point::PointQuery;

mod error;
pub mod point;
