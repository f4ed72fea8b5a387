/*!
volclip3d
=========

**volclip3d** carves regions out of 3D scalar volumes. A region is described by a
clipping shape (half-space, cone, infinite cylinder or extruded convex polygon)
that is configured interactively from pointer clicks or motion-controller deltas,
then swept over every voxel of the volume to zero the voxels it contains.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![warn(unused_qualifications)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

extern crate alloc;

#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod gesture;
pub mod math;
pub mod query;
pub mod shape;
pub mod tool;
pub mod utils;
pub mod volume;
