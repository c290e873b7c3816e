//! Exact geometric predicates.
//!
//! Every test is decided by the sign of a cross product computed in the
//! coordinate's widened type. There are no tolerances.

mod intersect;
mod orientation;

pub(crate) use intersect::folds_back;
pub use intersect::{point_on_line, segments_intersected};
pub(crate) use orientation::angle_cmp;
pub use orientation::{cross, left_turn, left_turn_segment, Orientation};
