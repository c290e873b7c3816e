//! monosweep - Exact polygon triangulation by monotone partitioning
//!
//! Integer coordinates, exact predicates: every orientation and sweep
//! comparison is decided in a widened integer type, so there are no
//! tolerances to tune. Polygons with holes are validated, classified under
//! a top-to-bottom sweep and split into y-monotone pieces, which are then
//! triangulated in linear time.
//!
//! # Example
//!
//! ```
//! use monosweep::{triangulate_with_holes, Point2};
//!
//! let outer: Vec<Point2<i32>> = vec![
//!     Point2::new(0, 0),
//!     Point2::new(4, 0),
//!     Point2::new(4, 4),
//!     Point2::new(0, 4),
//! ];
//! let hole = vec![
//!     Point2::new(1, 1),
//!     Point2::new(1, 3),
//!     Point2::new(3, 3),
//!     Point2::new(3, 1),
//! ];
//!
//! let result = triangulate_with_holes(&outer, &[hole]).unwrap();
//! for edge in result.edges() {
//!     println!("{}", edge);
//! }
//! ```

pub mod error;
pub mod io;
pub mod polygon;
pub mod predicates;
pub mod primitives;
pub mod session;

pub use error::PolygonError;
pub use polygon::{
    triangulate_monotone, triangulate_polygon, triangulate_with_holes, Triangulation, TripType,
};
pub use predicates::{
    left_turn, left_turn_segment, point_on_line, segments_intersected, Orientation,
};
pub use primitives::{Coord, Point2, Segment2, Vec2};
pub use session::{DrawMode, DrawingSession};
