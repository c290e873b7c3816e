//! Polygon validation, vertex classification and triangulation.
//!
//! This module provides:
//! - Area, winding and convexity of vertex rings
//! - Orientation normalization (outer boundary CCW, holes CW)
//! - Validation of a polygon with holes
//! - Sweep classification of vertices ([`TripType`])
//! - Triangulation of monotone polygons and of polygons with holes
//!
//! # Example
//!
//! ```
//! use monosweep::polygon::{triangulate_with_holes, validate_with_holes, TripType};
//! use monosweep::Point2;
//!
//! let outer: Vec<Point2<i32>> = vec![
//!     Point2::new(0, 0),
//!     Point2::new(10, 0),
//!     Point2::new(10, 10),
//!     Point2::new(0, 10),
//! ];
//! let holes = vec![vec![
//!     Point2::new(3, 3),
//!     Point2::new(7, 3),
//!     Point2::new(5, 7),
//! ]];
//!
//! assert!(validate_with_holes(&outer, &holes).is_ok());
//!
//! let result = triangulate_with_holes(&outer, &holes).unwrap();
//! assert_eq!(result.triangle_count(), 7);
//! assert!(result.trace.iter().any(|&(_, kind)| kind == TripType::Split));
//! ```

mod classify;
mod core;
mod monotone;
mod orient;
mod partition;
mod triangulate;
mod validate;

pub use self::core::{
    polygon_area, polygon_centroid, polygon_edges, polygon_is_convex, polygon_signed_area2,
    polygon_winding, Polygon,
};
pub use classify::{classify_ring, trip_type, TripType};
pub use monotone::triangulate_monotone;
pub use orient::{orient_polygon_anticlockwise, orient_polygon_clockwise};
pub use triangulate::{monotone_pieces, triangulate_polygon, triangulate_with_holes, Triangulation};
pub use validate::{
    check_intersections, is_point_strong_inside, is_polygon_inside, is_polygons_intersected,
    is_polygons_intersected_any, validate_polygon, validate_with_holes, Verdict,
};
