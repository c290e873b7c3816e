//! Input/output utilities for polygons and triangulations.
//!
//! Provides the plain-text point list format used to save and reload
//! drawings, and SVG export of triangulation results.

pub mod points;
mod svg;

pub use points::{read_rings, write_rings, PointsError};
pub use svg::{ring_to_svg_path, trip_color, triangulation_to_svg, SvgStyle};
