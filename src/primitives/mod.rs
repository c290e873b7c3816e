//! Integer geometric primitives.

mod coord;
mod point2;
mod segment2;
mod vec2;

pub use coord::Coord;
pub use point2::Point2;
pub use segment2::Segment2;
pub use vec2::Vec2;
