//! 2D line segment type.

use super::{Coord, Point2, Vec2};
use std::fmt;

/// A 2D line segment defined by two endpoints.
///
/// Intersection tests treat it as undirected; the sweep reads it as
/// `start → end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment2<T> {
    pub start: Point2<T>,
    pub end: Point2<T>,
}

impl<T: Coord> Segment2<T> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<T>, end: Point2<T>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    ///
    /// Overflows when the segment spans more than the range of `T`; see
    /// [`Segment2::checked_direction`].
    #[inline]
    pub fn direction(self) -> Vec2<T> {
        self.end - self.start
    }

    /// The direction vector, or `None` if it does not fit in `T`.
    #[inline]
    pub fn checked_direction(self) -> Option<Vec2<T>> {
        self.end.checked_sub(self.start)
    }

    /// Returns the reversed segment (start and end swapped).
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns the squared length in the widened type.
    #[inline]
    pub fn length_squared(self) -> T::Wide {
        self.start.distance_squared(self.end)
    }

    /// Returns `true` if both endpoints coincide.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if the segments have an endpoint in common.
    #[inline]
    pub fn shares_endpoint(self, other: Self) -> bool {
        self.start == other.start
            || self.start == other.end
            || self.end == other.start
            || self.end == other.end
    }

    /// Returns `true` if both segments join the same two points, in either direction.
    #[inline]
    pub fn same_undirected(self, other: Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }

    /// Returns the bounding box as (min, max) points.
    #[inline]
    pub fn bounding_box(self) -> (Point2<T>, Point2<T>) {
        (
            Point2::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y)),
            Point2::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y)),
        )
    }
}

impl<T: Coord> From<(Point2<T>, Point2<T>)> for Segment2<T> {
    fn from((start, end): (Point2<T>, Point2<T>)) -> Self {
        Self::new(start, end)
    }
}

impl<T: fmt::Display> fmt::Display for Segment2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}
