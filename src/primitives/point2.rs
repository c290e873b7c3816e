//! 2D point type.

use super::{Coord, Vec2};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// A 2D point with integer coordinates.
///
/// Points compare by coordinate equality, which is what connects the
/// vertices of a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Coord> Point2<T> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
        }
    }

    /// Orders two points along the sweep: top to bottom, then left to right.
    ///
    /// `Ordering::Less` means `self` is reached first, i.e. it lies above
    /// `other` (greater y, or equal y and smaller x). Every sweep in the
    /// crate uses this order.
    #[inline]
    pub fn sweep_cmp(&self, other: &Self) -> Ordering {
        other.y.cmp(&self.y).then(self.x.cmp(&other.x))
    }

    /// Returns `true` if `self` comes before `other` in sweep order.
    #[inline]
    pub fn is_above(self, other: Self) -> bool {
        self.sweep_cmp(&other) == Ordering::Less
    }

    /// Squared distance in the widened type.
    #[inline]
    pub fn distance_squared(self, other: Self) -> T::Wide {
        let dx = other.x.widen() - self.x.widen();
        let dy = other.y.widen() - self.y.widen();
        dx * dx + dy * dy
    }

    /// Converts this point to a vector from the origin.
    #[inline]
    pub fn to_vec(self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }

    /// The vector from `other` to `self`, or `None` if a component does not
    /// fit in `T`. The `-` operator overflows in that case.
    #[inline]
    pub fn checked_sub(self, other: Self) -> Option<Vec2<T>> {
        Some(Vec2::new(
            self.x.checked_sub(&other.x)?,
            self.y.checked_sub(&other.y)?,
        ))
    }

    /// Returns the coordinates as `f64`.
    #[inline]
    pub fn to_f64(self) -> (f64, f64) {
        (self.x.to_f64(), self.y.to_f64())
    }
}

// Point - Point = Vec2
impl<T: Coord> Sub for Point2<T> {
    type Output = Vec2<T>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<T> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Point + Vec2 = Point
impl<T: Coord> Add<Vec2<T>> for Point2<T> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<T>) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }
}

// Point - Vec2 = Point
impl<T: Coord> Sub<Vec2<T>> for Point2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<T>) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }
}

impl<T: Coord> From<(T, T)> for Point2<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: fmt::Display> fmt::Display for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
