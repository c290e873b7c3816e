//! 2D vector type for directions and offsets.

use super::Coord;
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector: the difference of two points.
///
/// Products (`dot`, `cross`) are returned in the widened type of the
/// coordinate so they never overflow. Components stay in `T`, so the
/// operators (`+`, `-`, `*`, and `Point2 - Point2`) overflow once a result
/// leaves the range of `T`; use [`Vec2::checked_add`],
/// [`Point2::checked_sub`](super::Point2::checked_sub) and friends when the
/// inputs can span the full range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Coord> Vec2<T> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
        }
    }

    /// Returns `true` for the zero vector.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> T::Wide {
        self.x.widen() * other.x.widen() + self.y.widen() * other.y.widen()
    }

    /// Computes the 2D cross product (perpendicular dot product).
    ///
    /// Positive means `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> T::Wide {
        self.x.widen() * other.y.widen() - self.y.widen() * other.x.widen()
    }

    /// Returns the squared magnitude.
    #[inline]
    pub fn magnitude_squared(self) -> T::Wide {
        self.dot(self)
    }

    /// Component-wise sum, or `None` if a component overflows `T`.
    #[inline]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(&other.x)?,
            y: self.y.checked_add(&other.y)?,
        })
    }

    /// Component-wise difference, or `None` if a component overflows `T`.
    #[inline]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        Some(Self {
            x: self.x.checked_sub(&other.x)?,
            y: self.y.checked_sub(&other.y)?,
        })
    }

    /// Scales both components, or `None` if a component overflows `T`.
    #[inline]
    pub fn checked_mul(self, scalar: T) -> Option<Self> {
        Some(Self {
            x: self.x.checked_mul(&scalar)?,
            y: self.y.checked_mul(&scalar)?,
        })
    }

    /// Returns a vector perpendicular to this one (rotated 90 degrees counter-clockwise).
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }
}

impl<T: Coord> Add for Vec2<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T: Coord> Sub for Vec2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T: Coord> Mul<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl<T: Coord> Neg for Vec2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Coord> Default for Vec2<T> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_product() {
        let a: Vec2<i32> = Vec2::new(1, 2);
        let b = Vec2::new(3, 4);
        assert_eq!(a.dot(b), 11);
    }

    #[test]
    fn test_cross_product() {
        let a: Vec2<i32> = Vec2::new(1, 0);
        let b = Vec2::new(0, 1);
        assert_eq!(a.cross(b), 1);
        assert_eq!(b.cross(a), -1);
    }

    #[test]
    fn test_cross_product_is_widened() {
        let a: Vec2<i32> = Vec2::new(i32::MAX, 0);
        let b = Vec2::new(0, i32::MAX);
        assert_eq!(a.cross(b), (i32::MAX as i128) * (i32::MAX as i128));
    }

    #[test]
    fn test_perpendicular() {
        let v: Vec2<i32> = Vec2::new(1, 0);
        let p = v.perpendicular();
        assert_eq!(p, Vec2::new(0, 1));
        assert_eq!(v.dot(p), 0);
    }

    #[test]
    fn test_arithmetic() {
        let a: Vec2<i32> = Vec2::new(1, 2);
        let b = Vec2::new(3, 4);

        assert_eq!(a + b, Vec2::new(4, 6));
        assert_eq!(b - a, Vec2::new(2, 2));
        assert_eq!(a * 2, Vec2::new(2, 4));
        assert_eq!(-a, Vec2::new(-1, -2));
        assert_eq!(a.magnitude_squared(), 5);
        assert!(Vec2::<i32>::default().is_zero());
    }

    #[test]
    fn test_checked_arithmetic_at_range_limits() {
        let big: Vec2<i32> = Vec2::new(i32::MAX, 1);
        let one = Vec2::new(1, 1);
        assert_eq!(big.checked_add(one), None);
        assert_eq!(big.checked_sub(one), Some(Vec2::new(i32::MAX - 1, 0)));
        assert_eq!(Vec2::new(i32::MIN, 0).checked_sub(one), None);
        assert_eq!(big.checked_mul(2), None);
        assert_eq!(one.checked_mul(-3), Some(Vec2::new(-3, -3)));

        let small: Vec2<i16> = Vec2::new(i16::MIN, 0);
        assert_eq!(small.checked_mul(-1), None);
    }
}
