//! Exact orientation tests.

use crate::primitives::{Coord, Point2, Segment2};
use std::cmp::Ordering;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `c` is strictly left of `a → b` (positive area).
    CounterClockwise,
    /// `c` is strictly right of `a → b` (negative area).
    Clockwise,
    /// The three points are collinear.
    Collinear,
}

impl Orientation {
    /// Returns `1`, `-1` or `0`.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Orientation::CounterClockwise => 1,
            Orientation::Clockwise => -1,
            Orientation::Collinear => 0,
        }
    }

    /// Orientation of the reversed triple.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }

    #[inline]
    fn from_wide<W: num_traits::Signed + num_traits::Zero + PartialOrd>(value: W) -> Self {
        if value > W::zero() {
            Orientation::CounterClockwise
        } else if value < W::zero() {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }
}

/// Twice the signed area of triangle `abc`, in the widened type.
///
/// Computed from widened coordinates, so it is exact for every input.
#[inline]
pub fn cross<T: Coord>(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> T::Wide {
    let abx = b.x.widen() - a.x.widen();
    let aby = b.y.widen() - a.y.widen();
    let acx = c.x.widen() - a.x.widen();
    let acy = c.y.widen() - a.y.widen();
    abx * acy - aby * acx
}

/// Sign of the cross product of `(b − a)` and `(c − a)`.
///
/// `CounterClockwise` means `c` lies strictly to the left of the directed
/// line `a → b`, `Clockwise` strictly to the right, `Collinear` on it.
///
/// # Example
///
/// ```
/// use monosweep::{left_turn, Orientation, Point2};
///
/// let a: Point2<i32> = Point2::new(0, 0);
/// let b = Point2::new(4, 0);
/// assert_eq!(left_turn(a, b, Point2::new(2, 3)), Orientation::CounterClockwise);
/// assert_eq!(left_turn(a, b, Point2::new(9, 0)), Orientation::Collinear);
/// ```
#[inline]
pub fn left_turn<T: Coord>(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> Orientation {
    Orientation::from_wide(cross(a, b, c))
}

/// [`left_turn`] using the endpoints of `segment` as the directed line.
#[inline]
pub fn left_turn_segment<T: Coord>(segment: Segment2<T>, p: Point2<T>) -> Orientation {
    left_turn(segment.start, segment.end, p)
}

/// Exact angular order of the directions `origin → a` and `origin → b`,
/// counter-clockwise from +x. Both targets must differ from `origin`.
pub(crate) fn angle_cmp<T: Coord>(origin: Point2<T>, a: Point2<T>, b: Point2<T>) -> Ordering {
    let upper = |p: Point2<T>| p.y > origin.y || (p.y == origin.y && p.x > origin.x);
    match (upper(a), upper(b)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => match left_turn(origin, a, b) {
            Orientation::CounterClockwise => Ordering::Less,
            Orientation::Clockwise => Ordering::Greater,
            Orientation::Collinear => Ordering::Equal,
        },
    }
}
