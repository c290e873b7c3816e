//! Exact point-on-segment and segment intersection tests.

use super::orientation::{left_turn, Orientation};
use crate::primitives::{Coord, Point2, Segment2};

/// Checks if a point lies on the closed segment.
///
/// The point must be collinear with the segment's endpoints and within its
/// bounding box; a point on the supporting line beyond either end is not on
/// the segment.
#[inline]
pub fn point_on_line<T: Coord>(p: Point2<T>, segment: Segment2<T>) -> bool {
    if left_turn(segment.start, segment.end, p) != Orientation::Collinear {
        return false;
    }
    let (min, max) = segment.bounding_box();
    min.x <= p.x && p.x <= max.x && min.y <= p.y && p.y <= max.y
}

/// Tests if two closed segments share at least one point.
///
/// Handles proper crossings (the endpoints of each segment lie strictly on
/// opposite sides of the other), touching at an endpoint or an interior
/// point, and collinear overlap. Segments that merely share an endpoint
/// *are* reported; polygon routines skip adjacent edges themselves.
///
/// # Example
///
/// ```
/// use monosweep::{segments_intersected, Segment2};
///
/// let a: Segment2<i32> = Segment2::from_coords(0, 0, 4, 4);
/// let b = Segment2::from_coords(0, 4, 4, 0);
/// let c = Segment2::from_coords(5, 5, 9, 1);
/// assert!(segments_intersected(a, b));
/// assert!(!segments_intersected(a, c));
/// ```
pub fn segments_intersected<T: Coord>(a: Segment2<T>, b: Segment2<T>) -> bool {
    let d1 = left_turn(a.start, a.end, b.start);
    let d2 = left_turn(a.start, a.end, b.end);
    let d3 = left_turn(b.start, b.end, a.start);
    let d4 = left_turn(b.start, b.end, a.end);

    if d1.sign() * d2.sign() < 0 && d3.sign() * d4.sign() < 0 {
        return true;
    }

    point_on_line(b.start, a)
        || point_on_line(b.end, a)
        || point_on_line(a.start, b)
        || point_on_line(a.end, b)
}

/// Tests if two segments that share exactly the endpoint `joint` overlap
/// beyond it, i.e. fold back along the same line.
pub(crate) fn folds_back<T: Coord>(joint: Point2<T>, a: Point2<T>, b: Point2<T>) -> bool {
    left_turn(joint, a, b) == Orientation::Collinear
        && (a.x.widen() - joint.x.widen()) * (b.x.widen() - joint.x.widen())
            + (a.y.widen() - joint.y.widen()) * (b.y.widen() - joint.y.widen())
            > <T::Wide as num_traits::Zero>::zero()
}
