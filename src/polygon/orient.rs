//! Orientation normalization.
//!
//! Outer boundaries are stored counter-clockwise and holes clockwise, so the
//! polygon interior is always on the left of every directed boundary edge.

use super::core::polygon_signed_area2;
use crate::primitives::{Coord, Point2};
use num_traits::Zero;

/// Reverses `points` in place unless they already wind counter-clockwise.
///
/// Returns `true` if the input was clockwise (and has therefore been
/// reversed). A zero-area sequence is left untouched and returns `false`.
///
/// # Example
///
/// ```
/// use monosweep::polygon::orient_polygon_anticlockwise;
/// use monosweep::Point2;
///
/// let mut square: Vec<Point2<i32>> = vec![
///     Point2::new(0, 0),
///     Point2::new(0, 4),
///     Point2::new(4, 4),
///     Point2::new(4, 0),
/// ];
/// assert!(orient_polygon_anticlockwise(&mut square));
/// assert_eq!(square[0], Point2::new(4, 0));
/// assert!(!orient_polygon_anticlockwise(&mut square));
/// ```
pub fn orient_polygon_anticlockwise<T: Coord>(points: &mut [Point2<T>]) -> bool {
    let area = polygon_signed_area2(points);
    let was_clockwise = area < T::Wide::zero();
    if was_clockwise {
        points.reverse();
    }
    was_clockwise
}

/// Reverses `points` in place unless they already wind clockwise.
///
/// Returns `true` if the input was clockwise before the call, mirroring
/// [`orient_polygon_anticlockwise`]; `false` therefore means a reversal
/// happened (or the area was zero).
pub fn orient_polygon_clockwise<T: Coord>(points: &mut [Point2<T>]) -> bool {
    let area = polygon_signed_area2(points);
    if area > T::Wide::zero() {
        points.reverse();
    }
    area < T::Wide::zero()
}
