//! Sweep classification of polygon vertices.
//!
//! The sweep runs top to bottom (see [`Point2::sweep_cmp`]). Each vertex is
//! classified from its two ring neighbours:
//!
//! | neighbours          | convex turn | reflex turn |
//! |---------------------|-------------|-------------|
//! | both below (maximum) | `Start`     | `Split`     |
//! | both above (minimum) | `End`       | `Merge`     |
//! | one above, one below | `Regular`   | `Regular`   |
//!
//! A polygon without `Split` and `Merge` vertices is y-monotone.

use super::core::polygon_winding;
use crate::predicates::{left_turn, Orientation};
use crate::primitives::{Coord, Point2};
use std::fmt;

/// Classification of a vertex with respect to the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TripType {
    /// Local maximum where the interior is below and the angle is convex.
    Start,
    /// Local minimum where the interior is above and the angle is convex.
    End,
    /// Local maximum with a reflex interior angle; needs a diagonal upwards.
    Split,
    /// Local minimum with a reflex interior angle; needs a diagonal downwards.
    Merge,
    /// One neighbour above and one below.
    Regular,
}

impl TripType {
    /// Short lowercase name, as printed in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TripType::Start => "start",
            TripType::End => "end",
            TripType::Split => "split",
            TripType::Merge => "merge",
            TripType::Regular => "regular",
        }
    }

    /// Returns `true` for vertices that break y-monotonicity.
    #[inline]
    pub fn breaks_monotonicity(self) -> bool {
        matches!(self, TripType::Split | TripType::Merge)
    }

    /// Returns `true` for local extrema of the sweep (everything but `Regular`).
    #[inline]
    pub fn is_extremum(self) -> bool {
        self != TripType::Regular
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies the vertex at `index` of `ring`.
///
/// Convexity is judged against the region the ring itself encloses, whatever
/// the stored winding. For a hole (`in_hole = true`) the polygon interior is
/// on the other side of the boundary, so the sense is inverted: the same
/// local maximum that starts an outer boundary splits the sweep around a
/// hole. Collinear triples are always `Regular`.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
///
/// # Example
///
/// ```
/// use monosweep::polygon::{trip_type, TripType};
/// use monosweep::Point2;
///
/// let triangle: Vec<Point2<i32>> = vec![
///     Point2::new(0, 0),
///     Point2::new(4, 0),
///     Point2::new(2, 3),
/// ];
/// assert_eq!(trip_type(&triangle, 2, false), TripType::Start);
/// assert_eq!(trip_type(&triangle, 2, true), TripType::Split);
/// ```
pub fn trip_type<T: Coord>(ring: &[Point2<T>], index: usize, in_hole: bool) -> TripType {
    let convex = convex_turn(polygon_winding(ring), in_hole);
    classify_at(ring, index, convex)
}

/// Classifies every vertex of `ring`, computing its winding once.
pub fn classify_ring<T: Coord>(ring: &[Point2<T>], in_hole: bool) -> Vec<TripType> {
    let convex = convex_turn(polygon_winding(ring), in_hole);
    (0..ring.len()).map(|i| classify_at(ring, i, convex)).collect()
}

/// The turn direction that is convex as seen from the polygon interior.
#[inline]
fn convex_turn(winding: Orientation, in_hole: bool) -> Orientation {
    if in_hole {
        winding.reversed()
    } else {
        winding
    }
}

fn classify_at<T: Coord>(ring: &[Point2<T>], index: usize, convex: Orientation) -> TripType {
    let n = ring.len();
    let prev = ring[(index + n - 1) % n];
    let cur = ring[index];
    let next = ring[(index + 1) % n];
    classify_corner(prev, cur, next, convex)
}

fn classify_corner<T: Coord>(
    prev: Point2<T>,
    cur: Point2<T>,
    next: Point2<T>,
    convex: Orientation,
) -> TripType {
    let turn = left_turn(prev, cur, next);
    if turn == Orientation::Collinear {
        return TripType::Regular;
    }
    let is_convex = turn == convex;

    match (cur.is_above(prev), cur.is_above(next)) {
        (true, true) if is_convex => TripType::Start,
        (true, true) => TripType::Split,
        (false, false) if is_convex => TripType::End,
        (false, false) => TripType::Merge,
        _ => TripType::Regular,
    }
}
