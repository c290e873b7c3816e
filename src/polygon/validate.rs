//! Polygon validation: self-intersection, containment and hole checks.
//!
//! # Example
//!
//! ```
//! use monosweep::polygon::{check_intersections, is_point_strong_inside};
//! use monosweep::Point2;
//!
//! // A figure-8 that crosses itself
//! let figure8: Vec<Point2<i32>> = vec![
//!     Point2::new(0, 0),
//!     Point2::new(2, 2),
//!     Point2::new(2, 0),
//!     Point2::new(0, 2),
//! ];
//! assert!(check_intersections(&figure8));
//!
//! let square: Vec<Point2<i32>> = vec![
//!     Point2::new(0, 0),
//!     Point2::new(4, 0),
//!     Point2::new(4, 4),
//!     Point2::new(0, 4),
//! ];
//! assert!(is_point_strong_inside(&square, Point2::new(2, 2)));
//! assert!(!is_point_strong_inside(&square, Point2::new(4, 2)));
//! ```

use super::core::polygon_edges;
use crate::error::PolygonError;
use crate::predicates::{folds_back, left_turn, point_on_line, segments_intersected, Orientation};
use crate::primitives::{Coord, Point2, Segment2};

/// Checks whether the closed boundary touches or crosses itself.
///
/// Returns true if two non-adjacent edges share any point, or two adjacent
/// edges fold back over each other along the same line. Adjacent edges
/// meeting only at their common vertex are expected and never reported.
pub fn check_intersections<T: Coord>(points: &[Point2<T>]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    for i in 0..n {
        let a = edge(points, i);
        for j in (i + 1)..n {
            let b = edge(points, j);

            if j == i + 1 {
                if folds_back(b.start, a.start, b.end) {
                    return true;
                }
            } else if i == 0 && j == n - 1 {
                if folds_back(a.start, a.end, b.start) {
                    return true;
                }
            } else if segments_intersected(a, b) {
                return true;
            }
        }
    }

    false
}

/// Tests if a point lies strictly inside a polygon.
///
/// Points on the boundary return false. The crossing parity uses the
/// half-open rule `(a.y > p.y) != (b.y > p.y)` so a ray through a vertex is
/// counted exactly once, and the side test is an exact orientation rather
/// than an intersection abscissa.
pub fn is_point_strong_inside<T: Coord>(polygon: &[Point2<T>], point: Point2<T>) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    if polygon_edges(polygon).any(|e| point_on_line(point, e)) {
        return false;
    }

    let mut inside = false;
    for e in polygon_edges(polygon) {
        let (a, b) = (e.start, e.end);
        if (a.y > point.y) != (b.y > point.y) {
            // The edge crosses the horizontal line through `point`; count it
            // when the crossing lies to the right.
            let turn = left_turn(a, b, point);
            let crosses_right = if b.y > a.y {
                turn == Orientation::CounterClockwise
            } else {
                turn == Orientation::Clockwise
            };
            if crosses_right {
                inside = !inside;
            }
        }
    }

    inside
}

/// Tests if `inner` lies strictly inside `outer`.
///
/// Every vertex of `inner` must be strictly inside `outer` and no pair of
/// edges may touch.
pub fn is_polygon_inside<T: Coord>(outer: &[Point2<T>], inner: &[Point2<T>]) -> bool {
    inner.iter().all(|&p| is_point_strong_inside(outer, p)) && !edges_touch(outer, inner)
}

/// Tests if two polygons overlap.
///
/// True if any edge of `a` touches any edge of `b`, or one polygon lies
/// inside the other. Nesting counts as overlap: two holes may never nest.
pub fn is_polygons_intersected<T: Coord>(a: &[Point2<T>], b: &[Point2<T>]) -> bool {
    if edges_touch(a, b) {
        return true;
    }

    // Without touching edges, nesting is decided by any single vertex.
    a.first().is_some_and(|&p| is_point_strong_inside(b, p))
        || b.first().is_some_and(|&p| is_point_strong_inside(a, p))
}

/// Tests if `polygon` overlaps any polygon in `polygons`.
pub fn is_polygons_intersected_any<T: Coord, P: AsRef<[Point2<T>]>>(
    polygons: &[P],
    polygon: &[Point2<T>],
) -> bool {
    polygons
        .iter()
        .any(|other| is_polygons_intersected(other.as_ref(), polygon))
}

/// Validates a single boundary.
///
/// # Errors
///
/// - [`PolygonError::DegenerateInput`] for fewer than 3 points, coincident
///   consecutive points, or all points on one line.
/// - [`PolygonError::SelfIntersecting`] if [`check_intersections`] reports a
///   crossing.
pub fn validate_polygon<T: Coord>(points: &[Point2<T>]) -> Result<(), PolygonError> {
    let n = points.len();
    if n < 3 {
        return Err(PolygonError::DegenerateInput);
    }
    if has_coincident_neighbours(points) {
        return Err(PolygonError::DegenerateInput);
    }
    if all_collinear(points) {
        return Err(PolygonError::DegenerateInput);
    }
    if check_intersections(points) {
        return Err(PolygonError::SelfIntersecting);
    }
    Ok(())
}

/// Validates an outer boundary together with its holes.
///
/// Runs [`validate_polygon`] on the outer boundary and on every hole, then
/// requires each hole to be strictly inside the outer boundary and to
/// overlap none of the holes before it. Orientation is not required; the
/// checks are winding-independent.
///
/// # Errors
///
/// The first failure found, in the order above.
pub fn validate_with_holes<T: Coord, H: AsRef<[Point2<T>]>>(
    polygon: &[Point2<T>],
    holes: &[H],
) -> Result<(), PolygonError> {
    validate_polygon(polygon)?;
    for hole in holes {
        validate_polygon(hole.as_ref())?;
    }

    for (i, hole) in holes.iter().enumerate() {
        let hole = hole.as_ref();
        if !is_polygon_inside(polygon, hole) {
            return Err(PolygonError::HoleEscapesOuter { hole: i });
        }
        if let Some(other) = holes[..i]
            .iter()
            .position(|earlier| is_polygons_intersected(earlier.as_ref(), hole))
        {
            return Err(PolygonError::HoleOverlap { hole: i, other });
        }
    }

    Ok(())
}

/// A validity verdict with a message suitable for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the input was accepted.
    pub is_valid: bool,
    /// Empty when valid, otherwise the error text.
    pub message: String,
}

impl Verdict {
    /// Builds a verdict from any validation or triangulation result.
    pub fn of<R>(result: &Result<R, PolygonError>) -> Self {
        match result {
            Ok(_) => Self {
                is_valid: true,
                message: String::new(),
            },
            Err(e) => Self {
                is_valid: false,
                message: e.to_string(),
            },
        }
    }
}

#[inline]
fn edge<T: Coord>(points: &[Point2<T>], i: usize) -> Segment2<T> {
    Segment2::new(points[i], points[(i + 1) % points.len()])
}

/// Whether two consecutive vertices of the closed ring coincide.
pub(crate) fn has_coincident_neighbours<T: Coord>(points: &[Point2<T>]) -> bool {
    let n = points.len();
    (0..n).any(|i| points[i] == points[(i + 1) % n])
}

/// Whether any vertex occurs more than once in the ring.
pub(crate) fn has_repeated_vertex<T: Coord>(points: &[Point2<T>]) -> bool {
    let mut sorted = points.to_vec();
    sorted.sort_unstable_by(|a, b| a.sweep_cmp(b));
    sorted.windows(2).any(|w| w[0] == w[1])
}

fn all_collinear<T: Coord>(points: &[Point2<T>]) -> bool {
    let Some(&first) = points.first() else {
        return true;
    };
    match points.iter().find(|&&p| p != first) {
        Some(&second) => points
            .iter()
            .all(|&p| left_turn(first, second, p) == Orientation::Collinear),
        None => true,
    }
}

fn edges_touch<T: Coord>(a: &[Point2<T>], b: &[Point2<T>]) -> bool {
    polygon_edges(a).any(|ea| polygon_edges(b).any(|eb| segments_intersected(ea, eb)))
}
