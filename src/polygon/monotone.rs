//! Linear-time triangulation of y-monotone polygons.
//!
//! Vertices are merged from the two chains in sweep order and processed with
//! a stack of vertices that still need diagonals. Each new vertex either sits
//! on the opposite chain (it sees the whole stack) or on the same chain (it
//! sees the stack down to the first reflex corner).

use super::classify::classify_ring;
use super::core::polygon_winding;
use super::validate::has_repeated_vertex;
use crate::error::PolygonError;
use crate::predicates::{left_turn, Orientation};
use crate::primitives::{Coord, Point2, Segment2};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chain {
    Left,
    Right,
}

/// Triangulates a y-monotone polygon, appending its diagonals to `out`.
///
/// `points` may wind either way. Returns the number of diagonals added,
/// which is `points.len() - 3` for a valid input.
///
/// # Errors
///
/// - [`PolygonError::DegenerateInput`] for fewer than 3 points, a repeated
///   vertex or zero area.
/// - [`PolygonError::NotMonotone`] if any vertex is a split or merge vertex.
///
/// # Example
///
/// ```
/// use monosweep::polygon::triangulate_monotone;
/// use monosweep::{Point2, Segment2};
///
/// let square: Vec<Point2<i32>> = vec![
///     Point2::new(0, 0),
///     Point2::new(4, 0),
///     Point2::new(4, 4),
///     Point2::new(0, 4),
/// ];
/// let mut diagonals: Vec<Segment2<i32>> = Vec::new();
/// assert_eq!(triangulate_monotone(&square, &mut diagonals).unwrap(), 1);
/// ```
pub fn triangulate_monotone<T: Coord>(
    points: &[Point2<T>],
    out: &mut Vec<Segment2<T>>,
) -> Result<usize, PolygonError> {
    if points.len() < 3 || has_repeated_vertex(points) {
        return Err(PolygonError::DegenerateInput);
    }
    let cycle: Vec<usize> = match polygon_winding(points) {
        Orientation::CounterClockwise => (0..points.len()).collect(),
        Orientation::Clockwise => (0..points.len()).rev().collect(),
        Orientation::Collinear => return Err(PolygonError::DegenerateInput),
    };
    if classify_ring(points, false)
        .into_iter()
        .any(|kind| kind.breaks_monotonicity())
    {
        return Err(PolygonError::NotMonotone);
    }

    let mut pairs = Vec::with_capacity(points.len() - 3);
    triangulate_cycle(points, &cycle, &mut pairs);
    out.extend(
        pairs
            .iter()
            .map(|&(a, b)| Segment2::new(points[a], points[b])),
    );
    Ok(pairs.len())
}

/// Triangulates the counter-clockwise monotone cycle `cycle` (indices into
/// `points`), pushing diagonals as index pairs.
pub(crate) fn triangulate_cycle<T: Coord>(
    points: &[Point2<T>],
    cycle: &[usize],
    out: &mut Vec<(usize, usize)>,
) {
    let m = cycle.len();
    if m <= 3 {
        return;
    }

    let order = sweep_sequence(points, cycle);
    let mut stack: Vec<(usize, Chain)> = vec![order[0], order[1]];

    for &(v, chain) in &order[2..m - 1] {
        let Some(&(_, top_chain)) = stack.last() else {
            break;
        };

        if chain != top_chain {
            // v sees every stacked vertex; the bottom one is its neighbour
            let previous = stack[stack.len() - 1];
            let bottom = stack[0].0;
            for &(u, _) in stack.iter().rev() {
                if u != bottom {
                    out.push((v, u));
                }
            }
            stack.clear();
            stack.push(previous);
            stack.push((v, chain));
        } else {
            let Some(mut last) = stack.pop() else {
                break;
            };
            while let Some(&top) = stack.last() {
                if !visible(points, top.0, last.0, v, chain) {
                    break;
                }
                out.push((v, top.0));
                last = top;
                stack.pop();
            }
            stack.push(last);
            stack.push((v, chain));
        }
    }

    let (bottom, _) = order[m - 1];
    if stack.len() > 2 {
        for &(u, _) in &stack[1..stack.len() - 1] {
            out.push((bottom, u));
        }
    }
}

/// Whether the diagonal `v → candidate` stays inside, given that `last`
/// lies between them on the same chain.
fn visible<T: Coord>(
    points: &[Point2<T>],
    candidate: usize,
    last: usize,
    v: usize,
    chain: Chain,
) -> bool {
    let turn = left_turn(points[candidate], points[last], points[v]);
    match chain {
        Chain::Left => turn == Orientation::CounterClockwise,
        Chain::Right => turn == Orientation::Clockwise,
    }
}

/// Merges the two chains of a monotone cycle into sweep order.
///
/// Going forward (counter-clockwise) from the topmost vertex descends the
/// left chain; going backward descends the right chain.
fn sweep_sequence<T: Coord>(points: &[Point2<T>], cycle: &[usize]) -> Vec<(usize, Chain)> {
    let m = cycle.len();
    let by_sweep = |a: &usize, b: &usize| points[cycle[*a]].sweep_cmp(&points[cycle[*b]]);
    let top = (0..m).min_by(by_sweep).unwrap_or(0);
    let bottom = (0..m).max_by(by_sweep).unwrap_or(0);

    let left: Vec<usize> = (1..m)
        .map(|k| (top + k) % m)
        .take_while(|&i| i != bottom)
        .map(|i| cycle[i])
        .collect();
    let right: Vec<usize> = (1..m)
        .map(|k| (top + m - k) % m)
        .take_while(|&i| i != bottom)
        .map(|i| cycle[i])
        .collect();

    let mut order = Vec::with_capacity(m);
    order.push((cycle[top], Chain::Left));
    let (mut i, mut j) = (0, 0);
    while i < left.len() || j < right.len() {
        let take_left = match (left.get(i), right.get(j)) {
            (Some(&l), Some(&r)) => points[l].sweep_cmp(&points[r]) != Ordering::Greater,
            (Some(_), None) => true,
            _ => false,
        };
        if take_left {
            order.push((left[i], Chain::Left));
            i += 1;
        } else {
            order.push((right[j], Chain::Right));
            j += 1;
        }
    }
    order.push((cycle[bottom], Chain::Right));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::{is_point_strong_inside, polygon_edges};
    use crate::predicates::segments_intersected;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point2<i32>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn assert_proper_diagonals(polygon: &[Point2<i32>], diagonals: &[Segment2<i32>]) {
        for (i, d) in diagonals.iter().enumerate() {
            assert!(polygon.contains(&d.start) && polygon.contains(&d.end));
            // the doubled midpoint of a diagonal lies strictly inside the doubled polygon
            let doubled: Vec<_> = polygon.iter().map(|p| Point2::new(p.x * 2, p.y * 2)).collect();
            let mid = Point2::new(d.start.x + d.end.x, d.start.y + d.end.y);
            assert!(is_point_strong_inside(&doubled, mid), "{} leaves the polygon", d);

            for edge in polygon_edges(polygon) {
                if !d.shares_endpoint(edge) {
                    assert!(!segments_intersected(*d, edge), "{} cuts {}", d, edge);
                }
            }
            for e in &diagonals[i + 1..] {
                if !d.shares_endpoint(*e) {
                    assert!(!segments_intersected(*d, *e), "{} crosses {}", d, e);
                }
            }
        }
    }

    #[test]
    fn test_triangle_has_no_diagonals() {
        let mut out = Vec::new();
        let tri = pts(&[(0, 0), (4, 0), (2, 3)]);
        assert_eq!(triangulate_monotone(&tri, &mut out), Ok(0));
        assert!(out.is_empty());
    }

    #[test]
    fn test_convex_polygons() {
        for ring in [
            pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]),
            pts(&[(0, 0), (6, 0), (9, 6), (6, 12), (0, 12), (-3, 6)]),
            pts(&[(0, -5), (5, 0), (0, 5), (-5, 0)]),
        ] {
            let mut out = Vec::new();
            let count = triangulate_monotone(&ring, &mut out).unwrap();
            assert_eq!(count, ring.len() - 3);
            assert_eq!(out.len(), ring.len() - 3);
            assert_proper_diagonals(&ring, &out);
        }
    }

    #[test]
    fn test_clockwise_input() {
        let mut ring = pts(&[(0, 0), (6, 0), (9, 6), (6, 12), (0, 12), (-3, 6)]);
        ring.reverse();
        let mut out = Vec::new();
        assert_eq!(triangulate_monotone(&ring, &mut out), Ok(3));
        assert_proper_diagonals(&ring, &out);
    }

    #[test]
    fn test_zigzag_chain_uses_reflex_corners() {
        // monotone with reflex vertices on the left chain
        let ring = pts(&[(0, 10), (3, 8), (0, 6), (3, 4), (0, 2), (6, 0), (8, 5), (6, 11)]);
        let mut out = Vec::new();
        let count = triangulate_monotone(&ring, &mut out).unwrap();
        assert_eq!(count, ring.len() - 3);
        assert_proper_diagonals(&ring, &out);
    }

    #[test]
    fn test_collinear_boundary_vertices() {
        let ring = pts(&[(0, 0), (2, 0), (4, 0), (2, 3)]);
        let mut out = Vec::new();
        assert_eq!(triangulate_monotone(&ring, &mut out), Ok(1));
        assert_eq!(out[0], Segment2::from_coords(2, 0, 2, 3));

        let ring = pts(&[(0, 0), (4, 0), (4, 4), (2, 4), (0, 4)]);
        let mut out = Vec::new();
        assert_eq!(triangulate_monotone(&ring, &mut out), Ok(2));
        assert_proper_diagonals(&ring, &out);
    }

    #[test]
    fn test_appends_to_existing_output() {
        let mut out = vec![Segment2::from_coords(9, 9, 9, 9)];
        let ring = pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
        triangulate_monotone(&ring, &mut out).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], Segment2::from_coords(9, 9, 9, 9));
    }

    #[test]
    fn test_rejects_non_monotone() {
        let ring = pts(&[(0, 0), (3, 2), (6, 0), (6, 6), (3, 4), (0, 6)]);
        let mut out = Vec::new();
        assert_eq!(
            triangulate_monotone(&ring, &mut out),
            Err(PolygonError::NotMonotone)
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_rejects_degenerate() {
        let mut out = Vec::new();
        assert_eq!(
            triangulate_monotone(&pts(&[(0, 0), (1, 1)]), &mut out),
            Err(PolygonError::DegenerateInput)
        );
        assert_eq!(
            triangulate_monotone(&pts(&[(0, 0), (1, 1), (2, 2)]), &mut out),
            Err(PolygonError::DegenerateInput)
        );
    }

    #[test]
    fn test_rejects_repeated_vertices() {
        let mut out = Vec::new();
        let doubled_corner = pts(&[(0, 0), (0, 0), (4, 0), (4, 4), (0, 4)]);
        assert_eq!(
            triangulate_monotone(&doubled_corner, &mut out),
            Err(PolygonError::DegenerateInput)
        );

        let wrapped = pts(&[(0, 0), (4, 0), (4, 4), (0, 4), (0, 0)]);
        assert_eq!(
            triangulate_monotone(&wrapped, &mut out),
            Err(PolygonError::DegenerateInput)
        );

        let square = [(0, 0), (4, 0), (4, 4), (0, 4)];
        let doubled_loop: Vec<_> = pts(&square).into_iter().chain(pts(&square)).collect();
        assert_eq!(
            triangulate_monotone(&doubled_loop, &mut out),
            Err(PolygonError::DegenerateInput)
        );
        assert!(out.is_empty());
    }
}
