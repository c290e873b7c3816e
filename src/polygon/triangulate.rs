//! Triangulation of polygons with holes by monotone partitioning.
//!
//! # Algorithm
//!
//! 1. Validate the outer boundary and the holes, then orient copies of them
//!    (outer counter-clockwise, holes clockwise).
//! 2. Classify every vertex; the classification is returned as a trace.
//! 3. Sweep top to bottom and insert a diagonal at every split and merge
//!    vertex. The diagonal at the top of a hole is its bridge to the outer
//!    boundary. The result is a set of y-monotone faces.
//! 4. Triangulate each face with the monotone stack algorithm.
//!
//! Triangles are not materialized: the boundary edges plus the diagonals
//! form the complete edge set.
//!
//! # Complexity
//!
//! - Validation: O(n²) for n vertices over all rings
//! - Partition: O(n · s) where s is the largest sweep status size
//! - Triangulation of the pieces: O(n)
//!
//! # Example
//!
//! ```
//! use monosweep::polygon::triangulate_with_holes;
//! use monosweep::Point2;
//!
//! let square: Vec<Point2<i32>> = vec![
//!     Point2::new(0, 0),
//!     Point2::new(4, 0),
//!     Point2::new(4, 4),
//!     Point2::new(0, 4),
//! ];
//! let hole = vec![
//!     Point2::new(1, 1),
//!     Point2::new(1, 3),
//!     Point2::new(3, 3),
//!     Point2::new(3, 1),
//! ];
//!
//! let result = triangulate_with_holes(&square, &[hole]).unwrap();
//! assert_eq!(result.triangle_count(), 8);
//! assert_eq!(result.diagonals.len(), 8);
//! ```

use super::classify::TripType;
use super::monotone::triangulate_cycle;
use super::orient::{orient_polygon_anticlockwise, orient_polygon_clockwise};
use super::partition::{faces, make_monotone, VertexArena};
use super::validate::validate_with_holes;
use crate::error::PolygonError;
use crate::primitives::{Coord, Point2, Segment2};

/// Edges of a triangulated polygon and the vertex classification trace.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Triangulation<T> {
    /// Segments added inside the polygon: partition diagonals (including
    /// hole bridges) followed by the diagonals of each monotone piece.
    pub diagonals: Vec<Segment2<T>>,
    /// Edges of the oriented outer boundary, then of each hole.
    pub boundary: Vec<Segment2<T>>,
    /// Every vertex with its classification: outer boundary first, then
    /// each hole, in the oriented order.
    pub trace: Vec<(Point2<T>, TripType)>,
    /// Number of monotone pieces the polygon was split into.
    pub pieces: usize,
}

impl<T: Coord> Triangulation<T> {
    /// All edges to draw: boundary first, then diagonals.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<T>> + '_ {
        self.boundary.iter().chain(&self.diagonals).copied()
    }

    /// Number of triangles the edges bound.
    ///
    /// Every boundary edge borders one triangle and every diagonal two.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        (self.boundary.len() + 2 * self.diagonals.len()) / 3
    }
}

/// Triangulates a polygon with holes.
///
/// Neither `polygon` nor `holes` has to be oriented; the inputs are not
/// modified. For `n` vertices over all rings and `h` holes the result has
/// `n + 3h - 3` diagonals and `n + 2h - 2` triangles.
///
/// # Errors
///
/// Any error of [`validate_with_holes`]. [`PolygonError::DegenerateInput`]
/// is also returned if the partition cannot be completed, which validated
/// input never triggers.
pub fn triangulate_with_holes<T: Coord, H: AsRef<[Point2<T>]>>(
    polygon: &[Point2<T>],
    holes: &[H],
) -> Result<Triangulation<T>, PolygonError> {
    let arena = oriented_arena(polygon, holes)?;
    let cuts = make_monotone(&arena)?;
    let cycles = faces(&arena, &cuts)?;

    let mut pairs = cuts.clone();
    for cycle in &cycles {
        triangulate_cycle(&arena.points, cycle, &mut pairs);
    }

    let segment = |(a, b): (usize, usize)| Segment2::new(arena.points[a], arena.points[b]);
    let result = Triangulation {
        diagonals: pairs.into_iter().map(segment).collect(),
        boundary: (0..arena.len()).map(|v| segment((v, arena.next[v]))).collect(),
        trace: arena.points.iter().copied().zip(arena.kinds.iter().copied()).collect(),
        pieces: cycles.len(),
    };

    log::debug!(
        "triangulated {} vertices with {} holes: {} pieces, {} partition diagonals, {} triangles",
        arena.len(),
        holes.len(),
        result.pieces,
        cuts.len(),
        result.triangle_count()
    );
    Ok(result)
}

/// Triangulates a polygon without holes.
///
/// # Example
///
/// ```
/// use monosweep::polygon::triangulate_polygon;
/// use monosweep::Point2;
///
/// let l_shape: Vec<Point2<i32>> = vec![
///     Point2::new(0, 0),
///     Point2::new(2, 0),
///     Point2::new(2, 1),
///     Point2::new(1, 1),
///     Point2::new(1, 2),
///     Point2::new(0, 2),
/// ];
/// let result = triangulate_polygon(&l_shape).unwrap();
/// assert_eq!(result.diagonals.len(), 3);
/// assert_eq!(result.triangle_count(), 4);
/// ```
pub fn triangulate_polygon<T: Coord>(polygon: &[Point2<T>]) -> Result<Triangulation<T>, PolygonError> {
    triangulate_with_holes::<T, &[Point2<T>]>(polygon, &[])
}

/// Splits a polygon with holes into y-monotone pieces.
///
/// Each piece is returned counter-clockwise. Useful on its own for
/// rendering the partition.
pub fn monotone_pieces<T: Coord, H: AsRef<[Point2<T>]>>(
    polygon: &[Point2<T>],
    holes: &[H],
) -> Result<Vec<Vec<Point2<T>>>, PolygonError> {
    let arena = oriented_arena(polygon, holes)?;
    let cuts = make_monotone(&arena)?;
    let cycles = faces(&arena, &cuts)?;
    Ok(cycles
        .iter()
        .map(|cycle| cycle.iter().map(|&v| arena.points[v]).collect())
        .collect())
}

fn oriented_arena<T: Coord, H: AsRef<[Point2<T>]>>(
    polygon: &[Point2<T>],
    holes: &[H],
) -> Result<VertexArena<T>, PolygonError> {
    validate_with_holes(polygon, holes)?;

    let mut arena = VertexArena::default();
    let mut outer = polygon.to_vec();
    orient_polygon_anticlockwise(&mut outer);
    arena.push_ring(&outer, false);

    for hole in holes {
        let mut ring = hole.as_ref().to_vec();
        orient_polygon_clockwise(&mut ring);
        arena.push_ring(&ring, true);
    }
    Ok(arena)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::{is_point_strong_inside, polygon_edges, polygon_winding};
    use crate::predicates::{point_on_line, segments_intersected, Orientation};

    type P = Point2<i32>;

    fn pts(coords: &[(i32, i32)]) -> Vec<P> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn doubled(ring: &[P]) -> Vec<P> {
        ring.iter().map(|p| Point2::new(p.x * 2, p.y * 2)).collect()
    }

    fn assert_valid_triangulation(outer: &[P], holes: &[Vec<P>], tri: &Triangulation<i32>) {
        let n = outer.len() + holes.iter().map(Vec::len).sum::<usize>();
        let h = holes.len();
        assert_eq!(tri.boundary.len(), n);
        assert_eq!(tri.trace.len(), n);
        assert_eq!(tri.diagonals.len(), n + 3 * h - 3);
        assert_eq!(tri.triangle_count(), n + 2 * h - 2);

        let outer2 = doubled(outer);
        let holes2: Vec<_> = holes.iter().map(|hole| doubled(hole)).collect();

        for (i, d) in tri.diagonals.iter().enumerate() {
            assert!(!d.is_degenerate());
            let mid = Point2::new(d.start.x + d.end.x, d.start.y + d.end.y);
            assert!(is_point_strong_inside(&outer2, mid), "{} leaves the polygon", d);
            for hole in &holes2 {
                assert!(!is_point_strong_inside(hole, mid), "{} enters a hole", d);
                assert!(!polygon_edges(hole).any(|e| point_on_line(mid, e)));
            }

            for e in tri.boundary.iter().chain(&tri.diagonals[i + 1..]) {
                assert!(!d.same_undirected(*e), "{} appears twice", d);
                if !d.shares_endpoint(*e) {
                    assert!(!segments_intersected(*d, *e), "{} crosses {}", d, e);
                }
            }
        }
    }

    fn annulus() -> (Vec<P>, Vec<P>) {
        (
            pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]),
            pts(&[(1, 1), (1, 3), (3, 3), (3, 1)]),
        )
    }

    #[test]
    fn test_square() {
        let square = pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
        let tri = triangulate_polygon(&square).unwrap();
        assert_eq!(tri.pieces, 1);
        assert_eq!(tri.triangle_count(), 2);
        assert_eq!(tri.edges().count(), 5);
        assert_valid_triangulation(&square, &[], &tri);
    }

    #[test]
    fn test_square_with_hole() {
        let (outer, hole) = annulus();
        let tri = triangulate_with_holes(&outer, &[hole.clone()]).unwrap();
        assert_eq!(tri.diagonals.len(), 8);
        assert_eq!(tri.triangle_count(), 8);
        assert_eq!(tri.pieces, 2);
        assert_valid_triangulation(&outer, &[hole], &tri);
    }

    #[test]
    fn test_trace_order_and_kinds() {
        let (outer, hole) = annulus();
        let tri = triangulate_with_holes(&outer, &[hole]).unwrap();

        let (first_outer, rest) = tri.trace.split_at(4);
        assert_eq!(first_outer[0].0, Point2::new(0, 0));
        assert!(first_outer.contains(&(Point2::new(0, 4), TripType::Start)));
        assert!(first_outer.contains(&(Point2::new(4, 0), TripType::End)));
        assert_eq!(rest[0].0, Point2::new(1, 1));
        assert!(rest.contains(&(Point2::new(1, 3), TripType::Split)));
        assert!(rest.contains(&(Point2::new(3, 1), TripType::Merge)));
    }

    #[test]
    fn test_boundary_is_oriented() {
        let (mut outer, mut hole) = annulus();
        outer.reverse();
        hole.reverse();
        let tri = triangulate_with_holes(&outer, &[hole.clone()]).unwrap();

        let ring: Vec<P> = tri.boundary[..4].iter().map(|s| s.start).collect();
        assert_eq!(polygon_winding(&ring), Orientation::CounterClockwise);
        let ring: Vec<P> = tri.boundary[4..].iter().map(|s| s.start).collect();
        assert_eq!(polygon_winding(&ring), Orientation::Clockwise);
        assert_valid_triangulation(&outer, &[hole], &tri);
    }

    #[test]
    fn test_input_not_mutated() {
        let outer = pts(&[(0, 0), (0, 4), (4, 4), (4, 0)]);
        let hole = pts(&[(1, 1), (3, 1), (3, 3), (1, 3)]);
        let (outer_before, hole_before) = (outer.clone(), hole.clone());
        triangulate_with_holes(&outer, &[&hole[..]]).unwrap();
        assert_eq!(outer, outer_before);
        assert_eq!(hole, hole_before);
    }

    #[test]
    fn test_l_shape() {
        let l_shape = pts(&[(0, 0), (2, 0), (2, 1), (1, 1), (1, 2), (0, 2)]);
        let tri = triangulate_polygon(&l_shape).unwrap();
        assert_valid_triangulation(&l_shape, &[], &tri);
    }

    #[test]
    fn test_comb_with_merge_vertices() {
        let comb = pts(&[
            (0, 0),
            (10, 0),
            (10, 6),
            (8, 6),
            (8, 2),
            (6, 2),
            (6, 6),
            (4, 6),
            (4, 2),
            (2, 2),
            (2, 6),
            (0, 6),
        ]);
        let tri = triangulate_polygon(&comb).unwrap();
        assert!(tri.trace.iter().any(|&(_, kind)| kind == TripType::Merge));
        assert!(tri.pieces > 1);
        assert_valid_triangulation(&comb, &[], &tri);

        let mut upside_down: Vec<P> = comb.iter().map(|p| Point2::new(p.x, -p.y)).collect();
        upside_down.reverse();
        let tri = triangulate_polygon(&upside_down).unwrap();
        assert!(tri.trace.iter().any(|&(_, kind)| kind == TripType::Split));
        assert_valid_triangulation(&upside_down, &[], &tri);
    }

    #[test]
    fn test_star() {
        let star = pts(&[
            (0, 10),
            (2, 3),
            (9, 3),
            (3, -1),
            (6, -8),
            (0, -3),
            (-6, -8),
            (-3, -1),
            (-9, 3),
            (-2, 3),
        ]);
        let tri = triangulate_polygon(&star).unwrap();
        assert_valid_triangulation(&star, &[], &tri);
    }

    #[test]
    fn test_several_holes() {
        let outer = pts(&[(0, 0), (20, 0), (20, 14), (0, 14)]);
        let holes = vec![
            pts(&[(2, 2), (6, 2), (6, 6), (2, 6)]),
            pts(&[(9, 3), (13, 1), (12, 7)]),
            pts(&[(15, 2), (18, 2), (18, 12), (15, 12)]),
            pts(&[(3, 9), (10, 8), (12, 12), (4, 12)]),
        ];
        let tri = triangulate_with_holes(&outer, &holes).unwrap();
        assert_valid_triangulation(&outer, &holes, &tri);
    }

    #[test]
    fn test_holes_at_same_height() {
        let outer = pts(&[(0, 0), (12, 0), (12, 4), (0, 4)]);
        let holes = vec![
            pts(&[(1, 1), (3, 1), (3, 3), (1, 3)]),
            pts(&[(5, 1), (7, 1), (7, 3), (5, 3)]),
            pts(&[(9, 1), (11, 1), (11, 3), (9, 3)]),
        ];
        let tri = triangulate_with_holes(&outer, &holes).unwrap();
        assert_valid_triangulation(&outer, &holes, &tri);
    }

    #[test]
    fn test_hole_in_non_monotone_outer() {
        let outer = pts(&[(0, 0), (5, 3), (10, 0), (10, 10), (5, 7), (0, 10)]);
        let hole = pts(&[(1, 4), (3, 4), (2, 6)]);
        let tri = triangulate_with_holes(&outer, &[hole.clone()]).unwrap();
        assert_valid_triangulation(&outer, &[hole], &tri);
    }

    #[test]
    fn test_monotone_pieces() {
        let (outer, hole) = annulus();
        let pieces = monotone_pieces(&outer, &[hole]).unwrap();
        assert_eq!(pieces.len(), 2);
        for piece in &pieces {
            assert_eq!(polygon_winding(piece), Orientation::CounterClockwise);
        }
    }

    #[test]
    fn test_hole_outside_is_rejected() {
        let (outer, _) = annulus();
        let hole = pts(&[(5, 5), (7, 5), (7, 7)]);
        assert_eq!(
            triangulate_with_holes(&outer, &[hole]),
            Err(PolygonError::HoleEscapesOuter { hole: 0 })
        );
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        assert_eq!(
            triangulate_polygon(&pts(&[(0, 0), (1, 1)])),
            Err(PolygonError::DegenerateInput)
        );
        assert_eq!(
            triangulate_polygon(&pts(&[(0, 0), (2, 2), (2, 0), (0, 2)])),
            Err(PolygonError::SelfIntersecting)
        );
    }

    #[test]
    fn test_i16_coordinates() {
        let outer: Vec<Point2<i16>> = vec![
            Point2::new(-300, -300),
            Point2::new(300, -300),
            Point2::new(300, 300),
            Point2::new(-300, 300),
        ];
        let hole = vec![
            Point2::new(-100, -100),
            Point2::new(100, -100),
            Point2::new(0, 150),
        ];
        let tri = triangulate_with_holes(&outer, &[hole]).unwrap();
        assert_eq!(tri.diagonals.len(), 7 + 3 - 3);
        assert_eq!(tri.triangle_count(), 7);
    }
}
