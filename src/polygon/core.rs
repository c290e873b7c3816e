//! Core polygon types and basic operations.

use crate::predicates::{left_turn, Orientation};
use crate::primitives::{Coord, Point2, Segment2};
use num_traits::Zero;

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the
/// first). Outer boundaries are expected counter-clockwise and holes
/// clockwise before triangulation; see [`orient_polygon_anticlockwise`].
///
/// [`orient_polygon_anticlockwise`]: crate::polygon::orient_polygon_anticlockwise
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polygon<T> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<T>>,
}

impl<T: Coord> Polygon<T> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<T>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns twice the signed area (shoelace sum), exactly.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area2(&self) -> T::Wide {
        polygon_signed_area2(&self.vertices)
    }

    /// Returns the absolute area.
    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices)
    }

    /// Returns the winding of the boundary.
    pub fn winding(&self) -> Orientation {
        polygon_winding(&self.vertices)
    }

    /// Returns the centroid (center of mass) of the polygon.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        polygon_centroid(&self.vertices)
    }

    /// Tests if the polygon is convex.
    pub fn is_convex(&self) -> bool {
        polygon_is_convex(&self.vertices)
    }

    /// Iterates over the closed boundary edges.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<T>> + '_ {
        polygon_edges(&self.vertices)
    }

    /// Returns the bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2<T>, Point2<T>)> {
        let first = *self.vertices.first()?;
        Some(self.vertices[1..].iter().fold((first, first), |(min, max), v| {
            (
                Point2::new(min.x.min(v.x), min.y.min(v.y)),
                Point2::new(max.x.max(v.x), max.y.max(v.y)),
            )
        }))
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }
}

impl<T> AsRef<[Point2<T>]> for Polygon<T> {
    fn as_ref(&self) -> &[Point2<T>] {
        &self.vertices
    }
}

impl<T: Coord> From<Vec<Point2<T>>> for Polygon<T> {
    fn from(vertices: Vec<Point2<T>>) -> Self {
        Self::new(vertices)
    }
}

/// Computes twice the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding, zero for fewer than
/// three vertices or a collinear ring.
pub fn polygon_signed_area2<T: Coord>(vertices: &[Point2<T>]) -> T::Wide {
    let n = vertices.len();
    if n < 3 {
        return T::Wide::zero();
    }

    (0..n).fold(T::Wide::zero(), |acc, i| {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        acc + a.x.widen() * b.y.widen() - b.x.widen() * a.y.widen()
    })
}

/// Winding of a ring from the sign of its area.
pub fn polygon_winding<T: Coord>(vertices: &[Point2<T>]) -> Orientation {
    let area = polygon_signed_area2(vertices);
    if area > T::Wide::zero() {
        Orientation::CounterClockwise
    } else if area < T::Wide::zero() {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Computes the absolute area of a polygon.
pub fn polygon_area<T: Coord>(vertices: &[Point2<T>]) -> f64 {
    T::wide_to_f64(polygon_signed_area2(vertices)).abs() / 2.0
}

/// Computes the centroid of a polygon.
///
/// Returns None for degenerate polygons (fewer than 3 vertices or zero area).
pub fn polygon_centroid<T: Coord>(vertices: &[Point2<T>]) -> Option<(f64, f64)> {
    let area2 = polygon_signed_area2(vertices);
    if area2.is_zero() {
        return None;
    }

    let n = vertices.len();
    let mut cx = T::Wide::zero();
    let mut cy = T::Wide::zero();
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = a.x.widen() * b.y.widen() - b.x.widen() * a.y.widen();
        cx = cx + (a.x.widen() + b.x.widen()) * c;
        cy = cy + (a.y.widen() + b.y.widen()) * c;
    }

    let denom = 3.0 * T::wide_to_f64(area2);
    Some((T::wide_to_f64(cx) / denom, T::wide_to_f64(cy) / denom))
}

/// Tests if a polygon is convex.
///
/// Returns true if all non-zero turns have the same sign. Collinear
/// vertices are allowed.
pub fn polygon_is_convex<T: Coord>(vertices: &[Point2<T>]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return true;
    }

    let mut seen: Option<Orientation> = None;
    for i in 0..n {
        let turn = left_turn(vertices[i], vertices[(i + 1) % n], vertices[(i + 2) % n]);
        if turn == Orientation::Collinear {
            continue;
        }
        match seen {
            None => seen = Some(turn),
            Some(s) if s != turn => return false,
            _ => {}
        }
    }

    true
}

/// Iterates over the closed boundary edges `v[i] → v[i + 1]`.
pub fn polygon_edges<T: Coord>(vertices: &[Point2<T>]) -> impl Iterator<Item = Segment2<T>> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| Segment2::new(vertices[i], vertices[(i + 1) % n]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point2<i32>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn test_polygon_new() {
        let poly = Polygon::new(pts(&[(0, 0), (1, 0), (1, 1)]));
        assert_eq!(poly.len(), 3);
        assert!(!poly.is_empty());
        assert!(Polygon::<i32>::empty().is_empty());
    }

    #[test]
    fn test_signed_area_ccw_and_cw() {
        let ccw = Polygon::new(pts(&[(0, 0), (2, 0), (2, 2), (0, 2)]));
        assert_eq!(ccw.signed_area2(), 8);
        assert_eq!(ccw.winding(), Orientation::CounterClockwise);

        let cw = ccw.reversed();
        assert_eq!(cw.signed_area2(), -8);
        assert_eq!(cw.winding(), Orientation::Clockwise);
        assert_relative_eq!(cw.area(), 4.0);
    }

    #[test]
    fn test_collinear_ring_has_no_winding() {
        let line = pts(&[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(polygon_winding(&line), Orientation::Collinear);
        assert!(polygon_centroid(&line).is_none());
    }

    #[test]
    fn test_polygon_centroid() {
        let square = Polygon::new(pts(&[(0, 0), (2, 0), (2, 2), (0, 2)]));
        let (cx, cy) = square.centroid().unwrap();
        assert_relative_eq!(cx, 1.0, epsilon = 1e-12);
        assert_relative_eq!(cy, 1.0, epsilon = 1e-12);

        let triangle = pts(&[(0, 0), (6, 0), (0, 3)]);
        let (cx, cy) = polygon_centroid(&triangle).unwrap();
        assert_relative_eq!(cx, 2.0, epsilon = 1e-12);
        assert_relative_eq!(cy, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_polygon_is_convex() {
        let square = pts(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
        assert!(polygon_is_convex(&square));

        let l_shape = pts(&[(0, 0), (2, 0), (2, 1), (1, 1), (1, 2), (0, 2)]);
        assert!(!polygon_is_convex(&l_shape));
    }

    #[test]
    fn test_polygon_bounding_box() {
        let poly = Polygon::new(pts(&[(1, 2), (3, 1), (4, 3), (2, 4)]));
        let (min, max) = poly.bounding_box().unwrap();
        assert_eq!(min, Point2::new(1, 1));
        assert_eq!(max, Point2::new(4, 4));
        assert!(Polygon::<i32>::empty().bounding_box().is_none());
    }

    #[test]
    fn test_edges_close_the_ring() {
        let poly = Polygon::new(pts(&[(0, 0), (1, 0), (0, 1)]));
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], Segment2::from_coords(0, 1, 0, 0));
    }

    #[test]
    fn test_i16_polygon() {
        let poly: Polygon<i16> = Polygon::new(vec![
            Point2::new(0, 0),
            Point2::new(300, 0),
            Point2::new(300, 300),
            Point2::new(0, 300),
        ]);
        assert_eq!(poly.signed_area2(), 180_000);
    }
}
