//! Partition of a polygon with holes into y-monotone pieces.
//!
//! All rings live in one [`VertexArena`]: the outer boundary counter-clockwise,
//! the holes clockwise, so the interior is on the left of every edge
//! `v → next[v]`. A top-to-bottom sweep adds a diagonal at every split and
//! merge vertex. The diagonal added at the top vertex of a hole connects the
//! hole to the rest of the polygon, so no separate bridging pass is needed.
//! The boundary plus the diagonals is then walked face by face.

use super::classify::{classify_ring, TripType};
use crate::error::PolygonError;
use crate::predicates::{angle_cmp, left_turn, Orientation};
use crate::primitives::{Coord, Point2};
use num_traits::{One, Zero};
use std::cmp::Ordering;

/// Vertices of every ring with their ring neighbours and classification.
#[derive(Debug, Clone, Default)]
pub(crate) struct VertexArena<T> {
    pub(crate) points: Vec<Point2<T>>,
    pub(crate) next: Vec<usize>,
    pub(crate) prev: Vec<usize>,
    pub(crate) kinds: Vec<TripType>,
}

impl<T: Coord> VertexArena<T> {
    /// Appends an already oriented ring.
    pub(crate) fn push_ring(&mut self, ring: &[Point2<T>], in_hole: bool) {
        let base = self.points.len();
        let n = ring.len();
        self.points.extend_from_slice(ring);
        self.kinds.extend(classify_ring(ring, in_hole));
        for i in 0..n {
            self.next.push(base + (i + 1) % n);
            self.prev.push(base + (i + n - 1) % n);
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn is_merge(&self, v: usize) -> bool {
        self.kinds[v] == TripType::Merge
    }
}

#[derive(Debug, Clone, Copy)]
struct StatusEdge {
    /// Origin of the edge `origin → next[origin]`.
    origin: usize,
    helper: usize,
}

/// Edges crossing the sweep line that have the interior on their right.
///
/// Kept in insertion order; lookups are linear.
#[derive(Debug, Default)]
struct SweepStatus {
    edges: Vec<StatusEdge>,
}

impl SweepStatus {
    fn insert(&mut self, origin: usize, helper: usize) {
        self.edges.push(StatusEdge { origin, helper });
    }

    /// Removes an edge, returning its helper.
    fn remove(&mut self, origin: usize) -> Result<usize, PolygonError> {
        let pos = self
            .edges
            .iter()
            .position(|e| e.origin == origin)
            .ok_or(PolygonError::DegenerateInput)?;
        Ok(self.edges.remove(pos).helper)
    }

    fn helper(&self, origin: usize) -> Result<usize, PolygonError> {
        self.edges
            .iter()
            .find(|e| e.origin == origin)
            .map(|e| e.helper)
            .ok_or(PolygonError::DegenerateInput)
    }

    fn set_helper(&mut self, origin: usize, helper: usize) -> Result<(), PolygonError> {
        let entry = self
            .edges
            .iter_mut()
            .find(|e| e.origin == origin)
            .ok_or(PolygonError::DegenerateInput)?;
        entry.helper = helper;
        Ok(())
    }

    /// The edge directly left of `p`: among edges strictly left of `p` whose
    /// span covers `p.y`, the one with the greatest abscissa at `p.y`.
    ///
    /// Ties keep the edge inserted first.
    fn left_of<T: Coord>(&self, arena: &VertexArena<T>, p: Point2<T>) -> Option<usize> {
        let mut best: Option<(usize, Abscissa<T>)> = None;
        for e in &self.edges {
            let a = arena.points[e.origin];
            let b = arena.points[arena.next[e.origin]];
            let (upper, lower) = if a.is_above(b) { (a, b) } else { (b, a) };
            if p.y > upper.y || p.y < lower.y {
                continue;
            }
            if left_turn(lower, upper, p) != Orientation::Clockwise {
                continue;
            }
            let x = Abscissa::at(upper, lower, p.y);
            match &best {
                Some((_, current)) if x.cmp(current) != Ordering::Greater => {}
                _ => best = Some((e.origin, x)),
            }
        }
        best.map(|(origin, _)| origin)
    }
}

/// Exact x of an edge at a given height, as `num / den` with `den > 0`.
#[derive(Debug, Clone, Copy)]
struct Abscissa<T: Coord> {
    num: T::Wide,
    den: T::Wide,
}

impl<T: Coord> Abscissa<T> {
    fn at(upper: Point2<T>, lower: Point2<T>, y: T) -> Self {
        let dy = upper.y.widen() - lower.y.widen();
        if dy.is_zero() {
            return Self {
                num: lower.x.widen(),
                den: T::Wide::one(),
            };
        }
        let num = lower.x.widen() * dy
            + (y.widen() - lower.y.widen()) * (upper.x.widen() - lower.x.widen());
        Self { num, den: dy }
    }

    fn cmp(&self, other: &Self) -> Ordering {
        (self.num * other.den).cmp(&(other.num * self.den))
    }
}

/// Runs the sweep and returns the diagonals that split the arena into
/// y-monotone pieces, as sorted vertex index pairs `(low, high)`.
///
/// # Errors
///
/// [`PolygonError::DegenerateInput`] if the sweep status is inconsistent,
/// which only happens for input that did not pass validation.
pub(crate) fn make_monotone<T: Coord>(
    arena: &VertexArena<T>,
) -> Result<Vec<(usize, usize)>, PolygonError> {
    let mut events: Vec<usize> = (0..arena.len()).collect();
    events.sort_by(|&a, &b| {
        arena.points[a]
            .sweep_cmp(&arena.points[b])
            .then(a.cmp(&b))
    });

    let mut status = SweepStatus::default();
    let mut diagonals = Vec::new();
    let connect = |v: usize, helper: usize, diagonals: &mut Vec<(usize, usize)>| {
        log::trace!(
            "diagonal {} -> {} ({} to {})",
            arena.points[v],
            arena.points[helper],
            arena.kinds[v],
            arena.kinds[helper]
        );
        diagonals.push((v, helper));
    };

    for v in events {
        let p = arena.points[v];
        let prev = arena.prev[v];

        match arena.kinds[v] {
            TripType::Start => status.insert(v, v),
            TripType::End => {
                let helper = status.remove(prev)?;
                if arena.is_merge(helper) {
                    connect(v, helper, &mut diagonals);
                }
            }
            TripType::Split => {
                let left = status.left_of(arena, p).ok_or(PolygonError::DegenerateInput)?;
                connect(v, status.helper(left)?, &mut diagonals);
                status.set_helper(left, v)?;
                status.insert(v, v);
            }
            TripType::Merge => {
                let helper = status.remove(prev)?;
                if arena.is_merge(helper) {
                    connect(v, helper, &mut diagonals);
                }
                let left = status.left_of(arena, p).ok_or(PolygonError::DegenerateInput)?;
                let helper = status.helper(left)?;
                if arena.is_merge(helper) {
                    connect(v, helper, &mut diagonals);
                }
                status.set_helper(left, v)?;
            }
            TripType::Regular => {
                if arena.points[prev].is_above(p) {
                    // interior to the right: the boundary descends through v
                    let helper = status.remove(prev)?;
                    if arena.is_merge(helper) {
                        connect(v, helper, &mut diagonals);
                    }
                    status.insert(v, v);
                } else {
                    let left = status.left_of(arena, p).ok_or(PolygonError::DegenerateInput)?;
                    let helper = status.helper(left)?;
                    if arena.is_merge(helper) {
                        connect(v, helper, &mut diagonals);
                    }
                    status.set_helper(left, v)?;
                }
            }
        }
    }

    for d in &mut diagonals {
        *d = (d.0.min(d.1), d.0.max(d.1));
    }
    diagonals.sort_unstable();
    diagonals.dedup();
    Ok(diagonals)
}

/// Splits the arena along `diagonals` and returns every face as a
/// counter-clockwise cycle of vertex indices.
///
/// # Errors
///
/// [`PolygonError::DegenerateInput`] if a face walk does not close.
pub(crate) fn faces<T: Coord>(
    arena: &VertexArena<T>,
    diagonals: &[(usize, usize)],
) -> Result<Vec<Vec<usize>>, PolygonError> {
    let n = arena.len();
    let mut outgoing: Vec<Vec<usize>> = arena.next.iter().map(|&w| vec![w]).collect();

    for &(a, b) in diagonals {
        outgoing[a].push(b);
        outgoing[b].push(a);
    }

    for (v, targets) in outgoing.iter_mut().enumerate() {
        let origin = arena.points[v];
        targets.sort_by(|&a, &b| angle_cmp(origin, arena.points[a], arena.points[b]));
    }

    let total: usize = outgoing.iter().map(Vec::len).sum();
    let mut visited: Vec<Vec<bool>> = outgoing.iter().map(|t| vec![false; t.len()]).collect();
    let mut result = Vec::new();

    for start in 0..n {
        for start_slot in 0..outgoing[start].len() {
            if visited[start][start_slot] {
                continue;
            }

            let mut face = Vec::new();
            let (mut v, mut slot) = (start, start_slot);
            loop {
                if visited[v][slot] || face.len() > total {
                    return Err(PolygonError::DegenerateInput);
                }
                visited[v][slot] = true;
                face.push(v);

                let w = outgoing[v][slot];
                slot = turn_slot(arena, &outgoing[w], w, v);
                v = w;
                if v == start && slot == start_slot {
                    break;
                }
            }
            result.push(face);
        }
    }

    Ok(result)
}

/// Slot of the edge leaving `at` that continues the face on the left of
/// `from → at`: the nearest outgoing direction clockwise from `at → from`.
fn turn_slot<T: Coord>(arena: &VertexArena<T>, targets: &[usize], at: usize, from: usize) -> usize {
    let origin = arena.points[at];
    let back = arena.points[from];
    let below =
        targets.partition_point(|&t| angle_cmp(origin, arena.points[t], back) == Ordering::Less);
    if below == 0 {
        targets.len() - 1
    } else {
        below - 1
    }
}
