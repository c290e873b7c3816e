//! Interactive drawing state.
//!
//! A [`DrawingSession`] collects points for the outer boundary and then for
//! each hole, validating every ring when drawing stops, and triangulates the
//! result on request. Errors are kept as display text, the way an editor
//! shows them.
//!
//! # Example
//!
//! ```
//! use monosweep::{DrawingSession, Point2};
//!
//! let mut session: DrawingSession<i32> = DrawingSession::new();
//! session.start_polygon();
//! for (x, y) in [(0, 0), (0, 40), (40, 40), (40, 0)] {
//!     session.add_point(Point2::new(x, y));
//! }
//! session.stop_drawing().unwrap();
//! assert!(session.is_loaded());
//!
//! session.start_hole();
//! for (x, y) in [(10, 10), (30, 10), (20, 30)] {
//!     session.add_point(Point2::new(x, y));
//! }
//! session.stop_drawing().unwrap();
//!
//! assert!(session.triangulate());
//! assert_eq!(session.segments().len(), 7 + 7);
//! ```

use crate::error::PolygonError;
use crate::polygon::{
    is_polygon_inside, is_polygons_intersected, is_polygons_intersected_any,
    orient_polygon_anticlockwise, orient_polygon_clockwise, triangulate_with_holes,
    validate_polygon, TripType, Verdict,
};
use crate::primitives::{Coord, Point2, Segment2};

const POLYGON_DELETED: &str = " The polygon is deleted. Try again.";
const HOLE_DELETED: &str = " The hole is deleted. Try again.";
const NO_POLYGON: &str = "Can't draw holes in empty polygon";

/// What the session is currently drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Not drawing; points are ignored.
    #[default]
    Idle,
    /// Drawing the outer boundary.
    Polygon,
    /// Drawing a hole of the loaded polygon.
    Hole,
}

/// Polygon, holes and triangulation of one drawing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DrawingSession<T> {
    current: Vec<Point2<T>>,
    polygon: Vec<Point2<T>>,
    holes: Vec<Vec<Point2<T>>>,
    segments: Vec<Segment2<T>>,
    trace: Vec<(Point2<T>, TripType)>,
    error: String,
    mode: DrawMode,
    loaded: bool,
}

impl<T: Coord> DrawingSession<T> {
    /// Creates an empty, idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards everything and starts drawing a new outer boundary.
    pub fn start_polygon(&mut self) {
        *self = Self {
            mode: DrawMode::Polygon,
            ..Self::default()
        };
    }

    /// Starts drawing a hole.
    ///
    /// Returns `false` and sets the error text when no polygon is loaded.
    pub fn start_hole(&mut self) -> bool {
        if !self.loaded {
            self.error = NO_POLYGON.to_string();
            self.mode = DrawMode::Idle;
            return false;
        }
        self.current.clear();
        self.mode = DrawMode::Hole;
        true
    }

    /// Adds a point to the ring being drawn. Ignored while idle.
    pub fn add_point(&mut self, point: Point2<T>) -> bool {
        if self.mode == DrawMode::Idle {
            return false;
        }
        self.current.push(point);
        true
    }

    /// Finishes the ring being drawn.
    ///
    /// The ring is oriented (boundary counter-clockwise, hole clockwise) and
    /// validated. A valid ring is stored; an invalid one is dropped and the
    /// error text explains why. A hole must lie strictly inside the polygon
    /// and overlap no earlier hole. Either way the session becomes idle.
    pub fn stop_drawing(&mut self) -> Result<(), PolygonError> {
        let mode = std::mem::take(&mut self.mode);
        let mut ring = std::mem::take(&mut self.current);

        let result = match mode {
            DrawMode::Idle => return Ok(()),
            DrawMode::Polygon => {
                orient_polygon_anticlockwise(&mut ring);
                validate_polygon(&ring)
            }
            DrawMode::Hole => {
                orient_polygon_clockwise(&mut ring);
                validate_polygon(&ring).and_then(|()| self.check_hole(&ring))
            }
        };

        match result {
            Ok(()) => {
                self.error.clear();
                self.segments.clear();
                self.trace.clear();
                if mode == DrawMode::Polygon {
                    self.polygon = ring;
                    self.loaded = true;
                } else {
                    self.holes.push(ring);
                }
                Ok(())
            }
            Err(e) => {
                log::debug!("{:?} rejected: {}", mode, e);
                let suffix = if mode == DrawMode::Polygon {
                    self.loaded = false;
                    POLYGON_DELETED
                } else {
                    HOLE_DELETED
                };
                self.error = format!("{}.{}", capitalize(&e.to_string()), suffix);
                Err(e)
            }
        }
    }

    fn check_hole(&self, hole: &[Point2<T>]) -> Result<(), PolygonError> {
        let index = self.holes.len();
        if !is_polygon_inside(&self.polygon, hole) {
            return Err(PolygonError::HoleEscapesOuter { hole: index });
        }
        if is_polygons_intersected_any(&self.holes, hole) {
            let other = self
                .holes
                .iter()
                .position(|h| is_polygons_intersected(h, hole))
                .unwrap_or_default();
            return Err(PolygonError::HoleOverlap { hole: index, other });
        }
        Ok(())
    }

    /// Triangulates the loaded polygon and its holes.
    ///
    /// On success the edges and the vertex trace are stored. Returns `false`
    /// if nothing is loaded or triangulation failed (the error text is set).
    pub fn triangulate(&mut self) -> bool {
        if !self.loaded {
            return false;
        }
        self.segments.clear();
        self.trace.clear();

        match triangulate_with_holes(&self.polygon, &self.holes) {
            Ok(result) => {
                self.segments = result.edges().collect();
                self.trace = result.trace;
                self.error.clear();
                true
            }
            Err(e) => {
                self.error = capitalize(&e.to_string());
                false
            }
        }
    }

    /// The stored rings: the outer boundary followed by the holes.
    ///
    /// Empty if no polygon is loaded.
    pub fn rings(&self) -> Vec<Vec<Point2<T>>> {
        if !self.loaded {
            return Vec::new();
        }
        std::iter::once(&self.polygon)
            .chain(&self.holes)
            .cloned()
            .collect()
    }

    /// Replaces the drawing with `rings`, as if each had been drawn by hand:
    /// the first is the polygon, the others are holes.
    ///
    /// Invalid holes are skipped. An invalid polygon stops the load. The
    /// error text afterwards is that of the first rejected ring.
    /// Returns whether a polygon is loaded afterwards.
    pub fn load_rings<R: AsRef<[Point2<T>]>>(&mut self, rings: &[R]) -> bool {
        let mut first_error = None;
        for (i, ring) in rings.iter().enumerate() {
            if i == 0 {
                self.start_polygon();
            } else if !self.start_hole() {
                break;
            }
            for &p in ring.as_ref() {
                self.add_point(p);
            }
            if self.stop_drawing().is_err() && first_error.is_none() {
                first_error = Some(self.error.clone());
            }
            if !self.loaded {
                break;
            }
        }
        if let Some(error) = first_error {
            self.error = error;
        }
        self.loaded
    }

    /// Points of the ring being drawn.
    pub fn current(&self) -> &[Point2<T>] {
        &self.current
    }

    /// The outer boundary, counter-clockwise.
    pub fn polygon(&self) -> &[Point2<T>] {
        &self.polygon
    }

    /// The accepted holes, each clockwise.
    pub fn holes(&self) -> &[Vec<Point2<T>>] {
        &self.holes
    }

    /// Edges of the last triangulation: boundary first, then diagonals.
    pub fn segments(&self) -> &[Segment2<T>] {
        &self.segments
    }

    /// Classified vertices of the last triangulation.
    pub fn trace(&self) -> &[(Point2<T>, TripType)] {
        &self.trace
    }

    /// The error text, empty if the last action succeeded.
    pub fn error(&self) -> &str {
        &self.error
    }

    /// The current mode.
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Whether a valid polygon is loaded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The session state as a verdict for display.
    pub fn verdict(&self) -> Verdict {
        Verdict {
            is_valid: self.error.is_empty(),
            message: self.error.clone(),
        }
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
