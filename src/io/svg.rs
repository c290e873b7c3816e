//! SVG export of triangulations.
//!
//! The output is a standalone SVG document. Screen coordinates grow
//! downwards, so the y axis is flipped to keep the drawing upright.
//!
//! # Example
//!
//! ```
//! use monosweep::io::{triangulation_to_svg, SvgStyle};
//! use monosweep::{triangulate_polygon, Point2};
//!
//! let square: Vec<Point2<i32>> = vec![
//!     Point2::new(0, 0),
//!     Point2::new(40, 0),
//!     Point2::new(40, 40),
//!     Point2::new(0, 40),
//! ];
//! let result = triangulate_polygon(&square).unwrap();
//! let svg = triangulation_to_svg(&result, &SvgStyle::default());
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg.matches("<line").count(), 5);
//! ```

use crate::polygon::{Triangulation, TripType};
use crate::primitives::{Coord, Point2};
use std::fmt::Write;

/// Drawing parameters for [`triangulation_to_svg`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    /// Blank border around the drawing.
    pub margin: f64,
    /// Scale from polygon units to SVG units.
    pub scale: f64,
    /// Radius of the vertex markers.
    pub vertex_radius: f64,
    /// Stroke width of boundary edges; diagonals use half of it.
    pub stroke_width: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            margin: 10.0,
            scale: 1.0,
            vertex_radius: 3.0,
            stroke_width: 2.0,
        }
    }
}

/// Marker colour of a vertex class.
pub fn trip_color(kind: TripType) -> &'static str {
    match kind {
        TripType::Regular => "#00a000",
        TripType::Start => "#e00000",
        TripType::Split => "#00c0c0",
        TripType::End => "#0000e0",
        TripType::Merge => "#006400",
    }
}

/// Converts a closed ring to SVG path data, without any transform.
///
/// # Example
///
/// ```
/// use monosweep::io::ring_to_svg_path;
/// use monosweep::Point2;
///
/// let ring: Vec<Point2<i32>> = vec![Point2::new(0, 0), Point2::new(4, 0), Point2::new(2, 3)];
/// assert_eq!(ring_to_svg_path(&ring), "M 0 0 L 4 0 L 2 3 Z");
/// ```
pub fn ring_to_svg_path<T: Coord>(points: &[Point2<T>]) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut result = format!("M {} {}", first.x, first.y);
    for p in &points[1..] {
        let _ = write!(result, " L {} {}", p.x, p.y);
    }
    result.push_str(" Z");
    result
}

/// Renders boundary edges, diagonals and classified vertices as SVG.
///
/// Boundary edges are drawn black, diagonals grey, and every traced vertex
/// gets a marker coloured by [`trip_color`].
pub fn triangulation_to_svg<T: Coord>(triangulation: &Triangulation<T>, style: &SvgStyle) -> String {
    let view = View::fit(triangulation, style);
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.1}" height="{:.1}" viewBox="0 0 {:.1} {:.1}">"#,
        view.width, view.height, view.width, view.height
    );
    let _ = writeln!(
        svg,
        r#"<rect width="{:.1}" height="{:.1}" fill="white"/>"#,
        view.width, view.height
    );

    let edges = triangulation
        .boundary
        .iter()
        .map(|e| (e, "black", style.stroke_width))
        .chain(
            triangulation
                .diagonals
                .iter()
                .map(|e| (e, "#808080", style.stroke_width / 2.0)),
        );
    for (edge, stroke, width) in edges {
        let (x1, y1) = view.map(edge.start);
        let (x2, y2) = view.map(edge.end);
        let _ = writeln!(
            svg,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.2}"/>"#,
            x1, y1, x2, y2, stroke, width
        );
    }

    for &(p, kind) in &triangulation.trace {
        let (cx, cy) = view.map(p);
        let _ = writeln!(
            svg,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"><title>{}</title></circle>"#,
            cx,
            cy,
            style.vertex_radius,
            trip_color(kind),
            kind
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Maps polygon coordinates into the SVG viewport.
struct View {
    min_x: f64,
    max_y: f64,
    scale: f64,
    margin: f64,
    width: f64,
    height: f64,
}

impl View {
    fn fit<T: Coord>(triangulation: &Triangulation<T>, style: &SvgStyle) -> Self {
        let mut points = triangulation
            .trace
            .iter()
            .map(|(p, _)| p.to_f64())
            .chain(triangulation.edges().flat_map(|e| [e.start.to_f64(), e.end.to_f64()]));

        let (min_x, min_y, max_x, max_y) = match points.next() {
            Some((x, y)) => points.fold((x, y, x, y), |(x0, y0, x1, y1), (x, y)| {
                (x0.min(x), y0.min(y), x1.max(x), y1.max(y))
            }),
            None => (0.0, 0.0, 0.0, 0.0),
        };

        Self {
            min_x,
            max_y,
            scale: style.scale,
            margin: style.margin,
            width: (max_x - min_x) * style.scale + 2.0 * style.margin,
            height: (max_y - min_y) * style.scale + 2.0 * style.margin,
        }
    }

    fn map<T: Coord>(&self, p: Point2<T>) -> (f64, f64) {
        let (x, y) = p.to_f64();
        (
            (x - self.min_x) * self.scale + self.margin,
            (self.max_y - y) * self.scale + self.margin,
        )
    }
}
