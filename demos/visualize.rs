//! Triangulates a sample polygon with holes and writes it as SVG.
//!
//! Run with: cargo run --example visualize [output.svg]
//!
//! Set `RUST_LOG=monosweep=trace` to see every partition diagonal.

use monosweep::io::{points, triangulation_to_svg, SvgStyle};
use monosweep::{triangulate_with_holes, Point2};

use std::fs::File;
use std::io::Write;

/// A comb-shaped outline with teeth on both sides.
fn outline() -> Vec<Point2<i32>> {
    let mut ring = vec![Point2::new(0, 0)];
    for i in 0..4 {
        let x = 40 + i * 80;
        ring.extend([
            Point2::new(x, 0),
            Point2::new(x + 20, 60),
            Point2::new(x + 40, 0),
        ]);
    }
    ring.extend([Point2::new(360, 0), Point2::new(360, 300)]);
    for i in 0..4 {
        let x = 320 - i * 80;
        ring.extend([
            Point2::new(x, 300),
            Point2::new(x - 20, 240),
            Point2::new(x - 40, 300),
        ]);
    }
    ring.push(Point2::new(0, 300));
    ring
}

fn holes() -> Vec<Vec<Point2<i32>>> {
    vec![
        vec![
            Point2::new(40, 100),
            Point2::new(120, 100),
            Point2::new(120, 200),
            Point2::new(40, 200),
        ],
        vec![Point2::new(160, 110), Point2::new(220, 90), Point2::new(190, 210)],
        vec![
            Point2::new(250, 150),
            Point2::new(280, 100),
            Point2::new(330, 130),
            Point2::new(310, 200),
            Point2::new(270, 190),
        ],
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "triangulation.svg".to_string());
    let outer = outline();
    let holes = holes();

    let result = triangulate_with_holes(&outer, &holes)?;
    println!(
        "{} vertices, {} holes: {} monotone pieces, {} triangles",
        result.boundary.len(),
        holes.len(),
        result.pieces,
        result.triangle_count()
    );

    let style = SvgStyle {
        scale: 2.0,
        ..SvgStyle::default()
    };
    let mut file = File::create(&path)?;
    file.write_all(triangulation_to_svg(&result, &style).as_bytes())?;
    println!("Wrote {}", path);

    let rings: Vec<_> = std::iter::once(outer).chain(holes).collect();
    print!("{}", points::to_string(&rings));
    Ok(())
}
