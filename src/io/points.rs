//! Plain-text point lists.
//!
//! A file holds one or more rings, the outer boundary first and then the
//! holes. Each ring is a vertex count followed by one `x y` line per vertex:
//!
//! ```text
//! 4
//! 0 0
//! 4 0
//! 4 4
//! 0 4
//! 3
//! 1 1
//! 3 1
//! 2 3
//! ```
//!
//! Tokens may be separated by any whitespace.
//!
//! # Example
//!
//! ```
//! use monosweep::io::points;
//! use monosweep::Point2;
//!
//! let rings: Vec<Vec<Point2<i32>>> = points::parse("3\n0 0\n4 0\n2 3\n").unwrap();
//! assert_eq!(rings.len(), 1);
//! assert_eq!(rings[0][2], Point2::new(2, 3));
//! assert_eq!(points::to_string(&rings), "3\n0 0\n4 0\n2 3\n");
//! ```

use crate::primitives::{Coord, Point2};
use std::fmt::Write as _;
use std::io::{Read, Write};
use thiserror::Error;

/// Errors raised while reading point lists.
#[derive(Debug, Error)]
pub enum PointsError {
    /// The underlying reader or writer failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended in the middle of a ring.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A token is not a valid count or coordinate.
    #[error("invalid number '{token}' on line {line}")]
    InvalidNumber {
        /// The offending token.
        token: String,
        /// 1-based line number.
        line: usize,
    },
}

/// Formats rings in the point list format.
pub fn to_string<T: Coord, R: AsRef<[Point2<T>]>>(rings: &[R]) -> String {
    let mut out = String::new();
    for ring in rings {
        let ring = ring.as_ref();
        let _ = writeln!(out, "{}", ring.len());
        for p in ring {
            let _ = writeln!(out, "{} {}", p.x, p.y);
        }
    }
    out
}

/// Parses rings from the point list format.
///
/// Empty input yields no rings.
///
/// # Errors
///
/// [`PointsError::InvalidNumber`] for a malformed token,
/// [`PointsError::UnexpectedEnd`] if a ring is cut short.
pub fn parse<T: Coord>(text: &str) -> Result<Vec<Vec<Point2<T>>>, PointsError> {
    let mut tokens = text
        .lines()
        .enumerate()
        .flat_map(|(i, line)| line.split_whitespace().map(move |token| (token, i + 1)));

    let mut rings = Vec::new();
    while let Some((token, line)) = tokens.next() {
        let count: usize = parse_token(token, line)?;
        let mut ring = Vec::with_capacity(count);
        for _ in 0..count {
            let (x, line) = tokens.next().ok_or(PointsError::UnexpectedEnd)?;
            let x = parse_token(x, line)?;
            let (y, line) = tokens.next().ok_or(PointsError::UnexpectedEnd)?;
            let y = parse_token(y, line)?;
            ring.push(Point2::new(x, y));
        }
        rings.push(ring);
    }

    log::debug!("parsed {} rings", rings.len());
    Ok(rings)
}

/// Writes rings to `writer` in the point list format.
pub fn write_rings<T: Coord, R: AsRef<[Point2<T>]>, W: Write>(
    writer: &mut W,
    rings: &[R],
) -> Result<(), PointsError> {
    writer.write_all(to_string(rings).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Reads every ring from `reader`.
pub fn read_rings<T: Coord, R: Read>(reader: &mut R) -> Result<Vec<Vec<Point2<T>>>, PointsError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse(&text)
}

fn parse_token<N: std::str::FromStr>(token: &str, line: usize) -> Result<N, PointsError> {
    token.parse().map_err(|_| PointsError::InvalidNumber {
        token: token.to_string(),
        line,
    })
}
