//! Error types for polygon validation and triangulation.

use thiserror::Error;

/// Reasons a polygon (with holes) is rejected.
///
/// Every variant is detected before any triangulation work starts. The
/// `Display` text is meant to be shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    /// Fewer than 3 distinct points, coincident consecutive points, or zero area.
    #[error("degenerate input: fewer than 3 distinct points or zero area")]
    DegenerateInput,

    /// The boundary crosses or touches itself.
    #[error("boundary intersects itself")]
    SelfIntersecting,

    /// A hole vertex lies outside or on the outer boundary, or the edges cross.
    #[error("hole {hole} is not strictly inside the outer boundary")]
    HoleEscapesOuter {
        /// Index of the offending hole.
        hole: usize,
    },

    /// Two holes intersect or one contains the other.
    #[error("hole {hole} overlaps hole {other}")]
    HoleOverlap {
        /// Index of the hole being checked.
        hole: usize,
        /// Index of the earlier hole it collides with.
        other: usize,
    },

    /// A split or merge vertex was found where a y-monotone polygon was required.
    #[error("polygon is not y-monotone")]
    NotMonotone,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            PolygonError::HoleEscapesOuter { hole: 2 }.to_string(),
            "hole 2 is not strictly inside the outer boundary"
        );
        assert_eq!(
            PolygonError::HoleOverlap { hole: 1, other: 0 }.to_string(),
            "hole 1 overlaps hole 0"
        );
        assert_eq!(
            PolygonError::SelfIntersecting.to_string(),
            "boundary intersects itself"
        );
    }
}
