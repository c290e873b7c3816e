//! Coordinate scalar types.
//!
//! Coordinates are signed primitive integers. Every product taken by the
//! predicates is computed in [`Coord::Wide`], which is large enough to hold
//! the product of three coordinate differences without overflow. This keeps
//! every orientation and sweep-line comparison exact.

use num_traits::{PrimInt, Signed};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// A signed integer coordinate with a widened companion type.
pub trait Coord:
    PrimInt + Signed + Hash + Debug + Display + Default + FromStr + Send + Sync + 'static
{
    /// Integer type used for cross products, areas and sweep comparisons.
    type Wide: PrimInt + Signed + Debug + From<Self> + Send + Sync;

    /// Converts the coordinate into the widened type.
    #[inline]
    fn widen(self) -> Self::Wide {
        Self::Wide::from(self)
    }

    /// Lossless conversion to `f64`, for export and diagnostics.
    fn to_f64(self) -> f64;

    /// Converts a widened value to `f64` (may round for very large values).
    fn wide_to_f64(value: Self::Wide) -> f64;
}

impl Coord for i16 {
    type Wide = i64;

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn wide_to_f64(value: i64) -> f64 {
        value as f64
    }
}

impl Coord for i32 {
    type Wide = i128;

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn wide_to_f64(value: i128) -> f64 {
        value as f64
    }
}
