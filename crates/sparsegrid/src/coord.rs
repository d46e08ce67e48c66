//! Coordinate types for addressing cells.
//!
//! This module provides [`CoordIndex`], the trait implemented by the signed
//! integer types usable as a coordinate component, and [`Coord`], the `(x, y)`
//! pair used as the storage key of a [`SparseMatrix`].
//!
//! Coordinates are ordered lexicographically: by `x` first, then by `y`. This
//! ordering only exists to give traversal a deterministic order.
//!
//! [`SparseMatrix`]: crate::SparseMatrix
//!
//! # Examples
//!
//! ```
//! use sparsegrid::Coord;
//!
//! let a = Coord::new(1, 5);
//! let b = Coord::new(2, -3);
//! assert!(a < b); // x is compared first
//!
//! let parsed: Coord = "(-7, 42)".parse().unwrap();
//! assert_eq!(parsed, Coord::new(-7, 42));
//! assert_eq!(parsed.to_string(), "(-7, 42)");
//! ```

use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
    num::ParseIntError,
    str::FromStr,
};

mod sealed {
    pub trait Sealed {}
}

/// A signed integer type usable as one component of a [`Coord`].
///
/// This trait is sealed and implemented for `i8`, `i16`, `i32`, `i64`, `i128`
/// and `isize`.
pub trait CoordIndex:
    Copy + Ord + Hash + Debug + Display + FromStr<Err = ParseIntError> + sealed::Sealed
{
    /// The smallest representable index.
    const MIN: Self;
    /// The largest representable index.
    const MAX: Self;
}

macro_rules! impl_coord_index {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl CoordIndex for $ty {
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;
            }
        )*
    };
}

impl_coord_index!(i8, i16, i32, i64, i128, isize);

/// A cell coordinate `(x, y)`.
///
/// The derived ordering compares `x` first and `y` second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coord<I = i64> {
    /// The primary (row) component.
    pub x: I,
    /// The secondary (column) component.
    pub y: I,
}

impl<I> Coord<I> {
    /// Creates a new coordinate.
    #[must_use]
    #[inline]
    pub const fn new(x: I, y: I) -> Self {
        Self { x, y }
    }
}

impl<I: CoordIndex> Coord<I> {
    /// The first coordinate of row `x` in traversal order.
    #[must_use]
    #[inline]
    pub(crate) const fn row_start(x: I) -> Self {
        Self { x, y: I::MIN }
    }

    /// The last coordinate of row `x` in traversal order.
    #[must_use]
    #[inline]
    pub(crate) const fn row_end(x: I) -> Self {
        Self { x, y: I::MAX }
    }
}

impl<I: Display> Display for Coord<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<I> From<(I, I)> for Coord<I> {
    #[inline]
    fn from((x, y): (I, I)) -> Self {
        Self { x, y }
    }
}

impl<I> From<Coord<I>> for (I, I) {
    #[inline]
    fn from(coord: Coord<I>) -> Self {
        (coord.x, coord.y)
    }
}

/// One axis of a [`Coord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Axis {
    /// The `x` component.
    #[display("x")]
    X,
    /// The `y` component.
    #[display("y")]
    Y,
}

/// Error returned when parsing a [`Coord`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCoordError {
    /// The input does not contain a `,` between the two components.
    #[display("missing ',' separator in coordinate {input:?}")]
    MissingSeparator {
        /// The rejected input.
        input: String,
    },
    /// One of the components is not a valid integer of the index type.
    #[display("invalid {axis} component")]
    InvalidComponent {
        /// The axis that failed to parse.
        axis: Axis,
        /// The underlying integer parse error.
        source: ParseIntError,
    },
}

impl<I: CoordIndex> FromStr for Coord<I> {
    type Err = ParseCoordError;

    /// Parses `"x,y"`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        let (x, y) = inner
            .split_once(',')
            .ok_or_else(|| ParseCoordError::MissingSeparator {
                input: s.to_owned(),
            })?;
        let x = x
            .trim()
            .parse()
            .map_err(|source| ParseCoordError::InvalidComponent {
                axis: Axis::X,
                source,
            })?;
        let y = y
            .trim()
            .parse()
            .map_err(|source| ParseCoordError::InvalidComponent {
                axis: Axis::Y,
                source,
            })?;
        Ok(Self { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod ordering {
        use super::*;

        #[test]
        fn test_x_is_primary() {
            assert!(Coord::new(1, 100) < Coord::new(2, -100));
            assert!(Coord::new(-1, 0) < Coord::new(0, i64::MIN));
        }

        #[test]
        fn test_y_breaks_ties() {
            assert!(Coord::new(1, 2) < Coord::new(1, 5));
            assert_eq!(Coord::new(3, 3).cmp(&Coord::new(3, 3)), std::cmp::Ordering::Equal);
        }

        #[test]
        fn test_row_bounds_enclose_row() {
            let start = Coord::<i32>::row_start(7);
            let end = Coord::<i32>::row_end(7);
            assert!(start <= Coord::new(7, i32::MIN));
            assert!(Coord::new(7, i32::MAX) <= end);
            assert!(Coord::new(6, i32::MAX) < start);
            assert!(end < Coord::new(8, i32::MIN));
        }
    }

    mod parsing {
        use super::*;

        #[test]
        fn test_plain_pair() {
            assert_eq!("3,4".parse::<Coord>(), Ok(Coord::new(3, 4)));
        }

        #[test]
        fn test_whitespace_and_parentheses() {
            assert_eq!(" ( -1 , 1000000000 ) ".parse::<Coord>(), Ok(Coord::new(-1, 1_000_000_000)));
        }

        #[test]
        fn test_display_round_trip() {
            let coord = Coord::<i16>::new(i16::MIN, i16::MAX);
            assert_eq!(coord.to_string().parse::<Coord<i16>>(), Ok(coord));
        }

        #[test]
        fn test_missing_separator() {
            let err = "12".parse::<Coord>().unwrap_err();
            assert_eq!(
                err,
                ParseCoordError::MissingSeparator {
                    input: "12".to_owned()
                }
            );
            assert_eq!(err.to_string(), "missing ',' separator in coordinate \"12\"");
        }

        #[test]
        fn test_invalid_component() {
            let err = "1,y".parse::<Coord>().unwrap_err();
            assert!(matches!(
                err,
                ParseCoordError::InvalidComponent { axis: Axis::Y, .. }
            ));
            assert_eq!(err.to_string(), "invalid y component");
        }

        #[test]
        fn test_out_of_range_component() {
            let err = "128,0".parse::<Coord<i8>>().unwrap_err();
            assert!(matches!(
                err,
                ParseCoordError::InvalidComponent { axis: Axis::X, .. }
            ));
            assert!(std::error::Error::source(&err).is_some());
        }
    }
}
