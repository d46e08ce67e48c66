//! A logically infinite two-dimensional sparse matrix.
//!
//! Every integer coordinate `(x, y)` holds a value at all times, but only cells
//! whose value differs from a type-level Default are stored. Reads never
//! allocate, writing a non-default value materializes a cell, and writing the
//! Default value back releases it.
//!
//! # Overview
//!
//! The crate is organized around three components:
//!
//! 1. **Storage** - an ordered occupancy table, private to the crate. All writes
//!    go through one path that refuses to store the Default value, so
//!    [`SparseMatrix::len`] always counts non-default cells.
//!
//! 2. **Accessor protocol** - [`accessor`]: row and cell handles that give
//!    `matrix[x][y]` style access. Handles from `&SparseMatrix` ([`Row`],
//!    [`Cell`]) can only read; handles from `&mut SparseMatrix` ([`RowMut`],
//!    [`CellMut`]) can also write, and writes return the same handle so they
//!    can be chained.
//!
//! 3. **Enumeration** - [`iter`]: traversal of occupied cells as
//!    `(x, y, value)` triples, ascending by `x` and then by `y`.
//!
//! Supporting modules:
//!
//! - [`coord`]: the [`Coord`] pair and the [`CoordIndex`] component types
//! - [`default_value`]: [`DefaultValue`] providers that fix the Default value
//!   at the type level
//!
//! # Examples
//!
//! ```
//! use sparsegrid::SparseMatrix;
//!
//! let mut matrix = SparseMatrix::<i32>::new();
//! assert_eq!(matrix.row(100).cell(100).get(), 0);
//! assert_eq!(matrix.len(), 0);
//!
//! // Chained assignment to one cell; only the last value is kept
//! matrix.row_mut(100).cell(100).set(314).set(0).set(217);
//! assert_eq!(matrix.row(100).cell(100).get(), 217);
//! assert_eq!(matrix.len(), 1);
//!
//! for (x, y, value) in &matrix {
//!     println!("({x}, {y}) = {value}");
//! }
//! ```

pub mod accessor;
pub mod coord;
pub mod default_value;
pub mod iter;
pub mod matrix;
mod storage;

// Re-export commonly used types
pub use self::{
    accessor::{Cell, CellMut, Row, RowMut},
    coord::{Coord, CoordIndex, ParseCoordError},
    default_value::{DefaultValue, TypeDefault},
    matrix::SparseMatrix,
};
