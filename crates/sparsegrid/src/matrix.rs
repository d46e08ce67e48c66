//! The logically infinite sparse matrix.
//!
//! This module provides [`SparseMatrix`], a mapping from every `(x, y)`
//! coordinate to a value, where only cells that differ from a type-level
//! Default are materialized.
//!
//! # Examples
//!
//! ```
//! use sparsegrid::SparseMatrix;
//!
//! let mut matrix = SparseMatrix::<i32>::new();
//! assert_eq!(matrix.get(1_000_000_000, -1_000_000_000), 0);
//!
//! matrix.set(2, 1, 10);
//! matrix.set(1, 5, 20);
//! matrix.set(1, 2, 30);
//! assert_eq!(matrix.len(), 3);
//!
//! // Writing the Default value releases the cell
//! matrix.set(1, 5, 0);
//! assert_eq!(matrix.len(), 2);
//!
//! let cells: Vec<_> = matrix.iter().collect();
//! assert_eq!(cells, vec![(1, 2, 30), (2, 1, 10)]);
//! ```

use std::{fmt, ops::Index};

use crate::{
    accessor::{Cell, CellMut, Row, RowMut},
    coord::{Coord, CoordIndex},
    default_value::{DefaultValue, TypeDefault},
    iter::{IntoIter, Iter},
    storage::Storage,
};

/// A two-dimensional sparse matrix with a type-level Default value.
///
/// Every coordinate reads as some value at all times: either one that was
/// written, or `D::default_value()`. Only the former are stored, so memory use
/// is proportional to the number of occupied cells and independent of how far
/// apart they are.
///
/// # Type Parameters
///
/// - `T` - the value type; compared against the Default on every write
/// - `D` - the [`DefaultValue`] provider, [`TypeDefault<T>`] if omitted
/// - `I` - the coordinate component type, `i64` if omitted
///
/// # Access
///
/// - [`get`](Self::get) / [`set`](Self::set) - direct reads and writes
/// - [`row`](Self::row) / [`row_mut`](Self::row_mut) - two-level handles,
///   see [`accessor`](crate::accessor)
/// - `matrix[(x, y)]` - borrowed read through [`Index`]
///
/// # Examples
///
/// ```
/// use sparsegrid::{SparseMatrix, default_value::ConstU8};
///
/// let mut matrix = SparseMatrix::<u8, ConstU8<b'.'>, i32>::new();
/// matrix.row_mut(0).cell(0).set(b'#');
///
/// assert_eq!(matrix[(0, 0)], b'#');
/// assert_eq!(matrix[(0, 1)], b'.');
/// assert_eq!(matrix.len(), 1);
/// ```
pub struct SparseMatrix<T, D = TypeDefault<T>, I = i64> {
    storage: Storage<T, D, I>,
    default: T,
}

impl<T, D, I> SparseMatrix<T, D, I>
where
    T: Clone + PartialEq,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    /// Creates an empty matrix; every cell reads as the Default value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Storage::new(),
            default: D::default_value(),
        }
    }

    /// Returns the Default value unoccupied cells read as.
    #[must_use]
    #[inline]
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Returns the number of occupied cells.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if no cell is occupied.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    /// Releases every occupied cell.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Reads the value at `(x, y)`, yielding the Default value if unoccupied.
    #[must_use]
    #[inline]
    pub fn get(&self, x: I, y: I) -> T {
        self.storage
            .lookup(Coord::new(x, y))
            .cloned()
            .unwrap_or_else(D::default_value)
    }

    /// Writes `value` at `(x, y)` and returns the previously occupied value.
    ///
    /// Writing the Default value releases the cell.
    #[inline]
    pub fn set(&mut self, x: I, y: I, value: T) -> Option<T> {
        self.storage.assign(Coord::new(x, y), value)
    }

    /// Releases the cell at `(x, y)` and returns the value it held.
    #[inline]
    pub fn remove(&mut self, x: I, y: I) -> Option<T> {
        self.set(x, y, D::default_value())
    }

    /// Returns `true` if the cell at `(x, y)` holds a non-default value.
    #[must_use]
    #[inline]
    pub fn contains(&self, x: I, y: I) -> bool {
        self.storage.lookup(Coord::new(x, y)).is_some()
    }

    /// Returns a read-only handle to row `x`.
    #[must_use]
    #[inline]
    pub fn row(&self, x: I) -> Row<'_, T, D, I> {
        Row::new(self, x)
    }

    /// Returns a read-write handle to row `x`.
    #[must_use]
    #[inline]
    pub fn row_mut(&mut self, x: I) -> RowMut<'_, T, D, I> {
        RowMut::new(self, x)
    }

    /// Returns a read-only handle to the cell at `(x, y)`.
    #[must_use]
    #[inline]
    pub fn cell(&self, x: I, y: I) -> Cell<'_, T, D, I> {
        Cell::new(self, Coord::new(x, y))
    }

    /// Returns a read-write handle to the cell at `(x, y)`.
    #[must_use]
    #[inline]
    pub fn cell_mut(&mut self, x: I, y: I) -> CellMut<'_, T, D, I> {
        CellMut::new(self, Coord::new(x, y))
    }

    /// Returns an iterator over the occupied cells as `(x, y, value)`,
    /// ascending by `x` and then by `y`.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, I> {
        Iter::new(self.storage.iter())
    }

    pub(crate) fn storage(&self) -> &Storage<T, D, I> {
        &self.storage
    }
}

impl<T, D, I> Default for SparseMatrix<T, D, I>
where
    T: Clone + PartialEq,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, D, I: Clone> Clone for SparseMatrix<T, D, I> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            default: self.default.clone(),
        }
    }
}

impl<T: PartialEq, D, I: PartialEq> PartialEq for SparseMatrix<T, D, I> {
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<T: Eq, D, I: Eq> Eq for SparseMatrix<T, D, I> {}

impl<T: fmt::Debug, D, I: fmt::Display> fmt::Debug for SparseMatrix<T, D, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.storage, f)
    }
}

impl<T, D, I> Index<(I, I)> for SparseMatrix<T, D, I>
where
    T: Clone + PartialEq,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    type Output = T;

    #[inline]
    fn index(&self, (x, y): (I, I)) -> &T {
        self.storage
            .lookup(Coord::new(x, y))
            .unwrap_or(&self.default)
    }
}

impl<T, D, I> Index<Coord<I>> for SparseMatrix<T, D, I>
where
    T: Clone + PartialEq,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    type Output = T;

    #[inline]
    fn index(&self, coord: Coord<I>) -> &T {
        self.storage.lookup(coord).unwrap_or(&self.default)
    }
}

impl<'a, T, D, I> IntoIterator for &'a SparseMatrix<T, D, I>
where
    T: Clone + PartialEq,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    type Item = (I, I, T);
    type IntoIter = Iter<'a, T, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, D, I> IntoIterator for SparseMatrix<T, D, I> {
    type Item = (I, I, T);
    type IntoIter = IntoIter<T, I>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.storage.into_cells())
    }
}

impl<T, D, I> Extend<(I, I, T)> for SparseMatrix<T, D, I>
where
    T: Clone + PartialEq,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    fn extend<It>(&mut self, iter: It)
    where
        It: IntoIterator<Item = (I, I, T)>,
    {
        for (x, y, value) in iter {
            self.set(x, y, value);
        }
    }
}

impl<T, D, I> FromIterator<(I, I, T)> for SparseMatrix<T, D, I>
where
    T: Clone + PartialEq,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    fn from_iter<It>(iter: It) -> Self
    where
        It: IntoIterator<Item = (I, I, T)>,
    {
        let mut matrix = Self::new();
        matrix.extend(iter);
        matrix
    }
}
