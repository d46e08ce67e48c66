//! Row and cell handles for two-level `matrix[x][y]` style access.
//!
//! Indexing is split into two steps: the container hands out a row handle bound
//! to `x`, and the row handle hands out a cell handle bound to `(x, y)`. Neither
//! step touches storage; only reading or writing through a cell handle does.
//!
//! Each handle comes in two capability variants, selected by how the matrix is
//! borrowed:
//!
//! | borrow             | row handle  | cell handle  | can write |
//! |--------------------|-------------|--------------|-----------|
//! | `&SparseMatrix`    | [`Row`]     | [`Cell`]     | no        |
//! | `&mut SparseMatrix`| [`RowMut`]  | [`CellMut`]  | yes       |
//!
//! The read-only variants have no write methods at all, so writing through a
//! shared borrow is rejected at compile time.
//!
//! # Examples
//!
//! Chained assignment applies left to right to the same cell:
//!
//! ```
//! use sparsegrid::SparseMatrix;
//!
//! let mut matrix = SparseMatrix::<i32>::new();
//! matrix.row_mut(100).cell(100).set(314).set(0).set(217);
//!
//! assert_eq!(matrix.row(100).cell(100).get(), 217);
//! assert_eq!(matrix.len(), 1);
//! ```
//!
//! Handles obtained from a shared borrow can only read:
//!
//! ```compile_fail
//! use sparsegrid::SparseMatrix;
//!
//! let matrix = SparseMatrix::<i32>::new();
//! matrix.row(0).cell(0).set(1);
//! ```

use std::fmt;

use crate::{
    coord::{Coord, CoordIndex},
    default_value::DefaultValue,
    iter::RowIter,
    matrix::SparseMatrix,
};

/// Read-only handle to one row of a [`SparseMatrix`].
///
/// Created by [`SparseMatrix::row`].
pub struct Row<'a, T, D, I = i64> {
    matrix: &'a SparseMatrix<T, D, I>,
    x: I,
}

impl<'a, T, D, I> Row<'a, T, D, I> {
    #[inline]
    pub(crate) const fn new(matrix: &'a SparseMatrix<T, D, I>, x: I) -> Self {
        Self { matrix, x }
    }
}

impl<'a, T, D, I> Row<'a, T, D, I>
where
    T: Clone + PartialEq,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    /// Returns the `x` this row is bound to.
    #[must_use]
    #[inline]
    pub fn x(&self) -> I {
        self.x
    }

    /// Returns a read-only handle to the cell at `(x, y)`.
    #[must_use]
    #[inline]
    pub fn cell(&self, y: I) -> Cell<'a, T, D, I> {
        Cell::new(self.matrix, Coord::new(self.x, y))
    }

    /// Reads the value at `(x, y)`.
    #[must_use]
    #[inline]
    pub fn get(&self, y: I) -> T {
        self.matrix.get(self.x, y)
    }

    /// Returns an iterator over the occupied cells of this row, ascending by `y`.
    #[must_use]
    pub fn iter(&self) -> RowIter<'a, T, I> {
        RowIter::new(self.matrix.storage().row(self.x))
    }

    /// Returns the number of occupied cells in this row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matrix.storage().row(self.x).count()
    }

    /// Returns `true` if this row has no occupied cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrix.storage().row(self.x).next().is_none()
    }
}

impl<T, D, I: Copy> Clone for Row<'_, T, D, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, D, I: Copy> Copy for Row<'_, T, D, I> {}

impl<T, D, I: fmt::Debug> fmt::Debug for Row<'_, T, D, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row").field("x", &self.x).finish_non_exhaustive()
    }
}

impl<'a, T, D, I> IntoIterator for Row<'a, T, D, I>
where
    T: Clone + PartialEq,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    type Item = (I, I, T);
    type IntoIter = RowIter<'a, T, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Read-write handle to one row of a [`SparseMatrix`].
///
/// Created by [`SparseMatrix::row_mut`].
pub struct RowMut<'a, T, D, I = i64> {
    matrix: &'a mut SparseMatrix<T, D, I>,
    x: I,
}

impl<'a, T, D, I> RowMut<'a, T, D, I> {
    #[inline]
    pub(crate) const fn new(matrix: &'a mut SparseMatrix<T, D, I>, x: I) -> Self {
        Self { matrix, x }
    }
}

impl<'a, T, D, I> RowMut<'a, T, D, I>
where
    T: Clone + PartialEq,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    /// Returns the `x` this row is bound to.
    #[must_use]
    #[inline]
    pub fn x(&self) -> I {
        self.x
    }

    /// Returns a read-write handle to the cell at `(x, y)`, reborrowing this row.
    #[must_use]
    #[inline]
    pub fn cell(&mut self, y: I) -> CellMut<'_, T, D, I> {
        CellMut::new(self.matrix, Coord::new(self.x, y))
    }

    /// Converts this row into a read-write handle to the cell at `(x, y)`.
    #[must_use]
    #[inline]
    pub fn into_cell(self, y: I) -> CellMut<'a, T, D, I> {
        CellMut::new(self.matrix, Coord::new(self.x, y))
    }

    /// Reads the value at `(x, y)`.
    #[must_use]
    #[inline]
    pub fn get(&self, y: I) -> T {
        self.matrix.get(self.x, y)
    }

    /// Writes `value` at `(x, y)` and returns the previously occupied value.
    #[inline]
    pub fn set(&mut self, y: I, value: T) -> Option<T> {
        self.matrix.set(self.x, y, value)
    }

    /// Returns a read-only view of this row.
    #[must_use]
    #[inline]
    pub fn as_row(&self) -> Row<'_, T, D, I> {
        Row::new(&*self.matrix, self.x)
    }
}

impl<T, D, I: fmt::Debug> fmt::Debug for RowMut<'_, T, D, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowMut")
            .field("x", &self.x)
            .finish_non_exhaustive()
    }
}

/// Read-only handle to one cell of a [`SparseMatrix`].
///
/// Reading never caches: every [`Cell::get`] queries the matrix again.
pub struct Cell<'a, T, D, I = i64> {
    matrix: &'a SparseMatrix<T, D, I>,
    coord: Coord<I>,
}

impl<'a, T, D, I> Cell<'a, T, D, I> {
    #[inline]
    pub(crate) const fn new(matrix: &'a SparseMatrix<T, D, I>, coord: Coord<I>) -> Self {
        Self { matrix, coord }
    }
}

impl<T, D, I> Cell<'_, T, D, I>
where
    T: Clone + PartialEq,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    /// Returns the coordinate this handle is bound to.
    #[must_use]
    #[inline]
    pub fn coord(&self) -> Coord<I> {
        self.coord
    }

    /// Reads the cell, yielding the Default value if it is unoccupied.
    #[must_use]
    #[inline]
    pub fn get(&self) -> T {
        self.matrix.get(self.coord.x, self.coord.y)
    }

    /// Returns `true` if the cell holds a non-default value.
    #[must_use]
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.matrix.contains(self.coord.x, self.coord.y)
    }
}

impl<T, D, I: Copy> Clone for Cell<'_, T, D, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, D, I: Copy> Copy for Cell<'_, T, D, I> {}

impl<T, D, I> PartialEq<T> for Cell<'_, T, D, I>
where
    T: Clone + PartialEq,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    fn eq(&self, other: &T) -> bool {
        self.get() == *other
    }
}

impl<T, D, I> fmt::Display for Cell<'_, T, D, I>
where
    T: Clone + PartialEq + fmt::Display,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

impl<T, D, I> fmt::Debug for Cell<'_, T, D, I>
where
    T: Clone + PartialEq + fmt::Debug,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("coord", &self.coord)
            .field("value", &self.get())
            .finish()
    }
}

/// Read-write handle to one cell of a [`SparseMatrix`].
///
/// Writes return `&mut Self`, so several assignments to the same cell can be
/// chained and take effect in order. Only the final state is retained.
///
/// # Examples
///
/// ```
/// use sparsegrid::SparseMatrix;
///
/// let mut matrix = SparseMatrix::<u8>::new();
/// let mut cell = matrix.cell_mut(-3, 9);
/// cell.set(4).update(|v| v * 2);
/// assert_eq!(cell.get(), 8);
/// assert_eq!(cell.take(), 8);
/// assert!(!cell.is_occupied());
/// ```
pub struct CellMut<'a, T, D, I = i64> {
    matrix: &'a mut SparseMatrix<T, D, I>,
    coord: Coord<I>,
}

impl<'a, T, D, I> CellMut<'a, T, D, I> {
    #[inline]
    pub(crate) const fn new(matrix: &'a mut SparseMatrix<T, D, I>, coord: Coord<I>) -> Self {
        Self { matrix, coord }
    }
}

impl<T, D, I> CellMut<'_, T, D, I>
where
    T: Clone + PartialEq,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    /// Returns the coordinate this handle is bound to.
    #[must_use]
    #[inline]
    pub fn coord(&self) -> Coord<I> {
        self.coord
    }

    /// Reads the cell, yielding the Default value if it is unoccupied.
    #[must_use]
    #[inline]
    pub fn get(&self) -> T {
        self.matrix.get(self.coord.x, self.coord.y)
    }

    /// Returns `true` if the cell holds a non-default value.
    #[must_use]
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.matrix.contains(self.coord.x, self.coord.y)
    }

    /// Writes `value` to the cell and returns this same handle.
    ///
    /// Writing the Default value releases the cell.
    #[inline]
    pub fn set(&mut self, value: T) -> &mut Self {
        self.matrix.set(self.coord.x, self.coord.y, value);
        self
    }

    /// Writes the Default value to the cell, releasing it.
    #[inline]
    pub fn clear(&mut self) -> &mut Self {
        self.set(D::default_value())
    }

    /// Writes `value` to the cell and returns the value it replaced.
    #[inline]
    pub fn replace(&mut self, value: T) -> T {
        self.matrix
            .set(self.coord.x, self.coord.y, value)
            .unwrap_or_else(D::default_value)
    }

    /// Releases the cell and returns the value it held.
    #[inline]
    pub fn take(&mut self) -> T {
        self.replace(D::default_value())
    }

    /// Replaces the cell's value with `f(current)`.
    #[inline]
    pub fn update<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(T) -> T,
    {
        let value = f(self.get());
        self.set(value)
    }

    /// Returns a read-only view of this cell.
    #[must_use]
    #[inline]
    pub fn as_cell(&self) -> Cell<'_, T, D, I> {
        Cell::new(&*self.matrix, self.coord)
    }
}

impl<T, D, I> PartialEq<T> for CellMut<'_, T, D, I>
where
    T: Clone + PartialEq,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    fn eq(&self, other: &T) -> bool {
        self.get() == *other
    }
}

impl<T, D, I> fmt::Display for CellMut<'_, T, D, I>
where
    T: Clone + PartialEq + fmt::Display,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

impl<T, D, I> fmt::Debug for CellMut<'_, T, D, I>
where
    T: Clone + PartialEq + fmt::Debug,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellMut")
            .field("coord", &self.coord)
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_value::ConstI32;

    mod read {
        use super::*;

        #[test]
        fn test_unoccupied_reads_default() {
            let matrix = SparseMatrix::<i32, ConstI32<-1>>::new();
            let cell = matrix.row(5).cell(-5);
            assert_eq!(cell.get(), -1);
            assert!(!cell.is_occupied());
            assert_eq!(matrix.len(), 0);
        }

        #[test]
        fn test_independent_handles_agree() {
            let mut matrix = SparseMatrix::<i32>::new();
            let coord = matrix.cell(1, 1).coord();
            matrix.set(coord.x, coord.y, 3);
            let first = matrix.cell(1, 1);
            let second = matrix.row(1).cell(1);
            assert_eq!(first, 3);
            assert_eq!(second, 3);
            assert_eq!(first.coord(), second.coord());
        }

        #[test]
        fn test_display_and_debug() {
            let mut matrix = SparseMatrix::<i32>::new();
            matrix.set(2, 3, 42);
            assert_eq!(matrix.cell(2, 3).to_string(), "42");
            assert_eq!(
                format!("{:?}", matrix.cell(2, 3)),
                "Cell { coord: Coord { x: 2, y: 3 }, value: 42 }"
            );
        }

        #[test]
        fn test_row_helpers() {
            let mut matrix = SparseMatrix::<i32>::new();
            matrix.set(4, 1, 1);
            matrix.set(4, 2, 2);
            matrix.set(5, 0, 3);
            let row = matrix.row(4);
            assert_eq!(row.x(), 4);
            assert_eq!(row.get(2), 2);
            assert_eq!(row.get(3), 0);
            assert_eq!(row.len(), 2);
            assert!(matrix.row(6).is_empty());
            let ys: Vec<_> = row.into_iter().map(|(_, y, _)| y).collect();
            assert_eq!(ys, vec![1, 2]);
        }
    }

    mod write {
        use super::*;

        #[test]
        fn test_chained_assignment_keeps_last_value() {
            let mut matrix = SparseMatrix::<i32>::new();
            matrix.row_mut(100).cell(100).set(314).set(0).set(217);
            assert_eq!(matrix.row(100).cell(100).get(), 217);
            assert_eq!(matrix.len(), 1);
        }

        #[test]
        fn test_chain_ending_in_default_releases() {
            let mut matrix = SparseMatrix::<i32>::new();
            matrix.cell_mut(1, 1).set(5).set(6).clear();
            assert_eq!(matrix.len(), 0);
            assert_eq!(matrix.get(1, 1), 0);
        }

        #[test]
        fn test_replace_and_take() {
            let mut matrix = SparseMatrix::<i32, ConstI32<7>>::new();
            let mut cell = matrix.cell_mut(0, 0);
            assert_eq!(cell.replace(1), 7);
            assert_eq!(cell.replace(2), 1);
            assert_eq!(cell.take(), 2);
            assert_eq!(cell.take(), 7);
            assert_eq!(matrix.len(), 0);
        }

        #[test]
        fn test_update_from_default() {
            let mut matrix = SparseMatrix::<i32>::new();
            matrix.cell_mut(0, 0).update(|v| v + 1).update(|v| v + 1);
            assert_eq!(matrix.get(0, 0), 2);
            matrix.cell_mut(0, 0).update(|v| v - 2);
            assert!(matrix.is_empty());
        }

        #[test]
        fn test_row_mut_multiple_cells() {
            let mut matrix = SparseMatrix::<i32>::new();
            let mut row = matrix.row_mut(3);
            row.cell(1).set(10);
            row.cell(2).set(20);
            assert_eq!(row.set(1, 0), Some(10));
            assert_eq!(row.get(2), 20);
            assert_eq!(row.as_row().len(), 1);
            assert_eq!(matrix.len(), 1);
        }

        #[test]
        fn test_into_cell_outlives_row() {
            fn corner(matrix: &mut SparseMatrix<i32>) -> CellMut<'_, i32, crate::TypeDefault<i32>> {
                matrix.row_mut(i64::MIN).into_cell(i64::MAX)
            }

            let mut matrix = SparseMatrix::<i32>::new();
            corner(&mut matrix).set(9);
            assert_eq!(matrix.get(i64::MIN, i64::MAX), 9);
        }

        #[test]
        fn test_as_cell_reads_through() {
            let mut matrix = SparseMatrix::<i32>::new();
            let mut cell = matrix.cell_mut(1, 2);
            cell.set(8);
            assert_eq!(cell.as_cell(), 8);
            assert_eq!(cell, 8);
            assert!(cell.as_cell().is_occupied());
        }
    }
}
