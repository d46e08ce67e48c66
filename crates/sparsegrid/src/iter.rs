//! Traversal of occupied cells.
//!
//! Every iterator in this module yields `(x, y, value)` triples in coordinate
//! order (ascending `x`, then ascending `y`), and only ever visits occupied
//! cells. Each triple is a fresh copy, so it stays valid after the matrix is
//! modified.
//!
//! - [`Iter`] - all occupied cells, borrowed ([`SparseMatrix::iter`])
//! - [`RowIter`] - occupied cells of one row ([`Row::iter`])
//! - [`IntoIter`] - all occupied cells, by value
//!
//! [`SparseMatrix::iter`]: crate::SparseMatrix::iter
//! [`Row::iter`]: crate::Row::iter

use std::{collections::btree_map, fmt, iter::FusedIterator};

use crate::coord::Coord;

#[inline]
fn triple<T: Clone, I: Copy>((coord, value): (&Coord<I>, &T)) -> (I, I, T) {
    (coord.x, coord.y, value.clone())
}

/// Iterator over all occupied cells of a [`SparseMatrix`].
///
/// Created by [`SparseMatrix::iter`].
///
/// [`SparseMatrix`]: crate::SparseMatrix
/// [`SparseMatrix::iter`]: crate::SparseMatrix::iter
pub struct Iter<'a, T, I = i64> {
    inner: btree_map::Iter<'a, Coord<I>, T>,
}

impl<'a, T, I> Iter<'a, T, I> {
    pub(crate) fn new(inner: btree_map::Iter<'a, Coord<I>, T>) -> Self {
        Self { inner }
    }
}

impl<T, I> Clone for Iter<'_, T, I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug, I: fmt::Debug> fmt::Debug for Iter<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("inner", &self.inner).finish()
    }
}

impl<T: Clone, I: Copy> Iterator for Iter<'_, T, I> {
    type Item = (I, I, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(triple)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Clone, I: Copy> DoubleEndedIterator for Iter<'_, T, I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(triple)
    }
}

impl<T: Clone, I: Copy> ExactSizeIterator for Iter<'_, T, I> {}
impl<T: Clone, I: Copy> FusedIterator for Iter<'_, T, I> {}

/// Iterator over the occupied cells of a single row.
///
/// Created by [`Row::iter`].
///
/// [`Row::iter`]: crate::Row::iter
pub struct RowIter<'a, T, I = i64> {
    inner: btree_map::Range<'a, Coord<I>, T>,
    len: usize,
}

impl<'a, T, I> RowIter<'a, T, I> {
    pub(crate) fn new(inner: btree_map::Range<'a, Coord<I>, T>) -> Self {
        let len = inner.clone().count();
        Self { inner, len }
    }
}

impl<T, I> Clone for RowIter<'_, T, I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug, I: fmt::Debug> fmt::Debug for RowIter<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowIter")
            .field("inner", &self.inner)
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Clone, I: Copy> Iterator for RowIter<'_, T, I> {
    type Item = (I, I, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next().map(triple)?;
        self.len -= 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T: Clone, I: Copy> DoubleEndedIterator for RowIter<'_, T, I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back().map(triple)?;
        self.len -= 1;
        Some(item)
    }
}

impl<T: Clone, I: Copy> ExactSizeIterator for RowIter<'_, T, I> {}
impl<T: Clone, I: Copy> FusedIterator for RowIter<'_, T, I> {}

/// Owning iterator over all occupied cells of a [`SparseMatrix`].
///
/// Created by the [`IntoIterator`] implementation of [`SparseMatrix`].
///
/// [`SparseMatrix`]: crate::SparseMatrix
pub struct IntoIter<T, I = i64> {
    inner: btree_map::IntoIter<Coord<I>, T>,
}

impl<T, I> IntoIter<T, I> {
    pub(crate) fn new(inner: btree_map::IntoIter<Coord<I>, T>) -> Self {
        Self { inner }
    }
}

impl<T: fmt::Debug, I: fmt::Debug> fmt::Debug for IntoIter<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("inner", &self.inner).finish()
    }
}

impl<T, I> Iterator for IntoIter<T, I> {
    type Item = (I, I, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(coord, value)| (coord.x, coord.y, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, I> DoubleEndedIterator for IntoIter<T, I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(coord, value)| (coord.x, coord.y, value))
    }
}

impl<T, I> ExactSizeIterator for IntoIter<T, I> {}
impl<T, I> FusedIterator for IntoIter<T, I> {}
