//! The occupancy table backing a [`SparseMatrix`].
//!
//! [`Storage`] is the single place where cells are materialized or released.
//! Every write in the crate goes through [`Storage::assign`], which keeps the
//! invariant that no entry ever holds the Default value. As a result,
//! [`Storage::len`] is exactly the number of non-default cells.
//!
//! [`SparseMatrix`]: crate::SparseMatrix

use std::{
    collections::{BTreeMap, btree_map},
    fmt,
    marker::PhantomData,
};

use crate::{
    coord::{Coord, CoordIndex},
    default_value::DefaultValue,
};

/// Ordered map from occupied coordinates to their values.
pub(crate) struct Storage<T, D, I> {
    cells: BTreeMap<Coord<I>, T>,
    _default: PhantomData<fn() -> D>,
}

impl<T, D, I> Storage<T, D, I> {
    pub(crate) const fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
            _default: PhantomData,
        }
    }

    /// Number of occupied cells.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn clear(&mut self) {
        log::trace!("releasing {} cells", self.cells.len());
        self.cells.clear();
    }

    pub(crate) fn iter(&self) -> btree_map::Iter<'_, Coord<I>, T> {
        self.cells.iter()
    }

    pub(crate) fn into_cells(self) -> btree_map::IntoIter<Coord<I>, T> {
        self.cells.into_iter()
    }
}

impl<T, D, I> Storage<T, D, I>
where
    I: CoordIndex,
{
    /// Returns the stored value, or `None` if the cell is unoccupied.
    #[inline]
    pub(crate) fn lookup(&self, coord: Coord<I>) -> Option<&T> {
        self.cells.get(&coord)
    }

    /// Occupied cells of row `x`, ascending by `y`.
    pub(crate) fn row(&self, x: I) -> btree_map::Range<'_, Coord<I>, T> {
        self.cells.range(Coord::row_start(x)..=Coord::row_end(x))
    }
}

impl<T, D, I> Storage<T, D, I>
where
    T: PartialEq,
    D: DefaultValue<Value = T>,
    I: CoordIndex,
{
    /// Writes `value` at `coord` and returns the previously stored value.
    ///
    /// Writing the Default value removes the entry (a no-op if the cell is
    /// unoccupied); any other value inserts or overwrites it.
    pub(crate) fn assign(&mut self, coord: Coord<I>, value: T) -> Option<T> {
        if D::is_default(&value) {
            let old = self.cells.remove(&coord);
            if old.is_some() {
                log::trace!("released cell {coord}");
            }
            return old;
        }
        let old = self.cells.insert(coord, value);
        if old.is_some() {
            log::trace!("overwrote cell {coord}");
        } else {
            log::trace!("occupied cell {coord}");
        }
        old
    }
}

impl<T: Clone, D, I: Clone> Clone for Storage<T, D, I> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            _default: PhantomData,
        }
    }
}

impl<T: PartialEq, D, I: PartialEq> PartialEq for Storage<T, D, I> {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl<T: Eq, D, I: Eq> Eq for Storage<T, D, I> {}

impl<T: fmt::Debug, D, I: fmt::Display> fmt::Debug for Storage<T, D, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (coord, value) in &self.cells {
            map.entry(&format_args!("{coord}"), value);
        }
        map.finish()
    }
}
