//! Capacity growth and buffer re-striding.

use std::mem;

use tabula_core::{row_major, Bounds2D, CollectionError};

use super::List2D;
use crate::buffer;

/// A band of fresh rows or columns opened during a relayout.
#[derive(Clone, Copy, Debug)]
pub(super) struct Gap {
    start: usize,
    count: usize,
}

impl Gap {
    /// No band opened.
    pub(super) const NONE: Self = Self {
        start: usize::MAX,
        count: 0,
    };

    pub(super) fn new(start: usize, count: usize) -> Self {
        Self { start, count }
    }
}

/// `current + count`, or `OutOfMemory` for the shape that overflowed.
pub(super) fn grown(
    current: usize,
    count: usize,
    requested: impl FnOnce(usize) -> Bounds2D,
) -> Result<usize, CollectionError> {
    current
        .checked_add(count)
        .ok_or_else(|| CollectionError::OutOfMemory {
            requested: requested(usize::MAX),
        })
}

impl<T: Default> List2D<T> {
    /// Capacity needed to hold `rows x columns` live cells.
    ///
    /// Each dimension already large enough keeps its capacity; otherwise
    /// the request is multiplied by the growth factor.
    pub(super) fn ensured_capacity(&self, rows: usize, columns: usize) -> Bounds2D {
        let grow = |requested: usize, current: usize| {
            if requested > current {
                requested
                    .checked_mul(self.growth_factor)
                    .unwrap_or(usize::MAX)
            } else {
                current
            }
        };
        Bounds2D::new(
            grow(rows, self.capacity.rows()),
            grow(columns, self.capacity.columns()),
        )
    }

    /// Move every live cell into a fresh buffer of `new_capacity`,
    /// opening `rows_gap` and `columns_gap` as bands of default cells.
    ///
    /// All or nothing: the allocation happens before any cell moves.
    /// Callers update `bounds` and `version`.
    pub(super) fn relayout(
        &mut self,
        new_capacity: Bounds2D,
        rows_gap: Gap,
        columns_gap: Gap,
    ) -> Result<(), CollectionError> {
        let len = buffer::cell_count(new_capacity)?;
        let mut items = buffer::reserve(new_capacity)?;

        let rows = self.bounds.rows();
        let columns = self.bounds.columns();
        let stride = self.capacity.columns();
        let new_stride = new_capacity.columns();
        debug_assert!(rows + rows_gap.count <= new_capacity.rows());
        debug_assert!(columns + columns_gap.count <= new_stride);

        let split = columns_gap.start.min(columns);
        let tail = new_stride - columns - columns_gap.count;
        for row in 0..rows {
            if row == rows_gap.start {
                buffer::push_defaults(&mut items, rows_gap.count * new_stride);
            }
            let start = row_major::to_linear(row, 0, stride);
            let (before, after) = self.items[start..start + columns].split_at_mut(split);
            items.extend(before.iter_mut().map(mem::take));
            buffer::push_defaults(&mut items, columns_gap.count);
            items.extend(after.iter_mut().map(mem::take));
            buffer::push_defaults(&mut items, tail);
        }
        items.resize_with(len, T::default);

        log::debug!(
            "List2D relayout {} -> {} (bounds {})",
            self.capacity,
            new_capacity,
            self.bounds
        );
        self.items = items;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Grow the buffer, if needed, so `rows x columns` live cells fit.
    pub(super) fn ensure_capacity(
        &mut self,
        rows: usize,
        columns: usize,
    ) -> Result<(), CollectionError> {
        if self.capacity.encloses(Bounds2D::new(rows, columns)) {
            return Ok(());
        }
        let capacity = self.ensured_capacity(rows, columns);
        self.relayout(capacity, Gap::NONE, Gap::NONE)
    }

    /// Append `count` default rows.
    pub fn add_rows(&mut self, count: usize) -> Result<(), CollectionError> {
        self.increase_bounds(count, 0)
    }

    /// Append one default row.
    pub fn add_row(&mut self) -> Result<(), CollectionError> {
        self.add_rows(1)
    }

    /// Append `count` default columns.
    pub fn add_columns(&mut self, count: usize) -> Result<(), CollectionError> {
        self.increase_bounds(0, count)
    }

    /// Append one default column.
    pub fn add_column(&mut self) -> Result<(), CollectionError> {
        self.add_columns(1)
    }

    /// Grow the live shape by `rows` and `columns`, reallocating only if
    /// the new shape exceeds capacity.
    ///
    /// A no-op when both are 0.
    pub fn increase_bounds(&mut self, rows: usize, columns: usize) -> Result<(), CollectionError> {
        if rows == 0 && columns == 0 {
            return Ok(());
        }
        let current = self.bounds;
        let new_rows = grown(current.rows(), rows, |r| Bounds2D::new(r, current.columns()))?;
        let new_columns = grown(current.columns(), columns, |c| Bounds2D::new(new_rows, c))?;
        self.ensure_capacity(new_rows, new_columns)?;
        self.bounds = Bounds2D::new(new_rows, new_columns);
        self.bump_version();
        Ok(())
    }

    /// Add `size` to the capacity.
    ///
    /// Always reallocates, even when `size` is empty; bounds and contents
    /// are preserved.
    pub fn increase_capacity(&mut self, size: Bounds2D) -> Result<(), CollectionError> {
        let capacity = self.capacity.saturating_add(size);
        self.relayout(capacity, Gap::NONE, Gap::NONE)?;
        self.bump_version();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ListConfig;

    fn small(rows: usize, columns: usize) -> List2D<i32> {
        List2D::with_capacity(Bounds2D::new(rows, columns)).unwrap()
    }

    #[test]
    fn add_row_within_capacity_keeps_buffer() {
        let mut list = small(2, 2);
        list.add_column().unwrap();
        list.add_row().unwrap();
        assert_eq!(list.capacity(), Bounds2D::new(2, 2));
        assert_eq!(list.bounds(), Bounds2D::new(1, 1));
        assert_eq!(list.version(), 2);
    }

    #[test]
    fn growth_multiplies_requested_dimension_only() {
        let mut list = small(2, 2);
        list.increase_bounds(3, 1).unwrap();
        assert_eq!(list.capacity(), Bounds2D::new(6, 2));
    }

    #[test]
    fn relayout_preserves_contents() {
        let mut list = List2D::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        list.add_column().unwrap();
        assert_eq!(list.capacity(), Bounds2D::new(2, 8));
        assert_eq!(list.row_slice(0), Some(&[1, 2, 3, 0][..]));
        assert_eq!(list.row_slice(1), Some(&[4, 5, 6, 0][..]));
        assert!(list.items[4..8].iter().all(|&v| v == 0));
    }

    #[test]
    fn increase_capacity_always_reallocates() {
        let mut list = List2D::from_rows(vec![vec![7]]).unwrap();
        let version = list.version();
        list.increase_capacity(Bounds2D::EMPTY).unwrap();
        assert_eq!(list.capacity(), Bounds2D::new(1, 1));
        assert_eq!(list.version(), version + 1);

        list.increase_capacity(Bounds2D::new(2, 3)).unwrap();
        assert_eq!(list.capacity(), Bounds2D::new(3, 4));
        assert_eq!(list[(0, 0)], 7);
    }

    #[test]
    fn growth_factor_one_grows_exactly() {
        let mut list: List2D<u8> = List2D::with_config(ListConfig {
            initial_capacity: Bounds2D::new(1, 1),
            growth_factor: 1,
        })
        .unwrap();
        list.increase_bounds(3, 5).unwrap();
        assert_eq!(list.capacity(), Bounds2D::new(3, 5));
    }

    #[test]
    fn overflowing_bounds_is_out_of_memory_and_leaves_list_intact() {
        let mut list = List2D::from_rows(vec![vec![1, 2]]).unwrap();
        let err = list.add_rows(usize::MAX).unwrap_err();
        assert!(matches!(err, CollectionError::OutOfMemory { .. }));
        assert_eq!(list.bounds(), Bounds2D::new(1, 2));
        assert_eq!(list.row_slice(0), Some(&[1, 2][..]));
        assert_eq!(list.version(), 0);
    }

    #[test]
    fn unallocatable_capacity_is_out_of_memory() {
        let mut list = small(1, 1);
        let err = list
            .increase_capacity(Bounds2D::new(usize::MAX / 16, 4))
            .unwrap_err();
        assert!(matches!(err, CollectionError::OutOfMemory { .. }));
        assert_eq!(list.capacity(), Bounds2D::new(1, 1));
    }
}
