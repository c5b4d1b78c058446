//! Row and column insertion, removal, and clearing.
//!
//! Unused cells always hold `T::default()`, so in-place shifts are
//! rotations: rotating the trailing default band into position opens an
//! insertion gap, and rotating removed cells past the live edge leaves
//! them ready to be reset.

use tabula_core::{Bounds2D, CollectionError};

use super::growth::{grown, Gap};
use super::List2D;

impl<T: Default> List2D<T> {
    /// Insert `count` default rows before row `start`.
    ///
    /// `start` may equal [`rows`](Self::rows) to append. A `count` of 0 is a
    /// no-op.
    pub fn insert_rows(&mut self, start: usize, count: usize) -> Result<(), CollectionError> {
        let (rows, columns) = (self.rows(), self.columns());
        if start > rows {
            return Err(CollectionError::out_of_range(
                "start_index",
                format!("row {start} not in [0, {rows}]"),
            ));
        }
        if count == 0 {
            return Ok(());
        }
        let new_rows = grown(rows, count, |r| Bounds2D::new(r, columns))?;
        if new_rows > self.capacity.rows() {
            let capacity = self.ensured_capacity(new_rows, columns);
            self.relayout(capacity, Gap::new(start, count), Gap::NONE)?;
        } else {
            let stride = self.capacity.columns();
            self.items[start * stride..new_rows * stride].rotate_right(count * stride);
        }
        self.bounds = Bounds2D::new(new_rows, columns);
        self.bump_version();
        Ok(())
    }

    /// Insert one default row before row `start`.
    pub fn insert_row(&mut self, start: usize) -> Result<(), CollectionError> {
        self.insert_rows(start, 1)
    }

    /// Insert `count` default columns before column `start`.
    ///
    /// `start` may equal [`columns`](Self::columns) to append. A `count` of
    /// 0 is a no-op.
    pub fn insert_columns(&mut self, start: usize, count: usize) -> Result<(), CollectionError> {
        let (rows, columns) = (self.rows(), self.columns());
        if start > columns {
            return Err(CollectionError::out_of_range(
                "start_index",
                format!("column {start} not in [0, {columns}]"),
            ));
        }
        if count == 0 {
            return Ok(());
        }
        let new_columns = grown(columns, count, |c| Bounds2D::new(rows, c))?;
        if new_columns > self.capacity.columns() {
            let capacity = self.ensured_capacity(rows, new_columns);
            self.relayout(capacity, Gap::NONE, Gap::new(start, count))?;
        } else {
            for row in 0..rows {
                let base = self.offset(row, 0);
                self.items[base + start..base + new_columns].rotate_right(count);
            }
        }
        self.bounds = Bounds2D::new(rows, new_columns);
        self.bump_version();
        Ok(())
    }

    /// Insert one default column before column `start`.
    pub fn insert_column(&mut self, start: usize) -> Result<(), CollectionError> {
        self.insert_columns(start, 1)
    }

    /// Remove `count` rows starting at row `start`.
    ///
    /// Vacated cells are reset to `T::default()`, dropping the removed
    /// values. Capacity is unchanged.
    pub fn remove_rows(&mut self, start: usize, count: usize) -> Result<(), CollectionError> {
        let (rows, columns) = (self.rows(), self.columns());
        if start >= rows {
            return Err(CollectionError::out_of_range(
                "start_index",
                format!("row {start} not in [0, {rows})"),
            ));
        }
        if count > rows - start {
            return Err(CollectionError::invalid_argument(
                "count",
                format!("{count} rows from row {start} exceeds {rows} rows"),
            ));
        }
        if count == 0 {
            return Ok(());
        }
        let stride = self.capacity.columns();
        self.items[start * stride..rows * stride].rotate_left(count * stride);
        self.items[(rows - count) * stride..rows * stride].fill_with(T::default);
        self.bounds = Bounds2D::new(rows - count, columns);
        self.bump_version();
        Ok(())
    }

    /// Remove one row.
    pub fn remove_row(&mut self, start: usize) -> Result<(), CollectionError> {
        self.remove_rows(start, 1)
    }

    /// Remove `count` columns starting at column `start`.
    ///
    /// Vacated cells are reset to `T::default()`. Capacity is unchanged.
    pub fn remove_columns(&mut self, start: usize, count: usize) -> Result<(), CollectionError> {
        let (rows, columns) = (self.rows(), self.columns());
        if start >= columns {
            return Err(CollectionError::out_of_range(
                "start_index",
                format!("column {start} not in [0, {columns})"),
            ));
        }
        if count > columns - start {
            return Err(CollectionError::invalid_argument(
                "count",
                format!("{count} columns from column {start} exceeds {columns} columns"),
            ));
        }
        if count == 0 {
            return Ok(());
        }
        for row in 0..rows {
            let base = self.offset(row, 0);
            let line = &mut self.items[base..base + columns];
            line[start..].rotate_left(count);
            line[columns - count..].fill_with(T::default);
        }
        self.bounds = Bounds2D::new(rows, columns - count);
        self.bump_version();
        Ok(())
    }

    /// Remove one column.
    pub fn remove_column(&mut self, start: usize) -> Result<(), CollectionError> {
        self.remove_columns(start, 1)
    }

    /// Reset every cell to `T::default()` and shrink bounds to 0x0.
    ///
    /// Capacity is kept. A no-op, leaving bounds and version alone, when
    /// there are no live cells.
    pub fn clear(&mut self) {
        if self.count() == 0 {
            return;
        }
        log::trace!("List2D clear {} (capacity {})", self.bounds, self.capacity);
        self.items.fill_with(T::default);
        self.bounds = Bounds2D::EMPTY;
        self.bump_version();
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    fn sample() -> List2D<i32> {
        List2D::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap()
    }

    fn rows_of(list: &List2D<i32>) -> Vec<Vec<i32>> {
        list.row_slices().map(<[i32]>::to_vec).collect()
    }

    #[test]
    fn insert_rows_in_place_opens_default_band() {
        let mut list = sample();
        list.increase_capacity(Bounds2D::new(4, 0)).unwrap();
        list.insert_rows(1, 2).unwrap();
        assert_eq!(list.capacity(), Bounds2D::new(7, 3));
        assert_eq!(
            rows_of(&list),
            vec![
                vec![1, 2, 3],
                vec![0, 0, 0],
                vec![0, 0, 0],
                vec![4, 5, 6],
                vec![7, 8, 9],
            ]
        );
    }

    #[test]
    fn insert_rows_with_relayout() {
        let mut list = sample();
        list.insert_row(0).unwrap();
        assert_eq!(list.capacity(), Bounds2D::new(8, 3));
        assert_eq!(rows_of(&list)[0], vec![0, 0, 0]);
        assert_eq!(rows_of(&list)[3], vec![7, 8, 9]);
    }

    #[test]
    fn insert_columns_in_place_and_with_relayout() {
        let mut list = sample();
        list.insert_column(3).unwrap();
        assert_eq!(list.capacity(), Bounds2D::new(3, 8));
        list.insert_columns(1, 2).unwrap();
        assert_eq!(list.capacity(), Bounds2D::new(3, 8));
        assert_eq!(
            rows_of(&list),
            vec![
                vec![1, 0, 0, 2, 3, 0],
                vec![4, 0, 0, 5, 6, 0],
                vec![7, 0, 0, 8, 9, 0],
            ]
        );
    }

    #[test]
    fn insert_start_past_end_is_out_of_range() {
        let mut list = sample();
        assert!(matches!(
            list.insert_rows(4, 1),
            Err(CollectionError::OutOfRange { .. })
        ));
        assert!(matches!(
            list.insert_columns(4, 1),
            Err(CollectionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn zero_count_edits_do_not_bump_version() {
        let mut list = sample();
        list.insert_rows(3, 0).unwrap();
        list.insert_columns(0, 0).unwrap();
        list.remove_rows(2, 0).unwrap();
        list.remove_columns(2, 0).unwrap();
        list.add_rows(0).unwrap();
        assert_eq!(list.version(), 0);
    }

    #[test]
    fn remove_rows_shifts_up_and_resets_tail() {
        let mut list = sample();
        list.remove_rows(0, 2).unwrap();
        assert_eq!(rows_of(&list), vec![vec![7, 8, 9]]);
        assert!(list.items[3..].iter().all(|&v| v == 0));
    }

    #[test]
    fn remove_columns_shifts_left_and_resets_tail() {
        let mut list = sample();
        list.remove_column(1).unwrap();
        assert_eq!(rows_of(&list), vec![vec![1, 3], vec![4, 6], vec![7, 9]]);
        assert_eq!(list.items, vec![1, 3, 0, 4, 6, 0, 7, 9, 0]);
    }

    #[test]
    fn remove_arguments_validated() {
        let mut list = sample();
        assert!(matches!(
            list.remove_rows(3, 1),
            Err(CollectionError::OutOfRange { .. })
        ));
        assert!(matches!(
            list.remove_rows(1, 3),
            Err(CollectionError::InvalidArgument { argument: "count", .. })
        ));
        assert!(matches!(
            list.remove_columns(0, 4),
            Err(CollectionError::InvalidArgument { argument: "count", .. })
        ));
        assert_eq!(list.version(), 0);
    }

    #[test]
    fn removal_releases_removed_values() {
        let shared = Rc::new(());
        let mut list: List2D<Option<Rc<()>>> = List2D::with_capacity(Bounds2D::new(4, 4)).unwrap();
        list.add_rows(2).unwrap();
        list.add_columns(2).unwrap();
        for row in 0..2 {
            for column in 0..2 {
                list[(row, column)] = Some(Rc::clone(&shared));
            }
        }
        assert_eq!(Rc::strong_count(&shared), 5);

        list.remove_row(0).unwrap();
        assert_eq!(Rc::strong_count(&shared), 3);
        list.remove_column(1).unwrap();
        assert_eq!(Rc::strong_count(&shared), 2);
        assert!(list.items.iter().filter(|cell| cell.is_some()).count() == 1);

        list.clear();
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn clear_without_live_cells_is_a_no_op() {
        let mut list: List2D<i32> = List2D::new();
        list.add_rows(2).unwrap();
        let version = list.version();
        list.clear();
        assert_eq!(list.bounds(), Bounds2D::new(2, 0));
        assert_eq!(list.version(), version);
    }

    #[test]
    fn clear_keeps_capacity_and_is_idempotent() {
        let mut list = sample();
        list.clear();
        assert_eq!(list.bounds(), Bounds2D::EMPTY);
        assert_eq!(list.capacity(), Bounds2D::new(3, 3));
        let version = list.version();
        list.clear();
        assert_eq!(list.version(), version);
    }
}
