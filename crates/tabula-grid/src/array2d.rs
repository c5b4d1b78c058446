//! Fixed-size row-major 2D array.
//!
//! [`Array2D`] owns exactly `rows * columns` cells with no capacity
//! slack. Its shape is fixed at construction. It is the interchange
//! format for [`List2D`](crate::List2D): a list can be built from one,
//! copied into one, or exported as one.

use std::ops::{Index, IndexMut};

use tabula_core::{
    row_major, Bounds2D, CollectionError, Column, ColumnMut, Index2D, Indexable2D,
    IndexableMut2D, Row, RowMut,
};

use crate::buffer;
use crate::destination::{plan_copy, plan_slice_copy, CopyDestination2D};

/// A fixed-shape rectangular array stored row-major in one buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Array2D<T> {
    items: Vec<T>,
    bounds: Bounds2D,
}

impl<T> Array2D<T> {
    /// Allocate an array of default cells.
    ///
    /// Returns [`CollectionError::OutOfMemory`] if the shape cannot be
    /// allocated.
    pub fn new(bounds: Bounds2D) -> Result<Self, CollectionError>
    where
        T: Default,
    {
        Ok(Self {
            items: buffer::defaulted(bounds)?,
            bounds,
        })
    }

    /// Allocate an array with every cell a clone of `value`.
    pub fn filled(bounds: Bounds2D, value: T) -> Result<Self, CollectionError>
    where
        T: Clone,
    {
        let len = buffer::cell_count(bounds)?;
        let mut items = buffer::reserve(bounds)?;
        items.resize(len, value);
        Ok(Self { items, bounds })
    }

    /// Wrap a row-major vector.
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `items.len()` is
    /// not `bounds.count()`.
    pub fn from_vec(bounds: Bounds2D, items: Vec<T>) -> Result<Self, CollectionError> {
        if bounds.checked_count() != Some(items.len()) {
            return Err(CollectionError::invalid_argument(
                "items",
                format!("length {} does not match bounds {bounds}", items.len()),
            ));
        }
        Ok(Self { items, bounds })
    }

    /// Build from nested rows.
    ///
    /// Returns [`CollectionError::InvalidArgument`] if the rows are not
    /// all the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, CollectionError> {
        let bounds = rows_bounds(&rows)?;
        let items = rows.into_iter().flatten().collect();
        Ok(Self { items, bounds })
    }

    /// Copy a native rectangular array.
    pub fn from_native<const R: usize, const C: usize>(source: &[[T; C]; R]) -> Self
    where
        T: Clone,
    {
        Self {
            items: source.iter().flat_map(|row| row.iter().cloned()).collect(),
            bounds: Bounds2D::new(R, C),
        }
    }

    /// Shape of the array.
    pub fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.bounds.rows()
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.bounds.columns()
    }

    /// Number of cells.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// `true` if the array holds no cells.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cell at `index`, or `None` if out of bounds.
    pub fn get(&self, index: Index2D) -> Option<&T> {
        let (row, column) = index.to_unsigned()?;
        self.cell(row, column)
    }

    /// The cell at `index` mutably, or `None` if out of bounds.
    pub fn get_mut(&mut self, index: Index2D) -> Option<&mut T> {
        let (row, column) = index.to_unsigned()?;
        self.cell_mut(row, column)
    }

    /// The cells of `row`, or `None` if out of bounds.
    pub fn row_slice(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows() {
            return None;
        }
        let start = row_major::to_linear(row, 0, self.columns());
        Some(&self.items[start..start + self.columns()])
    }

    /// The cells of `row` mutably, or `None` if out of bounds.
    pub fn row_slice_mut(&mut self, row: usize) -> Option<&mut [T]> {
        if row >= self.rows() {
            return None;
        }
        let columns = self.columns();
        let start = row_major::to_linear(row, 0, columns);
        Some(&mut self.items[start..start + columns])
    }

    /// View of one row.
    pub fn row(&self, row: usize) -> Result<Row<'_, Self>, CollectionError> {
        Row::new(self, row)
    }

    /// Mutable view of one row.
    pub fn row_mut(&mut self, row: usize) -> Result<RowMut<'_, Self>, CollectionError> {
        RowMut::new(self, row)
    }

    /// View of one column.
    pub fn column(&self, column: usize) -> Result<Column<'_, Self>, CollectionError> {
        Column::new(self, column)
    }

    /// Mutable view of one column.
    pub fn column_mut(&mut self, column: usize) -> Result<ColumnMut<'_, Self>, CollectionError> {
        ColumnMut::new(self, column)
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// All cells in row-major order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Take the row-major backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Iterate cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate cells mutably in row-major order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Overwrite every cell with clones of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.items.fill(value);
    }

    /// Copy the whole array into `destination` at its origin.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if the destination is smaller
    /// than this array in either dimension.
    pub fn copy_to<D>(&self, destination: &mut D) -> Result<(), CollectionError>
    where
        T: Clone,
        D: CopyDestination2D<T> + ?Sized,
    {
        self.copy_to_at(destination, Index2D::ORIGIN)
    }

    /// Copy the whole array into `destination` at `destination_index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::OutOfRange`] for an index outside the
    /// destination, [`CollectionError::InvalidArgument`] if the array does
    /// not fit from that index.
    pub fn copy_to_at<D>(
        &self,
        destination: &mut D,
        destination_index: Index2D,
    ) -> Result<(), CollectionError>
    where
        T: Clone,
        D: CopyDestination2D<T> + ?Sized,
    {
        let plan = plan_copy(
            self.bounds,
            Index2D::ORIGIN,
            self.bounds,
            destination.destination_bounds(),
            destination_index,
        )?;
        let columns = self.columns();
        for (offset, line) in self.items.chunks_exact(columns.max(1)).enumerate() {
            destination
                .row_segment_mut(plan.destination_row + offset, plan.destination_column, columns)
                .clone_from_slice(&line[..columns]);
        }
        Ok(())
    }

    /// Copy all cells row-major into `destination` from `destination_index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::OutOfRange`] if `destination_index` is past the
    /// end of the slice, [`CollectionError::InvalidArgument`] if the cells
    /// do not fit.
    pub fn copy_to_slice(
        &self,
        destination: &mut [T],
        destination_index: usize,
    ) -> Result<(), CollectionError>
    where
        T: Clone,
    {
        plan_slice_copy(
            self.bounds,
            Index2D::ORIGIN,
            self.bounds,
            destination.len(),
            destination_index,
        )?;
        destination[destination_index..destination_index + self.items.len()]
            .clone_from_slice(&self.items);
        Ok(())
    }
}

/// Shape of a nested-rows input, rejecting ragged rows.
pub(crate) fn rows_bounds<T>(rows: &[Vec<T>]) -> Result<Bounds2D, CollectionError> {
    let columns = rows.first().map_or(0, Vec::len);
    if let Some((row, ragged)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
        return Err(CollectionError::invalid_argument(
            "rows",
            format!(
                "row {row} has {} columns, expected {columns}",
                ragged.len()
            ),
        ));
    }
    Ok(Bounds2D::new(rows.len(), columns))
}

impl<T> Indexable2D for Array2D<T> {
    type Item = T;

    fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    fn cell(&self, row: usize, column: usize) -> Option<&T> {
        if row >= self.rows() || column >= self.columns() {
            return None;
        }
        self.items.get(row_major::to_linear(row, column, self.columns()))
    }
}

impl<T> IndexableMut2D for Array2D<T> {
    fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        if row >= self.rows() || column >= self.columns() {
            return None;
        }
        let columns = self.columns();
        self.items.get_mut(row_major::to_linear(row, column, columns))
    }
}

impl<T> CopyDestination2D<T> for Array2D<T> {
    fn destination_bounds(&self) -> Bounds2D {
        self.bounds
    }

    fn row_segment_mut(&mut self, row: usize, column: usize, len: usize) -> &mut [T] {
        let start = row_major::to_linear(row, column, self.columns());
        &mut self.items[start..start + len]
    }
}

impl<T> Index<Index2D> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Index2D) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!("index {index} out of bounds {}", self.bounds),
        }
    }
}

impl<T> IndexMut<Index2D> for Array2D<T> {
    fn index_mut(&mut self, index: Index2D) -> &mut T {
        let bounds = self.bounds;
        match self.get_mut(index) {
            Some(item) => item,
            None => panic!("index {index} out of bounds {bounds}"),
        }
    }
}

impl<T> Index<(usize, usize)> for Array2D<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        match self.cell(row, column) {
            Some(item) => item,
            None => panic!("index ({row}, {column}) out of bounds {}", self.bounds),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Array2D<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        let bounds = self.bounds;
        match self.cell_mut(row, column) {
            Some(item) => item,
            None => panic!("index ({row}, {column}) out of bounds {bounds}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a Array2D<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
