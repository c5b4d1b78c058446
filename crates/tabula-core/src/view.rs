//! Row and column views over rectangular collections.
//!
//! A view fixes one coordinate and translates a single index into a
//! `(row, column)` lookup on the underlying [`Indexable2D`]. Views never
//! copy; [`Row`] and [`Column`] borrow shared, [`RowMut`] and
//! [`ColumnMut`] borrow exclusively.

use std::ops::{Index, IndexMut};

use crate::error::CollectionError;
use crate::traits::{Indexable2D, IndexableMut2D};

fn check_row<C: Indexable2D + ?Sized>(source: &C, row: usize) -> Result<(), CollectionError> {
    let rows = source.bounds().rows();
    if row >= rows {
        return Err(CollectionError::out_of_range(
            "row",
            format!("{row} not in [0, {rows})"),
        ));
    }
    Ok(())
}

fn check_column<C: Indexable2D + ?Sized>(source: &C, column: usize) -> Result<(), CollectionError> {
    let columns = source.bounds().columns();
    if column >= columns {
        return Err(CollectionError::out_of_range(
            "column",
            format!("{column} not in [0, {columns})"),
        ));
    }
    Ok(())
}

/// Read-only view of one row.
#[derive(Debug)]
pub struct Row<'a, C: ?Sized> {
    source: &'a C,
    row: usize,
}

impl<C: ?Sized> Clone for Row<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Row<'_, C> {}

impl<'a, C: Indexable2D + ?Sized> Row<'a, C> {
    /// View row `row` of `source`.
    ///
    /// Returns [`CollectionError::OutOfRange`] if the row does not exist.
    pub fn new(source: &'a C, row: usize) -> Result<Self, CollectionError> {
        check_row(source, row)?;
        Ok(Self { source, row })
    }

    /// Row index within the source.
    pub fn index(&self) -> usize {
        self.row
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        self.source.bounds().columns()
    }

    /// `true` if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cell in `column`, or `None` if out of bounds.
    pub fn get(&self, column: usize) -> Option<&'a C::Item> {
        self.source.cell(self.row, column)
    }

    /// Iterate the row left to right.
    pub fn iter(&self) -> impl Iterator<Item = &'a C::Item> + 'a {
        let (source, row) = (self.source, self.row);
        (0..self.len()).filter_map(move |column| source.cell(row, column))
    }
}

impl<C: Indexable2D + ?Sized> Index<usize> for Row<'_, C> {
    type Output = C::Item;

    fn index(&self, column: usize) -> &Self::Output {
        match self.get(column) {
            Some(item) => item,
            None => panic!("column {column} out of bounds for row of length {}", self.len()),
        }
    }
}

/// Read-only view of one column.
#[derive(Debug)]
pub struct Column<'a, C: ?Sized> {
    source: &'a C,
    column: usize,
}

impl<C: ?Sized> Clone for Column<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Column<'_, C> {}

impl<'a, C: Indexable2D + ?Sized> Column<'a, C> {
    /// View column `column` of `source`.
    ///
    /// Returns [`CollectionError::OutOfRange`] if the column does not exist.
    pub fn new(source: &'a C, column: usize) -> Result<Self, CollectionError> {
        check_column(source, column)?;
        Ok(Self { source, column })
    }

    /// Column index within the source.
    pub fn index(&self) -> usize {
        self.column
    }

    /// Number of cells in the column.
    pub fn len(&self) -> usize {
        self.source.bounds().rows()
    }

    /// `true` if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cell in `row`, or `None` if out of bounds.
    pub fn get(&self, row: usize) -> Option<&'a C::Item> {
        self.source.cell(row, self.column)
    }

    /// Iterate the column top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &'a C::Item> + 'a {
        let (source, column) = (self.source, self.column);
        (0..self.len()).filter_map(move |row| source.cell(row, column))
    }
}

impl<C: Indexable2D + ?Sized> Index<usize> for Column<'_, C> {
    type Output = C::Item;

    fn index(&self, row: usize) -> &Self::Output {
        match self.get(row) {
            Some(item) => item,
            None => panic!("row {row} out of bounds for column of length {}", self.len()),
        }
    }
}

/// Mutable view of one row.
#[derive(Debug)]
pub struct RowMut<'a, C: ?Sized> {
    source: &'a mut C,
    row: usize,
}

impl<'a, C: IndexableMut2D + ?Sized> RowMut<'a, C> {
    /// View row `row` of `source` mutably.
    ///
    /// Returns [`CollectionError::OutOfRange`] if the row does not exist.
    pub fn new(source: &'a mut C, row: usize) -> Result<Self, CollectionError> {
        check_row(source, row)?;
        Ok(Self { source, row })
    }

    /// Row index within the source.
    pub fn index(&self) -> usize {
        self.row
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        self.source.bounds().columns()
    }

    /// `true` if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cell in `column`, or `None` if out of bounds.
    pub fn get(&self, column: usize) -> Option<&C::Item> {
        self.source.cell(self.row, column)
    }

    /// The cell in `column` mutably, or `None` if out of bounds.
    pub fn get_mut(&mut self, column: usize) -> Option<&mut C::Item> {
        self.source.cell_mut(self.row, column)
    }

    /// Overwrite every cell of the row with clones of `value`.
    pub fn fill(&mut self, value: C::Item)
    where
        C::Item: Clone,
    {
        for column in 0..self.len() {
            if let Some(cell) = self.source.cell_mut(self.row, column) {
                *cell = value.clone();
            }
        }
    }
}

impl<C: IndexableMut2D + ?Sized> Index<usize> for RowMut<'_, C> {
    type Output = C::Item;

    fn index(&self, column: usize) -> &Self::Output {
        let len = self.len();
        match self.get(column) {
            Some(item) => item,
            None => panic!("column {column} out of bounds for row of length {len}"),
        }
    }
}

impl<C: IndexableMut2D + ?Sized> IndexMut<usize> for RowMut<'_, C> {
    fn index_mut(&mut self, column: usize) -> &mut Self::Output {
        let len = self.len();
        match self.get_mut(column) {
            Some(item) => item,
            None => panic!("column {column} out of bounds for row of length {len}"),
        }
    }
}

/// Mutable view of one column.
#[derive(Debug)]
pub struct ColumnMut<'a, C: ?Sized> {
    source: &'a mut C,
    column: usize,
}

impl<'a, C: IndexableMut2D + ?Sized> ColumnMut<'a, C> {
    /// View column `column` of `source` mutably.
    ///
    /// Returns [`CollectionError::OutOfRange`] if the column does not exist.
    pub fn new(source: &'a mut C, column: usize) -> Result<Self, CollectionError> {
        check_column(source, column)?;
        Ok(Self { source, column })
    }

    /// Column index within the source.
    pub fn index(&self) -> usize {
        self.column
    }

    /// Number of cells in the column.
    pub fn len(&self) -> usize {
        self.source.bounds().rows()
    }

    /// `true` if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cell in `row`, or `None` if out of bounds.
    pub fn get(&self, row: usize) -> Option<&C::Item> {
        self.source.cell(row, self.column)
    }

    /// The cell in `row` mutably, or `None` if out of bounds.
    pub fn get_mut(&mut self, row: usize) -> Option<&mut C::Item> {
        self.source.cell_mut(row, self.column)
    }

    /// Overwrite every cell of the column with clones of `value`.
    pub fn fill(&mut self, value: C::Item)
    where
        C::Item: Clone,
    {
        for row in 0..self.len() {
            if let Some(cell) = self.source.cell_mut(row, self.column) {
                *cell = value.clone();
            }
        }
    }
}

impl<C: IndexableMut2D + ?Sized> Index<usize> for ColumnMut<'_, C> {
    type Output = C::Item;

    fn index(&self, row: usize) -> &Self::Output {
        let len = self.len();
        match self.get(row) {
            Some(item) => item,
            None => panic!("row {row} out of bounds for column of length {len}"),
        }
    }
}

impl<C: IndexableMut2D + ?Sized> IndexMut<usize> for ColumnMut<'_, C> {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        let len = self.len();
        match self.get_mut(row) {
            Some(item) => item,
            None => panic!("row {row} out of bounds for column of length {len}"),
        }
    }
}
