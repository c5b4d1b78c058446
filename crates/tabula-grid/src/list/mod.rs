//! Growable row-major 2D list with independent capacity and bounds.
//!
//! # Layout
//!
//! A [`List2D`] owns one buffer of `capacity.rows() * capacity.columns()`
//! cells. Only the top-left `bounds.rows() x bounds.columns()` rectangle
//! is live:
//!
//! ```text
//!            bounds.columns   gap_per_row
//!           |<------------->|<--------->|
//!   row 0   | a   b   c   d | .   .   . |
//!   row 1   | e   f   g   h | .   .   . |   bounds.rows
//!   row 2   | i   j   k   l | .   .   . |
//!           |---------------------------|
//!           | .   .   .   .   .   .   . |   unused rows up to capacity.rows
//! ```
//!
//! The live cell `(r, c)` sits at offset `r * capacity.columns() + c`.
//! Every cell outside the live rectangle holds `T::default()`; removals
//! and `clear` reset vacated cells so dropped values release whatever
//! they own.
//!
//! Growing either dimension past capacity reallocates the whole buffer
//! and re-strides every live row. Capacity in each dimension grows
//! independently by the configured growth factor.
//!
//! # Versioning
//!
//! Every structural mutation bumps [`List2D::version`]. Borrowing
//! iterators ([`List2D::iter`]) make mutation during iteration a compile
//! error; the detached [`ListCursor`] instead checks the version on each
//! step and reports a stale cursor as
//! [`CollectionError::InvalidState`].

mod copy;
mod edit;
mod growth;
mod iter;
mod search;
mod transform;

use std::fmt;
use std::iter::repeat_with;
use std::ops::{Index, IndexMut};

use tabula_core::{
    row_major, Bounds2D, CollectionError, Column, ColumnMut, Index2D, Indexable2D,
    IndexableMut2D, Row, RowMut,
};

use crate::array2d::{rows_bounds, Array2D};
use crate::buffer;
use crate::config::ListConfig;

pub use iter::{Iter, IterMut, ListCursor};

/// A growable rectangular list stored row-major in one strided buffer.
///
/// See the [module documentation](crate::list) for the memory layout.
#[derive(Clone)]
pub struct List2D<T> {
    /// Backing storage, `capacity.count()` cells long.
    items: Vec<T>,
    /// Live shape.
    bounds: Bounds2D,
    /// Allocated shape. Encloses `bounds` in both dimensions.
    capacity: Bounds2D,
    /// Bumped on every structural mutation.
    version: u64,
    growth_factor: usize,
}

impl<T: Default> List2D<T> {
    /// Create an empty list with the default 16x16 capacity.
    pub fn new() -> Self {
        let capacity = ListConfig::default().initial_capacity;
        Self::from_parts(
            repeat_with(T::default).take(capacity.count()).collect(),
            Bounds2D::EMPTY,
            capacity,
            ListConfig::DEFAULT_GROWTH_FACTOR,
        )
    }

    /// Create an empty list with the given capacity.
    ///
    /// Returns [`CollectionError::OutOfMemory`] if the capacity cannot be
    /// allocated.
    pub fn with_capacity(capacity: Bounds2D) -> Result<Self, CollectionError> {
        Self::with_config(ListConfig::new(capacity))
    }

    /// Create an empty list from a validated configuration.
    pub fn with_config(config: ListConfig) -> Result<Self, CollectionError> {
        config.validate()?;
        Ok(Self::from_parts(
            buffer::defaulted(config.initial_capacity)?,
            Bounds2D::EMPTY,
            config.initial_capacity,
            config.growth_factor,
        ))
    }
}

impl<T> List2D<T> {
    /// Assemble a list; `items` must be exactly `capacity.count()` long
    /// with every cell outside `bounds` defaulted.
    pub(crate) fn from_parts(
        items: Vec<T>,
        bounds: Bounds2D,
        capacity: Bounds2D,
        growth_factor: usize,
    ) -> Self {
        debug_assert!(capacity.encloses(bounds), "capacity must enclose bounds");
        debug_assert_eq!(items.len(), capacity.count());
        Self {
            items,
            bounds,
            capacity,
            version: 0,
            growth_factor,
        }
    }

    /// Build from nested rows; capacity equals the resulting bounds.
    ///
    /// Returns [`CollectionError::InvalidArgument`] for ragged rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, CollectionError> {
        let bounds = rows_bounds(&rows)?;
        let items = rows.into_iter().flatten().collect();
        Ok(Self::from_parts(
            items,
            bounds,
            bounds,
            ListConfig::DEFAULT_GROWTH_FACTOR,
        ))
    }

    /// Copy a native rectangular array; capacity equals its shape.
    pub fn from_native<const R: usize, const C: usize>(source: &[[T; C]; R]) -> Self
    where
        T: Clone,
    {
        Array2D::from_native(source).into()
    }

    /// Copy an [`Array2D`]; capacity equals its shape.
    pub fn from_array_2d(source: &Array2D<T>) -> Self
    where
        T: Clone,
    {
        source.clone().into()
    }

    /// Live shape.
    pub fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    /// Allocated shape.
    pub fn capacity(&self) -> Bounds2D {
        self.capacity
    }

    /// Number of live rows.
    pub fn rows(&self) -> usize {
        self.bounds.rows()
    }

    /// Number of live columns.
    pub fn columns(&self) -> usize {
        self.bounds.columns()
    }

    /// Number of live cells.
    pub fn count(&self) -> usize {
        self.bounds.count()
    }

    /// `true` if there are no live cells.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Structural mutation counter.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Growth multiplier this list was configured with.
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// The live cell at `index`, or `None` if out of bounds.
    pub fn get(&self, index: Index2D) -> Option<&T> {
        let (row, column) = index.to_unsigned()?;
        self.cell(row, column)
    }

    /// The live cell at `index` mutably, or `None` if out of bounds.
    pub fn get_mut(&mut self, index: Index2D) -> Option<&mut T> {
        let (row, column) = index.to_unsigned()?;
        self.cell_mut(row, column)
    }

    /// The live cells of `row`, or `None` if out of bounds.
    pub fn row_slice(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows() {
            return None;
        }
        let start = self.offset(row, 0);
        Some(&self.items[start..start + self.columns()])
    }

    /// The live cells of `row` mutably, or `None` if out of bounds.
    pub fn row_slice_mut(&mut self, row: usize) -> Option<&mut [T]> {
        if row >= self.rows() {
            return None;
        }
        let start = self.offset(row, 0);
        let end = start + self.columns();
        Some(&mut self.items[start..end])
    }

    /// Iterate the live part of each row, top to bottom.
    pub fn row_slices(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows()).filter_map(move |row| self.row_slice(row))
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

    /// Buffer offset of a live `(row, column)`.
    fn offset(&self, row: usize, column: usize) -> usize {
        row_major::to_linear(row, column, self.capacity.columns())
    }

    /// Unused cells at the end of every row.
    fn gap_per_row(&self) -> usize {
        row_major::gap_per_row(self.capacity.columns(), self.bounds.columns())
    }

    /// Live index of a buffer offset.
    fn index_at(&self, offset: usize) -> Index2D {
        let (row, column) = row_major::from_linear(offset, self.capacity.columns());
        debug_assert!(self.bounds.contains(Index2D::from_unsigned(row, column)));
        Index2D::from_unsigned(row, column)
    }

    fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// Validate a start index for a search or sector read.
    fn check_start(&self, start: Index2D) -> Result<(usize, usize), CollectionError> {
        start
            .to_unsigned()
            .filter(|&(row, column)| row < self.rows() && column < self.columns())
            .ok_or_else(|| {
                CollectionError::out_of_range(
                    "start_index",
                    format!(
                        "{start} not in [0, {}) x [0, {})",
                        self.rows(),
                        self.columns()
                    ),
                )
            })
    }
}

impl<T: Default> Default for List2D<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Moves the array's buffer in without copying.
impl<T> From<Array2D<T>> for List2D<T> {
    fn from(source: Array2D<T>) -> Self {
        let bounds = source.bounds();
        Self::from_parts(
            source.into_vec(),
            bounds,
            bounds,
            ListConfig::DEFAULT_GROWTH_FACTOR,
        )
    }
}

impl<T> Indexable2D for List2D<T> {
    type Item = T;

    fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    fn cell(&self, row: usize, column: usize) -> Option<&T> {
        if row >= self.rows() || column >= self.columns() {
            return None;
        }
        self.items.get(self.offset(row, column))
    }
}

impl<T> IndexableMut2D for List2D<T> {
    fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        if row >= self.rows() || column >= self.columns() {
            return None;
        }
        let offset = self.offset(row, column);
        self.items.get_mut(offset)
    }
}

impl<T> Index<Index2D> for List2D<T> {
    type Output = T;

    fn index(&self, index: Index2D) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!("index {index} out of bounds {}", self.bounds),
        }
    }
}

impl<T> IndexMut<Index2D> for List2D<T> {
    fn index_mut(&mut self, index: Index2D) -> &mut T {
        let bounds = self.bounds;
        match self.get_mut(index) {
            Some(item) => item,
            None => panic!("index {index} out of bounds {bounds}"),
        }
    }
}

impl<T> Index<(usize, usize)> for List2D<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        match self.cell(row, column) {
            Some(item) => item,
            None => panic!("index ({row}, {column}) out of bounds {}", self.bounds),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for List2D<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        let bounds = self.bounds;
        match self.cell_mut(row, column) {
            Some(item) => item,
            None => panic!("index ({row}, {column}) out of bounds {bounds}"),
        }
    }
}

/// Equality over live cells only; capacity and version are ignored.
impl<T: PartialEq> PartialEq for List2D<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bounds == other.bounds && self.row_slices().eq(other.row_slices())
    }
}

impl<T: Eq> Eq for List2D<T> {}

impl<T: fmt::Debug> fmt::Debug for List2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List2D")
            .field("bounds", &self.bounds)
            .field("capacity", &self.capacity)
            .field("version", &self.version)
            .field("rows", &self.row_slices().collect::<Vec<_>>())
            .finish()
    }
}
