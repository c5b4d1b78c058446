//! The [`Index2D`] cell address.

use std::fmt;

use crate::row_major;

/// A signed `(row, column)` cell address.
///
/// Out-of-range values are legal to construct; collections reject them
/// with [`CollectionError::OutOfRange`](crate::CollectionError::OutOfRange)
/// where they are used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index2D {
    row: isize,
    column: isize,
}

impl Index2D {
    /// The `(0, 0)` address.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create an address from signed components.
    pub const fn new(row: isize, column: isize) -> Self {
        Self { row, column }
    }

    /// Create an address from unsigned components.
    ///
    /// Collection lengths never exceed `isize::MAX`, so any in-bounds
    /// position converts losslessly.
    pub const fn from_unsigned(row: usize, column: usize) -> Self {
        Self::new(row as isize, column as isize)
    }

    /// Row component.
    pub const fn row(&self) -> isize {
        self.row
    }

    /// Column component.
    pub const fn column(&self) -> isize {
        self.column
    }

    /// Both components as `usize`, or `None` if either is negative.
    pub const fn to_unsigned(&self) -> Option<(usize, usize)> {
        if self.row < 0 || self.column < 0 {
            None
        } else {
            Some((self.row as usize, self.column as usize))
        }
    }

    /// Row-major linear index for a collection `columns` wide.
    ///
    /// Returns `None` for negative components or on overflow. No upper
    /// bound check is made against `columns`.
    pub fn to_linear(&self, columns: usize) -> Option<usize> {
        let (row, column) = self.to_unsigned()?;
        row.checked_mul(columns)?.checked_add(column)
    }

    /// Inverse of [`to_linear`](Self::to_linear).
    ///
    /// Returns `None` if `columns` is zero, since no linear index maps
    /// into a collection without columns.
    pub fn from_linear(linear: usize, columns: usize) -> Option<Self> {
        if columns == 0 {
            return None;
        }
        let (row, column) = row_major::from_linear(linear, columns);
        Some(Self::from_unsigned(row, column))
    }
}

impl fmt::Display for Index2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(isize, isize)> for Index2D {
    fn from((row, column): (isize, isize)) -> Self {
        Self::new(row, column)
    }
}
