//! The [`Bounds2D`] shape descriptor.

use std::fmt;

use crate::error::CollectionError;
use crate::index::Index2D;

/// A non-negative `(rows, columns)` extent.
///
/// Used both as the live shape of a collection and as the allocated
/// capacity of a buffer. Components are stored unsigned, so the
/// non-negativity invariant holds by construction; signed input goes
/// through [`Bounds2D::from_signed`], which rejects negative components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds2D {
    rows: usize,
    columns: usize,
}

impl Bounds2D {
    /// The `0x0` extent.
    pub const EMPTY: Self = Self::new(0, 0);

    /// Create bounds from unsigned components.
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Create bounds from signed components.
    ///
    /// Returns [`CollectionError::InvalidArgument`] if either component
    /// is negative.
    pub fn from_signed(rows: isize, columns: isize) -> Result<Self, CollectionError> {
        if rows < 0 {
            return Err(CollectionError::invalid_argument(
                "rows",
                format!("must be non-negative, got {rows}"),
            ));
        }
        if columns < 0 {
            return Err(CollectionError::invalid_argument(
                "columns",
                format!("must be non-negative, got {columns}"),
            ));
        }
        Ok(Self::new(rows as usize, columns as usize))
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Total cell count, saturating at `usize::MAX`.
    pub const fn count(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// Total cell count, or `None` if it does not fit in `usize`.
    pub const fn checked_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// `true` if the extent holds no cells.
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// `true` if `index` addresses a cell inside these bounds.
    pub fn contains(&self, index: Index2D) -> bool {
        index
            .to_unsigned()
            .is_some_and(|(row, column)| row < self.rows && column < self.columns)
    }

    /// `true` if `other` fits inside `self` in both dimensions.
    pub const fn encloses(&self, other: Bounds2D) -> bool {
        other.rows <= self.rows && other.columns <= self.columns
    }

    /// Component-wise sum, saturating at `usize::MAX`.
    pub const fn saturating_add(self, other: Bounds2D) -> Self {
        Self::new(
            self.rows.saturating_add(other.rows),
            self.columns.saturating_add(other.columns),
        )
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

impl From<(usize, usize)> for Bounds2D {
    fn from((rows, columns): (usize, usize)) -> Self {
        Self::new(rows, columns)
    }
}

impl TryFrom<(isize, isize)> for Bounds2D {
    type Error = CollectionError;

    fn try_from((rows, columns): (isize, isize)) -> Result<Self, Self::Error> {
        Self::from_signed(rows, columns)
    }
}
