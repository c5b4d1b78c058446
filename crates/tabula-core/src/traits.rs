//! Indexing traits implemented by every rectangular collection.

use crate::bounds::Bounds2D;

/// Read access to a rectangular collection by `(row, column)`.
///
/// Implemented by `Array2D` and `List2D`; the view types in
/// [`view`](crate::view) are generic over this trait.
pub trait Indexable2D {
    /// Element type.
    type Item;

    /// Live shape of the collection.
    fn bounds(&self) -> Bounds2D;

    /// The element at `(row, column)`, or `None` if out of bounds.
    fn cell(&self, row: usize, column: usize) -> Option<&Self::Item>;
}

/// Mutable access to a rectangular collection by `(row, column)`.
pub trait IndexableMut2D: Indexable2D {
    /// The element at `(row, column)`, or `None` if out of bounds.
    fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut Self::Item>;
}
