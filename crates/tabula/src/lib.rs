//! Tabula: two-dimensional rectangular collections with independent
//! capacity and bounds.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Tabula sub-crates. For most users, adding `tabula` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! // Start from a native array; capacity equals its shape.
//! let mut list = List2D::from_native(&[[2, 3, 5], [4, 9, 1], [8, 2, 3]]);
//!
//! // Grow by one row and one column; the buffer re-strides once.
//! list.add_row().unwrap();
//! list.insert_column(0).unwrap();
//! assert_eq!(list.bounds(), Bounds2D::new(4, 4));
//! assert_eq!(list[(0, 1)], 2);
//!
//! // Search a 2x2 sector anchored at (1, 1).
//! let found = list
//!     .find_index_2d_sector(Index2D::new(1, 1), Bounds2D::new(2, 2), |x: &i32| *x > 5)
//!     .unwrap();
//! assert_eq!(found, FindResult::Success(Index2D::new(1, 2)));
//!
//! // Export the live cells.
//! let array: Array2D<i32> = list.to_array_2d().unwrap();
//! assert_eq!(array.count(), 16);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tabula-core` | Shape and index descriptors, functors, `FindResult`, errors, views |
//! | [`grid`] | `tabula-grid` | `Array2D`, `List2D`, configuration, copy destinations |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core descriptors, traits, and errors (`tabula-core`).
///
/// Contains [`types::Bounds2D`], [`types::Index2D`], the row-major
/// helpers in [`types::row_major`], the functor traits
/// ([`types::Predicate`], [`types::Converter`], [`types::Action`]) and
/// [`types::CollectionError`].
pub use tabula_core as types;

/// Collections (`tabula-grid`).
///
/// [`grid::Array2D`] for fixed shapes, [`grid::List2D`] for growable
/// ones.
pub use tabula_grid as grid;

/// Common imports for typical Tabula usage.
///
/// ```rust
/// use tabula::prelude::*;
/// ```
pub mod prelude {
    // Descriptors and results
    pub use tabula_core::{Bounds2D, FindResult, Index2D, ItemRequestResult};

    // Functors
    pub use tabula_core::{
        Action, BoxedAction, BoxedConverter, BoxedPredicate, Converter, Predicate,
    };

    // Traits and views
    pub use tabula_core::{
        Column, ColumnMut, GrowableCollection, Indexable2D, IndexableMut2D, Row, RowMut,
    };

    // Errors
    pub use tabula_core::CollectionError;

    // Collections
    pub use tabula_grid::{Array2D, CopyDestination2D, List2D, ListConfig, ListCursor};
}
