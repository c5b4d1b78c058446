//! Core types and traits for Tabula two-dimensional collections.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! shape and index descriptors, row-major index arithmetic, the functor
//! traits used by generic search and conversion algorithms, the search
//! result type, the error type, and the view facades shared by every
//! collection in the workspace.
//!
//! # Layout
//!
//! ```text
//! Bounds2D  (rows, columns) ≥ 0      shape and capacity descriptor
//! Index2D   (row, column) signed     rejected at use sites when out of range
//! row_major                          2D <-> 1D mapping with explicit stride
//! Predicate / Converter / Action     closures or zero-sized functors
//! FindResult<T>                      Success(T) | Failure
//! Row / Column / RowMut / ColumnMut  views over any `Indexable2D`
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod collection;
pub mod error;
pub mod functor;
pub mod index;
pub mod result;
pub mod row_major;
pub mod traits;
pub mod view;

pub use bounds::Bounds2D;
pub use collection::GrowableCollection;
pub use error::CollectionError;
pub use functor::{
    require_callback, Action, BoxedAction, BoxedConverter, BoxedPredicate, Converter, Predicate,
};
pub use index::Index2D;
pub use result::{FindResult, ItemRequestResult};
pub use traits::{Indexable2D, IndexableMut2D};
pub use view::{Column, ColumnMut, Row, RowMut};
