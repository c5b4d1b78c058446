//! Two-dimensional collections for Tabula.
//!
//! - [`Array2D`]: a fixed-shape, tightly packed row-major buffer.
//! - [`List2D`]: a growable row-major list whose capacity and live bounds
//!   are tracked separately per dimension. Rows and columns can be
//!   appended, inserted, and removed; searches run over the whole list, a
//!   linear range, or a rectangular sector.
//!
//! Both share the view types and functor traits from [`tabula_core`], and
//! both can be copied into any [`CopyDestination2D`].
//!
//! # Example
//!
//! ```
//! use tabula_core::{Bounds2D, FindResult, Index2D};
//! use tabula_grid::List2D;
//!
//! let mut list = List2D::from_rows(vec![vec![2, 3, 5], vec![4, 9, 1]]).unwrap();
//! list.add_row().unwrap();
//! list[(2, 0)] = 8;
//!
//! assert_eq!(list.bounds(), Bounds2D::new(3, 3));
//! assert_eq!(
//!     list.find_index_2d(|x: &i32| *x > 5),
//!     FindResult::Success(Index2D::new(1, 1)),
//! );
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array2d;
mod buffer;
pub mod config;
pub mod destination;
pub mod list;

pub use array2d::Array2D;
pub use config::ListConfig;
pub use destination::CopyDestination2D;
pub use list::{Iter, IterMut, List2D, ListCursor};
