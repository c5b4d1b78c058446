//! Test fixtures for Tabula development.
//!
//! Provides canonical sample grids, builders that lay a [`List2D`] out
//! with spare capacity so row gaps are exercised, and [`DropCounter`] for
//! observing when cells release their values.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use tabula_core::Bounds2D;
use tabula_grid::List2D;

pub use fixtures::{DropCounter, DropProbe};

/// The 3x3 grid used across the search tests.
pub const SAMPLE_3X3: [[i32; 3]; 3] = [[2, 3, 5], [4, 9, 1], [8, 2, 3]];

/// [`SAMPLE_3X3`] as nested rows.
pub fn sample_rows() -> Vec<Vec<i32>> {
    SAMPLE_3X3.iter().map(|row| row.to_vec()).collect()
}

/// Build a list from nested rows with `spare` extra capacity.
///
/// Panics on ragged rows; fixtures are expected to be rectangular.
pub fn list_from_rows<T: Default>(rows: Vec<Vec<T>>, spare: Bounds2D) -> List2D<T> {
    let mut list = List2D::from_rows(rows).expect("fixture rows must be rectangular");
    list.increase_capacity(spare)
        .expect("fixture capacity must be allocatable");
    list
}

/// [`SAMPLE_3X3`] in a list with 2 spare rows and 3 spare columns.
pub fn sample_list() -> List2D<i32> {
    list_from_rows(sample_rows(), Bounds2D::new(2, 3))
}

/// A `rows x columns` list whose cells count up from 0 row-major.
pub fn counting_list(rows: usize, columns: usize) -> List2D<usize> {
    let cells = (0..rows)
        .map(|row| (0..columns).map(|column| row * columns + column).collect())
        .collect();
    list_from_rows(cells, Bounds2D::new(1, 1))
}
