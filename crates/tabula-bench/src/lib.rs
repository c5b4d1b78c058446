//! Benchmark profiles for the Tabula collections.
//!
//! - [`square_list`]: an NxN list filled with deterministic pseudo-random
//!   values, laid out with spare capacity so traversals cross row gaps.
//! - [`scatter`]: the deterministic value generator behind it.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tabula_core::Bounds2D;
use tabula_grid::List2D;

/// Deterministic pseudo-random value in `0..modulus` for cell `i`.
pub fn scatter(i: u64, modulus: u64) -> u64 {
    let mixed = i
        .wrapping_mul(6364136223846793007)
        .wrapping_add(1442695040888963407);
    (mixed >> 33) % modulus.max(1)
}

/// Build an `n x n` list of scattered values in `0..modulus`.
///
/// Capacity is `n + n / 4` in each dimension.
pub fn square_list(n: usize, modulus: u64) -> List2D<u64> {
    let spare = n / 4;
    let mut list = List2D::with_capacity(Bounds2D::new(n + spare, n + spare))
        .expect("benchmark list must be allocatable");
    list.increase_bounds(n, n)
        .expect("bounds fit in the preallocated capacity");
    for (i, cell) in list.iter_mut().enumerate() {
        *cell = scatter(i as u64, modulus);
    }
    list
}
