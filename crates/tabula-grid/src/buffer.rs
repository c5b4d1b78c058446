//! Fallible allocation of row-major backing buffers.
//!
//! Every buffer is sized from a [`Bounds2D`] capacity. The cell count is
//! computed with overflow checking and the allocation goes through
//! `try_reserve_exact`, so both an oversized shape and an allocator
//! failure surface as [`CollectionError::OutOfMemory`] before any existing
//! buffer is touched.

use std::iter;

use tabula_core::{Bounds2D, CollectionError};

/// Cell count of `capacity`, or `OutOfMemory` if it overflows `usize`.
pub(crate) fn cell_count(capacity: Bounds2D) -> Result<usize, CollectionError> {
    capacity
        .checked_count()
        .ok_or(CollectionError::OutOfMemory {
            requested: capacity,
        })
}

/// An empty vector with room for exactly `capacity.count()` cells.
pub(crate) fn reserve<T>(capacity: Bounds2D) -> Result<Vec<T>, CollectionError> {
    let len = cell_count(capacity)?;
    let mut items = Vec::new();
    items
        .try_reserve_exact(len)
        .map_err(|_| CollectionError::OutOfMemory {
            requested: capacity,
        })?;
    Ok(items)
}

/// A buffer of `capacity.count()` default cells.
pub(crate) fn defaulted<T: Default>(capacity: Bounds2D) -> Result<Vec<T>, CollectionError> {
    let len = cell_count(capacity)?;
    let mut items = reserve(capacity)?;
    items.resize_with(len, T::default);
    Ok(items)
}

/// Append `count` default cells.
pub(crate) fn push_defaults<T: Default>(items: &mut Vec<T>, count: usize) {
    items.extend(iter::repeat_with(T::default).take(count));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaulted_has_exact_length() {
        let items: Vec<u8> = defaulted(Bounds2D::new(3, 4)).unwrap();
        assert_eq!(items.len(), 12);
        assert!(items.iter().all(|&v| v == 0));
    }

    #[test]
    fn overflowing_shape_is_out_of_memory() {
        let huge = Bounds2D::new(usize::MAX, 3);
        assert_eq!(
            reserve::<u8>(huge).unwrap_err(),
            CollectionError::OutOfMemory { requested: huge }
        );
    }

    #[test]
    fn unsatisfiable_reservation_is_out_of_memory() {
        // Fits in usize but not in any address space.
        let huge = Bounds2D::new(usize::MAX / 8, 2);
        assert!(matches!(
            reserve::<u64>(huge),
            Err(CollectionError::OutOfMemory { .. })
        ));
    }

    #[test]
    fn empty_shape_allocates_nothing() {
        let items: Vec<String> = defaulted(Bounds2D::new(0, 100)).unwrap();
        assert!(items.is_empty());
    }
}
