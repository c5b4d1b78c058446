//! Copy destinations and copy-argument validation.
//!
//! A sector copy moves `sector.rows()` contiguous runs of
//! `sector.columns()` cells. Source and destination are each strided by
//! their own row width, so a destination only needs to hand out one
//! mutable row segment at a time ([`CopyDestination2D`]).

use tabula_core::{Bounds2D, CollectionError, Index2D};

/// A rectangular buffer that sector copies can write into.
///
/// Implemented by [`Array2D`](crate::Array2D), [`List2D`](crate::List2D)
/// and native `[[T; C]; R]` arrays.
pub trait CopyDestination2D<T> {
    /// Shape of the destination.
    fn destination_bounds(&self) -> Bounds2D;

    /// The `len` cells of `row` starting at `column`.
    ///
    /// Callers guarantee the segment lies inside
    /// [`destination_bounds`](Self::destination_bounds).
    fn row_segment_mut(&mut self, row: usize, column: usize, len: usize) -> &mut [T];
}

impl<T, const R: usize, const C: usize> CopyDestination2D<T> for [[T; C]; R] {
    fn destination_bounds(&self) -> Bounds2D {
        Bounds2D::new(R, C)
    }

    fn row_segment_mut(&mut self, row: usize, column: usize, len: usize) -> &mut [T] {
        &mut self[row][column..column + len]
    }
}

/// Validated arguments of a 2D sector copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CopyPlan {
    pub source_row: usize,
    pub source_column: usize,
    pub sector: Bounds2D,
    pub destination_row: usize,
    pub destination_column: usize,
}

/// Resolve `index` to a cell strictly inside `bounds`.
///
/// The origin is also accepted for an empty sector, so a full copy of an
/// empty source is valid whatever the shapes involved.
fn check_index(
    argument: &'static str,
    index: Index2D,
    bounds: Bounds2D,
    sector: Bounds2D,
) -> Result<(usize, usize), CollectionError> {
    index
        .to_unsigned()
        .filter(|&(row, column)| {
            (row < bounds.rows() && column < bounds.columns())
                || (sector.is_empty() && index == Index2D::ORIGIN)
        })
        .ok_or_else(|| {
            CollectionError::out_of_range(argument, format!("{index} not inside {bounds}"))
        })
}

/// Check that `sector` anchored at `start` lies inside `source`.
pub(crate) fn check_source_sector(
    source: Bounds2D,
    start: Index2D,
    sector: Bounds2D,
) -> Result<(usize, usize), CollectionError> {
    let (row, column) = check_index("source_index", start, source, sector)?;
    let fits = row
        .checked_add(sector.rows())
        .is_some_and(|end| end <= source.rows())
        && column
            .checked_add(sector.columns())
            .is_some_and(|end| end <= source.columns());
    if !fits {
        return Err(CollectionError::out_of_range(
            "sector_size",
            format!("sector {sector} at {start} exceeds bounds {source}"),
        ));
    }
    Ok((row, column))
}

/// Validate a sector copy into a 2D destination.
pub(crate) fn plan_copy(
    source: Bounds2D,
    source_start: Index2D,
    sector: Bounds2D,
    destination: Bounds2D,
    destination_index: Index2D,
) -> Result<CopyPlan, CollectionError> {
    let (source_row, source_column) = check_source_sector(source, source_start, sector)?;
    let (destination_row, destination_column) =
        check_index("destination_index", destination_index, destination, sector)?;
    let fits = destination_row
        .checked_add(sector.rows())
        .is_some_and(|end| end <= destination.rows())
        && destination_column
            .checked_add(sector.columns())
            .is_some_and(|end| end <= destination.columns());
    if !fits {
        return Err(CollectionError::invalid_argument(
            "destination",
            format!(
                "destination too small: {sector} cells at {destination_index} \
                 do not fit in {destination}"
            ),
        ));
    }
    Ok(CopyPlan {
        source_row,
        source_column,
        sector,
        destination_row,
        destination_column,
    })
}

/// Validate a sector copy into a flat slice; returns the source anchor.
pub(crate) fn plan_slice_copy(
    source: Bounds2D,
    source_start: Index2D,
    sector: Bounds2D,
    destination_len: usize,
    destination_index: usize,
) -> Result<(usize, usize), CollectionError> {
    let anchor = check_source_sector(source, source_start, sector)?;
    if destination_index >= destination_len && !(sector.is_empty() && destination_index == 0) {
        return Err(CollectionError::out_of_range(
            "destination_index",
            format!("{destination_index} not in [0, {destination_len})"),
        ));
    }
    if sector.count() > destination_len - destination_index {
        return Err(CollectionError::invalid_argument(
            "destination",
            format!(
                "destination too small: {} cells at {destination_index} \
                 do not fit in length {destination_len}",
                sector.count()
            ),
        ));
    }
    Ok(anchor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(rows: usize, columns: usize) -> Bounds2D {
        Bounds2D::new(rows, columns)
    }

    fn i(row: isize, column: isize) -> Index2D {
        Index2D::new(row, column)
    }

    #[test]
    fn full_copy_of_empty_source_is_valid() {
        let plan = plan_copy(b(0, 0), Index2D::ORIGIN, b(0, 0), b(0, 0), Index2D::ORIGIN);
        assert!(plan.is_ok());
    }

    #[test]
    fn destination_too_small_in_rows() {
        let err = plan_copy(b(3, 5), Index2D::ORIGIN, b(3, 5), b(2, 5), Index2D::ORIGIN)
            .unwrap_err();
        assert!(matches!(
            err,
            CollectionError::InvalidArgument {
                argument: "destination",
                ..
            }
        ));
    }

    #[test]
    fn negative_destination_index_out_of_range() {
        let err = plan_copy(b(3, 5), Index2D::ORIGIN, b(3, 5), b(3, 5), i(-1, 0)).unwrap_err();
        assert!(matches!(
            err,
            CollectionError::OutOfRange {
                argument: "destination_index",
                ..
            }
        ));
    }

    #[test]
    fn sector_past_source_edge_out_of_range() {
        let err = plan_copy(b(3, 5), i(2, 0), b(2, 1), b(9, 9), Index2D::ORIGIN).unwrap_err();
        assert!(matches!(
            err,
            CollectionError::OutOfRange {
                argument: "sector_size",
                ..
            }
        ));
    }

    #[test]
    fn destination_index_on_far_edge_out_of_range() {
        for index in [i(3, 0), i(0, 5), i(3, 5)] {
            let err = plan_copy(b(1, 1), Index2D::ORIGIN, b(1, 1), b(3, 5), index).unwrap_err();
            assert!(matches!(
                err,
                CollectionError::OutOfRange {
                    argument: "destination_index",
                    ..
                }
            ));
        }
    }

    #[test]
    fn source_start_on_far_edge_out_of_range() {
        for start in [i(3, 0), i(0, 5)] {
            assert!(matches!(
                check_source_sector(b(3, 5), start, b(0, 0)),
                Err(CollectionError::OutOfRange {
                    argument: "source_index",
                    ..
                })
            ));
        }
        assert_eq!(check_source_sector(b(3, 5), i(2, 4), b(1, 1)), Ok((2, 4)));
    }

    #[test]
    fn origin_accepted_only_for_empty_sectors() {
        assert!(plan_copy(b(0, 3), Index2D::ORIGIN, b(0, 3), b(0, 0), Index2D::ORIGIN).is_ok());
        assert!(matches!(
            plan_copy(b(2, 2), Index2D::ORIGIN, b(2, 2), b(0, 0), Index2D::ORIGIN),
            Err(CollectionError::OutOfRange { .. })
        ));
        assert!(plan_slice_copy(b(0, 0), Index2D::ORIGIN, b(0, 0), 0, 0).is_ok());
    }

    #[test]
    fn slice_plan_checks_remaining_length() {
        assert!(plan_slice_copy(b(2, 2), Index2D::ORIGIN, b(2, 2), 6, 2).is_ok());
        assert!(matches!(
            plan_slice_copy(b(2, 2), Index2D::ORIGIN, b(2, 2), 6, 3),
            Err(CollectionError::InvalidArgument { .. })
        ));
        assert!(matches!(
            plan_slice_copy(b(2, 2), Index2D::ORIGIN, b(2, 2), 6, 7),
            Err(CollectionError::OutOfRange { .. })
        ));
        assert!(matches!(
            plan_slice_copy(b(2, 2), Index2D::ORIGIN, b(2, 2), 6, 6),
            Err(CollectionError::OutOfRange { .. })
        ));
    }
}
