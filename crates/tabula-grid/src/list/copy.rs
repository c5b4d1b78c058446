//! Sector extraction and copies into external buffers.
//!
//! A full copy of an empty list is always valid, so copying a 0x0 list
//! into a 0x0 destination succeeds.

use tabula_core::{Bounds2D, CollectionError, Index2D};

use super::List2D;
use crate::array2d::Array2D;
use crate::buffer;
use crate::destination::{check_source_sector, plan_copy, plan_slice_copy, CopyDestination2D};

impl<T: Clone> List2D<T> {
    /// Copy the live cells into a new [`Array2D`].
    pub fn to_array_2d(&self) -> Result<Array2D<T>, CollectionError> {
        let mut items = buffer::reserve(self.bounds)?;
        for line in self.row_slices() {
            items.extend_from_slice(line);
        }
        Array2D::from_vec(self.bounds, items)
    }

    /// Copy the sector of `size` at `start` into a new list whose capacity
    /// equals `size`.
    pub fn get_sector(&self, start: Index2D, size: Bounds2D) -> Result<Self, CollectionError> {
        let (row, column) = check_source_sector(self.bounds, start, size)?;
        let mut items = buffer::reserve(size)?;
        for r in row..row + size.rows() {
            let base = self.offset(r, column);
            items.extend_from_slice(&self.items[base..base + size.columns()]);
        }
        Ok(Self::from_parts(items, size, size, self.growth_factor))
    }

    /// Copy the whole list into `destination` at its origin.
    pub fn copy_to<D>(&self, destination: &mut D) -> Result<(), CollectionError>
    where
        D: CopyDestination2D<T> + ?Sized,
    {
        self.copy_sector_from_to(Index2D::ORIGIN, self.bounds, destination, Index2D::ORIGIN)
    }

    /// Copy the whole list into `destination` at `destination_index`.
    pub fn copy_to_at<D>(
        &self,
        destination: &mut D,
        destination_index: Index2D,
    ) -> Result<(), CollectionError>
    where
        D: CopyDestination2D<T> + ?Sized,
    {
        self.copy_sector_from_to(Index2D::ORIGIN, self.bounds, destination, destination_index)
    }

    /// Copy the top-left sector of `size` into `destination`.
    pub fn copy_sector_to<D>(
        &self,
        size: Bounds2D,
        destination: &mut D,
        destination_index: Index2D,
    ) -> Result<(), CollectionError>
    where
        D: CopyDestination2D<T> + ?Sized,
    {
        self.copy_sector_from_to(Index2D::ORIGIN, size, destination, destination_index)
    }

    /// Copy the sector of `size` at `start` into `destination` at
    /// `destination_index`.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::OutOfRange`] if either index is negative, the
    ///   source sector leaves the live bounds, or the destination index
    ///   lies past the destination's bounds.
    /// - [`CollectionError::InvalidArgument`] if the sector does not fit
    ///   in the destination from `destination_index`.
    ///
    /// Nothing is written unless every check passes.
    pub fn copy_sector_from_to<D>(
        &self,
        start: Index2D,
        size: Bounds2D,
        destination: &mut D,
        destination_index: Index2D,
    ) -> Result<(), CollectionError>
    where
        D: CopyDestination2D<T> + ?Sized,
    {
        let plan = plan_copy(
            self.bounds,
            start,
            size,
            destination.destination_bounds(),
            destination_index,
        )?;
        let width = plan.sector.columns();
        for r in 0..plan.sector.rows() {
            let source = self.offset(plan.source_row + r, plan.source_column);
            destination
                .row_segment_mut(
                    plan.destination_row + r,
                    plan.destination_column,
                    width,
                )
                .clone_from_slice(&self.items[source..source + width]);
        }
        Ok(())
    }

    /// Copy the whole list row-major into the start of `destination`.
    pub fn copy_to_slice(&self, destination: &mut [T]) -> Result<(), CollectionError> {
        self.copy_sector_from_to_slice(Index2D::ORIGIN, self.bounds, destination, 0)
    }

    /// Copy the whole list row-major into `destination` at `index`.
    pub fn copy_to_slice_at(
        &self,
        destination: &mut [T],
        index: usize,
    ) -> Result<(), CollectionError> {
        self.copy_sector_from_to_slice(Index2D::ORIGIN, self.bounds, destination, index)
    }

    /// Copy the top-left sector of `size` row-major into `destination`.
    pub fn copy_sector_to_slice(
        &self,
        size: Bounds2D,
        destination: &mut [T],
        index: usize,
    ) -> Result<(), CollectionError> {
        self.copy_sector_from_to_slice(Index2D::ORIGIN, size, destination, index)
    }

    /// Copy the sector of `size` at `start` row-major into `destination`
    /// at `index`.
    pub fn copy_sector_from_to_slice(
        &self,
        start: Index2D,
        size: Bounds2D,
        destination: &mut [T],
        index: usize,
    ) -> Result<(), CollectionError> {
        let (row, column) = plan_slice_copy(self.bounds, start, size, destination.len(), index)?;
        let width = size.columns();
        for r in 0..size.rows() {
            let source = self.offset(row + r, column);
            let target = index + r * width;
            destination[target..target + width]
                .clone_from_slice(&self.items[source..source + width]);
        }
        Ok(())
    }
}

/// Copies land in the live cells; a list never grows to fit a copy.
impl<T> CopyDestination2D<T> for List2D<T> {
    fn destination_bounds(&self) -> Bounds2D {
        self.bounds
    }

    fn row_segment_mut(&mut self, row: usize, column: usize, len: usize) -> &mut [T] {
        let start = self.offset(row, column);
        &mut self.items[start..start + len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> List2D<u8> {
        let mut list = List2D::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        list.increase_capacity(Bounds2D::new(2, 3)).unwrap();
        list
    }

    #[test]
    fn to_array_drops_gaps() {
        let array = sample().to_array_2d().unwrap();
        assert_eq!(array.bounds(), Bounds2D::new(2, 3));
        assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn get_sector_is_tight() {
        let sector = sample()
            .get_sector(Index2D::new(0, 1), Bounds2D::new(2, 2))
            .unwrap();
        assert_eq!(sector.capacity(), Bounds2D::new(2, 2));
        assert_eq!(sector.row_slice(0), Some(&[2, 3][..]));
        assert_eq!(sector.row_slice(1), Some(&[5, 6][..]));
    }

    #[test]
    fn copy_into_native_array_at_offset() {
        let mut target = [[0u8; 4]; 3];
        sample().copy_to_at(&mut target, Index2D::new(1, 1)).unwrap();
        assert_eq!(target, [[0, 0, 0, 0], [0, 1, 2, 3], [0, 4, 5, 6]]);
    }

    #[test]
    fn copy_sector_into_array2d() {
        let mut target = Array2D::<u8>::new(Bounds2D::new(2, 2)).unwrap();
        sample()
            .copy_sector_from_to(
                Index2D::new(1, 1),
                Bounds2D::new(1, 2),
                &mut target,
                Index2D::new(1, 0),
            )
            .unwrap();
        assert_eq!(target.as_slice(), &[0, 0, 5, 6]);
    }

    #[test]
    fn too_small_destination_rejected_untouched() {
        let mut target = [[9u8; 3]; 1];
        assert!(matches!(
            sample().copy_to(&mut target),
            Err(CollectionError::InvalidArgument { argument: "destination", .. })
        ));
        assert_eq!(target, [[9; 3]; 1]);
    }

    #[test]
    fn slice_copies() {
        let list = sample();
        let mut flat = [0u8; 8];
        list.copy_to_slice_at(&mut flat, 1).unwrap();
        assert_eq!(flat, [0, 1, 2, 3, 4, 5, 6, 0]);

        let mut flat = [0u8; 2];
        list.copy_sector_to_slice(Bounds2D::new(1, 2), &mut flat, 0).unwrap();
        assert_eq!(flat, [1, 2]);

        assert!(list.copy_to_slice(&mut [0u8; 5]).is_err());
    }

    #[test]
    fn copy_between_lists_respects_target_stride() {
        let source = sample();
        let mut target: List2D<u8> = List2D::with_capacity(Bounds2D::new(4, 6)).unwrap();
        target.increase_bounds(3, 4).unwrap();
        source
            .copy_sector_to(Bounds2D::new(2, 2), &mut target, Index2D::new(1, 2))
            .unwrap();
        assert_eq!(target.row_slice(1), Some(&[0, 0, 1, 2][..]));
        assert_eq!(target.row_slice(2), Some(&[0, 0, 4, 5][..]));
        assert!(matches!(
            source.copy_to_at(&mut target, Index2D::new(2, 2)),
            Err(CollectionError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn empty_list_copies_into_empty_destination() {
        let list: List2D<u8> = List2D::new();
        let mut target: [[u8; 0]; 0] = [];
        assert!(list.copy_to(&mut target).is_ok());
        assert!(list.copy_to_slice(&mut []).is_ok());
    }
}
