//! Predicate and equality searches over the live cells.
//!
//! Every search runs over one of three scopes:
//!
//! - the whole list, in row-major order;
//! - a linear range of `count` cells from a start index, wrapping from
//!   the end of one live row to the start of the next;
//! - a rectangular sector of `size` anchored at a start index.
//!
//! Forward scans move down and right from the start. Backward scans
//! start at the given index and move up and left, so a backward sector is
//! the rectangle whose bottom-right corner is the start index.

use std::cmp::Ordering;

use tabula_core::{
    require_callback, Bounds2D, BoxedPredicate, CollectionError, FindResult, GrowableCollection,
    Index2D, Predicate,
};

use super::List2D;

#[derive(Clone, Copy, Debug)]
enum Scope {
    Range { start: Index2D, count: usize },
    Sector { start: Index2D, size: Bounds2D },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

struct EqualTo<'a, T>(&'a T);

impl<T: PartialEq> Predicate<T> for EqualTo<'_, T> {
    fn matches(&mut self, item: &T) -> bool {
        item == self.0
    }
}

struct EquatableTo<'a, T>(&'a T);

impl<T: Eq> Predicate<T> for EquatableTo<'_, T> {
    fn matches(&mut self, item: &T) -> bool {
        item.eq(self.0)
    }
}

struct ComparableTo<'a, T>(&'a T);

impl<T: Ord> Predicate<T> for ComparableTo<'_, T> {
    fn matches(&mut self, item: &T) -> bool {
        item.cmp(self.0) == Ordering::Equal
    }
}

impl<T> List2D<T> {
    /// Buffer offset of the first match in the whole list.
    fn locate_all<P: Predicate<T>>(
        &self,
        direction: Direction,
        predicate: &mut P,
    ) -> Option<usize> {
        let total = self.count();
        if total == 0 {
            return None;
        }
        match direction {
            Direction::Forward => self.scan_forward(0, 0, total, predicate),
            Direction::Backward => {
                self.scan_backward(self.rows() - 1, self.columns() - 1, total, predicate)
            }
        }
    }

    /// Buffer offset of the first match in `scope`, scanning in `direction`.
    fn locate<P: Predicate<T>>(
        &self,
        scope: Scope,
        direction: Direction,
        predicate: &mut P,
    ) -> Result<Option<usize>, CollectionError> {
        match scope {
            Scope::Range { start, count } => {
                let (row, column) = self.check_start(start)?;
                let live = row * self.columns() + column;
                let available = match direction {
                    Direction::Forward => self.count() - live,
                    Direction::Backward => live + 1,
                };
                if count > available {
                    return Err(CollectionError::out_of_range(
                        "count",
                        format!("{count} cells from {start} exceeds the {available} available"),
                    ));
                }
                Ok(match direction {
                    Direction::Forward => self.scan_forward(row, column, count, predicate),
                    Direction::Backward => self.scan_backward(row, column, count, predicate),
                })
            }
            Scope::Sector { start, size } => {
                let (row, column) = self.check_start(start)?;
                let fits = match direction {
                    Direction::Forward => {
                        size.rows() <= self.rows() - row && size.columns() <= self.columns() - column
                    }
                    Direction::Backward => size.rows() <= row + 1 && size.columns() <= column + 1,
                };
                if !fits {
                    return Err(CollectionError::out_of_range(
                        "sector_size",
                        format!("sector {size} from {start} exceeds bounds {}", self.bounds),
                    ));
                }
                Ok(match direction {
                    Direction::Forward => self.scan_sector_forward(row, column, size, predicate),
                    Direction::Backward => self.scan_sector_backward(row, column, size, predicate),
                })
            }
        }
    }

    fn scan_forward<P: Predicate<T>>(
        &self,
        row: usize,
        column: usize,
        count: usize,
        predicate: &mut P,
    ) -> Option<usize> {
        let columns = self.columns();
        let gap = self.gap_per_row();
        let mut offset = self.offset(row, column);
        let mut column = column;
        for _ in 0..count {
            if predicate.matches(&self.items[offset]) {
                return Some(offset);
            }
            offset += 1;
            column += 1;
            if column == columns {
                column = 0;
                offset += gap;
            }
        }
        None
    }

    fn scan_backward<P: Predicate<T>>(
        &self,
        row: usize,
        column: usize,
        count: usize,
        predicate: &mut P,
    ) -> Option<usize> {
        let columns = self.columns();
        let gap = self.gap_per_row();
        let mut offset = self.offset(row, column);
        let mut column = column;
        for remaining in (0..count).rev() {
            if predicate.matches(&self.items[offset]) {
                return Some(offset);
            }
            if remaining == 0 {
                break;
            }
            if column == 0 {
                column = columns - 1;
                offset -= gap + 1;
            } else {
                column -= 1;
                offset -= 1;
            }
        }
        None
    }

    fn scan_sector_forward<P: Predicate<T>>(
        &self,
        row: usize,
        column: usize,
        size: Bounds2D,
        predicate: &mut P,
    ) -> Option<usize> {
        for r in row..row + size.rows() {
            let base = self.offset(r, 0);
            for c in column..column + size.columns() {
                if predicate.matches(&self.items[base + c]) {
                    return Some(base + c);
                }
            }
        }
        None
    }

    fn scan_sector_backward<P: Predicate<T>>(
        &self,
        row: usize,
        column: usize,
        size: Bounds2D,
        predicate: &mut P,
    ) -> Option<usize> {
        for r in (row + 1 - size.rows()..=row).rev() {
            let base = self.offset(r, 0);
            for c in (column + 1 - size.columns()..=column).rev() {
                if predicate.matches(&self.items[base + c]) {
                    return Some(base + c);
                }
            }
        }
        None
    }

    fn locate_index<P: Predicate<T>>(
        &self,
        scope: Scope,
        direction: Direction,
        predicate: &mut P,
    ) -> Result<FindResult<Index2D>, CollectionError> {
        let found = self.locate(scope, direction, predicate)?;
        Ok(found.map(|offset| self.index_at(offset)).into())
    }

    fn locate_item<P: Predicate<T>>(
        &self,
        scope: Scope,
        direction: Direction,
        predicate: &mut P,
    ) -> Result<FindResult<&T>, CollectionError> {
        let found = self.locate(scope, direction, predicate)?;
        Ok(found.map(|offset| &self.items[offset]).into())
    }

    fn locate_index_all<P: Predicate<T>>(
        &self,
        direction: Direction,
        predicate: &mut P,
    ) -> FindResult<Index2D> {
        self.locate_all(direction, predicate)
            .map(|offset| self.index_at(offset))
            .into()
    }

    fn locate_item_all<P: Predicate<T>>(
        &self,
        direction: Direction,
        predicate: &mut P,
    ) -> FindResult<&T> {
        self.locate_all(direction, predicate)
            .map(|offset| &self.items[offset])
            .into()
    }

    /// Index of the first cell matching `predicate`, row-major.
    pub fn find_index_2d<P: Predicate<T>>(&self, mut predicate: P) -> FindResult<Index2D> {
        self.locate_index_all(Direction::Forward, &mut predicate)
    }

    /// [`find_index_2d`](Self::find_index_2d) over the first `count` cells
    /// from `start`.
    pub fn find_index_2d_range<P: Predicate<T>>(
        &self,
        start: Index2D,
        count: usize,
        mut predicate: P,
    ) -> Result<FindResult<Index2D>, CollectionError> {
        self.locate_index(Scope::Range { start, count }, Direction::Forward, &mut predicate)
    }

    /// [`find_index_2d`](Self::find_index_2d) over the sector of `size`
    /// whose top-left corner is `start`.
    pub fn find_index_2d_sector<P: Predicate<T>>(
        &self,
        start: Index2D,
        size: Bounds2D,
        mut predicate: P,
    ) -> Result<FindResult<Index2D>, CollectionError> {
        self.locate_index(Scope::Sector { start, size }, Direction::Forward, &mut predicate)
    }

    /// Index of the last cell matching `predicate`, row-major.
    pub fn find_last_index_2d<P: Predicate<T>>(&self, mut predicate: P) -> FindResult<Index2D> {
        self.locate_index_all(Direction::Backward, &mut predicate)
    }

    /// Scan `count` cells backward from `start` for the first match.
    pub fn find_last_index_2d_range<P: Predicate<T>>(
        &self,
        start: Index2D,
        count: usize,
        mut predicate: P,
    ) -> Result<FindResult<Index2D>, CollectionError> {
        self.locate_index(Scope::Range { start, count }, Direction::Backward, &mut predicate)
    }

    /// Scan the sector of `size` whose bottom-right corner is `start`,
    /// bottom row first and right to left.
    pub fn find_last_index_2d_sector<P: Predicate<T>>(
        &self,
        start: Index2D,
        size: Bounds2D,
        mut predicate: P,
    ) -> Result<FindResult<Index2D>, CollectionError> {
        self.locate_index(Scope::Sector { start, size }, Direction::Backward, &mut predicate)
    }

    /// [`find_index_2d`](Self::find_index_2d) with a boxed callback.
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `predicate` is
    /// `None`.
    pub fn find_index_2d_callback(
        &self,
        predicate: Option<BoxedPredicate<'_, T>>,
    ) -> Result<FindResult<Index2D>, CollectionError> {
        let predicate = require_callback(predicate, "predicate")?;
        Ok(self.find_index_2d(predicate))
    }

    /// [`find_last_index_2d`](Self::find_last_index_2d) with a boxed
    /// callback.
    pub fn find_last_index_2d_callback(
        &self,
        predicate: Option<BoxedPredicate<'_, T>>,
    ) -> Result<FindResult<Index2D>, CollectionError> {
        let predicate = require_callback(predicate, "predicate")?;
        Ok(self.find_last_index_2d(predicate))
    }

    /// [`find_index_2d_range`](Self::find_index_2d_range) with a boxed
    /// callback.
    pub fn find_index_2d_range_callback(
        &self,
        start: Index2D,
        count: usize,
        predicate: Option<BoxedPredicate<'_, T>>,
    ) -> Result<FindResult<Index2D>, CollectionError> {
        let predicate = require_callback(predicate, "predicate")?;
        self.find_index_2d_range(start, count, predicate)
    }

    /// [`find_index_2d_sector`](Self::find_index_2d_sector) with a boxed
    /// callback.
    pub fn find_index_2d_sector_callback(
        &self,
        start: Index2D,
        size: Bounds2D,
        predicate: Option<BoxedPredicate<'_, T>>,
    ) -> Result<FindResult<Index2D>, CollectionError> {
        let predicate = require_callback(predicate, "predicate")?;
        self.find_index_2d_sector(start, size, predicate)
    }

    /// [`find_last_index_2d_range`](Self::find_last_index_2d_range) with a
    /// boxed callback.
    pub fn find_last_index_2d_range_callback(
        &self,
        start: Index2D,
        count: usize,
        predicate: Option<BoxedPredicate<'_, T>>,
    ) -> Result<FindResult<Index2D>, CollectionError> {
        let predicate = require_callback(predicate, "predicate")?;
        self.find_last_index_2d_range(start, count, predicate)
    }

    /// [`find_last_index_2d_sector`](Self::find_last_index_2d_sector) with
    /// a boxed callback.
    pub fn find_last_index_2d_sector_callback(
        &self,
        start: Index2D,
        size: Bounds2D,
        predicate: Option<BoxedPredicate<'_, T>>,
    ) -> Result<FindResult<Index2D>, CollectionError> {
        let predicate = require_callback(predicate, "predicate")?;
        self.find_last_index_2d_sector(start, size, predicate)
    }

    /// First cell matching `predicate`, row-major.
    pub fn find<P: Predicate<T>>(&self, mut predicate: P) -> FindResult<&T> {
        self.locate_item_all(Direction::Forward, &mut predicate)
    }

    /// [`find`](Self::find) over the first `count` cells from `start`.
    pub fn find_range<P: Predicate<T>>(
        &self,
        start: Index2D,
        count: usize,
        mut predicate: P,
    ) -> Result<FindResult<&T>, CollectionError> {
        self.locate_item(Scope::Range { start, count }, Direction::Forward, &mut predicate)
    }

    /// [`find`](Self::find) over a sector anchored at its top-left corner.
    pub fn find_sector<P: Predicate<T>>(
        &self,
        start: Index2D,
        size: Bounds2D,
        mut predicate: P,
    ) -> Result<FindResult<&T>, CollectionError> {
        self.locate_item(Scope::Sector { start, size }, Direction::Forward, &mut predicate)
    }

    /// Last cell matching `predicate`, row-major.
    pub fn find_last<P: Predicate<T>>(&self, mut predicate: P) -> FindResult<&T> {
        self.locate_item_all(Direction::Backward, &mut predicate)
    }

    /// Backward [`find`](Self::find) over `count` cells ending at `start`.
    pub fn find_last_range<P: Predicate<T>>(
        &self,
        start: Index2D,
        count: usize,
        mut predicate: P,
    ) -> Result<FindResult<&T>, CollectionError> {
        self.locate_item(Scope::Range { start, count }, Direction::Backward, &mut predicate)
    }

    /// Backward [`find`](Self::find) over a sector anchored at its
    /// bottom-right corner.
    pub fn find_last_sector<P: Predicate<T>>(
        &self,
        start: Index2D,
        size: Bounds2D,
        mut predicate: P,
    ) -> Result<FindResult<&T>, CollectionError> {
        self.locate_item(Scope::Sector { start, size }, Direction::Backward, &mut predicate)
    }

    /// [`find`](Self::find) with a boxed callback.
    pub fn find_callback(
        &self,
        predicate: Option<BoxedPredicate<'_, T>>,
    ) -> Result<FindResult<&T>, CollectionError> {
        let predicate = require_callback(predicate, "predicate")?;
        Ok(self.find(predicate))
    }

    /// [`find_last`](Self::find_last) with a boxed callback.
    pub fn find_last_callback(
        &self,
        predicate: Option<BoxedPredicate<'_, T>>,
    ) -> Result<FindResult<&T>, CollectionError> {
        let predicate = require_callback(predicate, "predicate")?;
        Ok(self.find_last(predicate))
    }

    /// [`find_range`](Self::find_range) with a boxed callback.
    pub fn find_range_callback(
        &self,
        start: Index2D,
        count: usize,
        predicate: Option<BoxedPredicate<'_, T>>,
    ) -> Result<FindResult<&T>, CollectionError> {
        let predicate = require_callback(predicate, "predicate")?;
        self.find_range(start, count, predicate)
    }

    /// [`find_sector`](Self::find_sector) with a boxed callback.
    pub fn find_sector_callback(
        &self,
        start: Index2D,
        size: Bounds2D,
        predicate: Option<BoxedPredicate<'_, T>>,
    ) -> Result<FindResult<&T>, CollectionError> {
        let predicate = require_callback(predicate, "predicate")?;
        self.find_sector(start, size, predicate)
    }

    /// [`find_last_range`](Self::find_last_range) with a boxed callback.
    pub fn find_last_range_callback(
        &self,
        start: Index2D,
        count: usize,
        predicate: Option<BoxedPredicate<'_, T>>,
    ) -> Result<FindResult<&T>, CollectionError> {
        let predicate = require_callback(predicate, "predicate")?;
        self.find_last_range(start, count, predicate)
    }

    /// [`find_last_sector`](Self::find_last_sector) with a boxed callback.
    pub fn find_last_sector_callback(
        &self,
        start: Index2D,
        size: Bounds2D,
        predicate: Option<BoxedPredicate<'_, T>>,
    ) -> Result<FindResult<&T>, CollectionError> {
        let predicate = require_callback(predicate, "predicate")?;
        self.find_last_sector(start, size, predicate)
    }

    /// Clone every matching cell into a new collection, row-major.
    ///
    /// Returns [`CollectionError::Unsupported`] if `C` is read-only.
    pub fn find_all<C, P>(&self, mut predicate: P) -> Result<C, CollectionError>
    where
        T: Clone,
        C: GrowableCollection<T>,
        P: Predicate<T>,
    {
        let mut found = C::default();
        if found.is_read_only() {
            return Err(CollectionError::Unsupported {
                reason: "find_all target collection is read-only".into(),
            });
        }
        for item in self.iter() {
            if predicate.matches(item) {
                found.try_add(item.clone())?;
            }
        }
        Ok(found)
    }

    /// [`find_all`](Self::find_all) with a boxed callback.
    pub fn find_all_callback<C>(
        &self,
        predicate: Option<BoxedPredicate<'_, T>>,
    ) -> Result<C, CollectionError>
    where
        T: Clone,
        C: GrowableCollection<T>,
    {
        let predicate = require_callback(predicate, "predicate")?;
        self.find_all(predicate)
    }

    /// Collect the index of every matching cell, row-major.
    ///
    /// Returns [`CollectionError::Unsupported`] if `C` is read-only.
    pub fn find_all_indices<C, P>(&self, mut predicate: P) -> Result<C, CollectionError>
    where
        C: GrowableCollection<Index2D>,
        P: Predicate<T>,
    {
        let mut found = C::default();
        if found.is_read_only() {
            return Err(CollectionError::Unsupported {
                reason: "find_all_indices target collection is read-only".into(),
            });
        }
        for (row, line) in self.row_slices().enumerate() {
            for (column, item) in line.iter().enumerate() {
                if predicate.matches(item) {
                    found.try_add(Index2D::from_unsigned(row, column))?;
                }
            }
        }
        Ok(found)
    }

    /// [`find_all_indices`](Self::find_all_indices) with a boxed callback.
    pub fn find_all_indices_callback<C>(
        &self,
        predicate: Option<BoxedPredicate<'_, T>>,
    ) -> Result<C, CollectionError>
    where
        C: GrowableCollection<Index2D>,
    {
        let predicate = require_callback(predicate, "predicate")?;
        self.find_all_indices(predicate)
    }

    /// `true` if every live cell matches; vacuously `true` when empty.
    pub fn true_for_all<P: Predicate<T>>(&self, mut predicate: P) -> bool {
        self.find_index_2d(|item: &T| !predicate.matches(item))
            .is_failure()
    }

    /// `true` if any live cell matches.
    pub fn true_for_any<P: Predicate<T>>(&self, predicate: P) -> bool {
        self.find_index_2d(predicate).is_success()
    }

    /// [`true_for_all`](Self::true_for_all) with a boxed callback.
    pub fn true_for_all_callback(
        &self,
        predicate: Option<BoxedPredicate<'_, T>>,
    ) -> Result<bool, CollectionError> {
        let predicate = require_callback(predicate, "predicate")?;
        Ok(self.true_for_all(predicate))
    }

    /// [`true_for_any`](Self::true_for_any) with a boxed callback.
    pub fn true_for_any_callback(
        &self,
        predicate: Option<BoxedPredicate<'_, T>>,
    ) -> Result<bool, CollectionError> {
        let predicate = require_callback(predicate, "predicate")?;
        Ok(self.true_for_any(predicate))
    }

    /// Index of the first cell equal to `item`.
    pub fn index_of(&self, item: &T) -> FindResult<Index2D>
    where
        T: PartialEq,
    {
        self.locate_index_all(Direction::Forward, &mut EqualTo(item))
    }

    /// [`index_of`](Self::index_of) over `count` cells from `start`.
    pub fn index_of_range(
        &self,
        item: &T,
        start: Index2D,
        count: usize,
    ) -> Result<FindResult<Index2D>, CollectionError>
    where
        T: PartialEq,
    {
        self.locate_index(Scope::Range { start, count }, Direction::Forward, &mut EqualTo(item))
    }

    /// [`index_of`](Self::index_of) over a sector.
    pub fn index_of_sector(
        &self,
        item: &T,
        start: Index2D,
        size: Bounds2D,
    ) -> Result<FindResult<Index2D>, CollectionError>
    where
        T: PartialEq,
    {
        self.locate_index(Scope::Sector { start, size }, Direction::Forward, &mut EqualTo(item))
    }

    /// Index of the last cell equal to `item`.
    pub fn last_index_of(&self, item: &T) -> FindResult<Index2D>
    where
        T: PartialEq,
    {
        self.locate_index_all(Direction::Backward, &mut EqualTo(item))
    }

    /// Backward [`index_of`](Self::index_of) over `count` cells ending at
    /// `start`.
    pub fn last_index_of_range(
        &self,
        item: &T,
        start: Index2D,
        count: usize,
    ) -> Result<FindResult<Index2D>, CollectionError>
    where
        T: PartialEq,
    {
        self.locate_index(Scope::Range { start, count }, Direction::Backward, &mut EqualTo(item))
    }

    /// Backward [`index_of`](Self::index_of) over a sector.
    pub fn last_index_of_sector(
        &self,
        item: &T,
        start: Index2D,
        size: Bounds2D,
    ) -> Result<FindResult<Index2D>, CollectionError>
    where
        T: PartialEq,
    {
        self.locate_index(Scope::Sector { start, size }, Direction::Backward, &mut EqualTo(item))
    }

    /// Index of the first cell equal to `item` under total equality.
    pub fn index_of_equatable(&self, item: &T) -> FindResult<Index2D>
    where
        T: Eq,
    {
        self.locate_index_all(Direction::Forward, &mut EquatableTo(item))
    }

    /// [`index_of_equatable`](Self::index_of_equatable) over `count`
    /// cells from `start`.
    pub fn index_of_equatable_range(
        &self,
        item: &T,
        start: Index2D,
        count: usize,
    ) -> Result<FindResult<Index2D>, CollectionError>
    where
        T: Eq,
    {
        self.locate_index(Scope::Range { start, count }, Direction::Forward, &mut EquatableTo(item))
    }

    /// [`index_of_equatable`](Self::index_of_equatable) over a sector.
    pub fn index_of_equatable_sector(
        &self,
        item: &T,
        start: Index2D,
        size: Bounds2D,
    ) -> Result<FindResult<Index2D>, CollectionError>
    where
        T: Eq,
    {
        self.locate_index(Scope::Sector { start, size }, Direction::Forward, &mut EquatableTo(item))
    }

    /// Index of the last cell equal to `item` under total equality.
    pub fn last_index_of_equatable(&self, item: &T) -> FindResult<Index2D>
    where
        T: Eq,
    {
        self.locate_index_all(Direction::Backward, &mut EquatableTo(item))
    }

    /// Backward [`index_of_equatable`](Self::index_of_equatable) over
    /// `count` cells ending at `start`.
    pub fn last_index_of_equatable_range(
        &self,
        item: &T,
        start: Index2D,
        count: usize,
    ) -> Result<FindResult<Index2D>, CollectionError>
    where
        T: Eq,
    {
        self.locate_index(
            Scope::Range { start, count },
            Direction::Backward,
            &mut EquatableTo(item),
        )
    }

    /// Backward [`index_of_equatable`](Self::index_of_equatable) over a sector.
    pub fn last_index_of_equatable_sector(
        &self,
        item: &T,
        start: Index2D,
        size: Bounds2D,
    ) -> Result<FindResult<Index2D>, CollectionError>
    where
        T: Eq,
    {
        self.locate_index(
            Scope::Sector { start, size },
            Direction::Backward,
            &mut EquatableTo(item),
        )
    }

    /// Index of the first cell ordering equal to `item`.
    pub fn index_of_comparable(&self, item: &T) -> FindResult<Index2D>
    where
        T: Ord,
    {
        self.locate_index_all(Direction::Forward, &mut ComparableTo(item))
    }

    /// [`index_of_comparable`](Self::index_of_comparable) over `count`
    /// cells from `start`.
    pub fn index_of_comparable_range(
        &self,
        item: &T,
        start: Index2D,
        count: usize,
    ) -> Result<FindResult<Index2D>, CollectionError>
    where
        T: Ord,
    {
        self.locate_index(
            Scope::Range { start, count },
            Direction::Forward,
            &mut ComparableTo(item),
        )
    }

    /// [`index_of_comparable`](Self::index_of_comparable) over a sector.
    pub fn index_of_comparable_sector(
        &self,
        item: &T,
        start: Index2D,
        size: Bounds2D,
    ) -> Result<FindResult<Index2D>, CollectionError>
    where
        T: Ord,
    {
        self.locate_index(
            Scope::Sector { start, size },
            Direction::Forward,
            &mut ComparableTo(item),
        )
    }

    /// Index of the last cell ordering equal to `item`.
    pub fn last_index_of_comparable(&self, item: &T) -> FindResult<Index2D>
    where
        T: Ord,
    {
        self.locate_index_all(Direction::Backward, &mut ComparableTo(item))
    }

    /// Backward [`index_of_comparable`](Self::index_of_comparable) over
    /// `count` cells ending at `start`.
    pub fn last_index_of_comparable_range(
        &self,
        item: &T,
        start: Index2D,
        count: usize,
    ) -> Result<FindResult<Index2D>, CollectionError>
    where
        T: Ord,
    {
        self.locate_index(
            Scope::Range { start, count },
            Direction::Backward,
            &mut ComparableTo(item),
        )
    }

    /// Backward [`index_of_comparable`](Self::index_of_comparable) over a sector.
    pub fn last_index_of_comparable_sector(
        &self,
        item: &T,
        start: Index2D,
        size: Bounds2D,
    ) -> Result<FindResult<Index2D>, CollectionError>
    where
        T: Ord,
    {
        self.locate_index(
            Scope::Sector { start, size },
            Direction::Backward,
            &mut ComparableTo(item),
        )
    }

    /// `true` if some live cell equals `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_success()
    }
}
