//! Row-major traversal of the live cells.

use std::iter::FusedIterator;

use tabula_core::{row_major, Bounds2D, CollectionError, Index2D};

use super::List2D;

/// Borrowing row-major iterator over a [`List2D`].
///
/// Created by [`List2D::iter`]. Skips the unused tail of every row.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    items: &'a [T],
    offset: usize,
    column: usize,
    columns: usize,
    gap_per_row: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let items = self.items;
        let item = &items[self.offset];
        self.remaining -= 1;
        self.offset += 1;
        self.column += 1;
        if self.column == self.columns {
            self.column = 0;
            self.offset += self.gap_per_row;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable row-major iterator over a [`List2D`].
///
/// Created by [`List2D::iter_mut`]. Yields live cells only.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    rows: std::slice::ChunksMut<'a, T>,
    row: std::slice::IterMut<'a, T>,
    columns: usize,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        loop {
            if let Some(item) = self.row.next() {
                self.remaining -= 1;
                return Some(item);
            }
            let line = self.rows.next()?;
            self.row = line[..self.columns].iter_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CursorState {
    BeforeStart,
    At { offset: usize, column: usize },
    Finished,
}

/// Detached row-major cursor over a [`List2D`].
///
/// Unlike [`Iter`], a cursor holds no borrow, so the list may be mutated
/// between steps. Each step checks the list's version; any structural
/// mutation since [`List2D::cursor`] makes further
/// [`move_next`](Self::move_next) and [`current`](Self::current) calls
/// fail with [`CollectionError::InvalidState`]. Writing through
/// [`List2D::get_mut`] or indexing is not structural and keeps the
/// cursor valid.
///
/// The cursor also records the bounds and capacity it was created with,
/// so handing it a list of another shape is rejected the same way.
#[derive(Clone, Debug)]
pub struct ListCursor {
    version: u64,
    bounds: Bounds2D,
    capacity: Bounds2D,
    state: CursorState,
}

impl ListCursor {
    fn check_version<T>(&self, list: &List2D<T>) -> Result<(), CollectionError> {
        if list.version != self.version {
            return Err(CollectionError::invalid_state(format!(
                "collection modified during enumeration (version {} -> {})",
                self.version, list.version
            )));
        }
        if list.bounds != self.bounds || list.capacity != self.capacity {
            return Err(CollectionError::invalid_state(format!(
                "cursor over {} (capacity {}) used with a list of {} (capacity {})",
                self.bounds, self.capacity, list.bounds, list.capacity
            )));
        }
        Ok(())
    }

    /// Advance to the next live cell; `false` once past the end.
    pub fn move_next<T>(&mut self, list: &List2D<T>) -> Result<bool, CollectionError> {
        self.check_version(list)?;
        let columns = self.bounds.columns();
        let stride = self.capacity.columns();
        let end = stride * self.bounds.rows();
        self.state = match self.state {
            CursorState::BeforeStart if columns > 0 && end > 0 => CursorState::At {
                offset: 0,
                column: 0,
            },
            CursorState::BeforeStart | CursorState::Finished => CursorState::Finished,
            CursorState::At { offset, column } => {
                let (mut offset, mut column) = (offset + 1, column + 1);
                if column == columns {
                    column = 0;
                    offset += stride - columns;
                }
                if offset >= end {
                    CursorState::Finished
                } else {
                    CursorState::At { offset, column }
                }
            }
        };
        Ok(matches!(self.state, CursorState::At { .. }))
    }

    /// The cell under the cursor, or `None` before the first
    /// [`move_next`](Self::move_next) or after the end.
    pub fn current<'a, T>(&self, list: &'a List2D<T>) -> Result<Option<&'a T>, CollectionError> {
        self.check_version(list)?;
        Ok(match self.state {
            CursorState::At { offset, .. } => list.items.get(offset),
            _ => None,
        })
    }

    /// Index of the cell under the cursor.
    pub fn index(&self) -> Option<Index2D> {
        match self.state {
            CursorState::At { offset, .. } => {
                let (row, column) = row_major::from_linear(offset, self.capacity.columns());
                Some(Index2D::from_unsigned(row, column))
            }
            _ => None,
        }
    }

    /// Rewind to before the first cell.
    ///
    /// Does not revalidate; a cursor invalidated by a mutation stays
    /// invalid.
    pub fn reset(&mut self) {
        self.state = CursorState::BeforeStart;
    }
}

impl<T> List2D<T> {
    /// Iterate the live cells row-major.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            items: &self.items,
            offset: 0,
            column: 0,
            columns: self.columns(),
            gap_per_row: self.gap_per_row(),
            remaining: self.count(),
        }
    }

    /// Iterate the live cells row-major, mutably.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let remaining = self.count();
        let columns = self.columns();
        let live = self.capacity.columns() * self.rows();
        // A zero stride only occurs with no live cells.
        let stride = self.capacity.columns().max(1);
        IterMut {
            rows: self.items[..live].chunks_mut(stride),
            row: Default::default(),
            columns,
            remaining,
        }
    }

    /// A detached cursor positioned before the first cell.
    pub fn cursor(&self) -> ListCursor {
        ListCursor {
            version: self.version,
            bounds: self.bounds,
            capacity: self.capacity,
            state: CursorState::BeforeStart,
        }
    }
}

impl<'a, T> IntoIterator for &'a List2D<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List2D<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> List2D<i32> {
        let mut list = List2D::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        list.increase_capacity(Bounds2D::new(1, 3)).unwrap();
        list
    }

    #[test]
    fn iter_skips_row_gaps() {
        let list = sample();
        let iter = list.iter();
        assert_eq!(iter.len(), 6);
        assert_eq!(iter.copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn iter_mut_writes_live_cells_only() {
        let mut list = sample();
        for item in &mut list {
            *item *= 10;
        }
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30, 40, 50, 60]);
        assert_eq!(list.items.iter().filter(|&&v| v != 0).count(), 6);
    }

    #[test]
    fn zero_column_list_yields_nothing() {
        let mut list: List2D<i32> = List2D::new();
        list.add_rows(3).unwrap();
        assert_eq!(list.iter().count(), 0);
        assert_eq!(list.iter_mut().count(), 0);
        let mut cursor = list.cursor();
        assert!(!cursor.move_next(&list).unwrap());
    }

    #[test]
    fn cursor_walks_and_resets() {
        let list = sample();
        let mut cursor = list.cursor();
        assert_eq!(cursor.current(&list).unwrap(), None);
        let mut seen = Vec::new();
        while cursor.move_next(&list).unwrap() {
            seen.push((cursor.index().unwrap(), *cursor.current(&list).unwrap().unwrap()));
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[3], (Index2D::new(1, 1), 4));
        assert_eq!(cursor.current(&list).unwrap(), None);
        assert!(!cursor.move_next(&list).unwrap());

        cursor.reset();
        assert!(cursor.move_next(&list).unwrap());
        assert_eq!(cursor.current(&list).unwrap(), Some(&1));
    }

    #[test]
    fn cursor_invalidated_by_structural_mutation() {
        let mut list = sample();
        let mut cursor = list.cursor();
        assert!(cursor.move_next(&list).unwrap());
        list[(0, 0)] = 7;
        assert_eq!(cursor.current(&list).unwrap(), Some(&7));

        list.add_row().unwrap();
        assert!(matches!(
            cursor.move_next(&list),
            Err(CollectionError::InvalidState { .. })
        ));
        assert!(cursor.current(&list).is_err());
    }

    #[test]
    fn cursor_rejects_a_list_of_another_shape() {
        let large = List2D::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        let small = List2D::from_rows(vec![vec![1]]).unwrap();
        assert_eq!(large.version(), small.version());

        let mut cursor = large.cursor();
        assert!(matches!(
            cursor.move_next(&small),
            Err(CollectionError::InvalidState { .. })
        ));
        assert!(cursor.current(&small).is_err());

        let default: List2D<i32> = List2D::new();
        let narrow: List2D<i32> = List2D::with_capacity(Bounds2D::new(3, 3)).unwrap();
        assert_eq!(default.bounds(), narrow.bounds());
        let mut cursor = default.cursor();
        assert!(!cursor.move_next(&default).unwrap());
        assert!(cursor.move_next(&narrow).is_err());
    }
}
