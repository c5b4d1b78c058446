//! Accumulation targets for collecting search results.

use std::collections::VecDeque;
use std::hash::{BuildHasher, Hash};

use indexmap::IndexSet;
use smallvec::{Array, SmallVec};

use crate::error::CollectionError;

/// A caller-chosen collection that search results are appended to.
///
/// Targets are created with `Default`. Read-only targets report
/// `is_read_only() == true`; algorithms check this before traversing so
/// an unsupported target fails with [`CollectionError::Unsupported`]
/// without doing any work.
pub trait GrowableCollection<T>: Default {
    /// `true` if [`try_add`](Self::try_add) always fails.
    fn is_read_only(&self) -> bool {
        false
    }

    /// Append a single item.
    fn try_add(&mut self, item: T) -> Result<(), CollectionError>;
}

impl<T> GrowableCollection<T> for Vec<T> {
    fn try_add(&mut self, item: T) -> Result<(), CollectionError> {
        self.push(item);
        Ok(())
    }
}

impl<T> GrowableCollection<T> for VecDeque<T> {
    fn try_add(&mut self, item: T) -> Result<(), CollectionError> {
        self.push_back(item);
        Ok(())
    }
}

impl<A: Array> GrowableCollection<A::Item> for SmallVec<A> {
    fn try_add(&mut self, item: A::Item) -> Result<(), CollectionError> {
        self.push(item);
        Ok(())
    }
}

/// Insertion-ordered set; duplicates are absorbed.
impl<T, S> GrowableCollection<T> for IndexSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn try_add(&mut self, item: T) -> Result<(), CollectionError> {
        self.insert(item);
        Ok(())
    }
}

/// Boxed slices are fixed-length and cannot accumulate.
impl<T> GrowableCollection<T> for Box<[T]> {
    fn is_read_only(&self) -> bool {
        true
    }

    fn try_add(&mut self, _item: T) -> Result<(), CollectionError> {
        Err(CollectionError::Unsupported {
            reason: "boxed slices have a fixed length and cannot be appended to".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill<C: GrowableCollection<u8>>(items: &[u8]) -> Result<C, CollectionError> {
        let mut target = C::default();
        for &item in items {
            target.try_add(item)?;
        }
        Ok(target)
    }

    #[test]
    fn growable_targets_accept_items() {
        assert_eq!(fill::<Vec<u8>>(&[1, 2]).unwrap(), vec![1, 2]);
        assert_eq!(fill::<VecDeque<u8>>(&[3]).unwrap().front(), Some(&3));
        assert_eq!(fill::<SmallVec<[u8; 4]>>(&[4, 5]).unwrap().as_slice(), &[4, 5]);
    }

    #[test]
    fn index_set_absorbs_duplicates() {
        let set: IndexSet<u8> = fill(&[1, 1, 2]).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn boxed_slice_is_read_only() {
        let target = Box::<[u8]>::default();
        assert!(target.is_read_only());
        assert!(matches!(
            fill::<Box<[u8]>>(&[1]),
            Err(CollectionError::Unsupported { .. })
        ));
    }
}
