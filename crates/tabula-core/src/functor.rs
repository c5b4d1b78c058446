//! Functor traits for generic collection algorithms.
//!
//! Searches, conversions and visits are generic over [`Predicate`],
//! [`Converter`] and [`Action`]. A zero-sized functor or a closure is
//! monomorphized and inlined at the call site; the boxed adapters
//! ([`BoxedPredicate`], [`BoxedConverter`], [`BoxedAction`]) erase the
//! callback type behind a single dynamic call and satisfy the same traits,
//! so one generic entry point serves both.
//!
//! Closures implement the traits through blanket impls. Because the traits
//! are not `Fn` bounds themselves, closure parameters need an explicit
//! type: `|x: &i32| *x > 5`.

use std::fmt;

use crate::error::CollectionError;

/// A boolean test over a collection element.
pub trait Predicate<T: ?Sized> {
    /// `true` if `item` satisfies the predicate.
    fn matches(&mut self, item: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn matches(&mut self, item: &T) -> bool {
        self(item)
    }
}

/// A conversion from one element type to another.
pub trait Converter<T: ?Sized, U> {
    /// Convert a single element.
    fn convert(&mut self, item: &T) -> U;
}

impl<T: ?Sized, U, F> Converter<T, U> for F
where
    F: FnMut(&T) -> U,
{
    #[inline]
    fn convert(&mut self, item: &T) -> U {
        self(item)
    }
}

/// A side-effecting visit of a collection element.
pub trait Action<T: ?Sized> {
    /// Visit a single element.
    fn invoke(&mut self, item: &T);
}

impl<T: ?Sized, F> Action<T> for F
where
    F: FnMut(&T),
{
    #[inline]
    fn invoke(&mut self, item: &T) {
        self(item)
    }
}

/// Type-erased [`Predicate`] wrapping a boxed callback.
pub struct BoxedPredicate<'a, T: ?Sized> {
    callback: Box<dyn FnMut(&T) -> bool + 'a>,
}

impl<'a, T: ?Sized> BoxedPredicate<'a, T> {
    /// Box a callback.
    pub fn new(callback: impl FnMut(&T) -> bool + 'a) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl<T: ?Sized> Predicate<T> for BoxedPredicate<'_, T> {
    fn matches(&mut self, item: &T) -> bool {
        (self.callback)(item)
    }
}

impl<T: ?Sized> fmt::Debug for BoxedPredicate<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedPredicate").finish_non_exhaustive()
    }
}

/// Type-erased [`Converter`] wrapping a boxed callback.
pub struct BoxedConverter<'a, T: ?Sized, U> {
    callback: Box<dyn FnMut(&T) -> U + 'a>,
}

impl<'a, T: ?Sized, U> BoxedConverter<'a, T, U> {
    /// Box a callback.
    pub fn new(callback: impl FnMut(&T) -> U + 'a) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl<T: ?Sized, U> Converter<T, U> for BoxedConverter<'_, T, U> {
    fn convert(&mut self, item: &T) -> U {
        (self.callback)(item)
    }
}

impl<T: ?Sized, U> fmt::Debug for BoxedConverter<'_, T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedConverter").finish_non_exhaustive()
    }
}

/// Type-erased [`Action`] wrapping a boxed callback.
pub struct BoxedAction<'a, T: ?Sized> {
    callback: Box<dyn FnMut(&T) + 'a>,
}

impl<'a, T: ?Sized> BoxedAction<'a, T> {
    /// Box a callback.
    pub fn new(callback: impl FnMut(&T) + 'a) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl<T: ?Sized> Action<T> for BoxedAction<'_, T> {
    fn invoke(&mut self, item: &T) {
        (self.callback)(item)
    }
}

impl<T: ?Sized> fmt::Debug for BoxedAction<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedAction").finish_non_exhaustive()
    }
}

/// Unwrap an optional callback argument.
///
/// Entry points that accept a boxed callback take it as `Option` and
/// report an absent one as [`CollectionError::InvalidArgument`] naming
/// `argument`.
pub fn require_callback<F>(callback: Option<F>, argument: &'static str) -> Result<F, CollectionError> {
    callback.ok_or_else(|| CollectionError::invalid_argument(argument, "callback is absent"))
}
