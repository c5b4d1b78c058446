//! Per-cell actions and element conversion.

use tabula_core::{require_callback, Action, BoxedAction, BoxedConverter, CollectionError, Converter};

use super::List2D;
use crate::buffer;

impl<T> List2D<T> {
    /// Invoke `action` on every live cell, row-major.
    pub fn for_each<A: Action<T>>(&self, mut action: A) {
        for item in self.iter() {
            action.invoke(item);
        }
    }

    /// [`for_each`](Self::for_each) with a boxed callback.
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `action` is `None`.
    pub fn for_each_callback(&self, action: Option<BoxedAction<'_, T>>) -> Result<(), CollectionError> {
        let action = require_callback(action, "action")?;
        self.for_each(action);
        Ok(())
    }

    /// Map every live cell through `converter` into a new list of the
    /// same bounds. The result's capacity equals its bounds.
    pub fn convert_all<U, C>(&self, mut converter: C) -> Result<List2D<U>, CollectionError>
    where
        C: Converter<T, U>,
    {
        let mut items = buffer::reserve(self.bounds)?;
        items.extend(self.iter().map(|item| converter.convert(item)));
        Ok(List2D::from_parts(
            items,
            self.bounds,
            self.bounds,
            self.growth_factor,
        ))
    }

    /// [`convert_all`](Self::convert_all) with a boxed callback.
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `converter` is
    /// `None`.
    pub fn convert_all_callback<U>(
        &self,
        converter: Option<BoxedConverter<'_, T, U>>,
    ) -> Result<List2D<U>, CollectionError> {
        let converter = require_callback(converter, "converter")?;
        self.convert_all(converter)
    }
}
