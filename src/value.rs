//! Helpers for zero values and optional values, and for moving a slice in and
//! out of dynamically typed form.

use std::any::Any;

use crate::error::{Error, Result};

/// The zero value of `T`, i.e. `T::default()`.
#[must_use]
pub fn empty<T: Default>() -> T {
    T::default()
}

/// `Some(value)`, unless `value` is the zero value of its type.
#[must_use]
pub fn non_empty<T: Default + PartialEq>(value: T) -> Option<T> {
    if is_empty(&value) {
        None
    } else {
        Some(value)
    }
}

/// The contained value, or the zero value of `T` for `None`.
#[must_use]
pub fn from_option<T: Default>(value: Option<T>) -> T {
    value.unwrap_or_default()
}

/// The contained value, or `fallback` for `None`.
#[must_use]
pub fn from_option_or<T>(value: Option<T>, fallback: T) -> T {
    value.unwrap_or(fallback)
}

/// Is `value` the zero value of its type?
#[must_use]
pub fn is_empty<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Is `value` something other than the zero value of its type?
#[must_use]
pub fn is_not_empty<T: Default + PartialEq>(value: &T) -> bool {
    !is_empty(value)
}

/// Boxes each element as a `dyn Any`.
#[must_use]
pub fn to_any_slice<T: Any>(collection: Vec<T>) -> Vec<Box<dyn Any>> {
    collection.into_iter().map(|item| Box::new(item) as Box<dyn Any>).collect()
}

/// Recovers a typed `Vec` from boxed `dyn Any` elements. If any element is not
/// a `T`, fails with [`Error::TypeConversion`] naming the first such element;
/// no partially converted result is returned.
pub fn from_any_slice<T: Any>(input: Vec<Box<dyn Any>>) -> Result<Vec<T>> {
    input
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            item.downcast::<T>().map(|item| *item).map_err(|_| Error::TypeConversion { index })
        })
        .collect()
}
