//! Searching a slice by value, by predicate, or by position.

use crate::error::{Error, Result};

/// The index of the first occurrence of `element` in `collection`.
#[must_use]
pub fn index_of<T: PartialEq>(collection: &[T], element: &T) -> Option<usize> {
    collection.iter().position(|item| item == element)
}

/// The index of the last occurrence of `element` in `collection`.
#[must_use]
pub fn last_index_of<T: PartialEq>(collection: &[T], element: &T) -> Option<usize> {
    collection.iter().rposition(|item| item == element)
}

/// The first element of `collection` for which `predicate` holds.
#[must_use]
pub fn find<T: Clone>(collection: &[T], mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
    collection.iter().find(|item| predicate(*item)).cloned()
}

/// The first element of `collection` for which `predicate` holds, with its
/// index.
#[must_use]
pub fn find_index_of<T: Clone>(
    collection: &[T],
    mut predicate: impl FnMut(&T) -> bool,
) -> Option<(T, usize)> {
    let index = collection.iter().position(|item| predicate(item))?;
    Some((collection[index].clone(), index))
}

/// The last element of `collection` for which `predicate` holds, with its
/// index.
#[must_use]
pub fn find_last_index_of<T: Clone>(
    collection: &[T],
    mut predicate: impl FnMut(&T) -> bool,
) -> Option<(T, usize)> {
    let index = collection.iter().rposition(|item| predicate(item))?;
    Some((collection[index].clone(), index))
}

/// The element at position `nth`, counting from the end when `nth` is
/// negative (`-1` is the last element). Fails with [`Error::OutOfBounds`]
/// unless `-len <= nth < len`.
///
/// ```
/// assert_eq!(sift::nth(&[0, 1, 2, 3], -1), Ok(3));
/// assert!(sift::nth::<i32>(&[], 0).is_err());
/// ```
pub fn nth<T: Clone>(collection: &[T], nth: isize) -> Result<T> {
    let len = collection.len();
    let index = if nth < 0 {
        len.checked_sub(nth.unsigned_abs())
    } else {
        Some(nth.unsigned_abs())
    };
    index
        .and_then(|index| collection.get(index))
        .cloned()
        .ok_or(Error::OutOfBounds { index: nth, len })
}

/// The greatest element of `collection`, or `T::default()` if it is empty.
/// Ties go to the first occurrence.
#[must_use]
pub fn max_of_collection<T: PartialOrd + Clone + Default>(collection: &[T]) -> T {
    let mut iter = collection.iter();
    let Some(mut best) = iter.next() else { return T::default() };
    for item in iter {
        if item > best {
            best = item;
        }
    }
    best.clone()
}

/// The position at which `value` would be inserted into the ascending
/// `sorted` slice: the index of the first element greater than `value`, or
/// `sorted.len()` if there is none.
#[must_use]
pub fn sorted_index<T: PartialOrd>(sorted: &[T], value: &T) -> usize {
    sorted.iter().position(|item| value < item).unwrap_or(sorted.len())
}
