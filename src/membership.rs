//! Membership and predicate tests. These are the leaves everything else is
//! built on: plain linear scans that need nothing more than `PartialEq`.

/// Returns `true` if `element` is present in `collection`. O(n).
#[must_use]
pub fn contains<T: PartialEq>(collection: &[T], element: &T) -> bool {
    collection.iter().any(|item| item == element)
}

/// An alias of [`contains`].
#[must_use]
pub fn includes<T: PartialEq>(collection: &[T], element: &T) -> bool {
    contains(collection, element)
}

/// Returns `true` if `predicate` holds for some element of `collection`.
#[must_use]
pub fn contains_by<T>(collection: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    collection.iter().any(predicate)
}

/// Returns `true` if every element of `subset` is contained in `collection`.
/// An empty `subset` is vacuously contained.
#[must_use]
pub fn every<T: PartialEq>(collection: &[T], subset: &[T]) -> bool {
    subset.iter().all(|elem| contains(collection, elem))
}

/// Returns `true` if `predicate` holds for every element of `collection`, or
/// `collection` is empty.
#[must_use]
pub fn every_by<T>(collection: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    collection.iter().all(predicate)
}

/// Returns `true` if at least one element of `subset` is contained in
/// `collection`.
///
/// Unlike [`every`] and [`none`], an empty `subset` is *not* treated as
/// vacuously satisfying the test: `some(anything, &[])` is `false`.
#[must_use]
pub fn some<T: PartialEq>(collection: &[T], subset: &[T]) -> bool {
    subset.iter().any(|elem| contains(collection, elem))
}

/// Returns `true` if `predicate` holds for any element of `collection`; an
/// empty `collection` gives `false`.
#[must_use]
pub fn some_by<T>(collection: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    collection.iter().any(predicate)
}

/// Returns `true` if no element of `subset` is contained in `collection`, or
/// `subset` is empty.
#[must_use]
pub fn none<T: PartialEq>(collection: &[T], subset: &[T]) -> bool {
    !subset.iter().any(|elem| contains(collection, elem))
}

/// Returns `true` if `predicate` holds for no element of `collection`, or
/// `collection` is empty.
#[must_use]
pub fn none_by<T>(collection: &[T], mut predicate: impl FnMut(&T) -> bool) -> bool {
    !collection.iter().any(|item| predicate(item))
}
