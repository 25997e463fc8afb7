//! Grouping, partitioning and counting. Every operation here takes a
//! caller-supplied function that derives a key from each element, and collects
//! the elements (or their counts) under those keys.

use std::hash::Hash;

use crate::set::{sift_set_from, Counted, Map, SiftSet};

/// Groups the elements of `collection` by the key `key_fn` derives from each.
/// Within a group the elements keep their order in `collection`; the order of
/// the groups themselves is unspecified. (Use [`partition_by`] when it
/// matters.)
///
/// ```
/// let groups = sift::group_by(&[0, 1, 2, 3, 4, 5], |n| n % 3);
/// assert_eq!(groups[&0], vec![0, 3]);
/// assert_eq!(groups[&1], vec![1, 4]);
/// assert_eq!(groups[&2], vec![2, 5]);
/// ```
#[must_use]
pub fn group_by<T, K, F>(collection: &[T], key_fn: F) -> Map<K, Vec<T>>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut groups = Map::default();
    for item in collection {
        groups.entry(key_fn(item)).or_insert_with(Vec::new).push(item.clone());
    }
    groups
}

/// Splits `collection` into groups of elements sharing the key `key_fn`
/// derives. The groups are ordered by the first appearance of their key, and
/// each group keeps the order of its elements in `collection`.
#[must_use]
pub fn partition_by<T, K, F>(collection: &[T], key_fn: F) -> Vec<Vec<T>>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    // `group_by`'s map iterates in order of first insertion, which is exactly
    // the first-encounter order of the keys.
    group_by(collection, key_fn).into_values().collect()
}

/// Maps each key `key_fn` derives to the element it was derived from. When two
/// elements share a key, the later one wins.
#[must_use]
pub fn key_by<T, K, F>(collection: &[T], key_fn: F) -> Map<K, T>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    associate(collection, |item| (key_fn(item), item.clone()))
}

/// Counts the occurrences of each distinct element of `collection`.
#[must_use]
pub fn count_values<T: Hash + Eq + Clone>(collection: &[T]) -> Map<T, usize> {
    sift_set_from::<_, Counted>(collection)
        .into_counts()
        .map(|(item, count)| (item.clone(), count))
        .collect()
}

/// Counts the occurrences of each distinct value `mapper` produces from the
/// elements of `collection`. The same as `count_values` of the mapped slice.
#[must_use]
pub fn count_values_by<T, U, F>(collection: &[T], mapper: F) -> Map<U, usize>
where
    U: Hash + Eq,
    F: Fn(&T) -> U,
{
    let mut set = SiftSet::<U, Counted>::with_capacity(collection.len());
    set.extend(collection.iter().map(mapper));
    set.into_counts().collect()
}

/// Builds a map from the `(key, value)` pair `transform` returns for each
/// element. When two pairs share a key, the later one wins.
#[must_use]
pub fn associate<T, K, V, F>(collection: &[T], transform: F) -> Map<K, V>
where
    K: Hash + Eq,
    F: Fn(&T) -> (K, V),
{
    let mut result = Map::with_capacity_and_hasher(collection.len(), Default::default());
    for item in collection {
        let (key, value) = transform(item);
        result.insert(key, value);
    }
    result
}

/// An alias of [`associate`].
#[must_use]
pub fn slice_to_map<T, K, V, F>(collection: &[T], transform: F) -> Map<K, V>
where
    K: Hash + Eq,
    F: Fn(&T) -> (K, V),
{
    associate(collection, transform)
}

/// Counts the elements of `collection` equal to `value`.
#[must_use]
pub fn count<T: PartialEq>(collection: &[T], value: &T) -> usize {
    collection.iter().filter(|item| *item == value).count()
}

/// Counts the elements of `collection` for which `predicate` holds.
#[must_use]
pub fn count_by<T>(collection: &[T], mut predicate: impl FnMut(&T) -> bool) -> usize {
    collection.iter().filter(|item| predicate(*item)).count()
}
