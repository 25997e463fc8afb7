//! Key-value helpers. The inputs are borrowed maps of any kind (anything that
//! iterates as `(&K, &V)`: a `std` `HashMap` or `BTreeMap`, or this crate's
//! [`Map`]), and the outputs are fresh `Map`s. Where two entries end up with
//! the same key, the later one wins.

use std::hash::Hash;

use crate::membership::contains;
use crate::set::{sift_set_from, Map, Uncounted};

/// Builds a map from `(key, value)` pairs.
#[must_use]
pub fn from_entries<K: Hash + Eq, V>(entries: impl IntoIterator<Item = (K, V)>) -> Map<K, V> {
    entries.into_iter().collect()
}

/// An alias of [`from_entries`].
#[must_use]
pub fn from_pairs<K: Hash + Eq, V>(entries: impl IntoIterator<Item = (K, V)>) -> Map<K, V> {
    from_entries(entries)
}

/// The `(key, value)` pairs of `map`.
#[must_use]
pub fn entries<'a, K, V>(map: impl IntoIterator<Item = (&'a K, &'a V)>) -> Vec<(K, V)>
where
    K: Clone + 'a,
    V: Clone + 'a,
{
    map.into_iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// An alias of [`entries`].
#[must_use]
pub fn to_pairs<'a, K, V>(map: impl IntoIterator<Item = (&'a K, &'a V)>) -> Vec<(K, V)>
where
    K: Clone + 'a,
    V: Clone + 'a,
{
    entries(map)
}

/// The keys of `map`.
#[must_use]
pub fn keys<'a, K: Clone + 'a, V: 'a>(map: impl IntoIterator<Item = (&'a K, &'a V)>) -> Vec<K> {
    map.into_iter().map(|(k, _)| k.clone()).collect()
}

/// The values of `map`.
#[must_use]
pub fn values<'a, K: 'a, V: Clone + 'a>(map: impl IntoIterator<Item = (&'a K, &'a V)>) -> Vec<V> {
    map.into_iter().map(|(_, v)| v.clone()).collect()
}

/// The entries of `map` for which `predicate` holds.
#[must_use]
pub fn pick_by<'a, K, V>(
    map: impl IntoIterator<Item = (&'a K, &'a V)>,
    predicate: impl Fn(&K, &V) -> bool,
) -> Map<K, V>
where
    K: Hash + Eq + Clone + 'a,
    V: Clone + 'a,
{
    map.into_iter()
        .filter(|&(k, v)| predicate(k, v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// The entries of `map` whose key is one of `keys`.
#[must_use]
pub fn pick_by_keys<'a, K, V>(
    map: impl IntoIterator<Item = (&'a K, &'a V)>,
    keys: &[K],
) -> Map<K, V>
where
    K: Hash + Eq + Clone + 'a,
    V: Clone + 'a,
{
    let wanted = sift_set_from::<_, Uncounted>(keys);
    pick_by(map, |k, _| wanted.contains(k))
}

/// The entries of `map` whose value is one of `values`.
#[must_use]
pub fn pick_by_values<'a, K, V>(
    map: impl IntoIterator<Item = (&'a K, &'a V)>,
    values: &[V],
) -> Map<K, V>
where
    K: Hash + Eq + Clone + 'a,
    V: PartialEq + Clone + 'a,
{
    pick_by(map, |_, v| contains(values, v))
}

/// The entries of `map` for which `predicate` fails.
#[must_use]
pub fn omit_by<'a, K, V>(
    map: impl IntoIterator<Item = (&'a K, &'a V)>,
    predicate: impl Fn(&K, &V) -> bool,
) -> Map<K, V>
where
    K: Hash + Eq + Clone + 'a,
    V: Clone + 'a,
{
    pick_by(map, |k, v| !predicate(k, v))
}

/// The entries of `map` whose key is not one of `keys`.
#[must_use]
pub fn omit_by_keys<'a, K, V>(
    map: impl IntoIterator<Item = (&'a K, &'a V)>,
    keys: &[K],
) -> Map<K, V>
where
    K: Hash + Eq + Clone + 'a,
    V: Clone + 'a,
{
    let unwanted = sift_set_from::<_, Uncounted>(keys);
    pick_by(map, |k, _| !unwanted.contains(k))
}

/// The entries of `map` whose value is not one of `values`.
#[must_use]
pub fn omit_by_values<'a, K, V>(
    map: impl IntoIterator<Item = (&'a K, &'a V)>,
    values: &[V],
) -> Map<K, V>
where
    K: Hash + Eq + Clone + 'a,
    V: PartialEq + Clone + 'a,
{
    pick_by(map, |_, v| !contains(values, v))
}

/// The value stored under `key`, or `fallback` if there is none. This scans
/// the entries, so it works for any map; call `get` directly when the map's own
/// lookup is at hand.
#[must_use]
pub fn value_or<'a, K, V>(
    map: impl IntoIterator<Item = (&'a K, &'a V)>,
    key: &K,
    fallback: V,
) -> V
where
    K: PartialEq + 'a,
    V: Clone + 'a,
{
    map.into_iter().find(|&(k, _)| k == key).map_or(fallback, |(_, v)| v.clone())
}

/// Swaps the keys and values of `map`. If a value occurs more than once, the
/// last key it appears with wins.
#[must_use]
pub fn invert<'a, K, V>(map: impl IntoIterator<Item = (&'a K, &'a V)>) -> Map<V, K>
where
    K: Clone + 'a,
    V: Hash + Eq + Clone + 'a,
{
    map.into_iter().map(|(k, v)| (v.clone(), k.clone())).collect()
}

/// Merges `maps` from left to right: a key present in several maps takes its
/// value from the rightmost one.
#[must_use]
pub fn assign<'a, K, V, M>(maps: impl IntoIterator<Item = M>) -> Map<K, V>
where
    K: Hash + Eq + Clone + 'a,
    V: Clone + 'a,
    M: IntoIterator<Item = (&'a K, &'a V)>,
{
    let mut out = Map::default();
    for map in maps {
        out.extend(map.into_iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    out
}

/// Re-keys `map` with the key `iteratee(value, key)` computes for each entry.
#[must_use]
pub fn map_keys<'a, K, V, R>(
    map: impl IntoIterator<Item = (&'a K, &'a V)>,
    iteratee: impl Fn(&V, &K) -> R,
) -> Map<R, V>
where
    K: 'a,
    V: Clone + 'a,
    R: Hash + Eq,
{
    map.into_iter().map(|(k, v)| (iteratee(v, k), v.clone())).collect()
}

/// Replaces each value of `map` with `iteratee(value, key)`.
#[must_use]
pub fn map_values<'a, K, V, R>(
    map: impl IntoIterator<Item = (&'a K, &'a V)>,
    iteratee: impl Fn(&V, &K) -> R,
) -> Map<K, R>
where
    K: Hash + Eq + Clone + 'a,
    V: 'a,
{
    map.into_iter().map(|(k, v)| (k.clone(), iteratee(v, k))).collect()
}

/// Replaces each entry of `map` with the pair `iteratee(key, value)` returns.
#[must_use]
pub fn map_entries<'a, K1, V1, K2, V2>(
    map: impl IntoIterator<Item = (&'a K1, &'a V1)>,
    iteratee: impl Fn(&K1, &V1) -> (K2, V2),
) -> Map<K2, V2>
where
    K1: 'a,
    V1: 'a,
    K2: Hash + Eq,
{
    map.into_iter().map(|(k, v)| iteratee(k, v)).collect()
}

/// Turns each entry of `map` into `iteratee(key, value)`.
#[must_use]
pub fn map_to_slice<'a, K, V, R>(
    map: impl IntoIterator<Item = (&'a K, &'a V)>,
    iteratee: impl Fn(&K, &V) -> R,
) -> Vec<R>
where
    K: 'a,
    V: 'a,
{
    map.into_iter().map(|(k, v)| iteratee(k, v)).collect()
}
