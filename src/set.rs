//! Provides the `SiftSet` structure, the transient membership index that the
//! set algebra and grouping operations build inside a single call and drop
//! before returning.
use fxhash::FxBuildHasher;
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// The map type returned by the grouping and key-value operations. It is an
/// `IndexMap`, so iteration follows first insertion, but callers should treat
/// the key order of `group_by`, `key_by`, `count_values` and friends as
/// unspecified.
pub type Map<K, V> = IndexMap<K, V, FxBuildHasher>;

/// A `SiftSet` is a set of keys, each key of an underlying `IndexMap`.
/// * Keys are usually `&'data T`, borrowed from the slices being combined, so
///   building the index never clones an element. Derived keys (`uniq_by`,
///   `count_values_by`, ...) are owned.
/// * Each key is associated with a `Counter` that tallies (or ignores) the
///   number of times the key was inserted.
/// * Iteration order is the order of first insertion, which is what lets
///   `uniq`, `union` and `partition_by` preserve first occurrences.
pub(crate) struct SiftSet<K, Counter: Tally> {
    set: IndexMap<K, Counter, FxBuildHasher>,
}

/// The `Tally` trait is used for counting the number of times a key is
/// inserted in a `SiftSet`.  (Or, optionally, not to count that.)
pub(crate) trait Tally: Copy {
    fn new() -> Self;
    fn value(self) -> usize;
    fn increment(&mut self);
}

/// The `Counted` flavor of `Tally` actually counts things. Its value is never
/// zero.
pub(crate) type Counted = usize;
impl Tally for Counted {
    fn new() -> Self {
        1
    }
    fn value(self) -> usize {
        self
    }
    fn increment(&mut self) {
        *self += 1;
    }
}

/// The `Uncounted` flavor of `Tally` has a `value()` of zero no matter how many
/// times you `increment()` it.
#[derive(Clone, Copy)]
pub(crate) struct Uncounted();
impl Tally for Uncounted {
    fn new() -> Self {
        Uncounted()
    }
    fn value(self) -> usize {
        0
    }
    fn increment(&mut self) {}
}

/// Creates a new `SiftSet` whose keys borrow every element of `slice`.
pub(crate) fn sift_set_from<T: Hash + Eq, Counter: Tally>(slice: &[T]) -> SiftSet<&T, Counter> {
    let mut set = SiftSet::with_capacity(slice.len());
    set.extend(slice);
    set
}

impl<K: Hash + Eq, Counter: Tally> SiftSet<K, Counter> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        SiftSet { set: IndexMap::with_capacity_and_hasher(capacity, FxBuildHasher::default()) }
    }

    /// Insert `key`, bumping its tally if it is already present. Returns `true`
    /// when `key` was not in the set before.
    pub(crate) fn insert(&mut self, key: K) -> bool {
        match self.set.entry(key) {
            Entry::Occupied(mut seen) => {
                seen.get_mut().increment();
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(Counter::new());
                true
            }
        }
    }

    /// Insert every key in `keys`
    pub(crate) fn extend(&mut self, keys: impl IntoIterator<Item = K>) {
        for key in keys {
            self.insert(key);
        }
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.set.contains_key(key)
    }

    /// Like `IndexMap`'s `.retain` method, but exposes just the tally, by value.
    /// The relative order of the retained keys is unchanged.
    pub(crate) fn retain_count(&mut self, keep: impl Fn(usize) -> bool) {
        self.set.retain(|_k, count| keep(count.value()));
    }

    pub(crate) fn into_keys(self) -> impl Iterator<Item = K> {
        self.set.into_keys()
    }

    /// The keys, each paired with the number of times it was inserted.
    pub(crate) fn into_counts(self) -> impl Iterator<Item = (K, usize)> {
        self.set.into_iter().map(|(key, count)| (key, count.value()))
    }
}
