//! General-purpose sequence helpers. Apart from `reverse`, each returns a new
//! `Vec` and leaves its input alone.

/// Splits `collection` into chunks of `size` elements; the last chunk holds
/// whatever is left over.
///
/// # Panics
///
/// Panics if `size` is zero. A zero chunk size is a programming error, not a
/// runtime condition to recover from.
#[must_use]
pub fn chunk<T: Clone>(collection: &[T], size: usize) -> Vec<Vec<T>> {
    assert!(size > 0, "chunk size must be greater than 0");
    collection.chunks(size).map(<[T]>::to_vec).collect()
}

/// The elements of `collection` that differ from `T::default()`.
#[must_use]
pub fn compact<T: PartialEq + Default + Clone>(collection: &[T]) -> Vec<T> {
    let zero = T::default();
    collection.iter().filter(|item| **item != zero).cloned().collect()
}

/// Applies `iteratee` to each element and its index.
#[must_use]
pub fn map<T, R>(collection: &[T], mut iteratee: impl FnMut(&T, usize) -> R) -> Vec<R> {
    collection.iter().enumerate().map(|(i, item)| iteratee(item, i)).collect()
}

/// The elements for which `predicate(element, index)` holds.
#[must_use]
pub fn filter<T: Clone>(collection: &[T], mut predicate: impl FnMut(&T, usize) -> bool) -> Vec<T> {
    collection
        .iter()
        .enumerate()
        .filter(|&(i, item)| predicate(item, i))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Filters and maps in one pass: `callback` returns `Some(result)` for the
/// elements to keep.
#[must_use]
pub fn filter_map<T, R>(
    collection: &[T],
    mut callback: impl FnMut(&T, usize) -> Option<R>,
) -> Vec<R> {
    collection.iter().enumerate().filter_map(|(i, item)| callback(item, i)).collect()
}

/// Maps each element to a `Vec` and concatenates the results.
#[must_use]
pub fn flat_map<T, R>(collection: &[T], mut iteratee: impl FnMut(&T, usize) -> Vec<R>) -> Vec<R> {
    collection.iter().enumerate().flat_map(|(i, item)| iteratee(item, i)).collect()
}

/// `collection` without its first `n` elements.
#[must_use]
pub fn drop_left<T: Clone>(collection: &[T], n: usize) -> Vec<T> {
    collection.get(n..).unwrap_or_default().to_vec()
}

/// `collection` without its last `n` elements.
#[must_use]
pub fn drop_right<T: Clone>(collection: &[T], n: usize) -> Vec<T> {
    let keep = collection.len().saturating_sub(n);
    collection[..keep].to_vec()
}

/// `collection` from the first element for which `predicate` fails.
#[must_use]
pub fn drop_while<T: Clone>(collection: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
    let start = collection.iter().position(|item| !predicate(item)).unwrap_or(collection.len());
    collection[start..].to_vec()
}

/// `collection` up to and including the last element for which `predicate`
/// fails.
#[must_use]
pub fn drop_right_while<T: Clone>(
    collection: &[T],
    mut predicate: impl FnMut(&T) -> bool,
) -> Vec<T> {
    let end = collection.iter().rposition(|item| !predicate(item)).map_or(0, |i| i + 1);
    collection[..end].to_vec()
}

/// A `Vec` as long as `collection`, each element a clone of `initial`.
#[must_use]
pub fn fill<T, U: Clone>(collection: &[T], initial: &U) -> Vec<U> {
    repeat(collection.len(), initial)
}

/// Concatenates the inner slices.
#[must_use]
pub fn flatten<T: Clone>(collection: &[Vec<T>]) -> Vec<T> {
    collection.concat()
}

/// Reverses `collection` in place and returns it.
pub fn reverse<T>(collection: &mut [T]) -> &mut [T] {
    collection.reverse();
    collection
}

/// Calls `iteratee` with each element and its index, first to last.
pub fn for_each<T>(collection: &[T], mut iteratee: impl FnMut(&T, usize)) {
    for (i, item) in collection.iter().enumerate() {
        iteratee(item, i);
    }
}

/// Calls `iteratee` with each element and its index, last to first.
pub fn for_each_right<T>(collection: &[T], mut iteratee: impl FnMut(&T, usize)) {
    for (i, item) in collection.iter().enumerate().rev() {
        iteratee(item, i);
    }
}

/// Folds `collection` into `initial`, first to last.
#[must_use]
pub fn reduce<T, R>(
    collection: &[T],
    mut accumulator: impl FnMut(R, &T, usize) -> R,
    initial: R,
) -> R {
    collection.iter().enumerate().fold(initial, |agg, (i, item)| accumulator(agg, item, i))
}

/// Folds `collection` into `initial`, last to first.
#[must_use]
pub fn reduce_right<T, R>(
    collection: &[T],
    mut accumulator: impl FnMut(R, &T, usize) -> R,
    initial: R,
) -> R {
    collection.iter().enumerate().rev().fold(initial, |agg, (i, item)| accumulator(agg, item, i))
}

/// `[iteratee(0), iteratee(1), ..., iteratee(count - 1)]`
#[must_use]
pub fn times<T>(count: usize, iteratee: impl FnMut(usize) -> T) -> Vec<T> {
    (0..count).map(iteratee).collect()
}

/// Takes one element from each slice in turn, skipping slices that have run
/// out.
///
/// ```
/// let result = sift::interleave(&[&[1][..], &[2, 5, 8], &[3, 6], &[4, 7, 9, 10]]);
/// assert_eq!(result, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
/// ```
#[must_use]
pub fn interleave<T: Clone>(collections: &[&[T]]) -> Vec<T> {
    let longest = collections.iter().map(|c| c.len()).max().unwrap_or(0);
    let total = collections.iter().map(|c| c.len()).sum::<usize>();
    let mut result = Vec::with_capacity(total);
    for i in 0..longest {
        result.extend(collections.iter().filter_map(|c| c.get(i)).cloned());
    }
    result
}

/// `count` clones of `initial`.
#[must_use]
pub fn repeat<T: Clone>(count: usize, initial: &T) -> Vec<T> {
    vec![initial.clone(); count]
}

/// A copy of `collection[start..end]`, with both bounds clamped to the slice
/// (negative bounds clamp to zero), so it never panics. An empty `Vec` when
/// `start >= end`.
#[must_use]
pub fn slice_safe<T: Clone>(collection: &[T], start: isize, end: isize) -> Vec<T> {
    if start >= end {
        return Vec::new();
    }
    let clamp = |bound: isize| usize::try_from(bound).unwrap_or(0).min(collection.len());
    collection[clamp(start)..clamp(end)].to_vec()
}

/// A copy of `collection` with the first `n` elements equal to `old` replaced by
/// `new`. A negative `n` replaces them all.
#[must_use]
pub fn replace_n<T: PartialEq + Clone>(collection: &[T], old: &T, new: &T, n: isize) -> Vec<T> {
    let mut remaining = n;
    collection
        .iter()
        .map(|item| {
            if remaining != 0 && item == old {
                if remaining > 0 {
                    remaining -= 1;
                }
                new.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

/// A copy of `collection` with every element equal to `old` replaced by `new`.
#[must_use]
pub fn replace_all<T: PartialEq + Clone>(collection: &[T], old: &T, new: &T) -> Vec<T> {
    replace_n(collection, old, new, -1)
}

/// Is `collection` in ascending order?
#[must_use]
pub fn is_sorted<T: PartialOrd>(collection: &[T]) -> bool {
    collection.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Is `collection` in ascending order of the keys `iteratee` derives?
#[must_use]
pub fn is_sorted_by_key<T, K: PartialOrd>(collection: &[T], iteratee: impl Fn(&T) -> K) -> bool {
    collection.windows(2).all(|pair| iteratee(&pair[0]) <= iteratee(&pair[1]))
}

/// A new `Vec` holding `collection` followed by `values`.
#[must_use]
pub fn concat<T: Clone>(collection: &[T], values: &[T]) -> Vec<T> {
    [collection, values].concat()
}
