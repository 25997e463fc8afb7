//! Houses the set algebra: `union`, `intersect`, `intersect_n`, `difference`,
//! `xor`, `uniq` and their relatives. Each operation treats its slices as sets
//! (or multisets) of elements:
//!
//! * `union` returns the elements that occur in any slice,
//! * `intersect_n` returns the elements that occur in every slice,
//! * `difference` returns the elements of the first slice that occur in no other,
//! * `xor` returns the elements that occur exactly once over all slices, and
//! * `uniq` returns the elements of one slice without repeats.
//!
//! The membership index behind each operation borrows the input elements, so
//! an element is cloned only when it is copied to the result.

use std::hash::Hash;

use crate::membership::contains;
use crate::set::{sift_set_from, Counted, SiftSet, Uncounted};

/// Returns the elements of `a` that are also present in `b`. This is membership
/// filtering rather than a true set intersection: the result follows the order
/// of `a` and keeps any duplicates `a` has.
#[must_use]
pub fn intersect<T: Hash + Eq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let other = sift_set_from::<_, Uncounted>(b);
    a.iter().filter(|item| other.contains(*item)).cloned().collect()
}

/// Returns the elements present in `first` and in each slice of `rest`, in the
/// order they occur in `first`.
///
/// The result is computed by counting the occurrences of each distinct element
/// over all the inputs and keeping those seen exactly as many times as there
/// are inputs. *Precondition:* every input must already be free of duplicates
/// (see [`uniq`]); otherwise the counts are inflated and the result is
/// unspecified.
#[must_use]
pub fn intersect_n<T: Hash + Eq + Clone>(first: &[T], rest: &[&[T]]) -> Vec<T> {
    let inputs = rest.len() + 1;
    let mut set = sift_set_from::<_, Counted>(first);
    for operand in rest {
        set.extend(operand.iter());
    }
    set.retain_count(|seen| seen == inputs);
    set.into_keys().cloned().collect()
}

/// Returns every distinct element found in `lists`, each at the position of its
/// first occurrence, scanning the lists left to right.
#[must_use]
pub fn union<T: Hash + Eq + Clone>(lists: &[&[T]]) -> Vec<T> {
    let total = lists.iter().map(|list| list.len()).sum::<usize>();
    let mut set = SiftSet::<&T, Uncounted>::with_capacity(total);
    for list in lists {
        set.extend(list.iter());
    }
    set.into_keys().cloned().collect()
}

/// Returns the elements whose total number of occurrences over all of `arrays`
/// is exactly one. An element repeated within a single array is therefore
/// excluded, just as one shared between two arrays is.
///
/// The order of the result is unspecified. (This implementation yields first
/// occurrences, but callers should not depend on that.)
#[must_use]
pub fn xor<T: Hash + Eq + Clone>(arrays: &[&[T]]) -> Vec<T> {
    let total = arrays.iter().map(|array| array.len()).sum::<usize>();
    let mut set = SiftSet::<&T, Counted>::with_capacity(total);
    for array in arrays {
        set.extend(array.iter());
    }
    set.retain_count(|seen| seen == 1);
    set.into_keys().cloned().collect()
}

/// Returns the elements of `collection` that do not occur in `excludes`,
/// keeping the order and multiplicity of `collection`.
#[must_use]
pub fn difference<T: Hash + Eq + Clone>(collection: &[T], excludes: &[T]) -> Vec<T> {
    let excluded = sift_set_from::<_, Uncounted>(excludes);
    collection.iter().filter(|item| !excluded.contains(*item)).cloned().collect()
}

/// Like [`difference`], but compares the keys `key_fn` derives from each
/// element rather than the elements themselves.
#[must_use]
pub fn difference_by<T, K, F>(collection: &[T], excludes: &[T], key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut excluded = SiftSet::<K, Uncounted>::with_capacity(excludes.len());
    excluded.extend(excludes.iter().map(&key_fn));
    collection.iter().filter(|item| !excluded.contains(&key_fn(*item))).cloned().collect()
}

/// Returns `collection` with repeats removed: only the first occurrence of each
/// element is kept, and the kept elements stay in their original order.
#[must_use]
pub fn uniq<T: Hash + Eq + Clone>(collection: &[T]) -> Vec<T> {
    sift_set_from::<_, Uncounted>(collection).into_keys().cloned().collect()
}

/// Like [`uniq`], but two elements are repeats when `key_fn` maps them to the
/// same key.
#[must_use]
pub fn uniq_by<T, K, F>(collection: &[T], key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut seen = SiftSet::<K, Uncounted>::with_capacity(collection.len());
    collection.iter().filter(|item| seen.insert(key_fn(*item))).cloned().collect()
}

/// Returns `true` if some element occurs more than once in `collection`.
#[must_use]
pub fn has_duplicates<T: Hash + Eq>(collection: &[T]) -> bool {
    let mut seen = SiftSet::<&T, Uncounted>::with_capacity(collection.len());
    !collection.iter().all(|item| seen.insert(item))
}

/// Returns the elements of `collection` that are not in `exclude`. Unlike
/// [`difference`] this needs only `PartialEq`, and costs O(n·m).
#[must_use]
pub fn without<T: PartialEq + Clone>(collection: &[T], exclude: &[T]) -> Vec<T> {
    collection.iter().filter(|item| !contains(exclude, *item)).cloned().collect()
}

/// Returns the elements of `collection` that differ from `T::default()`.
#[must_use]
pub fn without_empty<T: PartialEq + Default + Clone>(collection: &[T]) -> Vec<T> {
    let empty = T::default();
    collection.iter().filter(|item| **item != empty).cloned().collect()
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    fn sorted(mut v: Vec<i32>) -> Vec<i32> {
        v.sort_unstable();
        v
    }

    #[test]
    fn intersect_filters_the_first_slice_by_membership_in_the_second() {
        assert_eq!(intersect(&[0, 1, 2, 3, 4, 5], &[0, 2]), vec![0, 2]);
        assert_eq!(intersect(&[0, 1, 2, 3, 4, 5], &[0, 6]), vec![0]);
        assert_eq!(intersect(&[0, 1, 2, 3, 4, 5], &[-1, 6]), Vec::<i32>::new());
        assert_eq!(intersect(&[3, 1, 3, 2], &[2, 3]), vec![3, 3, 2]);
    }

    #[test]
    fn intersect_n_keeps_elements_found_in_every_input() {
        let result = intersect_n(&[1, 2, 3, 4], &[&[2, 3, 4, 5][..], &[4, 3, 6]]);
        assert_eq!(result, vec![3, 4]);
        assert_eq!(intersect_n(&[1, 2], &[]), vec![1, 2]);
        let empty: &[i32] = &[];
        assert_eq!(intersect_n(&[1, 2], &[empty]), Vec::<i32>::new());
    }

    #[test]
    fn union_keeps_first_occurrences_left_to_right() {
        assert_eq!(union(&[&[0, 1, 2, 3, 4, 5][..], &[0, 2, 10]]), vec![0, 1, 2, 3, 4, 5, 10]);
        assert_eq!(union(&[&[7, 7, 1][..], &[1, 9], &[9, 8]]), vec![7, 1, 9, 8]);
        assert_eq!(union::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn xor_keeps_elements_seen_exactly_once_overall() {
        assert_eq!(sorted(xor(&[&[1, 2, 3][..], &[3, 4, 5]])), vec![1, 2, 4, 5]);
        // Duplicates within one array count too
        assert_eq!(sorted(xor(&[&[1, 1, 2][..], &[3]])), vec![2, 3]);
        assert_eq!(xor::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn difference_preserves_order_and_multiplicity() {
        assert_eq!(difference(&[0, 1, 2, 3, 4, 5], &[0, 2, 10]), vec![1, 3, 4, 5]);
        assert_eq!(difference(&[4, 1, 4, 2], &[2]), vec![4, 1, 4]);
        assert_eq!(difference(&[1, 2], &[]), vec![1, 2]);
    }

    #[test]
    fn difference_by_compares_derived_keys() {
        let result = difference_by(&[1, 2, 3, 4, 5], &[7, 9], |n| n % 3);
        assert_eq!(result, vec![2, 5]);
    }

    #[test]
    fn uniq_and_uniq_by_keep_first_occurrences() {
        assert_eq!(uniq(&[1, 2, 2, 1]), vec![1, 2]);
        assert_eq!(uniq(&["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
        assert_eq!(uniq_by(&[0, 1, 2, 3, 4, 5], |n| n % 3), vec![0, 1, 2]);
    }

    #[test]
    fn has_duplicates_detects_repeats() {
        assert!(has_duplicates(&[1, 2, 2]));
        assert!(!has_duplicates(&["a", "b", "c"]));
        assert!(!has_duplicates::<i32>(&[]));
    }

    #[test]
    fn without_and_without_empty() {
        assert_eq!(without(&[1, 2, 3], &[2]), vec![1, 3]);
        assert_eq!(without(&["a", "b", "c"], &["a", "c"]), vec!["b"]);
        assert_eq!(without_empty(&[0, 1, 2, 0]), vec![1, 2]);
        assert_eq!(without_empty(&["", "a", "", "b"]), vec!["a", "b"]);
    }
}
