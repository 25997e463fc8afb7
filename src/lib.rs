//! `sift` is a library of small, generic operations on slices and maps. The
//! `algebra` module is its kernel: `union`, `intersect`, `difference`, `xor`
//! and `uniq` treat slices as sets or multisets of elements, using a transient
//! hash index (see the `set` module) so that each operation is linear in the
//! total size of its inputs. Around that kernel are grouping and counting by a
//! derived key, arithmetic ranges, random sampling, and assorted slice, map and
//! value helpers.
//!
//! Every operation leaves its inputs alone and returns a new collection or
//! scalar, except `reverse` and `shuffle`, which work in place.
//!
//! Conventions:
//! * Results that are maps are [`Map`]s. Their key order follows first
//!   insertion, but for `group_by`, `key_by`, `count_values`, `associate` and
//!   `xor` that order is not part of the contract.
//! * The few fallible operations return [`Result`], with [`Error`] naming
//!   what was wrong. `chunk` with a size of zero is the one place that panics.
//! * The `random` feature (on by default) provides `sample`, `samples` and
//!   `shuffle`.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

mod algebra;
mod error;
mod find;
mod grouping;
mod maps;
mod math;
mod membership;
#[cfg(feature = "random")]
mod random;
mod range;
mod set;
mod slice;
mod value;

pub use crate::algebra::{
    difference, difference_by, has_duplicates, intersect, intersect_n, union, uniq, uniq_by,
    without, without_empty, xor,
};
pub use crate::error::{Error, Result};
pub use crate::find::{
    find, find_index_of, find_last_index_of, index_of, last_index_of, max_of_collection, nth,
    sorted_index,
};
pub use crate::grouping::{
    associate, count, count_by, count_values, count_values_by, group_by, key_by, partition_by,
    slice_to_map,
};
pub use crate::maps::{
    assign, entries, from_entries, from_pairs, invert, keys, map_entries, map_keys, map_to_slice,
    map_values, omit_by, omit_by_keys, omit_by_values, pick_by, pick_by_keys, pick_by_values,
    to_pairs, value_or, values,
};
pub use crate::math::{abs, max, Number};
pub use crate::membership::{
    contains, contains_by, every, every_by, includes, none, none_by, some, some_by,
};
#[cfg(feature = "random")]
pub use crate::random::{sample, sample_with, samples, samples_with, seed, shuffle, shuffle_with};
pub use crate::range::{range, range_with_step};
pub use crate::set::Map;
pub use crate::slice::{
    chunk, compact, concat, drop_left, drop_right, drop_right_while, drop_while, fill, filter,
    filter_map, flat_map, flatten, for_each, for_each_right, interleave, is_sorted,
    is_sorted_by_key, map, reduce, reduce_right, repeat, replace_all, replace_n, reverse,
    slice_safe, times,
};
pub use crate::value::{
    empty, from_any_slice, from_option, from_option_or, is_empty, is_not_empty, non_empty,
    to_any_slice,
};
