//! Random picks from a slice: `sample`, `samples` and `shuffle`.
//!
//! Each operation comes in two flavors. The plain one draws from a
//! process-wide source, seeded from OS entropy the first time it is used and
//! re-seedable with [`seed`] for reproducible runs. The source sits behind a
//! mutex, so the plain flavor is safe to call from several threads. The `_with`
//! flavor takes the caller's own `Rng`, for a per-call or per-thread source.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

static SOURCE: Lazy<Mutex<StdRng>> = Lazy::new(|| {
    debug!("seeding the shared random source from OS entropy");
    Mutex::new(StdRng::from_entropy())
});

/// Re-seeds the process-wide random source. After `seed(n)`, a given sequence
/// of calls to `sample`, `samples` and `shuffle` produces the same results
/// every time (as long as no other thread draws from the source meanwhile).
pub fn seed(state: u64) {
    debug!(state, "re-seeding the shared random source");
    *SOURCE.lock() = StdRng::seed_from_u64(state);
}

/// Returns a uniformly chosen element of `collection`, or `T::default()` if
/// `collection` is empty. Check the length first if the two cases must be told
/// apart.
#[must_use]
pub fn sample<T: Clone + Default>(collection: &[T]) -> T {
    sample_with(collection, &mut *SOURCE.lock())
}

/// Like [`sample`], drawing from `rng`.
#[must_use]
pub fn sample_with<T: Clone + Default, R: Rng + ?Sized>(collection: &[T], rng: &mut R) -> T {
    if collection.is_empty() {
        return T::default();
    }
    collection[rng.gen_range(0..collection.len())].clone()
}

/// Returns `min(count, collection.len())` elements of `collection`, chosen
/// without replacement (no position is picked twice) and in random order.
/// When `count` is at least the length of `collection` the result is a random
/// permutation of the whole slice.
#[must_use]
pub fn samples<T: Clone>(collection: &[T], count: usize) -> Vec<T> {
    samples_with(collection, count, &mut *SOURCE.lock())
}

/// Like [`samples`], drawing from `rng`.
///
/// This is a partial Fisher–Yates shuffle: each pick takes a uniformly chosen
/// index of the not-yet-picked prefix of a working copy, then swaps the
/// last element of the prefix into the hole and shrinks the prefix by one. So
/// the cost is O(count) after the copy, rather than O(count·n).
#[must_use]
pub fn samples_with<T: Clone, R: Rng + ?Sized>(
    collection: &[T],
    count: usize,
    rng: &mut R,
) -> Vec<T> {
    let wanted = count.min(collection.len());
    let mut remaining = collection.to_vec();
    let mut result = Vec::with_capacity(wanted);
    for _ in 0..wanted {
        let index = rng.gen_range(0..remaining.len());
        result.push(remaining.swap_remove(index));
    }
    result
}

/// Shuffles `collection` in place (Fisher–Yates) and returns it.
pub fn shuffle<T>(collection: &mut [T]) -> &mut [T] {
    shuffle_with(collection, &mut *SOURCE.lock())
}

/// Like [`shuffle`], drawing from `rng`.
pub fn shuffle_with<'a, T, R: Rng + ?Sized>(collection: &'a mut [T], rng: &mut R) -> &'a mut [T] {
    collection.shuffle(rng);
    collection
}
