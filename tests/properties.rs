//! Laws the set operations and ranges hold for arbitrary inputs.

use itertools::Itertools;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Small element domain so that generated slices overlap and repeat.
fn elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0..20_i32, 0..40)
}

proptest! {
    /// uniq keeps first occurrences, so applying it twice changes nothing.
    #[test]
    fn prop_uniq_is_idempotent(collection in elements()) {
        let once = sift::uniq(&collection);
        prop_assert_eq!(sift::uniq(&once), once.clone());
        prop_assert!(once.iter().all_unique());
        prop_assert_eq!(once, collection.iter().copied().unique().collect_vec());
    }

    /// The union of a single list is that list without its duplicates.
    #[test]
    fn prop_union_of_one_list_is_uniq(collection in elements()) {
        prop_assert_eq!(sift::union(&[&collection[..]]), sift::uniq(&collection));
    }

    /// Every element of `a` lands in exactly one of intersect(a, b) and
    /// difference(a, b).
    #[test]
    fn prop_intersect_and_difference_split_a(a in elements(), b in elements()) {
        let inside = sift::intersect(&a, &b);
        let outside = sift::difference(&a, &b);

        prop_assert!(inside.iter().all(|n| a.contains(n) && b.contains(n)));
        prop_assert!(outside.iter().all(|n| a.contains(n) && !b.contains(n)));
        prop_assert!(inside.iter().all(|n| !outside.contains(n)));
        prop_assert_eq!(
            inside.iter().chain(outside.iter()).copied().sorted().collect_vec(),
            sift::uniq(&a).into_iter().sorted().collect_vec()
        );
    }

    /// xor of two lists is the union of the two one-sided differences.
    #[test]
    fn prop_xor_of_two_is_both_differences(a in elements(), b in elements()) {
        let a = sift::uniq(&a);
        let b = sift::uniq(&b);
        let expected = sift::difference(&a, &b)
            .into_iter()
            .chain(sift::difference(&b, &a))
            .sorted()
            .collect_vec();
        let xor = sift::xor(&[&a[..], &b[..]]).into_iter().sorted().collect_vec();
        prop_assert_eq!(xor, expected);
    }

    /// Ranges hold floor(|end - start| / |step|) elements, spaced by `step`.
    #[test]
    fn prop_range_with_step_is_evenly_spaced(
        start in -100_i32..100,
        end in -100_i32..100,
        magnitude in 1_i32..10
    ) {
        let step = if start <= end { magnitude } else { -magnitude };
        let result = sift::range_with_step(start, end, step);
        prop_assert!(result.is_ok());
        let result = result.unwrap_or_default();

        let expected_len = ((end - start).abs() / magnitude) as usize;
        prop_assert_eq!(result.len(), expected_len);
        if let Some(first) = result.first() {
            prop_assert_eq!(*first, start);
        }
        prop_assert!(result.iter().tuple_windows().all(|(a, b)| b - a == step));
        prop_assert!(!result.contains(&end));
    }

    /// samples picks min(count, len) distinct positions.
    #[cfg(feature = "random")]
    #[test]
    fn prop_samples_picks_distinct_positions(
        len in 0_usize..60,
        count in 0_usize..80,
        seed: u64
    ) {
        let positions = (0..len).collect_vec();
        let picked = sift::samples_with(&positions, count, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(picked.len(), count.min(len));
        prop_assert!(picked.iter().all_unique());
        prop_assert!(picked.iter().all(|n| *n < len));
    }
}
