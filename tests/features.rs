use anyhow::Result;
use itertools::Itertools;
use rstest::rstest;

use sift::Error;

#[rstest]
#[case(0, 3, vec![0, 1, 2])]
#[case(-1, 2, vec![-1, 0, 1])]
#[case(5, 5, vec![])]
fn range_counts_up_to_but_not_including_end(
    #[case] start: i64,
    #[case] end: i64,
    #[case] expected: Vec<i64>,
) -> Result<()> {
    assert_eq!(sift::range(start, end)?, expected);
    Ok(())
}

#[rstest]
#[case(0, 3, 1, Ok(vec![0, 1, 2]))]
#[case(0, 6, 2, Ok(vec![0, 2, 4]))]
#[case(6, 0, -2, Ok(vec![6, 4, 2]))]
#[case(0, 0, 1, Ok(vec![]))]
#[case(0, 3, 0, Err(Error::ZeroStep))]
#[case(0, 3, -1, Err(Error::DirectionMismatch))]
#[case(3, 0, 1, Err(Error::DirectionMismatch))]
fn range_with_step_outcomes(
    #[case] start: i32,
    #[case] end: i32,
    #[case] step: i32,
    #[case] expected: sift::Result<Vec<i32>>,
) {
    assert_eq!(sift::range_with_step(start, end, step), expected);
}

#[test]
fn range_with_start_after_end_is_invalid() {
    assert_eq!(sift::range(3, 2), Err(Error::InvalidRange));
}

#[test]
fn range_steps_are_constant() -> Result<()> {
    let result = sift::range_with_step(-20, 31, 7)?;
    assert_eq!(result.first(), Some(&-20));
    assert!(result.iter().tuple_windows().all(|(a, b)| b - a == 7));
    assert!(result.iter().all(|n| *n < 31));
    Ok(())
}

#[rstest]
#[case(&[0, 1, 2, 3], 0, Ok(0))]
#[case(&[0, 1, 2, 3], 3, Ok(3))]
#[case(&[0, 1, 2, 3], -1, Ok(3))]
#[case(&[0, 1, 2, 3], -4, Ok(0))]
#[case(&[0, 1, 2, 3], 4, Err(Error::OutOfBounds { index: 4, len: 4 }))]
#[case(&[], 0, Err(Error::OutOfBounds { index: 0, len: 0 }))]
fn nth_accepts_indices_from_minus_len_up_to_len(
    #[case] collection: &[i32],
    #[case] index: isize,
    #[case] expected: sift::Result<i32>,
) {
    assert_eq!(sift::nth(collection, index), expected);
}

#[test]
fn group_by_collects_elements_under_their_keys() {
    let groups = sift::group_by(&[0, 1, 2, 3, 4, 5], |n| n % 3);
    let groups = groups.into_iter().sorted().collect_vec();
    assert_eq!(groups, vec![(0, vec![0, 3]), (1, vec![1, 4]), (2, vec![2, 5])]);
}

#[test]
fn partition_by_orders_groups_by_first_appearance_of_their_key() {
    let by_sign = |x: &i32| {
        if *x < 0 {
            "negative"
        } else if x % 2 == 0 {
            "even"
        } else {
            "odd"
        }
    };
    let partitions = sift::partition_by(&[-2, -1, 0, 1, 2, 3, 4, 5], by_sign);
    assert_eq!(partitions, vec![vec![-2, -1], vec![0, 2, 4], vec![1, 3, 5]]);

    // Same elements, different first appearances
    let partitions = sift::partition_by(&[5, 4, 3, 2, 1, 0, -1, -2], by_sign);
    assert_eq!(partitions, vec![vec![5, 3, 1], vec![4, 2, 0], vec![-1, -2]]);
}

#[test]
fn some_of_an_empty_subset_is_false_while_every_and_none_are_true() {
    for collection in [&[][..], &[1][..], &[1, 2, 3][..]] {
        assert!(!sift::some(collection, &[]));
        assert!(sift::every(collection, &[]));
        assert!(sift::none(collection, &[]));
    }
}

#[cfg(feature = "random")]
#[test]
fn samples_of_the_whole_collection_is_a_permutation() {
    let result = sift::samples(&["a", "b", "c"], 3);
    assert_eq!(result.into_iter().sorted().collect_vec(), vec!["a", "b", "c"]);
    assert!(sift::samples::<&str>(&[], 3).is_empty());
}

#[test]
fn xor_and_intersect_n_over_three_inputs() {
    let x: &[&str] = &["xyz", "abc", "xy", "xz", "x"];
    let y: &[&str] = &["xyz", "abc", "xy", "yz", "y"];
    let z: &[&str] = &["xyz", "abc", "xz", "yz", "z"];
    assert_eq!(sift::union(&[x, y, z]), vec!["xyz", "abc", "xy", "xz", "x", "yz", "y", "z"]);
    assert_eq!(sift::intersect_n(x, &[y, z]), vec!["xyz", "abc"]);
    assert_eq!(sift::difference(&sift::difference(x, y), z), vec!["x"]);
    assert_eq!(sift::xor(&[x, y, z]).into_iter().sorted().collect_vec(), vec!["x", "y", "z"]);
}

mod glob_import {
    use sift::*;

    #[test]
    fn glob_import_leaves_the_prelude_drop_in_place() {
        let owned = vec![1, 2, 3];
        let tail = drop_left(&owned, 1);
        drop(owned);
        assert_eq!(tail, vec![2, 3]);
    }
}
