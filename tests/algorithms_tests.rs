//! Integration and property-based tests for the algorithms over `Many`.

#![cfg(feature = "algorithms")]

use monadki::Error;
use monadki::algorithms::{binary_search, element_at, length, quicksort, split_by};
use monadki::persistent::Many;
use monadki::typeclass::Maybe;
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// Demonstration outputs
// =============================================================================

#[rstest]
fn test_quicksort_reverse_input() {
    let sorted = quicksort(&Many::from_values([5, 4, 3, 2, 1])).and_then(|list| list.raw_value());
    assert_eq!(sorted, Ok(vec![1, 2, 3, 4, 5]));
}

#[rstest]
#[case(Maybe::just(2), Maybe::just(true))]
#[case(Maybe::just(10), Maybe::just(false))]
#[case(Maybe::nothing(), Maybe::nothing())]
fn test_binary_search_demonstration(#[case] key: Maybe<i32>, #[case] expected: Maybe<bool>) {
    let list = Many::from_values([1, 2, 3, 4]);
    assert_eq!(binary_search(&list, &key), Ok(expected));
}

// =============================================================================
// Positional helpers
// =============================================================================

#[rstest]
fn test_positional_helpers_agree() {
    let list: Many<char> = Many::new([Some('a'), None, Some('c'), Some('d')]);
    let (front, back) = split_by(&list, 2);

    assert_eq!(length(&list), 4);
    assert_eq!(length(&front) + length(&back), length(&list));
    assert_eq!(element_at(&back, 0), element_at(&list, 2));
    assert_eq!(element_at(&front, 1), Maybe::nothing());
    assert_eq!(front.concat(&back), list);
}

#[rstest]
fn test_sorting_strings() {
    let words = Many::from_values(["kiwi", "apple", "mango", "apple"]);
    let sorted = quicksort(&words).and_then(|list| list.raw_value());
    assert_eq!(sorted, Ok(vec!["apple", "apple", "kiwi", "mango"]));
}

#[rstest]
fn test_sorting_with_absent_element_fails() {
    let list: Many<i32> = Many::new([Some(3), None, Some(1)]);
    assert_eq!(quicksort(&list), Err(Error::Unwrap));
}

// =============================================================================
// Properties
// =============================================================================

fn values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50..50_i32, 0..40)
}

proptest! {
    #[test]
    fn prop_quicksort_is_sorted_permutation(input in values()) {
        let sorted = quicksort(&Many::from_values(input.clone())).and_then(|list| list.raw_value());

        let mut expected = input;
        expected.sort_unstable();
        prop_assert_eq!(sorted, Ok(expected));
    }

    #[test]
    fn prop_quicksort_preserves_input(input in values()) {
        let list = Many::from_values(input.clone());
        let _ = quicksort(&list);
        prop_assert_eq!(list.raw_value(), Ok(input));
    }

    #[test]
    fn prop_binary_search_finds_present_keys(input in values()) {
        let list = Many::from_values(input.clone());
        for key in input {
            prop_assert_eq!(binary_search(&list, &Maybe::just(key)), Ok(Maybe::just(true)));
        }
    }

    #[test]
    fn prop_binary_search_matches_contains(input in values(), key in -60..60_i32) {
        let list = Many::from_values(input.clone());
        let expected = Maybe::just(input.contains(&key));
        prop_assert_eq!(binary_search(&list, &Maybe::just(key)), Ok(expected));
    }

    #[test]
    fn prop_split_by_rejoins(input in values(), count in 0..50_usize) {
        let list = Many::from_values(input.clone());
        let (front, back) = split_by(&list, count);

        prop_assert_eq!(length(&front), count.min(input.len()));
        prop_assert_eq!(front.concat(&back), list);
    }
}
