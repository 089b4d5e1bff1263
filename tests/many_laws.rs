//! Property-based tests for `Many`.
//!
//! - **Concat Associativity**: `(a ++ b) ++ c == a ++ (b ++ c)`
//! - **Concat Identity**: `empty ++ a == a == a ++ empty`
//! - **Map Identity**: `a.map(just) == a`
//! - **Filter Soundness**: every kept element satisfies the predicate

#![cfg(feature = "persistent")]

use monadki::compose::Lambda;
use monadki::persistent::Many;
use monadki::typeclass::{Maybe, just_lambda};
use proptest::prelude::*;

fn optional_values() -> impl Strategy<Value = Vec<Option<i32>>> {
    prop::collection::vec(any::<Option<i32>>(), 0..20)
}

fn present_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..20)
}

proptest! {
    #[test]
    fn prop_concat_associativity(
        first in present_values(),
        second in present_values(),
        third in present_values()
    ) {
        let first = Many::from_values(first);
        let second = Many::from_values(second);
        let third = Many::from_values(third);

        let left = first.concat(&second).concat(&third);
        let right = first.concat(&second.concat(&third));

        prop_assert_eq!(left.raw_value(), right.raw_value());
    }

    #[test]
    fn prop_concat_associativity_with_absent(
        first in optional_values(),
        second in optional_values(),
        third in optional_values()
    ) {
        let first: Many<i32> = Many::new(first);
        let second: Many<i32> = Many::new(second);
        let third: Many<i32> = Many::new(third);

        prop_assert_eq!(
            first.concat(&second).concat(&third),
            first.concat(&second.concat(&third))
        );
    }

    #[test]
    fn prop_concat_identity(values in optional_values()) {
        let list: Many<i32> = Many::new(values);
        let empty = Many::empty();

        prop_assert_eq!(empty.concat(&list), list.clone());
        prop_assert_eq!(list.concat(&empty), list);
    }

    #[test]
    fn prop_concat_length(first in optional_values(), second in optional_values()) {
        let first: Many<i32> = Many::new(first);
        let second: Many<i32> = Many::new(second);

        prop_assert_eq!(first.concat(&second).len(), first.len() + second.len());
    }

    #[test]
    fn prop_map_identity(values in optional_values()) {
        let list: Many<i32> = Many::new(values);
        prop_assert_eq!(list.map(&just_lambda()), Ok(list));
    }

    #[test]
    fn prop_filter_soundness(values in present_values(), threshold in any::<i32>()) {
        let above = Lambda::unary(move |value: i32| Maybe::just(value > threshold));
        let kept = Many::from_values(values.clone())
            .filter(&above)
            .and_then(|list| list.raw_value());

        let expected: Vec<i32> = values.into_iter().filter(|value| *value > threshold).collect();
        prop_assert_eq!(kept, Ok(expected));
    }
}
