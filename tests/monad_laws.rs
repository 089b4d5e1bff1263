//! Property-based tests for the monad laws of `lift_m` over `Maybe`.
//!
//! - **Left Identity**: `lift_m(Just(a), f) == f(a)`
//! - **Right Identity**: `lift_m(m, just) == m`
//! - **Associativity**: `lift_m(lift_m(m, f), g) == lift_m(m, |x| lift_m(f(x), g))`

#![cfg(feature = "typeclass")]

use monadki::compose::Lambda;
use monadki::typeclass::{Maybe, just_lambda, lift_m, nothing_lambda};
use proptest::prelude::*;

fn non_negative() -> Lambda<i32, Maybe<i32>> {
    Lambda::unary(|value: i32| {
        if value >= 0 {
            Maybe::just(value)
        } else {
            Maybe::nothing()
        }
    })
}

fn checked_double() -> Lambda<i32, Maybe<i32>> {
    Lambda::unary(|value: i32| Maybe::from_option(value.checked_mul(2)))
}

proptest! {
    #[test]
    fn prop_left_identity(value in any::<i32>()) {
        prop_assert_eq!(lift_m(Maybe::just(value), &non_negative()), non_negative().apply(value));
    }

    #[test]
    fn prop_right_identity(value in any::<Option<i32>>()) {
        let maybe = Maybe::from_option(value);
        prop_assert_eq!(lift_m(maybe, &just_lambda()), Ok(maybe));
    }

    #[test]
    fn prop_associativity(value in any::<Option<i32>>()) {
        let maybe = Maybe::from_option(value);

        let left = lift_m(maybe, &non_negative())
            .and_then(|inner| lift_m(inner, &checked_double()));

        let chained = Lambda::try_unary(|inner: i32| {
            lift_m(non_negative().apply(inner)?, &checked_double())
        });
        let right = lift_m(maybe, &chained);

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_nothing_absorbs(value in any::<i32>()) {
        let absent: Maybe<i32> = Maybe::nothing();
        prop_assert_eq!(lift_m(absent, &non_negative()), Ok(Maybe::nothing()));
        prop_assert_eq!(
            lift_m(Maybe::just(value), &nothing_lambda::<i32, i32>()),
            Ok(Maybe::nothing())
        );
    }
}
