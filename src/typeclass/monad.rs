//! Monadic bind over `Maybe`, in flipped argument order.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! lift_m(Just(a), f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! lift_m(m, just_lambda()) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! lift_m(lift_m(m, f), g) == lift_m(m, |x| lift_m(f(x), g))
//! ```

use super::Maybe;
use crate::compose::Lambda;
use crate::error::Result;

/// Sequences `value` through `function`, which itself returns a `Maybe`.
///
/// For `Just(x)` the result of `function(x)` is returned as is (it is not
/// wrapped again). For `Nothing` the result is `Nothing` and `function` is
/// never called.
///
/// # Errors
///
/// Propagates any error returned by `function`.
///
/// # Examples
///
/// ```rust
/// use monadki::compose::Lambda;
/// use monadki::typeclass::{lift_m, nothing_lambda, Maybe};
///
/// let double = Lambda::unary(|number: i32| Maybe::just(number * 2));
/// let always_nothing = nothing_lambda::<i32, i32>();
///
/// assert_eq!(lift_m(Maybe::just(10), &double), Ok(Maybe::just(20)));
/// assert_eq!(lift_m(Maybe::nothing(), &double), Ok(Maybe::nothing()));
/// assert_eq!(lift_m(Maybe::nothing(), &always_nothing), Ok(Maybe::nothing()));
/// assert_eq!(lift_m(Maybe::just(10), &always_nothing), Ok(Maybe::nothing()));
/// ```
pub fn lift_m<A, B>(value: Maybe<A>, function: &Lambda<A, Maybe<B>>) -> Result<Maybe<B>> {
    match value.into_option() {
        Some(inner) => function.apply(inner),
        None => Ok(Maybe::nothing()),
    }
}
