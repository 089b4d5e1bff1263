//! Applicative lift over `Maybe`.

use super::{Maybe, fmap};
use crate::compose::Lambda;
use crate::error::Result;

/// Applies a possibly-absent function to a possibly-absent value.
///
/// - `lift_a(Just(f), m)` is `fmap(f, m)`.
/// - `lift_a(Nothing, m)` is `m`, unchanged.
///
/// An absent function short-circuits to the *second* argument rather than
/// to `Nothing`, which is why the function must map `A` to `A`.
///
/// # Errors
///
/// Propagates any error returned by the wrapped function.
///
/// # Examples
///
/// ```rust
/// use monadki::compose::Lambda;
/// use monadki::typeclass::{lift_a, Maybe};
///
/// let double = Maybe::just(Lambda::unary(|number: i32| number * 2));
/// let absent: Maybe<Lambda<i32, i32>> = Maybe::nothing();
///
/// assert_eq!(lift_a(double.clone(), Maybe::just(10)), Ok(Maybe::just(20)));
/// assert_eq!(lift_a(double, Maybe::nothing()), Ok(Maybe::nothing()));
/// assert_eq!(lift_a(absent.clone(), Maybe::just(10)), Ok(Maybe::just(10)));
/// assert_eq!(lift_a(absent, Maybe::nothing()), Ok(Maybe::nothing()));
/// ```
pub fn lift_a<A>(function: Maybe<Lambda<A, A>>, value: Maybe<A>) -> Result<Maybe<A>> {
    match function.into_option() {
        Some(function) => fmap(&function, value),
        None => Ok(value),
    }
}
