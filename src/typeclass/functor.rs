//! Functor map over `Maybe`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fmap(identity, m) == m
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fmap(compose(f, g), m) == fmap(f, fmap(g, m))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadki::compose::Lambda;
//! use monadki::typeclass::{fmap, Maybe};
//!
//! let times_ten = Lambda::unary(|value: i32| value * 10);
//!
//! assert_eq!(fmap(&times_ten, Maybe::just(123)), Ok(Maybe::just(1230)));
//! assert_eq!(fmap(&times_ten, Maybe::nothing()), Ok(Maybe::nothing()));
//! ```

use super::Maybe;
use crate::compose::Lambda;
use crate::error::Result;

/// Applies `function` to the value inside `value`, if any.
///
/// Returns `Just(function(x))` for `Just(x)` and `Nothing` for `Nothing`;
/// `function` is not called when the value is absent.
///
/// # Errors
///
/// Propagates any error returned by `function`.
pub fn fmap<A, B>(function: &Lambda<A, B>, value: Maybe<A>) -> Result<Maybe<B>> {
    match value.into_option() {
        Some(inner) => function.apply(inner).map(Maybe::just),
        None => Ok(Maybe::nothing()),
    }
}

/// Returns `fmap` partially applied to `function`, as a lambda over `Maybe`.
///
/// This is the curried form `curry(fmap, function)`, which makes the
/// functor laws expressible with [`compose`](crate::compose::compose()).
///
/// # Examples
///
/// ```rust
/// use monadki::compose::{compose, Lambda};
/// use monadki::typeclass::{lift_fmap, Maybe};
///
/// let add_bar = Lambda::unary(|text: String| text + "_bar");
/// let length = Lambda::unary(|text: String| text.len());
///
/// let lifted = compose(lift_fmap(length.clone()), lift_fmap(add_bar.clone()));
/// let composed = lift_fmap(compose(length, add_bar));
///
/// let input = Maybe::just("canicu".to_string());
/// assert_eq!(lifted.apply(input.clone()), composed.apply(input));
/// ```
pub fn lift_fmap<A, B>(function: Lambda<A, B>) -> Lambda<Maybe<A>, Maybe<B>>
where
    A: 'static,
    B: 'static,
{
    Lambda::try_unary(move |value| fmap(&function, value))
}
