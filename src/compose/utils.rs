//! Basic lambdas used as building blocks for composition.
//!
//! - [`identity`]: The identity lambda (I combinator)
//! - [`constant`]: A lambda that always returns the same value (K combinator)

use super::Lambda;

/// Returns a unary lambda that hands back its argument unchanged.
///
/// The identity lambda is the unit element of [`compose`](super::compose()):
/// `compose(identity(), f)` and `compose(f, identity())` both behave like `f`.
///
/// # Examples
///
/// ```
/// use monadki::compose::identity;
///
/// assert_eq!(identity().apply(42), Ok(42));
/// assert_eq!(identity().apply("hello"), Ok("hello"));
/// ```
#[inline]
#[must_use]
pub fn identity<T: 'static>() -> Lambda<T, T> {
    Lambda::unary(|value| value)
}

/// Returns a unary lambda that ignores its argument and yields `value`.
///
/// # Examples
///
/// ```
/// use monadki::compose::constant;
///
/// let always_five = constant::<i32, &str>(5);
/// assert_eq!(always_five.apply("ignored"), Ok(5));
/// ```
#[inline]
pub fn constant<T, U>(value: T) -> Lambda<U, T>
where
    T: Clone + 'static,
    U: 'static,
{
    Lambda::unary(move |_| value.clone())
}
