//! Sequential composition of unary lambdas.

use super::Lambda;

/// Composes two unary lambdas right to left.
///
/// `compose(f, g)` is a lambda of fixed arity 1 computing `f(g(x))`. Each
/// of `f` and `g` is invoked with exactly one argument, so their own arity
/// checks still apply; an error from `g` is returned before `f` runs.
///
/// # Laws
///
/// - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
/// - **Left Identity**: `compose(identity(), f) == f`
/// - **Right Identity**: `compose(f, identity()) == f`
///
/// # Examples
///
/// ```
/// use monadki::compose::{compose, Lambda};
/// use monadki::kinda;
///
/// let get_length: Lambda<String, usize> = kinda!(|text: String| text.len());
/// let add_foo: Lambda<String, String> = kinda!(|text: String| text + "_foo");
///
/// let length_with_foo = compose(get_length, add_foo);
/// assert_eq!(length_with_foo.apply("bar".to_string()), Ok(7));
/// ```
pub fn compose<A, B, C>(outer: Lambda<B, C>, inner: Lambda<A, B>) -> Lambda<A, C>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    Lambda::try_unary(move |input| outer.apply(inner.apply(input)?))
}
