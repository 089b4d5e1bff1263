//! Partial application of lambdas.
//!
//! [`curry`] fixes a prefix of arguments of a [`Lambda`]. The resulting
//! lambda is variadic: it appends its own arguments to the stored prefix
//! and forwards the whole list, so the arity check of the wrapped lambda
//! applies to the total.

use smallvec::SmallVec;

use super::Lambda;

/// Partially applies `function` to `prefix`.
///
/// Calling the result with `arguments` invokes `function` with
/// `prefix ++ arguments`. Currying a curried lambda is valid; the prefix
/// simply grows.
///
/// # Examples
///
/// ```
/// use monadki::compose::{curry, Lambda};
/// use monadki::{Error, kinda};
///
/// let max: Lambda<i32, i32> = kinda!(|x: i32, y: i32| if x >= y { x } else { y });
/// let at_least_four = curry(max, [4]);
///
/// assert_eq!(at_least_four.apply(5), Ok(5));
/// assert_eq!(at_least_four.apply(3), Ok(4));
/// assert_eq!(
///     at_least_four.call(vec![1, 2]),
///     Err(Error::ArgumentCount { expected: 2, actual: 3 })
/// );
/// ```
///
/// ## Multi-step application
///
/// ```
/// use monadki::compose::{curry, Lambda};
/// use monadki::kinda;
///
/// let add_three: Lambda<i32, i32> = kinda!(|a: i32, b, c| a + b + c);
/// let add_one_and_two = curry(curry(add_three, [1]), [2]);
///
/// assert_eq!(add_one_and_two.apply(3), Ok(6));
/// ```
pub fn curry<A, R, I>(function: Lambda<A, R>, prefix: I) -> Lambda<A, R>
where
    A: Clone + 'static,
    R: 'static,
    I: IntoIterator<Item = A>,
{
    let prefix: SmallVec<[A; 4]> = prefix.into_iter().collect();
    Lambda::try_variadic(move |arguments: Vec<A>| {
        let mut combined = Vec::with_capacity(prefix.len() + arguments.len());
        combined.extend(prefix.iter().cloned());
        combined.extend(arguments);
        function.call(combined)
    })
}
