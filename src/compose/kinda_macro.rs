//! The `kinda!` and `try_kinda!` macros for building lambdas.
//!
//! These macros read like closures but produce a [`Lambda`](crate::compose::Lambda)
//! whose arity is the number of declared parameters.

/// Builds a [`Lambda`](crate::compose::Lambda) from closure-like syntax.
///
/// The parameter list determines the arity tag:
///
/// - `kinda!(|| body)` - fixed arity 0
/// - `kinda!(|x| body)`, `kinda!(|x, y| body)`, ... - fixed arity N
/// - `kinda!(|..rest| body)` - variadic; `rest` is a `Vec` of all arguments
///
/// All parameters share one type. It can be written on any parameter
/// (`|x: i32, y|`) or inferred from the surrounding context.
///
/// # Examples
///
/// ```
/// use monadki::compose::{Arity, Lambda};
/// use monadki::kinda;
///
/// let max = kinda!(|x: i32, y: i32| if x >= y { x } else { y });
/// assert_eq!(max.arity(), Arity::Fixed(2));
/// assert_eq!(max.call(vec![4, 5]), Ok(5));
/// assert!(max.call(vec![4, 5, 6]).is_err());
///
/// let count: Lambda<i32, usize> = kinda!(|..rest: i32| rest.len());
/// assert_eq!(count.arity(), Arity::Variadic);
/// assert_eq!(count.call(vec![10, 12]), Ok(2));
/// ```
#[macro_export]
macro_rules! kinda {
    (|| $body:expr) => {
        $crate::compose::Lambda::fixed(move |[]: [_; 0]| $body)
    };

    (|..$rest:ident $(: $parameter_type:ty)?| $body:expr) => {
        $crate::compose::Lambda::variadic(move |$rest: ::std::vec::Vec<_>| {
            $(let $rest: ::std::vec::Vec<$parameter_type> = $rest;)?
            $body
        })
    };

    (|$($parameter:ident $(: $parameter_type:ty)?),+ $(,)?| $body:expr) => {
        $crate::compose::Lambda::fixed(
            move |[$($parameter),+]: [_; $crate::__count_parameters!($($parameter)+)]| {
                $($(let $parameter: $parameter_type = $parameter;)?)+
                $body
            },
        )
    };
}

/// Builds a fallible [`Lambda`](crate::compose::Lambda) from closure-like syntax.
///
/// Identical to [`kinda!`] except that the body evaluates to a
/// [`Result`](crate::Result), so it may use `?`.
///
/// # Examples
///
/// ```
/// use monadki::compose::Lambda;
/// use monadki::typeclass::Maybe;
/// use monadki::{Error, try_kinda};
///
/// let unwrap_and_double = try_kinda!(|value: Maybe<i32>| Ok(value.into_value()? * 2));
///
/// assert_eq!(unwrap_and_double.apply(Maybe::just(4)), Ok(8));
/// assert_eq!(unwrap_and_double.apply(Maybe::nothing()), Err(Error::Unwrap));
/// ```
#[macro_export]
macro_rules! try_kinda {
    (|| $body:expr) => {
        $crate::compose::Lambda::try_fixed(move |[]: [_; 0]| $body)
    };

    (|..$rest:ident $(: $parameter_type:ty)?| $body:expr) => {
        $crate::compose::Lambda::try_variadic(move |$rest: ::std::vec::Vec<_>| {
            $(let $rest: ::std::vec::Vec<$parameter_type> = $rest;)?
            $body
        })
    };

    (|$($parameter:ident $(: $parameter_type:ty)?),+ $(,)?| $body:expr) => {
        $crate::compose::Lambda::try_fixed(
            move |[$($parameter),+]: [_; $crate::__count_parameters!($($parameter)+)]| {
                $($(let $parameter: $parameter_type = $parameter;)?)+
                $body
            },
        )
    };
}

/// Counts identifiers at compile time. Used by [`kinda!`] and [`try_kinda!`].
#[doc(hidden)]
#[macro_export]
macro_rules! __count_parameters {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + $crate::__count_parameters!($($tail)*) };
}

#[cfg(test)]
mod tests {
    use crate::compose::{Arity, Lambda};
    use crate::error::Error;

    #[test]
    fn test_kinda_nullary() {
        let answer: Lambda<i32, i32> = kinda!(|| 42);
        assert_eq!(answer.arity(), Arity::Fixed(0));
        assert_eq!(answer.call(vec![]), Ok(42));
    }

    #[test]
    fn test_kinda_counts_parameters() {
        let add_three: Lambda<i32, i32> = kinda!(|first: i32, second, third| first + second + third);
        assert_eq!(add_three.arity(), Arity::Fixed(3));
        assert_eq!(add_three.call(vec![1, 2, 3]), Ok(6));
        assert_eq!(
            add_three.call(vec![1, 2]),
            Err(Error::ArgumentCount {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_kinda_variadic() {
        let join: Lambda<&str, String> = kinda!(|..parts: &str| parts.concat());
        assert_eq!(join.call(vec!["a", "b"]), Ok("ab".to_string()));
        assert_eq!(join.call(vec![]), Ok(String::new()));
    }

    #[test]
    fn test_try_kinda_propagates() {
        let refuse: Lambda<i32, i32> = try_kinda!(|_value| Err(Error::Construction));
        assert_eq!(refuse.apply(1), Err(Error::Construction));
    }

    #[test]
    fn test_kinda_untyped_parameters_take_type_from_context() {
        let first: Lambda<String, String> = kinda!(|head, _tail| head);
        assert_eq!(first.call(vec!["a".to_string(), "b".to_string()]), Ok("a".to_string()));
    }

    #[test]
    fn test_count_parameters() {
        assert_eq!(__count_parameters!(), 0);
        assert_eq!(__count_parameters!(a b c d), 4);
    }
}
