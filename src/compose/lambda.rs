//! Arity-checked lambdas.
//!
//! A [`Lambda`] is a function value paired with an explicit [`Arity`] tag
//! recorded when it is built. Every call goes through [`Lambda::call`],
//! which compares the number of supplied arguments against the tag before
//! the underlying function runs.
//!
//! # Examples
//!
//! ```rust
//! use monadki::compose::{Arity, Lambda};
//! use monadki::Error;
//!
//! let max = Lambda::binary(|x: i32, y: i32| if x >= y { x } else { y });
//! assert_eq!(max.arity(), Arity::Fixed(2));
//! assert_eq!(max.call(vec![4, 5]), Ok(5));
//! assert_eq!(
//!     max.call(vec![4]),
//!     Err(Error::ArgumentCount { expected: 2, actual: 1 })
//! );
//! ```

use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};

/// The declared parameter count of a [`Lambda`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly this many arguments must be supplied.
    Fixed(usize),
    /// Any number of arguments is accepted and forwarded.
    Variadic,
}

impl Arity {
    /// Returns `true` if `count` arguments satisfy this arity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadki::compose::Arity;
    ///
    /// assert!(Arity::Fixed(2).accepts(2));
    /// assert!(!Arity::Fixed(2).accepts(3));
    /// assert!(Arity::Variadic.accepts(0));
    /// ```
    #[inline]
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Fixed(expected) => expected == count,
            Self::Variadic => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(count) => write!(formatter, "{count}"),
            Self::Variadic => write!(formatter, "*"),
        }
    }
}

type Body<A, R> = dyn Fn(Vec<A>) -> Result<R>;

/// A function value with an explicit arity tag.
///
/// All arguments of a single call share the type `A`; the result has type
/// `R`. Cloning a `Lambda` is cheap: clones share the same body.
///
/// `Lambda` is deliberately single-threaded (the body is held in an `Rc`),
/// so it is neither `Send` nor `Sync`.
///
/// # Examples
///
/// ```rust
/// use monadki::compose::Lambda;
///
/// let length = Lambda::unary(|text: String| text.len());
/// assert_eq!(length.apply("canicu".to_string()), Ok(6));
///
/// let sum = Lambda::variadic(|values: Vec<i32>| values.iter().sum::<i32>());
/// assert_eq!(sum.call(vec![1, 2, 3, 4]), Ok(10));
/// ```
pub struct Lambda<A, R> {
    body: Rc<Body<A, R>>,
    arity: Arity,
}

impl<A: 'static, R: 'static> Lambda<A, R> {
    /// Creates a lambda whose body may fail, with an explicit arity tag.
    ///
    /// The arity is checked by [`call`](Self::call) before `body` runs; the
    /// body itself always sees an argument vector that satisfies `arity`.
    pub fn with_arity<F>(arity: Arity, body: F) -> Self
    where
        F: Fn(Vec<A>) -> Result<R> + 'static,
    {
        Self {
            body: Rc::new(body),
            arity,
        }
    }

    /// Creates a lambda taking exactly `N` arguments.
    ///
    /// The body receives the arguments as an array, so parameters can be
    /// destructured directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadki::compose::{Arity, Lambda};
    ///
    /// let volume = Lambda::fixed(|[width, height, depth]: [u32; 3]| width * height * depth);
    /// assert_eq!(volume.arity(), Arity::Fixed(3));
    /// assert_eq!(volume.call(vec![2, 3, 4]), Ok(24));
    /// ```
    pub fn fixed<const N: usize, F>(function: F) -> Self
    where
        F: Fn([A; N]) -> R + 'static,
    {
        Self::try_fixed(move |arguments| Ok(function(arguments)))
    }

    /// Creates a lambda taking exactly `N` arguments whose body may fail.
    pub fn try_fixed<const N: usize, F>(function: F) -> Self
    where
        F: Fn([A; N]) -> Result<R> + 'static,
    {
        Self::with_arity(Arity::Fixed(N), move |arguments: Vec<A>| {
            let arguments = <[A; N]>::try_from(arguments)
                .map_err(|rejected: Vec<A>| Error::argument_count(N, rejected.len()))?;
            function(arguments)
        })
    }

    /// Creates a lambda taking exactly one argument.
    pub fn unary<F>(function: F) -> Self
    where
        F: Fn(A) -> R + 'static,
    {
        Self::fixed(move |[argument]: [A; 1]| function(argument))
    }

    /// Creates a lambda taking exactly one argument whose body may fail.
    pub fn try_unary<F>(function: F) -> Self
    where
        F: Fn(A) -> Result<R> + 'static,
    {
        Self::try_fixed(move |[argument]: [A; 1]| function(argument))
    }

    /// Creates a lambda taking exactly two arguments.
    pub fn binary<F>(function: F) -> Self
    where
        F: Fn(A, A) -> R + 'static,
    {
        Self::fixed(move |[first, second]: [A; 2]| function(first, second))
    }

    /// Creates a lambda that accepts any number of arguments.
    pub fn variadic<F>(function: F) -> Self
    where
        F: Fn(Vec<A>) -> R + 'static,
    {
        Self::with_arity(Arity::Variadic, move |arguments| Ok(function(arguments)))
    }

    /// Creates a lambda that accepts any number of arguments and may fail.
    pub fn try_variadic<F>(function: F) -> Self
    where
        F: Fn(Vec<A>) -> Result<R> + 'static,
    {
        Self::with_arity(Arity::Variadic, function)
    }
}

impl<A, R> Lambda<A, R> {
    /// Returns the declared arity.
    #[inline]
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Invokes the lambda with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArgumentCount`] without running the body when the
    /// arity is fixed and `arguments.len()` differs from it. Any error the
    /// body returns is propagated unchanged.
    pub fn call(&self, arguments: Vec<A>) -> Result<R> {
        if let Arity::Fixed(expected) = self.arity
            && arguments.len() != expected
        {
            return Err(Error::argument_count(expected, arguments.len()));
        }
        (self.body)(arguments)
    }

    /// Invokes the lambda with a single argument.
    ///
    /// # Errors
    ///
    /// Same as [`call`](Self::call).
    #[inline]
    pub fn apply(&self, argument: A) -> Result<R> {
        self.call(vec![argument])
    }
}

impl<A, R> Clone for Lambda<A, R> {
    fn clone(&self) -> Self {
        Self {
            body: Rc::clone(&self.body),
            arity: self.arity,
        }
    }
}

impl<A, R> fmt::Debug for Lambda<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Lambda")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(Lambda<i32, i32>: Send, Sync);
