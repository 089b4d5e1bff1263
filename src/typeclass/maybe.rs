//! The `Maybe` container - presence or absence of a value.
//!
//! [`Maybe`] is either `Just(x)` or `Nothing`. Absence is always expressed
//! by `Nothing`; there is no "present but empty" state, and asking for
//! the value of `Nothing` is an [`Error::Unwrap`].
//!
//! # Examples
//!
//! ```rust
//! use monadki::typeclass::Maybe;
//! use monadki::Error;
//!
//! let present = Maybe::just(10);
//! assert!(present.is_just());
//! assert_eq!(present.value(), Ok(&10));
//!
//! let absent: Maybe<i32> = Maybe::nothing();
//! assert!(absent.is_nothing());
//! assert_eq!(absent.value(), Err(Error::Unwrap));
//!
//! assert_ne!(present, absent);
//! ```

use std::fmt;

use crate::compose::Lambda;
use crate::error::{Error, Result};

/// An optional value: `Just(x)` or `Nothing`.
///
/// Two `Maybe`s are equal when both are present with equal values, or when
/// both are absent. A present value never equals an absent one.
///
/// # Examples
///
/// ```rust
/// use monadki::typeclass::Maybe;
///
/// assert_eq!(Maybe::just("foo"), Maybe::just("foo"));
/// assert_ne!(Maybe::just("foo"), Maybe::just("bar"));
/// assert_eq!(Maybe::<&str>::nothing(), Maybe::nothing());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Maybe<T>(Option<T>);

impl<T> Maybe<T> {
    /// Creates a present `Maybe` holding `value`.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self(Some(value))
    }

    /// Creates an absent `Maybe`.
    #[inline]
    #[must_use]
    pub const fn nothing() -> Self {
        Self(None)
    }

    /// Creates an absent `Maybe`, ignoring `ignored`.
    ///
    /// This lets `Nothing` stand in for [`Maybe::just`] at call sites that
    /// always pass one argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadki::typeclass::Maybe;
    ///
    /// let constructors: [fn(i32) -> Maybe<i32>; 2] = [Maybe::just, Maybe::nothing_from];
    /// assert_eq!(constructors[0](1), Maybe::just(1));
    /// assert_eq!(constructors[1](1), Maybe::nothing());
    /// ```
    #[inline]
    pub fn nothing_from<I>(ignored: I) -> Self {
        drop(ignored);
        Self(None)
    }

    /// Creates a present `Maybe` from a value that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`] if `value` is `None`: absence must be
    /// expressed with [`Maybe::nothing`], never as a present `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadki::typeclass::Maybe;
    /// use monadki::Error;
    ///
    /// assert_eq!(Maybe::try_just(Some(3)), Ok(Maybe::just(3)));
    /// assert_eq!(Maybe::<i32>::try_just(None), Err(Error::Construction));
    /// ```
    pub fn try_just(value: Option<T>) -> Result<Self> {
        value.map(Self::just).ok_or_else(Error::construction)
    }

    /// Promotes an optional value: `None` becomes `Nothing`, `Some(x)`
    /// becomes `Just(x)`.
    #[inline]
    pub const fn from_option(value: Option<T>) -> Self {
        Self(value)
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        self.0.is_none()
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        self.0.is_some()
    }

    /// Returns a reference to the wrapped value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unwrap`] if no value is present.
    pub fn value(&self) -> Result<&T> {
        self.0.as_ref().ok_or_else(Error::unwrap_nothing)
    }

    /// Consumes the `Maybe` and returns the wrapped value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unwrap`] if no value is present.
    pub fn into_value(self) -> Result<T> {
        self.0.ok_or_else(Error::unwrap_nothing)
    }

    /// Converts into the equivalent `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Borrows the contents as an `Option`.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Passes the whole `Maybe` (not its unwrapped value) to `function` and
    /// returns the result, allowing continuation-style chaining.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadki::compose::Lambda;
    /// use monadki::typeclass::Maybe;
    /// use monadki::kinda;
    ///
    /// let describe: Lambda<Maybe<i32>, &str> =
    ///     kinda!(|maybe: Maybe<i32>| if maybe.is_just() { "something" } else { "nothing" });
    ///
    /// assert_eq!(Maybe::just(1).and_then(&describe), Ok("something"));
    /// assert_eq!(Maybe::nothing().and_then(&describe), Ok("nothing"));
    /// ```
    pub fn and_then<R>(self, function: &Lambda<Self, R>) -> Result<R> {
        function.apply(self)
    }
}

/// Returns the `Fixed(1)` lambda form of [`Maybe::just`].
#[must_use]
pub fn just_lambda<T: 'static>() -> Lambda<T, Maybe<T>> {
    Lambda::unary(Maybe::just)
}

/// Returns the variadic lambda form of `Nothing`: it accepts and ignores
/// any arguments.
///
/// # Examples
///
/// ```rust
/// use monadki::typeclass::{nothing_lambda, Maybe};
///
/// let nothing = nothing_lambda::<i32, i32>();
/// assert_eq!(nothing.call(vec![]), Ok(Maybe::nothing()));
/// assert_eq!(nothing.call(vec![1, 2, 3]), Ok(Maybe::nothing()));
/// ```
#[must_use]
pub fn nothing_lambda<A: 'static, T: 'static>() -> Lambda<A, Maybe<T>> {
    Lambda::variadic(Maybe::nothing_from)
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::nothing()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => formatter.debug_tuple("Just").field(value).finish(),
            None => formatter.write_str("Nothing"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(formatter, "Just({value})"),
            None => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from_option)
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
