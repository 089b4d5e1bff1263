//! Error types shared by every module of the crate.
//!
//! All failures are synchronous and propagate to the immediate caller
//! through [`Result`]. Nothing in the crate catches or recovers from an
//! [`Error`]; an error aborts the operation that produced it.

/// Result type alias for monadki operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents the failures that can occur when building or running
/// lambdas, constructing and unwrapping [`Maybe`](crate::typeclass::Maybe)
/// values, or traversing a [`Many`](crate::persistent::Many).
///
/// # Examples
///
/// ```rust
/// use monadki::Error;
///
/// let error = Error::ArgumentCount { expected: 2, actual: 3 };
/// assert_eq!(
///     error.to_string(),
///     "wrong number of arguments passed to lambda: expected 2, got 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A fixed-arity lambda was invoked with the wrong number of arguments.
    ///
    /// The underlying function is never executed when this error is returned.
    #[error("wrong number of arguments passed to lambda: expected {expected}, got {actual}")]
    ArgumentCount {
        /// The declared number of parameters.
        expected: usize,
        /// The number of arguments actually supplied.
        actual: usize,
    },

    /// A present value was requested from an absent input.
    #[error("can't make something from nothing")]
    Construction,

    /// The value of an absent `Maybe` was requested.
    #[error("can't get something from nothing")]
    Unwrap,
}

impl Error {
    /// Returns `true` if this is an [`Error::ArgumentCount`].
    #[must_use]
    pub const fn is_argument_count(&self) -> bool {
        matches!(self, Self::ArgumentCount { .. })
    }

    /// Returns `true` if this is an [`Error::Construction`].
    #[must_use]
    pub const fn is_construction(&self) -> bool {
        matches!(self, Self::Construction)
    }

    /// Returns `true` if this is an [`Error::Unwrap`].
    #[must_use]
    pub const fn is_unwrap(&self) -> bool {
        matches!(self, Self::Unwrap)
    }

    #[cfg(feature = "compose")]
    pub(crate) fn argument_count(expected: usize, actual: usize) -> Self {
        debug_event!(expected, actual, "lambda called with the wrong number of arguments");
        Self::ArgumentCount { expected, actual }
    }

    #[cfg(feature = "typeclass")]
    pub(crate) fn construction() -> Self {
        debug_event!("attempted to make something from nothing");
        Self::Construction
    }

    #[cfg(feature = "typeclass")]
    pub(crate) fn unwrap_nothing() -> Self {
        debug_event!("attempted to get something from nothing");
        Self::Unwrap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::ArgumentCount { expected: 1, actual: 0 }, "wrong number of arguments passed to lambda: expected 1, got 0")]
    #[case(Error::Construction, "can't make something from nothing")]
    #[case(Error::Unwrap, "can't get something from nothing")]
    fn test_error_display(#[case] error: Error, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_error_classification() {
        let wrong_count = Error::ArgumentCount {
            expected: 2,
            actual: 1,
        };
        assert!(wrong_count.is_argument_count());
        assert!(!wrong_count.is_unwrap());
        assert!(Error::Construction.is_construction());
        assert!(!Error::Construction.is_argument_count());
        assert!(Error::Unwrap.is_unwrap());
        assert!(!Error::Unwrap.is_construction());
    }

    #[cfg(feature = "compose")]
    #[rstest]
    fn test_argument_count_constructor() {
        assert_eq!(
            Error::argument_count(3, 0),
            Error::ArgumentCount {
                expected: 3,
                actual: 0
            }
        );
    }

    #[cfg(feature = "typeclass")]
    #[rstest]
    fn test_maybe_error_constructors() {
        assert_eq!(Error::construction(), Error::Construction);
        assert_eq!(Error::unwrap_nothing(), Error::Unwrap);
    }

    #[rstest]
    fn test_error_source_is_none() {
        use std::error::Error as _;

        assert!(Error::Unwrap.source().is_none());
    }

    #[rstest]
    fn test_error_equality() {
        let error = Error::ArgumentCount {
            expected: 2,
            actual: 3,
        };
        assert_eq!(error.clone(), error);
        assert_ne!(
            error,
            Error::ArgumentCount {
                expected: 3,
                actual: 2
            }
        );
        assert_ne!(Error::Construction, Error::Unwrap);
    }
}
