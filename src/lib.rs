//! # monadki
//!
//! Small functional-programming building blocks for Rust: arity-checked
//! lambdas, function combinators, a `Maybe` container with its functor,
//! applicative and monad operations, and a list of `Maybe`-wrapped
//! elements on top of it.
//!
//! ## Overview
//!
//! - **Lambdas**: [`Lambda`](compose::Lambda) wraps a function together with
//!   an explicit arity tag and refuses calls with the wrong argument count.
//! - **Combinators**: [`curry`](compose::curry) and [`compose`](compose::compose())
//!   build new lambdas from existing ones.
//! - **Maybe**: [`Maybe`](typeclass::Maybe) represents presence or absence of
//!   a value, with [`fmap`](typeclass::fmap), [`lift_a`](typeclass::lift_a)
//!   and [`lift_m`](typeclass::lift_m).
//! - **Many**: [`Many`](persistent::Many) is an ordered list whose elements are
//!   promoted to `Maybe` once, at the boundary.
//! - **Algorithms**: quicksort built on `Many::filter` and `Many::concat`,
//!   plus positional helpers and a binary search over the sorted result.
//!
//! ## Feature Flags
//!
//! - `compose`: Lambdas and combinators
//! - `typeclass`: `Maybe` and the free monadic functions
//! - `persistent`: The `Many` list
//! - `algorithms`: Demonstration algorithms over `Many`
//! - `serde`: Serialization support for `Maybe` and `Many`
//! - `tracing`: Diagnostic events where errors are raised
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadki::prelude::*;
//!
//! let double: Lambda<i32, Maybe<i32>> = kinda!(|value: i32| Maybe::just(value * 2));
//!
//! assert_eq!(lift_m(Maybe::just(10), &double), Ok(Maybe::just(20)));
//! assert_eq!(lift_m(Maybe::nothing(), &double), Ok(Maybe::nothing()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Emits a `tracing` debug event when the `tracing` feature is enabled.
#[allow(unused_macros)]
macro_rules! debug_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($argument)*);
    };
}

/// Emits a `tracing` trace event when the `tracing` feature is enabled.
#[allow(unused_macros)]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($argument)*);
    };
}

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions and macros.
///
/// # Usage
///
/// ```rust
/// use monadki::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::*;
}

mod error;

pub use error::{Error, Result};

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "algorithms")]
pub mod algorithms;
