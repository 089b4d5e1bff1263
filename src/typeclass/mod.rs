//! The `Maybe` container and its functor, applicative and monad operations.
//!
//! - [`Maybe`]: Presence (`Just`) or absence (`Nothing`) of a value
//! - [`fmap`]: Functor map
//! - [`lift_a`]: Applicative lift of a possibly-absent function
//! - [`lift_m`]: Monadic bind, value first
//!
//! All three operations take their functions as [`Lambda`](crate::compose::Lambda)s
//! and return a [`Result`](crate::Result), since the lambda may fail.
//!
//! # Examples
//!
//! ```rust
//! use monadki::compose::Lambda;
//! use monadki::typeclass::{fmap, lift_a, lift_m, Maybe};
//!
//! let double = Lambda::unary(|value: i32| value * 2);
//! assert_eq!(fmap(&double, Maybe::just(2)), Ok(Maybe::just(4)));
//!
//! assert_eq!(lift_a(Maybe::just(double), Maybe::just(3)), Ok(Maybe::just(6)));
//!
//! let positive = Lambda::unary(|value: i32| {
//!     if value > 0 { Maybe::just(value) } else { Maybe::nothing() }
//! });
//! assert_eq!(lift_m(Maybe::just(-1), &positive), Ok(Maybe::nothing()));
//! ```

mod applicative;
mod functor;
mod maybe;
mod monad;

pub use applicative::lift_a;
pub use functor::{fmap, lift_fmap};
pub use maybe::{Maybe, just_lambda, nothing_lambda};
pub use monad::lift_m;
