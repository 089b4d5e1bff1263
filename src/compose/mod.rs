//! Arity-checked lambdas and the combinators built on them.
//!
//! # Overview
//!
//! - [`Lambda`]: A function value carrying an explicit [`Arity`] tag
//! - [`kinda!`]/[`try_kinda!`]: Closure-like construction of lambdas
//! - [`curry`]: Partial application by a prefix of arguments
//! - [`compose()`]: Right-to-left composition of unary lambdas
//!
//! # Helper Lambdas
//!
//! - [`identity`]: Returns its argument unchanged
//! - [`constant`]: Ignores its argument and returns a fixed value
//!
//! # Examples
//!
//! ```
//! use monadki::compose::{compose, curry, Lambda};
//! use monadki::kinda;
//!
//! let add: Lambda<i32, i32> = kinda!(|x: i32, y: i32| x + y);
//! let double: Lambda<i32, i32> = kinda!(|x: i32| x * 2);
//!
//! // compose(f, g)(x) = f(g(x))
//! let add_five_then_double = compose(double, curry(add, [5]));
//! assert_eq!(add_five_then_double.apply(1), Ok(12));
//! ```
//!
//! # Laws
//!
//! - **Currying**: `curry(f, [a]).apply(b) == f.call(vec![a, b])` for binary `f`
//! - **Composition**: `compose(f, g).apply(x) == f.apply(g.apply(x)?)`

mod composition;
mod curry;
mod kinda_macro;
mod lambda;
mod utils;

pub use composition::compose;
pub use curry::curry;
pub use lambda::{Arity, Lambda};
pub use utils::{constant, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::kinda;
pub use crate::try_kinda;
