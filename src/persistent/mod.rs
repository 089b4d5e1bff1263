//! Lists of optional values.
//!
//! - [`Many`]: an ordered list whose elements are promoted to
//!   [`Maybe`](crate::typeclass::Maybe) when they enter it
//!
//! Every operation except [`Many::push`] leaves its receiver untouched and
//! returns a new list.
//!
//! # Examples
//!
//! ```rust
//! use monadki::compose::Lambda;
//! use monadki::persistent::Many;
//! use monadki::typeclass::Maybe;
//!
//! let list = Many::from_values([3, 1, 2]);
//! let small = list.filter(&Lambda::unary(|value: i32| Maybe::just(value < 3)))?;
//!
//! assert_eq!(small.raw_value()?, vec![1, 2]);
//! assert_eq!(list.len(), 3);
//! # Ok::<(), monadki::Error>(())
//! ```

mod many;

pub use many::Many;
