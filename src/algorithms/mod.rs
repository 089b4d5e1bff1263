//! Algorithms written against the [`Many`](crate::persistent::Many) interface.
//!
//! - [`quicksort`]: Partitions with [`Many::filter`](crate::persistent::Many::filter)
//!   and reassembles with [`Many::concat`](crate::persistent::Many::concat)
//! - [`length`], [`element_at`], [`split_by`]: Positional helpers
//! - [`binary_search`]: Sorts, then narrows around the centre element
//!
//! Absent elements cannot be compared. Any algorithm that has to compare
//! one fails with [`Error::Unwrap`](crate::Error::Unwrap).
//!
//! # Examples
//!
//! ```rust
//! use monadki::algorithms::{binary_search, quicksort};
//! use monadki::persistent::Many;
//! use monadki::typeclass::Maybe;
//!
//! let list = Many::from_values([5, 4, 3, 2, 1]);
//! assert_eq!(quicksort(&list)?.raw_value()?, vec![1, 2, 3, 4, 5]);
//!
//! assert_eq!(binary_search(&Many::from_values([1, 2, 3, 4]), &Maybe::just(2)), Ok(Maybe::just(true)));
//! # Ok::<(), monadki::Error>(())
//! ```

mod search;
mod sort;
mod structural;

pub use search::binary_search;
pub use sort::quicksort;
pub use structural::{element_at, length, split_by};
