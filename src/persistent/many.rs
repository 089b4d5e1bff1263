//! A list of `Maybe`-wrapped elements.
//!
//! [`Many`] stores every element as a [`Maybe`]. Elements are promoted
//! once, when they enter the list:
//!
//! - a `Maybe<T>` is kept as is ([`new`](Many::new), [`push`](Many::push))
//! - `None` becomes `Nothing`, `Some(x)` becomes `Just(x)`
//!   ([`new`](Many::new), [`push`](Many::push))
//! - a raw `T` becomes `Just(x)` ([`from_values`](Many::from_values),
//!   [`push_value`](Many::push_value))
//!
//! A raw `T` never goes through the `Option` path, so `None` is `Nothing`
//! even when `T` is itself an `Option`.
//!
//! `map`, `filter` and `concat` return new lists and never modify the
//! receiver. `push` is the only in-place operation.
//!
//! # Examples
//!
//! ```rust
//! use monadki::compose::Lambda;
//! use monadki::persistent::Many;
//! use monadki::typeclass::Maybe;
//!
//! let list: Many<i32> = Many::new([Some(1), None, Some(3)]);
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(1), Some(&Maybe::nothing()));
//!
//! let doubled = list.map(&Lambda::unary(|value: i32| Maybe::just(value * 2)))?;
//! assert_eq!(doubled, Many::new([Some(2), None, Some(6)]));
//! # Ok::<(), monadki::Error>(())
//! ```

use std::fmt;

use crate::compose::Lambda;
use crate::error::Result;
use crate::typeclass::{Maybe, lift_m};

/// An ordered list of [`Maybe`]-wrapped elements.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `push`       | O(1)*      |
/// | `get`        | O(1)       |
/// | `len`        | O(1)       |
/// | `map`        | O(n)       |
/// | `filter`     | O(n)       |
/// | `concat`     | O(n + m)   |
/// | `raw_value`  | O(n)       |
///
/// # Examples
///
/// ```rust
/// use monadki::persistent::Many;
///
/// let mut list = Many::from_values([1]);
/// list.push_value(2);
/// assert_eq!(list.raw_value(), Ok(vec![1, 2]));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Many<T> {
    elements: Vec<Maybe<T>>,
}

impl<T> Many<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a list from optional elements.
    ///
    /// Each element is an `Option<T>` (promoted, `None` becoming `Nothing`)
    /// or an already wrapped `Maybe<T>` (kept as is).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadki::persistent::Many;
    /// use monadki::typeclass::Maybe;
    ///
    /// let from_options: Many<&str> = Many::new([Some("a"), None]);
    /// let from_maybes: Many<&str> = Many::new([Maybe::just("a"), Maybe::nothing()]);
    /// assert_eq!(from_options, from_maybes);
    /// ```
    pub fn new<I, E>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Maybe<T>>,
    {
        Self {
            elements: elements.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a list whose elements are all present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadki::persistent::Many;
    ///
    /// let list = Many::from_values(vec![5, 4, 3]);
    /// assert_eq!(list.raw_value(), Ok(vec![5, 4, 3]));
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            elements: values.into_iter().map(Maybe::just).collect(),
        }
    }

    /// Returns the wrapped elements in order.
    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[Maybe<T>] {
        &self.elements
    }

    /// Consumes the list and returns the wrapped elements.
    #[inline]
    #[must_use]
    pub fn into_elements(self) -> Vec<Maybe<T>> {
        self.elements
    }

    /// Returns the number of elements, absent ones included.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Maybe<T>> {
        self.elements.get(index)
    }

    /// Returns an iterator over the wrapped elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Maybe<T>> {
        self.elements.iter()
    }

    /// Appends one optional element in place.
    ///
    /// `element` is promoted as in [`new`](Self::new). Returns the receiver
    /// so that pushes can be chained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadki::persistent::Many;
    /// use monadki::typeclass::Maybe;
    ///
    /// let mut list: Many<i32> = Many::empty();
    /// list.push(Some(1)).push(None).push(Maybe::just(3));
    /// assert_eq!(list.len(), 3);
    /// assert!(list.raw_value().is_err());
    /// ```
    pub fn push<E>(&mut self, element: E) -> &mut Self
    where
        E: Into<Maybe<T>>,
    {
        self.elements.push(element.into());
        self
    }

    /// Appends one present value in place as `Just(value)`.
    pub fn push_value(&mut self, value: T) -> &mut Self {
        self.elements.push(Maybe::just(value));
        self
    }

    /// Folds the list from the left.
    ///
    /// `function` receives the accumulator and each element still wrapped
    /// in its [`Maybe`]; absent elements are the function's concern.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error produced by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadki::persistent::Many;
    ///
    /// let list: Many<i32> = Many::new([Some(1), None, Some(3)]);
    /// let present = list.reduce(|count, element| Ok(count + usize::from(element.is_just())), 0_usize);
    /// assert_eq!(present, Ok(2));
    /// ```
    pub fn reduce<R, F>(&self, mut function: F, initial: R) -> Result<R>
    where
        F: FnMut(R, &Maybe<T>) -> Result<R>,
    {
        self.elements
            .iter()
            .try_fold(initial, |accumulator, element| function(accumulator, element))
    }
}

impl<T: Clone> Many<T> {
    /// Binds every element through `function` with [`lift_m`].
    ///
    /// `function` maps a raw value to a `Maybe`; absent elements stay
    /// absent without calling it.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    pub fn map<U>(&self, function: &Lambda<T, Maybe<U>>) -> Result<Many<U>> {
        let elements = self
            .elements
            .iter()
            .map(|element| lift_m(element.clone(), function))
            .collect::<Result<Vec<_>>>()?;
        Ok(Many { elements })
    }

    /// Keeps the elements whose predicate result unwraps to `true`.
    ///
    /// Each element is bound through `predicate` with [`lift_m`], so the
    /// predicate only ever sees raw values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unwrap`](crate::Error::Unwrap) when the bound result
    /// is absent, which happens for every absent element and whenever the
    /// predicate itself returns `Nothing`. Errors from `predicate` are
    /// propagated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadki::compose::Lambda;
    /// use monadki::persistent::Many;
    /// use monadki::typeclass::Maybe;
    ///
    /// let even = Lambda::unary(|value: i32| Maybe::just(value % 2 == 0));
    /// let list = Many::from_values(1..=6);
    /// assert_eq!(list.filter(&even)?.raw_value()?, vec![2, 4, 6]);
    /// # Ok::<(), monadki::Error>(())
    /// ```
    pub fn filter(&self, predicate: &Lambda<T, Maybe<bool>>) -> Result<Self> {
        let mut kept = Vec::with_capacity(self.elements.len());
        for element in &self.elements {
            if lift_m(element.clone(), predicate)?.into_value()? {
                kept.push(element.clone());
            }
        }
        Ok(Self { elements: kept })
    }

    /// Returns a new list with the elements of `self` followed by those of
    /// `other`. Elements are already promoted and are not wrapped again.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len() + other.elements.len());
        elements.extend(self.elements.iter().cloned());
        elements.extend(other.elements.iter().cloned());
        Self { elements }
    }

    /// Unwraps every element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unwrap`](crate::Error::Unwrap) if any element is absent.
    pub fn raw_value(&self) -> Result<Vec<T>> {
        self.elements
            .iter()
            .map(|element| element.value().cloned())
            .collect()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Many<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, E> FromIterator<E> for Many<T>
where
    E: Into<Maybe<T>>,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T> IntoIterator for Many<T> {
    type Item = Maybe<T>;
    type IntoIter = std::vec::IntoIter<Maybe<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Many<T> {
    type Item = &'a Maybe<T>;
    type IntoIter = std::slice::Iter<'a, Maybe<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Many<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Many<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Many<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Many<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<Maybe<T>> as serde::Deserialize>::deserialize(deserializer)
            .map(|elements| Self { elements })
    }
}

static_assertions::assert_impl_all!(Many<i32>: Send, Sync, Clone);

// =============================================================================
// Tests
// =============================================================================
