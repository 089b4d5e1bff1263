use std::cmp::Ordering;

use crate::compose::Lambda;
use crate::error::Result;
use crate::persistent::Many;
use crate::typeclass::Maybe;

/// Sorts `list` in ascending order.
///
/// The first element is the pivot. The remaining elements are split with
/// two [`Many::filter`] passes: those not greater than the pivot (ties
/// included) and those greater than it. Both halves are sorted recursively
/// and joined around the pivot. The input is left untouched.
///
/// # Errors
///
/// Returns [`Error::Unwrap`](crate::Error::Unwrap) if an absent element has
/// to be compared. A list holding a single absent element is returned as
/// is, since nothing is compared.
///
/// # Examples
///
/// ```rust
/// use monadki::algorithms::quicksort;
/// use monadki::persistent::Many;
///
/// let sorted = quicksort(&Many::from_values(["pear", "apple", "fig"]))?;
/// assert_eq!(sorted.raw_value()?, vec!["apple", "fig", "pear"]);
/// # Ok::<(), monadki::Error>(())
/// ```
pub fn quicksort<T>(list: &Many<T>) -> Result<Many<T>>
where
    T: PartialOrd + Clone + 'static,
{
    let Some((head, tail)) = list.elements().split_first() else {
        return Ok(Many::empty());
    };
    if tail.is_empty() {
        return Ok(list.clone());
    }

    let rest: Many<T> = tail.iter().cloned().collect();
    let pivot = head.value()?.clone();
    let upper_pivot = pivot.clone();

    let lower = rest.filter(&Lambda::unary(move |candidate: T| {
        Maybe::just(candidate.partial_cmp(&pivot) != Some(Ordering::Greater))
    }))?;
    let upper = rest.filter(&Lambda::unary(move |candidate: T| {
        Maybe::just(candidate > upper_pivot)
    }))?;
    trace_event!(
        lower = lower.len(),
        upper = upper.len(),
        "quicksort partitioned around pivot"
    );

    let mut sorted = quicksort(&lower)?;
    sorted.push(head.clone());
    Ok(sorted.concat(&quicksort(&upper)?))
}
