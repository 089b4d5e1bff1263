use super::{element_at, length, quicksort, split_by};
use crate::error::Result;
use crate::persistent::Many;
use crate::typeclass::Maybe;

/// Looks for `key` in `list`.
///
/// Returns `Nothing` at once, without sorting, when `key` is absent.
/// Otherwise the list is sorted with [`quicksort`] and the search window
/// is halved with [`split_by`] around its centre element: to the left half
/// when the centre is greater than the key, to the right half (centre
/// included) otherwise. The result is `Just(true)` when the key is found
/// and `Just(false)` when it is not, including for an empty list.
///
/// # Errors
///
/// Returns [`Error::Unwrap`](crate::Error::Unwrap) if sorting or the search
/// has to compare an absent element.
///
/// # Examples
///
/// ```rust
/// use monadki::algorithms::binary_search;
/// use monadki::persistent::Many;
/// use monadki::typeclass::Maybe;
///
/// let list = Many::from_values([4, 2, 3, 1]);
/// assert_eq!(binary_search(&list, &Maybe::just(2)), Ok(Maybe::just(true)));
/// assert_eq!(binary_search(&list, &Maybe::just(9)), Ok(Maybe::just(false)));
/// assert_eq!(binary_search(&list, &Maybe::nothing()), Ok(Maybe::nothing()));
/// ```
pub fn binary_search<T>(list: &Many<T>, key: &Maybe<T>) -> Result<Maybe<bool>>
where
    T: PartialOrd + Clone + 'static,
{
    let Some(target) = key.as_option() else {
        return Ok(Maybe::nothing());
    };

    let mut window = quicksort(list)?;
    loop {
        if element_at(&window, 0) == *key {
            return Ok(Maybe::just(true));
        }
        let size = length(&window);
        if size <= 1 {
            return Ok(Maybe::just(false));
        }

        let centre = size / 2;
        trace_event!(window = size, centre, "binary search narrowing");
        let go_left = element_at(&window, centre).value()? > target;
        let (left, right) = split_by(&window, centre);
        window = if go_left { left } else { right };
    }
}
