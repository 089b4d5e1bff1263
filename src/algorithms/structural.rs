use crate::persistent::Many;
use crate::typeclass::Maybe;

/// Counts the elements of `list`, absent ones included.
///
/// The count is folded over the wrapped elements one at a time.
#[must_use]
pub fn length<T>(list: &Many<T>) -> usize {
    list.iter().fold(0, |count, _| count + 1)
}

/// Returns the element stored at `position`.
///
/// The stored element may itself be `Nothing`. A position past the end
/// also yields `Nothing`.
///
/// # Examples
///
/// ```rust
/// use monadki::algorithms::element_at;
/// use monadki::persistent::Many;
/// use monadki::typeclass::Maybe;
///
/// let list: Many<i32> = Many::new([Some(1), None]);
/// assert_eq!(element_at(&list, 0), Maybe::just(1));
/// assert_eq!(element_at(&list, 1), Maybe::nothing());
/// assert_eq!(element_at(&list, 9), Maybe::nothing());
/// ```
#[must_use]
pub fn element_at<T: Clone>(list: &Many<T>, position: usize) -> Maybe<T> {
    list.iter().nth(position).cloned().unwrap_or_default()
}

/// Splits `list` into its first `count` elements and the rest.
///
/// A `count` beyond the length yields the whole list and an empty one.
///
/// # Examples
///
/// ```rust
/// use monadki::algorithms::split_by;
/// use monadki::persistent::Many;
///
/// let (front, back) = split_by(&Many::from_values([1, 2, 3, 4]), 1);
/// assert_eq!(front, Many::from_values([1]));
/// assert_eq!(back, Many::from_values([2, 3, 4]));
/// ```
#[must_use]
pub fn split_by<T: Clone>(list: &Many<T>, count: usize) -> (Many<T>, Many<T>) {
    let mut front = Many::empty();
    let mut back = Many::empty();
    for (index, element) in list.iter().enumerate() {
        if index < count {
            front.push(element.clone());
        } else {
            back.push(element.clone());
        }
    }
    (front, back)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_length_counts_absent_elements() {
        let list: Many<i32> = Many::new([Some(1), None, Some(3)]);
        assert_eq!(length(&list), 3);
        assert_eq!(length(&Many::<i32>::empty()), 0);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![Some(1)])]
    #[case(vec![None, None, Some(2), None])]
    fn test_length_matches_len(#[case] input: Vec<Option<i32>>) {
        let list: Many<i32> = Many::new(input);
        assert_eq!(length(&list), list.len());
    }

    #[rstest]
    #[case(0, Maybe::just(10))]
    #[case(2, Maybe::just(30))]
    #[case(3, Maybe::nothing())]
    fn test_element_at(#[case] position: usize, #[case] expected: Maybe<i32>) {
        let list = Many::from_values([10, 20, 30]);
        assert_eq!(element_at(&list, position), expected);
    }

    #[rstest]
    #[case(0, vec![], vec![1, 2, 3])]
    #[case(2, vec![1, 2], vec![3])]
    #[case(3, vec![1, 2, 3], vec![])]
    #[case(7, vec![1, 2, 3], vec![])]
    fn test_split_by(#[case] count: usize, #[case] front: Vec<i32>, #[case] back: Vec<i32>) {
        let (left, right) = split_by(&Many::from_values([1, 2, 3]), count);
        assert_eq!(left, Many::from_values(front));
        assert_eq!(right, Many::from_values(back));
    }

    #[rstest]
    fn test_split_by_keeps_absent_elements() {
        let list: Many<i32> = Many::new([None, Some(2)]);
        let (left, right) = split_by(&list, 1);
        assert_eq!(left, Many::new([None]));
        assert_eq!(right, Many::new([Some(2)]));
    }
}
