/*!
Helpers for callers that order collections by a natural ordering.

Sorting itself is delegated to the standard library's stable sort. The helpers here only decide
which ordering is used and make sure a comparison failure aborts the whole operation instead of
being skipped.
*/

use std::cmp::Ordering;

use crate::comparable::Comparable;
use crate::comparator::Comparator;
use crate::errors::{ComparisonError, ComparisonResult};

/**
Sort `values` in ascending natural order.

The sort is stable: values that compare as equal keep their relative order.
*/
pub fn sort_natural<T: Comparable>(values: &mut [T]) {
    values.sort_by(|a, b| a.compare_to(b));
}

/// Stable sort of `values` by an externally supplied comparator.
pub fn sort_by_comparator<T, C: Comparator<T>>(values: &mut [T], comparator: &C) {
    values.sort_by(|a, b| comparator.compare(a, b));
}

/**
Sort values that may be absent in ascending natural order.

# Errors

Returns [`ComparisonError::InvalidArgument`] naming the first absent element if any element is
absent. The slice is left untouched in that case.
*/
pub fn try_sort_natural<T: Comparable>(values: &mut [Option<T>]) -> ComparisonResult<()> {
    if let Some(absent_index) = values.iter().position(Option::is_none) {
        log::debug!(
            "Aborting sort of {} values because the value at index {} is absent.",
            values.len(),
            absent_index
        );
        return Err(ComparisonError::InvalidArgument(format!(
            "The value at index {} is absent and cannot be ordered.",
            absent_index
        )));
    }

    values.sort_by(|a, b| match (a, b) {
        (Some(a), Some(b)) => a.compare_to(b),
        // Absent values were ruled out above
        _ => Ordering::Equal,
    });

    Ok(())
}

/// Returns true if `values` is in ascending natural order.
pub fn is_sorted_natural<T: Comparable>(values: &[T]) -> bool {
    values
        .windows(2)
        .all(|window| window[0].compare_to(&window[1]).is_le())
}

/**
Returns the greatest value by natural ordering.

If several values are equally greatest, the last one is returned.
*/
pub fn max_natural<T: Comparable, I: IntoIterator<Item = T>>(values: I) -> Option<T> {
    values.into_iter().max_by(|a, b| a.compare_to(b))
}

/**
Returns the least value by natural ordering.

If several values are equally least, the first one is returned.
*/
pub fn min_natural<T: Comparable, I: IntoIterator<Item = T>>(values: I) -> Option<T> {
    values.into_iter().min_by(|a, b| a.compare_to(b))
}
