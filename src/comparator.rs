/*!
Utilities to assist with comparing by something other than, or in terms of, the natural ordering.

A [`Comparator`] is an ordering supplied from outside of a type, as opposed to the natural ordering
that a type provides for itself through [`Comparable`]. [`NaturalOrder`] bridges the two.

[`Natural`] goes the other direction and hands a natural ordering to the standard library's
ordered containers, which only understand [`Ord`].
*/

use std::cmp::Ordering;
use std::fmt;

use crate::comparable::Comparable;

/// An interface for structs intended to be used as a comparator.
pub trait Comparator<T: ?Sized> {
    /**
    Return an ordering obtained by comparing `a` and `b`.

    Invariants:

    1. Returns [`Ordering::Greater`] if `a` > `b`
    1. Returns [`Ordering::Equal`] if `a` == `b`
    1. Returns [`Ordering::Less`] if `a` < `b`
    */
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// A comparator that orders values by their natural ordering.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<T: Comparable + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.compare_to(b)
    }
}

/// A comparator that imposes the reverse of the wrapped comparator's ordering.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseOrder<C> {
    inner: C,
}

impl<C> ReverseOrder<C> {
    /// Create a new instance of [`ReverseOrder`].
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Get a reference to the wrapped comparator.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for ReverseOrder<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.inner.compare(b, a)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/**
A transparent wrapper that implements [`Ord`] in terms of the wrapped value's natural ordering.

This allows values that only have a natural ordering to be used as keys in a
[`BTreeMap`](std::collections::BTreeMap), as elements of a
[`BTreeSet`](std::collections::BTreeSet) or in a [`BinaryHeap`](std::collections::BinaryHeap).

Equality of two wrappers is the quotient of the natural ordering and not the wrapped type's
[`PartialEq`]. If the natural ordering is not consistent with equality, values that are not `==`
but compare as equal are treated as the same key, and inserting the second is a no-op for sets.
*/
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct Natural<T>(pub T);

impl<T> Natural<T> {
    /// Unwrap the value.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Get a reference to the wrapped value.
    pub fn get(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Natural<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Comparable> Ord for Natural<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.compare_to(&other.0)
    }
}

impl<T: Comparable> PartialOrd for Natural<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Comparable> PartialEq for Natural<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.compare_to(&other.0).is_eq()
    }
}

impl<T: Comparable> Eq for Natural<T> {}

impl<T> From<T> for Natural<T> {
    fn from(value: T) -> Self {
        Natural(value)
    }
}

#[cfg(test)]
mod comparator_tests {
    use std::collections::{BTreeSet, BinaryHeap};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn natural_order_delegates_to_compare_to() {
        let comparator = NaturalOrder;

        assert_eq!(comparator.compare(&1_u32, &2_u32), Ordering::Less);
        assert_eq!(comparator.compare("b", "a"), Ordering::Greater);
    }

    #[test]
    fn reverse_order_flips_the_wrapped_comparator() {
        let comparator = ReverseOrder::new(NaturalOrder);

        assert_eq!(comparator.compare(&1_u32, &2_u32), Ordering::Greater);
        assert_eq!(comparator.compare(&2_u32, &2_u32), Ordering::Equal);

        let twice_reversed = ReverseOrder::new(comparator);
        assert_eq!(twice_reversed.compare(&1_u32, &2_u32), Ordering::Less);
    }

    #[test]
    fn closures_can_be_used_as_comparators() {
        let by_length = |a: &String, b: &String| a.len().cmp(&b.len());

        assert_eq!(
            by_length.compare(&"zz".to_string(), &"aaa".to_string()),
            Ordering::Less
        );
    }

    #[test]
    fn natural_wrapper_can_key_ordered_containers() {
        let set: BTreeSet<Natural<f64>> = [3.5, -1.0, 2.0, 3.5]
            .into_iter()
            .map(Natural)
            .collect();
        let values: Vec<f64> = set.into_iter().map(Natural::into_inner).collect();
        assert_eq!(values, vec![-1.0, 2.0, 3.5]);

        let mut heap: BinaryHeap<Natural<f64>> = BinaryHeap::new();
        heap.push(Natural(0.5));
        heap.push(Natural(f64::NAN));
        heap.push(Natural(9.0));
        assert!(heap.pop().unwrap().get().is_nan());
        assert_eq!(heap.pop().map(Natural::into_inner), Some(9.0));
    }

    #[test]
    fn natural_wrapper_equality_is_the_ordering_quotient() {
        assert!(Natural(f64::NAN) == Natural(f64::NAN));
        assert!(Natural(0.0_f64) != Natural(-0.0_f64));
    }
}
