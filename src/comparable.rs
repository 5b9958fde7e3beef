/*!
The natural ordering capability.

A type that implements [`Comparable`] imposes a total ordering on its values. This ordering is
referred to as the type's _natural ordering_ and [`Comparable::compare_to`] as its _natural
comparison method_. Slices of such values can be sorted without supplying a comparator (see
[`crate::sorting`]) and the values can be used as keys of ordered containers through
[`crate::Natural`].

# Contract

Implementers must ensure the following for all `x`, `y` and `z` of the implementing type:

1. `x.compare_to(&y) == y.compare_to(&x).reverse()`.
1. The relation is transitive: `x > y` and `y > z` implies `x > z`.
1. `x.compare_to(&y) == Ordering::Equal` implies that `x` and `y` order the same way against every
   `z`.

It is strongly recommended, though not required, that the natural ordering be _consistent with
equality_ i.e. `x.compare_to(&y).is_eq()` has the same value as `x == y`. Ordered sets and maps use
the ordering's notion of equality, so two keys that compare as equal but are not `==` collapse
into a single entry. Types that diverge must say so in their documentation. The floating point
implementations in this module are such an example.

Expressed as relations, the natural ordering is `{(x, y) | x.compare_to(&y) <= 0}` and its quotient
`{(x, y) | x.compare_to(&y) == 0}` is an equivalence relation. Consistency with equality means that
the quotient is exactly the relation defined by [`PartialEq`].
*/

use std::cmp::Ordering;

use crate::errors::{ComparisonError, ComparisonResult};

/**
A capability for types that have a natural ordering against values of `T`.

`T` is the type of values that this value may be compared to and is almost always `Self`.
*/
pub trait Comparable<T: ?Sized = Self> {
    /**
    Compare this value with `other` for order.

    Returns [`Ordering::Less`], [`Ordering::Equal`] or [`Ordering::Greater`] as this value is less
    than, equal to, or greater than `other`.

    This must be a pure function of `self` and `other`.
    */
    fn compare_to(&self, other: &T) -> Ordering;

    /**
    Compare this value with a comparand that may be absent.

    # Errors

    Returns [`ComparisonError::InvalidArgument`] if `other` is `None`. An absent comparand cannot
    be ordered, so this never yields an ordering for it.
    */
    fn try_compare_to(&self, other: Option<&T>) -> ComparisonResult<Ordering> {
        match other {
            Some(other) => Ok(self.compare_to(other)),
            None => Err(ComparisonError::InvalidArgument(
                "Cannot compare a value to an absent comparand.".to_string(),
            )),
        }
    }

    /// Compare this value with `other` and return the sign of the result as `-1`, `0` or `1`.
    fn sign_to(&self, other: &T) -> i32 {
        self.compare_to(other).signum()
    }
}

/**
Conversions between an [`Ordering`] and a signed integer.

Only the sign of an integer comparison result carries meaning. The magnitude is discarded.
*/
pub trait Signum {
    /// Returns `-1`, `0` or `1`.
    fn signum(self) -> i32;
}

impl Signum for Ordering {
    fn signum(self) -> i32 {
        match self {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

/**
Classify a signed integer comparison result by its sign.

This is useful for comparison logic that is most naturally written as a subtraction or as a sum of
weighted field differences.
*/
pub fn ordering_from_sign(value: i64) -> Ordering {
    value.cmp(&0)
}

macro_rules! impl_comparable_for_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Comparable for $t {
                fn compare_to(&self, other: &$t) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_comparable_for_ord!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, str, String,
);

/**
Floating point values are ordered with IEEE 754 `totalOrder`.

**This ordering is not consistent with equality.** `-0.0` orders before `0.0` even though the two
are `==`, and a NaN compares as equal to a NaN with the same bit pattern even though `NaN != NaN`.
Negative NaNs order before every other value and positive NaNs after.
*/
impl Comparable for f64 {
    fn compare_to(&self, other: &f64) -> Ordering {
        self.total_cmp(other)
    }
}

/// See the [`f64`] implementation. The same divergence from equality applies.
impl Comparable for f32 {
    fn compare_to(&self, other: &f32) -> Ordering {
        self.total_cmp(other)
    }
}

/// Lexicographic ordering. A strict prefix orders before the longer sequence.
impl<U: Comparable> Comparable for [U] {
    fn compare_to(&self, other: &[U]) -> Ordering {
        for (left, right) in self.iter().zip(other.iter()) {
            let ordering = left.compare_to(right);
            if ordering.is_ne() {
                return ordering;
            }
        }

        self.len().cmp(&other.len())
    }
}

impl<U: Comparable> Comparable for Vec<U> {
    fn compare_to(&self, other: &Vec<U>) -> Ordering {
        self.as_slice().compare_to(other.as_slice())
    }
}

impl<A: Comparable + ?Sized> Comparable for &A {
    fn compare_to(&self, other: &&A) -> Ordering {
        (**self).compare_to(*other)
    }
}

impl<A: Comparable + ?Sized> Comparable for Box<A> {
    fn compare_to(&self, other: &Box<A>) -> Ordering {
        (**self).compare_to(&**other)
    }
}

#[cfg(test)]
mod comparable_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn integers_order_numerically() {
        assert_eq!(1_i32.compare_to(&2), Ordering::Less);
        assert_eq!(2_i32.compare_to(&1), Ordering::Greater);
        assert_eq!(2_i32.compare_to(&2), Ordering::Equal);
        assert_eq!(u64::MAX.compare_to(&0), Ordering::Greater);
    }

    #[test]
    fn absent_comparand_is_an_invalid_argument() {
        let result = 1_i32.try_compare_to(None);

        assert!(matches!(result, Err(ComparisonError::InvalidArgument(_))));
        assert_eq!(1_i32.try_compare_to(Some(&2)), Ok(Ordering::Less));
    }

    #[test]
    fn sign_to_discards_magnitude() {
        assert_eq!(1_000_i64.sign_to(&-1_000), 1);
        assert_eq!((-5_i64).sign_to(&5), -1);
        assert_eq!(7_i64.sign_to(&7), 0);
    }

    #[test]
    fn ordering_from_sign_only_looks_at_the_sign() {
        assert_eq!(ordering_from_sign(-42), Ordering::Less);
        assert_eq!(ordering_from_sign(0), Ordering::Equal);
        assert_eq!(ordering_from_sign(i64::MAX), Ordering::Greater);
        assert_eq!(Ordering::Greater.signum(), 1);
    }

    #[test]
    fn strings_order_lexicographically() {
        assert_eq!("apple".compare_to("banana"), Ordering::Less);
        assert_eq!(
            "abc".to_string().compare_to(&"ab".to_string()),
            Ordering::Greater
        );
        assert_eq!("same".compare_to(&"same"), Ordering::Equal);
    }

    #[test]
    fn sequences_order_lexicographically_with_prefixes_first() {
        assert_eq!(vec![1_i32, 2].compare_to(&vec![1, 2, 0]), Ordering::Less);
        assert_eq!(vec![1_i32, 3].compare_to(&vec![1, 2, 9]), Ordering::Greater);
        assert_eq!(
            [5_u8, 6].as_slice().compare_to([5_u8, 6].as_slice()),
            Ordering::Equal
        );
        assert_eq!(Vec::<u8>::new().compare_to(&vec![0]), Ordering::Less);
    }

    #[test]
    fn float_ordering_diverges_from_equality_on_zero_and_nan() {
        assert!(0.0_f64 == -0.0_f64);
        assert_eq!((-0.0_f64).compare_to(&0.0), Ordering::Less);

        let nan = f64::NAN;
        assert!(nan != nan);
        assert_eq!(nan.compare_to(&nan), Ordering::Equal);
        assert_eq!(nan.compare_to(&f64::INFINITY), Ordering::Greater);
        assert_eq!(1.5_f32.compare_to(&2.5), Ordering::Less);
    }

    #[test]
    fn boxed_values_compare_by_their_contents() {
        let small: Box<str> = "a".into();
        let big: Box<str> = "b".into();

        assert_eq!(small.compare_to(&big), Ordering::Less);
    }
}
