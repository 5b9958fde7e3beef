/*!
This module contains error types specific to comparing values by their natural ordering, as well
as the errors reported when an ordering is found to break its contract.
*/

use std::cmp::Ordering;
use std::fmt;

/// Alias for results of comparisons that can fail.
pub type ComparisonResult<T> = Result<T, ComparisonError>;

/// Errors surfaced by comparisons and by operations built on top of comparisons.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ComparisonError {
    /**
    Variant for comparisons where the comparand was absent.

    An absent value is not an instance of any orderable type so it can never be ordered relative
    to a present value. This is distinct from value equality, which answers `false` for the same
    situation.
    */
    InvalidArgument(String),
}

impl std::error::Error for ComparisonError {}

impl fmt::Display for ComparisonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonError::InvalidArgument(reason) => write!(f, "Invalid argument: {}", reason),
        }
    }
}

/**
Describes how an ordering broke its contract.

Indices refer to positions in the sample that was being verified.
*/
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ContractViolation {
    /// `compare(x, x)` did not return [`Ordering::Equal`].
    Reflexivity {
        /// Index of the value.
        index: usize,
        /// The result of comparing the value to itself.
        actual: Ordering,
    },

    /// `sign(compare(x, y))` was not the negation of `sign(compare(y, x))`.
    Antisymmetry {
        /// Index of the receiver.
        left: usize,
        /// Index of the comparand.
        right: usize,
        /// Result of comparing `left` to `right`.
        forward: Ordering,
        /// Result of comparing `right` to `left`.
        backward: Ordering,
    },

    /// `x > y` and `y > z` (or `x < y` and `y < z`) but `x` was not ordered the same way against `z`.
    Transitivity {
        /// Index of the first value of the chain.
        first: usize,
        /// Index of the middle value of the chain.
        second: usize,
        /// Index of the last value of the chain.
        third: usize,
        /// Result of comparing `first` to `third`.
        actual: Ordering,
    },

    /**
    `compare(x, y) == 0` but `x` and `y` were ordered differently against some `z`.
    */
    EqualityPropagation {
        /// Index of the receiver.
        left: usize,
        /// Index of the comparand.
        right: usize,
        /// Index of the value both were compared against.
        pivot: usize,
        /// Result of comparing `left` to `pivot`.
        left_to_pivot: Ordering,
        /// Result of comparing `right` to `pivot`.
        right_to_pivot: Ordering,
    },

    /// Comparing against an absent value did not fail with an invalid argument error.
    AbsentComparand {
        /// Index of the receiver.
        index: usize,
    },

    /**
    The quotient of the ordering differs from value equality for the pair.

    This is advisory. Orderings are strongly encouraged, but not required, to be consistent with
    equality.
    */
    InconsistentWithEquals {
        /// Index of the receiver.
        left: usize,
        /// Index of the comparand.
        right: usize,
        /// Result of comparing `left` to `right`.
        ordering: Ordering,
        /// Result of `left == right`.
        equal: bool,
    },
}

impl std::error::Error for ContractViolation {}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::Reflexivity { index, actual } => write!(
                f,
                "Value at index {} compared as {:?} against itself instead of Equal.",
                index, actual
            ),
            ContractViolation::Antisymmetry {
                left,
                right,
                forward,
                backward,
            } => write!(
                f,
                "Comparing index {} to {} gave {:?} but the reverse comparison gave {:?}.",
                left, right, forward, backward
            ),
            ContractViolation::Transitivity {
                first,
                second,
                third,
                actual,
            } => write!(
                f,
                "Indices {}, {}, {} are chained in one direction but comparing {} to {} gave {:?}.",
                first, second, third, first, third, actual
            ),
            ContractViolation::EqualityPropagation {
                left,
                right,
                pivot,
                left_to_pivot,
                right_to_pivot,
            } => write!(
                f,
                "Indices {} and {} compare as Equal but against index {} they gave {:?} and {:?}.",
                left, right, pivot, left_to_pivot, right_to_pivot
            ),
            ContractViolation::AbsentComparand { index } => write!(
                f,
                "Comparing the value at index {} to an absent value did not fail with an invalid \
                argument error.",
                index
            ),
            ContractViolation::InconsistentWithEquals {
                left,
                right,
                ordering,
                equal,
            } => write!(
                f,
                "Indices {} and {} compare as {:?} but value equality returned {}.",
                left, right, ordering, equal
            ),
        }
    }
}
