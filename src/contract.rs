/*!
Verification of a natural ordering against its contract.

Each check takes a sample of values of a concrete type and reports the first violation found along
with the indices of the offending values in the sample. [`ContractChecker`] runs every required
check, exhaustively for small samples and on randomly drawn triples for large ones.

These are intended for the test suites of types that implement [`Comparable`], e.g.

```
use natural_order::contract::ContractChecker;

let sample: Vec<i64> = (-50..50).collect();
assert!(ContractChecker::default().check(&sample).is_ok());
```
*/

use std::cmp::Ordering;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::comparable::Comparable;
use crate::errors::{ComparisonError, ContractViolation};
use crate::options::ContractCheckOptions;

type ContractResult = Result<(), ContractViolation>;

/// Log a violation before handing it back to the caller.
fn report(violation: ContractViolation) -> ContractViolation {
    log::warn!("Natural ordering contract violated: {}", violation);
    violation
}

/// Verify that every value compares as equal to itself.
pub fn check_reflexivity<T: Comparable>(values: &[T]) -> ContractResult {
    for (index, value) in values.iter().enumerate() {
        let actual = value.compare_to(value);
        if actual.is_ne() {
            return Err(report(ContractViolation::Reflexivity { index, actual }));
        }
    }

    Ok(())
}

/// Verify that `sign(compare(x, y)) == -sign(compare(y, x))` for every pair of the sample.
pub fn check_antisymmetry<T: Comparable>(values: &[T]) -> ContractResult {
    for left in 0..values.len() {
        for right in left..values.len() {
            check_pair(values, left, right)?;
        }
    }

    Ok(())
}

/**
Verify that the ordering is transitive over every triple of the sample.

Equal links are covered by [`check_equality_propagation`].
*/
pub fn check_transitivity<T: Comparable>(values: &[T]) -> ContractResult {
    for_each_triple(values.len(), |first, second, third| {
        check_transitive_triple(values, first, second, third)
    })
}

/// Verify that values comparing as equal order the same way against every value of the sample.
pub fn check_equality_propagation<T: Comparable>(values: &[T]) -> ContractResult {
    for_each_triple(values.len(), |left, right, pivot| {
        check_propagation_triple(values, left, right, pivot)
    })
}

/// Verify that comparing any value of the sample to an absent value fails as an invalid argument.
pub fn check_absent_comparand<T: Comparable>(values: &[T]) -> ContractResult {
    for (index, value) in values.iter().enumerate() {
        match value.try_compare_to(None) {
            Err(ComparisonError::InvalidArgument(_)) => {}
            Ok(_) => return Err(report(ContractViolation::AbsentComparand { index })),
        }
    }

    Ok(())
}

/**
Verify that the ordering's notion of equality coincides with value equality.

This is recommended but not required of a natural ordering, so a failure here is advisory. Types
that intentionally diverge should document it instead.
*/
pub fn check_consistent_with_equals<T: Comparable + PartialEq>(values: &[T]) -> ContractResult {
    for left in 0..values.len() {
        for right in left..values.len() {
            let ordering = values[left].compare_to(&values[right]);
            let equal = values[left] == values[right];
            if ordering.is_eq() != equal {
                return Err(report(ContractViolation::InconsistentWithEquals {
                    left,
                    right,
                    ordering,
                    equal,
                }));
            }
        }
    }

    Ok(())
}

/// Runs all of the contract checks according to a set of [`ContractCheckOptions`].
#[derive(Clone, Debug, Default)]
pub struct ContractChecker {
    options: ContractCheckOptions,
}

/// Public methods
impl ContractChecker {
    /// Create a new instance of [`ContractChecker`].
    pub fn new(options: ContractCheckOptions) -> Self {
        Self { options }
    }

    /// Get a reference to the options the checker was configured with.
    pub fn options(&self) -> &ContractCheckOptions {
        &self.options
    }

    /**
    Verify every required property of the natural ordering over `values`.

    Reflexivity and failure on an absent comparand are always verified for every value. Pairwise
    and triple-wise properties are verified exhaustively if the sample is within the exhaustive
    limit and on randomly drawn triples otherwise.
    */
    pub fn check<T: Comparable>(&self, values: &[T]) -> ContractResult {
        log::debug!("Checking the natural ordering contract over {} values", values.len());

        check_reflexivity(values)?;
        check_absent_comparand(values)?;

        if values.len() <= self.options.exhaustive_limit() {
            check_antisymmetry(values)?;
            check_transitivity(values)?;
            check_equality_propagation(values)
        } else {
            self.check_sampled(values)
        }
    }

    /**
    Same as [`ContractChecker::check`] and additionally verifies consistency with value equality
    if the options require it.
    */
    pub fn check_with_equals<T: Comparable + PartialEq>(&self, values: &[T]) -> ContractResult {
        self.check(values)?;

        if self.options.require_consistent_with_equals() {
            check_consistent_with_equals(values)?;
        }

        Ok(())
    }
}

/// Private methods
impl ContractChecker {
    fn check_sampled<T: Comparable>(&self, values: &[T]) -> ContractResult {
        let num_triples = self.options.sampled_triples();
        log::debug!(
            "Sample of {} values exceeds the exhaustive limit of {}. Checking {} random triples \
            with seed {}.",
            values.len(),
            self.options.exhaustive_limit(),
            num_triples,
            self.options.seed()
        );

        let mut rng = StdRng::seed_from_u64(self.options.seed());
        let index_distribution = Uniform::new(0, values.len());
        for _ in 0..num_triples {
            let first = index_distribution.sample(&mut rng);
            let second = index_distribution.sample(&mut rng);
            let third = index_distribution.sample(&mut rng);

            check_pair(values, first, second)?;
            check_transitive_triple(values, first, second, third)?;
            check_propagation_triple(values, first, second, third)?;
        }

        Ok(())
    }
}

fn for_each_triple<F>(num_values: usize, mut check: F) -> ContractResult
where
    F: FnMut(usize, usize, usize) -> ContractResult,
{
    for first in 0..num_values {
        for second in 0..num_values {
            for third in 0..num_values {
                check(first, second, third)?;
            }
        }
    }

    Ok(())
}

fn check_pair<T: Comparable>(values: &[T], left: usize, right: usize) -> ContractResult {
    let forward = values[left].compare_to(&values[right]);
    let backward = values[right].compare_to(&values[left]);
    if forward != backward.reverse() {
        return Err(report(ContractViolation::Antisymmetry {
            left,
            right,
            forward,
            backward,
        }));
    }

    Ok(())
}

fn check_transitive_triple<T: Comparable>(
    values: &[T],
    first: usize,
    second: usize,
    third: usize,
) -> ContractResult {
    let first_to_second = values[first].compare_to(&values[second]);
    let second_to_third = values[second].compare_to(&values[third]);
    if first_to_second == Ordering::Equal || first_to_second != second_to_third {
        return Ok(());
    }

    let actual = values[first].compare_to(&values[third]);
    if actual != first_to_second {
        return Err(report(ContractViolation::Transitivity {
            first,
            second,
            third,
            actual,
        }));
    }

    Ok(())
}

fn check_propagation_triple<T: Comparable>(
    values: &[T],
    left: usize,
    right: usize,
    pivot: usize,
) -> ContractResult {
    if values[left].compare_to(&values[right]).is_ne() {
        return Ok(());
    }

    let left_to_pivot = values[left].compare_to(&values[pivot]);
    let right_to_pivot = values[right].compare_to(&values[pivot]);
    if left_to_pivot != right_to_pivot {
        return Err(report(ContractViolation::EqualityPropagation {
            left,
            right,
            pivot,
            left_to_pivot,
            right_to_pivot,
        }));
    }

    Ok(())
}
