/*!
`natural_order` provides the natural ordering capability: a trait that a value type implements to
impose a total ordering on its own values, along with the contract that sorting routines and
ordered containers rely on.

The crate is organized as follows:

- [`Comparable`] is the capability itself. Its documentation spells out the contract.
- [`Comparator`], [`NaturalOrder`] and [`ReverseOrder`] cover orderings supplied from outside a
  type. [`Natural`] adapts a natural ordering for the standard library's ordered containers.
- [`sorting`] has helpers for callers that sort by natural ordering and must abort when a value
  cannot be ordered.
- [`contract`] verifies an implementation against the contract over a sample of values.
*/

#![warn(missing_debug_implementations, missing_docs)]

mod config;

pub mod comparable;
pub use comparable::{ordering_from_sign, Comparable, Signum};

pub mod comparator;
pub use comparator::{Comparator, Natural, NaturalOrder, ReverseOrder};

pub mod contract;
pub use contract::ContractChecker;

mod errors;
pub use errors::{ComparisonError, ComparisonResult, ContractViolation};

pub mod options;
pub use options::ContractCheckOptions;

pub mod sorting;
pub use sorting::{sort_natural, try_sort_natural};
