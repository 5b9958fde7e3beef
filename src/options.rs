/*!
This module holds the option structures that can be passed to contract verification.
*/

use crate::config::{DEFAULT_EXHAUSTIVE_LIMIT, DEFAULT_SAMPLED_TRIPLES, DEFAULT_SAMPLING_SEED};

/// Holds options to control how a natural ordering is verified against its contract.
#[derive(Clone, Debug)]
pub struct ContractCheckOptions {
    /**
    Samples with at most this many values are verified over every pair and triple.

    **This defaults to 64.**
    */
    exhaustive_limit: usize,

    /**
    The number of random triples to verify when a sample is larger than the exhaustive limit.

    **This defaults to 100,000.**
    */
    sampled_triples: usize,

    /**
    Seed for drawing random triples.

    A fixed seed makes a reported violation reproducible.
    */
    seed: u64,

    /**
    Also verify that the ordering is consistent with value equality.

    Consistency with equality is recommended but not required so this is only reported when set.

    **This defaults to false.**
    */
    require_consistent_with_equals: bool,
}

/// Public methods
impl ContractCheckOptions {
    /// Get the largest sample size that is verified exhaustively.
    pub fn exhaustive_limit(&self) -> usize {
        self.exhaustive_limit
    }

    /// Set the largest sample size that is verified exhaustively.
    pub fn set_exhaustive_limit(&mut self, limit: usize) -> &mut Self {
        self.exhaustive_limit = limit;
        self
    }

    /// Get the number of random triples verified for large samples.
    pub fn sampled_triples(&self) -> usize {
        self.sampled_triples
    }

    /// Set the number of random triples verified for large samples.
    pub fn set_sampled_triples(&mut self, num_triples: usize) -> &mut Self {
        self.sampled_triples = num_triples;
        self
    }

    /// Get the sampling seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Set the sampling seed.
    pub fn set_seed(&mut self, seed: u64) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Whether consistency with value equality is verified.
    pub fn require_consistent_with_equals(&self) -> bool {
        self.require_consistent_with_equals
    }

    /// Set whether consistency with value equality is verified.
    pub fn set_require_consistent_with_equals(&mut self, required: bool) -> &mut Self {
        self.require_consistent_with_equals = required;
        self
    }
}

impl Default for ContractCheckOptions {
    fn default() -> Self {
        ContractCheckOptions {
            exhaustive_limit: DEFAULT_EXHAUSTIVE_LIMIT,
            sampled_triples: DEFAULT_SAMPLED_TRIPLES,
            seed: DEFAULT_SAMPLING_SEED,
            require_consistent_with_equals: false,
        }
    }
}
