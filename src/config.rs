/*!
This module contains global configuration constants.

These are the defaults for [`ContractCheckOptions`](crate::ContractCheckOptions).
*/

/**
The largest sample that is verified exhaustively.

Checking transitivity and equality propagation visits every ordered triple of the sample, so the
cost grows with the cube of the sample size. At 64 values this is 262,144 triples.
*/
pub(crate) const DEFAULT_EXHAUSTIVE_LIMIT: usize = 64;

/// The number of random triples drawn when a sample is too large to verify exhaustively.
pub(crate) const DEFAULT_SAMPLED_TRIPLES: usize = 100_000;

/// Seed for the random number generator used to draw triples so that failures are reproducible.
pub(crate) const DEFAULT_SAMPLING_SEED: u64 = 0x5EED_0F_0DE5;
