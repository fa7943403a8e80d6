//! Random alphanumeric string generator.

use rand::distr::Alphanumeric;
use rand::Rng;
use std::ops::RangeInclusive;

/// Allowed string lengths.
pub const LENGTH_RANGE: RangeInclusive<usize> = 5..=15;

/// Generate a string of 5 to 15 characters drawn uniformly from `[A-Za-z0-9]`.
pub fn generate_alphanumeric<R: Rng>(rng: &mut R) -> String {
    let len = rng.random_range(LENGTH_RANGE);
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}
