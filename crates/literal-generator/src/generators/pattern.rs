//! Pattern-based string generator.
//!
//! Every `{n}` placeholder in the pattern is replaced by its own random
//! integer drawn from the given range.

use rand::Rng;
use std::ops::RangeInclusive;

/// Synthetic file name.
pub const FILE_NAME_PATTERN: &str = "file_{n}.txt";

/// Synthetic email address.
pub const EMAIL_PATTERN: &str = "user{n}@example.com";

/// Range for `{n}` in the built-in patterns.
pub const NUMBER_RANGE: RangeInclusive<u32> = 1..=9999;

const PLACEHOLDER: &str = "{n}";

/// Generate a string based on a pattern with `{n}` placeholders.
pub fn generate_pattern<R: Rng>(pattern: &str, rng: &mut R, range: RangeInclusive<u32>) -> String {
    let mut result = String::with_capacity(pattern.len() + 4);
    let mut rest = pattern;

    while let Some(start) = rest.find(PLACEHOLDER) {
        result.push_str(&rest[..start]);
        let n = rng.random_range(range.clone());
        result.push_str(&n.to_string());
        rest = &rest[start + PLACEHOLDER.len()..];
    }
    result.push_str(rest);

    result
}
