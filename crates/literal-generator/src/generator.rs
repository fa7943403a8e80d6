//! Main literal generator.

use crate::generators::{date, generate_category};
use crate::Category;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// A single generated literal together with the category that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLiteral {
    pub category: Category,
    pub value: String,
}

/// Generator that produces random string literals.
///
/// Each literal is an independent draw: a category is picked uniformly from
/// the six in [`Category::ALL`] and its generator is run once. The sample
/// category is exactly as likely as any other, regardless of how many samples
/// the table holds.
///
/// With the same seed and a pinned date the output is fully reproducible.
pub struct LiteralGenerator {
    /// Random source for every draw
    rng: StdRng,
    /// Date used by [`Category::Date`]; `None` reads the clock on each draw
    today: Option<NaiveDate>,
    /// Number of literals produced so far
    index: u64,
}

impl LiteralGenerator {
    /// Create a new generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a new generator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create a new generator driven by the given RNG.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            today: None,
            index: 0,
        }
    }

    /// Pin the date used for the date category instead of reading the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Get the number of literals generated so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next literal.
    pub fn next_literal(&mut self) -> GeneratedLiteral {
        let selector = self.rng.random_range(0..Category::ALL.len());
        let category = Category::ALL[selector];
        let today = self.today.unwrap_or_else(date::local_today);

        let value = generate_category(category, &mut self.rng, today);
        self.index += 1;

        GeneratedLiteral { category, value }
    }

    /// Generate `count` literals eagerly, in generation order.
    pub fn generate_batch(&mut self, count: u64) -> Vec<GeneratedLiteral> {
        debug!("Generating batch of {} literals", count);
        self.literals(count).collect()
    }

    /// Generate `count` literals lazily.
    pub fn literals(&mut self, count: u64) -> LiteralIterator<'_> {
        LiteralIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates literals.
pub struct LiteralIterator<'a> {
    generator: &'a mut LiteralGenerator,
    remaining: u64,
}

impl Iterator for LiteralIterator<'_> {
    type Item = GeneratedLiteral;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_literal())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LiteralIterator<'_> {}
