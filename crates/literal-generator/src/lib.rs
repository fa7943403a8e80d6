//! Random string literal generator.
//!
//! This crate provides the `LiteralGenerator` which produces string literals
//! used as keys for hash table benchmarks. Every literal comes from one of six
//! categories, picked uniformly per draw:
//!
//! ```text
//!                 ┌──────────────────────┐
//!   seed / OS ───▶│   LiteralGenerator   │
//!   entropy       │                      │
//!                 │  - rng (StdRng)      │
//!                 │  - today (optional)  │
//!                 │  - index             │
//!                 └──────────┬───────────┘
//!                            │ uniform 1..=6
//!      ┌──────────┬──────────┼──────────┬──────────┬──────────┐
//!      ▼          ▼          ▼          ▼          ▼          ▼
//!  alphanumeric  uuid       date    file_N.txt  userN@...   sample
//! ```
//!
//! # Example
//!
//! ```rust
//! use literal_generator::LiteralGenerator;
//!
//! let mut generator = LiteralGenerator::new(42);
//! for literal in generator.literals(5) {
//!     println!("{}", literal.value);
//! }
//! ```
//!
//! # Categories
//!
//! - `alphanumeric` - 5 to 15 characters from `[A-Za-z0-9]`
//! - `uuid` - random UUID v4 in canonical hyphenated form
//! - `date` - today's local date as `YYYY-MM-DD`
//! - `file_name` - `file_{n}.txt` with `n` in `1..=9999`
//! - `email` - `user{n}@example.com` with `n` in `1..=9999`
//! - `sample` - one entry of [`samples::SAMPLE_LITERALS`]

pub mod category;
pub mod generator;
pub mod generators;
pub mod samples;

// Re-exports for convenience
pub use category::Category;
pub use generator::{GeneratedLiteral, LiteralGenerator, LiteralIterator};
pub use samples::SAMPLE_LITERALS;
