//! string-literals library
//!
//! Generates random string literals to feed hash table benchmarks. Each
//! literal is a random alphanumeric string, a UUID, today's date, a
//! `file_N.txt` name, a `userN@example.com` address, or one of a fixed set of
//! realistic samples.
//!
//! # CLI Usage
//!
//! ```bash
//! # 1000 literals, one per line, on stdout
//! string-literals
//!
//! # Reproducible run
//! string-literals --count 5 --seed 42
//!
//! # C source array written to a file
//! string-literals --format source-array --output string_literals.c
//!
//! # Defaults from a config file, overridden on the command line
//! string-literals --config literals.yaml --count 10
//! ```

pub mod config;
pub mod generate;
pub mod testing;

pub use config::{ConfigFile, RunConfig};
pub use generate::run_generate;
