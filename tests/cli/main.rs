//! CLI integration tests.
//!
//! These tests run the built `string-literals` binary and check the shape of
//! what it writes:
//! 1. line count equals the requested count
//! 2. every line looks like one of the six literal categories
//! 3. seeded runs are reproducible
//! 4. the source-array format is valid C
//! 5. configuration layering and failure exit codes

mod config_cli;
mod lines_cli;

use chrono::{Local, NaiveDate};
use literal_generator::Category;

pub const BIN: &str = env!("CARGO_BIN_EXE_string-literals");

/// Dates a run could have used for the date category.
pub fn run_dates(before: NaiveDate) -> [NaiveDate; 2] {
    [before, Local::now().date_naive()]
}

/// Assert `value` has the shape of at least one category.
pub fn assert_known_literal(value: &str, dates: &[NaiveDate]) {
    let known = dates
        .iter()
        .any(|today| !Category::classify(value, *today).is_empty());
    assert!(known, "{value:?} does not match any literal category");
}
