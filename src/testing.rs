//! Test helpers shared by the CLI integration tests.

pub mod cli;
