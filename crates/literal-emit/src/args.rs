//! CLI argument definitions for the generate command.
//!
//! Every option is optional here so values can fall back to a config file
//! before the built-in defaults apply.

use crate::format::OutputFormat;
use clap::Args;
use std::path::PathBuf;

/// Arguments controlling how many literals are generated and where they go.
#[derive(Args, Clone, Debug, Default)]
pub struct GenerateArgs {
    /// Number of literals to generate [default: 1000]
    #[arg(long, short = 'n', env = "STRING_LITERALS_COUNT")]
    pub count: Option<u64>,

    /// Output format [default: lines]
    #[arg(long, short = 'f', value_enum, env = "STRING_LITERALS_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Random seed for reproducible output (same seed = same literals)
    #[arg(long, env = "STRING_LITERALS_SEED")]
    pub seed: Option<u64>,

    /// Write to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH", env = "STRING_LITERALS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Variable name of the C array in source-array format [default: test_strings]
    #[arg(long, value_name = "IDENT")]
    pub array_name: Option<String>,

    /// YAML config file supplying defaults for the options above
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,
}
