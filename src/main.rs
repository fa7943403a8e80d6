//! Command-line interface for string-literals
//!
//! # Usage Examples
//!
//! ```bash
//! # 1000 random literals, one per line
//! string-literals
//!
//! # Five reproducible literals
//! string-literals --count 5 --seed 42
//!
//! # C array for a benchmark source file
//! string-literals --format source-array --output string_literals.c
//!
//! # Debug logging (written to stderr)
//! RUST_LOG=debug string-literals --count 20000 > /dev/null
//! ```

use clap::Parser;
use literal_emit::GenerateArgs;
use string_literals::run_generate;

#[derive(Parser)]
#[command(name = "string-literals")]
#[command(about = "Generate random string literals for hash table benchmarks")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing; stdout carries the literals, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run_generate(cli.args)?;

    Ok(())
}
