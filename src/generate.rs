//! Generate command handler.

use crate::config::RunConfig;
use anyhow::Context;
use literal_emit::{EmitMetrics, GenerateArgs, LiteralEmitter};
use literal_generator::LiteralGenerator;

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> anyhow::Result<EmitMetrics> {
    let config = RunConfig::from_args(&args)?;
    run_with_config(&config)
}

/// Generate and emit literals as described by `config`.
pub fn run_with_config(config: &RunConfig) -> anyhow::Result<EmitMetrics> {
    tracing::info!(
        "Generating {} literals as {} (seed={:?})",
        config.count,
        config.format,
        config.seed
    );

    let emitter = LiteralEmitter::new(config.format)
        .with_array_name(config.array_name.as_str())
        .context("Invalid --array-name")?;

    let mut generator = match config.seed {
        Some(seed) => LiteralGenerator::new(seed),
        None => LiteralGenerator::from_entropy(),
    };
    let literals = generator.literals(config.count);

    let metrics = match &config.output {
        Some(path) => emitter
            .emit_to_file(path, literals)
            .with_context(|| format!("Failed to write literals to {path:?}"))?,
        None => emitter
            .emit_to_stdout(literals)
            .context("Failed to write literals to stdout")?,
    };

    Ok(metrics)
}
