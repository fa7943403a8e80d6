//! Run configuration.
//!
//! Values are layered, highest precedence first:
//! 1. command-line flags
//! 2. environment variables (`STRING_LITERALS_*`)
//! 3. the YAML file given with `--config`
//! 4. built-in defaults

use anyhow::Context;
use literal_emit::{GenerateArgs, OutputFormat, DEFAULT_ARRAY_NAME};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Number of literals generated when nothing else is configured.
pub const DEFAULT_COUNT: u64 = 1000;

/// Contents of a YAML config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub count: Option<u64>,
    pub format: Option<OutputFormat>,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub array_name: Option<String>,
}

impl ConfigFile {
    /// Parse a config from a YAML string.
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse config YAML")
    }

    /// Load a config from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path:?}"))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid config file: {path:?}"))
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub count: u64,
    pub format: OutputFormat,
    /// `None` seeds from operating system entropy
    pub seed: Option<u64>,
    /// `None` writes to stdout
    pub output: Option<PathBuf>,
    pub array_name: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            format: OutputFormat::default(),
            seed: None,
            output: None,
            array_name: DEFAULT_ARRAY_NAME.to_string(),
        }
    }
}

impl RunConfig {
    /// Resolve CLI arguments, loading the config file they point to.
    pub fn from_args(args: &GenerateArgs) -> anyhow::Result<Self> {
        let file = match &args.config {
            Some(path) => {
                tracing::debug!("Loading config from {:?}", path);
                ConfigFile::from_file(path)?
            }
            None => ConfigFile::default(),
        };
        Ok(Self::merge(args, file))
    }

    /// Layer CLI arguments over a config file over the defaults.
    pub fn merge(args: &GenerateArgs, file: ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            count: args.count.or(file.count).unwrap_or(defaults.count),
            format: args.format.or(file.format).unwrap_or(defaults.format),
            seed: args.seed.or(file.seed),
            output: args.output.clone().or(file.output),
            array_name: args
                .array_name
                .clone()
                .or(file.array_name)
                .unwrap_or(defaults.array_name),
        }
    }
}
