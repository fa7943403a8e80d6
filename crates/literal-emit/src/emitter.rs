//! Literal emitter.

use crate::error::EmitError;
use crate::format::{escape_c_string, is_c_identifier, OutputFormat, DEFAULT_ARRAY_NAME};
use literal_generator::{Category, GeneratedLiteral};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for file output.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// How often progress is logged, in literals.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Metrics from an emit operation.
#[derive(Debug, Clone, Default)]
pub struct EmitMetrics {
    /// Number of literals written.
    pub literals_written: u64,
    /// Number of bytes written, including formatting.
    pub bytes_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Literals written per category.
    pub per_category: BTreeMap<Category, u64>,
}

impl EmitMetrics {
    /// Calculate literals per second.
    pub fn literals_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.literals_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes generated literals in one of the [`OutputFormat`]s.
#[derive(Debug, Clone)]
pub struct LiteralEmitter {
    format: OutputFormat,
    array_name: String,
}

impl LiteralEmitter {
    /// Create a new emitter for the given format.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            array_name: DEFAULT_ARRAY_NAME.to_string(),
        }
    }

    /// Set the C variable name used by [`OutputFormat::SourceArray`].
    pub fn with_array_name(mut self, name: impl Into<String>) -> Result<Self, EmitError> {
        let name = name.into();
        if !is_c_identifier(&name) {
            return Err(EmitError::InvalidArrayName(name));
        }
        self.array_name = name;
        Ok(self)
    }

    /// Write all literals to `writer`.
    ///
    /// Any write failure stops the run and is returned as is; nothing is
    /// retried.
    pub fn emit<W, I>(&self, writer: W, literals: I) -> Result<EmitMetrics, EmitError>
    where
        W: Write,
        I: IntoIterator<Item = GeneratedLiteral>,
    {
        let start_time = Instant::now();
        let mut writer = CountingWriter::new(writer);
        let mut metrics = EmitMetrics::default();

        match self.format {
            OutputFormat::Lines => {
                for literal in literals {
                    writeln!(writer, "{}", literal.value)?;
                    writer.flush()?;
                    record(&mut metrics, &literal);
                }
            }
            OutputFormat::SourceArray => {
                writeln!(writer, "const char* {}[] = {{", self.array_name)?;
                for literal in literals {
                    writeln!(writer, "    \"{}\",", escape_c_string(&literal.value))?;
                    record(&mut metrics, &literal);
                }
                writeln!(writer, "}};")?;
                writer.flush()?;
            }
        }

        metrics.bytes_written = writer.bytes_written();
        metrics.total_duration = start_time.elapsed();

        debug!("Literals per category: {:?}", metrics.per_category);
        info!(
            "Emitted {} literals as {}: {} bytes in {:?} ({:.2} literals/sec)",
            metrics.literals_written,
            self.format,
            metrics.bytes_written,
            metrics.total_duration,
            metrics.literals_per_second()
        );

        Ok(metrics)
    }

    /// Write all literals to a file, replacing it if it exists.
    pub fn emit_to_file<P, I>(&self, output_path: P, literals: I) -> Result<EmitMetrics, EmitError>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = GeneratedLiteral>,
    {
        let output_path = output_path.as_ref();
        info!("Writing literals to '{}'", output_path.display());

        let file = File::create(output_path)?;
        let writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        self.emit(writer, literals)
    }

    /// Write all literals to standard output.
    pub fn emit_to_stdout<I>(&self, literals: I) -> Result<EmitMetrics, EmitError>
    where
        I: IntoIterator<Item = GeneratedLiteral>,
    {
        let stdout = io::stdout();
        self.emit(stdout.lock(), literals)
    }
}

fn record(metrics: &mut EmitMetrics, literal: &GeneratedLiteral) {
    metrics.literals_written += 1;
    *metrics.per_category.entry(literal.category).or_default() += 1;

    if metrics.literals_written % PROGRESS_INTERVAL == 0 {
        debug!("Written {} literals", metrics.literals_written);
    }
}

/// Writer adapter that counts bytes passed through.
struct CountingWriter<W> {
    inner: W,
    count: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.count
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
