//! Output writers for generated string literals.
//!
//! Two formats are supported:
//!
//! - `lines`: one literal per line, flushed after every line so a consumer
//!   reading a pipe sees output as it is produced.
//! - `source-array`: a C source file declaring
//!   `const char* test_strings[] = { ... };` with backslashes and double
//!   quotes escaped.
//!
//! # Example
//!
//! ```rust
//! use literal_emit::{LiteralEmitter, OutputFormat};
//! use literal_generator::LiteralGenerator;
//!
//! let mut generator = LiteralGenerator::new(42);
//! let emitter = LiteralEmitter::new(OutputFormat::Lines);
//!
//! let mut out = Vec::new();
//! let metrics = emitter.emit(&mut out, generator.literals(10)).unwrap();
//! assert_eq!(metrics.literals_written, 10);
//! ```

pub mod args;
pub mod emitter;
pub mod error;
pub mod format;

pub use args::GenerateArgs;
pub use emitter::{EmitMetrics, LiteralEmitter};
pub use error::EmitError;
pub use format::{escape_c_string, OutputFormat, DEFAULT_ARRAY_NAME};
