//! Error types for literal emission.

use thiserror::Error;

/// Errors that can occur while writing literals.
#[derive(Error, Debug)]
pub enum EmitError {
    /// IO error, including a closed pipe on the output stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Array name is not a valid C identifier.
    #[error("Invalid array name: {0:?} is not a C identifier")]
    InvalidArrayName(String),
}
