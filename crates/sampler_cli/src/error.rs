//! CLI error type

use sampler_core::SamplerError;
use thiserror::Error;

/// Errors surfaced by the `sampler` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Generator construction or configuration failed.
    #[error(transparent)]
    Sampler(#[from] SamplerError),

    /// A command-line argument could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing samples failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
