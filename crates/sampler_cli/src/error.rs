//! CLI error types

use sampler_core::SamplerError;
use thiserror::Error;

/// Errors surfaced by the `weighted` command line tool.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Self-check failed: {0}")]
    CheckFailed(String),

    #[error("Sampler error: {0}")]
    Sampler(#[from] SamplerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
