//! CLI Error Types
//!
//! Error types for the mint CLI, with stable exit codes per class.

use thiserror::Error;

use mint_pipeline::PipelineError;
use mint_store::StoreError;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// File I/O error
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Content store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Pipeline error
    #[error("Mint error: {0}")]
    Pipeline(#[from] PipelineError),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        CliError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_arg(message: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config { .. } => 1,
            CliError::InvalidArgument { .. } => 2,
            CliError::Io(_) => 3,
            CliError::Store(_) => 10,
            CliError::Pipeline(e) if e.is_validation() => 2,
            CliError::Pipeline(_) => 11,
        }
    }
}
