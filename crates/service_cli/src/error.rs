//! Error types for the CLI.

use crate::config::ConfigError;
use blend_core::types::BlendError;
use infra_store::StoreError;
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Blend computation failed
    #[error("Blend error: {0}")]
    Blend(#[from] BlendError),

    /// Profile cache or export failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Batch needs at least two liquids
    #[error("Not enough liquids for a batch: found {found}, need at least 2")]
    NotEnoughLiquids {
        /// Number of liquids available
        found: usize,
    },

    /// Invalid command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
