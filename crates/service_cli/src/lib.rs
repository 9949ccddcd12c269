//! # Service CLI: Blended Distillation Profiles
//!
//! Library half of the `blend-profile` binary: configuration, batch
//! generation, and output rendering. The binary in `main.rs` wires these to
//! clap subcommands.
//!
//! As the service layer, this crate owns logging initialisation and
//! parallelism; the core crate stays pure.

#![warn(missing_docs)]

pub mod batch;
pub mod commands;
pub mod config;
mod error;
pub mod output;

pub use error::{CliError, Result};

use blend_core::distillation::BlendPipeline;
use infra_store::CsvProfileStore;

/// Open the configured profile cache and wrap it in a pipeline.
///
/// # Errors
///
/// Returns [`CliError::FileNotFound`] if the cache file does not exist, or a
/// store error if it cannot be parsed.
pub fn open_pipeline(config: &config::BlendConfig) -> Result<BlendPipeline<CsvProfileStore>> {
    if !config.data_file.is_file() {
        return Err(CliError::FileNotFound(config.data_file.display().to_string()));
    }
    let store = CsvProfileStore::open(&config.data_file)?;
    Ok(BlendPipeline::new(store))
}
