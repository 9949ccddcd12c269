//! Codes command implementation
//!
//! Lists the liquids available in the profile cache.

use blend_core::distillation::ProfileStore;
use tracing::info;

use crate::config::BlendConfig;
use crate::{open_pipeline, output, Result};

/// Run the codes command
pub fn run(config: &BlendConfig) -> Result<()> {
    let pipeline = open_pipeline(config)?;
    let codes = pipeline.store().liquid_ids();
    info!(count = codes.len(), "Listing liquid codes");

    print!("{}", output::render_codes(&codes, config.format)?);
    Ok(())
}
