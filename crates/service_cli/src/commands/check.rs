//! Check command implementation
//!
//! Reports the resolved configuration and whether the profile cache loads.

use tracing::{info, warn};

use crate::config::BlendConfig;
use crate::{open_pipeline, Result};

/// Run the check command
pub fn run(config: &BlendConfig) -> Result<()> {
    info!("Checking configuration...");
    println!("blend-profile v{}", env!("CARGO_PKG_VERSION"));
    println!("  data_file:  {}", config.data_file.display());
    println!("  output_dir: {}", config.output_dir.display());
    println!("  log_level:  {}", config.log_level);
    println!("  format:     {}", config.format);
    println!("  sweep_step: {}", config.sweep_step);

    let pipeline = open_pipeline(config)?;
    let store = pipeline.store();
    println!(
        "Profile cache OK: {} liquids, {} rows dropped",
        store.liquid_count(),
        store.dropped_rows()
    );

    if !config.output_dir.is_dir() {
        warn!(
            output_dir = %config.output_dir.display(),
            "Output directory does not exist; it will be created by batch commands"
        );
    }

    info!("Check complete");
    Ok(())
}
