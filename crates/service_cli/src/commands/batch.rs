//! Batch command implementation
//!
//! Generates many blends at once and writes them to the output directory.

use blend_core::distillation::{BlendPipeline, ProfileStore};
use infra_store::write_batch_file;
use std::path::PathBuf;
use tracing::info;

use crate::batch::{all_pairings, run_batch, share_sweep, BatchOutcome, BlendJob};
use crate::config::BlendConfig;
use crate::{open_pipeline, output, CliError, Result};

/// File written by the pairings batch.
pub const PAIRINGS_FILE: &str = "blended-profiles-all-pairings.csv";
/// File written by the share sweep batch.
pub const SWEEP_FILE: &str = "blended-profiles-all-percentages.csv";

/// Run every pairing of the cached liquids at 50/50.
pub fn run_pairings(config: &BlendConfig, print: bool) -> Result<()> {
    let pipeline = open_pipeline(config)?;
    let codes = pipeline.store().liquid_ids();
    let jobs = all_pairings(&codes)?;
    info!(liquids = codes.len(), jobs = jobs.len(), "Running all pairings");

    execute(config, &pipeline, &jobs, PAIRINGS_FILE, print)
}

/// Sweep the share of one liquid against another.
///
/// Without explicit codes the first two cached liquids are used.
pub fn run_sweep(
    config: &BlendConfig,
    code_a: Option<&str>,
    code_b: Option<&str>,
    print: bool,
) -> Result<()> {
    let pipeline = open_pipeline(config)?;

    let (code_a, code_b) = match (code_a, code_b) {
        (Some(a), Some(b)) => (a.to_string(), b.to_string()),
        (None, None) => {
            let codes = pipeline.store().liquid_ids();
            match codes.as_slice() {
                [a, b, ..] => (a.clone(), b.clone()),
                _ => return Err(CliError::NotEnoughLiquids { found: codes.len() }),
            }
        }
        _ => {
            return Err(CliError::InvalidArgument(
                "give both codes or neither".to_string(),
            ))
        }
    };

    let jobs = share_sweep(&code_a, &code_b, config.sweep_step)?;
    info!(
        code_a = %code_a,
        code_b = %code_b,
        step = config.sweep_step,
        jobs = jobs.len(),
        "Running share sweep"
    );

    execute(config, &pipeline, &jobs, SWEEP_FILE, print)
}

fn execute<S: ProfileStore + Sync>(
    config: &BlendConfig,
    pipeline: &BlendPipeline<S>,
    jobs: &[BlendJob],
    file_name: &str,
    print: bool,
) -> Result<()> {
    let BatchOutcome {
        records,
        succeeded,
        failed,
    } = run_batch(pipeline, jobs);

    std::fs::create_dir_all(&config.output_dir)?;
    let path: PathBuf = config.output_dir.join(file_name);
    write_batch_file(&records, &path)?;

    info!(
        path = %path.display(),
        rows = records.len(),
        succeeded,
        failed,
        "Batch written"
    );

    if print {
        print!("{}", output::render_batch(&records, config.format)?);
    }
    println!(
        "{} blends computed, {} skipped, {} rows written to {}",
        succeeded,
        failed,
        records.len(),
        path.display()
    );
    Ok(())
}
