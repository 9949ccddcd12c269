//! Batch blend generation.
//!
//! Builds lists of blend jobs and runs them in parallel with Rayon. Results
//! keep the order of the job list regardless of scheduling.

use crate::config::SWEEP_STEP_RANGE;
use crate::{CliError, Result};
use blend_core::distillation::{BlendPipeline, ProfileStore, VolumeShares};
use infra_store::BatchRecord;
use rayon::prelude::*;
use tracing::{debug, warn};

/// One blend to compute.
#[derive(Debug, Clone, PartialEq)]
pub struct BlendJob {
    /// First liquid code
    pub code_a: String,
    /// Second liquid code
    pub code_b: String,
    /// Volume shares of the two liquids
    pub shares: VolumeShares,
}

impl BlendJob {
    /// Create a job.
    pub fn new(code_a: impl Into<String>, code_b: impl Into<String>, shares: VolumeShares) -> Self {
        Self {
            code_a: code_a.into(),
            code_b: code_b.into(),
            shares,
        }
    }
}

/// Every unordered pair of `codes` at equal shares.
///
/// Pairs are listed in the order of `codes`: `(c0, c1), (c0, c2), ..., (c1, c2), ...`.
///
/// # Errors
///
/// Returns [`CliError::NotEnoughLiquids`] if fewer than two codes are given.
pub fn all_pairings(codes: &[String]) -> Result<Vec<BlendJob>> {
    if codes.len() < 2 {
        return Err(CliError::NotEnoughLiquids { found: codes.len() });
    }
    let half = VolumeShares::new(0.5, 0.5)?;

    let mut jobs = Vec::with_capacity(codes.len() * (codes.len() - 1) / 2);
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            jobs.push(BlendJob::new(a.as_str(), b.as_str(), half));
        }
    }
    Ok(jobs)
}

/// Blends of `code_a` and `code_b` with `share_a` stepping through
/// `step%, 2*step%, ...` below 100%.
///
/// # Errors
///
/// Returns [`CliError::InvalidArgument`] if `step` is outside 1..=50.
pub fn share_sweep(code_a: &str, code_b: &str, step: u32) -> Result<Vec<BlendJob>> {
    if !SWEEP_STEP_RANGE.contains(&step) {
        return Err(CliError::InvalidArgument(format!(
            "sweep step {} is outside {}..={}",
            step,
            SWEEP_STEP_RANGE.start(),
            SWEEP_STEP_RANGE.end()
        )));
    }

    (step..100)
        .step_by(step as usize)
        .map(|k| -> Result<BlendJob> {
            let share_a = f64::from(k) / 100.0;
            let shares = VolumeShares::new(share_a, 1.0 - share_a)?;
            Ok(BlendJob::new(code_a, code_b, shares))
        })
        .collect()
}

/// Records produced by a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Result rows of every successful job, in job order
    pub records: Vec<BatchRecord>,
    /// Jobs that succeeded
    pub succeeded: usize,
    /// Jobs that failed and were skipped
    pub failed: usize,
}

/// Run `jobs` in parallel against `pipeline`.
///
/// A failing job is logged and skipped; it never aborts the batch.
pub fn run_batch<S>(pipeline: &BlendPipeline<S>, jobs: &[BlendJob]) -> BatchOutcome
where
    S: ProfileStore + Sync,
{
    let results: Vec<_> = jobs
        .par_iter()
        .map(|job| {
            pipeline
                .compute_with_shares(&job.code_a, &job.code_b, job.shares)
                .map(|result| BatchRecord::from_result(&job.code_a, &job.code_b, job.shares, &result))
        })
        .collect();

    let mut outcome = BatchOutcome::default();
    for (job, result) in jobs.iter().zip(results) {
        match result {
            Ok(records) => {
                debug!(code_a = %job.code_a, code_b = %job.code_b, share_a = job.shares.a(), "Blend computed");
                outcome.records.extend(records);
                outcome.succeeded += 1;
            }
            Err(e) => {
                warn!(code_a = %job.code_a, code_b = %job.code_b, error = %e, "Skipping blend");
                outcome.failed += 1;
            }
        }
    }
    outcome
}
