//! Blend command implementation
//!
//! Computes the blended profile of two liquids and prints it.

use blend_core::distillation::VolumeShares;
use tracing::info;

use crate::config::BlendConfig;
use crate::{open_pipeline, output, CliError, Result};

/// How the user specified the blend proportions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShareArgs {
    /// Share of the first liquid
    pub share_a: Option<f64>,
    /// Share of the second liquid
    pub share_b: Option<f64>,
    /// Raw volume of the first liquid
    pub volume_a: Option<f64>,
    /// Raw volume of the second liquid
    pub volume_b: Option<f64>,
}

/// Turn share or volume arguments into validated shares.
///
/// Volumes take precedence and must be given together. A single share implies
/// the other as its complement. With nothing given the blend is 50/50.
pub fn resolve_shares(args: ShareArgs) -> Result<VolumeShares> {
    let shares = match args {
        ShareArgs {
            volume_a: Some(va),
            volume_b: Some(vb),
            ..
        } => VolumeShares::from_volumes(va, vb)?,
        ShareArgs {
            volume_a: Some(_),
            ..
        }
        | ShareArgs {
            volume_b: Some(_),
            ..
        } => {
            return Err(CliError::InvalidArgument(
                "--volume-a and --volume-b must be given together".to_string(),
            ))
        }
        ShareArgs {
            share_a: Some(a),
            share_b: Some(b),
            ..
        } => VolumeShares::new(a, b)?,
        ShareArgs {
            share_a: Some(a), ..
        } => VolumeShares::new(a, 1.0 - a)?,
        ShareArgs {
            share_b: Some(b), ..
        } => VolumeShares::new(1.0 - b, b)?,
        _ => VolumeShares::new(0.5, 0.5)?,
    };
    Ok(shares)
}

/// Run the blend command
pub fn run(config: &BlendConfig, code_a: &str, code_b: &str, args: ShareArgs) -> Result<()> {
    let shares = resolve_shares(args)?;
    info!(
        code_a,
        code_b,
        share_a = shares.a(),
        share_b = shares.b(),
        "Computing blend"
    );

    let pipeline = open_pipeline(config)?;
    let result = pipeline.compute_with_shares(code_a, code_b, shares)?;

    print!("{}", output::render_blend(&result, config.format)?);
    Ok(())
}
