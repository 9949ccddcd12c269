//! blend-profile - Blended Distillation Profiles from the Command Line
//!
//! Estimates the distillation profile of a two-liquid blend from the cached
//! profiles of its components.
//!
//! # Commands
//!
//! - `blend-profile blend <A> <B> --share-a 0.3` - Blend two liquids
//! - `blend-profile codes` - List cached liquid codes
//! - `blend-profile batch pairings` - Blend every pair at 50/50
//! - `blend-profile batch sweep [A B]` - Sweep the share of A against B
//! - `blend-profile check` - Show configuration and validate the cache

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use service_cli::commands;
use service_cli::commands::blend::ShareArgs;
use service_cli::config::{build_config, CliArgs};
use service_cli::Result;

/// Blended distillation profile CLI
#[derive(Parser)]
#[command(name = "blend-profile")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Profile cache CSV
    #[arg(long, global = true, value_name = "FILE")]
    data_file: Option<PathBuf>,

    /// Directory for batch output files
    #[arg(long, global = true, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Output format (table, csv, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Blend two liquids and report temperatures at standard recoveries
    Blend {
        /// Code of the first liquid
        code_a: String,

        /// Code of the second liquid
        code_b: String,

        /// Volume share of the first liquid, in (0, 1)
        #[arg(long)]
        share_a: Option<f64>,

        /// Volume share of the second liquid, in (0, 1)
        #[arg(long)]
        share_b: Option<f64>,

        /// Raw volume of the first liquid
        #[arg(long, requires = "volume_b")]
        volume_a: Option<f64>,

        /// Raw volume of the second liquid
        #[arg(long, requires = "volume_a")]
        volume_b: Option<f64>,
    },

    /// List liquid codes in the profile cache
    Codes,

    /// Generate many blends at once
    Batch {
        #[command(subcommand)]
        kind: BatchKind,

        /// Also print every row to stdout
        #[arg(long, global = true)]
        print: bool,
    },

    /// Check configuration and the profile cache
    Check,
}

#[derive(Subcommand)]
enum BatchKind {
    /// Every pair of cached liquids at 50/50
    Pairings,

    /// Share sweep of one liquid against another
    Sweep {
        /// Code of the first liquid (defaults to the first cached code)
        #[arg(requires = "code_b")]
        code_a: Option<String>,

        /// Code of the second liquid (defaults to the second cached code)
        code_b: Option<String>,

        /// Percent step between shares (1..=50)
        #[arg(short, long)]
        step: Option<u32>,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let sweep_step = match &cli.command {
        Commands::Batch {
            kind: BatchKind::Sweep { step, .. },
            ..
        } => *step,
        _ => None,
    };
    let config = build_config(&CliArgs {
        config_file: cli.config,
        data_file: cli.data_file,
        output_dir: cli.output_dir,
        format: cli.format,
        sweep_step,
        verbose: cli.verbose,
    })?;

    init_tracing(&config.log_level);
    info!("blend-profile v{}", env!("CARGO_PKG_VERSION"));
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Blend {
            code_a,
            code_b,
            share_a,
            share_b,
            volume_a,
            volume_b,
        } => commands::blend::run(
            &config,
            &code_a,
            &code_b,
            ShareArgs {
                share_a,
                share_b,
                volume_a,
                volume_b,
            },
        ),
        Commands::Codes => commands::codes::run(&config),
        Commands::Batch { kind, print } => match kind {
            BatchKind::Pairings => commands::batch::run_pairings(&config, print),
            BatchKind::Sweep { code_a, code_b, .. } => commands::batch::run_sweep(
                &config,
                code_a.as_deref(),
                code_b.as_deref(),
                print,
            ),
        },
        Commands::Check => commands::check::run(&config),
    }
}
