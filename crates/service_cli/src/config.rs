//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and
//! command line arguments.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "blend.toml";

/// Allowed range for the share sweep step, in percent.
pub const SWEEP_STEP_RANGE: std::ops::RangeInclusive<u32> = 1..=50;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or parsed
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment variable holds an unusable value
    #[error("Environment variable error: {0}")]
    EnvError(String),

    /// Unknown output format name
    #[error("Invalid output format: {0}. Must be one of: table, csv, json")]
    InvalidFormat(String),

    /// One or more settings are out of range
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Configuration for the `blend-profile` binary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlendConfig {
    /// Path to the profile cache CSV
    pub data_file: PathBuf,
    /// Directory batch exports are written to
    pub output_dir: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Output format for results
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Percent step between shares in a sweep
    pub sweep_step: u32,
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/oil-profiles.csv"),
            output_dir: PathBuf::from("data"),
            log_level: "info".to_string(),
            format: OutputFormat::Table,
            sweep_step: 1,
        }
    }
}

impl BlendConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply `BLEND_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(data_file) = lookup("BLEND_DATA_FILE") {
            self.data_file = PathBuf::from(data_file);
        }

        if let Some(output_dir) = lookup("BLEND_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }

        if let Some(log_level) = lookup("BLEND_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(format) = lookup("BLEND_OUTPUT_FORMAT") {
            self.format = OutputFormat::from_str(&format)?;
        }

        if let Some(step) = lookup("BLEND_SWEEP_STEP") {
            self.sweep_step = step.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("BLEND_SWEEP_STEP '{}' is not an integer", step))
            })?;
        }

        Ok(self)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(data_file) = &cli.data_file {
            self.data_file = data_file.clone();
        }
        if let Some(output_dir) = &cli.output_dir {
            self.output_dir = output_dir.clone();
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        if let Some(step) = cli.sweep_step {
            self.sweep_step = step;
        }
        if cli.verbose {
            self.log_level = "debug".to_string();
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.data_file.as_os_str().is_empty() {
            errors.push("data_file cannot be empty".to_string());
        }

        if self.output_dir.as_os_str().is_empty() {
            errors.push("output_dir cannot be empty".to_string());
        }

        if !SWEEP_STEP_RANGE.contains(&self.sweep_step) {
            errors.push(format!(
                "sweep_step {} is outside {}..={}",
                self.sweep_step,
                SWEEP_STEP_RANGE.start(),
                SWEEP_STEP_RANGE.end()
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Settings taken from the command line
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Profile cache override
    pub data_file: Option<PathBuf>,
    /// Output directory override
    pub output_dir: Option<PathBuf>,
    /// Output format override
    pub format: Option<String>,
    /// Sweep step override
    pub sweep_step: Option<u32>,
    /// Raise the log level to debug
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (`--config`, or `blend.toml` if present)
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<BlendConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<BlendConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match &cli.config_file {
        Some(path) => BlendConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                BlendConfig::from_file(default_path)?
            } else {
                BlendConfig::default()
            }
        }
    };

    let mut config = config.with_overrides_from(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn no_env() -> impl Fn(&str) -> Option<String> {
        |_| None
    }

    // ========================================
    // Defaults and Parsing
    // ========================================

    #[test]
    fn test_default_config() {
        let config = BlendConfig::default();
        assert_eq!(config.data_file, PathBuf::from("data/oil-profiles.csv"));
        assert_eq!(config.output_dir, PathBuf::from("data"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.sweep_step, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("CSV").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("Json").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("xml").is_err());
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }

    #[test]
    fn test_toml_partial_uses_defaults() {
        let config: BlendConfig = toml::from_str("format = \"json\"\nsweep_step = 5\n").unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.sweep_step, 5);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_toml_rejects_unknown_format() {
        let result: Result<BlendConfig, _> = toml::from_str("format = \"xml\"\n");
        assert!(result.is_err());
    }

    // ========================================
    // Overrides
    // ========================================

    #[test]
    fn test_env_override() {
        let config = BlendConfig::default()
            .with_overrides_from(env(&[
                ("BLEND_DATA_FILE", "/tmp/cache.csv"),
                ("BLEND_OUTPUT_FORMAT", "csv"),
                ("BLEND_SWEEP_STEP", "10"),
            ]))
            .unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/cache.csv"));
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.sweep_step, 10);
        assert_eq!(config.output_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_env_override_bad_step() {
        let result = BlendConfig::default().with_overrides_from(env(&[("BLEND_SWEEP_STEP", "ten")]));
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }

    #[test]
    fn test_cli_beats_env() {
        let cli = CliArgs {
            format: Some("json".to_string()),
            verbose: true,
            ..Default::default()
        };
        let config = build_config_with(
            &cli,
            env(&[("BLEND_OUTPUT_FORMAT", "csv"), ("BLEND_LOG_LEVEL", "warn")]),
        )
        .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_build_config_missing_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/blend.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, no_env()),
            Err(ConfigError::FileError(_))
        ));
    }

    // ========================================
    // Validation
    // ========================================

    #[test]
    fn test_validate_invalid_log_level() {
        let config = BlendConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("log_level")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_sweep_step_bounds() {
        for step in [0, 51, 100] {
            let config = BlendConfig {
                sweep_step: step,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "step {} should be rejected", step);
        }
        for step in [1, 25, 50] {
            let config = BlendConfig {
                sweep_step: step,
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "step {} should be accepted", step);
        }
    }

    #[test]
    fn test_validate_multiple_errors() {
        let config = BlendConfig {
            data_file: PathBuf::new(),
            log_level: "loud".to_string(),
            sweep_step: 0,
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = format!("{}", error);
        assert!(display.contains("Error 1"));
        assert!(display.contains("Error 2"));
    }
}
