//! Integration tests for configuration precedence.

use service_cli::config::{build_config_with, BlendConfig, CliArgs, ConfigError, OutputFormat};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn test_file_then_env_then_cli() {
    let file = config_file(
        r#"
data_file = "cache/profiles.csv"
output_dir = "out"
format = "csv"
sweep_step = 5
"#,
    );

    let cli = CliArgs {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let config = build_config_with(&cli, lookup(&[])).unwrap();
    assert_eq!(config.data_file, PathBuf::from("cache/profiles.csv"));
    assert_eq!(config.format, OutputFormat::Csv);
    assert_eq!(config.sweep_step, 5);

    let config = build_config_with(&cli, lookup(&[("BLEND_SWEEP_STEP", "20")])).unwrap();
    assert_eq!(config.sweep_step, 20);
    assert_eq!(config.output_dir, PathBuf::from("out"));

    let cli = CliArgs {
        sweep_step: Some(2),
        ..cli
    };
    let config = build_config_with(&cli, lookup(&[("BLEND_SWEEP_STEP", "20")])).unwrap();
    assert_eq!(config.sweep_step, 2);
}

#[test]
fn test_invalid_file_value_is_reported() {
    let file = config_file("sweep_step = 75\nlog_level = \"chatty\"\n");
    let cli = CliArgs {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    match build_config_with(&cli, lookup(&[])) {
        Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("Expected validation errors, got {:?}", other),
    }
}

#[test]
fn test_malformed_toml() {
    let file = config_file("sweep_step = \n");
    assert!(matches!(
        BlendConfig::from_file(file.path()),
        Err(ConfigError::FileError(_))
    ));
}
