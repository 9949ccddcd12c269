//! Integration tests for the CSV profile cache.

use approx::assert_relative_eq;
use blend_core::distillation::{BlendPipeline, ProfileStore};
use blend_core::types::BlendError;
use infra_store::{write_blend_csv, CsvProfileStore, StoreError};
use std::io::Write;
use tempfile::NamedTempFile;

const CACHE: &str = "\
,Mass % Recovered,Temperature( oC ),Temperature( oF ),Code
0,IBP,50.0,122.0,LIN
1,50,150.0,302.0,LIN
2,100,250.0,482.0,LIN
3,IBP,60.0,140.0,LIX
4,50,160.0,320.0,LIX
5,100,260.0,500.0,LIX
6,IBP,35.0,95.0,SYN
7,5,-,-,SYN
8,IBP,-,-,GHOST
";

fn write_cache(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_open_cache_file() {
    let file = write_cache(CACHE);
    let store = CsvProfileStore::open(file.path()).unwrap();

    assert_eq!(store.source(), Some(file.path()));
    assert_eq!(store.liquid_ids(), vec!["LIN", "LIX", "SYN"]);
    assert_eq!(store.dropped_rows(), 2);

    let obs = store.observations("LIN").unwrap();
    assert_eq!(obs.len(), 3);
    assert_eq!(obs[0].recovery, 0);
    assert_eq!(obs[2].recovery, 100);
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = CsvProfileStore::open(dir.path().join("absent.csv"));
    assert!(matches!(result, Err(StoreError::Io(_))));
}

#[test]
fn test_blend_from_cache_file() {
    let file = write_cache(CACHE);
    let pipeline = BlendPipeline::new(CsvProfileStore::open(file.path()).unwrap());

    let result = pipeline.compute_blend("LIN", "LIX", 0.5, 0.5).unwrap();
    assert_relative_eq!(result.temperature_at(50).unwrap(), 155.0, epsilon = 1e-6);
    assert_relative_eq!(result.recovery_max(), 100.0);
}

#[test]
fn test_cache_errors_surface_through_pipeline() {
    let file = write_cache(CACHE);
    let pipeline = BlendPipeline::new(CsvProfileStore::open(file.path()).unwrap());

    assert!(matches!(
        pipeline.compute_blend("LIN", "SYN", 0.5, 0.5),
        Err(BlendError::InsufficientData { got: 1, .. })
    ));
    assert_eq!(
        pipeline.compute_blend("LIN", "GHOST", 0.5, 0.5).unwrap_err(),
        BlendError::UnknownLiquid("GHOST".to_string())
    );
}

#[test]
fn test_export_round_trip_through_file() {
    let file = write_cache(CACHE);
    let pipeline = BlendPipeline::new(CsvProfileStore::open(file.path()).unwrap());
    let result = pipeline.compute_blend("LIN", "LIX", 0.3, 0.7).unwrap();

    let out = NamedTempFile::new().unwrap();
    write_blend_csv(&result, out.reopen().unwrap()).unwrap();

    let text = std::fs::read_to_string(out.path()).unwrap();
    let mut rows = csv::Reader::from_reader(text.as_bytes());
    let parsed: Vec<(u32, Option<f64>)> = rows.deserialize().map(|r| r.unwrap()).collect();

    assert_eq!(parsed.len(), 12);
    for (point, (recovery, temperature)) in result.iter().zip(parsed) {
        assert_eq!(point.recovery, recovery);
        assert_relative_eq!(point.temperature.unwrap(), temperature.unwrap(), epsilon = 1e-9);
    }
}
