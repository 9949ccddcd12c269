//! Batch generation over a CSV profile cache.

use blend_core::distillation::{BlendPipeline, ProfileStore};
use infra_store::{write_batch_file, CsvProfileStore};
use service_cli::batch::{all_pairings, run_batch, share_sweep};
use std::io::Write;
use tempfile::NamedTempFile;

const CACHE: &str = "\
Mass % Recovered,Temperature( oC ),Code
IBP,50.0,LIN
50,150.0,LIN
100,250.0,LIN
IBP,60.0,LIX
50,160.0,LIX
100,260.0,LIX
IBP,40.0,MID
30,120.0,MID
90,300.0,MID
IBP,35.0,SYN
";

fn pipeline() -> BlendPipeline<CsvProfileStore> {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CACHE.as_bytes()).unwrap();
    file.flush().unwrap();
    BlendPipeline::new(CsvProfileStore::open(file.path()).unwrap())
}

#[test]
fn test_pairings_over_cache() {
    let pipeline = pipeline();
    let codes = pipeline.store().liquid_ids();
    assert_eq!(codes, vec!["LIN", "LIX", "MID", "SYN"]);

    let jobs = all_pairings(&codes).unwrap();
    assert_eq!(jobs.len(), 6);

    let outcome = run_batch(&pipeline, &jobs);
    // every pair involving SYN fails
    assert_eq!(outcome.failed, 3);
    assert_eq!(outcome.succeeded, 3);
    assert_eq!(outcome.records.len(), 36);

    let pairs: Vec<(&str, &str)> = outcome
        .records
        .chunks(12)
        .map(|c| (c[0].code1.as_str(), c[0].code2.as_str()))
        .collect();
    assert_eq!(pairs, vec![("LIN", "LIX"), ("LIN", "MID"), ("LIX", "MID")]);
}

#[test]
fn test_sweep_written_to_file() {
    let pipeline = pipeline();
    let jobs = share_sweep("LIN", "MID", 20).unwrap();
    let outcome = run_batch(&pipeline, &jobs);
    assert_eq!(outcome.succeeded, 4);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sweep.csv");
    write_batch_file(&outcome.records, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("recovery,temperature,code1,code2,share1,share2")
    );
    assert_eq!(lines.count(), 4 * 12);
}
