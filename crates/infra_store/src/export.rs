//! CSV export of blend results.

use crate::StoreError;
use blend_core::distillation::{BlendResult, VolumeShares};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// One row of a batch export: a blend point tagged with its inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRecord {
    /// Recovery percentile
    pub recovery: u32,
    /// Temperature in °C, empty when undefined
    pub temperature: Option<f64>,
    /// First liquid code
    pub code1: String,
    /// Second liquid code
    pub code2: String,
    /// Volume share of the first liquid
    pub share1: f64,
    /// Volume share of the second liquid
    pub share2: f64,
}

impl BatchRecord {
    /// Expand a blend result into one record per reported percentile.
    pub fn from_result(
        code1: &str,
        code2: &str,
        shares: VolumeShares,
        result: &BlendResult,
    ) -> Vec<Self> {
        result
            .iter()
            .map(|point| Self {
                recovery: point.recovery,
                temperature: point.temperature,
                code1: code1.to_string(),
                code2: code2.to_string(),
                share1: shares.a(),
                share2: shares.b(),
            })
            .collect()
    }
}

/// Write `result` as CSV with columns `recovery,temperature`.
///
/// Undefined temperatures are written as empty fields.
///
/// # Example
///
/// ```
/// use blend_core::distillation::{BlendPipeline, InMemoryProfileStore};
/// use infra_store::write_blend_csv;
///
/// let store = InMemoryProfileStore::new()
///     .with_profile("A", &[(0, 50.0), (50, 150.0), (90, 230.0)])
///     .with_profile("B", &[(0, 60.0), (50, 160.0), (90, 240.0)]);
/// let result = BlendPipeline::new(store).compute_blend("A", "B", 0.5, 0.5).unwrap();
///
/// let mut out = Vec::new();
/// write_blend_csv(&result, &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("recovery,temperature\n"));
/// assert!(text.trim_end().ends_with("99,"));
/// ```
pub fn write_blend_csv<W: Write>(result: &BlendResult, writer: W) -> Result<(), StoreError> {
    let mut writer = csv::Writer::from_writer(writer);
    for point in result.iter() {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write batch records as CSV with columns
/// `recovery,temperature,code1,code2,share1,share2`.
pub fn write_batch_csv<W: Write>(records: &[BatchRecord], writer: W) -> Result<(), StoreError> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write liquid codes as single-column CSV with header `code`.
pub fn write_codes_csv<W: Write>(codes: &[String], writer: W) -> Result<(), StoreError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["code"])?;
    for code in codes {
        writer.write_record([code])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write batch records to a file at `path`, creating or truncating it.
pub fn write_batch_file(records: &[BatchRecord], path: impl AsRef<Path>) -> Result<(), StoreError> {
    let file = std::fs::File::create(path)?;
    write_batch_csv(records, std::io::BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blend_core::distillation::{BlendPipeline, InMemoryProfileStore};

    fn result() -> BlendResult {
        let store = InMemoryProfileStore::new()
            .with_profile("A", &[(0, 50.0), (50, 150.0), (100, 250.0)])
            .with_profile("B", &[(0, 60.0), (50, 160.0), (90, 240.0)]);
        BlendPipeline::new(store)
            .compute_blend("A", "B", 0.5, 0.5)
            .unwrap()
    }

    #[test]
    fn test_blend_csv_layout() {
        let mut out = Vec::new();
        write_blend_csv(&result(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "recovery,temperature");
        assert_eq!(lines.len(), 13);
        assert!(lines[1].starts_with("5,"));
        // cap is 95: 99 is undefined
        assert_eq!(lines[12], "99,");
        assert!(lines[11].starts_with("95,") && lines[11].len() > 3);
    }

    #[test]
    fn test_batch_records_from_result() {
        let shares = VolumeShares::new(0.5, 0.5).unwrap();
        let records = BatchRecord::from_result("A", "B", shares, &result());
        assert_eq!(records.len(), 12);
        assert!(records.iter().all(|r| r.code1 == "A" && r.code2 == "B"));
        assert_eq!(records[0].recovery, 5);
    }

    #[test]
    fn test_batch_csv_header() {
        let shares = VolumeShares::new(0.5, 0.5).unwrap();
        let records = BatchRecord::from_result("A", "B", shares, &result());
        let mut out = Vec::new();
        write_batch_csv(&records, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("recovery,temperature,code1,code2,share1,share2\n"));
        assert!(text.contains(",A,B,0.5,0.5"));
    }

    #[test]
    fn test_codes_csv_quotes_special_characters() {
        let codes = vec!["AHS".to_string(), "W,CS".to_string(), "Q\"X".to_string()];
        let mut out = Vec::new();
        write_codes_csv(&codes, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "code\nAHS\n\"W,CS\"\n\"Q\"\"X\"\n");

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let parsed: Vec<String> = reader
            .records()
            .map(|r| r.unwrap()[0].to_string())
            .collect();
        assert_eq!(parsed, codes);
    }
}
