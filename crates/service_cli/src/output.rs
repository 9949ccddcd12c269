//! Rendering of results for stdout.

use crate::config::OutputFormat;
use crate::Result;
use blend_core::distillation::BlendResult;
use infra_store::{write_batch_csv, write_blend_csv, write_codes_csv, BatchRecord};

/// Placeholder for an undefined temperature in tables.
const UNDEFINED: &str = "-";

fn temperature_cell(temperature: Option<f64>) -> String {
    temperature.map_or_else(|| UNDEFINED.to_string(), |t| format!("{:.1}", t))
}

fn csv_string(write: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> Result<String> {
    let mut buffer = Vec::new();
    write(&mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Render a single blend result.
pub fn render_blend(result: &BlendResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => csv_string(|buf| Ok(write_blend_csv(result, buf)?)),
        OutputFormat::Table => {
            let mut out = String::new();
            out.push_str("┌────────────┬──────────────────┐\n");
            out.push_str("│ Recovery % │ Temperature (°C) │\n");
            out.push_str("├────────────┼──────────────────┤\n");
            for point in result.iter() {
                out.push_str(&format!(
                    "│ {:>10} │ {:>16} │\n",
                    point.recovery,
                    temperature_cell(point.temperature)
                ));
            }
            out.push_str("└────────────┴──────────────────┘\n");
            out.push_str(&format!("Achievable recovery: {:.1}%\n", result.recovery_max()));
            Ok(out)
        }
    }
}

/// Render batch rows.
pub fn render_batch(records: &[BatchRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Csv => csv_string(|buf| Ok(write_batch_csv(records, buf)?)),
        OutputFormat::Table => {
            let mut out = String::new();
            out.push_str("┌──────────┬────────────┬──────────┬──────────┬─────────┬─────────┐\n");
            out.push_str("│ Recovery │ Temp (°C)  │ Code 1   │ Code 2   │ Share 1 │ Share 2 │\n");
            out.push_str("├──────────┼────────────┼──────────┼──────────┼─────────┼─────────┤\n");
            for r in records {
                out.push_str(&format!(
                    "│ {:>8} │ {:>10} │ {:<8} │ {:<8} │ {:>7.2} │ {:>7.2} │\n",
                    r.recovery,
                    temperature_cell(r.temperature),
                    r.code1,
                    r.code2,
                    r.share1,
                    r.share2
                ));
            }
            out.push_str("└──────────┴────────────┴──────────┴──────────┴─────────┴─────────┘\n");
            Ok(out)
        }
    }
}

/// Render a list of liquid codes.
pub fn render_codes(codes: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(codes)?),
        OutputFormat::Csv => csv_string(|buf| Ok(write_codes_csv(codes, buf)?)),
        OutputFormat::Table => {
            let mut out = String::new();
            for code in codes {
                out.push_str(code);
                out.push('\n');
            }
            out.push_str(&format!("{} liquids\n", codes.len()));
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blend_core::distillation::{BlendPipeline, InMemoryProfileStore, VolumeShares};

    fn capped_result() -> BlendResult {
        let store = InMemoryProfileStore::new()
            .with_profile("A", &[(0, 50.0), (50, 150.0), (90, 230.0)])
            .with_profile("B", &[(0, 60.0), (50, 160.0), (90, 240.0)]);
        BlendPipeline::new(store)
            .compute_blend("A", "B", 0.5, 0.5)
            .unwrap()
    }

    #[test]
    fn test_table_marks_undefined() {
        let text = render_blend(&capped_result(), OutputFormat::Table).unwrap();
        let row_99 = text.lines().find(|l| l.contains(" 99 ")).unwrap();
        assert!(row_99.contains(" - "));
        assert!(text.contains("Achievable recovery: 90.0%"));
    }

    #[test]
    fn test_json_uses_null_for_undefined() {
        let text = render_blend(&capped_result(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let points = value["points"].as_array().unwrap();
        assert_eq!(points.len(), 12);
        assert!(points[11]["temperature"].is_null());
        assert_eq!(points[11]["recovery"], 99);
        assert!(points[0]["temperature"].is_f64());
    }

    #[test]
    fn test_csv_blend_header() {
        let text = render_blend(&capped_result(), OutputFormat::Csv).unwrap();
        assert!(text.starts_with("recovery,temperature\n"));
    }

    #[test]
    fn test_batch_table_rows() {
        let shares = VolumeShares::new(0.5, 0.5).unwrap();
        let records = BatchRecord::from_result("A", "B", shares, &capped_result());
        let text = render_batch(&records, OutputFormat::Table).unwrap();
        // header block plus 12 rows plus bottom border
        assert_eq!(text.lines().count(), 16);
        assert!(text.contains("0.50"));
    }

    #[test]
    fn test_codes_rendering() {
        let codes = vec!["AHS".to_string(), "WCS".to_string()];
        assert_eq!(render_codes(&codes, OutputFormat::Csv).unwrap(), "code\nAHS\nWCS\n");
        let odd = vec!["A,B".to_string()];
        assert_eq!(render_codes(&odd, OutputFormat::Csv).unwrap(), "code\n\"A,B\"\n");
        assert!(render_codes(&codes, OutputFormat::Table)
            .unwrap()
            .ends_with("2 liquids\n"));
        let json: Vec<String> =
            serde_json::from_str(&render_codes(&codes, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json, codes);
    }
}
