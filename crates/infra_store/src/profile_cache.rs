//! CSV-backed profile cache.
//!
//! Reads the distillation tables scraped into a single CSV file, one row per
//! (liquid, recovery) point. Only three columns are used; any others are
//! ignored.

use crate::StoreError;
use blend_core::distillation::{InMemoryProfileStore, ProfileStore};
use blend_core::types::{
    BlendError, Observation, INITIAL_BOILING_POINT, MAX_RECOVERY_PERCENT,
};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Column holding the recovery label (`IBP`, `5`, `10`, ...).
pub const RECOVERY_COLUMN: &str = "Mass % Recovered";
/// Column holding the temperature in °C, `-` when not measured.
pub const TEMPERATURE_COLUMN: &str = "Temperature( oC )";
/// Column holding the liquid code.
pub const CODE_COLUMN: &str = "Code";

/// Label used for the initial boiling point row.
const IBP_LABEL: &str = "IBP";
/// Placeholder for a missing temperature.
const MISSING_TEMPERATURE: &str = "-";

#[derive(Debug, Deserialize)]
struct RawProfileRow {
    #[serde(rename = "Mass % Recovered")]
    recovery: String,
    #[serde(rename = "Temperature( oC )")]
    temperature: String,
    #[serde(rename = "Code")]
    code: String,
}

/// Turn one raw row into an observation.
///
/// Returns `Ok(None)` for rows without a temperature.
fn clean_row(row: &RawProfileRow) -> Result<Option<Observation>, String> {
    let code = row.code.trim();
    if code.is_empty() {
        return Err("empty liquid code".to_string());
    }

    let temperature = row.temperature.trim();
    if temperature.is_empty() || temperature == MISSING_TEMPERATURE {
        return Ok(None);
    }
    let temperature: f64 = temperature
        .parse()
        .ok()
        .filter(|t: &f64| t.is_finite())
        .ok_or_else(|| format!("bad temperature '{}' for {}", row.temperature, code))?;

    let recovery = parse_recovery(&row.recovery)
        .ok_or_else(|| format!("bad recovery '{}' for {}", row.recovery, code))?;

    Ok(Some(Observation::new(code, recovery, temperature)))
}

fn parse_recovery(label: &str) -> Option<u32> {
    let label = label.trim();
    if label.eq_ignore_ascii_case(IBP_LABEL) {
        return Some(INITIAL_BOILING_POINT);
    }
    let value = match label.parse::<u32>() {
        Ok(v) => v,
        Err(_) => {
            let v: f64 = label.parse().ok()?;
            if v.fract() != 0.0 || v < 0.0 {
                return None;
            }
            v as u32
        }
    };
    (value <= MAX_RECOVERY_PERCENT).then_some(value)
}

/// Profile store loaded from the local CSV cache.
///
/// The whole file is read and cleaned when the store is opened, so lookups
/// never touch the filesystem. Cleaning maps the `IBP` label to recovery 0
/// and drops rows whose temperature is `-` or blank. A code whose rows were
/// all dropped is treated as unknown.
///
/// # Example
///
/// ```
/// use blend_core::distillation::ProfileStore;
/// use infra_store::CsvProfileStore;
///
/// let csv = "\
/// Mass % Recovered,Temperature( oC ),Code
/// IBP,36.1,AHS
/// 5,-,AHS
/// 10,98.4,AHS
/// ";
/// let store = CsvProfileStore::from_reader(csv.as_bytes()).unwrap();
/// let obs = store.observations("AHS").unwrap();
/// assert_eq!(obs.len(), 2);
/// assert_eq!(obs[0].recovery, 0);
/// assert_eq!(store.dropped_rows(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CsvProfileStore {
    profiles: InMemoryProfileStore,
    source: Option<PathBuf>,
    dropped_rows: usize,
}

impl CsvProfileStore {
    /// Load and clean the cache file at `path`.
    ///
    /// # Errors
    ///
    /// * [`StoreError::Io`] - the file cannot be opened
    /// * [`StoreError::Csv`] - malformed CSV or a required column is missing
    /// * [`StoreError::Parse`] - an unreadable recovery, temperature, or code
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let mut store = Self::from_reader(file)?;
        store.source = Some(path.to_path_buf());
        info!(
            path = %path.display(),
            liquids = store.profiles.len(),
            observations = store.profiles.observation_count(),
            dropped = store.dropped_rows,
            "Loaded profile cache"
        );
        Ok(store)
    }

    /// Load and clean cache contents from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        let headers = reader.headers()?.clone();

        let mut profiles = InMemoryProfileStore::new();
        let mut dropped_rows = 0;

        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());
            let row: RawProfileRow = record.deserialize(Some(&headers))?;

            match clean_row(&row) {
                Ok(Some(observation)) => profiles.insert(observation),
                Ok(None) => {
                    debug!(line, code = %row.code, recovery = %row.recovery, "Dropping row without temperature");
                    dropped_rows += 1;
                }
                Err(message) => return Err(StoreError::Parse { line, message }),
            }
        }

        Ok(Self {
            profiles,
            source: None,
            dropped_rows,
        })
    }

    /// File the store was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of rows dropped for a missing temperature.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// Number of liquids with at least one observation.
    pub fn liquid_count(&self) -> usize {
        self.profiles.len()
    }
}

impl ProfileStore for CsvProfileStore {
    fn observations(&self, liquid_id: &str) -> Result<Vec<Observation>, BlendError> {
        self.profiles.observations(liquid_id)
    }

    fn liquid_ids(&self) -> Vec<String> {
        self.profiles.liquid_ids()
    }
}
