//! Distillation profile observations.

/// Recovery percent assigned to the initial boiling point row.
pub const INITIAL_BOILING_POINT: u32 = 0;

/// Highest recovery percent a distillation test can report.
pub const MAX_RECOVERY_PERCENT: u32 = 100;

/// A single measured point of a liquid's distillation profile.
///
/// Records the cumulative mass percent recovered once the liquid has been
/// heated to `temperature` (°C). Observation sets are expected to be
/// cleaned before use: the initial boiling point is stored with
/// [`INITIAL_BOILING_POINT`] recovery and rows without a temperature are
/// dropped.
///
/// # Example
///
/// ```
/// use blend_core::types::Observation;
///
/// let obs = Observation::new("AHS", 50, 312.4);
/// assert_eq!(obs.recovery, 50);
/// assert_eq!(obs.liquid_id, "AHS");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// Cumulative mass percent recovered (0-100)
    pub recovery: u32,
    /// Temperature in °C
    pub temperature: f64,
    /// Identifier of the liquid (oil code)
    pub liquid_id: String,
}

impl Observation {
    /// Create an observation for `liquid_id`.
    pub fn new(liquid_id: impl Into<String>, recovery: u32, temperature: f64) -> Self {
        Self {
            recovery,
            temperature,
            liquid_id: liquid_id.into(),
        }
    }

    /// Returns true if this row is the initial boiling point.
    #[inline]
    pub fn is_initial_boiling_point(&self) -> bool {
        self.recovery == INITIAL_BOILING_POINT
    }
}

/// Largest recovery percent in an observation set, if any.
pub fn max_recovery(observations: &[Observation]) -> Option<u32> {
    observations.iter().map(|o| o.recovery).max()
}

/// Minimum and maximum observed temperature, if any.
pub fn temperature_span(observations: &[Observation]) -> Option<(f64, f64)> {
    observations.iter().fold(None, |acc, o| match acc {
        None => Some((o.temperature, o.temperature)),
        Some((lo, hi)) => Some((lo.min(o.temperature), hi.max(o.temperature))),
    })
}
