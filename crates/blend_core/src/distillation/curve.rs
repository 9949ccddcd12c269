//! Recovery-versus-temperature curve fitting.

use super::grid::TemperatureGrid;
use crate::math::interpolators::{Interpolator, MonotonicInterpolator};
use crate::types::{BlendError, InterpolationError, Observation};

/// Minimum number of observations a curve fit accepts.
pub const MIN_OBSERVATIONS: usize = 2;

/// Recovery percent sampled at consecutive integer temperatures.
///
/// Defined on a contiguous grid starting at `start`; the value at index `i`
/// is the recovery at temperature `start + i`. Immutable once built.
///
/// # Example
///
/// ```
/// use blend_core::distillation::RecoveryCurve;
///
/// let curve = RecoveryCurve::from_samples("AHS", 40, vec![0.0, 0.4, 1.1]);
/// assert_eq!(curve.get(41), Some(0.4));
/// assert_eq!(curve.get(43), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveryCurve {
    liquid_id: String,
    start: i64,
    recoveries: Vec<f64>,
}

impl RecoveryCurve {
    /// Build a curve from pre-computed samples starting at `start`.
    pub fn from_samples(liquid_id: impl Into<String>, start: i64, recoveries: Vec<f64>) -> Self {
        Self {
            liquid_id: liquid_id.into(),
            start,
            recoveries,
        }
    }

    /// Liquid the curve was fitted for.
    #[inline]
    pub fn liquid_id(&self) -> &str {
        &self.liquid_id
    }

    /// Grid the curve is defined on.
    #[inline]
    pub fn grid(&self) -> TemperatureGrid {
        TemperatureGrid::new(self.start, self.start + self.recoveries.len() as i64)
    }

    /// Recovery at integer temperature `t`, if sampled.
    pub fn get(&self, t: i64) -> Option<f64> {
        if t < self.start {
            return None;
        }
        self.recoveries.get((t - self.start) as usize).copied()
    }

    /// Sampled recoveries in temperature order.
    #[inline]
    pub fn recoveries(&self) -> &[f64] {
        &self.recoveries
    }

    /// Iterate over `(temperature, recovery)`.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.grid().iter().zip(self.recoveries.iter().copied())
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.recoveries.len()
    }

    /// Returns true if the curve has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.recoveries.is_empty()
    }
}

/// Fit a monotone cubic through `observations` and sample it on its grid.
///
/// Temperature is the independent variable and recovery the dependent one.
/// Observations may arrive in any order; they are sorted by temperature and
/// must then show strictly increasing recovery. The curve is sampled at
/// every integer in `[ceil(min T), floor(max T))`.
///
/// # Errors
///
/// * [`BlendError::InsufficientData`] - fewer than [`MIN_OBSERVATIONS`] points
/// * [`BlendError::Interpolation`] - repeated temperatures or recovery not
///   strictly increasing with temperature
///
/// # Example
///
/// ```
/// use blend_core::distillation::fit_and_sample;
/// use blend_core::types::Observation;
///
/// let obs = [
///     Observation::new("A", 0, 50.0),
///     Observation::new("A", 50, 150.0),
///     Observation::new("A", 100, 250.0),
/// ];
/// let curve = fit_and_sample(&obs).unwrap();
/// assert_eq!(curve.len(), 200);
/// assert!((curve.get(150).unwrap() - 50.0).abs() < 1e-9);
/// ```
pub fn fit_and_sample(observations: &[Observation]) -> Result<RecoveryCurve, BlendError> {
    let liquid_id = observations
        .first()
        .map(|o| o.liquid_id.clone())
        .unwrap_or_default();

    if observations.len() < MIN_OBSERVATIONS {
        return Err(BlendError::InsufficientData {
            liquid: liquid_id,
            got: observations.len(),
            need: MIN_OBSERVATIONS,
        });
    }

    let mut points: Vec<(f64, f64)> = observations
        .iter()
        .map(|o| (o.temperature, f64::from(o.recovery)))
        .collect();
    points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    if let Some(i) = points.windows(2).position(|w| w[1].1 <= w[0].1) {
        return Err(InterpolationError::NonMonotonicData { index: i + 1 }.into());
    }

    let (temperatures, recoveries): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();
    let interp = MonotonicInterpolator::new(&temperatures, &recoveries)?;

    let (min, max) = interp.domain();
    let grid = TemperatureGrid::from_span(min, max);
    let samples = grid
        .iter()
        .map(|t| interp.interpolate(t as f64))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RecoveryCurve::from_samples(liquid_id, grid.start(), samples))
}
