//! Volume blending of aligned curves and percentile extraction.

use super::grid::{AlignedPair, TemperatureGrid};
use crate::math::interpolators::{Interpolator, MonotonicInterpolator};
use crate::types::{BlendError, InterpolationError};

/// Recovery percentiles reported for every blend, in output order.
pub const STANDARD_PERCENTILES: [u32; 12] = [5, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 99];

/// Blended recovery percent at each grid temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct BlendedCurve {
    grid: TemperatureGrid,
    recoveries: Vec<f64>,
}

impl BlendedCurve {
    /// Build a blended curve from pre-computed values on `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`BlendError::Interpolation`] if `recoveries` does not have
    /// one value per grid point.
    pub fn from_values(grid: TemperatureGrid, recoveries: Vec<f64>) -> Result<Self, BlendError> {
        if recoveries.len() != grid.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "grid has {} points but {} recoveries were given",
                grid.len(),
                recoveries.len()
            ))
            .into());
        }
        Ok(Self { grid, recoveries })
    }

    /// Grid the curve is defined on.
    #[inline]
    pub fn grid(&self) -> TemperatureGrid {
        self.grid
    }

    /// Blended recovery at temperature `t`, if on the grid.
    pub fn get(&self, t: i64) -> Option<f64> {
        if !self.grid.contains(t) {
            return None;
        }
        Some(self.recoveries[(t - self.grid.start()) as usize])
    }

    /// Blended recoveries in temperature order.
    #[inline]
    pub fn recoveries(&self) -> &[f64] {
        &self.recoveries
    }

    /// Iterate over `(temperature, blended_recovery)`.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.grid.iter().zip(self.recoveries.iter().copied())
    }
}

/// Combine two aligned curves by volume share.
///
/// `blended(T) = share_a * recovery_a(T) + share_b * recovery_b(T)` at every
/// grid point. Shares are used as given; callers are responsible for them
/// summing to 1.
///
/// # Example
///
/// ```
/// use blend_core::distillation::{blend, merge, RecoveryCurve, TemperatureGrid};
///
/// let a = RecoveryCurve::from_samples("A", 0, vec![10.0, 20.0]);
/// let b = RecoveryCurve::from_samples("B", 0, vec![30.0, 40.0]);
/// let pair = merge(&a, &b, TemperatureGrid::new(0, 2));
///
/// let blended = blend(&pair, 0.25, 0.75);
/// assert_eq!(blended.recoveries(), &[25.0, 35.0]);
/// ```
pub fn blend(aligned: &AlignedPair, share_a: f64, share_b: f64) -> BlendedCurve {
    let recoveries = aligned
        .recovery_a()
        .iter()
        .zip(aligned.recovery_b())
        .map(|(a, b)| share_a * a + share_b * b)
        .collect();

    BlendedCurve {
        grid: aligned.grid(),
        recoveries,
    }
}

/// Temperature reported for one standard recovery percentile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlendPoint {
    /// Recovery percentile
    pub recovery: u32,
    /// Temperature in °C, or `None` if the blend cannot reach this recovery
    pub temperature: Option<f64>,
}

/// Blended distillation profile at the standard percentiles.
///
/// Points are always in [`STANDARD_PERCENTILES`] order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlendResult {
    points: Vec<BlendPoint>,
    recovery_max: f64,
}

impl BlendResult {
    /// Reported points in ascending percentile order.
    #[inline]
    pub fn points(&self) -> &[BlendPoint] {
        &self.points
    }

    /// Highest recovery the blend can physically reach.
    #[inline]
    pub fn recovery_max(&self) -> f64 {
        self.recovery_max
    }

    /// Temperature at `recovery`, `None` when undefined or not a standard percentile.
    pub fn temperature_at(&self, recovery: u32) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.recovery == recovery)
            .and_then(|p| p.temperature)
    }

    /// Iterate over reported points.
    pub fn iter(&self) -> impl Iterator<Item = &BlendPoint> {
        self.points.iter()
    }

    /// Number of reported points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no points are reported.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Invert a blended curve and report temperatures at the standard percentiles.
///
/// A monotone cubic is fitted with blended recovery as the independent
/// variable and temperature as the dependent one, then evaluated at each of
/// [`STANDARD_PERCENTILES`]. Percentiles inside the achievable cap but
/// outside the sampled range are taken from the extended end segments.
///
/// The cap is `max_a * share_a + max_b * share_b`, where `max_a` and `max_b`
/// are the highest recoveries observed for each liquid. Percentiles strictly
/// above it are reported as undefined.
///
/// Grid points whose blended recovery does not exceed the previous kept
/// value are skipped so that the inverse has distinct knots.
///
/// # Errors
///
/// Returns [`BlendError::DegenerateBlend`] when fewer than 2 distinct
/// blended recoveries remain.
pub fn extract_percentiles(
    blended: &BlendedCurve,
    max_a: f64,
    max_b: f64,
    share_a: f64,
    share_b: f64,
) -> Result<BlendResult, BlendError> {
    let mut recoveries: Vec<f64> = Vec::with_capacity(blended.recoveries.len());
    let mut temperatures: Vec<f64> = Vec::with_capacity(blended.recoveries.len());

    for (t, r) in blended.iter() {
        if !r.is_finite() {
            continue;
        }
        if recoveries.last().map_or(true, |&last| r > last) {
            recoveries.push(r);
            temperatures.push(t as f64);
        }
    }

    if recoveries.len() < 2 {
        return Err(BlendError::DegenerateBlend {
            distinct: recoveries.len(),
        });
    }

    let inverse = MonotonicInterpolator::new(&recoveries, &temperatures)?.with_extrapolation(true);
    let recovery_max = max_a * share_a + max_b * share_b;

    let points = STANDARD_PERCENTILES
        .iter()
        .map(|&recovery| -> Result<BlendPoint, BlendError> {
            let temperature = if f64::from(recovery) > recovery_max {
                None
            } else {
                Some(inverse.interpolate(f64::from(recovery))?)
            };
            Ok(BlendPoint {
                recovery,
                temperature,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BlendResult {
        points,
        recovery_max,
    })
}
