//! Integer temperature grids and alignment of two recovery curves.

use super::curve::RecoveryCurve;
use crate::types::{temperature_span, BlendError, Observation};

/// Half-open range of integer temperatures `[start, end)` with step 1.
///
/// Built from an observed temperature span as `[ceil(min), floor(max))`, so
/// sampling never leaves the observed range. The upper endpoint is excluded
/// even when `max` is itself an integer.
///
/// # Example
///
/// ```
/// use blend_core::distillation::TemperatureGrid;
///
/// let grid = TemperatureGrid::from_span(35.2, 40.0);
/// assert_eq!(grid.iter().collect::<Vec<_>>(), vec![36, 37, 38, 39]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureGrid {
    start: i64,
    end: i64,
}

impl TemperatureGrid {
    /// Create a grid covering `[start, end)`. An inverted range is empty.
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Grid over `[ceil(min), floor(max))`.
    pub fn from_span(min: f64, max: f64) -> Self {
        Self::new(min.ceil() as i64, max.floor() as i64)
    }

    /// Native sampling grid of a single observation set.
    ///
    /// # Errors
    ///
    /// Returns [`BlendError::InsufficientData`] when the set is empty.
    pub fn for_observations(observations: &[Observation]) -> Result<Self, BlendError> {
        let (min, max) = span_of(observations)?;
        Ok(Self::from_span(min, max))
    }

    /// First temperature in the grid.
    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Exclusive upper bound.
    #[inline]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of grid points.
    #[inline]
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    /// Returns true if the grid has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `t` is a grid point.
    #[inline]
    pub fn contains(&self, t: i64) -> bool {
        (self.start..self.end).contains(&t)
    }

    /// Iterate over grid temperatures in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> {
        self.start..self.end
    }
}

fn span_of(observations: &[Observation]) -> Result<(f64, f64), BlendError> {
    temperature_span(observations).ok_or_else(|| BlendError::InsufficientData {
        liquid: String::new(),
        got: 0,
        need: 2,
    })
}

/// Grid spanning both observation sets.
///
/// Equals `[ceil(min(minA, minB)), floor(max(maxA, maxB)))`, a superset of
/// each set's native grid.
///
/// # Errors
///
/// Returns [`BlendError::InsufficientData`] when either set is empty.
///
/// # Example
///
/// ```
/// use blend_core::distillation::joint_grid;
/// use blend_core::types::Observation;
///
/// let a = [Observation::new("A", 0, 50.0), Observation::new("A", 100, 250.0)];
/// let b = [Observation::new("B", 0, 60.5), Observation::new("B", 100, 260.7)];
///
/// let grid = joint_grid(&a, &b).unwrap();
/// assert_eq!((grid.start(), grid.end()), (50, 260));
/// ```
pub fn joint_grid(a: &[Observation], b: &[Observation]) -> Result<TemperatureGrid, BlendError> {
    let (min_a, max_a) = span_of(a)?;
    let (min_b, max_b) = span_of(b)?;
    Ok(TemperatureGrid::from_span(min_a.min(min_b), max_a.max(max_b)))
}

/// Two recovery curves sampled on one shared grid.
///
/// Every grid point carries a value for both curves; see [`merge`] for how
/// points outside a curve's own range are filled.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPair {
    grid: TemperatureGrid,
    recovery_a: Vec<f64>,
    recovery_b: Vec<f64>,
}

impl AlignedPair {
    /// Grid the pair is defined on.
    #[inline]
    pub fn grid(&self) -> TemperatureGrid {
        self.grid
    }

    /// `(recovery_a, recovery_b)` at temperature `t`, if `t` is on the grid.
    pub fn get(&self, t: i64) -> Option<(f64, f64)> {
        if !self.grid.contains(t) {
            return None;
        }
        let i = (t - self.grid.start()) as usize;
        Some((self.recovery_a[i], self.recovery_b[i]))
    }

    /// Aligned values of the first curve.
    #[inline]
    pub fn recovery_a(&self) -> &[f64] {
        &self.recovery_a
    }

    /// Aligned values of the second curve.
    #[inline]
    pub fn recovery_b(&self) -> &[f64] {
        &self.recovery_b
    }

    /// Iterate over `(temperature, recovery_a, recovery_b)`.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64, f64)> + '_ {
        self.grid
            .iter()
            .zip(self.recovery_a.iter().zip(self.recovery_b.iter()))
            .map(|(t, (a, b))| (t, *a, *b))
    }

    /// Number of grid points.
    #[inline]
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Returns true if the pair has no grid points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
}

/// Sample two curves onto `grid`.
///
/// At each grid point a curve contributes its own value when it has one.
/// Otherwise it repeats its most recent earlier value, and contributes 0
/// before its first sample.
///
/// # Example
///
/// ```
/// use blend_core::distillation::{merge, RecoveryCurve, TemperatureGrid};
///
/// let a = RecoveryCurve::from_samples("A", 10, vec![1.0, 2.0]);
/// let b = RecoveryCurve::from_samples("B", 11, vec![5.0]);
///
/// let pair = merge(&a, &b, TemperatureGrid::new(10, 13));
/// assert_eq!(pair.recovery_a(), &[1.0, 2.0, 2.0]);
/// assert_eq!(pair.recovery_b(), &[0.0, 5.0, 5.0]);
/// ```
pub fn merge(a: &RecoveryCurve, b: &RecoveryCurve, grid: TemperatureGrid) -> AlignedPair {
    AlignedPair {
        grid,
        recovery_a: forward_fill(a, grid),
        recovery_b: forward_fill(b, grid),
    }
}

fn forward_fill(curve: &RecoveryCurve, grid: TemperatureGrid) -> Vec<f64> {
    let mut last = None;
    grid.iter()
        .map(|t| {
            let value = curve.get(t).or(last);
            last = value;
            value.unwrap_or(0.0)
        })
        .collect()
}
