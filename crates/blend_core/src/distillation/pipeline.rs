//! End-to-end blend computation for a pair of liquids.

use super::blend::{blend, extract_percentiles, BlendResult, BlendedCurve};
use super::curve::fit_and_sample;
use super::grid::{joint_grid, merge};
use super::shares::{validate_share, VolumeShares};
use super::store::ProfileStore;
use crate::types::{max_recovery, BlendError};

/// Blend calculator over an injected [`ProfileStore`].
///
/// Each call is a pure computation over the store's data: load both
/// observation sets, fit both curves, align them on the joint grid, blend by
/// share, and invert at the standard percentiles. Any failure is returned
/// unchanged.
///
/// # Example
///
/// ```
/// use blend_core::distillation::{BlendPipeline, InMemoryProfileStore};
///
/// let store = InMemoryProfileStore::new()
///     .with_profile("A", &[(0, 50.0), (50, 150.0), (100, 250.0)])
///     .with_profile("B", &[(0, 60.0), (50, 160.0), (100, 260.0)]);
///
/// let pipeline = BlendPipeline::new(store);
/// let result = pipeline.compute_blend("A", "B", 0.5, 0.5).unwrap();
/// assert!((result.temperature_at(50).unwrap() - 155.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct BlendPipeline<S> {
    store: S,
}

struct PreparedBlend {
    blended: BlendedCurve,
    max_a: f64,
    max_b: f64,
}

impl<S: ProfileStore> BlendPipeline<S> {
    /// Create a pipeline reading from `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying profile store.
    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Blended profile of `id_a` and `id_b` at the standard percentiles.
    ///
    /// # Errors
    ///
    /// * [`BlendError::InvalidShare`] - a share outside (0, 1)
    /// * [`BlendError::UnknownLiquid`] - no data for either id
    /// * [`BlendError::InsufficientData`] - fewer than 2 observations for a liquid
    /// * [`BlendError::Interpolation`] - malformed observation set
    /// * [`BlendError::DegenerateBlend`] - blended curve cannot be inverted
    pub fn compute_blend(
        &self,
        id_a: &str,
        id_b: &str,
        share_a: f64,
        share_b: f64,
    ) -> Result<BlendResult, BlendError> {
        let prepared = self.prepare(id_a, id_b, share_a, share_b)?;
        extract_percentiles(
            &prepared.blended,
            prepared.max_a,
            prepared.max_b,
            share_a,
            share_b,
        )
    }

    /// [`compute_blend`](Self::compute_blend) with pre-validated shares.
    pub fn compute_with_shares(
        &self,
        id_a: &str,
        id_b: &str,
        shares: VolumeShares,
    ) -> Result<BlendResult, BlendError> {
        self.compute_blend(id_a, id_b, shares.a(), shares.b())
    }

    /// Blended recovery curve on the joint grid, before inversion.
    pub fn blended_curve(
        &self,
        id_a: &str,
        id_b: &str,
        share_a: f64,
        share_b: f64,
    ) -> Result<BlendedCurve, BlendError> {
        Ok(self.prepare(id_a, id_b, share_a, share_b)?.blended)
    }

    fn prepare(
        &self,
        id_a: &str,
        id_b: &str,
        share_a: f64,
        share_b: f64,
    ) -> Result<PreparedBlend, BlendError> {
        validate_share("share_a", share_a)?;
        validate_share("share_b", share_b)?;

        let obs_a = self.store.observations(id_a)?;
        let obs_b = self.store.observations(id_b)?;

        let curve_a = fit_and_sample(&obs_a)?;
        let curve_b = fit_and_sample(&obs_b)?;

        let grid = joint_grid(&obs_a, &obs_b)?;
        let aligned = merge(&curve_a, &curve_b, grid);

        Ok(PreparedBlend {
            blended: blend(&aligned, share_a, share_b),
            max_a: f64::from(max_recovery(&obs_a).unwrap_or(0)),
            max_b: f64::from(max_recovery(&obs_b).unwrap_or(0)),
        })
    }
}
