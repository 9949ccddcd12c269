//! Core interpolation trait.

use crate::types::InterpolationError;
use num_traits::Float;

/// One-dimensional interpolator over a fixed set of knots.
///
/// Implementations are generic over `T: Float` so that the same code path
/// serves `f64` and `f32` data.
pub trait Interpolator<T: Float> {
    /// Compute the interpolated value at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolationError::OutOfBounds`] when `x` lies outside
    /// [`domain`](Interpolator::domain) and the implementation does not
    /// extrapolate.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Return the `(min, max)` range spanned by the knots.
    fn domain(&self) -> (T, T);
}
