//! Monotone piecewise cubic Hermite interpolation (PCHIP).

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Shape-preserving piecewise cubic Hermite interpolator.
///
/// Knot slopes follow the Fritsch-Butland rule: interior slopes are the
/// weighted harmonic mean of the adjacent secants, and are set to zero at
/// local extrema or flat segments. The resulting curve is C¹, passes through
/// every knot, and never overshoots, so monotone data yields a monotone
/// interpolant.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Construction
///
/// Data points are automatically sorted by x-coordinate during construction.
/// At least 2 data points are required and x-coordinates must be distinct.
/// With exactly 2 points the interpolant is the straight line through them.
///
/// # Extrapolation
///
/// By default, queries outside the knot range fail with
/// [`InterpolationError::OutOfBounds`]. [`with_extrapolation`](Self::with_extrapolation)
/// extends the first and last cubic segments beyond the knots instead.
///
/// # Example
///
/// ```
/// use blend_core::math::interpolators::{Interpolator, MonotonicInterpolator};
///
/// let xs = [0.0_f64, 10.0, 20.0, 30.0];
/// let ys = [0.0, 5.0, 50.0, 55.0];
///
/// let interp = MonotonicInterpolator::new(&xs, &ys).unwrap();
/// let a = interp.interpolate(12.0).unwrap();
/// let b = interp.interpolate(18.0).unwrap();
/// assert!(a <= b);
/// assert!(interp.interpolate(31.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MonotonicInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values
    ys: Vec<T>,
    /// First derivative at each knot
    slopes: Vec<T>,
    /// Whether to evaluate end segments beyond the knots
    extrapolate: bool,
}

impl<T: Float> MonotonicInterpolator<T> {
    /// Construct a monotone cubic interpolator from x and y data points.
    ///
    /// # Arguments
    ///
    /// * `xs` - Slice of x-coordinates
    /// * `ys` - Slice of corresponding y-values
    ///
    /// # Returns
    ///
    /// * `Ok(MonotonicInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 data points
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched lengths or non-finite values
    /// * `Err(InterpolationError::NonMonotonicData)` - Repeated x-coordinate
    ///
    /// # Example
    ///
    /// ```
    /// use blend_core::math::interpolators::MonotonicInterpolator;
    ///
    /// let interp = MonotonicInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
    /// assert_eq!(interp.len(), 2);
    ///
    /// // Insufficient data
    /// assert!(MonotonicInterpolator::new(&[0.0], &[0.0]).is_err());
    ///
    /// // Repeated x
    /// assert!(MonotonicInterpolator::new(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]).is_err());
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(InterpolationError::InvalidInput(
                "xs and ys must be finite".to_string(),
            ));
        }

        let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let (sorted_xs, sorted_ys): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();

        if let Some(i) = sorted_xs.windows(2).position(|w| w[1] <= w[0]) {
            return Err(InterpolationError::NonMonotonicData { index: i + 1 });
        }

        let slopes = Self::compute_slopes(&sorted_xs, &sorted_ys);

        Ok(Self {
            xs: sorted_xs,
            ys: sorted_ys,
            slopes,
            extrapolate: false,
        })
    }

    /// Enable or disable evaluation outside the knot range.
    ///
    /// When enabled, points below the first knot use the first cubic segment
    /// and points above the last knot use the last one.
    #[must_use]
    pub fn with_extrapolation(mut self, extrapolate: bool) -> Self {
        self.extrapolate = extrapolate;
        self
    }

    /// Compute knot slopes.
    ///
    /// Interior: weighted harmonic mean of neighbouring secants, zero when
    /// they differ in sign or either is zero. Ends: one-sided three-point
    /// estimate clamped so it cannot reverse or overshoot the first secant.
    fn compute_slopes(xs: &[T], ys: &[T]) -> Vec<T> {
        let n = xs.len();
        let h: Vec<T> = (0..n - 1).map(|i| xs[i + 1] - xs[i]).collect();
        let delta: Vec<T> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

        if n == 2 {
            return vec![delta[0], delta[0]];
        }

        let two = T::one() + T::one();
        let mut slopes = vec![T::zero(); n];

        for k in 1..n - 1 {
            let (d0, d1) = (delta[k - 1], delta[k]);
            if d0 == T::zero() || d1 == T::zero() || sign(d0) != sign(d1) {
                continue;
            }
            let w1 = two * h[k] + h[k - 1];
            let w2 = h[k] + two * h[k - 1];
            slopes[k] = (w1 + w2) / (w1 / d0 + w2 / d1);
        }

        slopes[0] = edge_slope(h[0], h[1], delta[0], delta[1]);
        slopes[n - 1] = edge_slope(h[n - 2], h[n - 3], delta[n - 2], delta[n - 3]);

        slopes
    }

    /// Find the segment index for interpolation using binary search.
    ///
    /// Returns the index `i` such that `xs[i] <= x < xs[i+1]`,
    /// clamped to valid segment range [0, n-2].
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values (in sorted x order).
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the knot slopes.
    #[inline]
    pub fn slopes(&self) -> &[T] {
        &self.slopes
    }

    /// Returns whether queries outside the domain are extrapolated.
    #[inline]
    pub fn extrapolates(&self) -> bool {
        self.extrapolate
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl<T: Float> Interpolator<T> for MonotonicInterpolator<T> {
    /// Evaluate the cubic Hermite segment containing `x`.
    ///
    /// # Formula
    ///
    /// ```text
    /// t = (x - xi) / h
    /// y = h00(t)*yi + h10(t)*h*di + h01(t)*yi+1 + h11(t)*h*di+1
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain();

        if !self.extrapolate && (x < x_min || x > x_max) {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        let i = self.find_segment(x);
        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let t2 = t * t;
        let t3 = t2 * t;

        let two = T::one() + T::one();
        let three = two + T::one();

        let h00 = two * t3 - three * t2 + T::one();
        let h10 = t3 - two * t2 + t;
        let h01 = three * t2 - two * t3;
        let h11 = t3 - t2;

        Ok(h00 * self.ys[i]
            + h10 * h * self.slopes[i]
            + h01 * self.ys[i + 1]
            + h11 * h * self.slopes[i + 1])
    }

    /// Return the valid interpolation domain.
    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}

#[inline]
fn sign<T: Float>(v: T) -> i8 {
    if v > T::zero() {
        1
    } else if v < T::zero() {
        -1
    } else {
        0
    }
}

/// Shape-preserving one-sided slope at an end knot.
fn edge_slope<T: Float>(h0: T, h1: T, m0: T, m1: T) -> T {
    let two = T::one() + T::one();
    let three = two + T::one();
    let d = ((two * h0 + h1) * m0 - h0 * m1) / (h0 + h1);

    if sign(d) != sign(m0) {
        T::zero()
    } else if sign(m0) != sign(m1) && d.abs() > three * m0.abs() {
        three * m0
    } else {
        d
    }
}
