//! Interpolation methods for distillation curves.
//!
//! ## Available Interpolators
//!
//! - [`MonotonicInterpolator`]: Shape-preserving piecewise cubic Hermite (PCHIP)
//!   interpolation. Never overshoots the data, so monotone input stays monotone.
//!
//! ## Core Trait
//!
//! All 1D interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute interpolated value
//! - `domain() -> (T, T)`: Return valid interpolation range
//!
//! ## Example
//!
//! ```
//! use blend_core::math::interpolators::{Interpolator, MonotonicInterpolator};
//!
//! let xs = [0.0_f64, 1.0, 2.0, 3.0];
//! let ys = [0.0_f64, 1.0, 1.0, 2.0];
//!
//! let interp = MonotonicInterpolator::new(&xs, &ys).unwrap();
//! assert_eq!(interp.domain(), (0.0, 3.0));
//!
//! // Flat data stays flat
//! let y: f64 = interp.interpolate(1.5).unwrap();
//! assert!((y - 1.0).abs() < 1e-12);
//! ```

mod monotonic;
mod traits;

// Re-export public types at module level
pub use monotonic::MonotonicInterpolator;
pub use traits::Interpolator;
