//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from interpolator construction and evaluation
//! - `BlendError`: Errors from curve fitting, alignment, blending, and profile lookup

use thiserror::Error;

/// Interpolation-related errors.
///
/// Provides structured error handling for interpolation operations
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `OutOfBounds`: Query point outside valid interpolation domain
/// - `InsufficientData`: Not enough data points for interpolation
/// - `NonMonotonicData`: Knots are not strictly increasing
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use blend_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Knots are not strictly increasing.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Blend pipeline errors.
///
/// Every variant reflects bad or missing input data. None of them are
/// transient, so callers should surface them rather than retry.
///
/// # Examples
/// ```
/// use blend_core::types::BlendError;
///
/// let err = BlendError::UnknownLiquid("XYZ".to_string());
/// assert_eq!(format!("{}", err), "No profile data for liquid: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlendError {
    /// Curve fit needs at least two clean observations.
    #[error("Insufficient data for {liquid}: got {got} observations, need at least {need}")]
    InsufficientData {
        /// Liquid the observations belong to
        liquid: String,
        /// Number of observations provided
        got: usize,
        /// Minimum number of observations required
        need: usize,
    },

    /// No cached observations for the requested liquid.
    #[error("No profile data for liquid: {0}")]
    UnknownLiquid(String),

    /// Volume share outside the open interval (0, 1).
    #[error("Invalid share for {label}: {value} is not in (0, 1)")]
    InvalidShare {
        /// Which share was rejected
        label: String,
        /// The rejected value
        value: f64,
    },

    /// Blended curve has too few distinct recovery values to invert.
    #[error("Degenerate blend: {distinct} distinct recovery values, need at least 2")]
    DegenerateBlend {
        /// Number of distinct recovery values found
        distinct: usize,
    },

    /// Observation set could not be interpolated.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),
}

impl BlendError {
    /// Create an invalid share error
    pub fn invalid_share(label: impl Into<String>, value: f64) -> Self {
        Self::InvalidShare {
            label: label.into(),
            value,
        }
    }
}
