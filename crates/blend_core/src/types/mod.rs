//! Core data and error types.
//!
//! This module provides:
//! - `observation`: Measured distillation profile points
//! - `error`: Structured error types for interpolation and blending
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Observation`], [`max_recovery`], [`temperature_span`] from `observation`
//! - [`InterpolationError`], [`BlendError`] from `error`

pub mod error;
pub mod observation;

// Re-export commonly used types at module level
pub use error::{BlendError, InterpolationError};
pub use observation::{
    max_recovery, temperature_span, Observation, INITIAL_BOILING_POINT, MAX_RECOVERY_PERCENT,
};
