//! Numerical building blocks.
//!
//! - `interpolators`: Shape-preserving interpolation used by curve fitting and inversion

pub mod interpolators;
