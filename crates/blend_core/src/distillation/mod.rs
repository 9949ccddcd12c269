//! Distillation profile blending.
//!
//! Data flows leaf to root:
//!
//! 1. [`ProfileStore`] supplies cleaned [`Observation`](crate::types::Observation)s
//! 2. [`fit_and_sample`] turns each set into a [`RecoveryCurve`]
//! 3. [`joint_grid`] and [`merge`] align two curves into an [`AlignedPair`]
//! 4. [`blend`] combines them by volume share into a [`BlendedCurve`]
//! 5. [`extract_percentiles`] inverts the blend into a [`BlendResult`]
//!
//! [`BlendPipeline`] runs the whole sequence for a pair of liquid ids.

mod blend;
mod curve;
mod grid;
mod pipeline;
mod shares;
mod store;

pub use blend::{
    blend, extract_percentiles, BlendPoint, BlendResult, BlendedCurve, STANDARD_PERCENTILES,
};
pub use curve::{fit_and_sample, RecoveryCurve, MIN_OBSERVATIONS};
pub use grid::{joint_grid, merge, AlignedPair, TemperatureGrid};
pub use pipeline::BlendPipeline;
pub use shares::{validate_share, VolumeShares};
pub use store::{InMemoryProfileStore, ProfileStore};
