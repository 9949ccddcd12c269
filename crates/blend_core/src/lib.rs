//! # blend_core: Synthetic Distillation Profiles for Two-Liquid Blends
//!
//! Given the measured distillation profile of two liquids and their volume
//! shares, blend_core estimates the recovery-versus-temperature profile of
//! the mixture and reports it at the standard recovery percentiles.
//!
//! ## Layer Role
//!
//! blend_core is the bottom layer of the workspace, providing:
//! - Observation and error types (`types`)
//! - Shape-preserving monotone cubic interpolation (`math::interpolators`)
//! - Curve fitting, grid alignment, blending, and inversion (`distillation`)
//!
//! It performs no I/O. Profile data arrives through the
//! [`ProfileStore`](distillation::ProfileStore) trait.
//!
//! ## Usage Examples
//!
//! ```rust
//! use blend_core::distillation::{BlendPipeline, InMemoryProfileStore};
//!
//! let store = InMemoryProfileStore::new()
//!     .with_profile("A", &[(0, 50.0), (50, 150.0), (100, 250.0)])
//!     .with_profile("B", &[(0, 60.0), (50, 160.0), (100, 260.0)]);
//!
//! let result = BlendPipeline::new(store)
//!     .compute_blend("A", "B", 0.5, 0.5)
//!     .unwrap();
//!
//! for point in result.iter() {
//!     println!("{:>3}% -> {:?}", point.recovery, point.temperature);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for observations, shares, and results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod distillation;
pub mod math;
pub mod types;
