//! # Infra Store: Profile Cache I/O
//!
//! File-backed adapters for the blending core:
//!
//! - [`CsvProfileStore`]: loads the scraped distillation cache and serves it
//!   through [`blend_core::distillation::ProfileStore`]
//! - [`export`]: CSV writers for blend results and batch runs
//!
//! Nothing here fetches from the network; the cache file is expected to be
//! present locally.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
pub mod export;
mod profile_cache;

pub use error::StoreError;
pub use export::{
    write_batch_csv, write_batch_file, write_blend_csv, write_codes_csv, BatchRecord,
};
pub use profile_cache::{CsvProfileStore, CODE_COLUMN, RECOVERY_COLUMN, TEMPERATURE_COLUMN};
