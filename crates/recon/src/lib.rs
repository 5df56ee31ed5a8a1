//! `vendormatch-recon` — Vendor-master reconciliation engine.
//!
//! Pure engine crate: receives pre-loaded procurement, vendor-master, and
//! invoice records, returns enriched and corrected results. No CLI or file
//! IO dependencies.

pub mod bank;
pub mod config;
pub mod engine;
pub mod enrich;
pub mod error;
pub mod instrument;
pub mod model;
pub mod names;
pub mod summary;

pub use config::ReconConfig;
pub use engine::run;
pub use error::ReconError;
pub use model::{ReconInput, ReconResult};
