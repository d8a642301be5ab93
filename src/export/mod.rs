//! Export module.
//!
//! CSV serialization and download-filename derivation for the full report.

pub mod csv;

pub use csv::*;
