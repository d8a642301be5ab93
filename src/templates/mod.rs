//! Template module.
//!
//! Persisted, named filter-criteria presets.

pub mod store;

pub use store::*;
