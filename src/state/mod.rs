//! Application state module.
//!
//! Explicit top-level state for the shell: active view and persisted
//! settings.

pub mod app;

pub use app::*;
