//! Logging module.
//!
//! Structured logging with operation context.

pub mod structured;

pub use structured::*;
