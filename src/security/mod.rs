//! Security module.
//!
//! PII display-masking helpers.

pub mod pii;

pub use pii::*;
