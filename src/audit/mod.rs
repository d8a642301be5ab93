//! Audit module.
//!
//! Append-only audit trail for user actions.

pub mod trail;

pub use trail::*;
