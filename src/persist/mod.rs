//! Persistence module.
//!
//! The key-value boundary the template and settings stores write through,
//! with in-memory and file-backed implementations.

pub mod file;
pub mod kv;

pub use file::*;
pub use kv::*;
