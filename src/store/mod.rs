//! Case store module.
//!
//! Record models, the in-memory store, and mock-data seeding.

pub mod case_store;
pub mod mock;
pub mod models;

pub use case_store::*;
pub use mock::*;
pub use models::*;
