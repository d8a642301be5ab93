//! Report module.
//!
//! Filter criteria, the filter engine, aggregation, the dashboard agenda
//! feed, and the per-action orchestrator.

pub mod aggregate;
pub mod criteria;
pub mod filter;
pub mod run;
pub mod schedule;

pub use aggregate::*;
pub use criteria::*;
pub use filter::*;
pub use run::*;
pub use schedule::*;
