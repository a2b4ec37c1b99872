//! Application services.
//!
//! Services orchestrate the repository, mapper and validator behind the
//! operations exposed to callers.

pub mod products;

pub use products::{AuditFinding, ProductService};
