//! Core types for the product catalog.
//!
//! This module provides type-safe wrappers and the product shapes exchanged
//! between the store, the service and its callers.

pub mod id;
pub mod product;

pub use id::*;
pub use product::{Product, ProductInput, ProductView};
