//! Product Catalog Core - Shared types library.
//!
//! This crate provides the types shared by every catalog component:
//! - `product-catalog` - Repository, validation, mapping and the product service
//! - `product-catalog-cli` - Command-line front end over an in-memory catalog
//!
//! # Architecture
//!
//! The core crate contains only types - no storage, no validation rules,
//! no I/O. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - The product entity, its input/view shapes and the `ProductId` newtype

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
