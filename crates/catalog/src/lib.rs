//! Product Catalog - In-process product store and CRUD service.
//!
//! # Architecture
//!
//! - [`db`] - Identity-keyed in-memory repository with upsert semantics
//! - [`validation`] - Field rules applied before anything is saved
//! - [`mapper`] - Conversions between input, entity and view shapes
//! - [`services`] - The product service orchestrating the three above
//! - [`config`] - Environment-driven configuration (validation patterns, seeding)
//!
//! Shared product types live in `product-catalog-core`.
//!
//! # Example
//!
//! ```rust
//! use product_catalog::db::InMemoryProductRepository;
//! use product_catalog::services::ProductService;
//! use product_catalog::validation::ProductValidator;
//! use product_catalog_core::ProductInput;
//! use rust_decimal::Decimal;
//!
//! let service =
//!     ProductService::new(InMemoryProductRepository::new(), ProductValidator::default());
//! let id = service
//!     .create(ProductInput::new(
//!         "Сметана",
//!         Some("густая деревенская сметана".to_owned()),
//!         Decimal::new(450, 2),
//!     ))
//!     .unwrap();
//! assert_eq!(service.get(id).unwrap().name, "Сметана");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod mapper;
pub mod services;
pub mod validation;

pub use error::{CatalogError, Result};
