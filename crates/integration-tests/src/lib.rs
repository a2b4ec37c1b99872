//! Integration tests for the product catalog.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p product-catalog-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_service` - End-to-end CRUD scenarios through the product service
//! - `catalog_wire_format` - JSON shapes exposed to callers
//!
//! Shared fixtures live in this crate so every test file builds catalogs the same way.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use product_catalog::db::InMemoryProductRepository;
use product_catalog::services::ProductService;
use product_catalog::validation::ProductValidator;
use product_catalog_core::ProductInput;

/// Fixed clock used by [`seeded_service`].
#[must_use]
pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap_or_default()
}

/// A service over the demo products with the default rules and a fixed clock.
#[must_use]
pub fn seeded_service() -> ProductService<InMemoryProductRepository> {
    ProductService::new(
        InMemoryProductRepository::seeded(),
        ProductValidator::default(),
    )
    .with_clock(fixed_time)
}

/// A service over an empty store.
#[must_use]
pub fn empty_service() -> ProductService<InMemoryProductRepository> {
    ProductService::new(InMemoryProductRepository::new(), ProductValidator::default())
        .with_clock(fixed_time)
}

/// Valid input for a new product.
#[must_use]
pub fn sour_cream() -> ProductInput {
    ProductInput::new(
        "Сметана",
        Some("густая деревенская сметана".to_owned()),
        Decimal::new(450, 2),
    )
}

/// Valid input matching the seeded "Кефир".
#[must_use]
pub fn kefir() -> ProductInput {
    ProductInput::new(
        "Кефир",
        Some("это однозначно кефир".to_owned()),
        Decimal::new(299, 2),
    )
}
