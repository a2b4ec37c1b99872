//! Product storage.
//!
//! # Store: in-memory
//!
//! Products live in a single identity-keyed map owned by
//! [`InMemoryProductRepository`]. Nothing survives a process restart.
//!
//! ## Semantics
//!
//! - `find_by_id` - absence is `Ok(None)`, never an error
//! - `find_all` - every stored product, in no particular order
//! - `save` - upsert; assigns a fresh ID when the product has none
//! - `delete` - removing an unknown ID is a no-op

pub mod products;
pub mod seed;

use thiserror::Error;

use product_catalog_core::{Product, ProductId};

pub use products::InMemoryProductRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A writer panicked while holding the store lock.
    #[error("lock poisoned")]
    LockPoisoned,

    /// Data in the store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Storage operations the product service depends on.
pub trait ProductRepository: Send + Sync {
    /// Look up a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the store is unusable.
    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// List every stored product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the store is unusable.
    fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Insert or replace a product, returning it with its ID populated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the store is unusable.
    fn save(&self, product: Product) -> Result<Product, RepositoryError>;

    /// Remove a product if present.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the store is unusable.
    fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
