//! Product CRUD service.
//!
//! Each operation is a short fixed protocol over the repository:
//!
//! - `get` - look up, fail with `NotFound` if absent, project to a view
//! - `get_all` - list and project every product
//! - `create` - validate, build entity, stamp `created_at`, save, return the new ID
//! - `update` - look up (or `NotFound`), validate, merge, save
//! - `delete` - remove; idempotent
//!
//! Inputs are validated in [`ValidationMode::Input`] before anything is
//! written. [`ValidationMode::Entity`] is reserved for [`ProductService::audit`],
//! which checks products that are already stored.

use std::fmt;

use chrono::{Local, NaiveDateTime};
use tracing::{info, instrument};

use product_catalog_core::{Product, ProductId, ProductInput, ProductView};

use crate::db::{ProductRepository, RepositoryError};
use crate::error::{CatalogError, Result};
use crate::mapper;
use crate::validation::{ProductValidator, ValidationError, ValidationMode};

type Clock = Box<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// A stored product that fails entity validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditFinding {
    pub id: ProductId,
    pub error: ValidationError,
}

/// Product use cases over an injected repository.
pub struct ProductService<R> {
    repository: R,
    validator: ProductValidator,
    clock: Clock,
}

impl<R> fmt::Debug for ProductService<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductService")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a service that stamps new products with the local time.
    #[must_use]
    pub fn new(repository: R, validator: ProductValidator) -> Self {
        Self {
            repository,
            validator,
            clock: Box::new(|| Local::now().naive_local()),
        }
    }

    /// Replace the clock used to stamp `created_at`.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDateTime + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// The underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// The validator applied to inputs and audits.
    #[must_use]
    pub const fn validator(&self) -> &ProductValidator {
        &self.validator
    }

    /// Get a single product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no product has this ID.
    #[instrument(skip_all, fields(product_id = %id))]
    pub fn get(&self, id: ProductId) -> Result<ProductView> {
        let product = self
            .repository
            .find_by_id(id)?
            .ok_or(CatalogError::NotFound(id))?;
        to_view(product)
    }

    /// Get every product, in repository order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Repository` if the store is unusable.
    #[instrument(skip_all)]
    pub fn get_all(&self) -> Result<Vec<ProductView>> {
        self.repository
            .find_all()?
            .into_iter()
            .map(to_view)
            .collect()
    }

    /// Create a product and return its new ID.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidArgument` if the input fails validation;
    /// nothing is stored in that case.
    #[instrument(skip_all, fields(name = %input.name))]
    pub fn create(&self, input: ProductInput) -> Result<ProductId> {
        self.validator.validate_input(&input)?;

        let product = mapper::to_entity(input).with_created_at((self.clock)());
        let id = self.repository.save(product)?.id.ok_or_else(missing_id)?;

        info!(product_id = %id, "Product created");
        Ok(id)
    }

    /// Replace the name, description and price of an existing product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no product has this ID, or
    /// `CatalogError::InvalidArgument` if the input fails validation.
    #[instrument(skip_all, fields(product_id = %id))]
    pub fn update(&self, id: ProductId, input: ProductInput) -> Result<()> {
        let existing = self
            .repository
            .find_by_id(id)?
            .ok_or(CatalogError::NotFound(id))?;
        self.validator.validate_input(&input)?;

        self.repository.save(mapper::merge(existing, input))?;

        info!("Product updated");
        Ok(())
    }

    /// Delete a product. Deleting an unknown ID succeeds.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Repository` if the store is unusable.
    #[instrument(skip_all, fields(product_id = %id))]
    pub fn delete(&self, id: ProductId) -> Result<()> {
        self.repository.delete(id)?;
        info!("Product deleted");
        Ok(())
    }

    /// Check every stored product against the entity rules.
    ///
    /// Returns one finding per product that fails, in repository order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Repository` if the store is unusable or a
    /// stored product has no ID.
    #[instrument(skip_all)]
    pub fn audit(&self) -> Result<Vec<AuditFinding>> {
        let mut findings = Vec::new();
        for product in self.repository.find_all()? {
            if let Err(error) = self.validator.validate(&product, ValidationMode::Entity) {
                let id = product.id.ok_or_else(missing_id)?;
                findings.push(AuditFinding { id, error });
            }
        }
        Ok(findings)
    }
}

fn to_view(product: Product) -> Result<ProductView> {
    mapper::to_view(product)
        .ok_or_else(missing_id)
        .map_err(CatalogError::from)
}

fn missing_id() -> RepositoryError {
    RepositoryError::DataCorruption("stored product has no id".to_owned())
}
