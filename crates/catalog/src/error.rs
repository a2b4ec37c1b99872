//! Unified error type for catalog operations.
//!
//! Every service operation returns `Result<T, CatalogError>`. Errors are
//! surfaced to the caller unchanged; nothing in this crate logs or swallows them.

use thiserror::Error;

use product_catalog_core::ProductId;

use crate::db::RepositoryError;
use crate::validation::ValidationError;

/// Catalog-level error type.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input or entity failed a validation rule.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// No product exists for the given ID.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// The backing store failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Result type alias for `CatalogError`.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_carries_id() {
        let id: ProductId = "18a9cc59-c7c7-47e2-ac77-d3127d3b2edf".parse().unwrap();
        assert_eq!(
            CatalogError::NotFound(id).to_string(),
            "product not found: 18a9cc59-c7c7-47e2-ac77-d3127d3b2edf"
        );
    }

    #[test]
    fn test_validation_error_converts_to_invalid_argument() {
        let err: CatalogError = ValidationError::MissingCreatedAt.into();
        assert!(matches!(err, CatalogError::InvalidArgument(_)));
        assert!(err.to_string().starts_with("invalid argument: "));
    }
}
