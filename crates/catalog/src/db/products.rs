//! In-memory product repository.
//!
//! All reads and writes go through one `RwLock`, so the check-then-insert in
//! `save` is a single atomic step even with concurrent callers.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use product_catalog_core::{Product, ProductId};

use super::{ProductRepository, RepositoryError, seed};

/// Repository keeping products in a process-local map.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `products`.
    ///
    /// Products without an ID get a fresh one, exactly as `save` would.
    #[must_use]
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut map = HashMap::new();
        for mut product in products {
            let id = *product.id.get_or_insert_with(|| fresh_id(&map));
            map.insert(id, product);
        }
        Self {
            products: RwLock::new(map),
        }
    }

    /// Create a repository preloaded with the demo products.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_products(seed::products())
    }

    /// Number of stored products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the store is unusable.
    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self
            .products
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?
            .len())
    }

    /// Whether the store holds no products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the store is unusable.
    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let products = self
            .products
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(products.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self
            .products
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(products.values().cloned().collect())
    }

    fn save(&self, mut product: Product) -> Result<Product, RepositoryError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let assigned = product.id.is_none();
        let id = *product.id.get_or_insert_with(|| fresh_id(&products));
        let replaced = products.insert(id, product.clone()).is_some();
        drop(products);

        debug!(product_id = %id, assigned, replaced, "Product saved");
        Ok(product)
    }

    fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let removed = self
            .products
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?
            .remove(&id)
            .is_some();

        debug!(product_id = %id, removed, "Product deleted");
        Ok(())
    }
}

/// Draw random IDs until one is not already taken.
fn fresh_id(products: &HashMap<ProductId, Product>) -> ProductId {
    loop {
        let id = ProductId::generate();
        if !products.contains_key(&id) {
            return id;
        }
    }
}
