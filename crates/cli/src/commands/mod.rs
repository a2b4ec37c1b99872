//! Catalog commands.
//!
//! Each command runs one service operation against a catalog built from the
//! environment and writes its result to stdout as pretty-printed JSON.

use std::io::Write;

use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use product_catalog::config::CatalogConfig;
use product_catalog::db::InMemoryProductRepository;
use product_catalog::services::ProductService;
use product_catalog_core::{ProductId, ProductInput, ProductView};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// An in-memory catalog configured from the environment.
pub struct Catalog {
    service: ProductService<InMemoryProductRepository>,
}

impl Catalog {
    /// Build the catalog described by `CATALOG_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = CatalogConfig::from_env()?;
        let repository = if config.seed {
            InMemoryProductRepository::seeded()
        } else {
            InMemoryProductRepository::new()
        };
        info!(seeded = config.seed, products = repository.len()?, "Catalog ready");

        Ok(Self {
            service: ProductService::new(repository, config.validator()),
        })
    }

    pub fn list(&self) -> CommandResult {
        let views = self.service.get_all()?;
        for view in &views {
            self.check_view(view);
        }
        emit(&views)
    }

    pub fn get(&self, id: ProductId) -> CommandResult {
        let view = self.service.get(id)?;
        self.check_view(&view);
        emit(&view)
    }

    pub fn create(&self, input: ProductInput) -> CommandResult {
        let id = self.service.create(input)?;
        emit(&json!({ "id": id }))
    }

    pub fn update(&self, id: ProductId, input: ProductInput) -> CommandResult {
        self.service.update(id, input)?;
        emit(&self.service.get(id)?)
    }

    pub fn delete(&self, id: ProductId) -> CommandResult {
        self.service.delete(id)?;
        emit(&json!({ "deleted": id }))
    }

    pub fn audit(&self) -> CommandResult {
        let findings: Vec<_> = self
            .service
            .audit()?
            .into_iter()
            .map(|finding| json!({ "id": finding.id, "error": finding.error.to_string() }))
            .collect();
        emit(&findings)
    }

    /// Log, but still print, a view that breaks the read-side rules.
    fn check_view(&self, view: &ProductView) {
        if let Err(e) = self.service.validator().validate_view(view) {
            warn!(product_id = %view.id, "Product fails view rules: {e}");
        }
    }
}

fn emit(value: &impl Serialize) -> CommandResult {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
