//! Catalog configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CATALOG_NAME_PATTERN` - Regex a whole product name must match
//!   (default: 5-10 Cyrillic letters or ASCII whitespace)
//! - `CATALOG_DESCRIPTION_PATTERN` - Regex a whole product description must
//!   match (default: 10-30 Cyrillic letters or ASCII whitespace)
//! - `CATALOG_SEED` - Load the demo products on startup (default: true)
//!
//! Patterns need no `^`/`$`; they are anchored when compiled.

use thiserror::Error;

use crate::validation::{
    DEFAULT_DESCRIPTION_PATTERN, DEFAULT_NAME_PATTERN, ProductValidator, ValidationRules,
};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Name and description patterns
    pub rules: ValidationRules,
    /// Whether to preload the demo products
    pub seed: bool,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a pattern does not compile or `CATALOG_SEED`
    /// is not a boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let name = get_env_or_default("CATALOG_NAME_PATTERN", DEFAULT_NAME_PATTERN);
        let description =
            get_env_or_default("CATALOG_DESCRIPTION_PATTERN", DEFAULT_DESCRIPTION_PATTERN);
        let rules = ValidationRules::default()
            .with_name(&name)
            .map_err(|e| pattern_error("CATALOG_NAME_PATTERN", &e))?
            .with_description(&description)
            .map_err(|e| pattern_error("CATALOG_DESCRIPTION_PATTERN", &e))?;
        let seed = parse_bool("CATALOG_SEED", &get_env_or_default("CATALOG_SEED", "true"))?;

        Ok(Self { rules, seed })
    }

    /// Build the validator described by this configuration.
    #[must_use]
    pub fn validator(&self) -> ProductValidator {
        ProductValidator::new(self.rules.clone())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            rules: ValidationRules::default(),
            seed: true,
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn pattern_error(key: &str, error: &regex::Error) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), error.to_string())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got {other:?}"),
        )),
    }
}
