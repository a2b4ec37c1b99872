//! Field-level acceptance rules for products.
//!
//! One validator serves every product shape. The [`ValidationMode`] decides
//! which rules apply:
//!
//! | Rule                               | `Input` | `Entity` | `View` |
//! |------------------------------------|---------|----------|--------|
//! | `name` matches name pattern        | yes     | yes      | yes    |
//! | `description` matches its pattern  | yes     | yes      | -      |
//! | `description` is present           | yes     | yes      | yes    |
//! | `price` is not negative            | yes     | yes      | yes    |
//! | `created_at` is present            | -       | yes      | -      |
//!
//! Rules run in the order of the table; the first failure is returned.
//! A missing `name` or `price` cannot be expressed in the product types, so
//! those rules hold by construction. The same goes for the `id` of a
//! [`ProductView`], which is never optional.
//!
//! Patterns must match the whole value, not a substring: every pattern is
//! wrapped as `^(?:...)$` when [`ValidationRules`] compiles it.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

use product_catalog_core::{Product, ProductInput, ProductView};

/// Default name rule: 5-10 Cyrillic letters or ASCII whitespace.
pub const DEFAULT_NAME_PATTERN: &str = r"[а-яёА-ЯЁ \t\n\x0B\f\r]{5,10}";

/// Default description rule: 10-30 Cyrillic letters or ASCII whitespace.
pub const DEFAULT_DESCRIPTION_PATTERN: &str = r"[а-яёА-ЯЁ \t\n\x0B\f\r]{10,30}";

static DEFAULT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| anchored(DEFAULT_NAME_PATTERN).expect("Invalid regex"));

static DEFAULT_DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| anchored(DEFAULT_DESCRIPTION_PATTERN).expect("Invalid regex"));

/// Compile `pattern` so that it only matches a whole value.
///
/// The pattern is checked on its own first, so a stray `)` cannot escape the
/// surrounding group.
///
/// # Errors
///
/// Returns `regex::Error` if the pattern does not compile.
pub fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(pattern)?;
    Regex::new(&format!("^(?:{pattern})$"))
}

/// Errors produced when a product violates a rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is empty or does not match the name pattern.
    #[error("product name must not be empty and must match {pattern}")]
    InvalidName {
        /// The pattern that was applied.
        pattern: String,
    },
    /// The description does not match the description pattern.
    #[error("product description must match {pattern}")]
    InvalidDescription {
        /// The pattern that was applied.
        pattern: String,
    },
    /// The description is absent.
    #[error("product description must not be null")]
    MissingDescription,
    /// The price is below zero.
    #[error("product price must not be negative (got {0})")]
    NegativePrice(Decimal),
    /// The creation timestamp is absent.
    #[error("product creation time must not be null")]
    MissingCreatedAt,
}

/// Which product shape is being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Caller-supplied create/update payload.
    Input,
    /// A stored (or about to be stored) entity.
    Entity,
    /// A read projection; only requires the description to be present.
    View,
}

/// Compiled patterns used by [`ProductValidator`].
///
/// Both patterns are full-match: `[a-z]{5,10}` rejects a 16-letter name.
#[derive(Debug, Clone)]
pub struct ValidationRules {
    name: Regex,
    description: Regex,
}

impl ValidationRules {
    /// Compile custom name and description patterns.
    ///
    /// # Errors
    ///
    /// Returns `regex::Error` if either pattern does not compile.
    pub fn new(name: &str, description: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name: anchored(name)?,
            description: anchored(description)?,
        })
    }

    /// Replace the name pattern.
    ///
    /// # Errors
    ///
    /// Returns `regex::Error` if the pattern does not compile.
    pub fn with_name(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.name = anchored(pattern)?;
        Ok(self)
    }

    /// Replace the description pattern.
    ///
    /// # Errors
    ///
    /// Returns `regex::Error` if the pattern does not compile.
    pub fn with_description(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.description = anchored(pattern)?;
        Ok(self)
    }

    /// The compiled name pattern, anchors included.
    #[must_use]
    pub fn name_pattern(&self) -> &str {
        self.name.as_str()
    }

    /// The compiled description pattern, anchors included.
    #[must_use]
    pub fn description_pattern(&self) -> &str {
        self.description.as_str()
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME_RE.clone(),
            description: DEFAULT_DESCRIPTION_RE.clone(),
        }
    }
}

/// The fields every product shape shares, borrowed for validation.
#[derive(Debug, Clone, Copy)]
pub struct ProductFields<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: Decimal,
    pub created_at: Option<NaiveDateTime>,
}

impl<'a> From<&'a Product> for ProductFields<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            name: &product.name,
            description: product.description.as_deref(),
            price: product.price,
            created_at: product.created_at,
        }
    }
}

impl<'a> From<&'a ProductInput> for ProductFields<'a> {
    fn from(input: &'a ProductInput) -> Self {
        Self {
            name: &input.name,
            description: input.description.as_deref(),
            price: input.price,
            created_at: None,
        }
    }
}

impl<'a> From<&'a ProductView> for ProductFields<'a> {
    fn from(view: &'a ProductView) -> Self {
        Self {
            name: &view.name,
            description: view.description.as_deref(),
            price: view.price,
            created_at: None,
        }
    }
}

/// Stateless product validator.
#[derive(Debug, Clone, Default)]
pub struct ProductValidator {
    rules: ValidationRules,
}

impl ProductValidator {
    /// Create a validator with custom rules.
    #[must_use]
    pub const fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    /// Validate any product shape in the given mode.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] hit, in rule order.
    pub fn validate<'a>(
        &self,
        fields: impl Into<ProductFields<'a>>,
        mode: ValidationMode,
    ) -> Result<(), ValidationError> {
        let fields = fields.into();

        self.check_name(fields.name)?;
        match mode {
            ValidationMode::Input | ValidationMode::Entity => {
                self.check_description(fields.description)?;
            }
            ValidationMode::View => {
                fields.description.ok_or(ValidationError::MissingDescription)?;
            }
        }
        check_price(fields.price)?;
        if mode == ValidationMode::Entity {
            fields.created_at.ok_or(ValidationError::MissingCreatedAt)?;
        }
        Ok(())
    }

    /// Validate a create/update payload.
    ///
    /// # Errors
    ///
    /// See [`ProductValidator::validate`].
    pub fn validate_input(&self, input: &ProductInput) -> Result<(), ValidationError> {
        self.validate(input, ValidationMode::Input)
    }

    /// Validate a stored entity, including its creation timestamp.
    ///
    /// # Errors
    ///
    /// See [`ProductValidator::validate`].
    pub fn validate_entity(&self, product: &Product) -> Result<(), ValidationError> {
        self.validate(product, ValidationMode::Entity)
    }

    /// Validate a read projection.
    ///
    /// # Errors
    ///
    /// See [`ProductValidator::validate`].
    pub fn validate_view(&self, view: &ProductView) -> Result<(), ValidationError> {
        self.validate(view, ValidationMode::View)
    }

    /// Check a name against the name pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidName`] if the name is empty or does not match.
    pub fn check_name(&self, name: &str) -> Result<(), ValidationError> {
        if name.is_empty() || !self.rules.name.is_match(name) {
            return Err(ValidationError::InvalidName {
                pattern: self.rules.name.as_str().to_owned(),
            });
        }
        Ok(())
    }

    fn check_description(&self, description: Option<&str>) -> Result<(), ValidationError> {
        let description = description.ok_or(ValidationError::MissingDescription)?;
        if !self.rules.description.is_match(description) {
            return Err(ValidationError::InvalidDescription {
                pattern: self.rules.description.as_str().to_owned(),
            });
        }
        Ok(())
    }
}

fn check_price(price: Decimal) -> Result<(), ValidationError> {
    if price < Decimal::ZERO {
        return Err(ValidationError::NegativePrice(price));
    }
    Ok(())
}
