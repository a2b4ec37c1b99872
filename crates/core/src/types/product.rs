//! Product shapes.
//!
//! - [`Product`] is the stored entity, owned by the repository.
//! - [`ProductInput`] is what callers send to create or update a product.
//! - [`ProductView`] is what readers get back.
//!
//! Prices are exact decimals and serialize as strings (`"3.99"`), never floats.
//! Timestamps are local date-times without an offset (`2023-10-29T17:30:00`).

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductId;

/// A catalog product (entity).
///
/// `id` is assigned by the repository on first save and never changes after.
/// `created_at` is stamped once at creation and survives every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID. `None` until the product is first saved.
    pub id: Option<ProductId>,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Decimal,
    /// When the product was created. `None` until stamped by the service.
    pub created_at: Option<NaiveDateTime>,
}

impl Product {
    /// Create a product that has not been saved yet.
    #[must_use]
    pub fn new(name: impl Into<String>, description: Option<String>, price: Decimal) -> Self {
        Self {
            id: None,
            name: name.into(),
            description,
            price,
            created_at: None,
        }
    }

    /// Set the identifier.
    #[must_use]
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Payload for creating or updating a product.
///
/// Carries no identifier and no timestamp; both are server-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
}

impl ProductInput {
    /// Creates a new product input.
    #[must_use]
    pub fn new(name: impl Into<String>, description: Option<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description,
            price,
        }
    }
}

/// Read-side projection of a product.
///
/// Does not expose `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn milk() -> Product {
        let created_at = NaiveDate::from_ymd_opt(2023, 10, 29)
            .unwrap()
            .and_hms_opt(17, 30, 0)
            .unwrap();
        Product::new(
            "Молоко",
            Some("это однозначно коровье молоко".to_owned()),
            Decimal::new(399, 2),
        )
        .with_id("18a9cc59-c7c7-47e2-ac77-d3127d3b2edf".parse().unwrap())
        .with_created_at(created_at)
    }

    #[test]
    fn test_new_product_is_unsaved() {
        let product = Product::new("Молоко", None, Decimal::ONE);
        assert!(product.id.is_none());
        assert!(product.created_at.is_none());
    }

    #[test]
    fn test_entity_wire_format() {
        let json = serde_json::to_value(milk()).unwrap();
        assert_eq!(json["id"], "18a9cc59-c7c7-47e2-ac77-d3127d3b2edf");
        assert_eq!(json["price"], "3.99");
        assert_eq!(json["createdAt"], "2023-10-29T17:30:00");
    }

    #[test]
    fn test_input_description_defaults_to_none() {
        let input: ProductInput =
            serde_json::from_str(r#"{"name":"Кефир","price":"2.99"}"#).unwrap();
        assert_eq!(input.description, None);
        assert_eq!(input.price, Decimal::new(299, 2));
    }

    #[test]
    fn test_view_has_no_timestamp() {
        let view = ProductView {
            id: ProductId::generate(),
            name: "Кефир".to_owned(),
            description: None,
            price: Decimal::new(299, 2),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("createdAt").is_none());
        assert!(json.get("created_at").is_none());
    }
}
