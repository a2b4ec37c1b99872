//! Conversions between product shapes.
//!
//! - [`to_entity`] builds an unsaved entity from caller input.
//! - [`to_view`] projects an entity for readers.
//! - [`merge`] applies an update to an existing entity.

use product_catalog_core::{Product, ProductInput, ProductView};

/// Build a new, unsaved product from input.
///
/// `id` and `created_at` are left unset; the repository and service fill them in.
#[must_use]
pub fn to_entity(input: ProductInput) -> Product {
    Product {
        id: None,
        name: input.name,
        description: input.description,
        price: input.price,
        created_at: None,
    }
}

/// Project a stored product to its read shape.
///
/// Returns `None` for a product that has never been saved (no `id`).
#[must_use]
pub fn to_view(product: Product) -> Option<ProductView> {
    Some(ProductView {
        id: product.id?,
        name: product.name,
        description: product.description,
        price: product.price,
    })
}

/// Apply `input` on top of `existing`.
///
/// `id` and `created_at` come from `existing`; `name`, `description` and
/// `price` are all replaced by `input`, including a `None` description.
#[must_use]
pub fn merge(existing: Product, input: ProductInput) -> Product {
    Product {
        name: input.name,
        description: input.description,
        price: input.price,
        ..existing
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

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

    fn kefir_input() -> ProductInput {
        ProductInput::new(
            "Кефир",
            Some("это однозначно кефир".to_owned()),
            Decimal::new(299, 2),
        )
    }

    #[test]
    fn test_to_entity_leaves_identity_unset() {
        let product = to_entity(kefir_input());
        assert_eq!(product.id, None);
        assert_eq!(product.created_at, None);
        assert_eq!(product.name, "Кефир");
        assert_eq!(product.description.as_deref(), Some("это однозначно кефир"));
        assert_eq!(product.price, Decimal::new(299, 2));
    }

    #[test]
    fn test_to_view_drops_timestamp() {
        let product = milk();
        let id = product.id.unwrap();
        let view = to_view(product).unwrap();
        assert_eq!(view.id, id);
        assert_eq!(view.name, "Молоко");
        assert_eq!(view.price, Decimal::new(399, 2));
    }

    #[test]
    fn test_to_view_of_unsaved_product_is_none() {
        assert_eq!(to_view(to_entity(kefir_input())), None);
    }

    #[test]
    fn test_merge_preserves_identity_and_creation_time() {
        let existing = milk();
        let merged = merge(existing.clone(), kefir_input());
        assert_eq!(merged.id, existing.id);
        assert_eq!(merged.created_at, existing.created_at);
        assert_eq!(merged.name, "Кефир");
        assert_eq!(merged.description.as_deref(), Some("это однозначно кефир"));
        assert_eq!(merged.price, Decimal::new(299, 2));
    }

    #[test]
    fn test_merge_overwrites_description_with_none() {
        let mut input = kefir_input();
        input.description = None;
        let merged = merge(milk(), input);
        assert_eq!(merged.description, None);
    }
}
