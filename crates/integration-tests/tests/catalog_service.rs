//! Integration tests for the product service.
//!
//! These tests drive the public service API end to end over the in-memory
//! repository seeded with the demo products.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use rust_decimal::Decimal;

use product_catalog::CatalogError;
use product_catalog::db::seed::{KEFIR_ID, MILK_ID};
use product_catalog::db::{InMemoryProductRepository, ProductRepository};
use product_catalog::services::ProductService;
use product_catalog::validation::{ProductValidator, ValidationError, ValidationRules};
use product_catalog_core::{ProductId, ProductInput};
use product_catalog_integration_tests::{
    empty_service, fixed_time, kefir, seeded_service, sour_cream,
};

// =============================================================================
// Lifecycle Scenario
// =============================================================================

#[test]
fn test_get_update_delete_scenario() {
    let service = seeded_service();

    let milk = service.get(MILK_ID).unwrap();
    assert_eq!(milk.id, MILK_ID);
    assert_eq!(milk.name, "Молоко");
    assert_eq!(milk.price, Decimal::new(399, 2));

    service.update(MILK_ID, kefir()).unwrap();
    let updated = service.get(MILK_ID).unwrap();
    assert_eq!(updated.id, MILK_ID);
    assert_eq!(updated.name, "Кефир");
    assert_eq!(updated.price, Decimal::new(299, 2));

    service.delete(MILK_ID).unwrap();
    let err = service.get(MILK_ID).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(id) if id == MILK_ID));
    assert!(err.to_string().contains("18a9cc59-c7c7-47e2-ac77-d3127d3b2edf"));
}

#[test]
fn test_create_then_get_round_trips_fields() {
    let service = empty_service();
    let input = sour_cream();

    let id = service.create(input.clone()).unwrap();
    let view = service.get(id).unwrap();

    assert_eq!(view.id, id);
    assert_eq!(view.name, input.name);
    assert_eq!(view.description, input.description);
    assert_eq!(view.price, input.price);
}

#[test]
fn test_listed_views_pass_view_rules() {
    let service = seeded_service();
    service.create(sour_cream()).unwrap();

    let views = service.get_all().unwrap();

    assert_eq!(views.len(), 3);
    for view in &views {
        assert_eq!(service.validator().validate_view(view), Ok(()), "{view:?}");
    }
}

#[test]
fn test_created_products_get_distinct_ids() {
    let service = seeded_service();
    let ids: HashSet<ProductId> = (0..20)
        .map(|_| service.create(sour_cream()).unwrap())
        .collect();

    assert_eq!(ids.len(), 20);
    assert!(!ids.contains(&MILK_ID));
    assert!(!ids.contains(&KEFIR_ID));
    assert_eq!(service.get_all().unwrap().len(), 22);
}

#[test]
fn test_update_preserves_creation_time() {
    let service = seeded_service();
    let id = service.create(sour_cream()).unwrap();

    service.update(id, kefir()).unwrap();

    let stored = service.repository().find_by_id(id).unwrap().unwrap();
    assert_eq!(stored.created_at, Some(fixed_time()));
    assert_eq!(stored.name, "Кефир");
}

// =============================================================================
// Failure Paths
// =============================================================================

#[test]
fn test_update_missing_product_fails_with_not_found() {
    let service = empty_service();
    let id = ProductId::generate();

    let err = service.update(id, kefir()).unwrap_err();

    assert!(matches!(err, CatalogError::NotFound(found) if found == id));
    assert!(service.get_all().unwrap().is_empty());
}

#[test]
fn test_invalid_input_is_never_stored() {
    let service = empty_service();
    let description = || Some("густая деревенская сметана".to_owned());
    let invalid = [
        ProductInput::new("", description(), Decimal::ONE),
        ProductInput::new("Sour cream", description(), Decimal::ONE),
        ProductInput::new("Сметана", None, Decimal::ONE),
        ProductInput::new("Сметана", Some("коротко".to_owned()), Decimal::ONE),
        ProductInput::new("Сметана", description(), Decimal::new(-1, 2)),
        ProductInput::new("Сметана\u{00A0}", description(), Decimal::ONE),
    ];

    for input in invalid {
        let err = service.create(input.clone()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)), "{input:?}");
    }
    assert!(service.get_all().unwrap().is_empty());
}

#[test]
fn test_invalid_update_leaves_product_untouched() {
    let service = seeded_service();
    let before = service.get(KEFIR_ID).unwrap();

    let mut input = kefir();
    input.price = Decimal::NEGATIVE_ONE;
    let err = service.update(KEFIR_ID, input).unwrap_err();

    assert!(matches!(
        err,
        CatalogError::InvalidArgument(ValidationError::NegativePrice(_))
    ));
    assert_eq!(service.get(KEFIR_ID).unwrap(), before);
}

#[test]
fn test_custom_name_pattern_must_match_whole_name() {
    let rules = ValidationRules::default().with_name("[а-яА-Я]{5,10}").unwrap();
    let service =
        ProductService::new(InMemoryProductRepository::new(), ProductValidator::new(rules));
    let mut input = sour_cream();
    input.name = "Сметана 20%".to_owned();

    let err = service.create(input).unwrap_err();

    assert!(matches!(
        err,
        CatalogError::InvalidArgument(ValidationError::InvalidName { .. })
    ));
    assert!(service.create(sour_cream()).is_ok());
}

#[test]
fn test_delete_unknown_id_is_a_noop() {
    let service = seeded_service();
    let id = ProductId::generate();

    service.delete(id).unwrap();

    assert!(matches!(service.get(id), Err(CatalogError::NotFound(_))));
    assert_eq!(service.get_all().unwrap().len(), 2);
}

// =============================================================================
// Audit
// =============================================================================

#[test]
fn test_audit_of_seeded_catalog_is_clean() {
    assert!(seeded_service().audit().unwrap().is_empty());
}

#[test]
fn test_audit_after_create_is_clean() {
    let service = empty_service();
    service.create(sour_cream()).unwrap();
    assert!(service.audit().unwrap().is_empty());
}
