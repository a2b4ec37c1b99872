//! Demo products loaded by [`InMemoryProductRepository::seeded`].
//!
//! [`InMemoryProductRepository::seeded`]: super::InMemoryProductRepository::seeded

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use uuid::uuid;

use product_catalog_core::{Product, ProductId};

/// ID of the seeded "Молоко" product.
pub const MILK_ID: ProductId = ProductId::new(uuid!("18a9cc59-c7c7-47e2-ac77-d3127d3b2edf"));

/// ID of the seeded "Кефир" product.
pub const KEFIR_ID: ProductId = ProductId::new(uuid!("28a9cc59-c7c7-47e2-ac77-d3127d3b2eda"));

/// The demo products.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product::new(
            "Молоко",
            Some("это однозначно коровье молоко".to_owned()),
            Decimal::new(399, 2),
        )
        .with_id(MILK_ID)
        .with_created_at(at(2023, 10, 29, 17, 30)),
        Product::new(
            "Кефир",
            Some("это однозначно кефир".to_owned()),
            Decimal::new(299, 2),
        )
        .with_id(KEFIR_ID)
        .with_created_at(at(2023, 10, 29, 17, 50)),
    ]
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default();
    date.and_time(time)
}
