use super::common::*;
use crate::receipts::money::Cents;
use crate::receipts::validation::{validate, ValidationError};
use chrono::{NaiveDate, NaiveTime};

#[test]
fn reference_receipt_validates_into_parsed_fields() {
    let validated = validate(&target_receipt()).expect("valid receipt");

    assert_eq!(
        validated.purchase_date,
        NaiveDate::from_ymd_opt(2022, 1, 1).expect("valid date")
    );
    assert_eq!(
        validated.purchase_time,
        NaiveTime::from_hms_opt(13, 1, 0).expect("valid time")
    );
    assert_eq!(validated.total, Cents::from_cents(3535));
    assert_eq!(validated.items.len(), 5);
    assert_eq!(
        validated.items[4].short_description,
        "   Klarbrunn 12-PK 12 FL OZ  "
    );
}

#[test]
fn rejects_empty_and_symbol_retailers() {
    let mut receipt = target_receipt();
    receipt.retailer = String::new();
    assert_eq!(validate(&receipt), Err(ValidationError::InvalidRetailer));

    receipt.retailer = "Target$".to_string();
    assert_eq!(validate(&receipt), Err(ValidationError::InvalidRetailer));
}

#[test]
fn rejects_impossible_dates_and_times() {
    let mut receipt = target_receipt();
    receipt.purchase_date = "2022-13-01".to_string();
    assert_eq!(validate(&receipt), Err(ValidationError::InvalidPurchaseDate));

    let mut receipt = target_receipt();
    receipt.purchase_time = "25:00".to_string();
    assert_eq!(validate(&receipt), Err(ValidationError::InvalidPurchaseTime));
}

#[test]
fn rejects_receipts_without_items() {
    let mut receipt = target_receipt();
    receipt.items.clear();
    assert_eq!(validate(&receipt), Err(ValidationError::EmptyItems));
}

#[test]
fn rejects_item_descriptions_and_prices_with_their_index() {
    let mut receipt = target_receipt();
    receipt.items[2].short_description = String::new();
    assert_eq!(
        validate(&receipt),
        Err(ValidationError::InvalidItemDescription { index: 2 })
    );

    let mut receipt = target_receipt();
    receipt.items[1].short_description = "Pizza & Wings".to_string();
    assert_eq!(
        validate(&receipt),
        Err(ValidationError::InvalidItemDescription { index: 1 })
    );

    let mut receipt = target_receipt();
    receipt.items[3].price = "6.5".to_string();
    assert_eq!(
        validate(&receipt),
        Err(ValidationError::InvalidItemPrice { index: 3 })
    );
}

#[test]
fn rejects_totals_without_cents() {
    let mut receipt = target_receipt();
    receipt.total = "35".to_string();
    assert_eq!(validate(&receipt), Err(ValidationError::InvalidTotal));
}

#[test]
fn reports_the_first_violation_only() {
    let mut receipt = target_receipt();
    receipt.retailer = "Target$".to_string();
    receipt.purchase_date = "yesterday".to_string();
    receipt.items.clear();
    receipt.total = "35".to_string();
    assert_eq!(validate(&receipt), Err(ValidationError::InvalidRetailer));

    let mut receipt = target_receipt();
    receipt.items[0].short_description = "Dew!".to_string();
    receipt.items[0].price = "free".to_string();
    assert_eq!(
        validate(&receipt),
        Err(ValidationError::InvalidItemDescription { index: 0 })
    );
}

#[test]
fn validation_messages_are_distinct() {
    let messages = [
        ValidationError::InvalidRetailer,
        ValidationError::InvalidPurchaseDate,
        ValidationError::InvalidPurchaseTime,
        ValidationError::EmptyItems,
        ValidationError::InvalidItemDescription { index: 0 },
        ValidationError::InvalidItemPrice { index: 0 },
        ValidationError::InvalidTotal,
    ]
    .map(|err| err.to_string());

    for (i, left) in messages.iter().enumerate() {
        for right in &messages[i + 1..] {
            assert_ne!(left, right);
        }
    }
}
