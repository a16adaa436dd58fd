use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, warn};

use super::domain::{Receipt, ValidatedItem, ValidatedReceipt};
use super::money::Cents;

/// First rule a submitted receipt violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("retailer name is invalid")]
    InvalidRetailer,
    #[error("purchaseDate must be in YYYY-MM-DD format")]
    InvalidPurchaseDate,
    #[error("purchaseTime must be in HH:mm 24-hour format")]
    InvalidPurchaseTime,
    #[error("items array must have at least one item")]
    EmptyItems,
    #[error("item shortDescription is invalid (item {index})")]
    InvalidItemDescription { index: usize },
    #[error("item price must be a valid decimal number (item {index})")]
    InvalidItemPrice { index: usize },
    #[error("total must be a valid decimal number")]
    InvalidTotal,
}

/// Checks the receipt in a fixed order and stops at the first violation.
pub fn validate(receipt: &Receipt) -> Result<ValidatedReceipt, ValidationError> {
    if !is_valid_retailer(&receipt.retailer) {
        warn!(retailer = %receipt.retailer, "retailer name is empty or contains invalid characters");
        return Err(ValidationError::InvalidRetailer);
    }

    let purchase_date = parse_purchase_date(&receipt.purchase_date).ok_or_else(|| {
        warn!(purchase_date = %receipt.purchase_date, "purchaseDate is not YYYY-MM-DD");
        ValidationError::InvalidPurchaseDate
    })?;

    let purchase_time = parse_purchase_time(&receipt.purchase_time).ok_or_else(|| {
        warn!(purchase_time = %receipt.purchase_time, "purchaseTime is not HH:MM");
        ValidationError::InvalidPurchaseTime
    })?;

    if receipt.items.is_empty() {
        warn!("items array is empty");
        return Err(ValidationError::EmptyItems);
    }

    let mut items = Vec::with_capacity(receipt.items.len());
    for (index, item) in receipt.items.iter().enumerate() {
        if !is_valid_description(&item.short_description) {
            warn!(
                index,
                short_description = %item.short_description,
                "item shortDescription is empty or contains invalid characters"
            );
            return Err(ValidationError::InvalidItemDescription { index });
        }

        let price = Cents::parse(&item.price).ok_or_else(|| {
            warn!(index, price = %item.price, "item price is not a two-decimal amount");
            ValidationError::InvalidItemPrice { index }
        })?;

        items.push(ValidatedItem {
            short_description: item.short_description.clone(),
            price,
        });
    }

    let total = Cents::parse(&receipt.total).ok_or_else(|| {
        warn!(total = %receipt.total, "total is not a two-decimal amount");
        ValidationError::InvalidTotal
    })?;

    debug!(retailer = %receipt.retailer, items = items.len(), "receipt passed validation");

    Ok(ValidatedReceipt {
        retailer: receipt.retailer.clone(),
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

fn is_valid_retailer(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '&'))
}

fn is_valid_description(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-'))
}

/// Strict `YYYY-MM-DD`; chrono alone would also accept single-digit fields.
fn parse_purchase_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if !raw.is_ascii() || bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let year = digits(&raw[0..4])?;
    let month = digits(&raw[5..7])?;
    let day = digits(&raw[8..10])?;
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Strict 24-hour `HH:MM`.
fn parse_purchase_time(raw: &str) -> Option<NaiveTime> {
    let bytes = raw.as_bytes();
    if !raw.is_ascii() || bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }

    let hour = digits(&raw[0..2])?;
    let minute = digits(&raw[3..5])?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn digits(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
