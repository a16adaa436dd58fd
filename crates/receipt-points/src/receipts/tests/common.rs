use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{Item, Receipt, ReceiptId, ScoredReceipt};
use crate::receipts::repository::{InMemoryReceiptStore, ReceiptStore, StoreError};
use crate::receipts::service::ReceiptService;
use crate::receipts::validation::validate;
use crate::receipts::{receipt_router, PointsEngine, PointsOutcome};

pub(super) fn item(description: &str, price: &str) -> Item {
    Item {
        short_description: description.to_string(),
        price: price.to_string(),
    }
}

pub(super) fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        total: "35.35".to_string(),
    }
}

pub(super) fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
        ],
        total: "9.00".to_string(),
    }
}

pub(super) fn score(receipt: &Receipt) -> PointsOutcome {
    let validated = validate(receipt).expect("fixture receipt validates");
    PointsEngine::new().score(&validated)
}

/// Sums the leading `"{n} points"` token of each line.
pub(super) fn sum_of_line_prefixes(lines: &[String]) -> u64 {
    lines
        .iter()
        .map(|line| {
            line.split_once(" points")
                .and_then(|(prefix, _)| prefix.parse::<u64>().ok())
                .expect("line starts with a point count")
        })
        .sum()
}

pub(super) fn build_service() -> (ReceiptService<InMemoryReceiptStore>, InMemoryReceiptStore) {
    let store = InMemoryReceiptStore::new();
    let service = ReceiptService::new(Arc::new(store.clone()));
    (service, store)
}

pub(super) fn router_with_service(service: ReceiptService<InMemoryReceiptStore>) -> axum::Router {
    receipt_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Store whose lock is always unavailable.
pub(super) struct UnavailableStore;

impl ReceiptStore for UnavailableStore {
    fn put(&self, _record: ScoredReceipt) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("offline".to_string()))
    }

    fn get(&self, _id: &ReceiptId) -> Result<Option<ScoredReceipt>, StoreError> {
        Err(StoreError::Unavailable("offline".to_string()))
    }
}
