use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{BreakdownView, Receipt, ReceiptId, ScoredReceipt};
use super::engine::{PointsEngine, PointsOutcome};
use super::repository::{ReceiptStore, StoreError};
use super::validation::{validate, ValidationError};

/// Service composing validation, scoring, and the receipt store.
pub struct ReceiptService<S> {
    store: Arc<S>,
    engine: PointsEngine,
}

impl<S> ReceiptService<S>
where
    S: ReceiptStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            engine: PointsEngine::new(),
        }
    }

    /// Validate and score without storing anything.
    pub fn score(&self, receipt: &Receipt) -> Result<PointsOutcome, ReceiptError> {
        let validated = validate(receipt)?;
        Ok(self.engine.score(&validated))
    }

    /// Validate, score, and store a submission under a fresh identifier.
    pub fn process(&self, receipt: Receipt) -> Result<ScoredReceipt, ReceiptError> {
        let outcome = self.score(&receipt)?;

        let record = ScoredReceipt {
            id: ReceiptId::generate(),
            points: outcome.points,
            breakdown: outcome.breakdown(),
            receipt,
        };

        self.store.put(record.clone())?;
        info!(id = %record.id, points = record.points, "receipt processed");
        Ok(record)
    }

    /// Resolve a raw path identifier to its stored record.
    pub fn lookup(&self, raw_id: &str) -> Result<ScoredReceipt, ReceiptError> {
        let id = ReceiptId::parse(raw_id).ok_or_else(|| {
            warn!(raw_id, "receipt id is not a well-formed identifier");
            ReceiptError::InvalidIdentifier(raw_id.to_string())
        })?;

        match self.store.get(&id)? {
            Some(record) => Ok(record),
            None => {
                warn!(%id, "receipt not found");
                Err(ReceiptError::NotFound(id))
            }
        }
    }

    pub fn points(&self, raw_id: &str) -> Result<u64, ReceiptError> {
        let record = self.lookup(raw_id)?;
        info!(id = %record.id, points = record.points, "points retrieved");
        Ok(record.points)
    }

    pub fn breakdown(&self, raw_id: &str) -> Result<BreakdownView, ReceiptError> {
        let record = self.lookup(raw_id)?;
        info!(id = %record.id, "breakdown retrieved");
        Ok(record.breakdown_view())
    }
}

/// Failures at the receipt request boundary.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error("Invalid JSON format")]
    MalformedRequest(#[from] serde_json::Error),
    #[error("Invalid receipt: {0}")]
    Validation(#[from] ValidationError),
    #[error("Invalid ID format")]
    InvalidIdentifier(String),
    #[error("Receipt not found")]
    NotFound(ReceiptId),
    #[error(transparent)]
    Store(#[from] StoreError),
}
