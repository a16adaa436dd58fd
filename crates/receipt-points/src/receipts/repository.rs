use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::domain::{ReceiptId, ScoredReceipt};

/// Storage abstraction so the service can be exercised in isolation.
pub trait ReceiptStore: Send + Sync {
    fn put(&self, record: ScoredReceipt) -> Result<(), StoreError>;
    fn get(&self, id: &ReceiptId) -> Result<Option<ScoredReceipt>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("receipt {0} already exists")]
    Conflict(ReceiptId),
    #[error("receipt store unavailable: {0}")]
    Unavailable(String),
}

/// Process-lifetime store. Writes take the exclusive lock, reads share it.
#[derive(Debug, Default, Clone)]
pub struct InMemoryReceiptStore {
    records: Arc<RwLock<HashMap<ReceiptId, ScoredReceipt>>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let guard = self.records.read().map_err(|_| poisoned())?;
        Ok(guard.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        self.len().map(|count| count == 0)
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn put(&self, record: ScoredReceipt) -> Result<(), StoreError> {
        let mut guard = self.records.write().map_err(|_| poisoned())?;
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict(record.id));
        }
        guard.insert(record.id, record);
        Ok(())
    }

    fn get(&self, id: &ReceiptId) -> Result<Option<ScoredReceipt>, StoreError> {
        let guard = self.records.read().map_err(|_| poisoned())?;
        Ok(guard.get(id).cloned())
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("receipt store lock poisoned".to_string())
}
