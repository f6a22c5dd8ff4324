use crate::domain::ports::ReceiptStore;
use crate::domain::receipt::{ReceiptId, ScoredReceipt};
use crate::error::{ReceiptError, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, PoisonError, RwLock};

/// A thread-safe in-memory store for scored receipts.
///
/// Uses `Arc<RwLock<HashMap<ReceiptId, ScoredReceipt>>>`: lookups share the
/// read lock, inserts take the write lock. Nothing survives a restart.
#[derive(Default, Clone)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<ReceiptId, ScoredReceipt>>>,
}

impl InMemoryReceiptStore {
    /// Creates a new, empty in-memory receipt store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of receipts stored so far.
    pub fn len(&self) -> Result<usize> {
        let receipts = self.receipts.read().map_err(poisoned)?;
        Ok(receipts.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn put(&self, receipt: ScoredReceipt) -> Result<()> {
        let mut receipts = self.receipts.write().map_err(poisoned)?;
        match receipts.entry(receipt.id().clone()) {
            Entry::Occupied(entry) => Err(ReceiptError::DuplicateId(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(receipt);
                Ok(())
            }
        }
    }

    fn get(&self, id: &ReceiptId) -> Result<Option<ScoredReceipt>> {
        let receipts = self.receipts.read().map_err(poisoned)?;
        Ok(receipts.get(id).cloned())
    }
}

fn poisoned<T>(err: PoisonError<T>) -> ReceiptError {
    ReceiptError::StoreUnavailable(err.to_string())
}
