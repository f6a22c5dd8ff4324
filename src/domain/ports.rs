use super::receipt::{ReceiptId, ScoredReceipt};
use crate::error::Result;
use std::sync::Arc;

/// Storage for accepted receipts, shared by every in-flight request.
///
/// Entries are write-once: `put` never replaces an existing id.
pub trait ReceiptStore: Send + Sync {
    fn put(&self, receipt: ScoredReceipt) -> Result<()>;
    fn get(&self, id: &ReceiptId) -> Result<Option<ScoredReceipt>>;
}

/// Source of fresh receipt identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ReceiptId;
}

pub type ReceiptStoreRef = Arc<dyn ReceiptStore>;
pub type IdGeneratorRef = Arc<dyn IdGenerator>;
