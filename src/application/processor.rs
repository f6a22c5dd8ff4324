use crate::domain::points::compute_points;
use crate::domain::ports::{IdGeneratorRef, ReceiptStoreRef};
use crate::domain::receipt::{Receipt, ReceiptId, ScoredReceipt};
use crate::error::{ReceiptError, Result};
use tracing::{debug, info, warn};

/// The main entry point for receipt processing.
///
/// `ReceiptProcessor` validates and scores submitted receipts, assigns them an
/// id and records them in the store. It is cheap to clone; clones share the
/// same store and id generator.
#[derive(Clone)]
pub struct ReceiptProcessor {
    store: ReceiptStoreRef,
    ids: IdGeneratorRef,
}

impl ReceiptProcessor {
    /// Creates a new `ReceiptProcessor`.
    ///
    /// # Arguments
    ///
    /// * `store` - Where accepted receipts are kept.
    /// * `ids` - Source of identifiers for accepted receipts.
    pub fn new(store: ReceiptStoreRef, ids: IdGeneratorRef) -> Self {
        Self { store, ids }
    }

    /// Accepts a receipt and returns its newly assigned id.
    ///
    /// Invalid receipts are rejected before anything is stored.
    pub fn process(&self, receipt: Receipt) -> Result<ReceiptId> {
        if let Err(err) = receipt.validate() {
            warn!(retailer = %receipt.retailer, error = %err, "Rejected receipt");
            return Err(err);
        }

        let points = compute_points(&receipt);
        let id = self.ids.next_id();
        self.store
            .put(ScoredReceipt::new(id.clone(), receipt, points))?;

        info!(%id, points, "Accepted receipt");
        Ok(id)
    }

    /// Returns the points recorded for a previously accepted receipt.
    pub fn points(&self, id: &ReceiptId) -> Result<u64> {
        self.receipt(id).map(|receipt| receipt.points())
    }

    /// Returns the full stored entry for a previously accepted receipt.
    pub fn receipt(&self, id: &ReceiptId) -> Result<ScoredReceipt> {
        self.store.get(id)?.ok_or_else(|| {
            debug!(%id, "Lookup for unknown receipt");
            ReceiptError::NotFound(id.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::IdGenerator;
    use crate::domain::receipt::Item;
    use crate::infrastructure::id::UuidGenerator;
    use crate::infrastructure::in_memory::InMemoryReceiptStore;
    use std::sync::Arc;

    struct FixedId(&'static str);

    impl IdGenerator for FixedId {
        fn next_id(&self) -> ReceiptId {
            ReceiptId::new(self.0)
        }
    }

    fn target_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "14:30".to_string(),
            total: "35.00".to_string(),
            items: vec![
                Item::new("Item A", "12.00"),
                Item::new("Item B", "3.00"),
                Item::new("Long Item Desc", "4.75"),
            ],
        }
    }

    #[test]
    fn test_process_then_lookup_points() {
        let processor = ReceiptProcessor::new(
            Arc::new(InMemoryReceiptStore::new()),
            Arc::new(FixedId("receipt-1")),
        );

        let id = processor.process(target_receipt()).unwrap();
        assert_eq!(id.as_str(), "receipt-1");
        assert_eq!(processor.points(&id).unwrap(), 106);

        let stored = processor.receipt(&id).unwrap();
        assert_eq!(stored.receipt(), &target_receipt());
    }

    #[test]
    fn test_invalid_receipt_is_not_stored() {
        let store = InMemoryReceiptStore::new();
        let processor =
            ReceiptProcessor::new(Arc::new(store.clone()), Arc::new(UuidGenerator::new()));

        let mut receipt = target_receipt();
        receipt.total = "35".to_string();

        assert!(matches!(
            processor.process(receipt),
            Err(ReceiptError::InvalidReceipt(_))
        ));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let processor = ReceiptProcessor::new(
            Arc::new(InMemoryReceiptStore::new()),
            Arc::new(UuidGenerator::new()),
        );

        let result = processor.points(&ReceiptId::new("nope"));
        assert!(matches!(result, Err(ReceiptError::NotFound(id)) if id.as_str() == "nope"));
    }

    #[test]
    fn test_repeated_id_surfaces_duplicate_error() {
        let processor = ReceiptProcessor::new(
            Arc::new(InMemoryReceiptStore::new()),
            Arc::new(FixedId("same")),
        );

        processor.process(target_receipt()).unwrap();
        assert!(matches!(
            processor.process(target_receipt()),
            Err(ReceiptError::DuplicateId(_))
        ));
        assert_eq!(processor.points(&ReceiptId::new("same")).unwrap(), 106);
    }
}
