#![allow(dead_code)]

use rand::Rng;
use receipt_processor::application::processor::ReceiptProcessor;
use receipt_processor::domain::ports::IdGenerator;
use receipt_processor::domain::receipt::{Item, Receipt, ReceiptId};
use receipt_processor::infrastructure::in_memory::InMemoryReceiptStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out `receipt-1`, `receipt-2`, ... in order.
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> ReceiptId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        ReceiptId::new(format!("receipt-{n}"))
    }
}

pub fn processor_with_store() -> (ReceiptProcessor, InMemoryReceiptStore) {
    let store = InMemoryReceiptStore::new();
    let processor = ReceiptProcessor::new(
        Arc::new(store.clone()),
        Arc::new(SequentialIds::default()),
    );
    (processor, store)
}

/// The worked example that scores 106 points.
pub fn target_receipt() -> Receipt {
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

pub fn random_receipt<R: Rng>(rng: &mut R) -> Receipt {
    const WORDS: [&str; 6] = ["Target", "M&M", "Corner", "Market", "Walgreens", "-"];
    const DESCRIPTIONS: [&str; 6] = ["Item A", "BBB BBB", "", "  Gatorade  ", "Pepsi", "é"];

    let retailer = (0..rng.gen_range(1..4))
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ");
    let items = (0..rng.gen_range(1..8))
        .map(|_| {
            let description = DESCRIPTIONS[rng.gen_range(0..DESCRIPTIONS.len())];
            let price = if rng.gen_bool(0.1) {
                "n/a".to_string()
            } else {
                random_amount(rng)
            };
            Item::new(description, price)
        })
        .collect();

    Receipt {
        retailer,
        purchase_date: format!(
            "2022-{:02}-{:02}",
            rng.gen_range(1..13),
            rng.gen_range(1..29)
        ),
        purchase_time: format!("{:02}:{:02}", rng.gen_range(0..24), rng.gen_range(0..60)),
        items,
        total: random_amount(rng),
    }
}

fn random_amount<R: Rng>(rng: &mut R) -> String {
    format!("{}.{:02}", rng.gen_range(0..500), rng.gen_range(0..100))
}
