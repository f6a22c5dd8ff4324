use crate::error::{ReceiptError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static TOTAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d{2}$").expect("total pattern is a valid regex")
});

/// Opaque identifier assigned to a receipt when it is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ReceiptId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One purchased line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub short_description: String,
    /// Decimal text with two fraction digits. Not validated on submission.
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A purchase event as submitted by a client.
///
/// Missing JSON fields deserialize to empty values so that [`Receipt::validate`]
/// can reject them uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

impl Receipt {
    /// Checks the fields a receipt must carry before it may be scored.
    pub fn validate(&self) -> Result<()> {
        let missing = [
            ("retailer", &self.retailer),
            ("purchaseDate", &self.purchase_date),
            ("purchaseTime", &self.purchase_time),
            ("total", &self.total),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty());

        if let Some((field, _)) = missing {
            return Err(ReceiptError::InvalidReceipt(format!("{field} is required")));
        }
        if self.items.is_empty() {
            return Err(ReceiptError::InvalidReceipt(
                "at least one item is required".to_string(),
            ));
        }
        if !TOTAL_PATTERN.is_match(&self.total) {
            return Err(ReceiptError::InvalidReceipt(format!(
                "total {:?} must have exactly two fraction digits",
                self.total
            )));
        }
        Ok(())
    }
}

/// A receipt that has been accepted, scored and given an id.
///
/// Fields are private so that id and points cannot change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredReceipt {
    id: ReceiptId,
    points: u64,
    receipt: Receipt,
}

impl ScoredReceipt {
    pub fn new(id: ReceiptId, receipt: Receipt, points: u64) -> Self {
        Self {
            id,
            points,
            receipt,
        }
    }

    pub fn id(&self) -> &ReceiptId {
        &self.id
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn receipt(&self) -> &Receipt {
        &self.receipt
    }
}
