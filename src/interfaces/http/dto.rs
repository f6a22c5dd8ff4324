use crate::domain::receipt::ReceiptId;
use serde::Serialize;

/// Response to a successfully processed receipt.
#[derive(Debug, Serialize)]
pub struct ProcessReceiptResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}
