use crate::domain::receipt::ReceiptId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("Invalid receipt: {0}")]
    InvalidReceipt(String),
    #[error("No receipt found for id {0}")]
    NotFound(ReceiptId),
    #[error("Receipt id {0} is already in use")]
    DuplicateId(ReceiptId),
    #[error("Receipt store is unavailable: {0}")]
    StoreUnavailable(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
