use crate::domain::receipt_id::ReceiptId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("Invalid receipt: {0}")]
    InvalidReceipt(String),
    #[error("Receipt ID not found: {0}")]
    NotFound(ReceiptId),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
