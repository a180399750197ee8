use super::points::Points;
use super::receipt_id::ReceiptId;
use async_trait::async_trait;

/// Storage for scored receipts.
///
/// Each `put` and `get` is atomic on its own: a reader sees a write either
/// completely or not at all. Neither operation can fail.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Records the score for `id`. A repeated id overwrites the earlier entry.
    async fn put(&self, id: ReceiptId, points: Points);
    /// Returns the score for `id`, or `None` if it was never stored.
    async fn get(&self, id: &ReceiptId) -> Option<Points>;
}

pub type ReceiptStoreBox = Box<dyn ReceiptStore>;
pub type ReceiptStoreFactory = Box<dyn Fn() -> ReceiptStoreBox + Send + Sync>;
