use super::scoring::score;
use crate::domain::points::Points;
use crate::domain::ports::ReceiptStoreBox;
use crate::domain::receipt::Receipt;
use crate::domain::receipt_id::ReceiptId;

/// Scores submitted receipts and answers point lookups.
///
/// `ReceiptProcessor` owns the storage backend. Scoring happens before the
/// store is touched, so the only shared state is whatever the store guards.
pub struct ReceiptProcessor {
    store: ReceiptStoreBox,
}

impl ReceiptProcessor {
    pub fn new(store: ReceiptStoreBox) -> Self {
        Self { store }
    }

    /// Scores the receipt, records it under a fresh id and returns the id.
    pub async fn process(&self, receipt: &Receipt) -> ReceiptId {
        let id = ReceiptId::generate();
        let points = score(receipt);
        tracing::debug!(%id, %points, retailer = %receipt.retailer, "scored receipt");
        self.store.put(id.clone(), points).await;
        id
    }

    /// Returns the points previously awarded to `id`.
    pub async fn points(&self, id: &ReceiptId) -> Option<Points> {
        self.store.get(id).await
    }
}
