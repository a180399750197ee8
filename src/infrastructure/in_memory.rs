use crate::domain::points::Points;
use crate::domain::ports::ReceiptStore;
use crate::domain::receipt_id::ReceiptId;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store of receipt scores.
///
/// Uses `Arc<RwLock<HashMap<ReceiptId, Points>>>`: one lock guards the whole
/// map, and clones share it. Entries live until the process exits.
#[derive(Default, Clone)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<ReceiptId, Points>>>,
}

impl InMemoryReceiptStore {
    /// Creates a new, empty in-memory receipt store.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.receipts.read().await.is_empty()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn put(&self, id: ReceiptId, points: Points) {
        let mut receipts = self.receipts.write().await;
        receipts.insert(id, points);
    }

    async fn get(&self, id: &ReceiptId) -> Option<Points> {
        let receipts = self.receipts.read().await;
        receipts.get(id).copied()
    }
}
