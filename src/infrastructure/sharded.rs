use crate::domain::points::Points;
use crate::domain::ports::{ReceiptStore, ReceiptStoreBox, ReceiptStoreFactory};
use crate::domain::receipt_id::ReceiptId;
use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Spreads receipts across several independent stores.
///
/// Every id hashes to exactly one shard, so per-key atomicity is inherited
/// from the shard while unrelated keys stop contending on a single lock.
pub struct ShardedReceiptStore {
    shards: Vec<ReceiptStoreBox>,
}

impl ShardedReceiptStore {
    /// Builds `shards` stores from `factory`. Zero is treated as one.
    pub fn new(shards: usize, factory: ReceiptStoreFactory) -> Self {
        let shards = (0..shards.max(1)).map(|_| factory()).collect();
        Self { shards }
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn shard_index(&self, id: &ReceiptId) -> usize {
        let mut hasher = DefaultHasher::new();
        id.hash(&mut hasher);
        (hasher.finish() % self.shards.len() as u64) as usize
    }

    fn shard(&self, id: &ReceiptId) -> &ReceiptStoreBox {
        &self.shards[self.shard_index(id)]
    }
}

#[async_trait]
impl ReceiptStore for ShardedReceiptStore {
    async fn put(&self, id: ReceiptId, points: Points) {
        self.shard(&id).put(id, points).await;
    }

    async fn get(&self, id: &ReceiptId) -> Option<Points> {
        self.shard(id).get(id).await
    }
}
