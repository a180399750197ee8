//! Storage backends implementing the `ReceiptStore` port.

pub mod in_memory;
pub mod sharded;
