//! Application layer: the scoring rules and the receipt processor.
//!
//! Scoring is synchronous and side-effect free. `ReceiptProcessor` glues it to
//! identifier generation and the `ReceiptStore` port.

pub mod processor;
pub mod rules;
pub mod scoring;
