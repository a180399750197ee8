//! Domain types and the storage port.

pub mod points;
pub mod ports;
pub mod receipt;
pub mod receipt_id;
