//! Adapters at the edge of the crate: the HTTP service and the JSON file reader.

pub mod http;
pub mod json;
