use crate::domain::receipt::Receipt;
use crate::error::Result;
use std::io::{BufReader, Read};

/// Reads a single receipt from a JSON source.
///
/// The document must have the same shape the HTTP interface accepts. Field
/// contents are not validated here; malformed amounts, dates or times are
/// left for scoring to zero out.
pub struct ReceiptReader<R: Read> {
    source: BufReader<R>,
}

impl<R: Read> ReceiptReader<R> {
    /// Creates a new `ReceiptReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            source: BufReader::new(source),
        }
    }

    pub fn receipt(self) -> Result<Receipt> {
        Ok(serde_json::from_reader(self.source)?)
    }
}
