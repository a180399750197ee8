use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// A purchase receipt as submitted by a client.
///
/// Every field is kept exactly as received. Numeric, date and time fields stay
/// strings: scoring re-parses them per rule, and a field that fails to parse
/// only zeroes the rules that depend on it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// 24-hour time of day, `HH:MM`.
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

/// A single line on a receipt.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

impl Receipt {
    /// The receipt total as an exact decimal, if it parses.
    pub fn total_amount(&self) -> Option<Decimal> {
        parse_amount(&self.total)
    }

    pub fn purchase_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.purchase_date, DATE_FORMAT).ok()
    }

    pub fn purchase_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.purchase_time, TIME_FORMAT).ok()
    }
}

impl Item {
    pub fn price_amount(&self) -> Option<Decimal> {
        parse_amount(&self.price)
    }
}

/// Parses an amount without rounding. Inputs with more fractional digits
/// than `Decimal` can hold are rejected rather than rounded.
fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str_exact(raw).ok()
}
