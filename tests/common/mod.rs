#![allow(dead_code)]

use rand::Rng;
use rand::seq::SliceRandom;
use receipt_points::domain::receipt::{Item, Receipt};

pub fn item(description: &str, price: &str) -> Item {
    Item {
        short_description: description.to_string(),
        price: price.to_string(),
    }
}

pub fn receipt(retailer: &str, date: &str, time: &str, items: Vec<Item>, total: &str) -> Receipt {
    Receipt {
        retailer: retailer.to_string(),
        purchase_date: date.to_string(),
        purchase_time: time.to_string(),
        items,
        total: total.to_string(),
    }
}

pub fn load_fixture(name: &str) -> Receipt {
    let path = format!("tests/fixtures/{name}");
    let content = std::fs::read_to_string(&path).expect("Failed to read fixture");
    serde_json::from_str(&content).expect("Failed to parse fixture")
}

const RETAILERS: &[&str] = &["Target", "M&M Corner Market", "Walgreens", "Café Ñandú", "", "7-Eleven"];
const DESCRIPTIONS: &[&str] = &["Gatorade", "Emils Cheese Pizza", "  Pepsi - 12-oz ", "abc", "", "Dasani"];
const JUNK: &[&str] = &["", "abc", "12,50", "NaN", "--1", "1.2.3"];

fn money<R: Rng>(rng: &mut R) -> String {
    if rng.gen_bool(0.1) {
        return JUNK.choose(rng).unwrap().to_string();
    }
    let cents: u64 = rng.gen_range(0..100_000);
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Builds a random receipt. Roughly one field in ten is malformed.
pub fn random_receipt<R: Rng>(rng: &mut R) -> Receipt {
    let items = (0..rng.gen_range(0..12))
        .map(|_| item(DESCRIPTIONS.choose(rng).unwrap(), &money(rng)))
        .collect();

    let date = if rng.gen_bool(0.1) {
        JUNK.choose(rng).unwrap().to_string()
    } else {
        format!("2022-{:02}-{:02}", rng.gen_range(1..=12), rng.gen_range(1..=28))
    };
    let time = if rng.gen_bool(0.1) {
        JUNK.choose(rng).unwrap().to_string()
    } else {
        format!("{:02}:{:02}", rng.gen_range(0..24), rng.gen_range(0..60))
    };

    Receipt {
        retailer: RETAILERS.choose(rng).unwrap().to_string(),
        purchase_date: date,
        purchase_time: time,
        items,
        total: money(rng),
    }
}
