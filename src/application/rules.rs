//! The individual scoring rules.
//!
//! Each rule is a pure function of the receipt. A rule whose input field does
//! not parse contributes zero; no rule ever fails.

use crate::domain::points::Points;
use crate::domain::receipt::{Item, Receipt};
use chrono::{Datelike, Timelike};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::ops::Range;

pub const ROUND_DOLLAR_BONUS: Points = Points(50);
pub const QUARTER_MULTIPLE_BONUS: Points = Points(25);
pub const OVER_THRESHOLD_BONUS: Points = Points(5);
pub const ITEM_PAIR_BONUS: Points = Points(5);
pub const ODD_DAY_BONUS: Points = Points(6);
pub const AFTERNOON_BONUS: Points = Points(10);

const QUARTER: Decimal = dec!(0.25);
const TOTAL_THRESHOLD: Decimal = dec!(10.00);
const DESCRIPTION_MULTIPLIER: Decimal = dec!(0.2);
const AFTERNOON_HOURS: Range<u32> = 14..16;

/// One point per ASCII letter or digit in the retailer name.
pub fn retailer_name(receipt: &Receipt) -> Points {
    let count = receipt
        .retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count();
    Points(count as u64)
}

pub fn round_dollar(receipt: &Receipt) -> Points {
    match receipt.total_amount() {
        Some(total) if total.fract().is_zero() => ROUND_DOLLAR_BONUS,
        _ => Points::ZERO,
    }
}

pub fn quarter_multiple(receipt: &Receipt) -> Points {
    match receipt.total_amount() {
        Some(total) if (total % QUARTER).is_zero() => QUARTER_MULTIPLE_BONUS,
        _ => Points::ZERO,
    }
}

/// Bonus when the total is strictly greater than 10.00.
pub fn over_threshold(receipt: &Receipt) -> Points {
    match receipt.total_amount() {
        Some(total) if total > TOTAL_THRESHOLD => OVER_THRESHOLD_BONUS,
        _ => Points::ZERO,
    }
}

/// Five points for every two items; an odd trailing item earns nothing.
pub fn item_pairs(receipt: &Receipt) -> Points {
    let pairs = (receipt.items.len() / 2) as u64;
    Points(ITEM_PAIR_BONUS.value().saturating_mul(pairs))
}

pub fn descriptions(receipt: &Receipt) -> Points {
    receipt.items.iter().map(description_bonus).sum()
}

/// `ceil(price * 0.2)` when the trimmed description length is a multiple of 3.
///
/// Length counts characters, not bytes. Unparseable and negative prices
/// contribute zero.
pub fn description_bonus(item: &Item) -> Points {
    let length = item.short_description.trim().chars().count();
    if length % 3 != 0 {
        return Points::ZERO;
    }
    item.price_amount()
        .and_then(|price| price.checked_mul(DESCRIPTION_MULTIPLIER))
        .map(|bonus| Points::from_decimal(bonus.ceil()))
        .unwrap_or(Points::ZERO)
}

pub fn odd_day(receipt: &Receipt) -> Points {
    match receipt.purchase_date() {
        Some(date) if date.day() % 2 == 1 => ODD_DAY_BONUS,
        _ => Points::ZERO,
    }
}

/// Bonus for purchases in `[14:00, 16:00)`.
pub fn afternoon(receipt: &Receipt) -> Points {
    match receipt.purchase_time() {
        Some(time) if AFTERNOON_HOURS.contains(&time.hour()) => AFTERNOON_BONUS,
        _ => Points::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt_with_total(total: &str) -> Receipt {
        Receipt {
            retailer: String::new(),
            purchase_date: String::new(),
            purchase_time: String::new(),
            items: vec![],
            total: total.to_string(),
        }
    }

    fn item(description: &str, price: &str) -> Item {
        Item {
            short_description: description.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_retailer_counts_ascii_alphanumerics_only() {
        let mut r = receipt_with_total("0");
        r.retailer = "M&M Corner Market".to_string();
        assert_eq!(retailer_name(&r), Points(14));

        r.retailer = "Café 42 ñ".to_string();
        assert_eq!(retailer_name(&r), Points(5));

        r.retailer = "  -&- ".to_string();
        assert_eq!(retailer_name(&r), Points::ZERO);
    }

    #[test]
    fn test_round_dollar() {
        assert_eq!(round_dollar(&receipt_with_total("9.00")), ROUND_DOLLAR_BONUS);
        assert_eq!(round_dollar(&receipt_with_total("100")), ROUND_DOLLAR_BONUS);
        assert_eq!(round_dollar(&receipt_with_total("9.01")), Points::ZERO);
        assert_eq!(round_dollar(&receipt_with_total("abc")), Points::ZERO);
        // would round up to 10.00 if parsed lossily
        assert_eq!(
            round_dollar(&receipt_with_total("9.9999999999999999999999999999999")),
            Points::ZERO
        );
    }

    #[test]
    fn test_quarter_multiple_uses_exact_decimals() {
        assert_eq!(quarter_multiple(&receipt_with_total("1.75")), QUARTER_MULTIPLE_BONUS);
        assert_eq!(quarter_multiple(&receipt_with_total("35.00")), QUARTER_MULTIPLE_BONUS);
        assert_eq!(quarter_multiple(&receipt_with_total("0.30")), Points::ZERO);
        assert_eq!(quarter_multiple(&receipt_with_total("35.35")), Points::ZERO);
        // 0.1 + 0.2 style values that binary floats get wrong.
        assert_eq!(quarter_multiple(&receipt_with_total("1.10")), Points::ZERO);
        assert_eq!(quarter_multiple(&receipt_with_total("0.750")), QUARTER_MULTIPLE_BONUS);
        // more fractional digits than a Decimal holds
        assert_eq!(
            quarter_multiple(&receipt_with_total("0.250000000000000000000000000001")),
            Points::ZERO
        );
        assert_eq!(
            quarter_multiple(&receipt_with_total("9.9999999999999999999999999999999")),
            Points::ZERO
        );
    }

    #[test]
    fn test_round_dollar_and_quarter_both_fire() {
        let r = receipt_with_total("35.00");
        assert_eq!(round_dollar(&r) + quarter_multiple(&r), Points(75));
    }

    #[test]
    fn test_over_threshold_is_strict() {
        assert_eq!(over_threshold(&receipt_with_total("10.00")), Points::ZERO);
        assert_eq!(over_threshold(&receipt_with_total("10.01")), OVER_THRESHOLD_BONUS);
        assert_eq!(over_threshold(&receipt_with_total("9.00")), Points::ZERO);
    }

    #[test]
    fn test_item_pairs() {
        let mut r = receipt_with_total("0");
        assert_eq!(item_pairs(&r), Points::ZERO);

        r.items = vec![item("a", "1"); 1];
        assert_eq!(item_pairs(&r), Points::ZERO);

        r.items = vec![item("a", "1"); 5];
        assert_eq!(item_pairs(&r), Points(10));

        r.items = vec![item("a", "1"); 6];
        assert_eq!(item_pairs(&r), Points(15));
    }

    #[test]
    fn test_description_bonus() {
        assert_eq!(description_bonus(&item("Emils Cheese Pizza", "12.25")), Points(3));
        assert_eq!(
            description_bonus(&item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")),
            Points(3)
        );
        assert_eq!(description_bonus(&item("Mountain Dew 12PK", "6.49")), Points::ZERO);
        // exact product: 5.00 * 0.2 = 1.0, no rounding up
        assert_eq!(description_bonus(&item("abc", "5.00")), Points(1));
        assert_eq!(description_bonus(&item("abc", "0.01")), Points(1));
        assert_eq!(description_bonus(&item("abc", "0")), Points::ZERO);
        assert_eq!(description_bonus(&item("abc", "-7.00")), Points::ZERO);
        assert_eq!(description_bonus(&item("abc", "n/a")), Points::ZERO);
        assert_eq!(
            description_bonus(&item("abc", "0.250000000000000000000000000001")),
            Points::ZERO
        );
        // three characters, six bytes
        assert_eq!(description_bonus(&item("ééé", "10.00")), Points(2));
        assert_eq!(description_bonus(&item("   ", "10.00")), Points(2));
    }

    #[test]
    fn test_odd_day() {
        let mut r = receipt_with_total("0");
        r.purchase_date = "2022-01-01".to_string();
        assert_eq!(odd_day(&r), ODD_DAY_BONUS);

        r.purchase_date = "2022-03-20".to_string();
        assert_eq!(odd_day(&r), Points::ZERO);

        r.purchase_date = "01/01/2022".to_string();
        assert_eq!(odd_day(&r), Points::ZERO);
    }

    #[test]
    fn test_afternoon_window_bounds() {
        let mut r = receipt_with_total("0");
        for (time, expected) in [
            ("13:59", Points::ZERO),
            ("14:00", AFTERNOON_BONUS),
            ("14:33", AFTERNOON_BONUS),
            ("15:59", AFTERNOON_BONUS),
            ("16:00", Points::ZERO),
            ("2:30 PM", Points::ZERO),
            ("", Points::ZERO),
        ] {
            r.purchase_time = time.to_string();
            assert_eq!(afternoon(&r), expected, "purchase time {time:?}");
        }
    }
}
