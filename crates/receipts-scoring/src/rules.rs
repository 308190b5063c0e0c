//! The individual scoring rules.
//!
//! Each rule is a pure function of the receipt fields it reads. Inputs that do
//! not parse make the rule contribute 0 instead of failing the whole score.

use std::str::FromStr as _;

use receipts_core::Item;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive as _;

pub const ROUND_DOLLAR_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const POINTS_PER_ITEM_PAIR: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

/// Purchases in `[14:00, 16:00)` earn [`AFTERNOON_POINTS`].
const AFTERNOON_HOURS: std::ops::Range<u32> = 14..16;

/// One point per ASCII letter or digit in the retailer name.
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

pub fn round_dollar_points(total: &str) -> u64 {
    match parse_amount("total", total) {
        Some(t) if t.fract().is_zero() => ROUND_DOLLAR_POINTS,
        _ => 0,
    }
}

pub fn quarter_multiple_points(total: &str) -> u64 {
    let quarter = Decimal::new(25, 2);
    match parse_amount("total", total) {
        Some(t) if (t % quarter).is_zero() => QUARTER_MULTIPLE_POINTS,
        _ => 0,
    }
}

pub fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() / 2) as u64 * POINTS_PER_ITEM_PAIR
}

pub fn item_description_points(items: &[Item]) -> u64 {
    items
        .iter()
        .map(description_points)
        .fold(0, u64::saturating_add)
}

/// `ceil(price * 0.2)` when the trimmed description length is a multiple of 3.
pub fn description_points(item: &Item) -> u64 {
    let description = item.short_description.trim();
    if description.chars().count() % 3 != 0 {
        return 0;
    }
    let Some(price) = parse_amount("price", &item.price) else {
        return 0;
    };
    (price * Decimal::new(2, 1)).ceil().to_u64().unwrap_or(0)
}

/// Only the day component of `YYYY-MM-DD` is read; the date is not checked
/// against the calendar.
pub fn odd_day_points(purchase_date: &str) -> u64 {
    match parse_component("purchaseDate", purchase_date, '-', 2) {
        Some(day) if day % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// Only the hour component of `HH:MM` is read; minutes never move the window.
pub fn afternoon_points(purchase_time: &str) -> u64 {
    match parse_component("purchaseTime", purchase_time, ':', 0) {
        Some(hour) if AFTERNOON_HOURS.contains(&hour) => AFTERNOON_POINTS,
        _ => 0,
    }
}

fn parse_component(field: &'static str, raw: &str, sep: char, index: usize) -> Option<u32> {
    let Some(part) = raw.trim().split(sep).nth(index) else {
        tracing::debug!(field, value = raw, "missing component; rule contributes 0");
        return None;
    };
    match part.parse::<u32>() {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::debug!(field, value = raw, error = %e, "unparseable component; rule contributes 0");
            None
        }
    }
}

fn parse_amount(field: &'static str, raw: &str) -> Option<Decimal> {
    match Decimal::from_str(raw.trim()) {
        Ok(d) => Some(d),
        Err(e) => {
            tracing::debug!(field, value = raw, error = %e, "unparseable amount; rule contributes 0");
            None
        }
    }
}
