//! Loyalty points rules.
//!
//! Each rule scores one aspect of a [`Receipt`] and the totals are summed. A
//! field that cannot be parsed only forfeits the bonus that depends on it; the
//! rest of the receipt is still scored.

use super::receipt::{Item, Receipt};
use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use std::str::FromStr;

const ROUND_TOTAL_POINTS: u64 = 50;
const QUARTER_TOTAL_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

const DESCRIPTION_MULTIPLE: usize = 3;
const DESCRIPTION_PRICE_FACTOR: Decimal = dec!(0.2);

// Exclusive bounds, in minutes after midnight.
const AFTERNOON_START: u32 = 14 * 60;
const AFTERNOON_END: u32 = 16 * 60;

/// Computes the points earned by a receipt.
///
/// Item prices are unvalidated, so the sum saturates at `u64::MAX`.
pub fn compute_points(receipt: &Receipt) -> u64 {
    [
        retailer_points(&receipt.retailer),
        total_points(&receipt.total),
        item_pair_points(&receipt.items),
        purchase_day_points(&receipt.purchase_date),
        purchase_time_points(&receipt.purchase_time),
    ]
    .into_iter()
    .chain(receipt.items.iter().map(description_points))
    .fold(0, u64::saturating_add)
}

/// One point per ASCII letter or digit.
fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

fn total_points(total: &str) -> u64 {
    let Some(total) = parse_amount(total) else {
        return 0;
    };

    let mut points = 0;
    if total.fract().is_zero() {
        points += ROUND_TOTAL_POINTS;
    }
    if let Some(cents) = total.checked_mul(dec!(100))
        && cents.fract().is_zero()
        && (cents % dec!(25)).is_zero()
    {
        points += QUARTER_TOTAL_POINTS;
    }
    points
}

fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() / 2) as u64 * ITEM_PAIR_POINTS
}

/// `ceil(price * 0.2)` when the trimmed description's byte length is a multiple of three.
fn description_points(item: &Item) -> u64 {
    let length = item.short_description.trim().len();
    if length % DESCRIPTION_MULTIPLE != 0 {
        return 0;
    }

    parse_amount(&item.price)
        .map(|price| (price * DESCRIPTION_PRICE_FACTOR).ceil())
        .filter(|bonus| bonus.is_sign_positive())
        .and_then(|bonus| bonus.to_u64())
        .unwrap_or(0)
}

fn purchase_day_points(purchase_date: &str) -> u64 {
    match purchase_day(purchase_date) {
        Some(day) if day % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

fn purchase_time_points(purchase_time: &str) -> u64 {
    let Ok(time) = NaiveTime::parse_from_str(purchase_time, "%H:%M") else {
        return 0;
    };

    let minutes = time.hour() * 60 + time.minute();
    if minutes > AFTERNOON_START && minutes < AFTERNOON_END {
        AFTERNOON_POINTS
    } else {
        0
    }
}

fn parse_amount(text: &str) -> Option<Decimal> {
    Decimal::from_str(text).ok()
}

/// Day of month from a `YYYY-MM-DD` date.
fn purchase_day(purchase_date: &str) -> Option<u32> {
    let parts: Vec<&str> = purchase_date.split('-').collect();
    match parts.as_slice() {
        [_, _, day] => day.parse().ok(),
        _ => None,
    }
}
