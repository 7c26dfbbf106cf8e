//! Synthesized 30-day price history.
//!
//! The catalog has no price history, so the chart is generated around the
//! card's current price: a raw series varying within ±20% and graded series
//! derived from it. Randomness is injected so callers can seed it.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::models::{Card, PricePoint};

pub const HISTORY_DAYS: i64 = 30;

/// Base price for the chart: holofoil market, then normal market, then the
/// Cardmarket average sell price, then 1. Zero prices count as missing.
pub fn base_price(card: &Card) -> f64 {
    [
        card.market_price("holofoil"),
        card.market_price("normal"),
        card.secondary_market_price(),
    ]
    .into_iter()
    .flatten()
    .find(|p| *p > 0.0)
    .unwrap_or(1.0)
}

/// One point per day for the 30 days ending on `today`, oldest first.
pub fn synthesize_history<R: Rng>(card: &Card, today: NaiveDate, rng: &mut R) -> Vec<PricePoint> {
    let base = base_price(card);
    (0..HISTORY_DAYS)
        .rev()
        .map(|days_ago| {
            let date = today - Duration::days(days_ago);
            let raw: f64 = base * rng.gen_range(0.8_f64..1.2);
            let psa10: f64 = rng.gen_range(5.0..7.0);
            let psa9: f64 = rng.gen_range(2.0..3.0);
            let psa8: f64 = rng.gen_range(1.2..1.7);
            PricePoint {
                date: date.format("%b %-d").to_string(),
                raw: cents(raw),
                psa8: cents(raw * psa8),
                psa9: cents(raw * psa9),
                psa10: cents(raw * psa10),
            }
        })
        .collect()
}

fn cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
