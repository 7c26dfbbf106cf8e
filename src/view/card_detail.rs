//! Card detail view: price tables, set reference and the listings query.

use crate::listings::marketplace_search_url;
use crate::models::{Card, CardMarketPrices, PriceTier};

/// A labelled price row.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub label: &'static str,
    pub value: f64,
}

/// TCGplayer prices of one finish.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishPrices {
    /// Raw finish key, e.g. `"reverseHolofoil"`.
    pub finish: String,
    pub rows: Vec<PriceRow>,
}

/// Non-zero market/low/mid/high rows for every finish, in finish-key order.
pub fn tcgplayer_rows(card: &Card) -> Vec<FinishPrices> {
    let Some(tcgplayer) = card.tcgplayer.as_ref() else {
        return Vec::new();
    };
    tcgplayer
        .prices
        .iter()
        .map(|(finish, tier)| FinishPrices {
            finish: finish.clone(),
            rows: tier_rows(tier),
        })
        .collect()
}

fn tier_rows(tier: &PriceTier) -> Vec<PriceRow> {
    [
        ("Market", tier.market),
        ("Low", tier.low),
        ("Mid", tier.mid),
        ("High", tier.high),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        value
            .filter(|v| *v != 0.0)
            .map(|value| PriceRow { label, value })
    })
    .collect()
}

/// Cardmarket table rows. German Pro Low and Suggested Price are shown only
/// when positive; every other row whenever present.
pub fn cardmarket_rows(card: &Card) -> Vec<PriceRow> {
    let Some(p) = card.cardmarket.as_ref().and_then(|c| c.prices.as_ref()) else {
        return Vec::new();
    };
    cardmarket_table(p)
        .into_iter()
        .filter_map(|(label, value, positive_only)| {
            value
                .filter(|v| !positive_only || *v > 0.0)
                .map(|value| PriceRow { label, value })
        })
        .collect()
}

fn cardmarket_table(p: &CardMarketPrices) -> [(&'static str, Option<f64>, bool); 15] {
    [
        ("Average Sell Price", p.average_sell_price, false),
        ("Low Price", p.low_price, false),
        ("Trend Price", p.trend_price, false),
        ("German Pro Low", p.german_pro_low, true),
        ("Suggested Price", p.suggested_price, true),
        ("Reverse Holo Sell", p.reverse_holo_sell, false),
        ("Reverse Holo Low", p.reverse_holo_low, false),
        ("Reverse Holo Trend", p.reverse_holo_trend, false),
        ("Low Price Ex+", p.low_price_ex_plus, false),
        ("1 Day Average", p.avg1, false),
        ("7 Day Average", p.avg7, false),
        ("30 Day Average", p.avg30, false),
        ("Reverse Holo 1 Day Average", p.reverse_holo_avg1, false),
        ("Reverse Holo 7 Day Average", p.reverse_holo_avg7, false),
        ("Reverse Holo 30 Day Average", p.reverse_holo_avg30, false),
    ]
}

/// `"4/102"` style collector reference.
pub fn collector_reference(card: &Card) -> String {
    format!("{}/{}", card.number, card.set.printed_total)
}

/// Free text used to look a card up on the marketplace.
pub fn listing_query(card: &Card) -> String {
    format!("{} {} {}", card.set.name, card.name, card.number)
        .trim()
        .to_string()
}

/// Marketplace keyword search for a card, newest listings first.
pub fn listing_fallback_url(card: &Card) -> String {
    marketplace_search_url(&listing_query(card), true)
}
