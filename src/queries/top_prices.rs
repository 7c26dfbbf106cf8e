//! Leaderboard of the most expensive cards.
//!
//! Assembled from one overall "most expensive" query plus one query per
//! rarity bucket. The rarity queries fan out on scoped threads and every
//! outcome is awaited before merging; a failed bucket is logged and skipped.

use std::collections::HashMap;

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::Card;

use super::cards::{CardQuery, SearchCardsParams};

// ---------------------------------------------------------------------------
// TopPricesQuery
// ---------------------------------------------------------------------------

pub struct TopPricesQuery<'a> {
    conn: &'a Connection,
}

impl<'a> TopPricesQuery<'a> {
    /// Create a new `TopPricesQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Fetch, merge, de-duplicate and rank the leaderboard.
    ///
    /// Fails only when the overall query fails after its retries.
    pub fn fetch(&self) -> Result<Vec<Card>> {
        let cards = CardQuery::new(self.conn);

        let overall = cards.search_with_retry(&SearchCardsParams {
            order_by: Some(config::TOP_PRICES_ORDER_BY.to_string()),
            page_size: Some(config::TOP_PRICES_OVERALL_PAGE_SIZE),
            ..Default::default()
        })?;

        let by_rarity = self.fetch_rarities(&cards);

        let mut batches = Vec::with_capacity(by_rarity.len() + 1);
        batches.push(overall);
        batches.extend(by_rarity.into_iter().flatten());

        Ok(rank_by_market_price(merge_unique(batches)))
    }

    /// Run every rarity query concurrently. Each entry is `None` when that
    /// query failed after its retries.
    pub fn fetch_rarities(&self, cards: &CardQuery<'_>) -> Vec<Option<Vec<Card>>> {
        std::thread::scope(|s| {
            let handles: Vec<_> = config::RARITY_QUERIES
                .iter()
                .map(|&(label, query)| {
                    let handle = s.spawn(move || {
                        cards.search_with_retry(&SearchCardsParams {
                            q: Some(query.to_string()),
                            order_by: Some(config::TOP_PRICES_ORDER_BY.to_string()),
                            page_size: Some(config::TOP_PRICES_RARITY_PAGE_SIZE),
                            ..Default::default()
                        })
                    });
                    (label, handle)
                })
                .collect();

            handles
                .into_iter()
                .map(|(label, handle)| match handle.join() {
                    Ok(Ok(batch)) => {
                        tracing::debug!(rarity = label, count = batch.len(), "rarity query done");
                        Some(batch)
                    }
                    Ok(Err(e)) => {
                        tracing::warn!(rarity = label, error = %e, "rarity query failed");
                        None
                    }
                    Err(_) => {
                        tracing::warn!(rarity = label, "rarity query panicked");
                        None
                    }
                })
                .collect()
        })
    }
}

// ---------------------------------------------------------------------------
// Merging
// ---------------------------------------------------------------------------

/// Concatenate batches and drop duplicate ids.
///
/// A card keeps the position of its first occurrence and the data of its
/// last occurrence.
pub fn merge_unique(batches: Vec<Vec<Card>>) -> Vec<Card> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<Card> = Vec::new();

    for card in batches.into_iter().flatten() {
        match index.get(&card.id) {
            Some(&pos) => merged[pos] = card,
            None => {
                index.insert(card.id.clone(), merged.len());
                merged.push(card);
            }
        }
    }
    merged
}

/// Drop cards without a TCGplayer market price and sort the rest by that
/// price, most expensive first.
pub fn rank_by_market_price(cards: Vec<Card>) -> Vec<Card> {
    let mut ranked: Vec<Card> = cards
        .into_iter()
        .filter(|c| c.top_market_price() > 0.0)
        .collect();
    ranked.sort_by(|a, b| b.top_market_price().total_cmp(&a.top_market_price()));
    ranked
}
