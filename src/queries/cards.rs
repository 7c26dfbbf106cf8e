//! Card queries against the card-catalog API.

use crate::connection::Connection;
use crate::error::Result;
use crate::models::{Card, DataItem, DataList};

use super::sets::require_id;

// ---------------------------------------------------------------------------
// SearchCardsParams
// ---------------------------------------------------------------------------

/// Parameters for the catalog's query-language card search.
///
/// All fields are optional. When `None`, the parameter is omitted and the
/// catalog default applies.
#[derive(Debug, Clone, Default)]
pub struct SearchCardsParams {
    /// Query-language filter, e.g. `set.id:base1` or `rarity:"rare holo"`.
    pub q: Option<String>,
    /// Comma-separated ordering clauses; a leading `-` sorts descending.
    pub order_by: Option<String>,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}

impl SearchCardsParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(ref q) = self.q {
            query.push(("q", q.clone()));
        }
        if let Some(ref order_by) = self.order_by {
            query.push(("orderBy", order_by.clone()));
        }
        if let Some(page_size) = self.page_size {
            query.push(("pageSize", page_size.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        query
    }
}

// ---------------------------------------------------------------------------
// CardQuery
// ---------------------------------------------------------------------------

/// Query interface for cards.
pub struct CardQuery<'a> {
    conn: &'a Connection,
}

impl<'a> CardQuery<'a> {
    /// Create a new `CardQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Retrieve a single card by id (`GET /cards/{id}`).
    pub fn get(&self, card_id: &str) -> Result<Card> {
        let card_id = require_id(card_id)?;
        let item: DataItem<Card> = self.conn.get_json(&format!("/cards/{}", card_id), &[])?;
        Ok(item.data)
    }

    /// All cards of a set (`GET /cards?q=set.id:{id}`), one upstream page.
    pub fn by_set(&self, set_id: &str) -> Result<Vec<Card>> {
        let set_id = require_id(set_id)?;
        self.search(&SearchCardsParams {
            q: Some(format!("set.id:{}", set_id)),
            ..Default::default()
        })
    }

    /// Run a query-language search, single attempt.
    pub fn search(&self, params: &SearchCardsParams) -> Result<Vec<Card>> {
        let page: DataList<Card> = self.conn.get_json("/cards", &params.to_query())?;
        Ok(page.data)
    }

    /// Run a query-language search under the connection's retry policy.
    pub fn search_with_retry(&self, params: &SearchCardsParams) -> Result<Vec<Card>> {
        let page: DataList<Card> = self.conn.get_json_with_retry("/cards", &params.to_query())?;
        Ok(page.data)
    }
}
