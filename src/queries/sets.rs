//! Set queries against the card-catalog API.

use crate::connection::Connection;
use crate::error::{HubError, Result};
use crate::models::{Card, CardSet, DataItem, DataList};

use super::cards::CardQuery;

// ---------------------------------------------------------------------------
// SetWithCards
// ---------------------------------------------------------------------------

/// A set detail record together with every card the catalog lists for it.
#[derive(Debug, Clone)]
pub struct SetWithCards {
    pub set: CardSet,
    pub cards: Vec<Card>,
}

// ---------------------------------------------------------------------------
// SetQuery
// ---------------------------------------------------------------------------

/// Query interface for card sets.
pub struct SetQuery<'a> {
    conn: &'a Connection,
}

impl<'a> SetQuery<'a> {
    /// Create a new `SetQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// List every set (`GET /sets`).
    pub fn list(&self) -> Result<Vec<CardSet>> {
        let page: DataList<CardSet> = self.conn.get_json("/sets", &[])?;
        Ok(page.data)
    }

    /// Fetch a single set by id (`GET /sets/{id}`).
    pub fn get(&self, set_id: &str) -> Result<CardSet> {
        let set_id = require_id(set_id)?;
        let item: DataItem<CardSet> = self.conn.get_json(&format!("/sets/{}", set_id), &[])?;
        Ok(item.data)
    }

    /// Fetch a set and its cards.
    ///
    /// Both requests run concurrently. If either fails the whole result fails;
    /// there is no partially populated set view.
    pub fn with_cards(&self, set_id: &str) -> Result<SetWithCards> {
        let set_id = require_id(set_id)?;
        let cards_query = CardQuery::new(self.conn);

        let (set, cards) = std::thread::scope(|s| {
            let cards = s.spawn(|| cards_query.by_set(set_id));
            let set = self.get(set_id);
            let cards = cards
                .join()
                .unwrap_or_else(|_| Err(HubError::Task("card fetch panicked".into())));
            (set, cards)
        });

        Ok(SetWithCards {
            set: set?,
            cards: cards?,
        })
    }
}

pub(crate) fn require_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(HubError::InvalidArgument("identifier must not be empty".into()));
    }
    Ok(id)
}
