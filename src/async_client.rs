//! Async wrapper around [`CardSetHub`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. Pair it
//! with a [`ViewScope`](crate::scope::ViewScope) to tie fetches to the
//! lifetime of the view that consumes them.
//!
//! # Example
//!
//! ```no_run
//! use cardsethub_sdk::AsyncCardSetHub;
//!
//! #[tokio::main]
//! async fn main() {
//!     let hub = AsyncCardSetHub::new(
//!         cardsethub_sdk::CardSetHub::builder().build().unwrap(),
//!     );
//!
//!     let sets = hub.run(|h| h.sets().list()).await.unwrap();
//!     let listings = hub.listings("Base Set Charizard 4").await;
//! }
//! ```

use std::sync::Arc;

use crate::error::{HubError, Result};
use crate::models::{Card, CardSet, Listing};
use crate::queries::SetWithCards;
use crate::CardSetHub;

/// Async wrapper around [`CardSetHub`].
///
/// Cloning is cheap; clones share the same hub, HTTP client and listings
/// token cache.
#[derive(Clone)]
pub struct AsyncCardSetHub {
    inner: Arc<CardSetHub>,
}

impl AsyncCardSetHub {
    pub fn new(hub: CardSetHub) -> Self {
        Self {
            inner: Arc::new(hub),
        }
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// If the awaiting task is aborted, the HTTP call still completes on its
    /// blocking thread but its result is dropped.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CardSetHub) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let hub = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&hub))
            .await
            .map_err(|e| {
                if e.is_cancelled() {
                    HubError::Cancelled
                } else {
                    HubError::Task(e.to_string())
                }
            })?
    }

    pub async fn sets(&self) -> Result<Vec<CardSet>> {
        self.run(|h| h.sets().list()).await
    }

    pub async fn set_with_cards(&self, set_id: &str) -> Result<SetWithCards> {
        let set_id = set_id.to_string();
        self.run(move |h| h.sets().with_cards(&set_id)).await
    }

    pub async fn card(&self, card_id: &str) -> Result<Card> {
        let card_id = card_id.to_string();
        self.run(move |h| h.cards().get(&card_id)).await
    }

    pub async fn top_prices(&self) -> Result<Vec<Card>> {
        self.run(|h| h.top_prices().fetch()).await
    }

    /// Listings search; empty on any failure, like the sync client.
    pub async fn listings(&self, query: &str) -> Vec<Listing> {
        let query = query.to_string();
        self.run(move |h| Ok(h.listings().search(&query)))
            .await
            .unwrap_or_default()
    }

    /// Borrow the wrapped sync hub.
    pub fn hub(&self) -> &CardSetHub {
        &self.inner
    }
}
