//! CardSetHub SDK for Rust.
//!
//! Provides a high-level client for browsing Pokemon TCG sets and cards from
//! the public catalog API, ranking the most expensive cards, and looking up
//! live fixed-price marketplace listings. View state for the browsing screens
//! (search, sort, pagination, series grouping) lives in [`view`] as plain
//! values with pure render functions.
//!
//! # Quick start
//!
//! ```no_run
//! use cardsethub_sdk::CardSetHub;
//! use cardsethub_sdk::view::{CardGridAction, CardGridState, CardSort};
//!
//! let hub = CardSetHub::builder().build().unwrap();
//!
//! // A set and its cards
//! let detail = hub.sets().with_cards("base1").unwrap();
//!
//! // Sort by collector number and show the first page
//! let state = CardGridState::default().update(CardGridAction::Sort(CardSort::Number));
//! let page = state.render(&detail.cards);
//!
//! // Live listings (empty when the marketplace is unreachable)
//! let listings = hub.listings().search("Base Set Charizard 4");
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod connection;
pub mod error;
pub mod listings;
#[cfg(feature = "cli")]
pub mod logging;
pub mod models;
pub mod queries;
pub mod routes;
#[cfg(feature = "async")]
pub mod scope;
pub mod view;

#[cfg(feature = "async")]
pub use async_client::AsyncCardSetHub;
pub use config::{Credentials, RetryPolicy};
pub use connection::Connection;
pub use error::{HubError, Result};
pub use listings::{ListingsClient, ListingsConfig};
pub use routes::Route;
#[cfg(feature = "async")]
pub use scope::ViewScope;

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;

// ---------------------------------------------------------------------------
// CardSetHubBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CardSetHub`] instance.
///
/// Use [`CardSetHub::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CardSetHubBuilder::build) to create the hub.
#[derive(Debug, Clone)]
pub struct CardSetHubBuilder {
    catalog_base: String,
    listings: ListingsConfig,
    timeout: Duration,
    retry: RetryPolicy,
}

impl Default for CardSetHubBuilder {
    fn default() -> Self {
        Self {
            catalog_base: config::CATALOG_BASE.to_string(),
            listings: ListingsConfig::default(),
            timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
        }
    }
}

impl CardSetHubBuilder {
    /// Override the catalog API base URL (e.g. a mock server in tests).
    pub fn catalog_base(mut self, url: impl Into<String>) -> Self {
        self.catalog_base = url.into();
        self
    }

    /// Override the listings API base URL.
    pub fn listings_base(mut self, url: impl Into<String>) -> Self {
        self.listings.base_url = url.into();
        self
    }

    /// Set the OAuth application credentials for the listings API.
    ///
    /// Without credentials every listings search returns an empty result.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.listings.credentials = Some(credentials);
        self
    }

    /// Read listings credentials from the environment, if present.
    ///
    /// See [`Credentials::from_env`].
    pub fn credentials_from_env(mut self) -> Self {
        if let Some(credentials) = Credentials::from_env() {
            self.listings.credentials = Some(credentials);
        }
        self
    }

    /// Build listing item links against the sandbox site.
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.listings.sandbox = sandbox;
        self
    }

    /// How close to expiry a cached listings token is refreshed.
    ///
    /// Defaults to 60 seconds.
    pub fn token_expiry_margin(mut self, margin: Duration) -> Self {
        self.listings.expiry_margin = margin;
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry policy of the leaderboard fetches.
    ///
    /// Defaults to three immediate retries.
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Build the hub and its shared HTTP client.
    pub fn build(self) -> Result<CardSetHub> {
        let client = Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        let conn = Connection::new(client.clone(), self.catalog_base, self.retry);
        let listings = ListingsClient::new(client, self.listings);
        Ok(CardSetHub { conn, listings })
    }
}

// ---------------------------------------------------------------------------
// CardSetHub
// ---------------------------------------------------------------------------

/// The main entry point of the SDK.
///
/// Owns the catalog [`Connection`] and the [`ListingsClient`] (with its token
/// cache). Construct one per process and pass it by reference; query
/// interfaces are lightweight borrowing wrappers.
pub struct CardSetHub {
    conn: Connection,
    listings: ListingsClient,
}

impl CardSetHub {
    /// Create a new builder for configuring the hub.
    pub fn builder() -> CardSetHubBuilder {
        CardSetHubBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the set query interface.
    pub fn sets(&self) -> queries::sets::SetQuery<'_> {
        queries::sets::SetQuery::new(&self.conn)
    }

    /// Access the card query interface.
    pub fn cards(&self) -> queries::cards::CardQuery<'_> {
        queries::cards::CardQuery::new(&self.conn)
    }

    /// Access the most-expensive-cards leaderboard.
    ///
    /// Fans out one request per rarity bucket; see
    /// [`TopPricesQuery`](queries::top_prices::TopPricesQuery).
    pub fn top_prices(&self) -> queries::top_prices::TopPricesQuery<'_> {
        queries::top_prices::TopPricesQuery::new(&self.conn)
    }

    /// Access the marketplace listings client.
    pub fn listings(&self) -> &ListingsClient {
        &self.listings
    }

    /// Return a reference to the underlying [`Connection`].
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CardSetHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listings = self.listings.config();
        write!(
            f,
            "CardSetHub(catalog={}, listings={}, credentials={}, sandbox={})",
            self.conn.catalog_base(),
            listings.base_url,
            listings.credentials.is_some(),
            listings.sandbox
        )
    }
}
