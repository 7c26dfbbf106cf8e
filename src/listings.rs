//! Marketplace listings client with a cached client-credentials token.
//!
//! The client holds its token in one of two states, `Empty` or `Valid`. A
//! search first makes sure a valid token exists (requesting one with HTTP basic
//! auth when the cache is empty or the cached token is inside the expiry
//! margin), then runs a fixed-price, price-sorted search in the trading-card
//! category. Any failure is logged and turned into an empty result.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;

use crate::config::{self, Credentials};
use crate::error::{HubError, Result};
use crate::models::{AccessToken, ItemSummaryPage, Listing, TokenResponse};

#[derive(Debug, Clone)]
enum TokenState {
    Empty,
    Valid(AccessToken),
}

// ---------------------------------------------------------------------------
// ListingsConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ListingsConfig {
    pub base_url: String,
    pub credentials: Option<Credentials>,
    pub sandbox: bool,
    /// A cached token is refreshed once it is this close to expiring.
    pub expiry_margin: Duration,
}

impl Default for ListingsConfig {
    fn default() -> Self {
        Self {
            base_url: config::LISTINGS_BASE.to_string(),
            credentials: None,
            sandbox: false,
            expiry_margin: Duration::from_secs(60),
        }
    }
}

// ---------------------------------------------------------------------------
// ListingsClient
// ---------------------------------------------------------------------------

pub struct ListingsClient {
    client: Client,
    config: ListingsConfig,
    token: Mutex<TokenState>,
}

impl ListingsClient {
    pub fn new(client: Client, mut config: ListingsConfig) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self {
            client,
            config,
            token: Mutex::new(TokenState::Empty),
        }
    }

    pub fn config(&self) -> &ListingsConfig {
        &self.config
    }

    /// Whether a token is cached and still outside the expiry margin.
    pub fn has_valid_token(&self) -> bool {
        self.cached_token(Instant::now()).is_some()
    }

    /// Forget the cached token.
    pub fn clear_token(&self) {
        if let Ok(mut state) = self.token.lock() {
            *state = TokenState::Empty;
        }
    }

    /// Search fixed-price listings for `query`, most expensive first.
    ///
    /// Never fails: token or search errors are logged and produce an empty
    /// vector. At most five listings are returned.
    pub fn search(&self, query: &str) -> Vec<Listing> {
        match self.try_search(query) {
            Ok(listings) => listings,
            Err(e) => {
                tracing::warn!(query, error = %e, "listings search failed");
                Vec::new()
            }
        }
    }

    /// Public item page for a listing id.
    pub fn view_item_url(&self, item_id: &str) -> String {
        let prefix = if self.config.sandbox { "sandbox." } else { "" };
        format!("https://{}ebay.com/itm/{}", prefix, item_id)
    }

    fn try_search(&self, query: &str) -> Result<Vec<Listing>> {
        let token = self.access_token()?;
        let url = format!("{}{}", self.config.base_url, config::LISTINGS_SEARCH_PATH);
        let q = format!("{} {}", config::LISTINGS_QUERY_PREFIX, query.trim());
        let limit = config::LISTINGS_LIMIT.to_string();
        tracing::debug!(%url, q = %q, "listings request");

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&token)
            .header("X-EBAY-C-MARKETPLACE-ID", config::LISTINGS_MARKETPLACE_ID)
            .header("X-EBAY-C-ENDUSERCTX", config::LISTINGS_END_USER_CONTEXT)
            .query(&[
                ("q", q.as_str()),
                ("category_ids", config::LISTINGS_CATEGORY_ID),
                ("limit", limit.as_str()),
                ("filter", config::LISTINGS_BUYING_FILTER),
                ("sort", config::LISTINGS_SORT),
                ("fieldgroups", config::LISTINGS_FIELD_GROUPS),
            ])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(HubError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let page: ItemSummaryPage = serde_json::from_str(&resp.text()?)?;
        let mut listings = page.item_summaries;
        listings.truncate(config::LISTINGS_LIMIT);
        Ok(listings)
    }

    // -- Token state ---------------------------------------------------------

    fn cached_token(&self, now: Instant) -> Option<String> {
        let state = self.token.lock().ok()?;
        match &*state {
            TokenState::Valid(token) if token.is_valid_at(now, self.config.expiry_margin) => {
                Some(token.value.clone())
            }
            _ => None,
        }
    }

    /// Return the cached token, requesting a new one when needed.
    ///
    /// The lock is not held during the request, so concurrent callers may both
    /// refresh; the last write wins.
    fn access_token(&self) -> Result<String> {
        if let Some(token) = self.cached_token(Instant::now()) {
            return Ok(token);
        }

        let credentials = self
            .config
            .credentials
            .as_ref()
            .ok_or_else(|| HubError::Auth("listings credentials are not configured".into()))?;

        let url = format!("{}{}", self.config.base_url, config::LISTINGS_OAUTH_PATH);
        tracing::debug!(%url, "requesting listings access token");

        let issued_at = Instant::now();
        let resp = self
            .client
            .post(&url)
            .basic_auth(&credentials.app_id, Some(&credentials.cert_id))
            .form(&[
                ("grant_type", "client_credentials"),
                ("scope", config::LISTINGS_OAUTH_SCOPE),
            ])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(HubError::Auth(format!("token endpoint returned {}", status.as_u16())));
        }

        let grant: TokenResponse = serde_json::from_str(&resp.text()?)?;
        let token = AccessToken::issued(grant, issued_at)?;
        let value = token.value.clone();

        let mut state = self
            .token
            .lock()
            .map_err(|_| HubError::Auth("token cache lock poisoned".into()))?;
        *state = TokenState::Valid(token);
        Ok(value)
    }
}

// ---------------------------------------------------------------------------
// Marketplace search links
// ---------------------------------------------------------------------------

/// Keyword search page on the marketplace site, used as the manual fallback
/// when no listings could be fetched. `newly_listed` sorts by newest first.
pub fn marketplace_search_url(query: &str, newly_listed: bool) -> String {
    let mut params = vec![("_nkw", query.trim().to_string())];
    if newly_listed {
        params.push(("_sop", "10".to_string()));
    }
    match reqwest::Url::parse_with_params(config::MARKETPLACE_SEARCH_URL, &params) {
        Ok(url) => url.to_string(),
        Err(_) => config::MARKETPLACE_SEARCH_URL.to_string(),
    }
}
