use std::collections::HashMap;
use std::time::Duration;

pub const CATALOG_BASE: &str = "https://api.pokemontcg.io/v2";
pub const CATALOG_IMAGE_BASE: &str = "https://images.pokemontcg.io";
pub const OFFICIAL_SITE_BASE: &str = "https://www.pokemon.com";

pub const LISTINGS_BASE: &str = "https://api.ebay.com";
pub const LISTINGS_OAUTH_PATH: &str = "/identity/v1/oauth2/token";
pub const LISTINGS_SEARCH_PATH: &str = "/buy/browse/v1/item_summary/search";
pub const LISTINGS_OAUTH_SCOPE: &str = "https://api.ebay.com/oauth/api_scope";
pub const LISTINGS_CATEGORY_ID: &str = "183454";
pub const LISTINGS_LIMIT: usize = 5;
pub const LISTINGS_BUYING_FILTER: &str = "buyingOptions:{FIXED_PRICE}";
pub const LISTINGS_SORT: &str = "-price";
pub const LISTINGS_FIELD_GROUPS: &str = "FULL";
pub const LISTINGS_QUERY_PREFIX: &str = "Pokemon TCG";
pub const LISTINGS_MARKETPLACE_ID: &str = "EBAY_US";
pub const LISTINGS_END_USER_CONTEXT: &str = "contextualLocation=country=US,zip=90210";
pub const MARKETPLACE_SEARCH_URL: &str = "https://www.ebay.com/sch/i.html";

pub const ENV_APP_ID: &str = "CARDSETHUB_LISTINGS_APP_ID";
pub const ENV_CERT_ID: &str = "CARDSETHUB_LISTINGS_CERT_ID";

pub const CARD_GRID_PAGE_SIZE: usize = 20;
pub const TOP_PRICES_PAGE_SIZE: usize = 24;
pub const PAGE_WINDOW: usize = 5;
pub const RECENT_SET_YEAR: i32 = 2022;

pub const TOP_PRICES_ORDER_BY: &str = "-tcgplayer.prices.holofoil.market,-tcgplayer.prices.reverseHolofoil.market,-tcgplayer.prices.normal.market";
pub const TOP_PRICES_OVERALL_PAGE_SIZE: u32 = 100;
pub const TOP_PRICES_RARITY_PAGE_SIZE: u32 = 50;

/// Per-rarity leaderboard queries as `(label, catalog query)` pairs.
pub const RARITY_QUERIES: [(&str, &str); 5] = [
    ("rare secret", r#"rarity:"rare secret" OR rarity:"hyper rare""#),
    ("rare holo", r#"rarity:"rare holo""#),
    ("rare", r#"rarity:"rare""#),
    ("common", r#"rarity:"common""#),
    ("uncommon", r#"rarity:"uncommon""#),
];

/// Official banner artwork paths for sets that have one, keyed by lowercase set id.
pub fn set_banners() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("sv7", "/static-assets/content-assets/cms2/img/trading-card-game/series/sv_series/sv07/sv07-banner.png"),
        ("sv6", "/static-assets/content-assets/cms2/img/trading-card-game/series/sv_series/sv06/sv06-banner.png"),
        ("sv5", "/static-assets/content-assets/cms2/img/trading-card-game/series/sv_series/sv05/sv05-banner.png"),
        ("sv4", "/static-assets/content-assets/cms2/img/trading-card-game/series/sv_series/sv04/sv04-banner.png"),
        ("sv3", "/static-assets/content-assets/cms2/img/trading-card-game/series/sv_series/sv03/sv03-banner.png"),
        ("sv2", "/static-assets/content-assets/cms2/img/trading-card-game/series/sv_series/sv02/sv02-banner.png"),
        ("sv1", "/static-assets/content-assets/cms2/img/trading-card-game/series/sv_series/sv01/sv01-banner.png"),
    ])
}

/// Banner image for a set: the official artwork when known, otherwise the
/// catalog CDN background.
pub fn set_banner_url(set_id: &str) -> String {
    match set_banners().get(set_id.to_lowercase().as_str()) {
        Some(path) => format!("{}{}", OFFICIAL_SITE_BASE, path),
        None => format!("{}/{}/background.png", CATALOG_IMAGE_BASE, set_id),
    }
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// Application-level OAuth credentials for the listings API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub app_id: String,
    pub cert_id: String,
}

impl Credentials {
    pub fn new(app_id: impl Into<String>, cert_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            cert_id: cert_id.into(),
        }
    }

    /// Read credentials from `CARDSETHUB_LISTINGS_APP_ID` and
    /// `CARDSETHUB_LISTINGS_CERT_ID`. Returns `None` unless both are set and non-empty.
    pub fn from_env() -> Option<Self> {
        let app_id = std::env::var(ENV_APP_ID).ok()?;
        let cert_id = std::env::var(ENV_CERT_ID).ok()?;
        if app_id.trim().is_empty() || cert_id.trim().is_empty() {
            return None;
        }
        Some(Self::new(app_id, cert_id))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("cert_id", &"<redacted>")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// RetryPolicy
// ---------------------------------------------------------------------------

/// Fixed-count retry loop used by the leaderboard fetches.
///
/// `max_retries` extra attempts follow the first one, separated by a constant
/// `delay` (zero by default). There is no backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay: Duration::ZERO,
        }
    }
}

impl RetryPolicy {
    /// A policy that makes exactly one attempt.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            delay: Duration::ZERO,
        }
    }
}
