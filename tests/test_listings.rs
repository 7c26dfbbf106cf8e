//! Listings client tests: token caching, request shape and failure handling.

mod common;

use std::time::{Duration, Instant};

use cardsethub_sdk::listings::marketplace_search_url;
use cardsethub_sdk::models::{AccessToken, TokenResponse};
use cardsethub_sdk::{CardSetHub, Credentials, HubError};
use httpmock::prelude::*;

const TOKEN_PATH: &str = "/identity/v1/oauth2/token";
const SEARCH_PATH: &str = "/buy/browse/v1/item_summary/search";

// ---------------------------------------------------------------------------
// Token cache
// ---------------------------------------------------------------------------

#[test]
fn token_is_requested_once_while_valid() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST)
            .path(TOKEN_PATH)
            .header("authorization", common::BASIC_APP_CERT)
            .body_contains("grant_type=client_credentials");
        then.status(200).json_body(common::token_json("tok-1", 3600));
    });
    let search_mock = server.mock(|when, then| {
        when.method(GET)
            .path(SEARCH_PATH)
            .header("authorization", "Bearer tok-1");
        then.status(200).json_body(common::item_summaries_json(2));
    });

    let hub = common::hub_with_credentials(&server);
    assert!(!hub.listings().has_valid_token());

    let first = hub.listings().search("Base Charizard 4");
    let second = hub.listings().search("Jungle Pikachu 60");

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
    assert_eq!(token_mock.hits(), 1);
    assert_eq!(search_mock.hits(), 2);
    assert!(hub.listings().has_valid_token());
}

#[test]
fn token_inside_expiry_margin_is_refreshed() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST).path(TOKEN_PATH);
        then.status(200).json_body(common::token_json("short-lived", 30));
    });
    server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200).json_body(common::item_summaries_json(1));
    });

    let hub = common::hub_with_credentials(&server);
    hub.listings().search("a");
    hub.listings().search("b");

    assert_eq!(token_mock.hits(), 2);
    assert!(!hub.listings().has_valid_token());
}

#[test]
fn expiry_margin_is_configurable() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST).path(TOKEN_PATH);
        then.status(200).json_body(common::token_json("tok", 30));
    });
    server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200).json_body(common::item_summaries_json(1));
    });

    let hub = CardSetHub::builder()
        .listings_base(server.base_url())
        .credentials(Credentials::new("app", "cert"))
        .token_expiry_margin(Duration::from_secs(5))
        .build()
        .unwrap();
    hub.listings().search("a");
    hub.listings().search("b");

    assert_eq!(token_mock.hits(), 1);
}

#[test]
fn clear_token_forces_a_new_grant() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST).path(TOKEN_PATH);
        then.status(200).json_body(common::token_json("tok", 7200));
    });
    server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200).json_body(common::item_summaries_json(1));
    });

    let hub = common::hub_with_credentials(&server);
    hub.listings().search("a");
    hub.listings().clear_token();
    hub.listings().search("a");

    assert_eq!(token_mock.hits(), 2);
}

#[test]
fn out_of_range_token_lifetime_yields_empty() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST).path(TOKEN_PATH);
        then.status(200).json_body(common::token_json("t", u64::MAX));
    });
    let search_mock = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200).json_body(common::item_summaries_json(1));
    });

    let hub = common::hub_with_credentials(&server);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        hub.listings().search("Charizard")
    }));

    assert!(result.unwrap().is_empty());
    assert_eq!(token_mock.hits(), 1);
    assert_eq!(search_mock.hits(), 0);
    assert!(!hub.listings().has_valid_token());
}

fn grant(expires_in: u64) -> TokenResponse {
    TokenResponse {
        access_token: "tok".into(),
        expires_in,
        token_type: None,
    }
}

#[test]
fn token_is_valid_until_its_lifetime_ends() {
    let t0 = Instant::now();
    let lifetime = Duration::from_secs(7200);
    let token = AccessToken::issued(grant(7200), t0).unwrap();

    assert!(token.is_valid_at(t0 + lifetime - Duration::from_millis(1), Duration::ZERO));
    assert!(!token.is_valid_at(t0 + lifetime, Duration::ZERO));
    assert!(!token.is_valid_at(t0 + lifetime + Duration::from_secs(1), Duration::ZERO));
}

#[test]
fn expiry_margin_moves_the_boundary_forward() {
    let t0 = Instant::now();
    let token = AccessToken::issued(grant(7200), t0).unwrap();
    let margin = Duration::from_secs(60);

    assert!(token.is_valid_at(t0 + Duration::from_secs(7139), margin));
    assert!(!token.is_valid_at(t0 + Duration::from_secs(7140), margin));
    assert!(!token.is_valid_at(t0, Duration::MAX));
}

#[test]
fn out_of_range_lifetime_is_an_auth_error() {
    let err = AccessToken::issued(grant(u64::MAX), Instant::now()).unwrap_err();
    assert!(matches!(err, HubError::Auth(_)));
}

// ---------------------------------------------------------------------------
// Search request
// ---------------------------------------------------------------------------

#[test]
fn search_sends_marketplace_parameters() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(TOKEN_PATH);
        then.status(200).json_body(common::token_json("tok", 3600));
    });
    let search_mock = server.mock(|when, then| {
        when.method(GET)
            .path(SEARCH_PATH)
            .header("X-EBAY-C-MARKETPLACE-ID", "EBAY_US")
            .query_param("q", "Pokemon TCG Base Charizard 4")
            .query_param("category_ids", "183454")
            .query_param("limit", "5")
            .query_param("filter", "buyingOptions:{FIXED_PRICE}")
            .query_param("sort", "-price")
            .query_param("fieldgroups", "FULL");
        then.status(200).json_body(common::item_summaries_json(3));
    });

    let listings = common::hub_with_credentials(&server)
        .listings()
        .search("Base Charizard 4");

    search_mock.assert();
    assert_eq!(listings.len(), 3);
    assert_eq!(listings[0].price.currency, "USD");
    assert_eq!(listings[0].amount(), Some(500.0));
    assert!(listings[0].image_url().unwrap().ends_with(".jpg"));
}

#[test]
fn search_returns_at_most_five_listings() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(TOKEN_PATH);
        then.status(200).json_body(common::token_json("tok", 3600));
    });
    server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200).json_body(common::item_summaries_json(8));
    });

    let listings = common::hub_with_credentials(&server).listings().search("Charizard");
    assert_eq!(listings.len(), 5);
}

#[test]
fn search_without_results_is_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(TOKEN_PATH);
        then.status(200).json_body(common::token_json("tok", 3600));
    });
    server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200).json_body(serde_json::json!({ "total": 0 }));
    });

    assert!(common::hub_with_credentials(&server).listings().search("x").is_empty());
}

// ---------------------------------------------------------------------------
// Failures become empty results
// ---------------------------------------------------------------------------

#[test]
fn token_failure_yields_empty_without_search() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(TOKEN_PATH);
        then.status(401).body("{\"error\":\"invalid_client\"}");
    });
    let search_mock = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200).json_body(common::item_summaries_json(1));
    });

    let hub = common::hub_with_credentials(&server);
    assert!(hub.listings().search("Charizard").is_empty());
    assert_eq!(search_mock.hits(), 0);
    assert!(!hub.listings().has_valid_token());
}

#[test]
fn search_failure_yields_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(TOKEN_PATH);
        then.status(200).json_body(common::token_json("tok", 3600));
    });
    server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(500);
    });

    assert!(common::hub_with_credentials(&server).listings().search("Charizard").is_empty());
}

#[test]
fn missing_credentials_yield_empty_without_requests() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST).path(TOKEN_PATH);
        then.status(200).json_body(common::token_json("tok", 3600));
    });

    let hub = common::hub_for(&server);
    assert!(hub.listings().search("Charizard").is_empty());
    assert_eq!(token_mock.hits(), 0);
}

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

#[test]
fn view_item_url_follows_environment() {
    let server = MockServer::start();
    let production = common::hub_for(&server);
    assert_eq!(
        production.listings().view_item_url("v1|123|0"),
        "https://ebay.com/itm/v1|123|0"
    );

    let sandbox = CardSetHub::builder()
        .listings_base(server.base_url())
        .sandbox(true)
        .build()
        .unwrap();
    assert_eq!(
        sandbox.listings().view_item_url("v1|123|0"),
        "https://sandbox.ebay.com/itm/v1|123|0"
    );
}

#[test]
fn marketplace_search_url_encodes_keywords() {
    assert_eq!(
        marketplace_search_url("Base Charizard 4", false),
        "https://www.ebay.com/sch/i.html?_nkw=Base+Charizard+4"
    );
    assert_eq!(
        marketplace_search_url("Jungle Pikachu 60", true),
        "https://www.ebay.com/sch/i.html?_nkw=Jungle+Pikachu+60&_sop=10"
    );
}

#[test]
fn credentials_debug_redacts_secret() {
    let debug = format!("{:?}", Credentials::new("my-app", "super-secret"));
    assert!(debug.contains("my-app"));
    assert!(!debug.contains("super-secret"));
}
