//! Shared test fixtures for the CardSetHub SDK integration tests.
//!
//! Provides sample catalog records (sets and cards) as JSON and typed values,
//! plus `hub_for()` which builds a hub whose catalog and listings endpoints
//! both point at an `httpmock` server.

#![allow(dead_code)]

use cardsethub_sdk::models::{Card, CardSet};
use cardsethub_sdk::{CardSetHub, Credentials, RetryPolicy};
use httpmock::MockServer;
use serde_json::{json, Value};

/// Build a hub against `server` with immediate retries and no credentials.
pub fn hub_for(server: &MockServer) -> CardSetHub {
    CardSetHub::builder()
        .catalog_base(server.base_url())
        .listings_base(server.base_url())
        .retry(RetryPolicy::default())
        .build()
        .unwrap()
}

/// Build a hub against `server` with listings credentials `app` / `cert`.
pub fn hub_with_credentials(server: &MockServer) -> CardSetHub {
    CardSetHub::builder()
        .catalog_base(server.base_url())
        .listings_base(server.base_url())
        .credentials(Credentials::new("app", "cert"))
        .build()
        .unwrap()
}

/// `Basic` authorization header for `app:cert`.
pub const BASIC_APP_CERT: &str = "Basic YXBwOmNlcnQ=";

// ---------------------------------------------------------------------------
// Sets
// ---------------------------------------------------------------------------

pub fn base_set_json() -> Value {
    json!({
        "id": "base1",
        "name": "Base",
        "series": "Base",
        "printedTotal": 102,
        "total": 102,
        "legalities": { "unlimited": "Legal" },
        "ptcgoCode": "BS",
        "releaseDate": "1999/01/09",
        "updatedAt": "2022/10/10 15:12:00",
        "images": {
            "symbol": "https://images.pokemontcg.io/base1/symbol.png",
            "logo": "https://images.pokemontcg.io/base1/logo.png"
        }
    })
}

pub fn jungle_json() -> Value {
    json!({
        "id": "base2",
        "name": "Jungle",
        "series": "Base",
        "printedTotal": 64,
        "total": 64,
        "legalities": { "unlimited": "Legal" },
        "ptcgoCode": "JU",
        "releaseDate": "1999/06/16",
        "images": {}
    })
}

pub fn scarlet_violet_json() -> Value {
    json!({
        "id": "sv1",
        "name": "Scarlet & Violet",
        "series": "Scarlet & Violet",
        "printedTotal": 198,
        "total": 258,
        "legalities": { "unlimited": "Legal", "standard": "Legal", "expanded": "Legal" },
        "releaseDate": "2023/03/31",
        "images": {}
    })
}

pub fn paldea_evolved_json() -> Value {
    json!({
        "id": "sv2",
        "name": "Paldea Evolved",
        "series": "Scarlet & Violet",
        "printedTotal": 193,
        "total": 279,
        "legalities": { "unlimited": "Legal" },
        "releaseDate": "2023/06/09",
        "images": {}
    })
}

pub fn sets_json() -> Value {
    json!({
        "data": [base_set_json(), jungle_json(), scarlet_violet_json(), paldea_evolved_json()],
        "page": 1,
        "pageSize": 250,
        "count": 4,
        "totalCount": 4
    })
}

pub fn sample_sets() -> Vec<CardSet> {
    serde_json::from_value(sets_json()["data"].clone()).unwrap()
}

/// A bare set record with only the fields the browser uses.
pub fn set(id: &str, name: &str, series: &str, release_date: &str) -> CardSet {
    CardSet {
        id: id.to_string(),
        name: name.to_string(),
        series: series.to_string(),
        release_date: release_date.to_string(),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

pub fn charizard_json() -> Value {
    json!({
        "id": "base1-4",
        "name": "Charizard",
        "supertype": "Pokémon",
        "subtypes": ["Stage 2"],
        "hp": "120",
        "types": ["Fire"],
        "evolvesFrom": "Charmeleon",
        "attacks": [{
            "name": "Fire Spin",
            "cost": ["Fire", "Fire", "Fire", "Fire"],
            "convertedEnergyCost": 4,
            "damage": "100",
            "text": "Discard 2 Energy cards attached to Charizard in order to use this attack."
        }],
        "weaknesses": [{ "type": "Water", "value": "×2" }],
        "resistances": [{ "type": "Fighting", "value": "-30" }],
        "retreatCost": ["Colorless", "Colorless", "Colorless"],
        "convertedRetreatCost": 3,
        "set": base_set_json(),
        "number": "4",
        "artist": "Mitsuhiro Arita",
        "rarity": "Rare Holo",
        "nationalPokedexNumbers": [6],
        "legalities": { "unlimited": "Legal" },
        "images": {
            "small": "https://images.pokemontcg.io/base1/4.png",
            "large": "https://images.pokemontcg.io/base1/4_hires.png"
        },
        "tcgplayer": {
            "url": "https://prices.pokemontcg.io/tcgplayer/base1-4",
            "updatedAt": "2024/01/01",
            "prices": {
                "holofoil": { "low": 250.0, "mid": 400.0, "high": 1200.0, "market": 380.5, "directLow": null }
            }
        },
        "cardmarket": {
            "url": "https://prices.pokemontcg.io/cardmarket/base1-4",
            "updatedAt": "2024/01/01",
            "prices": {
                "averageSellPrice": 310.25,
                "lowPrice": 120.0,
                "trendPrice": 330.0,
                "germanProLow": 0.0,
                "suggestedPrice": 0.0,
                "reverseHoloSell": 0.0,
                "reverseHoloLow": 0.0,
                "reverseHoloTrend": 0.0,
                "lowPriceExPlus": 200.0,
                "avg1": 300.0,
                "avg7": 305.0,
                "avg30": 320.0,
                "reverseHoloAvg1": 0.0,
                "reverseHoloAvg7": 0.0,
                "reverseHoloAvg30": 0.0
            }
        }
    })
}

pub fn pikachu_json() -> Value {
    json!({
        "id": "base1-58",
        "name": "Pikachu",
        "supertype": "Pokémon",
        "subtypes": ["Basic"],
        "hp": "40",
        "types": ["Lightning"],
        "set": base_set_json(),
        "number": "58",
        "artist": "Mitsuhiro Arita",
        "rarity": "Common",
        "images": {},
        "tcgplayer": {
            "prices": {
                "normal": { "low": 1.0, "mid": 3.0, "high": 10.0, "market": 2.5 },
                "reverseHolofoil": { "market": 6.75 }
            }
        },
        "cardmarket": { "prices": { "averageSellPrice": 2.1 } }
    })
}

pub fn energy_json() -> Value {
    json!({
        "id": "base1-98",
        "name": "Fire Energy",
        "supertype": "Energy",
        "set": base_set_json(),
        "number": "98",
        "rarity": "Common",
        "images": {}
    })
}

pub fn cards_json(cards: Vec<Value>) -> Value {
    let count = cards.len();
    json!({
        "data": cards,
        "page": 1,
        "pageSize": 250,
        "count": count,
        "totalCount": count
    })
}

pub fn sample_cards() -> Vec<Card> {
    serde_json::from_value(json!([charizard_json(), pikachu_json(), energy_json()])).unwrap()
}

/// A card with a collector number and an optional Cardmarket average price.
pub fn card(id: &str, name: &str, number: &str, price: Option<f64>) -> Card {
    let mut value = json!({ "id": id, "name": name, "number": number });
    if let Some(price) = price {
        value["cardmarket"] = json!({ "prices": { "averageSellPrice": price } });
    }
    serde_json::from_value(value).unwrap()
}

/// A card with TCGplayer market prices per finish and a rarity.
pub fn priced_card(id: &str, name: &str, rarity: &str, finishes: &[(&str, f64)]) -> Card {
    let prices: serde_json::Map<String, Value> = finishes
        .iter()
        .map(|(finish, market)| (finish.to_string(), json!({ "market": market })))
        .collect();
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "rarity": rarity,
        "number": "1",
        "tcgplayer": { "prices": prices }
    }))
    .unwrap()
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

pub fn token_json(token: &str, expires_in: u64) -> Value {
    json!({
        "access_token": token,
        "expires_in": expires_in,
        "token_type": "Application Access Token"
    })
}

pub fn listing_json(item_id: &str, title: &str, price: &str) -> Value {
    json!({
        "itemId": item_id,
        "title": title,
        "price": { "value": price, "currency": "USD" },
        "image": { "imageUrl": format!("https://i.ebayimg.com/images/{}.jpg", item_id) },
        "itemWebUrl": format!("https://www.ebay.com/itm/{}", item_id)
    })
}

pub fn item_summaries_json(count: usize) -> Value {
    let items: Vec<Value> = (0..count)
        .map(|i| listing_json(&format!("v1|{}|0", 1000 + i), &format!("Charizard Base Set #{}", i), &format!("{}.00", 500 - i)))
        .collect();
    json!({
        "href": "https://api.ebay.com/buy/browse/v1/item_summary/search?q=charizard",
        "total": count,
        "itemSummaries": items
    })
}
