use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::set::CardSet;

// ---------------------------------------------------------------------------
// Card — A single catalog card with optional gameplay and pricing data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    pub supertype: Option<String>,
    #[serde(default)]
    pub subtypes: Vec<String>,
    pub hp: Option<String>,
    pub types: Option<Vec<String>>,
    pub evolves_from: Option<String>,
    pub evolves_to: Option<Vec<String>>,
    pub rules: Option<Vec<String>>,
    pub attacks: Option<Vec<Attack>>,
    pub weaknesses: Option<Vec<TypeModifier>>,
    pub resistances: Option<Vec<TypeModifier>>,
    pub retreat_cost: Option<Vec<String>>,
    pub converted_retreat_cost: Option<u32>,
    #[serde(default)]
    pub set: CardSet,
    #[serde(default)]
    pub number: String,
    pub artist: Option<String>,
    pub rarity: Option<String>,
    pub flavor_text: Option<String>,
    pub national_pokedex_numbers: Option<Vec<u32>>,
    #[serde(default)]
    pub legalities: BTreeMap<String, String>,
    #[serde(default)]
    pub images: CardImages,
    pub tcgplayer: Option<TcgPlayer>,
    pub cardmarket: Option<CardMarket>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub name: String,
    #[serde(default)]
    pub cost: Vec<String>,
    #[serde(default)]
    pub converted_energy_cost: u32,
    #[serde(default)]
    pub damage: String,
    #[serde(default)]
    pub text: String,
}

/// A weakness or resistance entry (`{"type": "Fire", "value": "×2"}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeModifier {
    #[serde(rename = "type")]
    pub type_field: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardImages {
    pub small: Option<String>,
    pub large: Option<String>,
}

// ---------------------------------------------------------------------------
// TcgPlayer — Retail-style price tiers keyed by finish
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcgPlayer {
    pub url: Option<String>,
    pub updated_at: Option<String>,
    /// Keyed by finish: `normal`, `holofoil`, `reverseHolofoil`, `1stEditionHolofoil`, ...
    #[serde(default)]
    pub prices: BTreeMap<String, PriceTier>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTier {
    pub low: Option<f64>,
    pub mid: Option<f64>,
    pub high: Option<f64>,
    pub market: Option<f64>,
    pub direct_low: Option<f64>,
}

// ---------------------------------------------------------------------------
// CardMarket — Secondary-market aggregate prices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMarket {
    pub url: Option<String>,
    pub updated_at: Option<String>,
    pub prices: Option<CardMarketPrices>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMarketPrices {
    pub average_sell_price: Option<f64>,
    pub low_price: Option<f64>,
    pub trend_price: Option<f64>,
    pub german_pro_low: Option<f64>,
    pub suggested_price: Option<f64>,
    pub reverse_holo_sell: Option<f64>,
    pub reverse_holo_low: Option<f64>,
    pub reverse_holo_trend: Option<f64>,
    pub low_price_ex_plus: Option<f64>,
    pub avg1: Option<f64>,
    pub avg7: Option<f64>,
    pub avg30: Option<f64>,
    pub reverse_holo_avg1: Option<f64>,
    pub reverse_holo_avg7: Option<f64>,
    pub reverse_holo_avg30: Option<f64>,
}

// ---------------------------------------------------------------------------
// Derived prices
// ---------------------------------------------------------------------------

impl Card {
    /// Market price for one TCGplayer finish, if listed.
    pub fn market_price(&self, finish: &str) -> Option<f64> {
        self.tcgplayer
            .as_ref()
            .and_then(|t| t.prices.get(finish))
            .and_then(|tier| tier.market)
    }

    /// Cardmarket average sell price, if listed.
    pub fn secondary_market_price(&self) -> Option<f64> {
        self.cardmarket
            .as_ref()
            .and_then(|c| c.prices.as_ref())
            .and_then(|p| p.average_sell_price)
    }

    /// Cardmarket average sell price with missing treated as zero.
    pub fn effective_price(&self) -> f64 {
        self.secondary_market_price().unwrap_or(0.0)
    }

    /// Highest TCGplayer market price across the normal, holofoil and reverse
    /// holofoil finishes; zero when none is listed.
    pub fn top_market_price(&self) -> f64 {
        ["normal", "holofoil", "reverseHolofoil"]
            .iter()
            .filter_map(|finish| self.market_price(finish))
            .fold(0.0, f64::max)
    }

    /// Numeric value of the leading digit run of the collector number
    /// (`"25"` -> 25, `"12a"` -> 12, `"SWSH001"` -> `None`).
    pub fn collector_number_value(&self) -> Option<u64> {
        let digits: String = self
            .number
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }
}
