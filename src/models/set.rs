use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// CardSet — A released set as returned by the catalog API
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSet {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub series: String,
    #[serde(default)]
    pub printed_total: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub legalities: BTreeMap<String, String>,
    pub ptcgo_code: Option<String>,
    #[serde(default)]
    pub release_date: String,
    pub updated_at: Option<String>,
    #[serde(default)]
    pub images: SetImages,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetImages {
    pub symbol: Option<String>,
    pub logo: Option<String>,
}

impl CardSet {
    /// Parse the release date. The catalog uses `YYYY/MM/DD`; ISO `YYYY-MM-DD`
    /// is accepted as well.
    pub fn release_date(&self) -> Option<NaiveDate> {
        let raw = self.release_date.trim();
        NaiveDate::parse_from_str(raw, "%Y/%m/%d")
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release_date().map(|d| d.year())
    }

    /// Legality badges such as `"Unlimited: Legal"`, in format-name order.
    pub fn legality_badges(&self) -> Vec<String> {
        self.legalities
            .iter()
            .map(|(format, status)| format!("{}: {}", capitalize(format), status))
            .collect()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Response envelopes
// ---------------------------------------------------------------------------

/// `{"data": [...]}` list envelope used by every catalog list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataList<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub count: Option<u32>,
    pub total_count: Option<u32>,
}

/// `{"data": {...}}` single-record envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataItem<T> {
    pub data: T,
}
