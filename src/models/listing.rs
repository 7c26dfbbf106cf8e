use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Listing — A fixed-price marketplace offer (item summary)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub item_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: ListingPrice,
    pub image: Option<ListingImage>,
    #[serde(default)]
    pub item_web_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingPrice {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingImage {
    pub image_url: String,
}

impl Listing {
    /// Price amount parsed from the string the API returns.
    pub fn amount(&self) -> Option<f64> {
        self.price.value.trim().parse().ok()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().map(|i| i.image_url.as_str())
    }
}

/// Body of the item-summary search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummaryPage {
    #[serde(default)]
    pub item_summaries: Vec<Listing>,
    pub total: Option<u64>,
    pub href: Option<String>,
}
