use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PricePoint — One day of the synthesized price-history chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PricePoint {
    /// Short date label, e.g. `"Oct 16"`.
    pub date: String,
    pub raw: f64,
    pub psa8: f64,
    pub psa9: f64,
    pub psa10: f64,
}
