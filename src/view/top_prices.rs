//! Top-prices leaderboard view: search by name, filter by rarity, paginate.

use crate::config;
use crate::models::Card;

use super::pagination::Page;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RarityFilter {
    #[default]
    All,
    /// Exact rarity name, compared case-insensitively.
    Only(String),
}

impl RarityFilter {
    /// `"ALL"` (any case) or an empty string selects every rarity.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            RarityFilter::All
        } else {
            RarityFilter::Only(value.to_string())
        }
    }

    pub fn accepts(&self, card: &Card) -> bool {
        match self {
            RarityFilter::All => true,
            RarityFilter::Only(rarity) => card
                .rarity
                .as_deref()
                .is_some_and(|r| r.to_lowercase() == rarity.to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopPricesAction {
    Search(String),
    Rarity(RarityFilter),
    GoToPage(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopPricesState {
    pub search: String,
    pub rarity: RarityFilter,
    pub page: usize,
}

impl Default for TopPricesState {
    fn default() -> Self {
        Self {
            search: String::new(),
            rarity: RarityFilter::All,
            page: 1,
        }
    }
}

impl TopPricesState {
    /// Apply one user action. Search and rarity changes return to page 1.
    pub fn update(self, action: TopPricesAction) -> Self {
        match action {
            TopPricesAction::Search(search) => Self {
                search,
                page: 1,
                ..self
            },
            TopPricesAction::Rarity(rarity) => Self {
                rarity,
                page: 1,
                ..self
            },
            TopPricesAction::GoToPage(page) => Self { page, ..self },
        }
    }

    /// Render the selected page of an already ranked leaderboard.
    pub fn render<'a>(&self, ranked: &'a [Card]) -> Page<'a, Card> {
        let term = self.search.to_lowercase();
        let filtered: Vec<&Card> = ranked
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&term) && self.rarity.accepts(c))
            .collect();
        Page::build(filtered, self.page, config::TOP_PRICES_PAGE_SIZE)
    }
}

/// Display prices for a leaderboard entry: normal and reverse holofoil market
/// prices formatted to cents, `None` when missing or zero.
pub fn display_prices(card: &Card) -> (Option<String>, Option<String>) {
    let fmt = |finish: &str| {
        card.market_price(finish)
            .filter(|p| *p > 0.0)
            .map(|p| format!("{:.2}", p))
    };
    (fmt("normal"), fmt("reverseHolofoil"))
}
