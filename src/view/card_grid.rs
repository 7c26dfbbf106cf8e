//! Card grid of a set detail view: search by name or number, sort, paginate.

use std::cmp::Ordering;

use crate::config;
use crate::models::Card;

use super::pagination::Page;

// ---------------------------------------------------------------------------
// CardSort
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardSort {
    /// Secondary-market price, high to low.
    #[default]
    PriceDesc,
    /// Secondary-market price, low to high.
    PriceAsc,
    /// Collector number, ascending.
    Number,
}

impl std::str::FromStr for CardSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price-desc" => Ok(Self::PriceDesc),
            "price-asc" => Ok(Self::PriceAsc),
            "number" => Ok(Self::Number),
            other => Err(format!("unknown sort '{}' (expected price-desc, price-asc or number)", other)),
        }
    }
}

/// Ordering by collector number.
///
/// Numbers compare by the value of their leading digits. Numbers without
/// leading digits (e.g. `"SWSH001"`) come after every numeric one. Equal
/// values fall back to the raw string.
pub fn compare_collector_numbers(a: &Card, b: &Card) -> Ordering {
    match (a.collector_number_value(), b.collector_number_value()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.number.cmp(&b.number))
}

/// Sort cards in place (stable).
pub fn sort_cards(cards: &mut [&Card], sort: CardSort) {
    match sort {
        CardSort::PriceDesc => {
            cards.sort_by(|a, b| b.effective_price().total_cmp(&a.effective_price()))
        }
        CardSort::PriceAsc => {
            cards.sort_by(|a, b| a.effective_price().total_cmp(&b.effective_price()))
        }
        CardSort::Number => cards.sort_by(|a, b| compare_collector_numbers(a, b)),
    }
}

/// Case-insensitive substring match on name or collector number.
pub fn matches_search(card: &Card, term: &str) -> bool {
    let term = term.to_lowercase();
    card.name.to_lowercase().contains(&term) || card.number.to_lowercase().contains(&term)
}

// ---------------------------------------------------------------------------
// CardGridState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardGridAction {
    Search(String),
    Sort(CardSort),
    GoToPage(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGridState {
    pub search: String,
    pub sort: CardSort,
    pub page: usize,
}

impl Default for CardGridState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: CardSort::default(),
            page: 1,
        }
    }
}

impl CardGridState {
    /// Apply one user action. Changing the search text returns to page 1.
    pub fn update(self, action: CardGridAction) -> Self {
        match action {
            CardGridAction::Search(search) => Self {
                search,
                page: 1,
                ..self
            },
            CardGridAction::Sort(sort) => Self { sort, ..self },
            CardGridAction::GoToPage(page) => Self { page, ..self },
        }
    }

    /// Filtered and sorted cards, before pagination.
    pub fn visible<'a>(&self, cards: &'a [Card]) -> Vec<&'a Card> {
        let mut visible: Vec<&Card> = cards
            .iter()
            .filter(|c| matches_search(c, &self.search))
            .collect();
        sort_cards(&mut visible, self.sort);
        visible
    }

    /// The page of cards this state selects.
    pub fn render<'a>(&self, cards: &'a [Card]) -> Page<'a, Card> {
        Page::build(self.visible(cards), self.page, config::CARD_GRID_PAGE_SIZE)
    }
}
