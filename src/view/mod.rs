//! View state and pure render functions.
//!
//! Every view keeps its interactive state (search text, sort key, page,
//! filters) in an immutable struct. User input is applied with
//! `state.update(action)`, which returns the next state, and `state.render(..)`
//! derives the visible items from already fetched data.

pub mod card_detail;
pub mod card_grid;
pub mod pagination;
pub mod price_chart;
pub mod set_browser;
pub mod top_prices;

pub use card_grid::{CardGridAction, CardGridState, CardSort};
pub use pagination::{page_count, page_slice, page_window, Page};
pub use set_browser::{group_by_series, SeriesGroup, SetBrowserAction, SetBrowserState, SetFilter};
pub use top_prices::{RarityFilter, TopPricesAction, TopPricesState};
