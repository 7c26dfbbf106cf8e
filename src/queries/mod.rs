//! Query modules for the card-catalog API.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and exposes methods
//! returning `Result<T>` with typed model payloads.

pub mod cards;
pub mod sets;
pub mod top_prices;

pub use cards::{CardQuery, SearchCardsParams};
pub use sets::{SetQuery, SetWithCards};
pub use top_prices::TopPricesQuery;
