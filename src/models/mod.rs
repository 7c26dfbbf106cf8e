pub mod card;
pub mod listing;
pub mod price;
pub mod set;
pub mod token;

pub use card::*;
pub use listing::*;
pub use price::*;
pub use set::*;
pub use token::*;
