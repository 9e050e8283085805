//! Cards and the deck.
//!
//! ## Key Types
//!
//! - `Card`: Immutable (rank, category) value
//! - `Category`: One of the five card categories
//! - `Deck`: The shuffled 60-card draw pile

pub mod card;
pub mod deck;

pub use card::{Card, Category, CATEGORY_COUNT, INVESTMENT_RANK, MAX_RANK, MIN_RANK};
pub use deck::{Deck, DECK_SIZE, INVESTMENTS_PER_CATEGORY};
