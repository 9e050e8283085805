//! Deck construction and drawing.
//!
//! The deck is built in a fixed order (per category: ranks 2..=10, then
//! three investment cards) and shuffled once. Cards are drawn from the top,
//! which is the end of the backing vec.

use serde::{Deserialize, Serialize};

use super::card::{Card, Category, MAX_RANK, MIN_RANK};
use crate::core::GameRng;

/// Investment cards per category.
pub const INVESTMENTS_PER_CATEGORY: usize = 3;

/// Total cards in a full deck.
pub const DECK_SIZE: usize = 60;

/// The draw pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the full 60-card deck in construction order (unshuffled).
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for category in Category::all() {
            cards.extend((MIN_RANK..=MAX_RANK).map(|rank| Card::new(rank, category)));
            cards.extend(std::iter::repeat(Card::investment(category)).take(INVESTMENTS_PER_CATEGORY));
        }
        Self { cards }
    }

    /// Build the full deck and shuffle it once.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Create a deck from explicit cards; the last card is the top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CATEGORY_COUNT;

    #[test]
    fn test_standard_deck_composition() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), DECK_SIZE);

        for category in Category::all() {
            let in_category: Vec<_> = deck
                .as_slice()
                .iter()
                .filter(|c| c.category() == category)
                .collect();
            let investments = in_category.iter().filter(|c| c.is_investment()).count();
            let mut ranks: Vec<_> = in_category
                .iter()
                .filter(|c| !c.is_investment())
                .map(|c| c.rank())
                .collect();
            ranks.sort_unstable();

            assert_eq!(investments, INVESTMENTS_PER_CATEGORY);
            assert_eq!(ranks, (2..=10).collect::<Vec<_>>());
        }
        assert_eq!(DECK_SIZE, CATEGORY_COUNT * 12);
    }

    #[test]
    fn test_standard_deck_has_no_rank_zero_or_one() {
        assert!(Deck::standard().as_slice().iter().all(|c| c.rank() == -1 || c.rank() >= 2));
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        assert_ne!(deck, Deck::standard());

        let key = |c: &Card| (c.category(), c.rank());
        let mut shuffled = deck.as_slice().to_vec();
        let mut standard = Deck::standard().as_slice().to_vec();
        shuffled.sort_by_key(key);
        standard.sort_by_key(key);
        assert_eq!(shuffled, standard);
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = Deck::shuffled(&mut GameRng::new(9));
        let b = Deck::shuffled(&mut GameRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_takes_from_top() {
        let c = Category::new(0);
        let mut deck = Deck::from_cards(vec![Card::new(2, c), Card::new(9, c)]);

        assert_eq!(deck.draw(), Some(Card::new(9, c)));
        assert_eq!(deck.draw(), Some(Card::new(2, c)));
        assert_eq!(deck.draw(), None);
        assert!(deck.is_empty());
    }
}
