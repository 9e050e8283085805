//! Shared discard piles, one per category.
//!
//! Discarding pushes to the back of the card's category pile; drawing takes
//! the front, the oldest card, which is the only one either player sees.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::cards::{Card, Category, CATEGORY_COUNT};
use crate::core::EngineError;

/// One category's discard pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    cards: VecDeque<Card>,
}

impl DiscardPile {
    /// The visible card.
    #[must_use]
    pub fn front(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// All five discard piles, indexed by category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPiles {
    piles: [DiscardPile; CATEGORY_COUNT],
}

impl DiscardPiles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `card` onto its category's pile.
    pub fn discard(&mut self, card: Card) {
        self.piles[card.category().index()].cards.push_back(card);
    }

    #[must_use]
    pub fn pile(&self, category: Category) -> &DiscardPile {
        &self.piles[category.index()]
    }

    /// The visible card of `category`'s pile.
    #[must_use]
    pub fn front(&self, category: Category) -> Option<Card> {
        self.pile(category).front()
    }

    /// Remove and return the visible card of `category`'s pile.
    pub fn take_front(&mut self, category: Category) -> Result<Card, EngineError> {
        self.piles[category.index()]
            .cards
            .pop_front()
            .ok_or(EngineError::DiscardPileEmpty { category })
    }

    /// Visible cards of the non-empty piles, in category order.
    pub fn fronts(&self) -> impl Iterator<Item = (Category, Card)> + '_ {
        Category::all().filter_map(move |category| self.front(category).map(|card| (category, card)))
    }

    /// First non-empty pile in category order.
    #[must_use]
    pub fn first_non_empty(&self) -> Option<Category> {
        self.fronts().next().map(|(category, _)| category)
    }

    /// Total cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(DiscardPile::len).sum()
    }
}
