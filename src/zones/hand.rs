//! A player's hand, kept sorted ascending by rank.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::EngineError;

/// Cards held by one player.
///
/// Insertion keeps the hand sorted by rank; cards of equal rank stay in
/// the order they arrived. A hand holds at most nine cards mid-turn, so it
/// lives inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 9]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card at its sorted position.
    pub fn insert(&mut self, card: Card) {
        let pos = self.cards.partition_point(|c| c.rank() <= card.rank());
        self.cards.insert(pos, card);
    }

    /// Get the card at `index`.
    pub fn get(&self, index: usize) -> Result<Card, EngineError> {
        self.cards
            .get(index)
            .copied()
            .ok_or(EngineError::HandIndexOutOfRange {
                index,
                len: self.cards.len(),
            })
    }

    /// Remove and return the card at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Card, EngineError> {
        if index >= self.cards.len() {
            return Err(EngineError::HandIndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Check the ascending-rank invariant.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.cards.windows(2).all(|w| w[0].rank() <= w[1].rank())
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut hand = Hand::new();
        for card in iter {
            hand.insert(card);
        }
        hand
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;

    fn card(rank: i32, category: u8) -> Card {
        Card::new(rank, Category::new(category))
    }

    #[test]
    fn test_insert_keeps_sorted() {
        let mut hand = Hand::new();
        for c in [card(7, 0), card(-1, 1), card(10, 2), card(2, 3), card(7, 4)] {
            hand.insert(c);
            assert!(hand.is_sorted());
        }

        let ranks: Vec<_> = hand.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![-1, 2, 7, 7, 10]);
    }

    #[test]
    fn test_equal_ranks_keep_arrival_order() {
        let hand: Hand = [card(5, 3), card(5, 1), card(5, 0)].into_iter().collect();
        let categories: Vec<_> = hand.iter().map(|c| c.category().index()).collect();
        assert_eq!(categories, vec![3, 1, 0]);
    }

    #[test]
    fn test_remove_and_bounds() {
        let mut hand: Hand = [card(3, 0), card(4, 0)].into_iter().collect();

        assert_eq!(
            hand.get(2),
            Err(EngineError::HandIndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(hand.remove(0), Ok(card(3, 0)));
        assert_eq!(hand.len(), 1);
        assert_eq!(
            hand.remove(1),
            Err(EngineError::HandIndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(hand.len(), 1);
    }
}
