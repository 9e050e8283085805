//! Expedition stacks.
//!
//! Each player owns five expedition slots, indexed 0..5. A slot is a LIFO
//! stack that only ever grows; only its top card decides what may follow.
//! Slots are not tied to a category: a card goes wherever it is legal.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CATEGORY_COUNT};
use crate::core::EngineError;
use crate::rules::{can_play, score};

/// Number of expedition slots per player.
pub const EXPEDITION_COUNT: usize = CATEGORY_COUNT;

/// One expedition stack.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expedition {
    cards: SmallVec<[Card; 12]>,
}

impl Expedition {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently played card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Would `card` be legal here?
    #[must_use]
    pub fn accepts(&self, card: Card) -> bool {
        can_play(card, self.top())
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
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
    pub fn score(&self) -> i32 {
        score(&self.cards)
    }

    fn push(&mut self, card: Card) {
        self.cards.push(card);
    }
}

/// A player's five expedition slots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expeditions {
    slots: [Expedition; EXPEDITION_COUNT],
}

impl Expeditions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the expedition in `slot`.
    pub fn get(&self, slot: usize) -> Result<&Expedition, EngineError> {
        self.slots
            .get(slot)
            .ok_or(EngineError::ExpeditionIndexOutOfRange { index: slot })
    }

    /// Play `card` onto `slot`, re-checking legality.
    ///
    /// Leaves the expedition untouched on error.
    pub fn play(&mut self, slot: usize, card: Card) -> Result<(), EngineError> {
        let expedition = self
            .slots
            .get_mut(slot)
            .ok_or(EngineError::ExpeditionIndexOutOfRange { index: slot })?;

        if !expedition.accepts(card) {
            return Err(EngineError::IllegalPlay { card, slot });
        }
        expedition.push(card);
        Ok(())
    }

    /// Iterate over (slot, expedition) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Expedition)> {
        self.slots.iter().enumerate()
    }

    /// Slots where `card` is legal, in index order.
    pub fn legal_slots(&self, card: Card) -> impl Iterator<Item = usize> + '_ {
        self.iter()
            .filter(move |(_, e)| e.accepts(card))
            .map(|(slot, _)| slot)
    }

    /// Sum of all expedition scores; empty slots contribute 0.
    #[must_use]
    pub fn total_score(&self) -> i32 {
        self.slots.iter().map(Expedition::score).sum()
    }

    /// Total cards across all slots.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.slots.iter().map(Expedition::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;

    fn card(rank: i32) -> Card {
        Card::new(rank, Category::new(0))
    }

    #[test]
    fn test_play_follows_top() {
        let mut exps = Expeditions::new();

        exps.play(0, card(-1)).unwrap();
        exps.play(0, card(-1)).unwrap();
        exps.play(0, card(4)).unwrap();

        assert_eq!(exps.get(0).unwrap().top(), Some(card(4)));
        assert_eq!(
            exps.play(0, card(4)),
            Err(EngineError::IllegalPlay { card: card(4), slot: 0 })
        );
        assert_eq!(
            exps.play(0, card(-1)),
            Err(EngineError::IllegalPlay { card: card(-1), slot: 0 })
        );
        assert_eq!(exps.get(0).unwrap().len(), 3);
    }

    #[test]
    fn test_slot_bounds() {
        let mut exps = Expeditions::new();
        assert_eq!(
            exps.play(5, card(3)),
            Err(EngineError::ExpeditionIndexOutOfRange { index: 5 })
        );
        assert!(exps.get(7).is_err());
    }

    #[test]
    fn test_legal_slots() {
        let mut exps = Expeditions::new();
        exps.play(0, card(9)).unwrap();
        exps.play(1, card(3)).unwrap();

        let slots: Vec<_> = exps.legal_slots(card(5)).collect();
        assert_eq!(slots, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_total_score_ignores_empty_slots() {
        let mut exps = Expeditions::new();
        assert_eq!(exps.total_score(), 0);

        exps.play(2, card(8)).unwrap();
        exps.play(2, card(10)).unwrap();
        assert_eq!(exps.total_score(), -2);
        assert_eq!(exps.card_count(), 2);
    }
}
