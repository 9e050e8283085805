//! Engine error type.
//!
//! Every input to the engine is generated internally, so these errors only
//! surface when an invariant is broken (a policy returning a bad index, a
//! draw from an exhausted source). Operations fail fast instead of reading
//! out of bounds.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::{Card, Category};

/// Invariant violations raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("hand index {index} out of range for a hand of {len} cards")]
    HandIndexOutOfRange { index: usize, len: usize },

    #[error("expedition index {index} out of range")]
    ExpeditionIndexOutOfRange { index: usize },

    #[error("{card} cannot be played on expedition {slot}")]
    IllegalPlay { card: Card, slot: usize },

    #[error("{player} has no cards to play")]
    EmptyHand { player: PlayerId },

    #[error("cannot draw from an empty deck")]
    DeckEmpty,

    #[error("discard pile for {category} is empty")]
    DiscardPileEmpty { category: Category },

    #[error("category {index} out of range")]
    CategoryOutOfRange { index: u8 },
}
