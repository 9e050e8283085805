//! Turn vocabulary: where a card goes, where the replacement comes from,
//! and the record of a completed turn.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{Card, Category};

/// Where the selected card is committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// Onto the player's expedition in this slot.
    Expedition(usize),
    /// Onto the shared discard pile of the card's category.
    Discard,
}

/// Where the replacement card is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawSource {
    /// The top of the deck.
    Deck,
    /// The front of a category's discard pile.
    Discard(Category),
}

impl std::fmt::Display for DrawSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawSource::Deck => write!(f, "deck"),
            DrawSource::Discard(category) => write!(f, "discard {}", category),
        }
    }
}

/// A completed turn.
///
/// Used for:
/// - Turn history on the table state
/// - Replay/debugging
/// - Draw statistics in the game summary
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number (starts at 1).
    pub turn: u32,

    /// The player who took the turn.
    pub player: PlayerId,

    /// The card that left the hand.
    pub card: Card,

    /// Where it went.
    pub destination: Destination,

    /// Where the replacement came from; `None` if the deck was already empty.
    pub draw: Option<DrawSource>,

    /// The card drawn.
    pub drawn: Option<Card>,
}

impl TurnRecord {
    /// Did this turn take a card from a discard pile?
    #[must_use]
    pub fn drew_from_discard(&self) -> bool {
        matches!(self.draw, Some(DrawSource::Discard(_)))
    }
}
