//! Game rules: move legality, scoring, destination choice, and results.
//!
//! Everything here is a pure function over card snapshots; the turn engine
//! in `game` is the only caller that mutates state based on the answers.

pub mod destination;
pub mod legality;
pub mod scoring;

pub use destination::{select_destination, ENDGAME_DECK_SIZE};
pub use legality::can_play;
pub use scoring::{potential_score, score, EXPEDITION_COST, LENGTH_BONUS, LENGTH_BONUS_THRESHOLD};

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Decide the result from final scores.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<i32>) -> Self {
        let (first, second) = (scores[PlayerId::FIRST], scores[PlayerId::SECOND]);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}
