//! Game configuration.
//!
//! The rules themselves are fixed; what varies between games is which agent
//! sits in each seat and how long a game may run before it is cut off.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use crate::agents::AgentProfile;

/// Cards dealt to each player before the first turn.
pub const HAND_SIZE: usize = 8;

/// Default cap on turns per game.
pub const DEFAULT_MAX_TURNS: u32 = 1000;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Agent profile per seat.
    pub seats: PlayerMap<AgentProfile>,

    /// Turns after which the game stops even if the deck is not empty.
    ///
    /// Two seats that keep discarding and re-drawing the same card never
    /// touch the deck, so without a cap such a game would not terminate.
    pub max_turns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl GameConfig {
    /// Lowest + Threshold vs Highest + Threshold.
    #[must_use]
    pub fn classic() -> Self {
        Self::with_profiles(AgentProfile::LOWEST_THRESHOLD, AgentProfile::HIGHEST_THRESHOLD)
    }

    /// Lowest + MeanComparison vs ProximitySeeking + MultiPileMeanComparison.
    #[must_use]
    pub fn adaptive() -> Self {
        Self::with_profiles(AgentProfile::LOWEST_MEAN, AgentProfile::PROXIMITY_MULTI_MEAN)
    }

    /// Both seats fully random.
    #[must_use]
    pub fn random() -> Self {
        Self::with_profiles(AgentProfile::RANDOM, AgentProfile::RANDOM)
    }

    fn with_profiles(first: AgentProfile, second: AgentProfile) -> Self {
        Self {
            seats: PlayerMap::new(|p| if p == PlayerId::FIRST { first } else { second }),
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    /// Replace one seat's profile.
    #[must_use]
    pub fn with_seat(mut self, player: PlayerId, profile: AgentProfile) -> Self {
        self.seats[player] = profile;
        self
    }

    /// Set the turn cap.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Profile of `player`'s seat.
    #[must_use]
    pub fn seat(&self, player: PlayerId) -> AgentProfile {
        self.seats[player]
    }
}
