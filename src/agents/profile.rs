//! Seat agents: a card policy and a draw policy paired with their own RNG.

use serde::{Deserialize, Serialize};

use crate::core::{DrawSource, GameRng, PlayerId, PlayerView};

use super::card_choice::{CardPolicy, CardPolicyKind};
use super::draw::{DrawPolicy, DrawPolicyKind};

/// Serializable description of a seat's agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentProfile {
    pub card: CardPolicyKind,
    pub draw: DrawPolicyKind,
}

impl AgentProfile {
    #[must_use]
    pub const fn new(card: CardPolicyKind, draw: DrawPolicyKind) -> Self {
        Self { card, draw }
    }

    /// Seat 0 of the classic line-up.
    pub const LOWEST_THRESHOLD: AgentProfile =
        AgentProfile::new(CardPolicyKind::LowestFirst, DrawPolicyKind::Threshold);

    /// Seat 1 of the classic line-up.
    pub const HIGHEST_THRESHOLD: AgentProfile =
        AgentProfile::new(CardPolicyKind::HighestFirst, DrawPolicyKind::Threshold);

    /// Seat 0 of the adaptive line-up.
    pub const LOWEST_MEAN: AgentProfile =
        AgentProfile::new(CardPolicyKind::LowestFirst, DrawPolicyKind::MeanComparison);

    /// Seat 1 of the adaptive line-up.
    pub const PROXIMITY_MULTI_MEAN: AgentProfile = AgentProfile::new(
        CardPolicyKind::ProximitySeeking,
        DrawPolicyKind::MultiPileMeanComparison,
    );

    /// Random card, random draw.
    pub const RANDOM: AgentProfile = AgentProfile::new(CardPolicyKind::Random, DrawPolicyKind::Random);
}

impl std::fmt::Display for AgentProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}", self.card, self.draw)
    }
}

/// A seat's decision maker for one game.
///
/// Owns its RNG so the two seats' random choices never interleave.
pub struct Agent {
    card_policy: Box<dyn CardPolicy>,
    draw_policy: Box<dyn DrawPolicy>,
    rng: GameRng,
}

impl Agent {
    /// Assemble an agent from arbitrary policies.
    pub fn new(card_policy: Box<dyn CardPolicy>, draw_policy: Box<dyn DrawPolicy>, rng: GameRng) -> Self {
        Self {
            card_policy,
            draw_policy,
            rng,
        }
    }

    /// Build the agent described by `profile` for `seat`.
    #[must_use]
    pub fn from_profile(profile: AgentProfile, seat: PlayerId, rng: GameRng) -> Self {
        Self::new(profile.card.build(), profile.draw.build(seat), rng)
    }

    /// Index of the hand card to commit, `None` for an empty hand.
    pub fn choose_card(&mut self, view: &PlayerView<'_>) -> Option<usize> {
        self.card_policy.choose_card(view, &mut self.rng)
    }

    /// Where to draw the replacement card from.
    pub fn choose_source(&mut self, view: &PlayerView<'_>) -> DrawSource {
        self.draw_policy.choose_source(view, &mut self.rng)
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent").field("rng", &self.rng).finish_non_exhaustive()
    }
}
