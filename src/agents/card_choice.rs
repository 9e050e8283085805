//! Card-choice policies: which hand card to commit this turn.
//!
//! Policies only pick an index; where the card goes is decided afterwards
//! by `rules::select_destination`.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, PlayerView};

use super::ParseKindError;

/// Policy for choosing which card to commit.
pub trait CardPolicy: Send + Sync {
    /// Choose an index into `view.hand`.
    ///
    /// Returns `None` only when the hand is empty.
    fn choose_card(&self, view: &PlayerView<'_>, rng: &mut GameRng) -> Option<usize>;
}

/// Index of the first card with minimal rank.
fn lowest_index(view: &PlayerView<'_>) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (i, card) in view.hand.iter().enumerate() {
        if best.map_or(true, |(_, rank)| card.rank() < rank) {
            best = Some((i, card.rank()));
        }
    }
    best.map(|(i, _)| i)
}

/// Plays the lowest-ranked card; ties go to the first occurrence.
#[derive(Clone, Debug, Default)]
pub struct LowestFirst;

impl CardPolicy for LowestFirst {
    fn choose_card(&self, view: &PlayerView<'_>, _rng: &mut GameRng) -> Option<usize> {
        lowest_index(view)
    }
}

/// Plays the highest-ranked card; ties go to the first occurrence.
#[derive(Clone, Debug, Default)]
pub struct HighestFirst;

impl CardPolicy for HighestFirst {
    fn choose_card(&self, view: &PlayerView<'_>, _rng: &mut GameRng) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (i, card) in view.hand.iter().enumerate() {
            if best.map_or(true, |(_, rank)| card.rank() > rank) {
                best = Some((i, card.rank()));
            }
        }
        best.map(|(i, _)| i)
    }
}

/// Plays a uniformly random card.
#[derive(Clone, Debug, Default)]
pub struct RandomCard;

impl CardPolicy for RandomCard {
    fn choose_card(&self, view: &PlayerView<'_>, rng: &mut GameRng) -> Option<usize> {
        if view.hand.is_empty() {
            return None;
        }
        Some(rng.gen_range_usize(0..view.hand.len()))
    }
}

/// Plays the card closest in rank to the top of one of the player's
/// expeditions of the same category.
///
/// Ties on distance go to the lower-ranked card, then the earlier index.
/// Falls back to `LowestFirst` when no expedition top shares a category
/// with any hand card.
#[derive(Clone, Debug, Default)]
pub struct ProximitySeeking;

impl CardPolicy for ProximitySeeking {
    fn choose_card(&self, view: &PlayerView<'_>, _rng: &mut GameRng) -> Option<usize> {
        let tops: Vec<_> = view
            .expeditions
            .iter()
            .filter_map(|(_, expedition)| expedition.top())
            .collect();

        // (index, distance, rank)
        let mut best: Option<(usize, i32, i32)> = None;
        for (i, card) in view.hand.iter().enumerate() {
            for top in tops.iter().filter(|top| top.category() == card.category()) {
                let distance = (card.rank() - top.rank()).abs();
                let better = match best {
                    None => true,
                    Some((_, best_distance, best_rank)) => {
                        distance < best_distance || (distance == best_distance && card.rank() < best_rank)
                    }
                };
                if better {
                    best = Some((i, distance, card.rank()));
                }
            }
        }

        best.map(|(i, _, _)| i).or_else(|| lowest_index(view))
    }
}

/// Configuration-level name of a card-choice policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardPolicyKind {
    #[serde(rename = "lowest")]
    LowestFirst,
    #[serde(rename = "highest")]
    HighestFirst,
    Random,
    #[serde(rename = "proximity")]
    ProximitySeeking,
}

impl CardPolicyKind {
    /// All variants, for CLI help and sweeps.
    pub const ALL: [CardPolicyKind; 4] = [
        CardPolicyKind::LowestFirst,
        CardPolicyKind::HighestFirst,
        CardPolicyKind::Random,
        CardPolicyKind::ProximitySeeking,
    ];

    /// Instantiate the policy.
    #[must_use]
    pub fn build(self) -> Box<dyn CardPolicy> {
        match self {
            CardPolicyKind::LowestFirst => Box::new(LowestFirst),
            CardPolicyKind::HighestFirst => Box::new(HighestFirst),
            CardPolicyKind::Random => Box::new(RandomCard),
            CardPolicyKind::ProximitySeeking => Box::new(ProximitySeeking),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CardPolicyKind::LowestFirst => "lowest",
            CardPolicyKind::HighestFirst => "highest",
            CardPolicyKind::Random => "random",
            CardPolicyKind::ProximitySeeking => "proximity",
        }
    }
}

impl std::fmt::Display for CardPolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CardPolicyKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseKindError::new("card policy", s))
    }
}
