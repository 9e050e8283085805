//! Draw policies: refill from the deck or take a discard pile's front.
//!
//! A policy only ever names a non-empty pile. The turn engine does not
//! consult the policy at all once the deck is empty.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Category;
use crate::core::{DrawSource, GameRng, PlayerId, PlayerView};
use crate::rules::ENDGAME_DECK_SIZE;

use super::ParseKindError;

/// Policy for choosing where to draw from.
pub trait DrawPolicy: Send + Sync {
    fn choose_source(&self, view: &PlayerView<'_>, rng: &mut GameRng) -> DrawSource;
}

// =============================================================================
// Threshold
// =============================================================================

/// Default rank threshold for `ThresholdDraw`.
pub const DRAW_THRESHOLD: i32 = 5;

/// Which side of the threshold a seat wants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdDirection {
    /// Take fronts ranked below the threshold.
    Below,
    /// Take fronts ranked above the threshold.
    Above,
}

/// Takes the first pile front on the seat's side of a fixed threshold while
/// the deck is still large; otherwise draws from the deck.
#[derive(Clone, Debug)]
pub struct ThresholdDraw {
    pub threshold: i32,
    pub direction: ThresholdDirection,
}

impl ThresholdDraw {
    /// Seat 0 takes low cards, seat 1 takes high cards.
    #[must_use]
    pub fn for_seat(seat: PlayerId) -> Self {
        let direction = if seat == PlayerId::FIRST {
            ThresholdDirection::Below
        } else {
            ThresholdDirection::Above
        };
        Self {
            threshold: DRAW_THRESHOLD,
            direction,
        }
    }

    fn wants(&self, rank: i32) -> bool {
        match self.direction {
            ThresholdDirection::Below => rank < self.threshold,
            ThresholdDirection::Above => rank > self.threshold,
        }
    }
}

impl DrawPolicy for ThresholdDraw {
    fn choose_source(&self, view: &PlayerView<'_>, _rng: &mut GameRng) -> DrawSource {
        if view.deck_len <= ENDGAME_DECK_SIZE {
            return DrawSource::Deck;
        }

        view.discards
            .fronts()
            .find(|(_, front)| self.wants(front.rank()))
            .map_or(DrawSource::Deck, |(category, _)| DrawSource::Discard(category))
    }
}

// =============================================================================
// Random
// =============================================================================

/// Coin flip between the first non-empty pile and the deck.
#[derive(Clone, Debug, Default)]
pub struct RandomDraw;

impl DrawPolicy for RandomDraw {
    fn choose_source(&self, view: &PlayerView<'_>, rng: &mut GameRng) -> DrawSource {
        match view.discards.first_non_empty() {
            Some(category) if rng.coin_flip() => DrawSource::Discard(category),
            _ => DrawSource::Deck,
        }
    }
}

// =============================================================================
// Mean comparison
// =============================================================================

/// Looks at the first non-empty pile only: takes its front if it beats the
/// mean rank of the hand's cards of that category, or if the hand has none.
#[derive(Clone, Debug, Default)]
pub struct MeanComparisonDraw;

impl DrawPolicy for MeanComparisonDraw {
    fn choose_source(&self, view: &PlayerView<'_>, _rng: &mut GameRng) -> DrawSource {
        let Some(category) = view.discards.first_non_empty() else {
            return DrawSource::Deck;
        };
        let Some(front) = view.discards.front(category) else {
            return DrawSource::Deck;
        };

        let (sum, count) = view
            .hand
            .iter()
            .filter(|card| card.category() == category)
            .fold((0i32, 0u32), |(sum, count), card| (sum + card.rank(), count + 1));

        if count == 0 || f64::from(front.rank()) > f64::from(sum) / f64::from(count) {
            DrawSource::Discard(category)
        } else {
            DrawSource::Deck
        }
    }
}

// =============================================================================
// Multi-pile mean comparison
// =============================================================================

/// Scans every pile: takes the first front that beats the hand's mean rank
/// for its category. Categories absent from the hand are skipped.
#[derive(Clone, Debug, Default)]
pub struct MultiPileMeanDraw;

impl DrawPolicy for MultiPileMeanDraw {
    fn choose_source(&self, view: &PlayerView<'_>, _rng: &mut GameRng) -> DrawSource {
        let mut stats: FxHashMap<Category, (i32, u32)> = FxHashMap::default();
        for card in view.hand.iter() {
            let entry = stats.entry(card.category()).or_insert((0, 0));
            entry.0 += card.rank();
            entry.1 += 1;
        }

        view.discards
            .fronts()
            .find(|(category, front)| {
                stats.get(category).is_some_and(|&(sum, count)| {
                    f64::from(front.rank()) > f64::from(sum) / f64::from(count)
                })
            })
            .map_or(DrawSource::Deck, |(category, _)| DrawSource::Discard(category))
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration-level name of a draw policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawPolicyKind {
    Threshold,
    Random,
    #[serde(rename = "mean")]
    MeanComparison,
    #[serde(rename = "multi-mean")]
    MultiPileMeanComparison,
}

impl DrawPolicyKind {
    /// All variants, for CLI help and sweeps.
    pub const ALL: [DrawPolicyKind; 4] = [
        DrawPolicyKind::Threshold,
        DrawPolicyKind::Random,
        DrawPolicyKind::MeanComparison,
        DrawPolicyKind::MultiPileMeanComparison,
    ];

    /// Instantiate the policy for `seat`.
    #[must_use]
    pub fn build(self, seat: PlayerId) -> Box<dyn DrawPolicy> {
        match self {
            DrawPolicyKind::Threshold => Box::new(ThresholdDraw::for_seat(seat)),
            DrawPolicyKind::Random => Box::new(RandomDraw),
            DrawPolicyKind::MeanComparison => Box::new(MeanComparisonDraw),
            DrawPolicyKind::MultiPileMeanComparison => Box::new(MultiPileMeanDraw),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DrawPolicyKind::Threshold => "threshold",
            DrawPolicyKind::Random => "random",
            DrawPolicyKind::MeanComparison => "mean",
            DrawPolicyKind::MultiPileMeanComparison => "multi-mean",
        }
    }
}

impl std::fmt::Display for DrawPolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DrawPolicyKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseKindError::new("draw policy", s))
    }
}
