//! Aggregate statistics over benchmark rounds.

use serde::{Deserialize, Serialize};

use super::runner::{RoundOutcome, RoundResult};
use crate::core::{PlayerId, PlayerMap};
use crate::game::EndReason;
use crate::rules::GameResult;

/// Totals over every round of a run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchSummary {
    /// Rounds whose game finished inside the time budget.
    pub completed: u32,

    /// Rounds that overran the time budget.
    pub timed_out: u32,

    /// Completed games that stopped at the turn cap.
    pub stalled: u32,

    /// Sum of each seat's score over completed rounds.
    pub score_totals: PlayerMap<i64>,

    /// Wins per seat over completed rounds.
    pub wins: PlayerMap<u32>,

    pub draws: u32,

    /// Turns over completed rounds.
    pub total_turns: u64,

    /// Wall-clock time over all rounds (milliseconds).
    pub total_elapsed_ms: f64,
}

impl BenchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summarize a finished run.
    pub fn from_rounds(rounds: &[RoundResult]) -> Self {
        let mut summary = Self::new();
        for round in rounds {
            summary.record(round);
        }
        summary
    }

    /// Fold one round into the totals.
    pub fn record(&mut self, round: &RoundResult) {
        self.total_elapsed_ms += round.elapsed_ms;

        let game = match &round.outcome {
            RoundOutcome::Completed(game) => game,
            RoundOutcome::TimedOut => {
                self.timed_out += 1;
                return;
            }
        };

        self.completed += 1;
        self.total_turns += u64::from(game.turns);
        if game.end_reason == EndReason::TurnLimit {
            self.stalled += 1;
        }
        for (player, &score) in game.scores.iter() {
            self.score_totals[player] += i64::from(score);
        }
        match game.result {
            GameResult::Winner(player) => self.wins[player] += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    /// Mean score of `player` over completed rounds.
    #[must_use]
    pub fn mean_score(&self, player: PlayerId) -> f64 {
        if self.completed == 0 {
            0.0
        } else {
            self.score_totals[player] as f64 / f64::from(self.completed)
        }
    }

    /// Mean turns per completed game.
    #[must_use]
    pub fn mean_turns(&self) -> f64 {
        if self.completed == 0 {
            0.0
        } else {
            self.total_turns as f64 / f64::from(self.completed)
        }
    }

    /// Completed games per second of wall-clock time.
    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        if self.total_elapsed_ms == 0.0 {
            0.0
        } else {
            f64::from(self.completed) / (self.total_elapsed_ms / 1000.0)
        }
    }
}
