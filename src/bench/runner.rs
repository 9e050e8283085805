//! Round runner: one game per round, timed, streamed to a sink.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::config::BenchConfig;
use super::sink::ResultSink;
use super::stats::BenchSummary;
use super::BenchError;
use crate::core::PlayerId;
use crate::game::{GameBuilder, GameSummary};

/// How a round ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The game finished inside the time budget.
    Completed(GameSummary),
    /// The game overran the budget; its scores are discarded.
    TimedOut,
}

/// One round of a benchmark run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Round number (starts at 1).
    pub round: u32,
    pub seed: u64,
    /// Wall-clock time of the round (milliseconds).
    pub elapsed_ms: f64,
    pub outcome: RoundOutcome,
}

impl RoundResult {
    /// The game summary if the round completed.
    #[must_use]
    pub fn game(&self) -> Option<&GameSummary> {
        match &self.outcome {
            RoundOutcome::Completed(game) => Some(game),
            RoundOutcome::TimedOut => None,
        }
    }
}

/// Every round plus the aggregate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchReport {
    pub rounds: Vec<RoundResult>,
    pub summary: BenchSummary,
}

/// Seed for round `index` (0-based).
#[must_use]
pub fn round_seed(base_seed: Option<u64>, index: u32) -> u64 {
    match base_seed {
        Some(base) => base.wrapping_add(u64::from(index)),
        None => {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |d| d.as_nanos() as u64);
            nanos ^ u64::from(index).rotate_left(32)
        }
    }
}

/// Play `config.rounds` games, reporting each round to `sink` as it ends
/// and the summary once all are done.
///
/// The time budget is checked after each game; a running game is never
/// interrupted.
pub fn run_benchmark(config: &BenchConfig, sink: &mut dyn ResultSink) -> Result<BenchReport, BenchError> {
    log::info!(
        "running {} rounds: {} vs {}",
        config.rounds,
        config.game.seats[PlayerId::FIRST],
        config.game.seats[PlayerId::SECOND]
    );

    let mut rounds = Vec::with_capacity(config.rounds as usize);
    for index in 0..config.rounds {
        let round = run_round(config, index)?;
        sink.write_round(&round)?;
        rounds.push(round);
    }

    let summary = BenchSummary::from_rounds(&rounds);
    sink.write_summary(&summary)?;
    sink.flush()?;

    log::info!(
        "{} rounds completed, {} timed out, {:.1} games/s",
        summary.completed,
        summary.timed_out,
        summary.games_per_second()
    );

    Ok(BenchReport { rounds, summary })
}

fn run_round(config: &BenchConfig, index: u32) -> Result<RoundResult, BenchError> {
    let round = index + 1;
    let seed = round_seed(config.base_seed, index);

    let start = Instant::now();
    let mut game = GameBuilder::from_config(config.game.clone()).build(seed);
    let summary = game.play_game()?;
    let elapsed = start.elapsed();
    let elapsed_ms = elapsed.as_secs_f64() * 1000.0;

    let outcome = if elapsed > config.round_timeout {
        log::warn!(
            "round {round} exceeded the {} ms limit ({elapsed_ms:.3} ms)",
            config.round_timeout.as_millis()
        );
        RoundOutcome::TimedOut
    } else {
        log::info!(
            "round {round} (seed {seed}): {} to {} in {} turns",
            summary.scores[PlayerId::FIRST],
            summary.scores[PlayerId::SECOND],
            summary.turns
        );
        RoundOutcome::Completed(summary)
    };

    Ok(RoundResult {
        round,
        seed,
        elapsed_ms,
        outcome,
    })
}
