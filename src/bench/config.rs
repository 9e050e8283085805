//! Benchmark harness configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::GameConfig;

/// Output format for round results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable lines, one block per round.
    #[default]
    Text,
    /// One JSON object per round, then the summary.
    Json,
}

/// Configuration for a benchmark run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Games to play, one per round.
    pub rounds: u32,

    /// Wall-clock budget per round (default: 15 s).
    /// A game that runs longer is reported as timed out; it is never
    /// interrupted.
    pub round_timeout: Duration,

    /// Seed of the first round; round `i` uses `base_seed + i`.
    /// `None` seeds each round from the clock.
    pub base_seed: Option<u64>,

    /// Line-up and turn cap for every game.
    pub game: GameConfig,

    pub format: ReportFormat,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            rounds: 5,
            round_timeout: Duration::from_secs(15),
            base_seed: None,
            game: GameConfig::default(),
            format: ReportFormat::Text,
        }
    }
}

impl BenchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_round_timeout(mut self, timeout: Duration) -> Self {
        self.round_timeout = timeout;
        self
    }

    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = Some(seed);
        self
    }

    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.rounds, 5);
        assert_eq!(config.round_timeout, Duration::from_secs(15));
        assert_eq!(config.base_seed, None);
        assert_eq!(config.format, ReportFormat::Text);
    }

    #[test]
    fn test_builder_pattern() {
        let config = BenchConfig::new()
            .with_rounds(20)
            .with_base_seed(7)
            .with_round_timeout(Duration::from_millis(250))
            .with_game(GameConfig::adaptive())
            .with_format(ReportFormat::Json);

        assert_eq!(config.rounds, 20);
        assert_eq!(config.base_seed, Some(7));
        assert_eq!(config.round_timeout, Duration::from_millis(250));
        assert_eq!(config.game, GameConfig::adaptive());
        assert_eq!(config.format, ReportFormat::Json);
    }

    #[test]
    fn test_serialization() {
        let config = BenchConfig::default().with_base_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BenchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
