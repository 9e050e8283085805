//! The game loop and its builder.

use serde::{Deserialize, Serialize};

use super::turn::take_turn;
use crate::agents::{Agent, AgentProfile};
use crate::cards::Deck;
use crate::core::{EngineError, GameConfig, GameRng, PlayerId, PlayerMap, TableState, TurnRecord, HAND_SIZE};
use crate::rules::GameResult;

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The deck ran out: the normal ending.
    DeckExhausted,
    /// `GameConfig::max_turns` was reached first.
    TurnLimit,
}

/// Outcome of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub seed: u64,
    pub scores: PlayerMap<i32>,
    pub result: GameResult,
    /// Turns played.
    pub turns: u32,
    pub deck_draws: u32,
    pub discard_draws: u32,
    pub end_reason: EndReason,
}

/// One game between two seated agents.
///
/// # Example
///
/// ```
/// use expedition_sim::{Game, PlayerId};
///
/// let mut game = Game::new(42);
/// let summary = game.play_game().unwrap();
/// assert_eq!(summary.scores[PlayerId::FIRST], game.score(PlayerId::FIRST));
/// ```
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    state: TableState,
    agents: PlayerMap<Agent>,
    seed: u64,
    end_reason: Option<EndReason>,
}

impl Game {
    /// Shuffle, deal and seat the classic line-up.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        GameBuilder::new().build(seed)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &TableState {
        &self.state
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Set once the game has stopped.
    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.end_reason.is_some()
    }

    /// Current score of `player`.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> i32 {
        self.state.score(player)
    }

    #[must_use]
    pub fn scores(&self) -> PlayerMap<i32> {
        self.state.scores()
    }

    /// Play a single turn for the current seat.
    ///
    /// Returns `Ok(None)` once the game is over.
    pub fn step(&mut self) -> Result<Option<TurnRecord>, EngineError> {
        if self.check_end().is_some() {
            return Ok(None);
        }

        let player = self.state.current_player();
        let record = take_turn(&mut self.state, &mut self.agents[player])?;
        self.check_end();
        Ok(Some(record))
    }

    /// Play until the deck is exhausted or the turn cap is hit.
    pub fn play_game(&mut self) -> Result<GameSummary, EngineError> {
        loop {
            if let Some(end_reason) = self.check_end() {
                return Ok(self.summarize(end_reason));
            }
            let player = self.state.current_player();
            take_turn(&mut self.state, &mut self.agents[player])?;
        }
    }

    /// Summary of a finished game; `None` while it is still running.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        self.end_reason.map(|end_reason| self.summarize(end_reason))
    }

    fn summarize(&self, end_reason: EndReason) -> GameSummary {
        let scores = self.scores();
        GameSummary {
            seed: self.seed,
            result: GameResult::from_scores(&scores),
            scores,
            turns: self.state.history().len() as u32,
            deck_draws: self.state.deck_draws(),
            discard_draws: self.state.discard_draws(),
            end_reason,
        }
    }

    /// Record and return the end reason once the game has stopped.
    fn check_end(&mut self) -> Option<EndReason> {
        if self.end_reason.is_some() {
            return self.end_reason;
        }

        let turns = self.state.history().len() as u32;
        let reason = if self.state.deck().is_empty() {
            EndReason::DeckExhausted
        } else if turns >= self.config.max_turns {
            log::warn!(
                "game {} hit the turn limit of {} with {} cards left in the deck",
                self.seed,
                self.config.max_turns,
                self.state.deck().len()
            );
            EndReason::TurnLimit
        } else {
            return None;
        };

        log::debug!("game {} over after {} turns: {:?}", self.seed, turns, reason);
        self.end_reason = Some(reason);
        self.end_reason
    }
}

/// Builder for `Game`.
///
/// Seats default to the profiles in `GameConfig::classic()`; individual
/// seats can be given a profile or a fully custom `Agent`.
#[derive(Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    custom: PlayerMap<Option<Agent>>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    #[must_use]
    pub fn from_config(config: GameConfig) -> Self {
        Self {
            config,
            custom: PlayerMap::default(),
        }
    }

    /// Seat a built-in profile.
    #[must_use]
    pub fn seat(mut self, player: PlayerId, profile: AgentProfile) -> Self {
        self.config.seats[player] = profile;
        self.custom[player] = None;
        self
    }

    /// Seat a hand-assembled agent. Its RNG is used as given.
    #[must_use]
    pub fn agent(mut self, player: PlayerId, agent: Agent) -> Self {
        self.custom[player] = Some(agent);
        self
    }

    #[must_use]
    pub fn max_turns(mut self, max_turns: u32) -> Self {
        self.config.max_turns = max_turns;
        self
    }

    /// Shuffle a standard deck, deal `HAND_SIZE` cards to each seat and
    /// seat the agents.
    ///
    /// The shuffle and each seat's decisions use independent streams derived
    /// from `seed`, so the same seed always replays the same game.
    #[must_use]
    pub fn build(self, seed: u64) -> Game {
        let rng = GameRng::new(seed);
        let mut state = TableState::new(Deck::shuffled(&mut rng.for_context("deck")));
        state.deal(HAND_SIZE);

        let config = self.config;
        let mut custom = self.custom;
        let agents = PlayerMap::new(|player| {
            custom[player].take().unwrap_or_else(|| {
                let seat_rng = rng.for_context(&format!("seat-{}", player.index()));
                Agent::from_profile(config.seat(player), player, seat_rng)
            })
        });

        Game {
            config,
            state,
            agents,
            seed,
            end_reason: None,
        }
    }
}
