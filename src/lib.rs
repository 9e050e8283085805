//! # expedition-sim
//!
//! A two-player expedition card game engine with scripted heuristic agents
//! and a benchmarking harness.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Legality, scoring and destination choice are pure
//!    functions over card snapshots. Only the turn engine mutates state.
//!
//! 2. **Pluggable Agents**: Card choice and draw choice are separate
//!    policies behind `CardPolicy` / `DrawPolicy`, named in configuration by
//!    `CardPolicyKind` / `DrawPolicyKind`.
//!
//! 3. **Deterministic**: Every game derives its shuffle and each seat's
//!    random choices from one seed. Same seed, same game.
//!
//! ## Architecture
//!
//! - **Table State**: Deck, per-player hands and expeditions, shared discard
//!   piles and a turn history. The history is an `im::Vector`, so cloning a
//!   state mid-game is O(1).
//!
//! - **Harness Outside the Engine**: Clocks, files and the console are only
//!   touched by `bench` and the `expedition-bench` binary.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, turn records, table state, errors
//! - `cards`: Cards, categories and the deck
//! - `zones`: Hands, expeditions and discard piles
//! - `rules`: Move legality, scoring, destination selection, game result
//! - `agents`: Card-choice and draw policies, agent profiles
//! - `game`: Turn engine and game loop
//! - `bench`: Round runner, statistics and result sinks

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod agents;
pub mod game;
pub mod bench;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng,
    GameConfig,
    Destination, DrawSource, TurnRecord,
    PlayerBoard, PlayerView, TableState,
    EngineError,
};

pub use crate::cards::{Card, Category, Deck};

pub use crate::zones::{DiscardPiles, Expedition, Expeditions, Hand};

pub use crate::rules::{can_play, potential_score, score, select_destination, GameResult};

pub use crate::agents::{Agent, AgentProfile, CardPolicy, CardPolicyKind, DrawPolicy, DrawPolicyKind};

pub use crate::game::{EndReason, Game, GameBuilder, GameSummary};

pub use crate::bench::{run_benchmark, BenchConfig, BenchError, BenchReport, BenchSummary, ReportFormat};
