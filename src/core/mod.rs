//! Core engine types: players, RNG, configuration, turn vocabulary, table
//! state and errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Destination, DrawSource, TurnRecord};
pub use config::{GameConfig, DEFAULT_MAX_TURNS, HAND_SIZE};
pub use error::EngineError;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng};
pub use state::{PlayerBoard, PlayerView, TableState};
