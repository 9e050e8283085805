//! Turn engine and game loop.
//!
//! `take_turn` runs one SelectCard → SelectDestination → Resolve → Draw →
//! SwitchPlayer cycle; `Game` repeats it until the deck is empty (or the
//! turn cap is hit) and scores the result.

mod game;
pub mod turn;

pub use game::{EndReason, Game, GameBuilder, GameSummary};
pub use turn::take_turn;
