//! Card containers: hands, expeditions, discard piles.
//!
//! ## Key Types
//!
//! - `Hand`: A player's cards, sorted ascending by rank
//! - `Expedition` / `Expeditions`: A player's five grow-only stacks
//! - `DiscardPiles`: Five shared per-category piles with front-only visibility
//!
//! Containers validate their own indices and return `EngineError` instead of
//! panicking; only the turn engine mutates them during play.

pub mod discard;
pub mod expedition;
pub mod hand;

pub use discard::{DiscardPile, DiscardPiles};
pub use expedition::{Expedition, Expeditions, EXPEDITION_COUNT};
pub use hand::Hand;
