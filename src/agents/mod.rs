//! Heuristic agents.
//!
//! A seat's agent is two independent policies:
//!
//! - `CardPolicy`: which hand card to commit
//! - `DrawPolicy`: deck or discard pile for the replacement
//!
//! Policies see the table only through `PlayerView` and never mutate it.
//! `CardPolicyKind` / `DrawPolicyKind` name them in configuration and on the
//! command line.

pub mod card_choice;
pub mod draw;
pub mod profile;

pub use card_choice::{CardPolicy, CardPolicyKind, HighestFirst, LowestFirst, ProximitySeeking, RandomCard};
pub use draw::{
    DrawPolicy, DrawPolicyKind, MeanComparisonDraw, MultiPileMeanDraw, RandomDraw, ThresholdDirection,
    ThresholdDraw, DRAW_THRESHOLD,
};
pub use profile::{Agent, AgentProfile};

use thiserror::Error;

/// Unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseKindError {
    kind: &'static str,
    value: String,
}

impl ParseKindError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
