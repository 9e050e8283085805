//! Move legality.

use crate::cards::{Card, MIN_RANK};

/// Can `card` be played on an expedition whose top card is `top`?
///
/// - Empty expedition: any investment card or any rank of at least 2.
/// - Investment card: only on another investment card.
/// - Ranked card: only above the top's rank. Investment tops rank below
///   every ranked card, so they accept any of them.
#[must_use]
pub fn can_play(card: Card, top: Option<Card>) -> bool {
    match top {
        None => card.is_investment() || card.rank() >= MIN_RANK,
        Some(top) => (card.is_investment() && top.is_investment()) || card.rank() > top.rank(),
    }
}
