//! Expedition scoring.
//!
//! A started expedition costs 20 points: its score is
//! `(sum of ranked cards - 20) * (1 + investment cards)`, plus 20 when it
//! holds at least 8 cards. An expedition that was never started scores 0.

use crate::cards::Card;

/// Entry cost of a started expedition.
pub const EXPEDITION_COST: i32 = 20;

/// Bonus for a long expedition.
pub const LENGTH_BONUS: i32 = 20;

/// Cards needed for the length bonus.
pub const LENGTH_BONUS_THRESHOLD: usize = 8;

/// Score a stack of cards.
#[must_use]
pub fn score(cards: &[Card]) -> i32 {
    if cards.is_empty() {
        return 0;
    }

    let (investments, ranked_sum) = cards.iter().fold((0i32, 0i32), |(inv, sum), card| {
        if card.is_investment() {
            (inv + 1, sum)
        } else {
            (inv, sum + card.rank())
        }
    });

    let mut total = (ranked_sum - EXPEDITION_COST) * (1 + investments);
    if cards.len() >= LENGTH_BONUS_THRESHOLD {
        total += LENGTH_BONUS;
    }
    total
}

/// Score `cards` as if `candidate` had been played on top.
#[must_use]
pub fn potential_score(cards: &[Card], candidate: Card) -> i32 {
    let mut with_candidate = cards.to_vec();
    with_candidate.push(candidate);
    score(&with_candidate)
}
