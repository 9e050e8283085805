//! Destination selection for a chosen card.
//!
//! Only legal expeditions are ever proposed; when none accepts the card the
//! answer is an explicit discard.

use crate::cards::Card;
use crate::core::Destination;
use crate::zones::Expeditions;

use super::scoring::potential_score;

/// At or below this many cards left in the deck, destinations are chosen
/// to maximize score instead of by slot order.
pub const ENDGAME_DECK_SIZE: usize = 10;

/// Choose where `card` goes.
///
/// - More than `ENDGAME_DECK_SIZE` cards left: the first legal slot.
/// - Otherwise: the legal slot with the highest `potential_score`; ties keep
///   the lower slot.
/// - No legal slot: `Destination::Discard`.
#[must_use]
pub fn select_destination(card: Card, expeditions: &Expeditions, deck_len: usize) -> Destination {
    let chosen = if deck_len > ENDGAME_DECK_SIZE {
        expeditions.legal_slots(card).next()
    } else {
        best_scoring_slot(card, expeditions)
    };

    chosen.map_or(Destination::Discard, Destination::Expedition)
}

fn best_scoring_slot(card: Card, expeditions: &Expeditions) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;

    for (slot, expedition) in expeditions.iter() {
        if !expedition.accepts(card) {
            continue;
        }
        let points = potential_score(expedition.cards(), card);
        if best.map_or(true, |(_, best_points)| points > best_points) {
            best = Some((slot, points));
        }
    }

    best.map(|(slot, _)| slot)
}
