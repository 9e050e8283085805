//! One turn: select card, select destination, resolve, draw, switch player.

use crate::agents::Agent;
use crate::core::{Destination, DrawSource, EngineError, TableState, TurnRecord};
use crate::rules::select_destination;

/// Play one turn for the current player using `agent`.
///
/// The draw is skipped when the deck is empty; the turn still counts.
/// A seat may not take back the card it discarded this turn: if that card
/// is the visible front of its pile and the agent asks for that pile, the
/// draw comes from the deck instead.
pub fn take_turn(state: &mut TableState, agent: &mut Agent) -> Result<TurnRecord, EngineError> {
    let player = state.current_player();
    let turn = state.turn_number();

    let hand_index = agent
        .choose_card(&state.view(player))
        .ok_or(EngineError::EmptyHand { player })?;
    let card = state.board(player).hand.get(hand_index)?;

    let destination = select_destination(card, &state.board(player).expeditions, state.deck().len());
    let retake_blocked =
        destination == Destination::Discard && state.discards().front(card.category()).is_none();
    state.commit(player, hand_index, destination)?;
    log::debug!("turn {turn}: {player} commits {card} to {destination:?}");

    let (draw, drawn) = if state.deck().is_empty() {
        (None, None)
    } else {
        let mut source = agent.choose_source(&state.view(player));
        if retake_blocked && source == DrawSource::Discard(card.category()) {
            log::trace!("turn {turn}: {player} cannot take back {card}");
            source = DrawSource::Deck;
        }
        log::trace!("turn {turn}: {player} draws from {source}");
        let drawn = state.draw(player, source)?;
        (Some(source), Some(drawn))
    };

    let record = TurnRecord {
        turn,
        player,
        card,
        destination,
        draw,
        drawn,
    };
    state.finish_turn(record.clone());
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{AgentProfile, DrawPolicy, LowestFirst};
    use crate::cards::{Card, Category, Deck};
    use crate::core::{GameRng, PlayerId, PlayerView};

    fn card(rank: i32, category: u8) -> Card {
        Card::new(rank, Category::new(category))
    }

    fn agent(profile: AgentProfile, seat: PlayerId) -> Agent {
        Agent::from_profile(profile, seat, GameRng::new(9))
    }

    #[test]
    fn test_turn_plays_and_draws() {
        // Top of deck is the end: p0 gets [4c0, 9c1], p1 gets [6c2, 3c3].
        let deck = Deck::from_cards(vec![
            card(10, 4),
            card(2, 4),
            card(7, 1),
            card(6, 2),
            card(3, 3),
            card(9, 1),
            card(4, 0),
        ]);
        let mut state = TableState::new(deck);
        state.deal(2);
        let mut p0 = agent(AgentProfile::LOWEST_THRESHOLD, PlayerId::FIRST);

        let record = take_turn(&mut state, &mut p0).unwrap();

        assert_eq!(record.turn, 1);
        assert_eq!(record.player, PlayerId::FIRST);
        assert_eq!(record.card, card(4, 0));
        assert_eq!(record.destination, Destination::Expedition(0));
        // Deck has 3 cards left, so the Threshold policy draws from the deck.
        assert_eq!(record.draw, Some(DrawSource::Deck));
        assert_eq!(record.drawn, Some(card(7, 1)));

        assert_eq!(state.current_player(), PlayerId::SECOND);
        assert_eq!(state.turn_number(), 2);
        assert_eq!(state.deck_draws(), 1);
        assert_eq!(state.card_count(), 7);
    }

    #[test]
    fn test_turn_discards_when_no_slot_is_legal() {
        let deck = Deck::from_cards(vec![
            card(2, 1),
            card(3, 2),
            card(10, 4),
            card(10, 3),
            card(10, 2),
            card(10, 1),
            card(10, 0),
            card(8, 0),
        ]);
        let mut state = TableState::new(deck);
        state.deal(6);
        // Block every slot with a 10; the 8 stays at index 0.
        for slot in 0..5 {
            state.commit(PlayerId::FIRST, 1, Destination::Expedition(slot)).unwrap();
        }

        let mut p0 = agent(AgentProfile::LOWEST_THRESHOLD, PlayerId::FIRST);
        let record = take_turn(&mut state, &mut p0).unwrap();

        assert_eq!(record.card, card(8, 0));
        assert_eq!(record.destination, Destination::Discard);
        assert_eq!(state.discards().front(Category::new(0)), Some(card(8, 0)));
        assert_eq!(record.draw, None);
    }

    /// Always asks for the first non-empty discard pile.
    struct FirstPile;

    impl DrawPolicy for FirstPile {
        fn choose_source(&self, view: &PlayerView<'_>, _rng: &mut GameRng) -> DrawSource {
            view.discards.first_non_empty().map_or(DrawSource::Deck, DrawSource::Discard)
        }
    }

    /// Seat 0 holds [8c0, 10c0..10c4], seat 1 six low cards, and the deck
    /// keeps `rest`. Every slot of seat 0 is then blocked with a 10.
    fn blocked_table(rest: Vec<Card>) -> TableState {
        let mut cards = rest;
        cards.extend([
            card(2, 0),
            card(3, 2),
            card(4, 2),
            card(5, 2),
            card(6, 2),
            card(7, 2),
            card(10, 4),
            card(10, 3),
            card(10, 2),
            card(10, 1),
            card(10, 0),
            card(8, 0),
        ]);
        let mut state = TableState::new(Deck::from_cards(cards));
        state.deal(6);
        for slot in 0..5 {
            state.commit(PlayerId::FIRST, 1, Destination::Expedition(slot)).unwrap();
        }
        state
    }

    #[test]
    fn test_discarded_card_cannot_be_taken_back() {
        let mut state = blocked_table(vec![card(7, 3)]);
        let mut p0 = Agent::new(Box::new(LowestFirst), Box::new(FirstPile), GameRng::new(1));

        let record = take_turn(&mut state, &mut p0).unwrap();

        assert_eq!(record.card, card(8, 0));
        assert_eq!(record.destination, Destination::Discard);
        assert_eq!(record.draw, Some(DrawSource::Deck));
        assert_eq!(record.drawn, Some(card(7, 3)));
        assert_eq!(state.discards().front(Category::new(0)), Some(card(8, 0)));
        assert!(state.deck().is_empty());
        assert_eq!(state.discard_draws(), 0);
    }

    #[test]
    fn test_older_discard_can_be_taken() {
        let mut state = blocked_table(vec![card(7, 3)]);
        // Seat 1 discarded a 2 of category 0 earlier; it stays in front.
        let two = state
            .board(PlayerId::SECOND)
            .hand
            .iter()
            .position(|&c| c == card(2, 0))
            .unwrap();
        state.commit(PlayerId::SECOND, two, Destination::Discard).unwrap();
        let mut p0 = Agent::new(Box::new(LowestFirst), Box::new(FirstPile), GameRng::new(1));

        let record = take_turn(&mut state, &mut p0).unwrap();

        assert_eq!(record.destination, Destination::Discard);
        assert_eq!(record.draw, Some(DrawSource::Discard(Category::new(0))));
        assert_eq!(record.drawn, Some(card(2, 0)));
        assert_eq!(state.discards().front(Category::new(0)), Some(card(8, 0)));
        assert_eq!(state.deck().len(), 1);
    }

    #[test]
    fn test_turn_without_draw_when_deck_empty() {
        let deck = Deck::from_cards(vec![card(6, 1), card(5, 0)]);
        let mut state = TableState::new(deck);
        state.deal(1);
        assert!(state.deck().is_empty());

        let mut p0 = agent(AgentProfile::RANDOM, PlayerId::FIRST);
        let record = take_turn(&mut state, &mut p0).unwrap();

        assert_eq!(record.draw, None);
        assert_eq!(record.drawn, None);
        assert!(state.board(PlayerId::FIRST).hand.is_empty());
        assert_eq!(state.deck_draws(), 0);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_turn_with_empty_hand_fails() {
        let mut state = TableState::new(Deck::from_cards(vec![card(2, 0)]));
        let mut p0 = agent(AgentProfile::LOWEST_THRESHOLD, PlayerId::FIRST);

        assert_eq!(
            take_turn(&mut state, &mut p0),
            Err(EngineError::EmptyHand { player: PlayerId::FIRST })
        );
        assert_eq!(state.turn_number(), 1);
    }
}
