//! Table state: everything one game owns.
//!
//! ## TableState
//!
//! - The deck (hidden, drawn from the top)
//! - Each player's board: hand and five expeditions
//! - The five shared discard piles
//! - Current player, turn number, draw counters
//! - Turn history
//!
//! ## PlayerView
//!
//! Read-only window handed to agent policies. Policies never receive a
//! mutable reference; all mutation goes through the turn engine via the
//! crate-private methods below.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Destination, DrawSource, TurnRecord};
use super::error::EngineError;
use super::player::{PlayerId, PlayerMap};
use crate::cards::{Card, Deck};
use crate::zones::{DiscardPiles, Expeditions, Hand};

/// One player's private hand and public expeditions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBoard {
    pub hand: Hand,
    pub expeditions: Expeditions,
}

impl PlayerBoard {
    /// Cards held or played by this player.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.expeditions.card_count()
    }
}

/// What a policy may look at when deciding for `player`.
#[derive(Clone, Copy, Debug)]
pub struct PlayerView<'a> {
    /// The deciding seat.
    pub player: PlayerId,
    pub hand: &'a Hand,
    pub expeditions: &'a Expeditions,
    pub discards: &'a DiscardPiles,
    /// Cards left in the deck.
    pub deck_len: usize,
}

/// Complete state of one game.
///
/// The turn history is an `im::Vector`, so cloning a state mid-game is cheap.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableState {
    deck: Deck,
    boards: PlayerMap<PlayerBoard>,
    discards: DiscardPiles,
    current_player: PlayerId,
    turn_number: u32,
    history: Vector<TurnRecord>,
    deck_draws: u32,
    discard_draws: u32,
}

impl TableState {
    /// Create a table around `deck` with empty hands, expeditions and piles.
    ///
    /// Player 0 moves first; the turn number starts at 1.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            boards: PlayerMap::default(),
            discards: DiscardPiles::new(),
            current_player: PlayerId::FIRST,
            turn_number: 1,
            history: Vector::new(),
            deck_draws: 0,
            discard_draws: 0,
        }
    }

    /// Deal `hand_size` cards from the top of the deck to each player,
    /// player 0 first. Stops early if the deck runs out.
    pub fn deal(&mut self, hand_size: usize) {
        for player in PlayerId::all() {
            for _ in 0..hand_size {
                let Some(card) = self.deck.draw() else {
                    return;
                };
                self.boards[player].hand.insert(card);
            }
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn board(&self, player: PlayerId) -> &PlayerBoard {
        &self.boards[player]
    }

    #[must_use]
    pub fn discards(&self) -> &DiscardPiles {
        &self.discards
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Number of the next turn to be played (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Completed turns in order.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Cards drawn from the deck since the initial deal.
    #[must_use]
    pub fn deck_draws(&self) -> u32 {
        self.deck_draws
    }

    /// Cards taken from discard piles.
    #[must_use]
    pub fn discard_draws(&self) -> u32 {
        self.discard_draws
    }

    /// Read-only view for `player`'s policies.
    #[must_use]
    pub fn view(&self, player: PlayerId) -> PlayerView<'_> {
        let board = &self.boards[player];
        PlayerView {
            player,
            hand: &board.hand,
            expeditions: &board.expeditions,
            discards: &self.discards,
            deck_len: self.deck.len(),
        }
    }

    /// Cards across deck, hands, expeditions and discard piles.
    ///
    /// Always equals `DECK_SIZE` for a standard game.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.boards.iter().map(|(_, b)| b.card_count()).sum::<usize>()
            + self.discards.card_count()
    }

    /// A player's current score: the sum over their five expeditions.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> i32 {
        self.boards[player].expeditions.total_score()
    }

    /// Both players' current scores.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<i32> {
        PlayerMap::new(|player| self.score(player))
    }

    // === Mutation (turn engine only) ===

    /// Move the card at `hand_index` to `destination`.
    ///
    /// Legality is re-checked before anything leaves the hand, so an error
    /// leaves the state unchanged.
    pub(crate) fn commit(
        &mut self,
        player: PlayerId,
        hand_index: usize,
        destination: Destination,
    ) -> Result<Card, EngineError> {
        let board = &mut self.boards[player];
        let card = board.hand.get(hand_index)?;

        match destination {
            Destination::Expedition(slot) => board.expeditions.play(slot, card)?,
            Destination::Discard => self.discards.discard(card),
        }

        board.hand.remove(hand_index)
    }

    /// Draw one card from `source` into `player`'s hand.
    pub(crate) fn draw(&mut self, player: PlayerId, source: DrawSource) -> Result<Card, EngineError> {
        let card = match source {
            DrawSource::Deck => {
                let card = self.deck.draw().ok_or(EngineError::DeckEmpty)?;
                self.deck_draws += 1;
                card
            }
            DrawSource::Discard(category) => {
                let card = self.discards.take_front(category)?;
                self.discard_draws += 1;
                card
            }
        };

        self.boards[player].hand.insert(card);
        Ok(card)
    }

    /// Record the turn and pass play to the other seat.
    pub(crate) fn finish_turn(&mut self, record: TurnRecord) {
        self.history.push_back(record);
        self.turn_number += 1;
        self.current_player = self.current_player.opponent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Category, DECK_SIZE};
    use crate::core::GameRng;

    fn card(rank: i32, category: u8) -> Card {
        Card::new(rank, Category::new(category))
    }

    #[test]
    fn test_new_table() {
        let state = TableState::new(Deck::standard());

        assert_eq!(state.current_player(), PlayerId::FIRST);
        assert_eq!(state.turn_number(), 1);
        assert_eq!(state.card_count(), DECK_SIZE);
        assert!(state.history().is_empty());
        assert_eq!(state.scores(), PlayerMap::with_value(0));
    }

    #[test]
    fn test_deal_from_top_player_zero_first() {
        let deck = Deck::from_cards(vec![card(2, 0), card(3, 0), card(4, 0), card(5, 0), card(6, 0)]);
        let mut state = TableState::new(deck);

        state.deal(2);

        let ranks = |p| state.board(p).hand.iter().map(|c| c.rank()).collect::<Vec<_>>();
        assert_eq!(ranks(PlayerId::FIRST), vec![5, 6]);
        assert_eq!(ranks(PlayerId::SECOND), vec![3, 4]);
        assert_eq!(state.deck().len(), 1);
    }

    #[test]
    fn test_deal_conserves_cards() {
        let mut state = TableState::new(Deck::shuffled(&mut GameRng::new(3)));
        state.deal(8);

        assert_eq!(state.deck().len(), DECK_SIZE - 16);
        assert_eq!(state.card_count(), DECK_SIZE);
        assert!(state.board(PlayerId::FIRST).hand.is_sorted());
    }

    #[test]
    fn test_commit_to_expedition_and_discard() {
        let deck = Deck::from_cards(vec![card(9, 1), card(4, 2)]);
        let mut state = TableState::new(deck);
        state.deal(1);
        let p0 = PlayerId::FIRST;

        let played = state.commit(p0, 0, Destination::Expedition(3)).unwrap();
        assert_eq!(played, card(4, 2));
        assert!(state.board(p0).hand.is_empty());
        assert_eq!(state.board(p0).expeditions.get(3).unwrap().top(), Some(card(4, 2)));

        let p1 = PlayerId::SECOND;
        state.commit(p1, 0, Destination::Discard).unwrap();
        assert_eq!(state.discards().front(Category::new(1)), Some(card(9, 1)));
        assert_eq!(state.card_count(), 2);
    }

    #[test]
    fn test_illegal_commit_leaves_state_unchanged() {
        let deck = Deck::from_cards(vec![card(3, 0), card(-1, 0), card(8, 0)]);
        let mut state = TableState::new(deck);
        state.deal(3);
        let p0 = PlayerId::FIRST;
        // hand: [-1, 3, 8]
        state.commit(p0, 2, Destination::Expedition(0)).unwrap();

        let before = state.board(p0).clone();
        let err = state.commit(p0, 1, Destination::Expedition(0)).unwrap_err();
        assert_eq!(err, EngineError::IllegalPlay { card: card(3, 0), slot: 0 });
        assert_eq!(state.board(p0), &before);

        let err = state.commit(p0, 5, Destination::Discard).unwrap_err();
        assert_eq!(err, EngineError::HandIndexOutOfRange { index: 5, len: 2 });
    }

    #[test]
    fn test_draw_sources() {
        let deck = Deck::from_cards(vec![card(7, 0), card(2, 3)]);
        let mut state = TableState::new(deck);
        let p0 = PlayerId::FIRST;

        assert_eq!(state.draw(p0, DrawSource::Deck), Ok(card(2, 3)));
        state.commit(p0, 0, Destination::Discard).unwrap();
        assert_eq!(state.draw(p0, DrawSource::Discard(Category::new(3))), Ok(card(2, 3)));
        assert_eq!(
            state.draw(p0, DrawSource::Discard(Category::new(3))),
            Err(EngineError::DiscardPileEmpty { category: Category::new(3) })
        );

        assert_eq!(state.deck_draws(), 1);
        assert_eq!(state.discard_draws(), 1);

        state.draw(p0, DrawSource::Deck).unwrap();
        assert_eq!(state.draw(p0, DrawSource::Deck), Err(EngineError::DeckEmpty));
    }

    #[test]
    fn test_finish_turn_switches_player() {
        let mut state = TableState::new(Deck::standard());
        state.finish_turn(TurnRecord {
            turn: 1,
            player: PlayerId::FIRST,
            card: card(5, 0),
            destination: Destination::Discard,
            draw: Some(DrawSource::Deck),
            drawn: None,
        });

        assert_eq!(state.current_player(), PlayerId::SECOND);
        assert_eq!(state.turn_number(), 2);
        assert_eq!(state.history().len(), 1);

        let snapshot = state.clone();
        assert_eq!(snapshot.history(), state.history());
    }
}
