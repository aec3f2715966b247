//! Authoritative game state.
//!
//! ## GameState
//!
//! Everything about one game in progress:
//! - Roster and turn pointer
//! - Draw pile and discard pile (top = back)
//! - Hands, one per seat
//! - Token grid and the running sequence count
//! - Winner, once there is one
//! - History of committed moves
//!
//! Only `GameManager` mutates a `GameState`. Deck, discard and history are
//! `im` vectors so a clone for AI lookahead shares structure with the
//! original.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{TeamColor, TokenGrid};
use crate::cards::{build_deck, shuffle, Card};
use crate::core::{GameConfig, MoveRecord, PlayerId, PlayerMap, RandomSource};
use crate::error::GameError;
use crate::roster::Roster;

/// Full game state, including every hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) roster: Roster,
    pub(crate) deck: Vector<Card>,
    pub(crate) discard: Vector<Card>,
    pub(crate) grid: TokenGrid,
    pub(crate) hands: PlayerMap<Vec<Card>>,
    pub(crate) last_action_was_discard: bool,
    pub(crate) sequence_count: usize,
    pub(crate) turn_number: u32,
    pub(crate) next_player: PlayerId,
    pub(crate) winner: Option<TeamColor>,
    pub(crate) history: Vector<MoveRecord>,
}

impl GameState {
    /// Shuffle the deck and deal the opening hands.
    ///
    /// Cards are dealt one at a time round the table, each from the top of
    /// the shuffled pile.
    pub fn deal<R: RandomSource + ?Sized>(
        config: &GameConfig,
        roster: Roster,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let player_count = roster.len();
        let hand_size = config
            .hand_size(player_count)
            .ok_or(GameError::NoHandSize(player_count))?;

        let mut cards = build_deck(config.deck_count);
        shuffle(&mut cards, rng);
        let mut deck: Vector<Card> = cards.into_iter().collect();

        let mut hands: PlayerMap<Vec<Card>> =
            PlayerMap::new(player_count, |_| Vec::with_capacity(hand_size));
        for _ in 0..hand_size {
            for seat in PlayerId::all(player_count) {
                if let Some(card) = deck.pop_back() {
                    hands[seat].push(card);
                }
            }
        }

        Ok(Self {
            roster,
            deck,
            discard: Vector::new(),
            grid: TokenGrid::new(),
            hands,
            last_action_was_discard: false,
            sequence_count: 0,
            turn_number: 0,
            next_player: PlayerId::new(0),
            winner: None,
            history: Vector::new(),
        })
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Discard pile, oldest first.
    #[must_use]
    pub fn discard(&self) -> &Vector<Card> {
        &self.discard
    }

    #[must_use]
    pub fn grid(&self) -> &TokenGrid {
        &self.grid
    }

    /// A seat's hand, or `None` for an unknown seat.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&[Card]> {
        self.hands.get(player).map(Vec::as_slice)
    }

    /// Hand sizes in seat order.
    #[must_use]
    pub fn hand_sizes(&self) -> Vec<usize> {
        self.hands.values().map(Vec::len).collect()
    }

    #[must_use]
    pub fn last_action_was_discard(&self) -> bool {
        self.last_action_was_discard
    }

    /// Completed sequences on the board, all teams together.
    #[must_use]
    pub fn sequence_count(&self) -> usize {
        self.sequence_count
    }

    /// Moves committed so far.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn next_player(&self) -> PlayerId {
        self.next_player
    }

    #[must_use]
    pub fn winner(&self) -> Option<TeamColor> {
        self.winner
    }

    /// Committed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Cards in the deck, the discard pile and every hand.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.discard.len() + self.hands.values().map(Vec::len).sum::<usize>()
    }

    /// Remove the first copy of `card` from a hand.
    ///
    /// With two identical cards in hand the lower index goes. Returns the
    /// index removed.
    pub(crate) fn remove_from_hand(&mut self, player: PlayerId, card: Card) -> Option<usize> {
        let hand = self.hands.get_mut(player)?;
        let slot = hand.iter().position(|&c| c == card)?;
        hand.remove(slot);
        Some(slot)
    }

    /// Draw the top card into a hand.
    pub(crate) fn draw(&mut self, player: PlayerId) -> Option<Card> {
        let card = self.deck.pop_back()?;
        self.hands[player].push(card);
        Some(card)
    }

    /// Shuffle the whole discard pile into a fresh draw pile.
    pub(crate) fn recycle_discard<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let mut cards: Vec<Card> = std::mem::take(&mut self.discard).into_iter().collect();
        cards.extend(std::mem::take(&mut self.deck));
        shuffle(&mut cards, rng);
        self.deck = cards.into_iter().collect();
    }
}
