//! Move representation.
//!
//! A move is a card from hand plus an optional target cell. With a target
//! the card places a token there (or, for a one-eyed jack, removes the token
//! there). Without one the card is discarded as dead.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::Position;
use crate::cards::Card;

/// A move request.
///
/// ```
/// use sequence_engine::board::Position;
/// use sequence_engine::cards::{Card, Rank, Suit};
/// use sequence_engine::core::Move;
///
/// let card = Card::new(Rank::Seven, Suit::Hearts);
/// assert!(!Move::place(card, Position::new(3, 4)).is_discard());
/// assert!(Move::discard(card).is_discard());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Card played from hand.
    pub card: Card,

    /// Target cell. `None` discards the card.
    pub position: Option<Position>,
}

impl Move {
    /// Play `card` at `position`.
    #[must_use]
    pub const fn place(card: Card, position: Position) -> Self {
        Self {
            card,
            position: Some(position),
        }
    }

    /// Discard `card` as dead.
    #[must_use]
    pub const fn discard(card: Card) -> Self {
        Self {
            card,
            position: None,
        }
    }

    /// True for a discard.
    #[must_use]
    pub const fn is_discard(&self) -> bool {
        self.position.is_none()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{} at {}", self.card, pos),
            None => write!(f, "discard {}", self.card),
        }
    }
}

/// A committed move, kept in the game history for replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Seat that made the move.
    pub player: PlayerId,

    /// The move.
    pub mv: Move,

    /// Turn number after the move was applied.
    pub turn: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, turn: u32) -> Self {
        Self { player, mv, turn }
    }
}
