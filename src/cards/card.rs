//! Card identity.
//!
//! A card is a `(rank, suit)` pair from the standard 52-card space. There
//! are two copies of every card in play, so identity is structural: two
//! cards are equal exactly when rank and suit match.
//!
//! Jacks are special. One-eyed jacks (spades, hearts) remove an opposing
//! token; two-eyed jacks (clubs, diamonds) place a token on any empty cell.
//! No cell on the board carries a jack.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in layout order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

/// Card rank. Aces are high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks, ascending.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Ranks that appear on the board (everything but jacks), ascending.
    pub fn board_ranks() -> impl DoubleEndedIterator<Item = Rank> + Clone {
        Self::ALL.into_iter().filter(|&r| r != Rank::Jack)
    }
}

/// Which kind of jack a card is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JackKind {
    /// Removes an opposing token.
    OneEyed,
    /// Places a token on any empty cell.
    TwoEyed,
}

/// A playing card.
///
/// ```
/// use sequence_engine::cards::{Card, JackKind, Rank, Suit};
///
/// let card: Card = "Js".parse().unwrap();
/// assert_eq!(card, Card::new(Rank::Jack, Suit::Spades));
/// assert_eq!(card.jack_kind(), Some(JackKind::OneEyed));
/// assert_eq!(Card::new(Rank::Jack, Suit::Clubs).jack_kind(), Some(JackKind::TwoEyed));
/// assert_eq!(Card::new(Rank::Ace, Suit::Clubs).jack_kind(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// `Some` for jacks, `None` for every other card.
    #[must_use]
    pub const fn jack_kind(&self) -> Option<JackKind> {
        match (self.rank, self.suit) {
            (Rank::Jack, Suit::Spades | Suit::Hearts) => Some(JackKind::OneEyed),
            (Rank::Jack, Suit::Clubs | Suit::Diamonds) => Some(JackKind::TwoEyed),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_one_eyed_jack(&self) -> bool {
        matches!(self.jack_kind(), Some(JackKind::OneEyed))
    }

    #[must_use]
    pub const fn is_two_eyed_jack(&self) -> bool {
        matches!(self.jack_kind(), Some(JackKind::TwoEyed))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Card {
    /// Two-character form: `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Error parsing a card from its two-character form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("card string must have length 2, got {0:?}")]
    Length(String),

    #[error("invalid rank: {0}")]
    Rank(char),

    #[error("invalid suit: {0}")]
    Suit(char),
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r_ch), Some(s_ch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::Length(s.to_string()));
        };

        let rank = match r_ch {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' | 't' => Rank::Ten,
            'J' | 'j' => Rank::Jack,
            'Q' | 'q' => Rank::Queen,
            'K' | 'k' => Rank::King,
            'A' | 'a' => Rank::Ace,
            _ => return Err(ParseCardError::Rank(r_ch)),
        };

        let suit = match s_ch {
            'c' | 'C' => Suit::Clubs,
            'd' | 'D' => Suit::Diamonds,
            'h' | 'H' => Suit::Hearts,
            's' | 'S' => Suit::Spades,
            _ => return Err(ParseCardError::Suit(s_ch)),
        };

        Ok(Card { rank, suit })
    }
}
