//! Card domain: identity, jacks, and the shuffled draw pile.
//!
//! ## Key Types
//!
//! - `Card`: structural `(rank, suit)` identity
//! - `JackKind`: one-eyed (removes) vs two-eyed (wild placement)
//! - `build_deck` / `shuffle`: the double deck and its Fisher–Yates shuffle

pub mod card;
pub mod deck;

pub use card::{Card, JackKind, ParseCardError, Rank, Suit};
pub use deck::{build_deck, shuffle, standard_52};
