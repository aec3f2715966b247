//! Core engine types: seats, RNG, configuration, moves.
//!
//! Nothing here knows about board geometry or sequence rules; those live in
//! `board` and `rules` and are tied together by `game`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{GameConfig, DEFAULT_DECK_COUNT};
pub use action::{Move, MoveRecord};
