//! # sequence-engine
//!
//! Rules engine for the board-and-card game Sequence: a 10x10 board whose
//! cells each show a playing card, two shuffled decks, and teams racing to
//! line up five tokens.
//!
//! ## Design Principles
//!
//! 1. **One Mutator**: `GameManager::make_move` is the only way state
//!    changes. A rejected move changes nothing.
//!
//! 2. **Pure Rules**: placement legality, sequence detection and move
//!    listing are free functions over a layout and a token grid.
//!
//! 3. **Injected Randomness**: every shuffle draws from a `RandomSource`, so
//!    the same roster and the same random stream replay the same game.
//!
//! ## Architecture
//!
//! - **Shared Layout**: the board layout is computed once and shared by
//!   `Arc` between games.
//!
//! - **Persistent Data Structures**: deck, discard pile and history use
//!   `im` vectors so forking a game for AI lookahead is cheap.
//!
//! - **Redacted Views**: `PlayerVisibleGameState` is a projection built per
//!   viewer, never a flag on shared state.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, moves
//! - `cards`: ranks, suits, jacks, the double deck
//! - `board`: geometry, the card layout, the token grid
//! - `rules`: placement, sequences, legal moves, `RulesEngine`
//! - `roster`: players, teams and the tables keyed on them
//! - `game`: `GameState`, `GameManager`, per-player views
//! - `error`: error types

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod roster;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRngState, RandomSource,
    GameConfig,
    Move, MoveRecord,
};

pub use crate::cards::{Card, JackKind, Rank, Suit};

pub use crate::board::{
    BoardLayout, Cell, Position, TeamColor, TokenGrid,
    BOARD_SIZE, SEQUENCE_LENGTH,
};

pub use crate::rules::{
    count_sequences, get_all_sequences, is_valid_placement, placement_error_message,
    moves_for_player, Sequence,
    GameResult, RulesEngine,
};

pub use crate::roster::{PlayerInfo, Roster};

pub use crate::game::{GameManager, GameState, MoveOutcome, PlayerVisibleGameState};

pub use crate::error::{GameError, PlacementError, RosterError};
