//! Players and teams.
//!
//! Validates who is playing and derives the per-game numbers that depend on
//! it: hand size from the player count, sequences needed to win from the
//! team count.

pub mod players;
pub mod tables;

pub use players::{PlayerInfo, Roster};
pub use tables::{hand_size_for, sequences_to_win_for, VALID_PLAYER_COUNTS, VALID_TEAM_COUNTS};
