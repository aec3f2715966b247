//! Error types.
//!
//! Three families, matching when they can occur:
//!
//! - [`RosterError`]: setup, before a game exists
//! - turn-order errors: [`GameError::GameOver`], [`GameError::NotYourTurn`]
//! - move-legality errors: missing card, [`PlacementError`], bad discards
//!
//! Every error is raised before any state is touched. A failed move leaves
//! the game exactly as it was.

use thiserror::Error;

use crate::board::{Position, TeamColor};
use crate::cards::Card;
use crate::core::PlayerId;

/// Invalid player or team setup.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("{0} players is not a supported player count")]
    InvalidPlayerCount(usize),

    #[error("{0} teams is not a supported team count")]
    InvalidTeamCount(usize),

    #[error("{players} players cannot be split evenly into {teams} teams")]
    IndivisibleTeams { players: usize, teams: usize },

    #[error("team {color} has {size} players, expected {expected}")]
    UnbalancedTeams {
        color: TeamColor,
        size: usize,
        expected: usize,
    },
}

/// Why a card cannot be played at a cell.
///
/// The `Display` text is the reason shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("position {0} is off the board")]
    OutOfBounds(Position),

    #[error("corner cells are wild and cannot be played on")]
    Corner,

    #[error("there is already a token at {0}")]
    Occupied(Position),

    #[error("there is no token at {0} to remove")]
    NothingToRemove(Position),

    #[error("you cannot remove your own team's token")]
    OwnToken,

    #[error("you cannot remove a token that is part of a completed sequence")]
    BreaksSequence,

    #[error("{card} cannot be played at {position}")]
    WrongCell { card: Card, position: Position },
}

/// Any error `GameManager` can raise.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("game configuration has no hand size for {0} players")]
    NoHandSize(usize),

    #[error("the game is over, {winner} won")]
    GameOver { winner: TeamColor },

    #[error("it is not {player}'s turn, waiting on {expected}")]
    NotYourTurn { player: PlayerId, expected: PlayerId },

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("{0} is not in your hand")]
    CardNotInHand(Card),

    #[error("you cannot discard twice in a row")]
    ConsecutiveDiscard,

    #[error("{0} can still be played, only dead cards can be discarded")]
    CardNotDead(Card),

    #[error(transparent)]
    IllegalPlacement(#[from] PlacementError),
}
