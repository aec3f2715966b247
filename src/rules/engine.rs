//! Rules engine trait.
//!
//! The seam AI opponents and test harnesses drive a game through: list the
//! legal moves, apply one, check for a result. `GameManager` implements it.

use crate::board::TeamColor;
use crate::core::{Move, PlayerId};
use crate::error::GameError;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// A team reached the required number of sequences.
    Winner(TeamColor),
}

impl GameResult {
    /// Check if a team won.
    #[must_use]
    pub fn is_winner(&self, color: TeamColor) -> bool {
        match self {
            GameResult::Winner(winner) => *winner == color,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: empty once the game is over
/// - `apply_move`: must be deterministic for a given random source
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Seat whose move it is.
    fn current_player(&self) -> PlayerId;

    /// Every legal move for `player`.
    fn legal_moves(&self, player: PlayerId) -> Vec<Move>;

    /// Apply a move for `player`.
    fn apply_move(&mut self, player: PlayerId, mv: Move) -> Result<(), GameError>;

    /// `Some(result)` once the game has ended.
    fn is_terminal(&self) -> Option<GameResult>;

    /// Apply the move chosen by `choose` from the current player's legal
    /// moves. Returns `Ok(false)` when there is nothing to play.
    fn step_with(
        &mut self,
        choose: impl FnOnce(&[Move]) -> usize,
    ) -> Result<bool, GameError>
    where
        Self: Sized,
    {
        if self.is_terminal().is_some() {
            return Ok(false);
        }

        let player = self.current_player();
        let moves = self.legal_moves(player);
        if moves.is_empty() {
            return Ok(false);
        }

        let pick = choose(&moves).min(moves.len() - 1);
        self.apply_move(player, moves[pick])?;
        Ok(true)
    }
}
