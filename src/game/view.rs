//! Per-player projection of the game.
//!
//! Shows everything public plus at most one hand. Other hands appear only
//! as sizes.

use serde::{Deserialize, Serialize};

use crate::board::{TeamColor, TokenGrid};
use crate::cards::Card;
use crate::core::PlayerId;
use crate::error::GameError;
use crate::roster::PlayerInfo;
use crate::rules::{get_all_sequences, Sequence};

use super::state::GameState;

/// What one seat (or a spectator) may see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerVisibleGameState {
    /// Seat the view was built for. `None` for a spectator.
    pub viewer: Option<PlayerId>,
    pub players: Vec<PlayerInfo>,
    /// The viewer's own hand. Always `None` for a spectator.
    pub hand: Option<Vec<Card>>,
    pub hand_sizes: Vec<usize>,
    pub tokens: TokenGrid,
    pub sequences: Vec<Sequence>,
    pub sequence_count: usize,
    pub discard: Vec<Card>,
    pub deck_size: usize,
    pub last_action_was_discard: bool,
    pub turn_number: u32,
    pub next_player: PlayerId,
    pub winner: Option<TeamColor>,
}

impl PlayerVisibleGameState {
    /// Project `state` for `viewer`.
    pub fn project(state: &GameState, viewer: Option<PlayerId>) -> Result<Self, GameError> {
        let hand = match viewer {
            Some(seat) => Some(
                state
                    .hand(seat)
                    .ok_or(GameError::UnknownPlayer(seat))?
                    .to_vec(),
            ),
            None => None,
        };

        Ok(Self {
            viewer,
            players: state.roster().players().to_vec(),
            hand,
            hand_sizes: state.hand_sizes(),
            tokens: *state.grid(),
            sequences: get_all_sequences(state.grid()),
            sequence_count: state.sequence_count(),
            discard: state.discard().iter().copied().collect(),
            deck_size: state.deck_size(),
            last_action_was_discard: state.last_action_was_discard(),
            turn_number: state.turn_number(),
            next_player: state.next_player(),
            winner: state.winner(),
        })
    }

    /// True if the viewer is the seat to move.
    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        self.winner.is_none() && self.viewer == Some(self.next_player)
    }

    /// Top of the discard pile.
    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.discard.last().copied()
    }
}
