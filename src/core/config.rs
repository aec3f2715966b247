//! Game configuration.
//!
//! A `GameConfig` fixes everything about a game that is not the roster or
//! the random source: which board layout is shared in, how many decks are
//! shuffled together, and optional overrides of the hand-size and
//! sequences-to-win tables.

use std::sync::Arc;

use crate::board::BoardLayout;
use crate::roster::{hand_size_for, sequences_to_win_for};

/// Number of 52-card sets shuffled into the draw pile by default.
pub const DEFAULT_DECK_COUNT: usize = 2;

/// Complete game configuration.
///
/// ```
/// use sequence_engine::core::GameConfig;
///
/// let config = GameConfig::new().with_hand_size(5).with_sequences_to_win(1);
/// assert_eq!(config.hand_size(4), Some(5));
/// assert_eq!(config.sequences_to_win(2), Some(1));
/// assert_eq!(GameConfig::new().hand_size(4), Some(6));
/// ```
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Board layout, shared read-only by every game.
    pub layout: Arc<BoardLayout>,

    /// Number of 52-card sets in the draw pile.
    pub deck_count: usize,

    /// Hand size override. `None` uses the player-count table.
    pub hand_size: Option<usize>,

    /// Sequences-to-win override. `None` uses the team-count table.
    pub sequences_to_win: Option<usize>,
}

impl GameConfig {
    /// Default configuration over the process-wide layout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            layout: BoardLayout::shared(),
            deck_count: DEFAULT_DECK_COUNT,
            hand_size: None,
            sequences_to_win: None,
        }
    }

    /// Use a specific layout.
    #[must_use]
    pub fn with_layout(mut self, layout: Arc<BoardLayout>) -> Self {
        self.layout = layout;
        self
    }

    /// Set the number of 52-card sets.
    #[must_use]
    pub fn with_deck_count(mut self, deck_count: usize) -> Self {
        assert!(deck_count > 0, "Must have at least 1 deck");
        self.deck_count = deck_count;
        self
    }

    /// Override the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = Some(hand_size);
        self
    }

    /// Override the number of sequences a team needs to win.
    #[must_use]
    pub fn with_sequences_to_win(mut self, sequences: usize) -> Self {
        self.sequences_to_win = Some(sequences);
        self
    }

    /// Effective hand size for `player_count` players.
    #[must_use]
    pub fn hand_size(&self, player_count: usize) -> Option<usize> {
        self.hand_size.or_else(|| hand_size_for(player_count))
    }

    /// Effective win threshold for `team_count` teams.
    #[must_use]
    pub fn sequences_to_win(&self, team_count: usize) -> Option<usize> {
        self.sequences_to_win
            .or_else(|| sequences_to_win_for(team_count))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
