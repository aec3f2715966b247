//! Team colors and the per-game token grid.

use serde::{Deserialize, Serialize};

use super::geometry::{Position, BOARD_SIZE};

/// A team, identified by the color of its tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TeamColor {
    Blue,
    Green,
    Red,
}

impl TeamColor {
    /// All colors in seating order.
    pub const ALL: [TeamColor; 3] = [TeamColor::Blue, TeamColor::Green, TeamColor::Red];
}

impl std::fmt::Display for TeamColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TeamColor::Blue => "blue",
            TeamColor::Green => "green",
            TeamColor::Red => "red",
        };
        f.write_str(name)
    }
}

/// Tokens on the board. `None` is an empty cell.
///
/// The grid is a plain `Copy` value: checking a hypothetical move works on a
/// copy and never touches the live grid.
///
/// ```
/// use sequence_engine::board::{Position, TeamColor, TokenGrid};
///
/// let mut grid = TokenGrid::new();
/// grid.set(Position::new(2, 3), Some(TeamColor::Red));
/// assert_eq!(grid.get(Position::new(2, 3)), Some(TeamColor::Red));
/// assert_eq!(grid.token_count(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenGrid {
    cells: [[Option<TeamColor>; BOARD_SIZE]; BOARD_SIZE],
}

impl TokenGrid {
    /// An empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Token at `pos`. `pos` must be on the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<TeamColor> {
        self.cells[pos.row][pos.col]
    }

    /// Put `token` at `pos`, replacing what was there.
    pub fn set(&mut self, pos: Position, token: Option<TeamColor>) {
        self.cells[pos.row][pos.col] = token;
    }

    /// True if `pos` holds no token.
    #[must_use]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// A copy of this grid with `pos` set to `token`.
    #[must_use]
    pub fn with(&self, pos: Position, token: Option<TeamColor>) -> Self {
        let mut copy = *self;
        copy.set(pos, token);
        copy
    }

    /// Number of tokens on the board.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.cells.iter().flatten().filter(|t| t.is_some()).count()
    }

    /// Rows of tokens, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[[Option<TeamColor>; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

/// An empty token grid.
#[must_use]
pub fn make_empty_grid() -> TokenGrid {
    TokenGrid::new()
}
