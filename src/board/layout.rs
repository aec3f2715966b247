//! Card-to-cell layout.
//!
//! Every non-corner cell carries a fixed card identity. The layout is built
//! by walking the board in spiral order and dealing out the 48 non-jack
//! cards: the first two suits ascending, the last two descending. The 96
//! non-corner cells take that run of cards exactly twice, so every card has
//! two cells.
//!
//! The layout never changes. [`BoardLayout::shared`] hands out one
//! process-wide copy behind an `Arc`.

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::geometry::{spiral_order, Position, BOARD_SIZE};
use crate::cards::{Card, Rank, Suit};

/// Identity of a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// A corner: matches every team, never holds a token.
    Wild,
    /// A playable cell for this card.
    Card(Card),
}

impl Cell {
    /// The card on this cell, if any.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Cell::Wild => None,
            Cell::Card(card) => Some(*card),
        }
    }

    #[must_use]
    pub const fn is_wild(&self) -> bool {
        matches!(self, Cell::Wild)
    }
}

/// The fixed card identity of every cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

/// The order cards are dealt onto the board.
fn card_order() -> Vec<Card> {
    let ascending: Vec<Rank> = Rank::board_ranks().collect();
    let descending: Vec<Rank> = Rank::board_ranks().rev().collect();

    Suit::ALL
        .into_iter()
        .enumerate()
        .flat_map(|(i, suit)| {
            let ranks = if i < Suit::ALL.len() / 2 {
                ascending.clone()
            } else {
                descending.clone()
            };
            ranks.into_iter().map(move |rank| Card::new(rank, suit))
        })
        .collect()
}

/// Build the layout.
///
/// ```
/// use sequence_engine::board::{create_layout, Cell, Position};
/// use sequence_engine::cards::{Card, Rank, Suit};
///
/// let layout = create_layout();
/// assert_eq!(layout.cell(Position::new(0, 0)), Cell::Wild);
/// assert_eq!(layout.cell(Position::new(0, 1)), Cell::Card(Card::new(Rank::Two, Suit::Clubs)));
/// ```
#[must_use]
pub fn create_layout() -> BoardLayout {
    let order = card_order();
    let mut cells = [[Cell::Wild; BOARD_SIZE]; BOARD_SIZE];

    let playable = spiral_order().filter(|pos| !pos.is_corner());
    for (i, pos) in playable.enumerate() {
        cells[pos.row][pos.col] = Cell::Card(order[i % order.len()]);
    }

    BoardLayout { cells }
}

impl BoardLayout {
    /// The process-wide layout, built on first use.
    #[must_use]
    pub fn shared() -> Arc<BoardLayout> {
        static SHARED: OnceLock<Arc<BoardLayout>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(create_layout())))
    }

    /// Identity of the cell at `pos`. `pos` must be on the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// The cells carrying `card`. Empty for jacks.
    #[must_use]
    pub fn positions_of(&self, card: Card) -> SmallVec<[Position; 2]> {
        let mut found = SmallVec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if *cell == Cell::Card(card) {
                    found.push(Position::new(row, col));
                }
            }
        }
        found
    }

    /// Rows of cells, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        create_layout()
    }
}
