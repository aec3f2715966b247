//! Board geometry.
//!
//! The board is a fixed `BOARD_SIZE x BOARD_SIZE` square. The four corners
//! are wild. This module only deals in coordinates: which cells exist, the
//! order the layout generator visits them in, and which lines of cells a
//! sequence can run along.
//!
//! Every enumeration here is a lazy iterator that can be restarted by
//! calling the function again.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Side length of the board.
pub const BOARD_SIZE: usize = 10;

/// Number of cells in a sequence.
pub const SEQUENCE_LENGTH: usize = 5;

/// A straight line of cells, in scan order. Never longer than the board.
pub type Line = SmallVec<[Position; BOARD_SIZE]>;

/// A cell coordinate. `row` grows downwards, `col` grows rightwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if the position lies on the board.
    #[must_use]
    pub const fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// True for the four wild corners.
    #[must_use]
    pub const fn is_corner(&self) -> bool {
        let edge = BOARD_SIZE - 1;
        (self.row == 0 || self.row == edge) && (self.col == 0 || self.col == edge)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four wild corners.
pub const CORNERS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(0, BOARD_SIZE - 1),
    Position::new(BOARD_SIZE - 1, 0),
    Position::new(BOARD_SIZE - 1, BOARD_SIZE - 1),
];

/// All cells in row-major order.
pub fn all_positions() -> impl Iterator<Item = Position> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
}

/// Clockwise inward spiral over every cell.
///
/// Starts at the top-left moving right and turns clockwise whenever the next
/// cell is off the board or already visited.
#[derive(Clone, Debug)]
pub struct SpiralOrder {
    visited: [[bool; BOARD_SIZE]; BOARD_SIZE],
    current: Position,
    direction: usize,
    remaining: usize,
}

// right, down, left, up
const SPIRAL_STEPS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

impl SpiralOrder {
    fn new() -> Self {
        Self {
            visited: [[false; BOARD_SIZE]; BOARD_SIZE],
            current: Position::new(0, 0),
            direction: 0,
            remaining: BOARD_SIZE * BOARD_SIZE,
        }
    }

    fn step(&self, from: Position, direction: usize) -> Option<Position> {
        let (dr, dc) = SPIRAL_STEPS[direction];
        let row = from.row.checked_add_signed(dr)?;
        let col = from.col.checked_add_signed(dc)?;
        let next = Position::new(row, col);
        (next.in_bounds() && !self.visited[row][col]).then_some(next)
    }
}

impl Iterator for SpiralOrder {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.remaining == 0 {
            return None;
        }

        let here = self.current;
        self.visited[here.row][here.col] = true;
        self.remaining -= 1;

        if self.remaining > 0 {
            let turned = (self.direction + 1) % SPIRAL_STEPS.len();
            match self.step(here, self.direction) {
                Some(next) => self.current = next,
                None => match self.step(here, turned) {
                    Some(next) => {
                        self.direction = turned;
                        self.current = next;
                    }
                    None => self.remaining = 0,
                },
            }
        }

        Some(here)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Every cell, visited in clockwise inward spiral order.
///
/// ```
/// use sequence_engine::board::{spiral_order, Position, BOARD_SIZE};
///
/// let cells: Vec<_> = spiral_order().collect();
/// assert_eq!(cells.len(), BOARD_SIZE * BOARD_SIZE);
/// assert_eq!(cells[0], Position::new(0, 0));
/// assert_eq!(cells[BOARD_SIZE], Position::new(1, BOARD_SIZE - 1));
/// ```
#[must_use]
pub fn spiral_order() -> SpiralOrder {
    SpiralOrder::new()
}

/// Every horizontal row, left to right.
pub fn horizontal_rows() -> impl Iterator<Item = Line> {
    (0..BOARD_SIZE).map(|row| (0..BOARD_SIZE).map(|col| Position::new(row, col)).collect())
}

/// Every vertical column, top to bottom.
pub fn vertical_rows() -> impl Iterator<Item = Line> {
    (0..BOARD_SIZE).map(|col| (0..BOARD_SIZE).map(|row| Position::new(row, col)).collect())
}

/// Every down-right diagonal (`col - row` constant), top to bottom.
pub fn descending_diagonals() -> impl Iterator<Item = Line> {
    // offset = col - row + (BOARD_SIZE - 1)
    (0..2 * BOARD_SIZE - 1).map(|offset| {
        (0..BOARD_SIZE)
            .filter_map(|row| {
                let col = (offset + row).checked_sub(BOARD_SIZE - 1)?;
                (col < BOARD_SIZE).then(|| Position::new(row, col))
            })
            .collect()
    })
}

/// Every up-right diagonal (`row + col` constant), bottom to top.
pub fn ascending_diagonals() -> impl Iterator<Item = Line> {
    (0..2 * BOARD_SIZE - 1).map(|sum| {
        (0..BOARD_SIZE)
            .rev()
            .filter_map(|row| {
                let col = sum.checked_sub(row)?;
                (col < BOARD_SIZE).then(|| Position::new(row, col))
            })
            .collect()
    })
}

/// Every line a sequence can run along: rows, columns and both diagonal
/// directions, including the short diagonals near the corners.
pub fn all_rows() -> impl Iterator<Item = Line> {
    horizontal_rows()
        .chain(vertical_rows())
        .chain(ascending_diagonals())
        .chain(descending_diagonals())
}

/// Every window of `SEQUENCE_LENGTH` consecutive cells along every line.
///
/// A window that touches a wild corner counts the corner as one of its five
/// cells, so it needs only four tokens.
///
/// ```
/// use sequence_engine::board::all_possible_sequences;
///
/// // 2 * 10 * 6 straight windows + 2 * (2 * (1 + 2 + 3 + 4 + 5) + 6) diagonal
/// assert_eq!(all_possible_sequences().count(), 192);
/// ```
pub fn all_possible_sequences() -> impl Iterator<Item = Line> {
    all_rows().flat_map(|line| {
        let windows: Vec<Line> = line
            .windows(SEQUENCE_LENGTH)
            .map(|w| w.iter().copied().collect())
            .collect();
        windows
    })
}
