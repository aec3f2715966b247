//! Sequence detection.
//!
//! A sequence is five cells in a straight line holding one team's tokens,
//! where a wild corner stands in for any team.
//!
//! ## Scan
//!
//! Every line from [`all_rows`] is scanned once, front to back, keeping the
//! length of the current run and the color that anchors it:
//!
//! - a wild corner extends the run and leaves the anchor alone
//! - a token of the anchor color extends the run
//! - the first token after a run of wilds sets the anchor and extends
//! - any other token starts a new run of length 1
//! - an empty cell resets the run to 0
//!
//! When a run reaches five a sequence is emitted and the run drops back to
//! 1, not 0. The last cell of a sequence may be shared with the next one,
//! so nine in a row is two sequences and ten in a row is still two.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::{all_rows, Position, TeamColor, TokenGrid, SEQUENCE_LENGTH};

/// A completed sequence: five cells from `start` to `end` inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    pub start: Position,
    pub end: Position,
    pub color: TeamColor,
}

impl Sequence {
    /// The five cells of the sequence, from `start` to `end`.
    #[must_use]
    pub fn cells(&self) -> [Position; SEQUENCE_LENGTH] {
        let span = (SEQUENCE_LENGTH - 1) as isize;
        let dr = (self.end.row as isize - self.start.row as isize) / span;
        let dc = (self.end.col as isize - self.start.col as isize) / span;

        std::array::from_fn(|i| {
            let i = i as isize;
            Position::new(
                (self.start.row as isize + dr * i) as usize,
                (self.start.col as isize + dc * i) as usize,
            )
        })
    }
}

fn scan_line(grid: &TokenGrid, line: &[Position], found: &mut Vec<Sequence>) {
    let mut run = 0usize;
    let mut anchor: Option<TeamColor> = None;

    for (i, &pos) in line.iter().enumerate() {
        if pos.is_corner() {
            run += 1;
        } else {
            match grid.get(pos) {
                None => {
                    run = 0;
                    anchor = None;
                }
                Some(color) => {
                    let extends = anchor == Some(color) || (anchor.is_none() && run > 0);
                    run = if extends { run + 1 } else { 1 };
                    anchor = Some(color);
                }
            }
        }

        if run == SEQUENCE_LENGTH {
            // Five wilds in a row cannot happen on a board with four corners.
            if let Some(color) = anchor {
                found.push(Sequence {
                    start: line[i + 1 - SEQUENCE_LENGTH],
                    end: pos,
                    color,
                });
            }
            run = 1;
        }
    }
}

/// Every completed sequence on the board.
///
/// ```
/// use sequence_engine::board::{Position, TeamColor, TokenGrid};
/// use sequence_engine::rules::get_all_sequences;
///
/// let mut grid = TokenGrid::new();
/// for col in 2..7 {
///     grid.set(Position::new(4, col), Some(TeamColor::Blue));
/// }
/// let found = get_all_sequences(&grid);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].start, Position::new(4, 2));
/// assert_eq!(found[0].end, Position::new(4, 6));
/// ```
#[must_use]
pub fn get_all_sequences(grid: &TokenGrid) -> Vec<Sequence> {
    let mut found = Vec::new();
    for line in all_rows() {
        scan_line(grid, &line, &mut found);
    }
    found
}

/// Completed sequences per team. Teams with none are absent.
#[must_use]
pub fn count_sequences(grid: &TokenGrid) -> FxHashMap<TeamColor, usize> {
    let mut counts = FxHashMap::default();
    for sequence in get_all_sequences(grid) {
        *counts.entry(sequence.color).or_insert(0) += 1;
    }
    counts
}
