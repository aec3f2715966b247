//! Placement legality.
//!
//! Rules, checked in order:
//!
//! 1. Corners reject every card.
//! 2. A two-eyed jack goes on any empty cell.
//! 3. A one-eyed jack removes a token of another team, unless removing it
//!    would lower the number of completed sequences on the board.
//! 4. Any other card goes on an empty cell carrying that card.
//!
//! Rule 3 rescans the whole board for every candidate cell. Listing every
//! legal removal therefore costs a full scan per occupied cell; on a 10x10
//! board that is cheap, but keep it out of tight inner loops.

use crate::board::{BoardLayout, Cell, Position, TeamColor, TokenGrid};
use crate::cards::{Card, JackKind};
use crate::error::PlacementError;

use super::sequences::get_all_sequences;

/// Why `card` cannot be played by `color` at `position`, or `None` if it can.
///
/// `sequence_count` is the number of completed sequences currently on the
/// board; a removal may not lower it.
#[must_use]
pub fn placement_error(
    layout: &BoardLayout,
    grid: &TokenGrid,
    sequence_count: usize,
    color: TeamColor,
    card: Card,
    position: Position,
) -> Option<PlacementError> {
    if !position.in_bounds() {
        return Some(PlacementError::OutOfBounds(position));
    }
    if position.is_corner() {
        return Some(PlacementError::Corner);
    }

    match card.jack_kind() {
        Some(JackKind::TwoEyed) => {
            (!grid.is_empty_at(position)).then_some(PlacementError::Occupied(position))
        }
        Some(JackKind::OneEyed) => match grid.get(position) {
            None => Some(PlacementError::NothingToRemove(position)),
            Some(token) if token == color => Some(PlacementError::OwnToken),
            Some(_) => {
                // Check against a copy; the live grid is never touched.
                let removed = grid.with(position, None);
                (get_all_sequences(&removed).len() != sequence_count)
                    .then_some(PlacementError::BreaksSequence)
            }
        },
        None => {
            if layout.cell(position) != Cell::Card(card) {
                Some(PlacementError::WrongCell { card, position })
            } else if !grid.is_empty_at(position) {
                Some(PlacementError::Occupied(position))
            } else {
                None
            }
        }
    }
}

/// Human-readable reason `card` cannot be played, or `None` if it can.
#[must_use]
pub fn placement_error_message(
    layout: &BoardLayout,
    grid: &TokenGrid,
    sequence_count: usize,
    color: TeamColor,
    card: Card,
    position: Position,
) -> Option<String> {
    placement_error(layout, grid, sequence_count, color, card, position).map(|e| e.to_string())
}

/// True if `card` can be played by `color` at `position`.
///
/// ```
/// use sequence_engine::board::{create_layout, Position, TeamColor, TokenGrid};
/// use sequence_engine::cards::{Card, Rank, Suit};
/// use sequence_engine::rules::is_valid_placement;
///
/// let layout = create_layout();
/// let grid = TokenGrid::new();
/// let two_clubs = Card::new(Rank::Two, Suit::Clubs);
///
/// assert!(is_valid_placement(&layout, &grid, 0, TeamColor::Blue, two_clubs, Position::new(0, 1)));
/// assert!(!is_valid_placement(&layout, &grid, 0, TeamColor::Blue, two_clubs, Position::new(0, 2)));
/// ```
#[must_use]
pub fn is_valid_placement(
    layout: &BoardLayout,
    grid: &TokenGrid,
    sequence_count: usize,
    color: TeamColor,
    card: Card,
    position: Position,
) -> bool {
    placement_error(layout, grid, sequence_count, color, card, position).is_none()
}
