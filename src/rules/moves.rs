//! Legal move enumeration.
//!
//! A card with at least one legal cell yields one move per cell. A dead
//! card (no legal cell) yields a single discard move, but only while
//! discarding is allowed; otherwise it yields nothing.

use crate::board::{all_positions, BoardLayout, Position, TeamColor, TokenGrid};
use crate::cards::Card;
use crate::core::Move;

use super::placement::is_valid_placement;

/// Cells worth testing for `card`. Jacks can go anywhere; every other card
/// only ever fits its two layout cells.
fn candidate_positions(layout: &BoardLayout, card: Card) -> Vec<Position> {
    if card.jack_kind().is_some() {
        all_positions().filter(|p| !p.is_corner()).collect()
    } else {
        layout.positions_of(card).into_vec()
    }
}

/// Every cell `card` can legally be played at, in row-major order.
#[must_use]
pub fn legal_positions(
    layout: &BoardLayout,
    grid: &TokenGrid,
    sequence_count: usize,
    color: TeamColor,
    card: Card,
) -> Vec<Position> {
    candidate_positions(layout, card)
        .into_iter()
        .filter(|&pos| is_valid_placement(layout, grid, sequence_count, color, card, pos))
        .collect()
}

/// True if `card` has at least one legal cell.
#[must_use]
pub fn has_legal_placement(
    layout: &BoardLayout,
    grid: &TokenGrid,
    sequence_count: usize,
    color: TeamColor,
    card: Card,
) -> bool {
    candidate_positions(layout, card)
        .into_iter()
        .any(|pos| is_valid_placement(layout, grid, sequence_count, color, card, pos))
}

/// True if `card` is dead, i.e. has no legal cell.
#[must_use]
pub fn is_valid_discard(
    layout: &BoardLayout,
    grid: &TokenGrid,
    sequence_count: usize,
    color: TeamColor,
    card: Card,
) -> bool {
    !has_legal_placement(layout, grid, sequence_count, color, card)
}

/// Legal moves for one card.
#[must_use]
pub fn moves_for_card(
    layout: &BoardLayout,
    grid: &TokenGrid,
    sequence_count: usize,
    color: TeamColor,
    card: Card,
    can_discard: bool,
) -> Vec<Move> {
    let positions = legal_positions(layout, grid, sequence_count, color, card);
    if positions.is_empty() {
        return if can_discard {
            vec![Move::discard(card)]
        } else {
            Vec::new()
        };
    }
    positions.into_iter().map(|pos| Move::place(card, pos)).collect()
}

/// Legal moves for a whole hand, in hand order.
///
/// Duplicate cards in the hand contribute their moves once.
///
/// ```
/// use sequence_engine::board::{create_layout, TokenGrid, TeamColor};
/// use sequence_engine::cards::{Card, Rank, Suit};
/// use sequence_engine::rules::moves_for_player;
///
/// let layout = create_layout();
/// let hand = [Card::new(Rank::Five, Suit::Spades), Card::new(Rank::Five, Suit::Spades)];
/// let moves = moves_for_player(&layout, &TokenGrid::new(), 0, TeamColor::Red, &hand, true);
/// assert_eq!(moves.len(), 2);
/// ```
#[must_use]
pub fn moves_for_player(
    layout: &BoardLayout,
    grid: &TokenGrid,
    sequence_count: usize,
    color: TeamColor,
    hand: &[Card],
    can_discard: bool,
) -> Vec<Move> {
    let mut moves = Vec::new();
    for (i, &card) in hand.iter().enumerate() {
        if hand[..i].contains(&card) {
            continue;
        }
        moves.extend(moves_for_card(layout, grid, sequence_count, color, card, can_discard));
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::create_layout;
    use crate::cards::{Rank, Suit};

    fn occupy(grid: &mut TokenGrid, positions: &[Position], color: TeamColor) {
        for &pos in positions {
            grid.set(pos, Some(color));
        }
    }

    #[test]
    fn test_fresh_card_has_two_moves() {
        let layout = create_layout();
        let card = Card::new(Rank::Queen, Suit::Hearts);

        let moves = moves_for_card(&layout, &TokenGrid::new(), 0, TeamColor::Blue, card, true);

        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.card == card && !m.is_discard()));
    }

    #[test]
    fn test_dead_card_becomes_discard() {
        let layout = create_layout();
        let card = Card::new(Rank::Three, Suit::Diamonds);
        let mut grid = TokenGrid::new();
        occupy(&mut grid, &layout.positions_of(card), TeamColor::Green);

        assert!(is_valid_discard(&layout, &grid, 0, TeamColor::Blue, card));
        assert_eq!(
            moves_for_card(&layout, &grid, 0, TeamColor::Blue, card, true),
            vec![Move::discard(card)]
        );
        assert!(moves_for_card(&layout, &grid, 0, TeamColor::Blue, card, false).is_empty());
    }

    #[test]
    fn test_playable_card_is_not_a_valid_discard() {
        let layout = create_layout();
        let card = Card::new(Rank::Three, Suit::Diamonds);
        let mut grid = TokenGrid::new();
        // Only one of the two cells taken.
        occupy(&mut grid, &layout.positions_of(card)[..1], TeamColor::Green);

        assert!(!is_valid_discard(&layout, &grid, 0, TeamColor::Blue, card));
        assert_eq!(legal_positions(&layout, &grid, 0, TeamColor::Blue, card).len(), 1);
    }

    #[test]
    fn test_two_eyed_jack_on_empty_board() {
        let layout = create_layout();
        let jack = Card::new(Rank::Jack, Suit::Clubs);

        let moves = moves_for_card(&layout, &TokenGrid::new(), 0, TeamColor::Red, jack, true);
        assert_eq!(moves.len(), 96);
    }

    #[test]
    fn test_one_eyed_jack_targets_opponents_only() {
        let layout = create_layout();
        let jack = Card::new(Rank::Jack, Suit::Hearts);
        let mut grid = TokenGrid::new();
        grid.set(Position::new(1, 1), Some(TeamColor::Red));
        grid.set(Position::new(2, 2), Some(TeamColor::Blue));
        grid.set(Position::new(3, 3), Some(TeamColor::Green));

        let targets = legal_positions(&layout, &grid, 0, TeamColor::Red, jack);
        assert_eq!(targets, vec![Position::new(2, 2), Position::new(3, 3)]);

        // Nothing to remove on an empty board: the jack is dead.
        assert_eq!(
            moves_for_card(&layout, &TokenGrid::new(), 0, TeamColor::Red, jack, true),
            vec![Move::discard(jack)]
        );
    }

    #[test]
    fn test_moves_for_player_follows_hand_order() {
        let layout = create_layout();
        let a = Card::new(Rank::Ace, Suit::Clubs);
        let b = Card::new(Rank::Four, Suit::Spades);

        let moves = moves_for_player(&layout, &TokenGrid::new(), 0, TeamColor::Blue, &[b, a], true);

        assert_eq!(moves.len(), 4);
        assert_eq!(moves[0].card, b);
        assert_eq!(moves[3].card, a);
    }
}
