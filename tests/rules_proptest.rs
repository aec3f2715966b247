//! Property tests for placement and sequence rules over random grids.

use proptest::prelude::*;
use sequence_engine::board::{all_positions, BoardLayout, Position, TeamColor, TokenGrid};
use sequence_engine::cards::{Card, Rank, Suit};
use sequence_engine::rules::{
    count_sequences, get_all_sequences, is_valid_placement, moves_for_player,
    placement_error_message,
};

fn color_strategy() -> impl Strategy<Value = TeamColor> {
    (0usize..3).prop_map(|i| TeamColor::ALL[i])
}

fn card_strategy() -> impl Strategy<Value = Card> {
    (0usize..13, 0usize..4).prop_map(|(r, s)| Card::new(Rank::ALL[r], Suit::ALL[s]))
}

// Includes off-board cells to exercise the bounds check.
fn position_strategy() -> impl Strategy<Value = Position> {
    (0usize..11, 0usize..11).prop_map(|(row, col)| Position::new(row, col))
}

// Roughly half the non-corner cells covered.
fn grid_strategy() -> impl Strategy<Value = TokenGrid> {
    prop::collection::vec(prop::option::of(color_strategy()), 100).prop_map(|tokens| {
        let mut grid = TokenGrid::new();
        for (pos, token) in all_positions().zip(tokens) {
            if !pos.is_corner() {
                grid.set(pos, token);
            }
        }
        grid
    })
}

proptest! {
    #[test]
    fn test_message_present_iff_invalid(
        grid in grid_strategy(),
        color in color_strategy(),
        card in card_strategy(),
        pos in position_strategy(),
    ) {
        let layout = BoardLayout::shared();
        let count = get_all_sequences(&grid).len();

        let valid = is_valid_placement(&layout, &grid, count, color, card, pos);
        let message = placement_error_message(&layout, &grid, count, color, card, pos);

        prop_assert_eq!(valid, message.is_none());
    }

    #[test]
    fn test_counts_match_sequences(grid in grid_strategy()) {
        let sequences = get_all_sequences(&grid);
        let counts = count_sequences(&grid);

        prop_assert_eq!(counts.values().sum::<usize>(), sequences.len());
        for sequence in &sequences {
            for cell in sequence.cells() {
                prop_assert!(cell.is_corner() || grid.get(cell) == Some(sequence.color));
            }
        }
    }

    #[test]
    fn test_removal_never_lowers_count(
        grid in grid_strategy(),
        color in color_strategy(),
        pos in position_strategy(),
    ) {
        let layout = BoardLayout::shared();
        let count = get_all_sequences(&grid).len();
        let jack = Card::new(Rank::Jack, Suit::Spades);

        if is_valid_placement(&layout, &grid, count, color, jack, pos) {
            let token = grid.get(pos);
            prop_assert!(token.is_some() && token != Some(color));

            let removed = grid.with(pos, None);
            prop_assert_eq!(get_all_sequences(&removed).len(), count);
        }
    }

    #[test]
    fn test_listed_moves_are_legal(
        grid in grid_strategy(),
        color in color_strategy(),
        hand in prop::collection::vec(card_strategy(), 1..8),
        can_discard in any::<bool>(),
    ) {
        let layout = BoardLayout::shared();
        let count = get_all_sequences(&grid).len();

        for mv in moves_for_player(&layout, &grid, count, color, &hand, can_discard) {
            prop_assert!(hand.contains(&mv.card));
            match mv.position {
                Some(pos) => prop_assert!(is_valid_placement(&layout, &grid, count, color, mv.card, pos)),
                None => {
                    prop_assert!(can_discard);
                    let live = all_positions()
                        .any(|pos| is_valid_placement(&layout, &grid, count, color, mv.card, pos));
                    prop_assert!(!live);
                }
            }
        }
    }
}
