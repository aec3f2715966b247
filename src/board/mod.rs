//! Board: geometry, the fixed card layout, and the token grid.
//!
//! ## Key Types
//!
//! - `Position`: a cell coordinate
//! - `BoardLayout`: fixed card identity per cell, shared by every game
//! - `TokenGrid`: per-game tokens, owned by one `GameState`

pub mod geometry;
pub mod layout;
pub mod grid;

pub use geometry::{
    all_positions, all_possible_sequences, all_rows, spiral_order, Line, Position, SpiralOrder,
    BOARD_SIZE, CORNERS, SEQUENCE_LENGTH,
};
pub use layout::{create_layout, BoardLayout, Cell};
pub use grid::{make_empty_grid, TeamColor, TokenGrid};
