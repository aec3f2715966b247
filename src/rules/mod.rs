//! Game rules: placement legality, sequence detection, move listing.
//!
//! Everything here is a pure function of the layout and a token grid; none
//! of it owns state. `game::GameManager` calls into these and is the only
//! place that mutates anything.

pub mod placement;
pub mod sequences;
pub mod moves;
pub mod engine;

pub use placement::{is_valid_placement, placement_error, placement_error_message};
pub use sequences::{count_sequences, get_all_sequences, Sequence};
pub use moves::{
    has_legal_placement, is_valid_discard, legal_positions, moves_for_card, moves_for_player,
};
pub use engine::{GameResult, RulesEngine};
