//! Game state and the manager that drives it.
//!
//! - `GameState`: the authoritative state, hands included
//! - `GameManager`: validates and commits moves
//! - `PlayerVisibleGameState`: what one seat is allowed to see

pub mod state;
pub mod view;
pub mod manager;

pub use state::GameState;
pub use view::PlayerVisibleGameState;
pub use manager::{GameManager, MoveOutcome};
