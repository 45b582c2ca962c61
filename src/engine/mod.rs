//! The board transform engine.
//!
//! Pure functions from board values to board values: sliding, merging,
//! rotation, the four directional moves, and terminal-state detection.
//! Nothing here touches randomness or session state.

pub mod terminal;
pub mod transform;

pub use terminal::is_terminal;
pub use transform::{apply_move, compress_row, merge_row, rotate_clockwise, MoveOutcome};
