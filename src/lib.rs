//! # rust-2048
//!
//! A 2048 sliding-tile game engine, optimized for testability and
//! reproducible play.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Move computation, merging, and terminal detection are
//!    total functions over board values. No rendering, input decoding, or
//!    persistence lives here.
//!
//! 2. **Injected Randomness**: Tile spawning draws from a seedable
//!    [`GameRng`] capability passed in by the caller. Same seed, same game.
//!
//! 3. **Value Semantics**: [`Board`] is a `Copy` grid of 16 cells.
//!    Transforms produce new boards rather than aliasing.
//!
//! ## Modules
//!
//! - `core`: Board grid, move directions, RNG capability
//! - `engine`: Compress/merge/rotate transforms and terminal detection
//! - `spawn`: Weighted random tile spawning
//! - `session`: Game session orchestration and state snapshots

pub mod core;
pub mod engine;
pub mod spawn;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, BOARD_SIZE,
    Direction, InvalidDirection,
    GameRng, RngState,
};

pub use crate::engine::{
    MoveOutcome, apply_move, compress_row, is_terminal, merge_row, rotate_clockwise,
};

pub use crate::spawn::{SpawnedTile, spawn_tile};

pub use crate::session::{GameSession, MoveDelta, SessionView};
