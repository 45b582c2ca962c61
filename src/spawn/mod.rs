//! Weighted random tile spawning.
//!
//! After an accepted move (and twice at session start), a new tile appears
//! in a uniformly chosen empty cell: value 2 with probability 0.9, value 4
//! with probability 0.1. Randomness comes from the injected [`GameRng`],
//! so spawn sequences are reproducible from a seed.

use crate::core::board::Board;
use crate::core::rng::GameRng;

/// Probability that a spawned tile is a 4 rather than a 2.
pub const FOUR_TILE_PROBABILITY: f64 = 0.1;

/// A tile placed by the spawner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    /// Always 2 or 4.
    pub value: u32,
}

/// Place a new tile in a random empty cell.
///
/// Returns `None` without drawing from the RNG when the board is full.
///
/// ## Example
///
/// ```
/// use rust_2048::{spawn_tile, Board, GameRng};
///
/// let mut board = Board::empty();
/// let mut rng = GameRng::new(42);
///
/// let spawned = spawn_tile(&mut board, &mut rng).unwrap();
/// assert!(spawned.value == 2 || spawned.value == 4);
/// assert_eq!(board.get(spawned.row, spawned.col), spawned.value);
/// assert_eq!(board.tile_count(), 1);
/// ```
pub fn spawn_tile(board: &mut Board, rng: &mut GameRng) -> Option<SpawnedTile> {
    let empties = board.empty_cells();
    let &(row, col) = rng.choose(&empties)?;

    let value = if rng.gen_bool(FOUR_TILE_PROBABILITY) { 4 } else { 2 };
    board.set(row, col, value);

    Some(SpawnedTile { row, col, value })
}
