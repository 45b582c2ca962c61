//! The 4×4 tile grid.
//!
//! ## Representation
//!
//! A board is 16 `u32` cells in row-major order. Zero means empty; every
//! non-zero cell holds a power of two ≥ 2. The type is `Copy` (64 bytes),
//! so transforms take boards by reference and hand back new values.
//!
//! ## Invariant
//!
//! The power-of-two invariant is a constructor discipline, not a runtime
//! check: boards only enter play through [`Board::empty`] plus merges and
//! spawns, all of which preserve it. [`Board::is_well_formed`] exists for
//! tests and debug assertions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Side length of the grid. The game is fixed at 4×4.
pub const BOARD_SIZE: usize = 4;

/// A 4×4 grid of tile values.
///
/// ## Example
///
/// ```
/// use rust_2048::Board;
///
/// let board = Board::empty();
/// assert!(board.empty_cells().len() == 16);
///
/// let board = Board::from_cells([
///     [2, 0, 0, 0],
///     [0, 4, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
/// ]);
/// assert_eq!(board.get(1, 1), 4);
/// assert_eq!(board.tile_sum(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[u32; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an all-empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[0; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Create a board from explicit cell values.
    ///
    /// Callers are responsible for the power-of-two invariant; this is the
    /// entry point for tests and external snapshot restore.
    #[must_use]
    pub const fn from_cells(cells: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Get the raw cell grid.
    #[must_use]
    pub const fn cells(&self) -> [[u32; BOARD_SIZE]; BOARD_SIZE] {
        self.cells
    }

    /// Get the value at (row, col). Zero means empty.
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    /// Set the value at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row][col] = value;
    }

    /// Get a single row as an array.
    #[must_use]
    pub const fn row(&self, row: usize) -> [u32; BOARD_SIZE] {
        self.cells[row]
    }

    /// Replace a single row.
    pub fn set_row(&mut self, row: usize, values: [u32; BOARD_SIZE]) {
        self.cells[row] = values;
    }

    /// Collect the coordinates of all empty cells in row-major order.
    ///
    /// At most 16 entries, so the result lives on the stack.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[(usize, usize); 16]> {
        let mut empties = SmallVec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cells[row][col] == 0 {
                    empties.push((row, col));
                }
            }
        }
        empties
    }

    /// Check whether no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != 0))
    }

    /// Count the non-empty cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell != 0).count())
            .sum()
    }

    /// Sum of all tile values on the board.
    ///
    /// Moves conserve this exactly; spawns increase it by the spawned value.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&cell| u64::from(cell)).sum::<u64>())
            .sum()
    }

    /// Check the cell-value invariant: every non-zero cell is a power of
    /// two ≥ 2.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|&cell| cell == 0 || (cell >= 2 && cell.is_power_of_two()))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &cell in row {
                if cell == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{cell:>6}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
