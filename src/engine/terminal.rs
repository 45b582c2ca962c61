//! Terminal-state detection.
//!
//! A board is terminal when no move can change it: every cell is occupied
//! and no two adjacent cells (horizontally or vertically) are equal. This
//! single scan is equivalent to trying all four moves and checking for no
//! change, which the property suite verifies.

use crate::core::board::{Board, BOARD_SIZE};

/// Check whether any move remains possible.
///
/// Returns `true` iff the board is full and has no equal adjacent pair.
///
/// ## Example
///
/// ```
/// use rust_2048::{is_terminal, Board};
///
/// assert!(!is_terminal(&Board::empty()));
///
/// let stuck = Board::from_cells([
///     [2, 4, 2, 4],
///     [4, 2, 4, 2],
///     [2, 4, 2, 4],
///     [4, 2, 4, 2],
/// ]);
/// assert!(is_terminal(&stuck));
/// ```
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let value = board.get(row, col);
            if value == 0 {
                return false;
            }
            if row + 1 < BOARD_SIZE && board.get(row + 1, col) == value {
                return false;
            }
            if col + 1 < BOARD_SIZE && board.get(row, col + 1) == value {
                return false;
            }
        }
    }
    true
}
