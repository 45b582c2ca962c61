//! Compress/merge/rotate transforms and the directional move operation.
//!
//! ## Algorithm
//!
//! Left is the canonical direction. A left move is three row-local passes:
//!
//! 1. **Compress**: slide non-zero values toward column 0, preserving
//!    relative order.
//! 2. **Merge**: one left-to-right sweep; an equal non-zero adjacent pair
//!    doubles into the left cell, zeroes the right cell, and credits the
//!    doubled value to the score. The sweep index skips past the consumed
//!    cell, so a merge result never merges again in the same pass:
//!    `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`, never `[8, ...]`.
//! 3. **Compress** again to close the gaps merges left behind.
//!
//! The other three directions reduce to Left by rotating the grid, sliding,
//! and rotating back. Rotation counts are chosen so direction names match
//! their physical effect (Up slides tiles toward row 0).

use crate::core::board::{Board, BOARD_SIZE};
use crate::core::direction::Direction;

/// Result of applying a move to a board.
///
/// `score` is the caller's score plus this move's merge contributions.
/// The move itself never spawns a tile; spawning is the session's job,
/// and only after it confirms the board actually changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The board after compress/merge/compress.
    pub board: Board,
    /// The accumulated score after this move's merges.
    pub score: u32,
}

/// Slide all non-zero values in a row toward index 0, preserving order.
///
/// No merging happens here. Idempotent: compressing a compressed row is a
/// no-op.
#[must_use]
pub fn compress_row(row: [u32; BOARD_SIZE]) -> [u32; BOARD_SIZE] {
    let mut out = [0; BOARD_SIZE];
    let mut position = 0;
    for value in row {
        if value != 0 {
            out[position] = value;
            position += 1;
        }
    }
    out
}

/// Merge equal adjacent pairs in a single left-to-right sweep.
///
/// Returns the merged row (with gaps where right cells were consumed) and
/// the total value gained from merges. Expects a compressed row; the index
/// skip after each merge is what prevents `[2, 2, 2, 2]` from chaining
/// into `[8, ...]`.
#[must_use]
pub fn merge_row(row: [u32; BOARD_SIZE]) -> ([u32; BOARD_SIZE], u32) {
    let mut out = row;
    let mut gained = 0;
    let mut i = 0;
    while i + 1 < BOARD_SIZE {
        if out[i] != 0 && out[i] == out[i + 1] {
            out[i] *= 2;
            out[i + 1] = 0;
            gained += out[i];
            // The consumed cell may not merge again this pass.
            i += 2;
        } else {
            i += 1;
        }
    }
    (out, gained)
}

/// Rotate the board 90° clockwise: `rotated[r][c] = board[N-1-c][r]`.
#[must_use]
pub fn rotate_clockwise(board: &Board) -> Board {
    let mut out = Board::empty();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            out.set(row, col, board.get(BOARD_SIZE - 1 - col, row));
        }
    }
    out
}

/// Rotate the board clockwise `turns` quarter-turns.
fn rotated(board: &Board, turns: usize) -> Board {
    let mut out = *board;
    for _ in 0..turns % 4 {
        out = rotate_clockwise(&out);
    }
    out
}

/// Apply the canonical left move to every row.
fn slide_left(board: &Board) -> (Board, u32) {
    let mut out = Board::empty();
    let mut gained = 0;
    for row in 0..BOARD_SIZE {
        let compressed = compress_row(board.row(row));
        let (merged, row_gain) = merge_row(compressed);
        out.set_row(row, compress_row(merged));
        gained += row_gain;
    }
    (out, gained)
}

/// Apply a directional move to a board.
///
/// Total over all well-formed boards; a move that shifts nothing returns a
/// board equal to the input with the score unchanged.
///
/// ## Example
///
/// ```
/// use rust_2048::{apply_move, Board, Direction};
///
/// let board = Board::from_cells([
///     [2, 2, 2, 2],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
/// ]);
/// let outcome = apply_move(&board, 0, Direction::Left);
///
/// assert_eq!(outcome.board.row(0), [4, 4, 0, 0]);
/// assert_eq!(outcome.score, 8);
/// ```
#[must_use]
pub fn apply_move(board: &Board, score: u32, direction: Direction) -> MoveOutcome {
    // Pre-rotation puts the slide edge at column 0; post-rotation restores
    // the original orientation (pre + post = 4 quarter-turns).
    let (pre, post) = match direction {
        Direction::Left => (0, 0),
        Direction::Right => (2, 2),
        Direction::Up => (3, 1),
        Direction::Down => (1, 3),
    };

    let (slid, gained) = slide_left(&rotated(board, pre));

    MoveOutcome {
        board: rotated(&slid, post),
        score: score + gained,
    }
}
