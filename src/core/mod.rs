//! Core value types: the board grid, move directions, and the RNG capability.
//!
//! Everything here is a plain value. The board is `Copy`, directions are a
//! closed enum, and randomness is an explicit capability rather than a
//! hidden global.

pub mod board;
pub mod direction;
pub mod rng;

pub use board::{Board, BOARD_SIZE};
pub use direction::{Direction, InvalidDirection};
pub use rng::{GameRng, RngState};
