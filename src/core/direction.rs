//! Move directions.
//!
//! The four directions are a closed enum, so an invalid direction cannot
//! exist inside the engine. The only fallible point is the external
//! boundary where a presentation layer decodes raw input into a direction:
//! [`Direction::from_index`] rejects out-of-range values instead of
//! coercing them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four slide directions.
///
/// Names follow the physical effect on the grid: `Up` slides tiles toward
/// row 0, `Left` toward column 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
}

impl Direction {
    /// All four directions, in index order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Decode a direction from its index (0=Left, 1=Right, 2=Up, 3=Down).
    ///
    /// ## Example
    ///
    /// ```
    /// use rust_2048::Direction;
    ///
    /// assert_eq!(Direction::from_index(2), Ok(Direction::Up));
    /// assert!(Direction::from_index(7).is_err());
    /// ```
    pub fn from_index(index: u8) -> Result<Self, InvalidDirection> {
        match index {
            0 => Ok(Direction::Left),
            1 => Ok(Direction::Right),
            2 => Ok(Direction::Up),
            3 => Ok(Direction::Down),
            other => Err(InvalidDirection(other)),
        }
    }

    /// The index of this direction, inverse of [`Direction::from_index`].
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Up => "Up",
            Direction::Down => "Down",
        };
        f.write_str(name)
    }
}

/// Error returned when decoding an out-of-range direction index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidDirection(pub u8);

impl fmt::Display for InvalidDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid direction index {} (expected 0-3)", self.0)
    }
}

impl std::error::Error for InvalidDirection {}
