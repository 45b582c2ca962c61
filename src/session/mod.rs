//! Game session orchestration.
//!
//! [`GameSession`] owns the live state of one game: board, score, terminal
//! flag, and the RNG stream. It is the boundary a presentation layer talks
//! to, feeding in decoded [`Direction`] commands and rendering from
//! [`SessionView`] snapshots.
//!
//! ## Move Protocol
//!
//! A requested move is computed as a candidate by the transform engine and
//! only committed if it actually changes the board. Committed moves spawn
//! exactly one tile and re-evaluate the terminal flag; rejected moves
//! change nothing and spawn nothing. Once the terminal flag is set, every
//! move is rejected until an explicit [`GameSession::reset`].

use serde::{Deserialize, Serialize};

use crate::core::board::{Board, BOARD_SIZE};
use crate::core::direction::Direction;
use crate::core::rng::GameRng;
use crate::engine;
use crate::spawn::{spawn_tile, SpawnedTile};

/// Number of tiles spawned when a session starts or resets.
const INITIAL_SPAWNS: usize = 2;

/// The live state of a single game.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    score: u32,
    game_over: bool,
    rng: GameRng,
}

/// Per-move report returned by [`GameSession::apply_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveDelta {
    /// Whether the move changed the board and was committed.
    pub accepted: bool,
    /// Points gained from merges in this move. Zero when rejected.
    pub gained: u32,
    /// The tile spawned after commit, if the board had room.
    pub spawned: Option<SpawnedTile>,
    /// Terminal flag after the move.
    pub game_over: bool,
}

impl MoveDelta {
    /// A rejected move: nothing changed, nothing spawned.
    const fn rejected(game_over: bool) -> Self {
        Self {
            accepted: false,
            gained: 0,
            spawned: None,
            game_over,
        }
    }
}

/// Read-only snapshot of session state for rendering or serialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub board: [[u32; BOARD_SIZE]; BOARD_SIZE],
    pub score: u32,
    pub game_over: bool,
}

impl GameSession {
    /// Start a fresh game: empty board, two spawned tiles, score 0.
    ///
    /// Two tiles on a 4×4 grid can never be terminal, so a new session is
    /// always playable.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut session = Self {
            board: Board::empty(),
            score: 0,
            game_over: false,
            rng: GameRng::new(seed),
        };
        session.spawn_initial();
        session
    }

    /// Rebuild a session from snapshot parts.
    ///
    /// The terminal flag is recomputed from the board, so a restored
    /// session can never claim a playable board is over (or vice versa).
    #[must_use]
    pub fn from_parts(board: Board, score: u32, rng: GameRng) -> Self {
        let game_over = engine::is_terminal(&board);
        Self {
            board,
            score,
            game_over,
            rng,
        }
    }

    /// Restart this session in place, continuing the existing RNG stream.
    ///
    /// Accepted at any time, including while the game is over.
    pub fn reset(&mut self) {
        self.board = Board::empty();
        self.score = 0;
        self.game_over = false;
        self.spawn_initial();
    }

    fn spawn_initial(&mut self) {
        for _ in 0..INITIAL_SPAWNS {
            spawn_tile(&mut self.board, &mut self.rng);
        }
    }

    /// Apply a directional move.
    ///
    /// Rejected (a no-op delta) when the game is over or when the move
    /// would not change the board. Otherwise commits the transformed board
    /// and score, spawns one tile, and re-evaluates the terminal flag.
    pub fn apply_move(&mut self, direction: Direction) -> MoveDelta {
        if self.game_over {
            return MoveDelta::rejected(true);
        }

        let outcome = engine::apply_move(&self.board, self.score, direction);
        if outcome.board == self.board {
            return MoveDelta::rejected(false);
        }

        let gained = outcome.score - self.score;
        self.board = outcome.board;
        self.score = outcome.score;

        let spawned = spawn_tile(&mut self.board, &mut self.rng);
        self.game_over = engine::is_terminal(&self.board);

        MoveDelta {
            accepted: true,
            gained,
            spawned,
            game_over: self.game_over,
        }
    }

    /// Check whether a move in `direction` would change the board.
    #[must_use]
    pub fn can_move(&self, direction: Direction) -> bool {
        !self.game_over
            && engine::apply_move(&self.board, self.score, direction).board != self.board
    }

    /// Directions that would change the board, in index order.
    ///
    /// Empty iff the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.can_move(dir))
            .collect()
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether no move remains possible.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The RNG stream, for snapshotting alongside [`SessionView`].
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Snapshot the current state for rendering or serialization.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            board: self.board.cells(),
            score: self.score,
            game_over: self.game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_spawns_two_tiles() {
        let session = GameSession::new(42);

        assert_eq!(session.board().tile_count(), 2);
        assert_eq!(session.score(), 0);
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut session = GameSession::new(42);
        let mut accepted = 0;
        for dir in Direction::ALL.into_iter().cycle().take(12) {
            if session.apply_move(dir).accepted {
                accepted += 1;
            }
        }
        assert!(accepted > 0, "a fresh board always has a legal move");

        session.reset();

        assert_eq!(session.board().tile_count(), 2);
        assert_eq!(session.score(), 0);
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        // Single tile already flush left: Left must be rejected.
        let board = Board::from_cells([
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let mut session = GameSession::from_parts(board, 0, GameRng::new(1));

        let delta = session.apply_move(Direction::Left);

        assert!(!delta.accepted);
        assert_eq!(delta.gained, 0);
        assert_eq!(delta.spawned, None);
        assert_eq!(*session.board(), board);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_accepted_move_spawns_exactly_one_tile() {
        let board = Board::from_cells([
            [0, 2, 0, 0],
            [0, 0, 4, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let mut session = GameSession::from_parts(board, 0, GameRng::new(5));

        let delta = session.apply_move(Direction::Left);

        assert!(delta.accepted);
        let spawned = delta.spawned.expect("board had room to spawn");
        assert_eq!(session.board().tile_count(), 3);
        assert_eq!(session.board().get(spawned.row, spawned.col), spawned.value);
    }

    #[test]
    fn test_merge_credits_score() {
        let board = Board::from_cells([
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let mut session = GameSession::from_parts(board, 100, GameRng::new(5));

        let delta = session.apply_move(Direction::Left);

        assert!(delta.accepted);
        assert_eq!(delta.gained, 4);
        assert_eq!(session.score(), 104);
    }

    #[test]
    fn test_moves_rejected_after_game_over() {
        let stuck = Board::from_cells([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let mut session = GameSession::from_parts(stuck, 50, GameRng::new(5));
        assert!(session.is_game_over());

        for dir in Direction::ALL {
            let delta = session.apply_move(dir);
            assert!(!delta.accepted);
            assert!(delta.game_over);
        }
        assert_eq!(*session.board(), stuck);
        assert_eq!(session.score(), 50);
    }

    #[test]
    fn test_reset_accepted_while_game_over() {
        let stuck = Board::from_cells([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let mut session = GameSession::from_parts(stuck, 50, GameRng::new(5));
        assert!(session.is_game_over());

        session.reset();

        assert!(!session.is_game_over());
        assert_eq!(session.score(), 0);
        assert_eq!(session.board().tile_count(), 2);
    }

    #[test]
    fn test_legal_moves_empty_iff_game_over() {
        let stuck = Board::from_cells([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let session = GameSession::from_parts(stuck, 0, GameRng::new(5));
        assert!(session.legal_moves().is_empty());

        let fresh = GameSession::new(42);
        assert!(!fresh.legal_moves().is_empty());
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let mut session1 = GameSession::new(1234);
        let mut session2 = GameSession::new(1234);

        for dir in Direction::ALL.into_iter().cycle().take(40) {
            assert_eq!(session1.apply_move(dir), session2.apply_move(dir));
        }
        assert_eq!(session1.view(), session2.view());
    }

    #[test]
    fn test_view_matches_state() {
        let session = GameSession::new(42);
        let view = session.view();

        assert_eq!(view.board, session.board().cells());
        assert_eq!(view.score, session.score());
        assert_eq!(view.game_over, session.is_game_over());
    }
}
