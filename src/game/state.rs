//! Game identity and derived state.
//!
//! `(seed, started, moves)` is the entire persisted identity of a game;
//! the tile grid and the `over` flag are derived by replay and never
//! stored as ground truth across requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;
use crate::words::normalize::denormalize;
use crate::words::values::LetterValues;
use crate::{game::score::score_word, GRID_LEN, GRID_SIZE};

/// One game of the word-grid puzzle.
///
/// Constructed fresh per request (from client-supplied identity or newly
/// randomized), replayed in memory, mutated by at most one additional
/// move, then discarded — the updated identity is handed back to the
/// client instead of being stored server-side.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    /// Sole entropy source, drawn once from the OS CSPRNG at creation.
    pub seed: i64,

    /// Wall-clock creation time; its Unix value is XORed with `seed` to
    /// derive the PRNG stream.
    pub started: DateTime<Utc>,

    /// Normalized move history, append-only. The empty string is a pass.
    pub moves: Vec<String>,

    /// Current tile grid, row-major, exactly [`GRID_SIZE`] normalized
    /// letters once drawn. Derived state: recomputed by replay.
    #[serde(skip)]
    pub letters: Vec<char>,

    /// True once the move limit has been reached.
    pub over: bool,

    /// Private per-game PRNG stream. Never shared between games.
    #[serde(skip)]
    pub(crate) rng: GameRng,
}

impl Game {
    /// The identity triple's time component, as replay consumes it.
    #[inline]
    pub fn started_unix(&self) -> i64 {
        self.started.timestamp()
    }

    /// The 4x4 board, row-major: `letters[i]` is row `i / 4`, column
    /// `i % 4`.
    pub fn board(&self) -> [[char; GRID_LEN]; GRID_LEN] {
        let mut board = [[' '; GRID_LEN]; GRID_LEN];
        for (i, &l) in self.letters.iter().take(GRID_SIZE).enumerate() {
            board[i / GRID_LEN][i % GRID_LEN] = l;
        }
        board
    }

    /// The board as display strings, with "Q" expanded back to "QU".
    pub fn display_board(&self) -> [[String; GRID_LEN]; GRID_LEN] {
        self.board()
            .map(|row| row.map(|l| denormalize(&l.to_string())))
    }

    /// Cumulative score over all moves (passes contribute 0).
    pub fn score(&self, values: &LetterValues) -> i64 {
        self.moves.iter().map(|m| score_word(m, values)).sum()
    }
}

// =============================================================================
// TESTS
// =============================================================================
