//! Logical external interface.
//!
//! Transport-agnostic request/response types: whatever carries them (HTTP
//! form, JSON body, test harness), the engine consumes the same logical
//! inputs and hands back the same canonical identity. No I/O happens here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::game::config::GameConfig;
use crate::game::replay::ReplayError;
use crate::game::state::Game;
use crate::GRID_LEN;

/// A resume/play request as the external handler hands it over.
///
/// `seed` and `started` arrive as raw strings because the transport does;
/// parse failures are not the client's problem to see.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GameRequest {
    /// Game seed to resume, if any.
    pub seed: Option<String>,
    /// Unix start timestamp to resume, if any.
    pub started: Option<String>,
    /// Full prior move history, in order. Empty entries are passes.
    #[serde(default)]
    pub moves: Vec<String>,
    /// One new move to apply after replay.
    #[serde(rename = "move")]
    pub new_move: Option<String>,
    /// Alternative trigger for an empty (pass) move.
    #[serde(default)]
    pub pass: bool,
}

/// Why a resume request could not identify a game. Recovered locally by
/// starting a new game; never surfaced to the caller.
#[derive(Debug, Clone, Error)]
enum MalformedRequest {
    #[error("missing or unparseable seed")]
    BadSeed,
    #[error("missing or unparseable start timestamp")]
    BadStarted,
}

/// Everything a rendering or persistence collaborator needs back.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameResponse {
    /// Canonical seed to send back on the next request.
    pub seed: i64,
    /// Canonical Unix start timestamp.
    pub started: i64,
    /// Full normalized move history.
    pub moves: Vec<String>,
    /// Display board, row-major 4x4, "Q" shown as "QU".
    pub board: [[String; GRID_LEN]; GRID_LEN],
    /// Cumulative score.
    pub score: i64,
    /// True once the move limit has been reached.
    pub over: bool,
    /// User-visible, non-fatal rejections from this request.
    pub errors: Vec<String>,
}

impl GameResponse {
    fn build(game: &Game, config: &GameConfig, errors: Vec<String>) -> Self {
        Self {
            seed: game.seed,
            started: game.started_unix(),
            moves: game.moves.clone(),
            board: game.display_board(),
            score: game.score(&config.values),
            over: game.over,
            errors,
        }
    }
}

/// Identity and score of a finished game, ready for a leaderboard
/// collaborator to persist (keyed by the identity triple). The core
/// performs no storage itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Game seed.
    pub seed: i64,
    /// Unix start timestamp.
    pub started: i64,
    /// Full normalized move history.
    pub moves: Vec<String>,
    /// Final score.
    pub score: i64,
    /// Wall-clock seconds from game start to record creation.
    pub duration_secs: i64,
}

impl ScoreRecord {
    /// Build a record for a finished game; `None` while the game is still
    /// running.
    pub fn from_game(game: &Game, config: &GameConfig) -> Option<Self> {
        if !game.over {
            return None;
        }
        Some(Self {
            seed: game.seed,
            started: game.started_unix(),
            moves: game.moves.clone(),
            score: game.score(&config.values),
            duration_secs: (Utc::now() - game.started).num_seconds(),
        })
    }
}

fn parse_identity(req: &GameRequest) -> Result<(i64, DateTime<Utc>), MalformedRequest> {
    let seed = req
        .seed
        .as_deref()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or(MalformedRequest::BadSeed)?;
    let started = req
        .started
        .as_deref()
        .and_then(|s| s.parse::<i64>().ok())
        .and_then(|t| DateTime::from_timestamp(t, 0))
        .ok_or(MalformedRequest::BadStarted)?;
    Ok((seed, started))
}

/// Reconstruct the game a request refers to.
///
/// An unidentifiable game (absent or malformed seed/timestamp) silently
/// becomes a new one; a move history that no longer replays is surfaced —
/// it means a tampered or corrupted move list, never something to repair.
pub fn resume(req: &GameRequest, config: &GameConfig) -> Result<Game, ReplayError> {
    match parse_identity(req) {
        Ok((seed, started)) => Game::replay(seed, started, &req.moves, config),
        Err(reason) => {
            debug!(%reason, "resume failed, starting fresh");
            Ok(Game::new(config))
        }
    }
}

/// Handle one request end to end: resume, then apply the new move if one
/// was submitted.
///
/// An illegal *new* move is a non-fatal rejection: it rides back in
/// `errors` next to the unmodified game. Only replay failures of the
/// supplied history are hard errors.
pub fn play(req: &GameRequest, config: &GameConfig) -> Result<GameResponse, ReplayError> {
    let mut game = resume(req, config)?;
    let mut errors = Vec::new();

    let submitted = match (req.new_move.as_deref(), req.pass) {
        (Some(mv), _) if !mv.is_empty() => Some(mv),
        (_, true) => Some(""),
        _ => None,
    };
    if let Some(mv) = submitted {
        if let Err(e) = game.apply_move(mv, config) {
            errors.push(e.to_string());
        }
    }
    Ok(GameResponse::build(&game, config, errors))
}

// =============================================================================
// TESTS
// =============================================================================
