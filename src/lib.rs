//! # Lexgrid Game Engine
//!
//! Stateless, deterministic simulation core for a 4x4 word-grid puzzle.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      LEXGRID ENGINE                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/            - Deterministic primitives                 │
//! │  ├── rng.rs       - Deterministic Xorshift128+ PRNG          │
//! │  └── multiset.rs  - Letter multiset (legality currency)      │
//! │                                                              │
//! │  words/           - Startup-time word machinery              │
//! │  ├── normalize.rs - QU-compression, playable-word filter     │
//! │  ├── dict.rs      - Filtered dictionary loader               │
//! │  ├── values.rs    - Per-letter point values                  │
//! │  └── sampler.rs   - Weighted CDF letter sampler              │
//! │                                                              │
//! │  game/            - Replay engine (deterministic)            │
//! │  ├── config.rs    - Immutable startup configuration          │
//! │  ├── state.rs     - Game identity and derived grid           │
//! │  ├── replay.rs    - Replay, move validation, tile refill     │
//! │  └── score.rs     - Quadratic word scoring                   │
//! │                                                              │
//! │  request.rs       - Logical external interface (no I/O)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! No game state is stored between requests. A game is identified entirely
//! by `(seed, started, moves)`: every request re-derives the PRNG stream
//! from `seed XOR started`, redraws the initial grid, and re-validates the
//! full move history. The `core/` and `game/` modules are 100% deterministic:
//! - All randomness comes from the per-game seeded Xorshift128+ stream
//! - BTreeMap everywhere iteration order matters
//! - No system time or global mutable state on the replay path
//!
//! Given identical `(seed, started, moves)`, replay produces **identical
//! tiles, validity, and score** on any platform.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod request;
pub mod words;

// Re-export commonly used types
pub use crate::core::multiset::LetterCounts;
pub use crate::core::rng::GameRng;
pub use crate::game::config::{ConfigError, GameConfig};
pub use crate::game::replay::{MoveError, ReplayError};
pub use crate::game::state::Game;
pub use crate::words::dict::{DictOptions, Dictionary};
pub use crate::words::sampler::{LetterSampler, SamplerError};
pub use crate::words::values::LetterValues;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Grid side length
pub const GRID_LEN: usize = 4;

/// Total tile slots on the board
pub const GRID_SIZE: usize = GRID_LEN * GRID_LEN;

/// Moves per game before it is over
pub const DEFAULT_GAME_LEN: usize = 10;
