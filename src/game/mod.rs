//! Deterministic Replay Engine.
//!
//! A game is reconstructed from scratch on every request: reseed the PRNG
//! from the game's identity, redraw the initial grid, re-validate the full
//! move history. Nothing in this module touches global state.

pub mod config;
pub mod replay;
pub mod score;
pub mod state;
