//! Deterministic primitives.
//!
//! Everything the replay engine needs to be bit-for-bit reproducible:
//! a seeded PRNG and the letter multiset used for move legality.

pub mod multiset;
pub mod rng;
