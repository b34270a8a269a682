//! Startup-time word machinery.
//!
//! Everything here is built once during initialization and shared
//! read-only across all games: the normalized dictionary, per-letter point
//! values, and the weighted letter sampler.

pub mod dict;
pub mod normalize;
pub mod sampler;
pub mod values;
