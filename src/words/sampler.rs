//! Letter Frequency Sampler
//!
//! Inverse-CDF sampling: a cumulative-mass table built once from a
//! letter→weight mapping, then O(table size) weighted draws against a
//! per-game PRNG stream. The table is immutable and shared read-only
//! across all games.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::multiset::LetterCounts;
use crate::core::rng::GameRng;
use crate::words::dict::Dictionary;

/// Sampler construction errors.
///
/// These are configuration bugs: they abort initialization and are never
/// expected (or caught) per-request.
#[derive(Debug, Clone, Error)]
pub enum SamplerError {
    /// No letters carry any weight.
    #[error("letter weight table is empty")]
    EmptyTable,

    /// A weight would break the strictly-increasing cumulative mass.
    #[error("letter {letter:?} has non-positive weight {weight}")]
    NonPositiveWeight {
        /// Offending letter.
        letter: char,
        /// Its configured weight.
        weight: i64,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct CdfPoint {
    letter: char,
    mass: i64,
}

/// Weighted single-letter sampler over a fixed frequency distribution.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LetterSampler {
    cdf: Vec<CdfPoint>,
    total: i64,
}

impl LetterSampler {
    /// Build the cumulative table from a letter→weight mapping.
    ///
    /// BTreeMap ordering gives the fixed lexicographic letter order the
    /// determinism contract requires. Every weight must be positive so the
    /// cumulative mass strictly increases.
    pub fn from_weights(weights: &BTreeMap<char, i64>) -> Result<Self, SamplerError> {
        let mut cdf = Vec::with_capacity(weights.len());
        let mut mass = 0i64;
        for (&letter, &weight) in weights {
            if weight <= 0 {
                return Err(SamplerError::NonPositiveWeight { letter, weight });
            }
            mass += weight;
            cdf.push(CdfPoint { letter, mass });
        }
        if cdf.is_empty() {
            return Err(SamplerError::EmptyTable);
        }
        Ok(Self { cdf, total: mass })
    }

    /// Build weights from letter frequencies over a dictionary's
    /// normalized forms.
    ///
    /// Alternative to [`crate::LetterValues::inverted_weights`]: the board
    /// then mirrors how often letters actually occur in playable words.
    pub fn from_corpus(dict: &Dictionary) -> Result<Self, SamplerError> {
        let mut weights: BTreeMap<char, i64> = BTreeMap::new();
        for norm in dict.words() {
            for (l, c) in LetterCounts::from_word(norm).iter() {
                *weights.entry(l).or_insert(0) += i64::from(c);
            }
        }
        Self::from_weights(&weights)
    }

    /// Draw one letter proportionally to its weight.
    pub fn draw(&self, rng: &mut GameRng) -> char {
        let x = rng.below(self.total as u64) as i64;
        for point in &self.cdf {
            if x < point.mass {
                return point.letter;
            }
        }
        // The draw is in [0, total) and the last entry's mass is total.
        unreachable!("draw {x} exceeded cumulative mass {}", self.total)
    }

    /// Total mass of the table.
    pub fn total_mass(&self) -> i64 {
        self.total
    }
}

// =============================================================================
// TESTS
// =============================================================================
