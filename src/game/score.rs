//! Quadratic word scoring.

use crate::words::normalize::normalize;
use crate::words::values::LetterValues;

/// Score a single move: `(1 + Σ letter values over the normalized form)²`.
///
/// Quadratic so longer and higher-value words are rewarded
/// disproportionately. A pass (empty string) scores 0.
pub fn score_word(word: &str, values: &LetterValues) -> i64 {
    if word.is_empty() {
        return 0;
    }
    let base: i64 = 1 + normalize(word).chars().map(|l| values.value(l)).sum::<i64>();
    base * base
}

// =============================================================================
// TESTS
// =============================================================================
