//! Per-letter point values.
//!
//! Values feed both the quadratic word score and (inverted) the sampler
//! weights, so common low-value letters are drawn more often than rare
//! high-value ones.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Letters worth 2 points.
const TWO_POINT: &str = "lcfhmpvwy";
/// Letters worth 3 points.
const THREE_POINT: &str = "jkqxz";

/// Point value per (normalized) letter.
///
/// Built once at startup and shared read-only. Every ASCII letter has a
/// value: 1 by default, raised to 2 or 3 for the harder letters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LetterValues {
    values: BTreeMap<char, i64>,
}

impl Default for LetterValues {
    fn default() -> Self {
        let mut values = BTreeMap::new();
        for l in 'A'..='Z' {
            values.insert(l, 1);
        }
        for (tier, letters) in [(2, TWO_POINT), (3, THREE_POINT)] {
            for l in letters.chars() {
                values.insert(l.to_ascii_uppercase(), tier);
            }
        }
        Self { values }
    }
}

impl LetterValues {
    /// Point value of a normalized letter (0 for anything outside A-Z).
    #[inline]
    pub fn value(&self, letter: char) -> i64 {
        self.values.get(&letter).copied().unwrap_or(0)
    }

    /// Sampler weights: `1000 / value` per letter, so cheap letters carry
    /// proportionally more mass.
    pub fn inverted_weights(&self) -> BTreeMap<char, i64> {
        self.values.iter().map(|(&l, &v)| (l, 1000 / v)).collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tiers() {
        let values = LetterValues::default();
        for l in ['A', 'E', 'S', 'T'] {
            assert_eq!(values.value(l), 1);
        }
        for l in ['L', 'C', 'F', 'H', 'M', 'P', 'V', 'W', 'Y'] {
            assert_eq!(values.value(l), 2, "{l} should be worth 2");
        }
        for l in ['J', 'K', 'Q', 'X', 'Z'] {
            assert_eq!(values.value(l), 3, "{l} should be worth 3");
        }
    }

    #[test]
    fn test_unknown_letters_are_worthless() {
        let values = LetterValues::default();
        assert_eq!(values.value('é'), 0);
        assert_eq!(values.value('1'), 0);
    }

    #[test]
    fn test_inverted_weights() {
        let weights = LetterValues::default().inverted_weights();
        assert_eq!(weights[&'E'], 1000);
        assert_eq!(weights[&'H'], 500);
        assert_eq!(weights[&'Q'], 333);
        assert_eq!(weights.len(), 26);
    }
}
