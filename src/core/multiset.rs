//! Letter Multiset
//!
//! The basic currency for comparing "letters available" against "letters
//! required". Uses BTreeMap so iteration and display order are
//! deterministic.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::words::normalize::normalize;

/// A multiset of letters: letter → non-negative occurrence count.
///
/// Counts never go below zero; equality is by content. Consumers treat
/// values as immutable — operations return new multisets or counts. The
/// one exception is [`LetterCounts::decrement`], which the replay engine
/// uses to track tiles already refilled for the current move.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterCounts(BTreeMap<char, u32>);

impl LetterCounts {
    /// Count the letters of a word, normalizing it first (so "quart"
    /// counts one Q and no U).
    pub fn from_word(word: &str) -> Self {
        let norm = normalize(word);
        let mut counts = Self::default();
        for l in norm.chars() {
            *counts.0.entry(l).or_insert(0) += 1;
        }
        counts
    }

    /// Tally a sequence of already-normalized tiles.
    pub fn from_letters(letters: &[char]) -> Self {
        let mut counts = Self::default();
        for &l in letters {
            *counts.0.entry(l).or_insert(0) += 1;
        }
        counts
    }

    /// Occurrences of `letter` (0 if absent).
    #[inline]
    pub fn get(&self, letter: char) -> u32 {
        self.0.get(&letter).copied().unwrap_or(0)
    }

    /// True iff every letter of `needle` occurs here at least as often.
    ///
    /// This is the legality test for "can this word be spelled from these
    /// tiles".
    pub fn contains(&self, needle: &LetterCounts) -> bool {
        needle.0.iter().all(|(l, c)| self.get(*l) >= *c)
    }

    /// Per-letter maximum across all inputs: the result `contains` every
    /// input. Used by offline tooling to compute the minimal tile set
    /// covering a batch of words; not on the request path.
    pub fn max<'a>(counts: impl IntoIterator<Item = &'a LetterCounts>) -> Self {
        let mut res = Self::default();
        for cm in counts {
            for (&l, &c) in &cm.0 {
                let entry = res.0.entry(l).or_insert(0);
                if c > *entry {
                    *entry = c;
                }
            }
        }
        res
    }

    /// Remove one occurrence of `letter`, if any. Returns whether a count
    /// was consumed.
    pub fn decrement(&mut self, letter: char) -> bool {
        match self.0.get_mut(&letter) {
            Some(c) if *c > 0 => {
                *c -= 1;
                true
            }
            _ => false,
        }
    }

    /// Total number of letters counted (with multiplicity).
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// True if no letters are counted.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(|&c| c == 0)
    }

    /// Iterate over (letter, count) pairs in sorted letter order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.0.iter().map(|(&l, &c)| (l, c))
    }
}

/// Canonical string form: letters repeated per count, in sorted order.
/// Used for display, debugging, and test fixtures, not gameplay.
impl fmt::Display for LetterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (&l, &c) in &self.0 {
            for _ in 0..c {
                write!(f, "{l}")?;
            }
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let tiles = LetterCounts::from_word("astronomer");
        for word in ["moon", "starer"] {
            assert!(
                tiles.contains(&LetterCounts::from_word(word)),
                "astronomer should contain {word}"
            );
        }
        assert!(!tiles.contains(&LetterCounts::from_word("noodle")));
    }

    #[test]
    fn test_contains_q_compression() {
        // "quartera" normalizes to QARTERA; "qatar" to QATAR.
        let tiles = LetterCounts::from_word("quartera");
        assert!(tiles.contains(&LetterCounts::from_word("qatar")));
        assert!(tiles.contains(&LetterCounts::from_word("quart")));
        assert!(!tiles.contains(&LetterCounts::from_word("quartz")));
    }

    #[test]
    fn test_display_sorted() {
        assert_eq!(LetterCounts::from_word("moon").to_string(), "MNOO");
        assert_eq!(
            LetterCounts::from_word("astronomer").to_string(),
            "AEMNOORRST"
        );
        assert_eq!(LetterCounts::default().to_string(), "");
    }

    #[test]
    fn test_max_covers_all_inputs() {
        let words = ["astronomer", "noodle", "moon", "starer"];
        let counts: Vec<_> = words.iter().map(|w| LetterCounts::from_word(w)).collect();
        let cover = LetterCounts::max(&counts);
        for c in &counts {
            assert!(cover.contains(c), "max should contain {c}");
        }
        // And it is minimal per letter: three Os because of "astronomer".
        assert_eq!(cover.get('O'), 3);
        assert_eq!(cover.get('N'), 2);
    }

    #[test]
    fn test_decrement() {
        let mut counts = LetterCounts::from_word("moon");
        assert_eq!(counts.get('O'), 2);
        assert!(counts.decrement('O'));
        assert_eq!(counts.get('O'), 1);
        assert!(counts.decrement('O'));
        assert!(!counts.decrement('O'), "count must not go below zero");
        assert!(!counts.decrement('Z'));
    }

    #[test]
    fn test_from_letters_matches_from_word() {
        let letters: Vec<char> = "MOON".chars().collect();
        assert_eq!(
            LetterCounts::from_letters(&letters),
            LetterCounts::from_word("moon")
        );
    }

    #[test]
    fn test_total_and_empty() {
        assert_eq!(LetterCounts::from_word("moon").total(), 4);
        assert!(LetterCounts::from_word("").is_empty());
        assert!(!LetterCounts::from_word("a").is_empty());
    }
}
