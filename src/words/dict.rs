//! Dictionary Loader
//!
//! Builds the normalized-word → display-spelling map once at startup from
//! an external word-list source, then serves read-only membership checks
//! for every game.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::words::normalize::{is_playable, normalize};
use crate::GRID_SIZE;

/// Shortest playable word (in normalized letters).
pub const MIN_WORD_LEN: usize = 3;

/// Word-list filter knobs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DictOptions {
    /// Longest accepted normalized length; a word can never use more
    /// tiles than the board holds.
    pub max_len: usize,
    /// Drop source lines starting with an uppercase ASCII letter. A
    /// proper-noun heuristic with known false positives, kept switchable
    /// rather than treated as semantically essential.
    pub reject_capitalized: bool,
}

impl Default for DictOptions {
    fn default() -> Self {
        Self {
            max_len: GRID_SIZE,
            reject_capitalized: true,
        }
    }
}

impl DictOptions {
    fn accepts(&self, word: &str) -> bool {
        if self.reject_capitalized && word.starts_with(|c: char| c.is_ascii_uppercase()) {
            return false;
        }
        if !is_playable(word) {
            return false;
        }
        let norm_len = normalize(word).chars().count();
        (MIN_WORD_LEN..=self.max_len).contains(&norm_len)
    }
}

/// Lazy iterator over the accepted words of a line-oriented source.
///
/// Finite and single-pass; restart by reopening the source. This replaces
/// a producer/consumer channel: the filter only exists for throughput, not
/// correctness, so the loader consumes it synchronously.
pub struct PlayableWords<R: BufRead> {
    lines: Lines<R>,
    opts: DictOptions,
}

impl<R: BufRead> PlayableWords<R> {
    /// Stream accepted words from `reader` under `opts`.
    pub fn new(reader: R, opts: DictOptions) -> Self {
        Self {
            lines: reader.lines(),
            opts,
        }
    }
}

impl<R: BufRead> Iterator for PlayableWords<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            match line {
                Ok(word) if self.opts.accepts(&word) => return Some(Ok(word)),
                Ok(_) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}

/// Immutable mapping from normalized word form to original display
/// spelling. Shared read-only by all games; membership of the normalized
/// form is the dictionary half of move validation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    /// Load and filter a word list from any buffered reader.
    pub fn load(reader: impl BufRead, opts: DictOptions) -> io::Result<Self> {
        let mut entries = BTreeMap::new();
        for word in PlayableWords::new(reader, opts) {
            let word = word?;
            entries.insert(normalize(&word), word);
        }
        info!(words = entries.len(), "dictionary loaded");
        Ok(Self { entries })
    }

    /// Load and filter a word-list file (one word per line).
    pub fn load_file(path: impl AsRef<Path>, opts: DictOptions) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::load(BufReader::new(file), opts)
    }

    /// Unfiltered fixture constructor: every word is accepted verbatim.
    pub fn from_words(words: &[&str]) -> Self {
        let entries = words
            .iter()
            .map(|w| (normalize(w), (*w).to_string()))
            .collect();
        Self { entries }
    }

    /// Is this normalized form a playable word?
    #[inline]
    pub fn contains(&self, norm: &str) -> bool {
        self.entries.contains_key(norm)
    }

    /// Original display spelling for a normalized form.
    pub fn display(&self, norm: &str) -> Option<&str> {
        self.entries.get(norm).map(String::as_str)
    }

    /// Iterate the normalized forms in sorted order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no words were loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
