//! Immutable startup configuration.
//!
//! The dictionary, sampler, and value tables are built once during process
//! initialization and passed by shared reference into the replay engine —
//! strictly read-only afterwards, so arbitrarily many concurrent games can
//! share them without locking.

use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::words::dict::{DictOptions, Dictionary};
use crate::words::sampler::{LetterSampler, SamplerError};
use crate::words::values::LetterValues;
use crate::DEFAULT_GAME_LEN;

/// Startup configuration errors. All fatal: a process that cannot build
/// its configuration must not serve games.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Word-list source could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),

    /// The filter accepted no words at all.
    #[error("word list produced an empty dictionary")]
    EmptyDictionary,

    /// Letter sampler could not be built.
    #[error("letter sampler misconfigured: {0}")]
    Sampler(#[from] SamplerError),
}

/// Everything a game needs besides its own identity.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Normalized word → display spelling.
    pub dictionary: Dictionary,
    /// Weighted letter source for tile draws.
    pub sampler: LetterSampler,
    /// Per-letter point values.
    pub values: LetterValues,
    /// Number of moves before a game is over.
    pub game_len: usize,
}

impl GameConfig {
    /// Build from an already-loaded dictionary, with default values and
    /// sampler weights inverted from the point values.
    pub fn with_dictionary(dictionary: Dictionary) -> Result<Self, ConfigError> {
        if dictionary.is_empty() {
            return Err(ConfigError::EmptyDictionary);
        }
        let values = LetterValues::default();
        let sampler = LetterSampler::from_weights(&values.inverted_weights())?;
        Ok(Self {
            dictionary,
            sampler,
            values,
            game_len: DEFAULT_GAME_LEN,
        })
    }

    /// Load the word list at `path` and build the full configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let dictionary = Dictionary::load_file(path, DictOptions::default())?;
        info!(path = %path.display(), words = dictionary.len(), "configuration loaded");
        Self::with_dictionary(dictionary)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_dictionary() {
        let config = GameConfig::with_dictionary(Dictionary::from_words(&["moon"])).unwrap();
        assert_eq!(config.game_len, DEFAULT_GAME_LEN);
        assert!(config.dictionary.contains("MOON"));
    }

    #[test]
    fn test_empty_dictionary_is_fatal() {
        assert!(matches!(
            GameConfig::with_dictionary(Dictionary::from_words(&[])),
            Err(ConfigError::EmptyDictionary)
        ));
    }

    #[test]
    fn test_missing_word_list_is_fatal() {
        assert!(matches!(
            GameConfig::load("/nonexistent/word/list"),
            Err(ConfigError::Io(_))
        ));
    }
}
