//! Word normalization and the playable-word filter.
//!
//! Grid tiles are single letters, so the digraph "QU" is compressed to a
//! lone "Q" everywhere the engine compares letters; a "Q" tile implicitly
//! means "QU" when redisplayed.

/// Normalized form: uppercase with every "QU" compressed to "Q".
///
/// Idempotent: normalizing a normalized word is a no-op.
pub fn normalize(word: &str) -> String {
    word.to_uppercase().replace("QU", "Q")
}

/// Inverse of [`normalize`] for display: restores "QU" wherever a "Q"
/// appears.
///
/// ```
/// use lexgrid::words::normalize::denormalize;
/// assert_eq!(denormalize("QARTER"), "QUARTER");
/// ```
pub fn denormalize(word: &str) -> String {
    normalize(word).replace('Q', "QU")
}

/// True iff `word` is made of 3 or more units, each a single letter in
/// a-p or r-z, or the digraph "qu", case-insensitive.
///
/// A lone "q" (not followed by "u") disqualifies the word, as does any
/// non-ASCII or non-letter character.
pub fn is_playable(word: &str) -> bool {
    let mut units = 0usize;
    let mut chars = word.chars();
    while let Some(c) = chars.next() {
        let lower = c.to_ascii_lowercase();
        match lower {
            'q' => {
                if chars.next().map(|u| u.to_ascii_lowercase()) != Some('u') {
                    return false;
                }
                units += 1;
            }
            'a'..='p' | 'r'..='z' => units += 1,
            _ => return false,
        }
    }
    units >= 3
}

// =============================================================================
// TESTS
// =============================================================================
