use regex::Regex;
use std::sync::LazyLock;

use super::syllables::count_syllables;
use super::types::{ComplexWord, HighlightKind, TextHighlight};

/// Default syllable count at which a word counts as complex
pub const DEFAULT_SYLLABLE_THRESHOLD: usize = 3;

#[allow(clippy::unwrap_used)] // Literal patterns, exercised by tests
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").unwrap()
});

/// Split on whitespace runs, yielding `(byte offset, token)` pairs
///
/// Mirrors a plain regex split: leading or trailing whitespace yields an
/// empty token, so token indices stay aligned with that split.
fn tokens_with_offsets(text: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for gap in WHITESPACE.find_iter(text) {
        tokens.push((start, &text[start..gap.start()]));
        start = gap.end();
    }
    tokens.push((start, &text[start..]));
    tokens
}

/// Strip everything except ASCII letters, digits and `_`
fn clean_word(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Find words with at least `threshold` syllables
///
/// `text` of each hit is the original token (punctuation included) and
/// `position` is the byte offset of that particular occurrence, so repeated
/// tokens get distinct positions.
#[must_use]
pub fn find_complex_words(text: &str, threshold: usize) -> Vec<ComplexWord> {
    tokens_with_offsets(text)
        .into_iter()
        .enumerate()
        .filter_map(|(index, (position, token))| {
            let word = clean_word(token);
            if word.is_empty() {
                return None;
            }
            let syllable_count = count_syllables(&word);
            if syllable_count < threshold {
                return None;
            }
            Some(ComplexWord {
                highlight: TextHighlight {
                    text: token.to_owned(),
                    position,
                    kind: HighlightKind::Complex,
                    suggestion: Some(format!(
                        "Consider using a simpler word instead of \"{word}\""
                    )),
                },
                word,
                syllable_count,
                index,
            })
        })
        .collect()
}
