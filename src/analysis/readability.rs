use regex::Regex;
use std::sync::LazyLock;

use super::syllables::count_syllables;
use super::types::ReadabilityScore;

/// Runs of sentence terminators
#[allow(clippy::unwrap_used)] // Literal patterns, exercised by tests
static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.!?]+").unwrap()
});

/// Split text into raw sentence fragments, keeping empty ones
///
/// Fragments are returned untrimmed and in order so callers can track offsets.
pub(crate) fn sentence_fragments(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE_BREAK.split(text)
}

/// Compute Flesch Reading Ease and Flesch-Kincaid grade for `text`
///
/// Sentences are split on runs of `.`, `!` and `?`; words on whitespace.
/// Syllables are counted on raw tokens, punctuation included.
/// Returns [`ReadabilityScore::ZERO`] when there are no sentences or no words.
#[must_use]
pub fn analyze_readability(text: &str) -> ReadabilityScore {
    let sentence_count = sentence_fragments(text)
        .filter(|s| !s.trim().is_empty())
        .count();
    let words: Vec<&str> = text.split_whitespace().collect();

    if sentence_count == 0 || words.is_empty() {
        return ReadabilityScore::ZERO;
    }

    #[allow(clippy::cast_precision_loss)]
    let (avg_words_per_sentence, avg_syllables_per_word) = {
        let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
        (
            words.len() as f64 / sentence_count as f64,
            syllables as f64 / words.len() as f64,
        )
    };

    let score = 1.015_f64.mul_add(
        -avg_words_per_sentence,
        84.6_f64.mul_add(-avg_syllables_per_word, 206.835),
    );
    let raw_grade = 0.39_f64.mul_add(
        avg_words_per_sentence,
        11.8_f64.mul_add(avg_syllables_per_word, -15.59),
    );

    ReadabilityScore {
        grade: round_grade(raw_grade),
        score,
    }
}

/// Round half up, then clamp negatives to zero
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_grade(raw: f64) -> u32 {
    let rounded = (raw + 0.5).floor();
    if rounded <= 0.0 {
        0
    } else {
        rounded.min(f64::from(u32::MAX)) as u32
    }
}
