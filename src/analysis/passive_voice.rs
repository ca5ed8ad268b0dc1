use regex::Regex;
use std::sync::LazyLock;

use super::types::{HighlightKind, PassiveVoice, TextHighlight};

const PASSIVE_SUGGESTION: &str = "Consider using active voice instead of passive";

/// Irregular past participles that do not end in `ed`, `en` or `t`
const IRREGULAR_PARTICIPLES: &str = "thrown|known|shown|grown|drawn|blown|flown|sewn|done|gone|\
                                     made|paid|said|laid|held|told|sold|found|bound|won|hung|sung|\
                                     begun|run|heard|fed|led|read|shed";

/// Tail shared by both patterns: a word/space run ending in a participle
///
/// The run has no upper bound, so a match extends to the last participle,
/// regular or irregular, before punctuation stops it.
fn participle_tail() -> String {
    format!(r"[\w\s]*(?:\w(?:ed|en|t)|\b(?:{IRREGULAR_PARTICIPLES}))\b")
}

/// Passive patterns in reporting order: be-verb auxiliaries, then get-passives
#[allow(clippy::unwrap_used)] // Literal patterns, exercised by tests
static PASSIVE_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    let tail = participle_tail();
    [
        Regex::new(&format!(
            r"(?i)\b(?:am|is|are|was|were|be|being|been)\s+{tail}"
        ))
        .unwrap(),
        Regex::new(&format!(r"(?i)\b(?:get|got|gets)\s+{tail}")).unwrap(),
    ]
});

/// Find passive constructions in `text`
///
/// Every non-overlapping match of the be-verb pattern is reported first, in
/// scan order, followed by every match of the get-passive pattern. Matching
/// is case-insensitive and greedy, so results may overlap across patterns.
#[must_use]
pub fn find_passive_voice(text: &str) -> Vec<PassiveVoice> {
    PASSIVE_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.find_iter(text))
        .map(|m| PassiveVoice {
            highlight: TextHighlight {
                text: m.as_str().to_owned(),
                position: m.start(),
                kind: HighlightKind::Passive,
                suggestion: Some(PASSIVE_SUGGESTION.to_owned()),
            },
        })
        .collect()
}
