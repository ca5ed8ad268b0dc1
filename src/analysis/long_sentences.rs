use super::readability::sentence_fragments;
use super::types::{HighlightKind, LongSentence, TextHighlight};

/// Default word count above which a sentence is long
pub const DEFAULT_WORD_THRESHOLD: usize = 20;

/// Characters of the sentence kept in the highlight text
const PREVIEW_CHARS: usize = 100;

/// Find sentences with more than `threshold` words
///
/// `position` comes from a running cursor that advances by each fragment's
/// length plus one per terminator run. It is exact for single terminators and
/// drifts backwards when a run holds several (`"?!"`, `"..."`). It points at
/// the raw fragment start, before any leading whitespace.
#[must_use]
pub fn find_long_sentences(text: &str, threshold: usize) -> Vec<LongSentence> {
    let mut long_sentences = Vec::new();
    let mut cursor = 0;

    for fragment in sentence_fragments(text) {
        let sentence = fragment.trim();
        if !sentence.is_empty() {
            let word_count = sentence.split_whitespace().count();
            if word_count > threshold {
                long_sentences.push(LongSentence {
                    highlight: TextHighlight {
                        text: preview(sentence),
                        position: cursor.min(text.len()),
                        kind: HighlightKind::LongSentence,
                        suggestion: Some(format!(
                            "Break this {word_count}-word sentence into shorter sentences"
                        )),
                    },
                    sentence: sentence.to_owned(),
                    word_count,
                });
            }
        }
        cursor += fragment.len() + 1;
    }

    long_sentences
}

fn preview(sentence: &str) -> String {
    match sentence.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &sentence[..cut]),
        None => sentence.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_finds_long_sentence() {
        let text = format!("{}.", words(25));
        let found = find_long_sentences(&text, DEFAULT_WORD_THRESHOLD);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].word_count, 25);
        assert_eq!(found[0].highlight.position, 0);
        assert_eq!(found[0].highlight.kind, HighlightKind::LongSentence);
        assert_eq!(
            found[0].highlight.suggestion.as_deref(),
            Some("Break this 25-word sentence into shorter sentences")
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let text = format!("{}.", words(20));
        assert!(find_long_sentences(&text, 20).is_empty());
        assert_eq!(find_long_sentences(&text, 19).len(), 1);
    }

    #[test]
    fn test_short_text_has_none() {
        assert!(find_long_sentences("Cat sat. Dog ran!", 20).is_empty());
        assert!(find_long_sentences("", 20).is_empty());
    }

    #[test]
    fn test_cursor_tracks_single_terminators() {
        let long = words(21);
        let text = format!("Short one. {long}. Tail");
        let found = find_long_sentences(&text, 20);
        assert_eq!(found.len(), 1);
        // cursor lands on the space after "Short one."
        assert_eq!(found[0].highlight.position, 10);
        assert_eq!(found[0].sentence, long);
        assert_eq!(&text[11..11 + long.len()], long);
    }

    #[test]
    fn test_cursor_drifts_on_terminator_runs() {
        let long = words(21);
        let text = format!("Wait?! {long}.");
        let found = find_long_sentences(&text, 20);
        // "Wait" (4) + 1, while the real fragment starts at 6
        assert_eq!(found[0].highlight.position, 5);
    }

    #[test]
    fn test_preview_truncates_at_100_chars() {
        let long = words(60);
        let found = find_long_sentences(&long, 20);
        let text = &found[0].highlight.text;
        assert!(text.ends_with("..."));
        assert_eq!(text.chars().count(), 103);
        assert_eq!(found[0].sentence, long);
    }

    #[test]
    fn test_preview_keeps_short_sentence() {
        assert_eq!(preview("short"), "short");
        let exact = "x".repeat(100);
        assert_eq!(preview(&exact), exact);
    }
}
