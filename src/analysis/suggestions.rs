use super::types::{HighlightKind, Suggestion, TextHighlight};

impl Suggestion {
    /// Rewrite proposals for a highlight
    ///
    /// Complex words and passive voice get one proposal each; other kinds
    /// have no canned advice and yield none.
    #[must_use]
    pub fn for_highlight(highlight: &TextHighlight) -> Vec<Self> {
        let (suggestion, reason) = match highlight.kind {
            HighlightKind::Complex => (
                format!("Use a simpler word than \"{}\"", highlight.text),
                "Complex words can make your writing harder to read",
            ),
            HighlightKind::Passive => (
                format!("Rewrite in active voice: \"{}\"", highlight.text),
                "Active voice is more direct and engaging",
            ),
            HighlightKind::LongSentence | HighlightKind::Adverb => return Vec::new(),
        };

        vec![Self {
            kind: highlight.kind.as_str().to_owned(),
            original: highlight.text.clone(),
            suggestion,
            reason: reason.to_owned(),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlight(kind: HighlightKind, text: &str) -> TextHighlight {
        TextHighlight {
            text: text.to_owned(),
            position: 0,
            kind,
            suggestion: None,
        }
    }

    #[test]
    fn test_complex_suggestion() {
        let suggestions = Suggestion::for_highlight(&highlight(HighlightKind::Complex, "utilize"));
        assert_eq!(
            suggestions,
            vec![Suggestion {
                kind: "complex".to_owned(),
                original: "utilize".to_owned(),
                suggestion: "Use a simpler word than \"utilize\"".to_owned(),
                reason: "Complex words can make your writing harder to read".to_owned(),
            }]
        );
    }

    #[test]
    fn test_passive_suggestion() {
        let suggestions =
            Suggestion::for_highlight(&highlight(HighlightKind::Passive, "was thrown"));
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, "passive");
        assert_eq!(
            suggestions[0].suggestion,
            "Rewrite in active voice: \"was thrown\""
        );
        assert_eq!(suggestions[0].reason, "Active voice is more direct and engaging");
    }

    #[test]
    fn test_other_kinds_have_none() {
        assert!(Suggestion::for_highlight(&highlight(HighlightKind::LongSentence, "x")).is_empty());
        assert!(Suggestion::for_highlight(&highlight(HighlightKind::Adverb, "very")).is_empty());
    }
}
