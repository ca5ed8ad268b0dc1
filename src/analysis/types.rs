use serde::Serialize;

/// Readability metrics for a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReadabilityScore {
    /// Flesch-Kincaid grade level, rounded and clamped at 0
    pub grade: u32,
    /// Flesch Reading Ease (unclamped, higher = easier)
    pub score: f64,
}

impl ReadabilityScore {
    /// Score reported for text without sentences or words
    pub const ZERO: Self = Self {
        grade: 0,
        score: 0.0,
    };
}

/// Kind of stylistic issue a highlight marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightKind {
    /// Word with too many syllables
    Complex,
    /// Passive construction
    Passive,
    /// Sentence with too many words
    LongSentence,
    /// Adverb (reserved, no finder produces it yet)
    Adverb,
}

impl HighlightKind {
    /// Wire name of the kind (`complex`, `passive`, `long-sentence`, `adverb`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complex => "complex",
            Self::Passive => "passive",
            Self::LongSentence => "long-sentence",
            Self::Adverb => "adverb",
        }
    }
}

impl std::fmt::Display for HighlightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A span of the analyzed text flagged by one of the finders
///
/// `position` is a byte offset into the exact string that was analyzed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextHighlight {
    /// Flagged text
    pub text: String,
    /// Byte offset of `text` within the analyzed input
    pub position: usize,
    /// Issue kind
    #[serde(rename = "type")]
    pub kind: HighlightKind,
    /// Human-readable hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Word whose syllable count reached the complexity threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexWord {
    /// Base highlight (`kind` is always [`HighlightKind::Complex`])
    #[serde(flatten)]
    pub highlight: TextHighlight,
    /// Token with non-word characters stripped
    pub word: String,
    /// Estimated syllables of `word`
    pub syllable_count: usize,
    /// Index of the token in the whitespace-split sequence
    pub index: usize,
}

/// Sentence whose word count exceeded the long-sentence threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LongSentence {
    /// Base highlight (`kind` is always [`HighlightKind::LongSentence`])
    #[serde(flatten)]
    pub highlight: TextHighlight,
    /// Full trimmed sentence
    pub sentence: String,
    /// Number of whitespace-separated words in `sentence`
    pub word_count: usize,
}

/// Passive construction match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassiveVoice {
    /// Base highlight (`kind` is always [`HighlightKind::Passive`])
    #[serde(flatten)]
    pub highlight: TextHighlight,
}

/// Everything the analyzer found in one piece of text
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Readability metrics
    pub readability: ReadabilityScore,
    /// Complex words in token order
    pub complex_words: Vec<ComplexWord>,
    /// Long sentences in text order
    pub long_sentences: Vec<LongSentence>,
    /// Passive constructions, grouped by pattern
    pub passive_voice: Vec<PassiveVoice>,
    /// Aggregate quality score in `0..=100`
    pub overall_score: u32,
}

impl AnalysisResult {
    /// Result for empty or whitespace-only text
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            readability: ReadabilityScore::ZERO,
            complex_words: Vec::new(),
            long_sentences: Vec::new(),
            passive_voice: Vec::new(),
            overall_score: 100,
        }
    }

    /// Inline highlights to overlay on the text (complex words, then passive voice)
    ///
    /// Long sentences are listed separately and are not part of the overlay.
    pub fn highlights(&self) -> impl Iterator<Item = &TextHighlight> {
        self.complex_words
            .iter()
            .map(|w| &w.highlight)
            .chain(self.passive_voice.iter().map(|p| &p.highlight))
    }
}

/// A rewrite proposal derived from a single highlight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Highlight kind name
    #[serde(rename = "type")]
    pub kind: String,
    /// Flagged text
    pub original: String,
    /// Proposed action
    pub suggestion: String,
    /// Why the action helps
    pub reason: String,
}
