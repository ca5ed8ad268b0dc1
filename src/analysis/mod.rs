/// Orchestration, overall scoring and memoization
pub mod analyzer;
/// Complex word finder
pub mod complex_words;
/// Long sentence finder
pub mod long_sentences;
/// Passive voice finder
pub mod passive_voice;
/// Flesch readability metrics
pub mod readability;
/// Syllable estimation
pub mod syllables;
/// Rewrite suggestions derived from highlights
pub mod suggestions;
/// Result and highlight value types
pub mod types;

pub use analyzer::{
    analyze_text, overall_score, AnalysisPasses, Analyzer, HeuristicPasses, MemoizedAnalyzer,
    ScoreBand,
};
pub use complex_words::{find_complex_words, DEFAULT_SYLLABLE_THRESHOLD};
pub use long_sentences::{find_long_sentences, DEFAULT_WORD_THRESHOLD};
pub use passive_voice::find_passive_voice;
pub use readability::analyze_readability;
pub use syllables::count_syllables;
pub use types::{
    AnalysisResult, ComplexWord, HighlightKind, LongSentence, PassiveVoice, ReadabilityScore,
    Suggestion, TextHighlight,
};
