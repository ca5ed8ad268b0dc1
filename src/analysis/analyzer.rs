use tracing::{debug, trace};

use super::complex_words::{find_complex_words, DEFAULT_SYLLABLE_THRESHOLD};
use super::long_sentences::{find_long_sentences, DEFAULT_WORD_THRESHOLD};
use super::passive_voice::find_passive_voice;
use super::readability::analyze_readability;
use super::types::{AnalysisResult, ComplexWord, LongSentence, PassiveVoice, ReadabilityScore};
use crate::config::AnalysisConfig;

/// Individual analysis passes the [`Analyzer`] composes
///
/// Production code uses [`HeuristicPasses`]. The trait exists so tests can
/// observe which passes run (via `MockAnalysisPasses`).
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisPasses: Send + Sync {
    /// Readability metrics for the whole text
    fn readability(&self, text: &str) -> ReadabilityScore;
    /// Words with at least `threshold` syllables
    fn complex_words(&self, text: &str, threshold: usize) -> Vec<ComplexWord>;
    /// Sentences with more than `threshold` words
    fn long_sentences(&self, text: &str, threshold: usize) -> Vec<LongSentence>;
    /// Passive constructions
    fn passive_voice(&self, text: &str) -> Vec<PassiveVoice>;
}

/// Heuristic passes backed by the free functions of this module
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPasses;

impl AnalysisPasses for HeuristicPasses {
    fn readability(&self, text: &str) -> ReadabilityScore {
        analyze_readability(text)
    }

    fn complex_words(&self, text: &str, threshold: usize) -> Vec<ComplexWord> {
        find_complex_words(text, threshold)
    }

    fn long_sentences(&self, text: &str, threshold: usize) -> Vec<LongSentence> {
        find_long_sentences(text, threshold)
    }

    fn passive_voice(&self, text: &str) -> Vec<PassiveVoice> {
        find_passive_voice(text)
    }
}

/// Composes the analysis passes into one [`AnalysisResult`]
///
/// Stateless apart from its thresholds: the same input always yields an
/// equal result, and `&self` calls may run concurrently.
#[derive(Debug, Clone)]
pub struct Analyzer<P = HeuristicPasses> {
    passes: P,
    complex_word_syllables: usize,
    long_sentence_words: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::with_passes(HeuristicPasses)
    }
}

impl Analyzer {
    /// Analyzer with thresholds taken from configuration
    #[must_use]
    pub const fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            passes: HeuristicPasses,
            complex_word_syllables: config.complex_word_syllables,
            long_sentence_words: config.long_sentence_words,
        }
    }
}

impl<P: AnalysisPasses> Analyzer<P> {
    /// Analyzer over custom passes with default thresholds
    pub const fn with_passes(passes: P) -> Self {
        Self {
            passes,
            complex_word_syllables: DEFAULT_SYLLABLE_THRESHOLD,
            long_sentence_words: DEFAULT_WORD_THRESHOLD,
        }
    }

    /// Override the syllable count at which a word is complex
    #[must_use]
    pub const fn complex_word_syllables(mut self, threshold: usize) -> Self {
        self.complex_word_syllables = threshold;
        self
    }

    /// Override the word count above which a sentence is long
    #[must_use]
    pub const fn long_sentence_words(mut self, threshold: usize) -> Self {
        self.long_sentence_words = threshold;
        self
    }

    /// Run every pass over `text` and score the result
    ///
    /// Empty or whitespace-only text short-circuits to
    /// [`AnalysisResult::empty`] without running any pass.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        if text.trim().is_empty() {
            trace!("empty text, skipping analysis");
            return AnalysisResult::empty();
        }

        let readability = self.passes.readability(text);
        let complex_words = self.passes.complex_words(text, self.complex_word_syllables);
        let long_sentences = self.passes.long_sentences(text, self.long_sentence_words);
        let passive_voice = self.passes.passive_voice(text);

        let overall_score = overall_score(
            readability.grade,
            complex_words.len(),
            long_sentences.len(),
            passive_voice.len(),
        );

        debug!(
            bytes = text.len(),
            grade = readability.grade,
            complex = complex_words.len(),
            long = long_sentences.len(),
            passive = passive_voice.len(),
            overall_score,
            "text analyzed"
        );

        AnalysisResult {
            readability,
            complex_words,
            long_sentences,
            passive_voice,
            overall_score,
        }
    }
}

/// Analyze `text` with default thresholds (3 syllables, 20 words)
#[must_use]
pub fn analyze_text(text: &str) -> AnalysisResult {
    Analyzer::default().analyze(text)
}

/// Aggregate score: 100 minus capped penalties, floored at 0
#[must_use]
pub fn overall_score(grade: u32, complex: usize, long: usize, passive: usize) -> u32 {
    let grade_penalty = match grade {
        g if g > 12 => 20,
        g if g > 10 => 10,
        _ => 0,
    };
    let penalty = grade_penalty
        + capped(complex, 2, 20)
        + capped(long, 3, 15)
        + capped(passive, 2, 10);
    100_u32.saturating_sub(penalty)
}

fn capped(count: usize, weight: u32, cap: u32) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(weight)
        .min(cap)
}

/// Coarse rating of an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 80 and above
    Good,
    /// 60 to 79
    Fair,
    /// Below 60
    Poor,
}

impl ScoreBand {
    /// Classify an overall score
    #[must_use]
    pub const fn of(score: u32) -> Self {
        if score >= 80 {
            Self::Good
        } else if score >= 60 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Lower-case label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

/// Re-analyzes only when the text differs from the previous call
///
/// Meant for hosts that re-run analysis on every edit.
#[derive(Debug)]
pub struct MemoizedAnalyzer<P = HeuristicPasses> {
    analyzer: Analyzer<P>,
    last: Option<(String, AnalysisResult)>,
}

impl<P: AnalysisPasses> MemoizedAnalyzer<P> {
    /// Wrap an analyzer with a single-entry cache
    pub const fn new(analyzer: Analyzer<P>) -> Self {
        Self {
            analyzer,
            last: None,
        }
    }

    /// Analysis of `text`, reusing the previous result when the text is unchanged
    pub fn analyze(&mut self, text: &str) -> &AnalysisResult {
        if self.is_cached(text) {
            trace!("text unchanged, reusing analysis");
        } else {
            self.last = None;
        }
        let analyzer = &self.analyzer;
        let (_, result) = self
            .last
            .get_or_insert_with(|| (text.to_owned(), analyzer.analyze(text)));
        result
    }

    /// Whether `text` would be served from the cache
    #[must_use]
    pub fn is_cached(&self, text: &str) -> bool {
        self.last.as_ref().is_some_and(|(cached, _)| cached == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_short_circuits() {
        let mut passes = MockAnalysisPasses::new();
        passes.expect_readability().times(0);
        passes.expect_complex_words().times(0);
        passes.expect_long_sentences().times(0);
        passes.expect_passive_voice().times(0);

        let analyzer = Analyzer::with_passes(passes);
        assert_eq!(analyzer.analyze(""), AnalysisResult::empty());
        assert_eq!(analyzer.analyze("  \n\t"), AnalysisResult::empty());
    }

    #[test]
    fn test_non_empty_text_runs_every_pass_once() {
        let mut passes = MockAnalysisPasses::new();
        passes
            .expect_readability()
            .times(1)
            .returning(|_| ReadabilityScore { grade: 11, score: 40.0 });
        passes
            .expect_complex_words()
            .withf(|_, threshold| *threshold == 4)
            .times(1)
            .returning(|_, _| Vec::new());
        passes
            .expect_long_sentences()
            .withf(|_, threshold| *threshold == 15)
            .times(1)
            .returning(|_, _| Vec::new());
        passes
            .expect_passive_voice()
            .times(1)
            .returning(|_| Vec::new());

        let analyzer = Analyzer::with_passes(passes)
            .complex_word_syllables(4)
            .long_sentence_words(15);
        let result = analyzer.analyze("Some text.");
        assert_eq!(result.overall_score, 90);
    }

    #[test]
    fn test_simple_sentence_scores_100() {
        let result = analyze_text("Cat sat.");
        assert!(result.complex_words.is_empty());
        assert!(result.long_sentences.is_empty());
        assert!(result.passive_voice.is_empty());
        assert_eq!(result.readability.grade, 0);
        assert_eq!(result.overall_score, 100);
    }

    #[test]
    fn test_deterministic() {
        let text = "The report was finished by the committee. Extraordinarily \
                    sophisticated methodology was employed.";
        assert_eq!(analyze_text(text), analyze_text(text));
    }

    #[test]
    fn test_overall_score_penalties() {
        assert_eq!(overall_score(0, 0, 0, 0), 100);
        assert_eq!(overall_score(11, 0, 0, 0), 90);
        assert_eq!(overall_score(13, 0, 0, 0), 80);
        assert_eq!(overall_score(0, 3, 2, 1), 100 - 6 - 6 - 2);
    }

    #[test]
    fn test_overall_score_caps() {
        assert_eq!(overall_score(13, 100, 100, 100), 100 - 20 - 20 - 15 - 10);
        assert_eq!(overall_score(u32::MAX, usize::MAX, usize::MAX, usize::MAX), 35);
    }

    #[test]
    fn test_score_band() {
        assert_eq!(ScoreBand::of(100), ScoreBand::Good);
        assert_eq!(ScoreBand::of(80), ScoreBand::Good);
        assert_eq!(ScoreBand::of(79), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(60), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(59), ScoreBand::Poor);
        assert_eq!(ScoreBand::of(0).label(), "poor");
    }

    #[test]
    fn test_from_config_thresholds() {
        let config = AnalysisConfig {
            complex_word_syllables: 2,
            long_sentence_words: 3,
        };
        let result = Analyzer::from_config(&config).analyze("Water flows down the hill slowly.");
        assert_eq!(result.complex_words.len(), 2);
        assert_eq!(result.long_sentences.len(), 1);
    }

    #[test]
    fn test_memoized_reuses_result() {
        let mut passes = MockAnalysisPasses::new();
        passes
            .expect_readability()
            .times(2)
            .returning(|_| ReadabilityScore::ZERO);
        passes
            .expect_complex_words()
            .times(2)
            .returning(|_, _| Vec::new());
        passes
            .expect_long_sentences()
            .times(2)
            .returning(|_, _| Vec::new());
        passes
            .expect_passive_voice()
            .times(2)
            .returning(|_| Vec::new());

        let mut memo = MemoizedAnalyzer::new(Analyzer::with_passes(passes));
        assert!(!memo.is_cached("one."));
        memo.analyze("one.");
        memo.analyze("one.");
        assert!(memo.is_cached("one."));
        memo.analyze("two.");
        memo.analyze("two.");
        assert!(!memo.is_cached("one."));
    }
}
