use std::fmt;

use crate::analysis::{AnalysisResult, ScoreBand, Suggestion};

/// Render an analysis as a plain-text report
///
/// Layout: a stats block, the long sentence list, then every inline
/// highlight in position order with its suggestions.
#[must_use]
pub fn render(result: &AnalysisResult) -> String {
    Report(result).to_string()
}

/// [`fmt::Display`] adapter behind [`render`]
struct Report<'a>(&'a AnalysisResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(out, self.0)
    }
}

fn write_report(out: &mut fmt::Formatter<'_>, result: &AnalysisResult) -> fmt::Result {
    let band = ScoreBand::of(result.overall_score);
    writeln!(out, "Readability grade: {}", result.readability.grade)?;
    writeln!(out, "Reading ease:      {:.1}", result.readability.score)?;
    writeln!(out, "Complex words:     {}", result.complex_words.len())?;
    writeln!(out, "Long sentences:    {}", result.long_sentences.len())?;
    writeln!(out, "Passive voice:     {}", result.passive_voice.len())?;
    writeln!(
        out,
        "Overall score:     {}/100 ({})",
        result.overall_score,
        band.label()
    )?;

    if !result.long_sentences.is_empty() {
        writeln!(out)?;
        writeln!(out, "Long sentences:")?;
        for sentence in &result.long_sentences {
            writeln!(
                out,
                "  \"{}\" ({} words)",
                sentence.highlight.text, sentence.word_count
            )?;
        }
    }

    let mut highlights: Vec<_> = result.highlights().collect();
    if highlights.is_empty() {
        return Ok(());
    }
    highlights.sort_by_key(|h| h.position);

    writeln!(out)?;
    writeln!(out, "Highlights:")?;
    for highlight in highlights {
        writeln!(
            out,
            "  @{:<6} {:<8} {:?}",
            highlight.position, highlight.kind, highlight.text
        )?;
        for suggestion in Suggestion::for_highlight(highlight) {
            writeln!(out, "           - {} ({})", suggestion.suggestion, suggestion.reason)?;
        }
    }
    Ok(())
}
