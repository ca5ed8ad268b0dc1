use regex::Regex;
use std::sync::LazyLock;

/// Ordered rewrite rules: pattern and replacement
#[allow(clippy::unwrap_used)] // Literal patterns, exercised by tests
static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // Fenced and inline code
        (r"(?s)```.*?```", ""),
        (r"`[^`]*`", ""),
        // Heading markers
        (r"#{1,6}\s", ""),
        // Horizontal rules, before emphasis so `***` is not read as markers
        (r"(?m)^[ \t]*(?:[-*_][ \t]*){3,}$", ""),
        // Emphasis, keeping the inner text
        (r"\*\*(.*?)\*\*", "$1"),
        (r"__(.*?)__", "$1"),
        (r"\*(.*?)\*", "$1"),
        (r"_(.*?)_", "$1"),
        // Images and links, keeping the label
        (r"!\[(.*?)\]\(.*?\)", "$1"),
        (r"\[(.*?)\]\(.*?\)", "$1"),
        // Blockquote markers
        (r"(?m)^[ \t]*>[ \t]?", ""),
        // Collapse blank-line runs
        (r"\n\s*\n", "\n\n"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// Reduce markdown to the prose the analyzer should see
///
/// Plain-text heuristics only: code is removed, markup characters are
/// stripped and link/image labels are kept. Nested or malformed markup is
/// not handled.
#[must_use]
pub fn to_plain_text(markdown: &str) -> String {
    let stripped = RULES
        .iter()
        .fold(markdown.to_owned(), |text, (pattern, replacement)| {
            pattern.replace_all(&text, *replacement).into_owned()
        });
    stripped.trim().to_owned()
}
