use crate::analysis::{HighlightKind, TextHighlight};

/// A run of the source text, either plain or covered by one highlight
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any highlight
    Plain(&'a str),
    /// Text covered by a highlight
    Highlighted {
        /// Covered slice of the source text
        text: &'a str,
        /// The highlight that produced this segment
        highlight: &'a TextHighlight,
    },
}

impl<'a> Segment<'a> {
    /// Source text of the segment
    #[must_use]
    pub const fn text(&self) -> &'a str {
        match self {
            Self::Plain(text) | Self::Highlighted { text, .. } => text,
        }
    }

    /// Kind of the covering highlight, if any
    #[must_use]
    pub const fn kind(&self) -> Option<HighlightKind> {
        match self {
            Self::Plain(_) => None,
            Self::Highlighted { highlight, .. } => Some(highlight.kind),
        }
    }
}

/// Split `text` into plain and highlighted segments
///
/// Highlights are applied in position order. A highlight that starts inside
/// an earlier one, runs past the end of `text`, or does not sit on char
/// boundaries is dropped. Concatenating the segment texts yields `text`.
pub fn segments<'a, I>(text: &'a str, highlights: I) -> Vec<Segment<'a>>
where
    I: IntoIterator<Item = &'a TextHighlight>,
{
    let mut ordered: Vec<&TextHighlight> = highlights.into_iter().collect();
    ordered.sort_by_key(|h| h.position);

    let mut out = Vec::with_capacity(ordered.len() * 2 + 1);
    let mut cursor = 0;

    for highlight in ordered {
        let start = highlight.position;
        if start < cursor {
            tracing::trace!(position = start, "overlapping highlight dropped");
            continue;
        }
        let Some(end) = start.checked_add(highlight.text.len()) else {
            tracing::trace!(position = start, "highlight outside text dropped");
            continue;
        };
        let (Some(before), Some(covered)) = (text.get(cursor..start), text.get(start..end)) else {
            tracing::trace!(position = start, "highlight outside text dropped");
            continue;
        };
        if !before.is_empty() {
            out.push(Segment::Plain(before));
        }
        out.push(Segment::Highlighted {
            text: covered,
            highlight,
        });
        cursor = end;
    }

    if cursor < text.len() {
        out.push(Segment::Plain(&text[cursor..]));
    }
    out
}
