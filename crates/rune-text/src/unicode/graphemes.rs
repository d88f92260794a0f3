use core::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::layout::BreakKind;
use crate::unicode::line_class::LineBreakState;
use crate::unicode::width::cluster_width;

/// Resumable position of a cluster-by-cluster scan.
///
/// A cursor describes the cluster most recently returned by [`step`] and
/// carries the line-break automaton forward to the next call. It belongs to
/// a single scan: start every scan from [`StepCursor::START`] and feed each
/// returned cursor into the next `step` on the same string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepCursor {
    line: LineBreakState,
    width: u8,
    break_kind: BreakKind,
    gross_length: usize,
}

impl Default for StepCursor {
    fn default() -> Self {
        Self::START
    }
}

impl StepCursor {
    /// Cursor for the first call on a string.
    pub const START: Self = Self {
        line: LineBreakState::new(),
        width: 0,
        break_kind: BreakKind::NoBreak,
        gross_length: 0,
    };

    /// Width of the last cluster in terminal columns (0, 1 or 2).
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Break classification of the boundary after the last cluster.
    pub fn break_kind(&self) -> BreakKind {
        self.break_kind
    }

    /// Whether the text may be broken after the last cluster, and whether
    /// that break is optional.
    pub fn line_break(&self) -> (bool, bool) {
        match self.break_kind {
            BreakKind::NoBreak => (false, false),
            BreakKind::Optional => (true, true),
            BreakKind::Mandatory => (true, false),
        }
    }

    /// Length of the last cluster in bytes.
    pub fn gross_length(&self) -> usize {
        self.gross_length
    }
}

/// Split the next grapheme cluster off `text`.
///
/// Returns the cluster, the text after it and the cursor describing the
/// cluster. An empty `text` yields an empty cluster and the cursor unchanged.
///
/// The break classification looks at most one code point past the cluster;
/// consumed text is never scanned again. A break at the very end of the
/// text is reported only when the last cluster is a line terminator.
pub fn step(text: &str, cursor: StepCursor) -> (&str, &str, StepCursor) {
    step_before(text, cursor, None)
}

/// Like [`step`] for a `text` that is followed by `follower` in a larger
/// input, so the break after its last cluster is classified against it.
pub(crate) fn step_before(
    text: &str,
    cursor: StepCursor,
    follower: Option<char>,
) -> (&str, &str, StepCursor) {
    let Some(cluster) = text.graphemes(true).next() else {
        return ("", text, cursor);
    };
    let rest = &text[cluster.len()..];

    let mut line = cursor.line;
    for c in cluster.chars() {
        line.feed(c);
    }

    let break_kind = match rest.chars().next().or(follower) {
        Some(next) => line.peek(next),
        None if ends_with_line_terminator(cluster) => BreakKind::Mandatory,
        None => BreakKind::NoBreak,
    };

    let next = StepCursor {
        line,
        width: cluster_width(cluster) as u8,
        break_kind,
        gross_length: cluster.len(),
    };
    (cluster, rest, next)
}

/// Step over one byte that is not part of any valid UTF-8 sequence.
///
/// The byte forms a cluster of its own, one column wide, and breaks like
/// U+FFFD REPLACEMENT CHARACTER.
pub(crate) fn step_invalid(cursor: StepCursor, follower: Option<char>) -> StepCursor {
    let mut line = cursor.line;
    line.feed(char::REPLACEMENT_CHARACTER);
    StepCursor {
        line,
        width: 1,
        break_kind: follower.map_or(BreakKind::NoBreak, |next| line.peek(next)),
        gross_length: 1,
    }
}

/// `true` if the last code point has line-break class BK, CR, LF or NL.
fn ends_with_line_terminator(cluster: &str) -> bool {
    matches!(
        cluster.chars().next_back(),
        Some('\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}')
    )
}

/// A Unicode extended grapheme cluster within a UTF-8 string.
///
/// The range is expressed in byte offsets into the original string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphemeCluster<'a> {
    pub text: &'a str,
    pub range: Range<usize>,
    /// Terminal columns.
    pub width: usize,
    /// Break classification of the boundary after this cluster.
    pub break_kind: BreakKind,
}

/// Iterator over the clusters of a string, built on [`step`].
#[derive(Debug, Clone)]
pub struct GraphemeClusters<'a> {
    rest: &'a str,
    offset: usize,
    cursor: StepCursor,
}

impl<'a> Iterator for GraphemeClusters<'a> {
    type Item = GraphemeCluster<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let (cluster, rest, cursor) = step(self.rest, self.cursor);
        let start = self.offset;
        self.rest = rest;
        self.cursor = cursor;
        self.offset += cluster.len();
        Some(GraphemeCluster {
            text: cluster,
            range: start..self.offset,
            width: cursor.width(),
            break_kind: cursor.break_kind(),
        })
    }
}

/// Compute all grapheme clusters for the given text in scan order.
pub fn grapheme_clusters(text: &str) -> GraphemeClusters<'_> {
    GraphemeClusters {
        rest: text,
        offset: 0,
        cursor: StepCursor::START,
    }
}
