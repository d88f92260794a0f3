//! Styled text runs and wrapping them into rows of styled segments.

use crate::layout::{measure::string_width, word_wrap::wrap_lines};

/// A styled piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a, S> {
    pub text: &'a str,
    pub style: S,
}

impl<'a, S> Segment<'a, S> {
    pub fn new(text: &'a str, style: S) -> Self {
        Self { text, style }
    }
}

/// One visual row: contiguous segments in left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a, S> {
    pub segments: Vec<Segment<'a, S>>,
}

impl<S> Default for Line<'_, S> {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
        }
    }
}

impl<S> Line<'_, S> {
    /// Plain text of the row.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text).collect()
    }

    /// Display width of the row in columns.
    pub fn width(&self) -> usize {
        string_width(&self.text())
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Wrap a sequence of styled runs as one text and slice every wrapped line
/// back into segments carrying the styles of the runs they came from.
///
/// Runs are joined without separators, so a break opportunity that spans
/// two runs is found as if the text were unstyled. Empty slices are dropped.
pub fn wrap_segments<'a, S: Clone>(
    segments: &[Segment<'a, S>],
    width: usize,
) -> Vec<Line<'a, S>> {
    let mut joined = String::with_capacity(segments.iter().map(|s| s.text.len()).sum());
    let mut starts = Vec::with_capacity(segments.len());
    for segment in segments {
        starts.push(joined.len());
        joined.push_str(segment.text);
    }

    // Lines come back in order, so the first run that can still overlap a
    // line only moves forward.
    let mut first = 0;
    wrap_lines(&joined, width)
        .into_iter()
        .map(|line| {
            let range = line.text_range;
            let mut row = Line::default();
            for (index, segment) in segments.iter().enumerate().skip(first) {
                let seg_start = starts[index];
                let seg_end = seg_start + segment.text.len();
                if seg_start >= range.end {
                    break;
                }
                if seg_end <= range.start {
                    first = index + 1;
                    continue;
                }
                let lo = range.start.max(seg_start) - seg_start;
                let hi = range.end.min(seg_end) - seg_start;
                if lo < hi {
                    let text: &'a str = segment.text;
                    row.segments.push(Segment::new(&text[lo..hi], segment.style.clone()));
                }
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Style {
        Plain,
        Bold,
    }

    fn texts<'a>(line: &Line<'a, Style>) -> Vec<(&'a str, Style)> {
        line.segments.iter().map(|s| (s.text, s.style)).collect()
    }

    #[test]
    fn styles_follow_their_text_across_lines() {
        let runs = [
            Segment::new("The ", Style::Plain),
            Segment::new("quick brown", Style::Bold),
            Segment::new(" fox", Style::Plain),
        ];
        let lines = wrap_segments(&runs, 10);
        assert_eq!(lines.len(), 2);
        assert_eq!(
            texts(&lines[0]),
            vec![("The ", Style::Plain), ("quick ", Style::Bold)]
        );
        assert_eq!(
            texts(&lines[1]),
            vec![("brown", Style::Bold), (" fox", Style::Plain)]
        );
    }

    #[test]
    fn empty_input_gives_one_empty_row() {
        let runs: [Segment<'_, Style>; 0] = [];
        let lines = wrap_segments(&runs, 4);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
    }

    #[test]
    fn newline_terminators_are_not_styled() {
        let runs = [
            Segment::new("ab\n", Style::Bold),
            Segment::new("cd", Style::Plain),
        ];
        let lines = wrap_segments(&runs, 10);
        assert_eq!(texts(&lines[0]), vec![("ab", Style::Bold)]);
        assert_eq!(texts(&lines[1]), vec![("cd", Style::Plain)]);
    }

    #[test]
    fn row_width_and_text() {
        let runs = [
            Segment::new("中", Style::Bold),
            Segment::new("x", Style::Plain),
        ];
        let lines = wrap_segments(&runs, 10);
        assert_eq!(lines[0].text(), "中x");
        assert_eq!(lines[0].width(), 3);
    }
}
