use core::ops::Range;

/// How a wrapped line ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    /// Broken at an optional break opportunity to fit the width.
    Wrapped,
    /// Cut between two clusters because no break opportunity was available.
    Cut,
    /// Ended by a mandatory break; the terminator follows the line.
    Mandatory,
    /// Last line of the text.
    End,
}

/// A single wrapped line as byte ranges into the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBox {
    /// Byte offset range of the visible line text.
    pub text_range: Range<usize>,
    /// Trimmed CR/LF terminator directly after `text_range`. Empty unless
    /// the line ended on a mandatory break.
    pub terminator: Range<usize>,
    /// Display width of the line in columns.
    pub width: usize,
    pub end: LineEnd,
}

impl LineBox {
    /// Line ending on a break that consumed no text.
    pub(crate) fn new(text_range: Range<usize>, width: usize, end: LineEnd) -> Self {
        let at = text_range.end;
        Self {
            text_range,
            terminator: at..at,
            width,
            end,
        }
    }

    /// Visible text of this line within `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.text_range.clone()]
    }

    /// Source bytes covered by this line, terminator included.
    pub fn source_range(&self) -> Range<usize> {
        self.text_range.start..self.terminator.end
    }

    pub fn is_empty(&self) -> bool {
        self.text_range.is_empty()
    }
}
