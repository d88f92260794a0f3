//! Greedy word wrapping for fixed-width displays.
//!
//! Clusters are accumulated into a candidate line while the most recent
//! optional break is remembered. When the next cluster would overflow, the
//! line is broken at that break, or cut between clusters when the line has
//! none. Mandatory breaks always end a line.

use core::iter::{self, Peekable};
use core::str::Utf8Chunks;

use log::{debug, trace};

use crate::layout::{BreakKind, LineBox, LineEnd};
use crate::unicode::graphemes::{step_before, step_invalid};
use crate::unicode::{step, StepCursor};

/// Running totals for the line being built.
///
/// Offsets are relative to the start of the current line. An option width
/// of zero means no optional break has been recorded yet.
#[derive(Debug, Default, Clone, Copy)]
struct WrapState {
    line_width: usize,
    line_length: usize,
    last_option: usize,
    last_option_width: usize,
}

impl WrapState {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn record_option(&mut self) {
        self.last_option = self.line_length;
        self.last_option_width = self.line_width;
    }

    /// Continue accounting from just past the recorded break.
    fn carry_past_option(&mut self) {
        self.line_width -= self.last_option_width;
        self.line_length -= self.last_option;
        self.last_option = 0;
        self.last_option_width = 0;
    }
}

/// Wrap `text` into lines no wider than `width` columns, as byte ranges.
///
/// A zero width yields no lines. Any other width yields at least one line;
/// empty text yields a single empty line. A line is wider than `width` only
/// when it holds a single visible cluster that does not fit on its own.
pub fn wrap_lines(text: &str, width: usize) -> Vec<LineBox> {
    let mut rest = text;
    let mut cursor = StepCursor::START;
    let clusters = iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let (_, tail, next) = step(rest, cursor);
        rest = tail;
        cursor = next;
        Some(cursor)
    });
    wrap_clusters(text.as_bytes(), clusters, width)
}

/// [`wrap_lines`] for raw bytes that may not be valid UTF-8.
///
/// Every byte outside a valid UTF-8 sequence is a cluster of its own, one
/// column wide. Ranges index into `bytes`.
pub fn wrap_byte_lines(bytes: &[u8], width: usize) -> Vec<LineBox> {
    let clusters = ByteClusters {
        chunks: bytes.utf8_chunks().peekable(),
        valid: "",
        invalid: &[],
        cursor: StepCursor::START,
    };
    wrap_clusters(bytes, clusters, width)
}

/// Greedy line filling over the cursors of consecutive clusters of `source`.
fn wrap_clusters(
    source: &[u8],
    clusters: impl Iterator<Item = StepCursor>,
    width: usize,
) -> Vec<LineBox> {
    let mut lines = Vec::new();
    if width == 0 {
        debug!("wrap_lines: zero width, emitting no lines");
        return lines;
    }

    let mut state = WrapState::default();
    let mut start = 0;

    for cursor in clusters {
        let c_width = cursor.width();

        while c_width > 0 && state.line_width + c_width > width {
            if state.last_option_width == 0 {
                if state.line_width == 0 {
                    trace!("cluster at {} is wider than {width} columns", start + state.line_length);
                    break;
                }
                let end = start + state.line_length;
                lines.push(LineBox::new(start..end, state.line_width, LineEnd::Cut));
                start = end;
                state.reset();
            } else {
                let end = start + state.last_option;
                lines.push(LineBox::new(
                    start..end,
                    state.last_option_width,
                    LineEnd::Wrapped,
                ));
                start = end;
                state.carry_past_option();
            }
        }

        state.line_width += c_width;
        state.line_length += cursor.gross_length();

        match cursor.break_kind() {
            BreakKind::Mandatory => {
                let end = start + state.line_length;
                let visible = source[start..end]
                    .iter()
                    .rposition(|&b| !matches!(b, b'\n' | b'\r'))
                    .map_or(0, |last| last + 1);
                let text_end = start + visible;
                lines.push(LineBox {
                    text_range: start..text_end,
                    terminator: text_end..end,
                    width: state.line_width,
                    end: LineEnd::Mandatory,
                });
                start = end;
                state.reset();
            }
            BreakKind::Optional => state.record_option(),
            BreakKind::NoBreak => {}
        }
    }

    lines.push(LineBox::new(start..source.len(), state.line_width, LineEnd::End));
    trace!("wrapped {} bytes into {} lines at width {width}", source.len(), lines.len());
    lines
}

/// Cursors over a byte string: grapheme clusters of its valid UTF-8 runs,
/// and one cluster per byte of everything in between.
struct ByteClusters<'a> {
    chunks: Peekable<Utf8Chunks<'a>>,
    valid: &'a str,
    invalid: &'a [u8],
    cursor: StepCursor,
}

impl Iterator for ByteClusters<'_> {
    type Item = StepCursor;

    fn next(&mut self) -> Option<StepCursor> {
        while self.valid.is_empty() && self.invalid.is_empty() {
            let chunk = self.chunks.next()?;
            self.valid = chunk.valid();
            self.invalid = chunk.invalid();
        }

        if !self.valid.is_empty() {
            let follower = (!self.invalid.is_empty()).then_some(char::REPLACEMENT_CHARACTER);
            let (_, rest, cursor) = step_before(self.valid, self.cursor, follower);
            self.valid = rest;
            self.cursor = cursor;
        } else {
            self.invalid = &self.invalid[1..];
            let follower = if self.invalid.is_empty() {
                self.chunks.peek().and_then(|chunk| {
                    chunk
                        .valid()
                        .chars()
                        .next()
                        .or((!chunk.invalid().is_empty()).then_some(char::REPLACEMENT_CHARACTER))
                })
            } else {
                Some(char::REPLACEMENT_CHARACTER)
            };
            self.cursor = step_invalid(self.cursor, follower);
        }
        Some(self.cursor)
    }
}

/// Splits a text such that each resulting line does not exceed the given
/// screen width.
///
/// Lines are substrings of `text`. A trailing CR/LF terminating a line is
/// not included in it.
pub fn word_wrap(text: &str, width: usize) -> Vec<&str> {
    wrap_lines(text, width)
        .into_iter()
        .map(|line| &text[line.text_range])
        .collect()
}

/// Like [`word_wrap`] for raw bytes. Lines are slices of `bytes`; invalid
/// UTF-8 is kept as is and each invalid byte wraps as one column.
pub fn word_wrap_bytes(bytes: &[u8], width: usize) -> Vec<&[u8]> {
    wrap_byte_lines(bytes, width)
        .into_iter()
        .map(|line| &bytes[line.text_range])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_yields_nothing() {
        assert!(word_wrap("hello", 0).is_empty());
        assert!(word_wrap("", 0).is_empty());
    }

    #[test]
    fn empty_text_yields_one_empty_line() {
        assert_eq!(word_wrap("", 5), vec![""]);
    }

    #[test]
    fn breaks_after_spaces() {
        assert_eq!(
            word_wrap("The quick brown fox", 10),
            vec!["The quick ", "brown fox"]
        );
    }

    #[test]
    fn cuts_unbreakable_runs() {
        assert_eq!(word_wrap("abcdefg", 3), vec!["abc", "def", "g"]);
    }

    #[test]
    fn newline_always_ends_a_line() {
        assert_eq!(word_wrap("ab\ncdef", 10), vec!["ab", "cdef"]);
        assert_eq!(word_wrap("ab\r\ncd", 10), vec!["ab", "cd"]);
    }

    #[test]
    fn trailing_newline_leaves_empty_last_line() {
        assert_eq!(word_wrap("ab\n", 10), vec!["ab", ""]);
        assert_eq!(word_wrap("\n\n", 10), vec!["", "", ""]);
    }

    #[test]
    fn text_that_fits_is_untouched() {
        assert_eq!(word_wrap("short", 80), vec!["short"]);
    }

    #[test]
    fn exact_fit_does_not_wrap() {
        assert_eq!(word_wrap("abc", 3), vec!["abc"]);
    }

    #[test]
    fn oversized_cluster_sits_alone() {
        assert_eq!(word_wrap("中", 1), vec!["中"]);
        assert_eq!(word_wrap("a中b", 1), vec!["a", "中", "b"]);
        assert_eq!(word_wrap("中\n", 1), vec!["中", ""]);
    }

    #[test]
    fn wide_characters_wrap_by_columns() {
        assert_eq!(word_wrap("日本語です", 4), vec!["日本", "語で", "す"]);
    }

    #[test]
    fn remainder_after_break_is_rechecked() {
        // U+3001 (ideographic comma) is wide and cannot start a line, so
        // the break after the space leaves "ab、" which is still too wide.
        assert_eq!(word_wrap(" ab\u{3001}", 3), vec![" ", "ab", "\u{3001}"]);
    }

    #[test]
    fn break_at_zero_width_is_not_an_option() {
        // The break after a leading ZWSP sits at column 0 and would only
        // produce an empty line, so the line is cut instead.
        assert_eq!(word_wrap("\u{200B}abcd", 2), vec!["\u{200B}ab", "cd"]);
    }

    #[test]
    fn zero_width_remainder_stays_with_wide_cluster() {
        assert_eq!(
            word_wrap("a\u{200B} -\n \t\u{3001}", 1),
            vec!["a\u{200B}", " ", "-", " ", "\t\u{3001}"]
        );
        assert_eq!(word_wrap("\u{200B}中", 1), vec!["\u{200B}中"]);
    }

    #[test]
    fn line_boxes_record_how_lines_end() {
        let text = "aa bb\ncccc";
        let lines = wrap_lines(text, 4);
        let ends: Vec<_> = lines.iter().map(|l| l.end).collect();
        assert_eq!(
            ends,
            vec![LineEnd::Wrapped, LineEnd::Mandatory, LineEnd::End]
        );
        assert_eq!(lines[1].text(text), "bb");
        assert_eq!(&text[lines[1].terminator.clone()], "\n");
        assert_eq!(lines[2].width, 4);
    }

    #[test]
    fn invalid_bytes_are_single_column_clusters() {
        assert_eq!(word_wrap_bytes(b"ab\xffcd", 3), vec![&b"ab\xff"[..], &b"cd"[..]]);
        // A truncated sequence is two clusters, not one replacement character.
        assert_eq!(word_wrap_bytes(b"\xE2\x82ab", 2), vec![&b"\xE2\x82"[..], &b"ab"[..]]);
    }

    #[test]
    fn byte_lines_rebuild_the_input() {
        let inputs: [&[u8]; 5] = [
            b"ab\xffcd\r\nef\xc3",
            b"\xff\xfe\n\x80 x",
            b"caf\xc3\xa9 \xe4\xb8\xad\xff\xe4\xb8\xad",
            b"plain words\nhere",
            b"",
        ];
        for input in inputs {
            for width in 1..=6 {
                let rebuilt: Vec<u8> = wrap_byte_lines(input, width)
                    .iter()
                    .flat_map(|line| input[line.source_range()].iter().copied())
                    .collect();
                assert_eq!(rebuilt, input, "{input:?} at {width}");
            }
        }
    }

    #[test]
    fn valid_bytes_wrap_like_text() {
        let text = "The quick brown fox\njumps over 日本語";
        for width in 1..=12 {
            assert_eq!(
                wrap_byte_lines(text.as_bytes(), width),
                wrap_lines(text, width),
                "width {width}"
            );
        }
    }
}
