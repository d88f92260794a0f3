use crate::unicode::{step, StepCursor};

/// Returns the width of the given string needed to print it on a
/// fixed-width screen, in columns.
///
/// Steps through the text one grapheme cluster at a time; combining marks
/// and control characters contribute nothing.
pub fn string_width(text: &str) -> usize {
    let mut width = 0;
    let mut rest = text;
    let mut cursor = StepCursor::START;
    while !rest.is_empty() {
        let (_, tail, next) = step(rest, cursor);
        width += next.width();
        rest = tail;
        cursor = next;
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_has_no_width() {
        assert_eq!(string_width(""), 0);
    }

    #[test]
    fn combining_mark_adds_nothing() {
        assert_eq!(string_width("e\u{0301}"), string_width("e"));
        assert_eq!(string_width("cafe\u{0301}"), 4);
    }

    #[test]
    fn wide_and_narrow_mix() {
        assert_eq!(string_width("ab中"), 4);
        assert_eq!(string_width("日本語"), 6);
    }

    #[test]
    fn newlines_do_not_count() {
        assert_eq!(string_width("ab\ncd\r\n"), 4);
    }
}
