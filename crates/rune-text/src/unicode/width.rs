//! Terminal column width of a grapheme cluster.

use unicode_width::UnicodeWidthStr;

/// Widest cell span a single cluster can occupy.
const MAX_CLUSTER_WIDTH: usize = 2;

/// Number of fixed-width cells a grapheme cluster occupies.
///
/// - Control clusters (including `\r\n` and tabs) take 0 columns
/// - Pure combining or zero-width clusters take 0 columns
/// - East Asian Wide characters and emoji presentation take 2 columns
pub fn cluster_width(cluster: &str) -> usize {
    match cluster.chars().next() {
        None => 0,
        Some(c) if c.is_control() => 0,
        Some(_) => cluster.width().min(MAX_CLUSTER_WIDTH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_one_column() {
        assert_eq!(cluster_width("a"), 1);
        assert_eq!(cluster_width(" "), 1);
    }

    #[test]
    fn control_clusters_are_zero_width() {
        assert_eq!(cluster_width("\n"), 0);
        assert_eq!(cluster_width("\r\n"), 0);
        assert_eq!(cluster_width("\t"), 0);
        assert_eq!(cluster_width(""), 0);
    }

    #[test]
    fn combining_marks_add_nothing() {
        assert_eq!(cluster_width("e\u{0301}"), 1);
        assert_eq!(cluster_width("\u{0301}"), 0);
    }

    #[test]
    fn wide_scripts_take_two_columns() {
        assert_eq!(cluster_width("中"), 2);
        assert_eq!(cluster_width("가"), 2);
        assert_eq!(cluster_width("\u{1F600}"), 2);
    }

    #[test]
    fn zero_width_space_is_zero() {
        assert_eq!(cluster_width("\u{200B}"), 0);
    }
}
