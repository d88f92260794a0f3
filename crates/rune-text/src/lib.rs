//! rune-text: text layout for fixed-width display surfaces.
//!
//! - `unicode`: grapheme cluster stepping with column width and UAX #14
//!   line-break classification, resumable one cluster at a time
//! - `layout`: width measurement, greedy word wrapping and styled rows

pub mod layout;
pub mod unicode;

pub use layout::{
    string_width, word_wrap, word_wrap_bytes, wrap_byte_lines, wrap_lines, wrap_segments,
    BreakKind, Line, LineBox, LineEnd, Segment,
};

pub use unicode::{grapheme_clusters, step, GraphemeCluster, StepCursor};
