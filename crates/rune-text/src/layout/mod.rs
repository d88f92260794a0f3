pub mod line_box;
pub mod line_breaker;
pub mod measure;
pub mod styled;
pub mod word_wrap;

pub use line_box::{LineBox, LineEnd};
pub use line_breaker::BreakKind;
pub use measure::string_width;
pub use styled::{wrap_segments, Line, Segment};
pub use word_wrap::{word_wrap, word_wrap_bytes, wrap_byte_lines, wrap_lines};
