/// Kind of line break at the boundary after a grapheme cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BreakKind {
    /// No break is allowed here.
    #[default]
    NoBreak,
    /// Optional line break opportunity (after spaces, hyphens, between
    /// ideographs, ...).
    Optional,
    /// Required line break (e.g., explicit newline).
    Mandatory,
}

impl BreakKind {
    /// `true` for both optional and mandatory breaks.
    pub fn is_break(self) -> bool {
        !matches!(self, BreakKind::NoBreak)
    }
}
