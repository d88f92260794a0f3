//! Unicode utilities for rune-text.
//!
//! Grapheme cluster segmentation with per-cluster column width and
//! line-break classification, stepped one cluster at a time.

pub mod graphemes;
pub mod line_class;
pub mod width;

pub use graphemes::{grapheme_clusters, step, GraphemeCluster, GraphemeClusters, StepCursor};
pub use line_class::LineBreakState;
pub use width::cluster_width;
