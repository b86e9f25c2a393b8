//! Bidirectional (BiDi) text support built on `unicode-bidi`.
//!
//! - Direction runs of a paragraph from UAX-9 embedding levels
//! - Visual reordering of the runs of a laid-out line

pub mod levels;
pub mod reorder;

pub use levels::{DirectionRun, direction_runs};
pub use reorder::{check_visual_order, compute_visual_order, reorder_levels};
