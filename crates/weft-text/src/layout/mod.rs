pub mod document;
pub mod engine;
pub mod geometry;
pub mod itemize;
pub mod line;
pub mod line_breaker;
pub mod line_builder;
pub mod params;
pub mod prefix_sums;

pub use document::Document;
pub use engine::{LayoutEngine, is_paragraph_terminator};
pub use geometry::{Bounds, Point};
pub use itemize::{Item, itemize};
pub use line::Line;
pub use line_breaker::{LineBreak, LineBreakKind, break_positions, compute_line_breaks};
pub use line_builder::{LineBuilder, align_width, to_line};
pub use params::{Alignment, LayoutOptions, Locale, Parameters, WrapMode};
pub use prefix_sums::PrefixSums;
