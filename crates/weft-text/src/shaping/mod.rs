//! Shaped glyph model and the boundary to the shaping backend.

pub mod adapter;
pub mod glyph;
pub mod run;
pub mod shaper;

pub use adapter::{adapt_run, count_runes, newline_run, synthesize_newline};
pub use glyph::Glyph;
pub use run::{Direction, Run, RuneRange};
pub use shaper::{HarfrustShaper, ShapeRequest, Shaper};
