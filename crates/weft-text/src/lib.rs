//! weft-text: bidirectional text shaping and line layout.
//!
//! - `font`: face descriptors, closest-match lookup and the shared face registry
//! - `shaping`: glyph and run model, the shaper boundary and a harfrust backend
//! - `bidi`: direction runs and visual reordering of lines
//! - `layout`: itemization, line breaking, documents and the layout engine

pub mod bidi;
pub mod error;
pub mod font;
pub mod layout;
pub mod shaping;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{InvariantViolation, LayoutError, Result};
pub use font::{
    Face, FaceId, FontDescriptor, FontError, FontFace, FontMetrics, FontRegistry,
    ScaledFontMetrics, SharedRegistry, Style, Typeface, Weight, closest_font,
};
pub use layout::{
    Alignment, Bounds, Document, LayoutEngine, LayoutOptions, Line, Locale, Parameters, Point,
    WrapMode,
};
pub use shaping::{Direction, Glyph, HarfrustShaper, Run, RuneRange, ShapeRequest, Shaper};
