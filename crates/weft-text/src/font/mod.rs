pub mod descriptor;
pub mod face;
pub mod metrics;
pub mod registry;

pub use descriptor::{FontDescriptor, Style, Typeface, Weight, closest_font};
pub use face::FontFace;
pub use metrics::{FontMetrics, ScaledFontMetrics};
pub use registry::{FaceId, FontRegistry, LoadedFace, SharedRegistry};

use thiserror::Error;

/// Errors that can occur while working with fonts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    /// The bytes do not describe a font the parser understands.
    #[error("invalid font data")]
    InvalidFont,
    /// The shaping backend rejected the face or the request.
    #[error("shaping failed: {0}")]
    Shaping(String),
}

/// Convenient result alias for font-related operations.
pub type Result<T> = std::result::Result<T, FontError>;

/// A loaded face as seen by layout: metrics plus glyph coverage.
///
/// Layout only needs these two queries to build fallback runs and empty
/// line boxes; everything else about a face is the shaper's business.
pub trait Face: Send + Sync {
    /// Font metrics in font units.
    fn metrics(&self) -> FontMetrics;

    /// Whether the face maps `ch` to a real (non-`.notdef`) glyph.
    fn has_glyph(&self, ch: char) -> bool;
}
