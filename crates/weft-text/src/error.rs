//! Error types for layout.

use thiserror::Error;

use crate::font::FontError;

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors that can occur while laying out text.
///
/// Configuration errors mean the caller broke the entry point contract.
/// Internal errors mean the shaper or the layout code produced inconsistent
/// data; retrying with other input will not help.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// `min_width` is larger than `max_width`.
    #[error("min width {min} exceeds max width {max}")]
    InvalidWidthRange { min: f32, max: f32 },

    /// A width is negative or not a number.
    #[error("width must be non-negative, got {0}")]
    InvalidWidth(f32),

    /// The font size is zero, negative or not finite.
    #[error("font size must be finite and positive, got {0}")]
    InvalidFontSize(f32),

    /// The line height or its scale is zero, negative or not finite.
    #[error("line height must be finite and positive, got {0}")]
    InvalidLineHeight(f32),

    /// Layout was requested before any face was loaded.
    #[error("no font faces loaded")]
    NoFonts,

    /// The shaping backend failed.
    #[error(transparent)]
    Font(#[from] FontError),

    /// Shaped data broke a layout invariant.
    #[error("internal layout invariant violated: {0}")]
    Internal(#[from] InvariantViolation),
}

impl LayoutError {
    /// Whether the error is a violated caller contract.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LayoutError::InvalidWidthRange { .. }
                | LayoutError::InvalidWidth(_)
                | LayoutError::InvalidFontSize(_)
                | LayoutError::InvalidLineHeight(_)
                | LayoutError::NoFonts
        )
    }

    /// Whether the error is an internal invariant violation.
    pub fn is_internal(&self) -> bool {
        matches!(self, LayoutError::Internal(_))
    }
}

/// Broken invariants of shaped runs and laid-out lines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    /// The clusters of a run do not add up to the runes it was shaped from.
    #[error("run over runes {offset}..{end} covers {counted} runes", end = .offset + .expected)]
    RuneCountMismatch {
        offset: usize,
        expected: usize,
        counted: usize,
    },

    /// A cluster starts with a glyph claiming no runes.
    #[error("cluster {cluster} consumes no runes")]
    EmptyCluster { cluster: usize },

    /// The shaper produced the reserved newline sentinel.
    #[error("shaped glyph in cluster {cluster} has a zero glyph count")]
    UnexpectedSentinel { cluster: usize },

    /// A glyph points outside the runes of its run.
    #[error("cluster {cluster} lies outside runes {start}..{end}")]
    ClusterOutOfRange {
        cluster: usize,
        start: usize,
        end: usize,
    },

    /// A run covers no runes but still advances the pen.
    #[error("run without runes advances by {advance}")]
    ZeroLengthRun { advance: f32 },

    /// The visual order of a line is not a permutation of its runs.
    #[error("visual order {order:?} is not a permutation of 0..{len}")]
    VisualOrder { order: Vec<usize>, len: usize },
}
