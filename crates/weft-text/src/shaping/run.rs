use crate::font::FaceId;
use crate::shaping::Glyph;

/// Reading direction of a run or a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        self == Direction::RightToLeft
    }
}

/// Half-open span of runes: `offset..offset + count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RuneRange {
    pub offset: usize,
    pub count: usize,
}

impl RuneRange {
    pub fn new(offset: usize, count: usize) -> Self {
        Self { offset, count }
    }

    pub fn end(&self) -> usize {
        self.offset + self.count
    }

    pub fn contains(&self, rune: usize) -> bool {
        rune >= self.offset && rune < self.end()
    }
}

/// A run of text shaped with a single face in a single direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    /// Reading direction of the run.
    pub direction: Direction,
    /// Face that shaped the run.
    pub face: FaceId,
    /// Font size in pixels per em.
    pub px_per_em: f32,
    /// Glyphs in visual order: for right-to-left runs index 0 is the
    /// logically last glyph.
    pub glyphs: Vec<Glyph>,
    /// Runes covered by the run. Once the run belongs to a line, the
    /// offset is relative to the line start.
    pub runes: RuneRange,
    /// Total horizontal advance in pixels.
    pub advance: f32,
    /// Maximum ascent above the baseline in pixels.
    pub ascent: f32,
    /// Maximum descent below the baseline in pixels.
    pub descent: f32,
    /// Screen position of this run within its line.
    pub visual_position: usize,
}

impl Run {
    /// Number of glyphs, the synthetic newline included.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// The synthetic newline glyph, if this run carries one.
    pub fn newline(&self) -> Option<&Glyph> {
        let last = if self.direction.is_rtl() {
            self.glyphs.first()
        } else {
            self.glyphs.last()
        };
        last.filter(|glyph| glyph.is_newline())
    }
}
