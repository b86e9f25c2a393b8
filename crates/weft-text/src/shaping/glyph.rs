/// One shaped glyph, positioned in pixels.
///
/// `cluster_index` is the index of the first source rune of the cluster
/// this glyph belongs to, counted from the start of the laid-out text.
/// Every glyph of a cluster carries the cluster's `rune_count` and
/// `glyph_count`.
///
/// A `glyph_count` of zero never occurs for real glyphs: it marks the
/// synthetic placeholder standing for an explicit line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Glyph {
    /// Glyph id within the face that shaped it.
    pub id: u32,
    pub x_advance: f32,
    pub y_advance: f32,
    /// Offset from the pen position.
    pub x_offset: f32,
    pub y_offset: f32,
    /// Left edge of the ink box relative to the pen position.
    pub x_bearing: f32,
    /// Top edge of the ink box above the baseline.
    pub y_bearing: f32,
    pub width: f32,
    pub height: f32,
    pub cluster_index: usize,
    pub rune_count: usize,
    pub glyph_count: usize,
}

impl Glyph {
    /// Zero-sized placeholder consuming the terminator rune at `cluster_index`.
    pub fn newline(cluster_index: usize) -> Self {
        Self {
            cluster_index,
            rune_count: 1,
            glyph_count: 0,
            ..Self::default()
        }
    }

    /// Whether this is the synthetic line-terminator placeholder.
    pub fn is_newline(&self) -> bool {
        self.glyph_count == 0
    }
}
