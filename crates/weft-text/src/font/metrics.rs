/// Font-level metrics in font units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Ascent above baseline (positive).
    pub ascent: f32,
    /// Descent below baseline (positive).
    pub descent: f32,
    /// Line gap (leading).
    pub line_gap: f32,
    /// Units per em.
    pub units_per_em: u16,
}

impl FontMetrics {
    /// Calculate line height (ascent + descent + line_gap).
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }

    /// Factor converting font units to pixels at `px_per_em`.
    pub fn scale(&self, px_per_em: f32) -> f32 {
        if self.units_per_em != 0 {
            px_per_em / self.units_per_em as f32
        } else {
            1.0
        }
    }

    /// Scale metrics to pixel size, where `px_per_em` is in logical pixels.
    pub fn scale_to_pixels(&self, px_per_em: f32) -> ScaledFontMetrics {
        let scale = self.scale(px_per_em);
        ScaledFontMetrics {
            ascent: self.ascent * scale,
            descent: self.descent * scale,
            line_gap: self.line_gap * scale,
            px_per_em,
        }
    }
}

/// Scaled font metrics in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScaledFontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
    pub px_per_em: f32,
}
