use std::sync::Arc;

use swash::{FontRef, Metrics, StringId};

use crate::font::{Face, FontDescriptor, FontError, FontMetrics, Result, Style, Weight};

/// Loaded font face backed by font data (TTF/OTF).
///
/// This is a thin wrapper around `swash::FontRef` that owns the
/// underlying font data and exposes metrics, glyph coverage and the
/// descriptor the face advertises.
#[derive(Debug, Clone)]
pub struct FontFace {
    /// Full font data.
    data: Arc<[u8]>,
    /// Index of this face within a collection.
    index: u32,
    /// Offset to the table directory for this font.
    offset: u32,
    /// Cache key used internally by swash.
    key: swash::CacheKey,
    /// Extracted font metrics in font units.
    metrics: FontMetrics,
}

impl FontFace {
    /// Create a font face from raw bytes and a font index within the file.
    pub fn from_bytes(data: Arc<[u8]>, index: u32) -> Result<Self> {
        let font = FontRef::from_index(&data, index as usize).ok_or(FontError::InvalidFont)?;
        let metrics = Self::metrics_from_swash(&font);
        let (offset, key) = (font.offset, font.key);
        Ok(Self {
            data,
            index,
            offset,
            key,
            metrics,
        })
    }

    /// Create a font face from raw bytes owned by a `Vec<u8>`.
    pub fn from_vec(data: Vec<u8>, index: u32) -> Result<Self> {
        Self::from_bytes(Arc::from(data), index)
    }

    /// Expose the raw font bytes for libraries that parse the font
    /// themselves (e.g. harfrust).
    pub fn as_bytes(&self) -> Arc<[u8]> {
        self.data.clone()
    }

    /// Index of this face within its font file.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Return a transient `FontRef` for interacting with swash APIs.
    fn as_swash_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }

    fn metrics_from_swash(font: &FontRef<'_>) -> FontMetrics {
        // Use default (no variation) coordinates.
        let Metrics {
            units_per_em,
            ascent,
            descent,
            leading,
            ..
        } = font.metrics(&[]);

        FontMetrics {
            ascent,
            descent,
            line_gap: leading,
            units_per_em,
        }
    }

    /// Descriptor advertised by the font's naming and attribute tables.
    ///
    /// Faces without a family name report an empty typeface.
    pub fn descriptor(&self) -> FontDescriptor {
        let font = self.as_swash_ref();
        let attributes = font.attributes();
        let style = match attributes.style() {
            swash::Style::Normal => Style::Regular,
            _ => Style::Italic,
        };
        let typeface: String = font
            .localized_strings()
            .find_by_id(StringId::Family, None)
            .map(|name| name.chars().collect())
            .unwrap_or_default();
        FontDescriptor::new(typeface, style, Weight(attributes.weight().0))
    }
}

impl Face for FontFace {
    fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    fn has_glyph(&self, ch: char) -> bool {
        self.as_swash_ref().charmap().map(ch) != 0
    }
}
