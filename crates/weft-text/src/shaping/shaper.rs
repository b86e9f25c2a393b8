use hashbrown::HashMap;
use harfrust::{
    Direction as HbDirection,
    FontRef as HbFontRef,
    Language as HbLanguage,
    Script as HbScript,
    ShaperData,
    ShaperInstance,
    Tag as HbTag,
    UnicodeBuffer as HbUnicodeBuffer,
};
use unicode_script::Script;

use crate::font::{Face, FontError, FontFace};

use super::{Direction, Glyph};

/// One request to the shaping backend: a direction- and script-uniform
/// slice of runes to shape with a single face.
#[derive(Debug, Clone, Copy)]
pub struct ShapeRequest<'a> {
    /// The runes to shape.
    pub text: &'a [char],
    /// Index of `text[0]` within the laid-out text; cluster indices of the
    /// returned glyphs are offset by it.
    pub rune_offset: usize,
    pub direction: Direction,
    pub script: Script,
    /// BCP 47 language tag.
    pub language: &'a str,
    pub px_per_em: f32,
}

/// The shaping backend.
///
/// Implementations return glyphs in visual order (left to right on screen,
/// so right-to-left requests come back reversed), with `cluster_index`,
/// `rune_count` and `glyph_count` filled in for every glyph.
pub trait Shaper {
    type Face: Face;

    fn shape(&self, face: &Self::Face, request: &ShapeRequest<'_>) -> Result<Vec<Glyph>, FontError>;
}

/// Shaper built on harfrust (pure-Rust HarfBuzz port).
///
/// Handles kerning, ligatures, mark positioning and right-to-left scripts
/// through HarfBuzz semantics; byte clusters are converted into rune
/// clusters.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarfrustShaper;

impl Shaper for HarfrustShaper {
    type Face = FontFace;

    fn shape(&self, face: &FontFace, request: &ShapeRequest<'_>) -> Result<Vec<Glyph>, FontError> {
        let text: String = request.text.iter().collect();

        let font_data = face.as_bytes();
        let font_ref = HbFontRef::from_index(&font_data, face.index())
            .map_err(|err| FontError::Shaping(format!("{err:?}")))?;

        // Shaper configuration with default (no variations) instance.
        let data = ShaperData::new(&font_ref);
        let instance =
            ShaperInstance::from_variations(&font_ref, core::iter::empty::<harfrust::Variation>());
        let shaper = data
            .shaper(&font_ref)
            .instance(Some(&instance))
            .point_size(None)
            .build();

        let mut buffer = HbUnicodeBuffer::new();
        buffer.push_str(&text);
        buffer.set_direction(match request.direction {
            Direction::LeftToRight => HbDirection::LeftToRight,
            Direction::RightToLeft => HbDirection::RightToLeft,
        });
        if let Some(script) = script_tag(request.script).and_then(HbScript::from_iso15924_tag) {
            buffer.set_script(script);
        }
        if let Ok(language) = request.language.parse::<HbLanguage>() {
            buffer.set_language(language);
        }
        // Let harfrust fill in any remaining segment properties.
        buffer.guess_segment_properties();

        let glyph_buffer = shaper.shape(buffer, &[]);
        let infos = glyph_buffer.glyph_infos();
        let positions = glyph_buffer.glyph_positions();

        // harfrust uses design units; convert to pixels using the font's
        // units-per-em and requested size.
        let metrics = face.metrics();
        let scale = metrics.scale(request.px_per_em);
        let ascent = metrics.ascent * scale;
        let descent = metrics.descent * scale;

        let clusters: Vec<u32> = infos.iter().map(|info| info.cluster).collect();
        let runes = RuneClusters::new(&text, &clusters);

        let glyphs = infos
            .iter()
            .zip(positions.iter())
            .map(|(info, pos)| {
                let x_advance = pos.x_advance as f32 * scale;
                let (first_rune, rune_count, glyph_count) = runes.cluster(info.cluster);
                Glyph {
                    id: info.glyph_id,
                    x_advance,
                    y_advance: -(pos.y_advance as f32) * scale,
                    x_offset: pos.x_offset as f32 * scale,
                    y_offset: -(pos.y_offset as f32) * scale,
                    x_bearing: 0.0,
                    y_bearing: ascent,
                    width: x_advance,
                    height: ascent + descent,
                    cluster_index: request.rune_offset + first_rune,
                    rune_count,
                    glyph_count,
                }
            })
            .collect();
        Ok(glyphs)
    }
}

fn script_tag(script: Script) -> Option<HbTag> {
    let name: [u8; 4] = script.short_name().as_bytes().try_into().ok()?;
    Some(HbTag::new(&name))
}

/// Rune extent and glyph count of each HarfBuzz byte cluster.
struct RuneClusters {
    /// Byte offset of every char in the shaped text.
    char_starts: Vec<usize>,
    /// Distinct cluster byte offsets, ascending.
    starts: Vec<u32>,
    glyph_counts: HashMap<u32, usize>,
}

impl RuneClusters {
    fn new(text: &str, clusters: &[u32]) -> Self {
        let mut starts = clusters.to_vec();
        starts.sort_unstable();
        starts.dedup();

        let mut glyph_counts = HashMap::new();
        for &cluster in clusters {
            *glyph_counts.entry(cluster).or_insert(0) += 1;
        }

        Self {
            char_starts: text.char_indices().map(|(byte, _)| byte).collect(),
            starts,
            glyph_counts,
        }
    }

    fn rune_at(&self, byte: u32) -> usize {
        self.char_starts.partition_point(|&start| start < byte as usize)
    }

    /// `(first rune, rune count, glyph count)` of the cluster at `byte`.
    fn cluster(&self, byte: u32) -> (usize, usize, usize) {
        let first = self.rune_at(byte);
        let next = self.starts.partition_point(|&start| start <= byte);
        let end = match self.starts.get(next) {
            Some(&start) => self.rune_at(start),
            None => self.char_starts.len(),
        };
        let glyphs = self.glyph_counts.get(&byte).copied().unwrap_or(1);
        (first, end - first, glyphs)
    }
}
