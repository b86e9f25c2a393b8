//! Deterministic fonts and shaping for unit tests.

use crate::bidi::check_visual_order;
use crate::font::{Face, FontDescriptor, FontError, FontFace, FontMetrics, Style, Weight};
use crate::layout::{Document, LayoutEngine};
use crate::shaping::{Glyph, ShapeRequest, Shaper, count_runes};

fn is_arabic(ch: char) -> bool {
    matches!(
        ch,
        '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}'
    )
}

/// Face with fixed metrics (1000 units per em, ascent 800, descent 200).
#[derive(Debug, Clone)]
pub(crate) struct TestFace {
    covers: fn(char) -> bool,
}

impl TestFace {
    /// Covers everything but Arabic.
    pub(crate) fn latin() -> Self {
        Self {
            covers: |ch| !is_arabic(ch),
        }
    }

    /// Covers Arabic plus ASCII digits, punctuation and space.
    pub(crate) fn arabic() -> Self {
        Self {
            covers: |ch| {
                is_arabic(ch) || ch == ' ' || ch.is_ascii_digit() || ch.is_ascii_punctuation()
            },
        }
    }
}

impl Face for TestFace {
    fn metrics(&self) -> FontMetrics {
        FontMetrics {
            ascent: 800.0,
            descent: 200.0,
            line_gap: 0.0,
            units_per_em: 1000,
        }
    }

    fn has_glyph(&self, ch: char) -> bool {
        (self.covers)(ch)
    }
}

/// Shapes every rune into one square glyph `px_per_em` wide, except that
/// "fi" becomes a single double-width ligature and '%' expands into two
/// half-width glyphs. Right-to-left output is reversed.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TestShaper {
    drop_last_glyph: bool,
}

impl TestShaper {
    /// A shaper losing the last glyph of every request.
    pub(crate) fn dropping_last_glyph() -> Self {
        Self {
            drop_last_glyph: true,
        }
    }
}

impl Shaper for TestShaper {
    type Face = TestFace;

    fn shape(&self, face: &TestFace, request: &ShapeRequest<'_>) -> Result<Vec<Glyph>, FontError> {
        let px = request.px_per_em;
        let metrics = face.metrics().scale_to_pixels(px);
        let glyph = |cluster: usize, runes: usize, glyphs: usize, advance: f32| Glyph {
            id: request.text[cluster] as u32,
            x_advance: advance,
            y_bearing: metrics.ascent,
            width: advance,
            height: metrics.ascent + metrics.descent,
            cluster_index: request.rune_offset + cluster,
            rune_count: runes,
            glyph_count: glyphs,
            ..Glyph::default()
        };

        let mut glyphs = Vec::with_capacity(request.text.len());
        let mut index = 0;
        while index < request.text.len() {
            match (request.text[index], request.text.get(index + 1)) {
                ('f', Some('i')) => {
                    glyphs.push(glyph(index, 2, 1, 2.0 * px));
                    index += 2;
                }
                ('%', _) => {
                    glyphs.push(glyph(index, 1, 2, px / 2.0));
                    glyphs.push(glyph(index, 1, 2, px / 2.0));
                    index += 1;
                }
                _ => {
                    glyphs.push(glyph(index, 1, 1, px));
                    index += 1;
                }
            }
        }
        if self.drop_last_glyph {
            glyphs.pop();
        }
        if request.direction.is_rtl() {
            glyphs.reverse();
        }
        Ok(glyphs)
    }
}

/// A square 10px glyph for rune `cluster`.
pub(crate) fn simple_glyph(cluster: usize) -> Glyph {
    complex_glyph(cluster, 1, 1)
}

/// A square 10px glyph of a cluster covering `runes` runes and `glyphs`
/// glyphs.
pub(crate) fn complex_glyph(cluster: usize, runes: usize, glyphs: usize) -> Glyph {
    Glyph {
        x_advance: 10.0,
        y_advance: 10.0,
        y_bearing: 10.0,
        width: 10.0,
        height: 10.0,
        cluster_index: cluster,
        rune_count: runes,
        glyph_count: glyphs,
        ..Glyph::default()
    }
}

/// DejaVu Sans from the system font directory, when installed.
pub(crate) fn system_face() -> Option<FontFace> {
    let path = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";
    match std::fs::read(path) {
        Ok(data) => FontFace::from_vec(data, 0).ok(),
        Err(err) => {
            log::warn!("skipping: cannot read {path}: {err}");
            None
        }
    }
}

/// Engine with a Latin face "Go" (id 0) and an Arabic face
/// "Noto Sans Arabic" (id 1).
pub(crate) fn test_engine() -> LayoutEngine<TestShaper> {
    let engine = LayoutEngine::new(TestShaper::default());
    engine.load(
        FontDescriptor::new("Go", Style::Regular, Weight::NORMAL),
        TestFace::latin(),
    );
    engine.load(
        FontDescriptor::new("Noto Sans Arabic", Style::Regular, Weight::NORMAL),
        TestFace::arabic(),
    );
    engine
}

/// Check the structural invariants of a laid-out document covering
/// `expected_runes` runes.
pub(crate) fn validate_document(doc: &Document, expected_runes: usize) {
    let mut runes_seen = 0;
    let mut previous_y = f32::NEG_INFINITY;
    for (i, line) in doc.lines().iter().enumerate() {
        assert_ne!(line.bounds.min, Default::default(), "line {i}: bounds.min not populated");
        assert_ne!(line.bounds.max, Default::default(), "line {i}: bounds.max not populated");
        assert_eq!(check_visual_order(line), Ok(()), "line {i}");
        assert!(line.y_offset > previous_y, "line {i}: y offset not increasing");
        previous_y = line.y_offset;

        let mut width = 0.0;
        let mut line_runes = 0;
        let last_run = line.runs.len().saturating_sub(1);
        for (k, run) in line.runs.iter().enumerate() {
            assert_eq!(
                line.visual_order[run.visual_position], k,
                "line {i}, run {k}: visual position"
            );
            assert_eq!(run.runes.offset, line_runes, "line {i}, run {k}: rune offset");
            assert_eq!(count_runes(&run.glyphs), run.runes.count, "line {i}, run {k}: rune count");

            let logical_last = if run.direction.is_rtl() {
                0
            } else {
                run.glyphs.len().saturating_sub(1)
            };
            for (g, glyph) in run.glyphs.iter().enumerate() {
                if glyph.is_newline() {
                    assert!(
                        k == last_run && g == logical_last,
                        "line {i}, run {k}, glyph {g}: misplaced newline"
                    );
                }
            }

            line_runes += run.runes.count;
            width += run.advance.abs();
        }
        assert_eq!(line.rune_count, line_runes, "line {i}: rune count");
        assert!((line.width - width).abs() < 1e-3, "line {i}: width {} != {width}", line.width);
        runes_seen += line_runes;
    }
    assert_eq!(runes_seen, expected_runes, "document rune count");
    assert_eq!(doc.rune_count(), expected_runes);
}
