//! Conversion of shaper output into [`Run`]s, and newline placeholders.

use crate::error::InvariantViolation;
use crate::font::{FaceId, ScaledFontMetrics};
use crate::shaping::{Direction, Glyph, Run, RuneRange};

/// Count the runes covered by `glyphs`.
///
/// A cluster's rune count is taken once, from the glyph where the cluster
/// index changes; continuation glyphs of the same cluster add nothing.
pub fn count_runes(glyphs: &[Glyph]) -> usize {
    let mut count = 0;
    let mut current = None;
    for glyph in glyphs {
        if current != Some(glyph.cluster_index) {
            count += glyph.rune_count;
            current = Some(glyph.cluster_index);
        }
    }
    count
}

/// Build a run from the glyphs the shaper produced for `runes`.
///
/// The shaper output is checked rather than trusted: every cluster must
/// lie inside `runes`, consume at least one rune, and the clusters together
/// must cover exactly `runes.count` runes.
pub fn adapt_run(
    glyphs: Vec<Glyph>,
    runes: RuneRange,
    direction: Direction,
    face: FaceId,
    metrics: ScaledFontMetrics,
) -> Result<Run, InvariantViolation> {
    let mut current = None;
    for glyph in &glyphs {
        let cluster = glyph.cluster_index;
        if glyph.is_newline() {
            return Err(InvariantViolation::UnexpectedSentinel { cluster });
        }
        if !runes.contains(cluster) {
            return Err(InvariantViolation::ClusterOutOfRange {
                cluster,
                start: runes.offset,
                end: runes.end(),
            });
        }
        if current != Some(cluster) {
            if glyph.rune_count == 0 {
                return Err(InvariantViolation::EmptyCluster { cluster });
            }
            current = Some(cluster);
        }
    }

    let counted = count_runes(&glyphs);
    if counted != runes.count {
        return Err(InvariantViolation::RuneCountMismatch {
            offset: runes.offset,
            expected: runes.count,
            counted,
        });
    }

    let mut ascent = metrics.ascent;
    let mut descent = metrics.descent;
    for glyph in &glyphs {
        ascent = ascent.max(glyph.y_bearing);
        descent = descent.max(glyph.height - glyph.y_bearing);
    }

    Ok(Run {
        direction,
        face,
        px_per_em: metrics.px_per_em,
        advance: glyphs.iter().map(|glyph| glyph.x_advance).sum(),
        glyphs,
        runes,
        ascent,
        descent,
        visual_position: 0,
    })
}

/// Add the placeholder for the terminator rune at `cluster_index` to `run`,
/// the logically last run of a line.
///
/// Right-to-left runs store glyphs in visual order, so their logical end is
/// index 0.
pub fn synthesize_newline(run: &mut Run, cluster_index: usize) {
    let glyph = Glyph::newline(cluster_index);
    if run.direction.is_rtl() {
        run.glyphs.insert(0, glyph);
    } else {
        run.glyphs.push(glyph);
    }
    run.runes.count += 1;
}

/// A run holding nothing but the placeholder for a lone terminator.
pub fn newline_run(
    direction: Direction,
    face: FaceId,
    cluster_index: usize,
    metrics: ScaledFontMetrics,
) -> Run {
    Run {
        direction,
        face,
        px_per_em: metrics.px_per_em,
        glyphs: vec![Glyph::newline(cluster_index)],
        runes: RuneRange::new(cluster_index, 1),
        advance: 0.0,
        ascent: metrics.ascent,
        descent: metrics.descent,
        visual_position: 0,
    }
}
