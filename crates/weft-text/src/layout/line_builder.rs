use core::ops::Range;

use crate::bidi::{check_visual_order, compute_visual_order};
use crate::error::InvariantViolation;
use crate::font::ScaledFontMetrics;
use crate::layout::line_breaker::break_positions;
use crate::layout::{Bounds, Line, Point, WrapMode};
use crate::shaping::{Direction, Run, RuneRange};

/// One cluster of a paragraph, listed in logical order.
#[derive(Debug, Clone)]
struct ClusterSlot {
    /// Index of the run owning the cluster.
    run: usize,
    /// Glyphs of the cluster within its run.
    glyphs: Range<usize>,
    runes: RuneRange,
    advance: f32,
    /// Whitespace clusters may hang past the maximum width.
    hangs: bool,
}

/// Greedy line breaker over the shaped runs of one paragraph.
#[derive(Debug, Clone, Copy)]
pub struct LineBuilder {
    max_width: f32,
    wrap: WrapMode,
}

impl LineBuilder {
    pub fn new(max_width: f32, wrap: WrapMode) -> Self {
        Self { max_width, wrap }
    }

    /// Split the runs of one paragraph into lines.
    ///
    /// `text` is the paragraph content, starting at rune `offset` of the
    /// laid-out text, and `runs` cover it in logical order. Lines are
    /// filled greedily; a line ends at the last break opportunity before
    /// the first cluster that would overflow `max_width`, or at that
    /// cluster when there is no opportunity. Multi-glyph clusters are never
    /// split and a cluster wider than `max_width` gets a line of its own.
    pub fn break_runs(&self, text: &[char], offset: usize, runs: &[Run]) -> Vec<Vec<Run>> {
        if runs.is_empty() {
            return Vec::new();
        }
        let total: f32 = runs.iter().map(|run| run.advance).sum();
        if self.wrap == WrapMode::NoWrap || total <= self.max_width {
            return vec![runs.to_vec()];
        }

        let slots = cluster_slots(text, offset, runs);
        let opportunities = match self.wrap {
            WrapMode::BreakWord => break_positions(text),
            WrapMode::BreakAll | WrapMode::NoWrap => Vec::new(),
        };
        let can_break = |slot: &ClusterSlot| match self.wrap {
            WrapMode::NoWrap => false,
            WrapMode::BreakAll => true,
            WrapMode::BreakWord => slot
                .runes
                .offset
                .checked_sub(offset)
                .and_then(|rune| opportunities.get(rune))
                .copied()
                .unwrap_or(false),
        };

        let mut lines = Vec::new();
        let mut start = 0;
        while start < slots.len() {
            let end = start + self.fit(&slots[start..], &can_break);
            log::trace!("line break at rune {}", slots[end - 1].runes.end());
            lines.push(cut(runs, &slots[start..end]));
            start = end;
        }
        lines
    }

    /// Number of slots, at least one, that go on the next line.
    fn fit(&self, slots: &[ClusterSlot], can_break: &impl Fn(&ClusterSlot) -> bool) -> usize {
        let mut width = 0.0;
        let mut last_break = None;
        for (index, slot) in slots.iter().enumerate() {
            if index == 0 {
                if !slot.hangs && slot.advance > self.max_width {
                    log::warn!(
                        "cluster at rune {} is {}px wide, more than the {}px available",
                        slot.runes.offset,
                        slot.advance,
                        self.max_width
                    );
                }
            } else {
                if can_break(slot) {
                    last_break = Some(index);
                }
                if !slot.hangs && width + slot.advance > self.max_width {
                    return match self.wrap {
                        WrapMode::BreakWord => last_break.unwrap_or(index),
                        WrapMode::BreakAll | WrapMode::NoWrap => index,
                    };
                }
            }
            width += slot.advance;
        }
        slots.len()
    }
}

/// Clusters of `runs` in logical order.
fn cluster_slots(text: &[char], offset: usize, runs: &[Run]) -> Vec<ClusterSlot> {
    let is_space = |rune: usize| {
        rune.checked_sub(offset)
            .and_then(|index| text.get(index))
            .is_some_and(|ch| ch.is_whitespace())
    };

    let mut slots = Vec::new();
    for (index, run) in runs.iter().enumerate() {
        let first_slot = slots.len();
        let mut next_glyph = 0;
        for cluster in run
            .glyphs
            .chunk_by(|a, b| a.cluster_index == b.cluster_index)
        {
            let head = &cluster[0];
            let runes = RuneRange::new(head.cluster_index, head.rune_count);
            slots.push(ClusterSlot {
                run: index,
                glyphs: next_glyph..next_glyph + cluster.len(),
                runes,
                advance: cluster.iter().map(|glyph| glyph.x_advance).sum(),
                hangs: (runes.offset..runes.end()).all(is_space),
            });
            next_glyph += cluster.len();
        }
        // Right-to-left glyphs are stored in visual order.
        if run.direction.is_rtl() {
            slots[first_slot..].reverse();
        }
    }
    slots
}

/// The runs covering `slots`, one per source run.
fn cut(runs: &[Run], slots: &[ClusterSlot]) -> Vec<Run> {
    slots
        .chunk_by(|a, b| a.run == b.run)
        .map(|group| {
            let run = &runs[group[0].run];
            let first = group.iter().map(|slot| slot.glyphs.start).min().unwrap_or(0);
            let last = group.iter().map(|slot| slot.glyphs.end).max().unwrap_or(0);
            let rune_offset = group
                .iter()
                .map(|slot| slot.runes.offset)
                .min()
                .unwrap_or(run.runes.offset);
            let glyphs = run.glyphs[first..last].to_vec();

            Run {
                direction: run.direction,
                face: run.face,
                px_per_em: run.px_per_em,
                advance: glyphs.iter().map(|glyph| glyph.x_advance).sum(),
                runes: RuneRange::new(rune_offset, group.iter().map(|slot| slot.runes.count).sum()),
                glyphs,
                ascent: run.ascent,
                descent: run.descent,
                visual_position: 0,
            }
        })
        .collect()
}

/// Assemble a line from runs given in logical order.
///
/// Rune offsets are rewritten relative to the line, the visual order is
/// resolved and checked, and the bounds are the union of the run ink boxes.
/// A line without runs takes its vertical extent from `metrics`.
pub fn to_line(
    mut runs: Vec<Run>,
    direction: Direction,
    metrics: ScaledFontMetrics,
    line_height: f32,
) -> Result<Line, InvariantViolation> {
    let mut rune_count = 0;
    let mut width = 0.0;
    for run in &mut runs {
        if run.runes.count == 0 && run.advance != 0.0 {
            return Err(InvariantViolation::ZeroLengthRun {
                advance: run.advance,
            });
        }
        run.runes.offset = rune_count;
        rune_count += run.runes.count;
        width += run.advance.abs();
    }

    let mut line = Line {
        runs,
        direction,
        width,
        rune_count,
        line_height,
        ..Line::default()
    };
    compute_visual_order(&mut line);
    check_visual_order(&line)?;

    let empty = Bounds::new(
        Point::new(0.0, -metrics.ascent),
        Point::new(0.0, metrics.descent),
    );
    line.bounds = line
        .runs
        .iter()
        .zip(line.run_positions())
        .map(|(run, x)| {
            Bounds::new(
                Point::new(x, -run.ascent),
                Point::new(x + run.advance.abs(), run.descent),
            )
        })
        .reduce(|a, b| a.union(&b))
        .unwrap_or(empty);
    line.ascent = -line.bounds.min.y;
    line.descent = line.bounds.max.y;
    Ok(line)
}

/// Width every line of a document is aligned to: the widest line rounded
/// up to whole pixels, clamped into `min_width..=max_width`.
pub fn align_width(min_width: f32, max_width: f32, lines: &[Line]) -> f32 {
    let content = lines.iter().map(|line| line.width).fold(0.0, f32::max).ceil();
    min_width.max(content.min(max_width))
}
