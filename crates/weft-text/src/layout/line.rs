use crate::layout::{Alignment, Bounds};
use crate::shaping::{Direction, Run};

/// A single visual line of text.
///
/// Runs are kept in logical order; `visual_order[p]` is the logical index
/// of the run drawn at screen position `p`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    /// Runs in logical order. Their rune offsets are relative to the line.
    pub runs: Vec<Run>,
    /// Logical run index for every screen position, left to right.
    pub visual_order: Vec<usize>,
    /// Base direction of the paragraph this line belongs to.
    pub direction: Direction,
    /// Sum of the absolute advances of all runs, in pixels.
    pub width: f32,
    /// Ink rectangle relative to the line origin on the baseline.
    pub bounds: Bounds,
    /// Runes covered by the line, a synthetic newline included.
    pub rune_count: usize,
    /// Baseline position from the top of the document, in pixels.
    pub y_offset: f32,
    /// Maximum ascent of the line above its baseline.
    pub ascent: f32,
    /// Maximum descent of the line below its baseline.
    pub descent: f32,
    /// Distance to the baseline of the next line.
    pub line_height: f32,
}

impl Line {
    /// Runs in screen order, left to right.
    pub fn visual_runs(&self) -> impl Iterator<Item = &Run> + '_ {
        self.visual_order.iter().filter_map(|&index| self.runs.get(index))
    }

    /// Pen x position of every run relative to the line start, indexed by
    /// logical run index.
    pub fn run_positions(&self) -> Vec<f32> {
        let mut positions = vec![0.0; self.runs.len()];
        let mut x = 0.0;
        for &index in &self.visual_order {
            if let Some(run) = self.runs.get(index) {
                positions[index] = x;
                x += run.advance.abs();
            }
        }
        positions
    }

    /// Horizontal offset of this line inside a box `align_width` wide.
    pub fn align_offset(&self, alignment: Alignment, align_width: f32) -> f32 {
        let free = (align_width - self.width).max(0.0);
        match (alignment, self.direction) {
            (Alignment::Middle, _) => free / 2.0,
            (Alignment::Start, Direction::LeftToRight)
            | (Alignment::End, Direction::RightToLeft) => 0.0,
            (Alignment::Start, Direction::RightToLeft)
            | (Alignment::End, Direction::LeftToRight) => free,
        }
    }

    /// Whether the line ends with an explicit terminator.
    pub fn has_newline(&self) -> bool {
        self.runs.last().is_some_and(|run| run.newline().is_some())
    }

    /// Top of the ink rectangle in document coordinates.
    pub fn top(&self) -> f32 {
        self.y_offset + self.bounds.min.y
    }

    /// Bottom of the ink rectangle in document coordinates.
    pub fn bottom(&self) -> f32 {
        self.y_offset + self.bounds.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidi::compute_visual_order;

    fn run(direction: Direction, advance: f32) -> Run {
        Run {
            direction,
            advance,
            ..Run::default()
        }
    }

    fn line(base: Direction, runs: Vec<Run>) -> Line {
        let width = runs.iter().map(|run| run.advance.abs()).sum();
        let mut line = Line {
            runs,
            direction: base,
            width,
            ..Line::default()
        };
        compute_visual_order(&mut line);
        line
    }

    #[test]
    fn runs_are_positioned_in_screen_order() {
        let line = line(
            Direction::LeftToRight,
            vec![
                run(Direction::LeftToRight, 10.0),
                run(Direction::RightToLeft, 20.0),
                run(Direction::RightToLeft, 30.0),
            ],
        );
        let advances: Vec<f32> = line.visual_runs().map(|run| run.advance).collect();
        assert_eq!(advances, vec![10.0, 30.0, 20.0]);
        assert_eq!(line.run_positions(), vec![0.0, 40.0, 10.0]);
    }

    #[test]
    fn alignment_follows_base_direction() {
        let ltr = line(Direction::LeftToRight, vec![run(Direction::LeftToRight, 60.0)]);
        assert_eq!(ltr.align_offset(Alignment::Start, 100.0), 0.0);
        assert_eq!(ltr.align_offset(Alignment::End, 100.0), 40.0);
        assert_eq!(ltr.align_offset(Alignment::Middle, 100.0), 20.0);

        let rtl = line(Direction::RightToLeft, vec![run(Direction::RightToLeft, 60.0)]);
        assert_eq!(rtl.align_offset(Alignment::Start, 100.0), 40.0);
        assert_eq!(rtl.align_offset(Alignment::End, 100.0), 0.0);

        // Overflowing lines stick to the left edge.
        assert_eq!(rtl.align_offset(Alignment::Start, 50.0), 0.0);
    }
}
