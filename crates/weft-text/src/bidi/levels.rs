use core::ops::Range;

use unicode_bidi::{BidiInfo, LTR_LEVEL, Level, RTL_LEVEL};

use crate::shaping::Direction;

/// A maximal span of runes resolving to one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionRun {
    /// Rune range within the analyzed text.
    pub runes: Range<usize>,
    pub direction: Direction,
}

fn base_level(base: Direction) -> Level {
    match base {
        Direction::LeftToRight => LTR_LEVEL,
        Direction::RightToLeft => RTL_LEVEL,
    }
}

/// Split one paragraph into left-to-right and right-to-left runs.
///
/// Embedding levels come from the Unicode BiDi algorithm (UAX-9) with the
/// paragraph level forced to `base`; only their parity is kept, so numbers
/// inside right-to-left text come back as left-to-right runs.
pub fn direction_runs(text: &[char], base: Direction) -> Vec<DirectionRun> {
    if text.is_empty() {
        return Vec::new();
    }

    let source: String = text.iter().collect();
    let info = BidiInfo::new(&source, Some(base_level(base)));

    let mut runs: Vec<DirectionRun> = Vec::new();
    for (rune, (byte, _)) in source.char_indices().enumerate() {
        let direction = if info.levels[byte].is_rtl() {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        };
        match runs.last_mut() {
            Some(run) if run.direction == direction => run.runes.end = rune + 1,
            _ => runs.push(DirectionRun {
                runes: rune..rune + 1,
                direction,
            }),
        }
    }
    runs
}
