use crate::error::InvariantViolation;
use crate::layout::Line;

/// Fill `line.visual_order` and every run's `visual_position`.
///
/// Runs are direction-uniform, so two embedding levels are enough: lay
/// the runs out in base-direction order, then undo the reversal for every
/// maximal group of runs whose direction opposes the base. This is UAX-9
/// rule L2 restricted to levels 0 and 1 (or 1 and 2 for right-to-left
/// paragraphs).
pub fn compute_visual_order(line: &mut Line) {
    let base = line.direction;
    let mut order: Vec<usize> = (0..line.runs.len()).collect();
    if base.is_rtl() {
        order.reverse();
    }

    let mut start = 0;
    while start < order.len() {
        if line.runs[order[start]].direction == base {
            start += 1;
            continue;
        }
        let mut end = start + 1;
        while end < order.len() && line.runs[order[end]].direction != base {
            end += 1;
        }
        order[start..end].reverse();
        start = end;
    }

    for (position, &run) in order.iter().enumerate() {
        line.runs[run].visual_position = position;
    }
    line.visual_order = order;
}

/// Visual order of items with arbitrary embedding levels (UAX-9 L2).
///
/// From the highest level down to the lowest odd level, every maximal
/// sequence of items at that level or above is reversed. `result[p]` is
/// the logical index of the item shown at position `p`.
pub fn reorder_levels(levels: &[u8]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..levels.len()).collect();
    let Some(&max_level) = levels.iter().max() else {
        return order;
    };
    let lowest_odd = levels
        .iter()
        .copied()
        .filter(|level| level & 1 == 1)
        .min()
        .unwrap_or(max_level + 1);

    for level in (lowest_odd..=max_level).rev() {
        let mut i = 0;
        while i < order.len() {
            if levels[order[i]] < level {
                i += 1;
                continue;
            }
            let mut end = i + 1;
            while end < order.len() && levels[order[end]] >= level {
                end += 1;
            }
            order[i..end].reverse();
            i = end;
        }
    }
    order
}

/// Verify that `line.visual_order` is a permutation of the line's runs and
/// agrees with every run's `visual_position`.
pub fn check_visual_order(line: &Line) -> Result<(), InvariantViolation> {
    let len = line.runs.len();
    let invalid = || InvariantViolation::VisualOrder {
        order: line.visual_order.clone(),
        len,
    };

    if line.visual_order.len() != len {
        return Err(invalid());
    }
    let mut seen = vec![false; len];
    for &run in &line.visual_order {
        if run >= len || seen[run] {
            return Err(invalid());
        }
        seen[run] = true;
    }
    for (index, run) in line.runs.iter().enumerate() {
        if line.visual_order.get(run.visual_position) != Some(&index) {
            return Err(invalid());
        }
    }
    Ok(())
}
