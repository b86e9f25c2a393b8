use crate::layout::Line;

/// Prefix sums over line rune counts for O(log n) rune/line lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixSums {
    /// Rune offset at the start of every line.
    rune_offsets: Vec<usize>,
    /// Runes covered by all lines.
    total: usize,
}

impl PrefixSums {
    pub fn new(lines: &[Line]) -> Self {
        let mut rune_offsets = Vec::with_capacity(lines.len());
        let mut total = 0usize;
        for line in lines {
            rune_offsets.push(total);
            total += line.rune_count;
        }
        Self {
            rune_offsets,
            total,
        }
    }

    /// Index of the line containing rune `offset`.
    ///
    /// The end of the text belongs to the last line. Lines covering no
    /// runes are skipped in favor of the next non-empty line.
    pub fn line_at_rune(&self, offset: usize) -> Option<usize> {
        if self.rune_offsets.is_empty() || offset > self.total {
            return None;
        }
        if offset == self.total {
            return Some(self.rune_offsets.len() - 1);
        }
        Some(self.rune_offsets.partition_point(|&start| start <= offset) - 1)
    }

    /// Rune offset at the start of line `index`.
    pub fn rune_offset_at_line(&self, index: usize) -> Option<usize> {
        self.rune_offsets.get(index).copied()
    }

    /// Total number of runes covered by all lines.
    pub fn total_runes(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(counts: &[usize]) -> Vec<Line> {
        counts
            .iter()
            .map(|&rune_count| Line {
                rune_count,
                ..Line::default()
            })
            .collect()
    }

    #[test]
    fn finds_lines_by_rune() {
        let sums = PrefixSums::new(&lines(&[4, 2, 5]));
        assert_eq!(sums.total_runes(), 11);
        assert_eq!(sums.line_at_rune(0), Some(0));
        assert_eq!(sums.line_at_rune(3), Some(0));
        assert_eq!(sums.line_at_rune(4), Some(1));
        assert_eq!(sums.line_at_rune(6), Some(2));
        assert_eq!(sums.line_at_rune(11), Some(2));
        assert_eq!(sums.line_at_rune(12), None);
        assert_eq!(sums.rune_offset_at_line(2), Some(6));
        assert_eq!(sums.rune_offset_at_line(3), None);
    }

    #[test]
    fn empty_lines_are_skipped() {
        let sums = PrefixSums::new(&lines(&[0, 3]));
        assert_eq!(sums.line_at_rune(0), Some(1));

        let empty = PrefixSums::new(&lines(&[0]));
        assert_eq!(empty.line_at_rune(0), Some(0));
        assert_eq!(PrefixSums::new(&[]).line_at_rune(0), None);
    }
}
