use crate::layout::{Line, PrefixSums};

/// Laid-out text: lines from top to bottom plus the width they align to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    lines: Vec<Line>,
    align_width: f32,
    prefix_sums: PrefixSums,
}

impl Document {
    pub fn new(lines: Vec<Line>, align_width: f32) -> Self {
        let prefix_sums = PrefixSums::new(&lines);
        Self {
            lines,
            align_width,
            prefix_sums,
        }
    }

    /// All lines, top to bottom.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn align_width(&self) -> f32 {
        self.align_width
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Runes covered by all lines, synthetic newlines included.
    pub fn rune_count(&self) -> usize {
        self.prefix_sums.total_runes()
    }

    /// Index of the line containing rune `offset`.
    pub fn line_at_rune(&self, offset: usize) -> Option<usize> {
        self.prefix_sums.line_at_rune(offset)
    }

    /// Rune offset of the first rune of line `index`.
    pub fn rune_offset_at_line(&self, index: usize) -> Option<usize> {
        self.prefix_sums.rune_offset_at_line(index)
    }

    /// Height from the top of the first line to the bottom of the last.
    pub fn height(&self) -> f32 {
        match (self.lines.first(), self.lines.last()) {
            (Some(first), Some(last)) => last.bottom() - first.top(),
            _ => 0.0,
        }
    }

    /// Append the lines of `other` below the lines of `self`.
    ///
    /// The appended lines keep their spacing; the first of them lands one
    /// line height below the current last baseline. The align width
    /// becomes the larger of the two.
    pub fn append(&mut self, other: Document) {
        let Some(last) = self.lines.last() else {
            let align_width = self.align_width.max(other.align_width);
            *self = other;
            self.align_width = align_width;
            return;
        };
        let Some(first) = other.lines.first() else {
            self.align_width = self.align_width.max(other.align_width);
            return;
        };

        let shift = last.y_offset + last.line_height - first.y_offset;
        log::debug!(
            "appending {} lines below {} lines, shifted by {}px",
            other.lines.len(),
            self.lines.len(),
            shift
        );
        self.lines.extend(other.lines.into_iter().map(|mut line| {
            line.y_offset += shift;
            line
        }));
        self.align_width = self.align_width.max(other.align_width);
        self.prefix_sums = PrefixSums::new(&self.lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(offsets: &[f32], line_height: f32, align_width: f32) -> Document {
        let lines = offsets
            .iter()
            .map(|&y_offset| Line {
                y_offset,
                line_height,
                rune_count: 2,
                ..Line::default()
            })
            .collect();
        Document::new(lines, align_width)
    }

    #[test]
    fn append_restacks_offsets() {
        let mut dst = document(&[10.0, 22.0], 12.0, 40.0);
        let src = document(&[8.0, 18.0, 28.0], 10.0, 70.0);
        dst.append(src);

        let offsets: Vec<f32> = dst.lines().iter().map(|line| line.y_offset).collect();
        assert_eq!(offsets, vec![10.0, 22.0, 34.0, 44.0, 54.0]);
        assert_eq!(dst.align_width(), 70.0);
        assert_eq!(dst.rune_count(), 10);
        assert_eq!(dst.line_at_rune(5), Some(2));
    }

    #[test]
    fn append_to_self_is_strictly_increasing() {
        let mut doc = document(&[10.0, 22.0, 34.0], 12.0, 50.0);
        doc.append(doc.clone());
        let offsets: Vec<f32> = doc.lines().iter().map(|line| line.y_offset).collect();
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]), "{offsets:?}");
        assert_eq!(doc.align_width(), 50.0);
    }

    #[test]
    fn append_to_empty_takes_other() {
        let mut doc = Document::default();
        let other = document(&[10.0], 12.0, 30.0);
        doc.append(other.clone());
        assert_eq!(doc, other);

        doc.append(Document::new(Vec::new(), 90.0));
        assert_eq!(doc.lines().len(), 1);
        assert_eq!(doc.align_width(), 90.0);
    }

    #[test]
    fn append_to_empty_keeps_wider_align_width() {
        let mut doc = Document::new(Vec::new(), 90.0);
        let other = document(&[10.0], 12.0, 20.0);
        doc.append(other.clone());
        assert_eq!(doc.lines(), other.lines());
        assert_eq!(doc.align_width(), 90.0);
        assert_eq!(doc.line_at_rune(0), Some(0));

        let mut doc = Document::new(Vec::new(), 5.0);
        doc.append(other);
        assert_eq!(doc.align_width(), 20.0);
    }
}
