use unicode_linebreak::{BreakOpportunity, linebreaks};

/// Kind of line break at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreakKind {
    /// Required line break (e.g., explicit newline).
    Mandatory,
    /// Optional line break opportunity.
    Opportunity,
}

/// A line break opportunity in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBreak {
    /// Rune offset *after* the break.
    pub offset: usize,
    /// Break kind (mandatory vs optional).
    pub kind: LineBreakKind,
}

/// Compute all line break opportunities in `text` using UAX-14 via the
/// `unicode-linebreak` crate.
///
/// Offsets are in runes. The end of text is reported as a mandatory break.
pub fn compute_line_breaks(text: &[char]) -> Vec<LineBreak> {
    let source: String = text.iter().collect();
    let mut rune = 0;
    let mut bytes = source.char_indices().map(|(byte, _)| byte).peekable();

    linebreaks(&source)
        .map(|(byte_offset, opportunity)| {
            while bytes.next_if(|&byte| byte < byte_offset).is_some() {
                rune += 1;
            }
            LineBreak {
                offset: rune,
                kind: match opportunity {
                    BreakOpportunity::Mandatory => LineBreakKind::Mandatory,
                    BreakOpportunity::Allowed => LineBreakKind::Opportunity,
                },
            }
        })
        .collect()
}

/// `result[i]` tells whether a line may start at rune `i` of `text`.
///
/// Position 0 and the end of text are never reported.
pub fn break_positions(text: &[char]) -> Vec<bool> {
    let mut allowed = vec![false; text.len()];
    for brk in compute_line_breaks(text) {
        if brk.offset > 0 && brk.offset < text.len() {
            allowed[brk.offset] = true;
        }
    }
    allowed
}
