//! Splitting a paragraph into spans that can be shaped in one request.
//!
//! A paragraph is cut wherever the resolved direction, the script or the
//! face changes. Runes of the Common and Inherited scripts (spaces,
//! punctuation, digits, combining marks) join the script before them, and
//! whitespace, control characters and marks stay with the face before
//! them, so a word and its trailing space are shaped together.

use core::ops::Range;
use std::sync::Arc;

use unicode_script::{Script, UnicodeScript};

use crate::bidi::direction_runs;
use crate::font::Face;
use crate::shaping::Direction;

/// A direction-, script- and face-uniform span of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Rune range within the paragraph.
    pub runes: Range<usize>,
    pub direction: Direction,
    pub script: Script,
    /// Index of the shaping face within the fallback chain.
    pub face: usize,
}

/// Items of `text` in logical order.
///
/// Each rune is shaped with the first face of `faces` that covers it; a
/// rune no face covers falls back to the first face.
pub fn itemize<F: Face>(text: &[char], base: Direction, faces: &[Arc<F>]) -> Vec<Item> {
    let scripts = resolve_scripts(text);
    let face_indices = resolve_faces(text, faces);

    let mut items = Vec::new();
    for run in direction_runs(text, base) {
        let mut start = run.runes.start;
        for rune in run.runes.start + 1..=run.runes.end {
            if rune == run.runes.end
                || scripts[rune] != scripts[start]
                || face_indices[rune] != face_indices[start]
            {
                items.push(Item {
                    runes: start..rune,
                    direction: run.direction,
                    script: scripts[start],
                    face: face_indices[start],
                });
                start = rune;
            }
        }
    }
    log::trace!("itemized {} runes into {} items", text.len(), items.len());
    items
}

fn is_neutral(script: Script) -> bool {
    matches!(script, Script::Common | Script::Inherited | Script::Unknown)
}

fn resolve_scripts(text: &[char]) -> Vec<Script> {
    let mut scripts: Vec<Script> = text.iter().map(|ch| ch.script()).collect();

    let mut current = None;
    for script in &mut scripts {
        if !is_neutral(*script) {
            current = Some(*script);
        } else if let Some(previous) = current {
            *script = previous;
        }
    }

    // Leading neutral runes take the first real script.
    if let Some(first) = scripts.iter().copied().find(|script| !is_neutral(*script)) {
        for script in scripts.iter_mut().take_while(|script| is_neutral(**script)) {
            *script = first;
        }
    }
    scripts
}

fn resolve_faces<F: Face>(text: &[char], faces: &[Arc<F>]) -> Vec<usize> {
    let mut current: Option<usize> = None;
    let resolved: Vec<Option<usize>> = text
        .iter()
        .map(|&ch| {
            let script = ch.script();
            let face = if ch.is_whitespace() || ch.is_control() || script == Script::Inherited {
                current
            } else if script == Script::Common
                && current.is_some_and(|index| faces[index].has_glyph(ch))
            {
                current
            } else {
                Some(faces.iter().position(|face| face.has_glyph(ch)).unwrap_or_else(|| {
                    log::warn!(
                        "no face covers {ch:?} (U+{:04X}), using the primary face",
                        ch as u32
                    );
                    0
                }))
            };
            if face.is_some() {
                current = face;
            }
            face
        })
        .collect();

    let first = resolved.iter().flatten().next().copied().unwrap_or(0);
    resolved.into_iter().map(|face| face.unwrap_or(first)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestFace;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn faces() -> Vec<Arc<TestFace>> {
        vec![Arc::new(TestFace::latin()), Arc::new(TestFace::arabic())]
    }

    #[test]
    fn uniform_text_is_one_item() {
        let items = itemize(&chars("hello world"), Direction::LeftToRight, &faces());
        assert_eq!(
            items,
            vec![Item {
                runes: 0..11,
                direction: Direction::LeftToRight,
                script: Script::Latin,
                face: 0,
            }]
        );
    }

    #[test]
    fn bidi_text_switches_direction_and_face() {
        let items = itemize(&chars("abc سلام def"), Direction::LeftToRight, &faces());
        assert_eq!(items.first().map(|item| item.runes.clone()), Some(0..4));
        assert_eq!(items.last().map(|item| item.runes.clone()), Some(9..12));

        let arabic = &items[1];
        assert_eq!(arabic.runes, 4..8);
        assert_eq!(arabic.direction, Direction::RightToLeft);
        assert_eq!(arabic.script, Script::Arabic);
        assert_eq!(arabic.face, 1);

        let last = &items[items.len() - 1];
        assert_eq!(
            (last.direction, last.script, last.face),
            (Direction::LeftToRight, Script::Latin, 0)
        );

        // Items tile the paragraph in logical order.
        for pair in items.windows(2) {
            assert_eq!(pair[0].runes.end, pair[1].runes.start);
        }
    }

    #[test]
    fn digits_in_right_to_left_text_stay_with_the_arabic_face() {
        let items = itemize(&chars("مرحبا 123"), Direction::RightToLeft, &faces());
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].runes, 0..6);
        assert_eq!(items[0].direction, Direction::RightToLeft);
        assert_eq!(items[1].runes, 6..9);
        assert_eq!(items[1].direction, Direction::LeftToRight);
        assert_eq!(items[1].script, Script::Arabic);
        assert_eq!(items[1].face, 1);
    }

    #[test]
    fn leading_neutrals_take_the_following_script_and_face() {
        let items = itemize(&chars("  سلام"), Direction::LeftToRight, &faces());
        assert!(items.iter().all(|item| item.face == 1));
        assert!(items.iter().all(|item| item.script == Script::Arabic));
        assert_eq!(items.last().map(|item| item.runes.end), Some(6));
    }

    #[test]
    fn uncovered_runes_use_the_primary_face() {
        let faces = vec![Arc::new(TestFace::arabic())];
        let items = itemize(&chars("ab"), Direction::LeftToRight, &faces);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].face, 0);
    }

    #[test]
    fn empty_text_has_no_items() {
        assert!(itemize(&[], Direction::RightToLeft, &faces()).is_empty());
    }
}
