use core::ops::Range;
use std::sync::Arc;

use weft_config::WeftConfig;

use crate::error::{LayoutError, Result};
use crate::font::{Face, FaceId, FontDescriptor, FontFace, FontRegistry, SharedRegistry, Typeface};
use crate::layout::itemize::itemize;
use crate::layout::line_builder::{LineBuilder, align_width, to_line};
use crate::layout::{Document, LayoutOptions, Locale, Parameters};
use crate::shaping::{
    HarfrustShaper, RuneRange, ShapeRequest, Shaper, adapt_run, newline_run, synthesize_newline,
};

/// Runes ending a paragraph: line feed and the paragraph separator.
pub fn is_paragraph_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\u{2029}')
}

/// A paragraph of the input: its content and the terminator ending it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Paragraph {
    content: Range<usize>,
    terminator: Option<usize>,
}

/// Split `text` after every terminator.
///
/// A terminator at the very end does not open another paragraph; empty
/// input is one empty paragraph.
fn split_paragraphs(text: &[char]) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut start = 0;
    for (index, &ch) in text.iter().enumerate() {
        if is_paragraph_terminator(ch) {
            paragraphs.push(Paragraph {
                content: start..index,
                terminator: Some(index),
            });
            start = index + 1;
        }
    }
    if start < text.len() || paragraphs.is_empty() {
        paragraphs.push(Paragraph {
            content: start..text.len(),
            terminator: None,
        });
    }
    paragraphs
}

fn validate(params: &Parameters, min_width: f32, max_width: f32) -> Result<()> {
    for width in [min_width, max_width] {
        if width.is_nan() || width < 0.0 {
            return Err(LayoutError::InvalidWidth(width));
        }
    }
    if min_width.is_infinite() {
        return Err(LayoutError::InvalidWidth(min_width));
    }
    if min_width > max_width {
        return Err(LayoutError::InvalidWidthRange {
            min: min_width,
            max: max_width,
        });
    }
    if !params.px_per_em.is_finite() || params.px_per_em <= 0.0 {
        return Err(LayoutError::InvalidFontSize(params.px_per_em));
    }
    let line_height = params.line_height();
    if !line_height.is_finite() || line_height <= 0.0 {
        return Err(LayoutError::InvalidLineHeight(line_height));
    }
    Ok(())
}

/// Shapes text with the faces of a shared registry and breaks it into
/// lines.
///
/// The engine is cheap to share: layout only takes the registry's read
/// lock while resolving the fallback chain, and loading a face takes the
/// write lock.
pub struct LayoutEngine<S: Shaper> {
    shaper: S,
    fonts: SharedRegistry<S::Face>,
}

impl<S: Shaper> LayoutEngine<S> {
    /// An engine with an empty registry of its own.
    pub fn new(shaper: S) -> Self {
        Self::with_registry(shaper, FontRegistry::shared())
    }

    /// An engine drawing faces from `fonts`, which may be shared with
    /// other engines.
    pub fn with_registry(shaper: S, fonts: SharedRegistry<S::Face>) -> Self {
        Self { shaper, fonts }
    }

    pub fn registry(&self) -> &SharedRegistry<S::Face> {
        &self.fonts
    }

    /// Make `face` available under `descriptor`.
    pub fn load(&self, descriptor: FontDescriptor, face: S::Face) -> FaceId {
        self.fonts.write().load(descriptor, Arc::new(face))
    }

    /// Apply the `[fonts]` section of `config` to the registry and return
    /// the layout options of its `[text]` section.
    pub fn configure(&self, config: &WeftConfig) -> LayoutOptions {
        let fallback = config.fonts.fallback.iter();
        self.fonts
            .write()
            .set_fallback_order(fallback.map(|name| Typeface::new(name.as_str())));
        LayoutOptions::from_config(&config.text)
    }

    /// Lay out `text` with the given options.
    pub fn layout_with(&self, options: &LayoutOptions, text: &str) -> Result<Document> {
        self.layout_string(
            &options.params,
            options.min_width,
            options.max_width,
            &options.locale,
            text,
        )
    }

    /// Lay out a string; see [`layout_runes`](Self::layout_runes).
    pub fn layout_string(
        &self,
        params: &Parameters,
        min_width: f32,
        max_width: f32,
        locale: &Locale,
        text: &str,
    ) -> Result<Document> {
        let runes: Vec<char> = text.chars().collect();
        self.layout_runes(params, min_width, max_width, locale, &runes)
    }

    /// Shape `text` and break it into lines no wider than `max_width`.
    ///
    /// Paragraphs end at `'\n'` and `'\u{2029}'`; the terminator stays with
    /// its paragraph as a synthetic newline glyph on the paragraph's last
    /// line. Baselines start at the first line's ascent and advance by the
    /// line height. Empty input yields a single empty line.
    pub fn layout_runes(
        &self,
        params: &Parameters,
        min_width: f32,
        max_width: f32,
        locale: &Locale,
        text: &[char],
    ) -> Result<Document> {
        validate(params, min_width, max_width)?;

        let (chain, faces): (Vec<FaceId>, Vec<Arc<S::Face>>) = {
            let fonts = self.fonts.read();
            let chain = fonts.fallback_chain(&params.font);
            chain
                .iter()
                .filter_map(|&id| fonts.get(id).map(|loaded| (id, loaded.face.clone())))
                .unzip()
        };
        let (Some(&primary_id), Some(primary)) = (chain.first(), faces.first()) else {
            return Err(LayoutError::NoFonts);
        };

        let px_per_em = params.px_per_em;
        let primary_metrics = primary.metrics().scale_to_pixels(px_per_em);
        let line_height = params.line_height();
        let base = locale.direction;
        let builder = LineBuilder::new(max_width, params.wrap);
        let paragraphs = split_paragraphs(text);
        log::debug!(
            "laying out {} runes in {} paragraphs, width {}..{}, {} faces",
            text.len(),
            paragraphs.len(),
            min_width,
            max_width,
            faces.len()
        );

        let mut lines = Vec::new();
        for paragraph in &paragraphs {
            let content = &text[paragraph.content.clone()];
            let offset = paragraph.content.start;

            let mut runs = Vec::new();
            for item in itemize(content, base, &faces) {
                let face = &faces[item.face];
                let runes = RuneRange::new(offset + item.runes.start, item.runes.len());
                let request = ShapeRequest {
                    text: &content[item.runes.clone()],
                    rune_offset: runes.offset,
                    direction: item.direction,
                    script: item.script,
                    language: &locale.language,
                    px_per_em,
                };
                let glyphs = self.shaper.shape(face, &request)?;
                runs.push(adapt_run(
                    glyphs,
                    runes,
                    item.direction,
                    chain[item.face],
                    face.metrics().scale_to_pixels(px_per_em),
                )?);
            }

            let mut paragraph_lines = builder.break_runs(content, offset, &runs);
            log::trace!(
                "paragraph at rune {}: {} runs on {} lines",
                offset,
                runs.len(),
                paragraph_lines.len()
            );
            if let Some(terminator) = paragraph.terminator {
                match paragraph_lines.last_mut().and_then(|line| line.last_mut()) {
                    Some(run) => synthesize_newline(run, terminator),
                    None => paragraph_lines.push(vec![newline_run(
                        base,
                        primary_id,
                        terminator,
                        primary_metrics,
                    )]),
                }
            }
            if paragraph_lines.is_empty() {
                paragraph_lines.push(Vec::new());
            }
            for runs in paragraph_lines {
                lines.push(to_line(runs, base, primary_metrics, line_height)?);
            }
        }

        let mut y = lines.first().map_or(0.0, |line| line.ascent);
        for line in &mut lines {
            line.y_offset = y;
            y += line_height;
        }
        let align = align_width(min_width, max_width, &lines);
        Ok(Document::new(lines, align))
    }
}

impl LayoutEngine<HarfrustShaper> {
    /// An engine shaping with harfrust.
    pub fn harfrust() -> Self {
        Self::new(HarfrustShaper)
    }

    /// Load a parsed font under the family, style and weight it declares.
    pub fn load_face(&self, face: FontFace) -> FaceId {
        let descriptor = face.descriptor();
        self.load(descriptor, face)
    }
}
