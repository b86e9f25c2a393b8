use weft_config::{AlignSetting, DirectionSetting, StyleSetting, TextConfig, WrapSetting};

use crate::font::{FontDescriptor, Style, Weight};
use crate::shaping::Direction;

/// Line wrapping strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WrapMode {
    /// Do not perform automatic wrapping (only explicit newlines).
    NoWrap,
    /// Wrap at line break opportunities where possible, falling back to
    /// cluster boundaries for long words.
    #[default]
    BreakWord,
    /// Allow breaking between all clusters (aggressive).
    BreakAll,
}

/// Horizontal placement of a line inside the aligned box.
///
/// `Start` and `End` follow the paragraph direction: `Start` is the left
/// edge for left-to-right text and the right edge for right-to-left text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Start,
    Middle,
    End,
}

/// Language and base direction of the text being laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// BCP 47 language tag.
    pub language: String,
    pub direction: Direction,
}

impl Locale {
    pub fn new(language: impl Into<String>, direction: Direction) -> Self {
        Self {
            language: language.into(),
            direction,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en", Direction::LeftToRight)
    }
}

/// Shaping parameters, fixed for one layout call.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    /// Requested font; fallback faces are derived from it.
    pub font: FontDescriptor,
    /// Font size in pixels per em.
    pub px_per_em: f32,
    /// Baseline-to-baseline distance before scaling; `px_per_em` if unset.
    pub line_height: Option<f32>,
    /// Multiplier applied to the line height.
    pub line_height_scale: f32,
    pub wrap: WrapMode,
    pub alignment: Alignment,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            font: FontDescriptor::default(),
            px_per_em: 16.0,
            line_height: None,
            line_height_scale: 1.2,
            wrap: WrapMode::BreakWord,
            alignment: Alignment::Start,
        }
    }
}

impl Parameters {
    /// Baseline-to-baseline distance in pixels.
    pub fn line_height(&self) -> f32 {
        self.line_height.unwrap_or(self.px_per_em) * self.line_height_scale
    }
}

/// Everything a layout call needs besides the text.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    pub params: Parameters,
    pub min_width: f32,
    pub max_width: f32,
    pub locale: Locale,
}

impl LayoutOptions {
    /// Options described by the `[text]` section of a configuration file.
    ///
    /// Values are taken as-is; invalid ones are reported when the options
    /// are used for layout.
    pub fn from_config(config: &TextConfig) -> Self {
        let style = match config.style {
            StyleSetting::Regular => Style::Regular,
            StyleSetting::Italic => Style::Italic,
        };
        let direction = match config.direction {
            DirectionSetting::Ltr => Direction::LeftToRight,
            DirectionSetting::Rtl => Direction::RightToLeft,
        };
        let wrap = match config.wrap {
            WrapSetting::None => WrapMode::NoWrap,
            WrapSetting::Word => WrapMode::BreakWord,
            WrapSetting::All => WrapMode::BreakAll,
        };
        let alignment = match config.alignment {
            AlignSetting::Start => Alignment::Start,
            AlignSetting::Middle => Alignment::Middle,
            AlignSetting::End => Alignment::End,
        };

        Self {
            params: Parameters {
                font: FontDescriptor::new(config.typeface.as_str(), style, Weight(config.weight)),
                px_per_em: config.px_per_em,
                line_height: config.line_height,
                line_height_scale: config.line_height_scale,
                wrap,
                alignment,
            },
            min_width: config.min_width,
            max_width: config.max_width,
            locale: Locale::new(config.language.clone(), direction),
        }
    }
}
