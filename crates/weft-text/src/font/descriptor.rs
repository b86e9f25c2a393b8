use core::fmt;

/// Family name of a font, compared exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Typeface(pub String);

impl Typeface {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Typeface {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Typeface {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Slant of a face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Style {
    #[default]
    Regular,
    Italic,
}

/// Weight on the usual 100-900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Weight(pub u16);

impl Weight {
    pub const THIN: Weight = Weight(100);
    pub const EXTRA_LIGHT: Weight = Weight(200);
    pub const LIGHT: Weight = Weight(300);
    pub const NORMAL: Weight = Weight(400);
    pub const MEDIUM: Weight = Weight(500);
    pub const SEMI_BOLD: Weight = Weight(600);
    pub const BOLD: Weight = Weight(700);
    pub const EXTRA_BOLD: Weight = Weight(800);
    pub const BLACK: Weight = Weight(900);
    pub const EXTRA_BLACK: Weight = Weight(950);

    /// Absolute distance between two weights.
    pub fn distance(self, other: Weight) -> u16 {
        self.0.abs_diff(other.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Requested or available font: typeface, style and weight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FontDescriptor {
    pub typeface: Typeface,
    pub style: Style,
    pub weight: Weight,
}

impl FontDescriptor {
    pub fn new(typeface: impl Into<Typeface>, style: Style, weight: Weight) -> Self {
        Self {
            typeface: typeface.into(),
            style,
            weight,
        }
    }

    /// Same style and weight, different typeface.
    pub fn with_typeface(&self, typeface: Typeface) -> Self {
        Self {
            typeface,
            style: self.style,
            weight: self.weight,
        }
    }
}

/// Pick the available descriptor closest to `want`.
///
/// Only entries of the same typeface qualify. Entries of the requested style
/// are preferred; when the typeface has none, every style is considered.
/// Among the candidates the smallest weight distance wins, ties going to the
/// earliest entry. Returns `None` when the typeface is absent.
pub fn closest_font<'a>(
    want: &FontDescriptor,
    available: &'a [FontDescriptor],
) -> Option<&'a FontDescriptor> {
    closest_index(want, available.iter()).map(|idx| &available[idx])
}

/// Index form of [`closest_font`] over any descriptor sequence.
pub(crate) fn closest_index<'a>(
    want: &FontDescriptor,
    available: impl Iterator<Item = &'a FontDescriptor> + Clone,
) -> Option<usize> {
    let same_typeface = available
        .enumerate()
        .filter(|(_, font)| font.typeface == want.typeface);

    let style_matches = same_typeface
        .clone()
        .any(|(_, font)| font.style == want.style);

    same_typeface
        .filter(|(_, font)| !style_matches || font.style == want.style)
        // min_by_key keeps the first of equal keys.
        .min_by_key(|(_, font)| font.weight.distance(want.weight))
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK: &str = "MockFace";
    const TEST: &str = "TestFace";
    const ANOTHER: &str = "AnotherFace";

    fn font(typeface: &str, style: Style, weight: Weight) -> FontDescriptor {
        FontDescriptor::new(typeface, style, weight)
    }

    #[test]
    fn closest_by_weight() {
        let fonts = [
            font(MOCK, Style::Regular, Weight::NORMAL),
            font(MOCK, Style::Regular, Weight::LIGHT),
            font(MOCK, Style::Regular, Weight::BOLD),
            font(MOCK, Style::Italic, Weight::THIN),
        ];
        let cases = [
            (Weight::NORMAL, Weight::NORMAL),
            (Weight::LIGHT, Weight::LIGHT),
            (Weight::BOLD, Weight::BOLD),
            (Weight::THIN, Weight::LIGHT),
            (Weight::EXTRA_LIGHT, Weight::LIGHT),
            (Weight::MEDIUM, Weight::NORMAL),
            (Weight::SEMI_BOLD, Weight::BOLD),
            (Weight::EXTRA_BLACK, Weight::BOLD),
        ];
        for (lookup, expected) in cases {
            let want = font(MOCK, Style::Regular, lookup);
            let got = closest_font(&want, &fonts)
                .unwrap_or_else(|| panic!("expected a match for {lookup:?}"));
            assert_eq!(got.weight, expected, "lookup {lookup:?}");
        }
    }

    #[test]
    fn closest_by_style_and_typeface() {
        let fonts = [
            font(MOCK, Style::Regular, Weight::LIGHT),
            font(MOCK, Style::Regular, Weight::BOLD),
            font(MOCK, Style::Italic, Weight::NORMAL),
            font(ANOTHER, Style::Italic, Weight::BOLD),
        ];
        let cases = [
            (
                font(MOCK, Style::Regular, Weight::LIGHT),
                font(MOCK, Style::Regular, Weight::LIGHT),
            ),
            (
                font(MOCK, Style::Italic, Weight::NORMAL),
                font(MOCK, Style::Italic, Weight::NORMAL),
            ),
            (
                font(MOCK, Style::Regular, Weight::NORMAL),
                font(MOCK, Style::Regular, Weight::LIGHT),
            ),
            (
                font(ANOTHER, Style::Italic, Weight::NORMAL),
                font(ANOTHER, Style::Italic, Weight::BOLD),
            ),
            (
                font(MOCK, Style::Italic, Weight::THIN),
                font(MOCK, Style::Italic, Weight::NORMAL),
            ),
            (
                font(MOCK, Style::Italic, Weight::BOLD),
                font(MOCK, Style::Italic, Weight::NORMAL),
            ),
        ];
        for (lookup, expected) in cases {
            assert_eq!(closest_font(&lookup, &fonts), Some(&expected), "lookup {lookup:?}");
        }
    }

    #[test]
    fn absent_typeface_is_not_found() {
        let fonts = [
            font(MOCK, Style::Regular, Weight::LIGHT),
            font(ANOTHER, Style::Italic, Weight::BOLD),
        ];
        for style in [Style::Regular, Style::Italic] {
            for weight in [Weight::THIN, Weight::NORMAL, Weight::EXTRA_BLACK] {
                assert_eq!(closest_font(&font(TEST, style, weight), &fonts), None);
            }
        }
        assert_eq!(closest_font(&font(MOCK, Style::Regular, Weight::NORMAL), &[]), None);
    }

    #[test]
    fn missing_style_falls_back_to_other_styles() {
        let fonts = [
            font(ANOTHER, Style::Italic, Weight::BOLD),
            font(ANOTHER, Style::Italic, Weight::LIGHT),
        ];
        let got = closest_font(&font(ANOTHER, Style::Regular, Weight::SEMI_BOLD), &fonts);
        assert_eq!(got, Some(&fonts[0]));
    }

    #[test]
    fn weight_ties_keep_input_order() {
        let fonts = [
            font(MOCK, Style::Regular, Weight::LIGHT),
            font(MOCK, Style::Regular, Weight::MEDIUM),
        ];
        let got = closest_font(&font(MOCK, Style::Regular, Weight::NORMAL), &fonts);
        assert_eq!(got, Some(&fonts[0]));
    }
}
