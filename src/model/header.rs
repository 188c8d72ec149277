//! Document-wide definition tables (fonts, border fills, character and
//! paragraph properties, numbering, styles).
//!
//! All definition values derive `Eq + Hash`: the reference resolution table
//! deduplicates them by structural equality, so no floating point appears
//! here. Lengths are HWPUNIT (1/7200 inch).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::enums::{
    BorderWidth, BreakLatinWord, BreakNonLatinWord, GradientKind, HatchStyle, HeadAlign,
    HeadingType, HorizontalAlign, LineSpacingType, LineType, NumberFormat, OutlineType,
    ShadowType, StyleKind, TabKind, UnderlineType, VerticalTextAlign,
};

/// Base of the border fill id space (the first border fill is id 1).
pub const BORDER_FILL_ID_BASE: u32 = 1;
/// Base of the numbering id space.
pub const NUMBERING_ID_BASE: u32 = 1;
/// Base of the bullet id space.
pub const BULLET_ID_BASE: u32 = 1;

/// Script groups that carry separate font settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Hangul,
    Latin,
    Hanja,
    Japanese,
    Other,
    Symbol,
    User,
}

impl Language {
    /// All groups in canonical order.
    pub const ALL: [Language; 7] = [
        Language::Hangul,
        Language::Latin,
        Language::Hanja,
        Language::Japanese,
        Language::Other,
        Language::Symbol,
        Language::User,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Hangul => "HANGUL",
            Language::Latin => "LATIN",
            Language::Hanja => "HANJA",
            Language::Japanese => "JAPANESE",
            Language::Other => "OTHER",
            Language::Symbol => "SYMBOL",
            Language::User => "USER",
        }
    }

    /// Attribute name used for per-language child attributes.
    pub fn attr(&self) -> &'static str {
        match self {
            Language::Hangul => "hangul",
            Language::Latin => "latin",
            Language::Hanja => "hanja",
            Language::Japanese => "japanese",
            Language::Other => "other",
            Language::Symbol => "symbol",
            Language::User => "user",
        }
    }
}

/// One value per [`Language`] group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LangValues<T> {
    pub hangul: T,
    pub latin: T,
    pub hanja: T,
    pub japanese: T,
    pub other: T,
    pub symbol: T,
    pub user: T,
}

impl<T> LangValues<T> {
    /// Same value for every group.
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            hangul: value.clone(),
            latin: value.clone(),
            hanja: value.clone(),
            japanese: value.clone(),
            other: value.clone(),
            symbol: value.clone(),
            user: value,
        }
    }

    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::Hangul => &self.hangul,
            Language::Latin => &self.latin,
            Language::Hanja => &self.hanja,
            Language::Japanese => &self.japanese,
            Language::Other => &self.other,
            Language::Symbol => &self.symbol,
            Language::User => &self.user,
        }
    }

    pub fn get_mut(&mut self, lang: Language) -> &mut T {
        match lang {
            Language::Hangul => &mut self.hangul,
            Language::Latin => &mut self.latin,
            Language::Hanja => &mut self.hanja,
            Language::Japanese => &mut self.japanese,
            Language::Other => &mut self.other,
            Language::Symbol => &mut self.symbol,
            Language::User => &mut self.user,
        }
    }

    /// Iterate `(language, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &T)> {
        Language::ALL.into_iter().map(move |lang| (lang, self.get(lang)))
    }

    /// Apply `f` to every group, preserving the language.
    pub fn map<U>(&self, mut f: impl FnMut(Language, &T) -> U) -> LangValues<U> {
        LangValues {
            hangul: f(Language::Hangul, &self.hangul),
            latin: f(Language::Latin, &self.latin),
            hanja: f(Language::Hanja, &self.hanja),
            japanese: f(Language::Japanese, &self.japanese),
            other: f(Language::Other, &self.other),
            symbol: f(Language::Symbol, &self.symbol),
            user: f(Language::User, &self.user),
        }
    }
}

/// RGB color, or no color at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    None,
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => write!(f, "none"),
            Color::Rgb(r, g, b) => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
        }
    }
}

/// Block of start numbers for automatic numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeginNumbers {
    pub page: u16,
    pub footnote: u16,
    pub endnote: u16,
    pub picture: u16,
    pub table: u16,
    pub equation: u16,
}

impl Default for BeginNumbers {
    fn default() -> Self {
        Self {
            page: 1,
            footnote: 1,
            endnote: 1,
            picture: 1,
            table: 1,
            equation: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FontKind {
    /// Representative (unknown) font
    Rep,
    #[default]
    Ttf,
    Hft,
}

impl FontKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontKind::Rep => "REP",
            FontKind::Ttf => "TTF",
            FontKind::Hft => "HFT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubstituteFont {
    pub face: String,
    pub kind: FontKind,
}

/// A font face in one language group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Font {
    pub face: String,
    pub kind: FontKind,
    pub substitute: Option<SubstituteFont>,
}

impl Font {
    pub fn new(face: impl Into<String>) -> Self {
        Self {
            face: face.into(),
            kind: FontKind::Ttf,
            substitute: None,
        }
    }
}

/// One edge of a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Border {
    pub line: LineType,
    pub width: BorderWidth,
    pub color: Color,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            line: LineType::None,
            width: BorderWidth::Mm0_1,
            color: Color::BLACK,
        }
    }
}

/// Background fill of a border-fill definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Fill {
    Color {
        face: Color,
        hatch_color: Color,
        hatch: Option<HatchStyle>,
    },
    Gradient {
        kind: GradientKind,
        angle: i32,
        center_x: i32,
        center_y: i32,
        colors: Vec<Color>,
    },
}

/// Border and background definition shared by cells, paragraphs, pages and
/// characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BorderFill {
    pub three_d: bool,
    pub shadow: bool,
    pub left: Border,
    pub right: Border,
    pub top: Border,
    pub bottom: Border,
    pub diagonal: Border,
    pub fill: Option<Fill>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Underline {
    pub kind: UnderlineType,
    pub shape: LineType,
    pub color: Color,
}

impl Default for Underline {
    fn default() -> Self {
        Self {
            kind: UnderlineType::None,
            shape: LineType::Solid,
            color: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Strikeout {
    pub shape: LineType,
    pub color: Color,
}

impl Default for Strikeout {
    fn default() -> Self {
        Self {
            shape: LineType::None,
            color: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shadow {
    pub kind: ShadowType,
    pub color: Color,
    pub offset_x: i8,
    pub offset_y: i8,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            kind: ShadowType::None,
            color: Color::Rgb(0xB2, 0xB2, 0xB2),
            offset_x: 10,
            offset_y: 10,
        }
    }
}

/// Character properties (a "character style" in the neutral model).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharPr {
    /// Base size in HWPUNIT (1000 = 10pt)
    pub height: i32,
    pub text_color: Color,
    pub shade_color: Color,
    pub border_fill_id: Option<u32>,
    /// Font id per language group, scoped to that group's font list
    pub font_ref: LangValues<u32>,
    pub ratio: LangValues<u8>,
    pub spacing: LangValues<i8>,
    pub rel_size: LangValues<u8>,
    pub offset: LangValues<i8>,
    pub bold: bool,
    pub italic: bool,
    pub underline: Underline,
    pub strikeout: Strikeout,
    pub outline: OutlineType,
    pub shadow: Shadow,
    pub emboss: bool,
    pub engrave: bool,
    pub superscript: bool,
    pub subscript: bool,
}

impl Default for CharPr {
    fn default() -> Self {
        Self {
            height: 1000,
            text_color: Color::BLACK,
            shade_color: Color::None,
            border_fill_id: None,
            font_ref: LangValues::default(),
            ratio: LangValues::uniform(100),
            spacing: LangValues::default(),
            rel_size: LangValues::uniform(100),
            offset: LangValues::default(),
            bold: false,
            italic: false,
            underline: Underline::default(),
            strikeout: Strikeout::default(),
            outline: OutlineType::None,
            shadow: Shadow::default(),
            emboss: false,
            engrave: false,
            superscript: false,
            subscript: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabItem {
    pub position: i32,
    pub kind: TabKind,
    pub leader: LineType,
}

/// Tab stop definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabPr {
    pub auto_tab_left: bool,
    pub auto_tab_right: bool,
    pub items: Vec<TabItem>,
}

/// Heading glyph settings shared by numbering levels and bullets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParaHead {
    /// 1-based level (0 for bullets)
    pub level: u8,
    pub start: u32,
    pub align: HeadAlign,
    pub use_inst_width: bool,
    pub auto_indent: bool,
    pub width_adjust: i32,
    pub text_offset_percent: bool,
    pub text_offset: i32,
    pub num_format: NumberFormat,
    pub char_pr_id: Option<u32>,
    pub checkable: bool,
    /// Format string such as `^1.`
    pub text: String,
}

/// Multi-level numbering scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Numbering {
    pub start: u16,
    pub levels: Vec<ParaHead>,
}

impl Default for Numbering {
    fn default() -> Self {
        let levels = (1..=7u8)
            .map(|level| ParaHead {
                level,
                start: 1,
                text_offset_percent: true,
                text_offset: 50,
                text: format!("^{}.", level),
                ..Default::default()
            })
            .collect();
        Self { start: 0, levels }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bullet {
    pub char: char,
    pub checked_char: Option<char>,
    pub use_image: bool,
    pub head: ParaHead,
}

impl Default for Bullet {
    fn default() -> Self {
        Self {
            char: '●',
            checked_char: None,
            use_image: false,
            head: ParaHead {
                text_offset_percent: true,
                text_offset: 50,
                num_format: NumberFormat::Digit,
                ..Default::default()
            },
        }
    }
}

/// Paragraph heading (outline, numbering or bullet) binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Heading {
    pub kind: HeadingType,
    /// Numbering id for outline/number headings, bullet id for bullets, 0 otherwise
    pub id_ref: u32,
    pub level: u8,
}

/// Paragraph margins in HWPUNIT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParaMargin {
    pub indent: i32,
    pub left: i32,
    pub right: i32,
    pub prev: i32,
    pub next: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSpacing {
    pub kind: LineSpacingType,
    /// Percent for `Percent`, HWPUNIT otherwise
    pub value: i32,
}

impl Default for LineSpacing {
    fn default() -> Self {
        Self {
            kind: LineSpacingType::Percent,
            value: 160,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParaBorder {
    pub border_fill_id: u32,
    pub offset_left: i32,
    pub offset_right: i32,
    pub offset_top: i32,
    pub offset_bottom: i32,
    pub connect: bool,
    pub ignore_margin: bool,
}

/// Paragraph properties (a "paragraph style" in the neutral model).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParaPr {
    pub align: HorizontalAlign,
    pub vertical_align: VerticalTextAlign,
    pub heading: Heading,
    pub tab_pr_id: u32,
    pub condense: u8,
    pub snap_to_grid: bool,
    pub break_latin_word: BreakLatinWord,
    pub break_non_latin_word: BreakNonLatinWord,
    pub widow_orphan: bool,
    pub keep_with_next: bool,
    pub keep_lines: bool,
    pub page_break_before: bool,
    pub auto_spacing_eng: bool,
    pub auto_spacing_num: bool,
    pub margin: ParaMargin,
    pub line_spacing: LineSpacing,
    pub border: ParaBorder,
}

impl Default for ParaPr {
    fn default() -> Self {
        Self {
            align: HorizontalAlign::Justify,
            vertical_align: VerticalTextAlign::Baseline,
            heading: Heading::default(),
            tab_pr_id: 0,
            condense: 0,
            snap_to_grid: true,
            break_latin_word: BreakLatinWord::KeepWord,
            break_non_latin_word: BreakNonLatinWord::KeepWord,
            widow_orphan: false,
            keep_with_next: false,
            keep_lines: false,
            page_break_before: false,
            auto_spacing_eng: false,
            auto_spacing_num: false,
            margin: ParaMargin::default(),
            line_spacing: LineSpacing::default(),
            border: ParaBorder::default(),
        }
    }
}

/// Named style binding a paragraph and a character property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    pub kind: StyleKind,
    pub name: String,
    pub eng_name: String,
    pub para_pr_id: u32,
    pub char_pr_id: u32,
    pub next_style_id: u32,
    pub lang_id: i16,
    pub lock_form: bool,
}

/// All definition tables of a document.
///
/// Ids are positional: `char_properties[i]` has id `i`,
/// `border_fills[i]` has id `i + 1` (see the `*_ID_BASE` constants).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub begin_numbers: BeginNumbers,
    pub fonts: LangValues<Vec<Font>>,
    pub border_fills: Vec<BorderFill>,
    pub char_properties: Vec<CharPr>,
    pub tab_properties: Vec<TabPr>,
    pub numberings: Vec<Numbering>,
    pub bullets: Vec<Bullet>,
    pub para_properties: Vec<ParaPr>,
    pub styles: Vec<Style>,
}

impl Header {
    pub fn font(&self, lang: Language, id: u32) -> Option<&Font> {
        self.fonts.get(lang).get(id as usize)
    }

    pub fn border_fill(&self, id: u32) -> Option<&BorderFill> {
        id.checked_sub(BORDER_FILL_ID_BASE)
            .and_then(|i| self.border_fills.get(i as usize))
    }

    pub fn char_pr(&self, id: u32) -> Option<&CharPr> {
        self.char_properties.get(id as usize)
    }

    pub fn tab_pr(&self, id: u32) -> Option<&TabPr> {
        self.tab_properties.get(id as usize)
    }

    pub fn numbering(&self, id: u32) -> Option<&Numbering> {
        id.checked_sub(NUMBERING_ID_BASE)
            .and_then(|i| self.numberings.get(i as usize))
    }

    pub fn bullet(&self, id: u32) -> Option<&Bullet> {
        id.checked_sub(BULLET_ID_BASE)
            .and_then(|i| self.bullets.get(i as usize))
    }

    pub fn para_pr(&self, id: u32) -> Option<&ParaPr> {
        self.para_properties.get(id as usize)
    }

    pub fn style(&self, id: u32) -> Option<&Style> {
        self.styles.get(id as usize)
    }

    /// Total number of font faces across all language groups.
    pub fn font_count(&self) -> usize {
        self.fonts.iter().map(|(_, fonts)| fonts.len()).sum()
    }
}
