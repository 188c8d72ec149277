//! Source enumeration codes to target enumerations.
//!
//! Every mapping is total: a code outside the table maps to the table's
//! fallback and records an [`UnsupportedEntity`](DiagnosticKind) warning.

use crate::diagnostics::{DiagnosticKind, Diagnostics, Location};
use crate::model::*;

/// A dense code table starting at `first`.
#[derive(Debug, Clone, Copy)]
pub struct CodeMap<T: 'static> {
    pub name: &'static str,
    pub first: u8,
    pub table: &'static [T],
    pub fallback: T,
}

impl<T: Copy + std::fmt::Display> CodeMap<T> {
    /// Look a code up without falling back.
    pub fn lookup(&self, code: u8) -> Option<T> {
        code.checked_sub(self.first)
            .and_then(|i| self.table.get(i as usize))
            .copied()
    }

    /// Map a code, substituting the fallback for unknown codes.
    pub fn map(&self, code: u8, location: &Location, diagnostics: &mut Diagnostics) -> T {
        match self.lookup(code) {
            Some(value) => value,
            None => {
                diagnostics.push(
                    DiagnosticKind::UnsupportedEntity,
                    location.clone(),
                    format!(
                        "{} code {} has no equivalent; using {}",
                        self.name, code, self.fallback
                    ),
                );
                self.fallback
            }
        }
    }
}

pub const ALIGNMENT: CodeMap<HorizontalAlign> = CodeMap {
    name: "paragraph alignment",
    first: 0,
    table: &[
        HorizontalAlign::Justify,
        HorizontalAlign::Left,
        HorizontalAlign::Right,
        HorizontalAlign::Center,
        HorizontalAlign::Distribute,
        HorizontalAlign::DistributeSpace,
    ],
    fallback: HorizontalAlign::Justify,
};

pub const VERTICAL_TEXT_ALIGN: CodeMap<VerticalTextAlign> = CodeMap {
    name: "vertical text alignment",
    first: 0,
    table: &[
        VerticalTextAlign::Baseline,
        VerticalTextAlign::Top,
        VerticalTextAlign::Center,
        VerticalTextAlign::Bottom,
    ],
    fallback: VerticalTextAlign::Baseline,
};

pub const LINE_SPACING: CodeMap<LineSpacingType> = CodeMap {
    name: "line spacing mode",
    first: 0,
    table: &[
        LineSpacingType::Percent,
        LineSpacingType::Fixed,
        LineSpacingType::BetweenLines,
        LineSpacingType::AtLeast,
    ],
    fallback: LineSpacingType::Percent,
};

/// Border line types. Wave and 3D variants (12..=17) have no target form.
pub const BORDER_LINE: CodeMap<LineType> = CodeMap {
    name: "border line type",
    first: 0,
    table: &[
        LineType::None,
        LineType::Solid,
        LineType::Dash,
        LineType::Dot,
        LineType::DashDot,
        LineType::DashDotDot,
        LineType::LongDash,
        LineType::Circle,
        LineType::DoubleSlim,
        LineType::SlimThick,
        LineType::ThickSlim,
        LineType::SlimThickSlim,
    ],
    fallback: LineType::Solid,
};

pub const BORDER_WIDTH: CodeMap<BorderWidth> = CodeMap {
    name: "border width",
    first: 0,
    table: &[
        BorderWidth::Mm0_1,
        BorderWidth::Mm0_12,
        BorderWidth::Mm0_15,
        BorderWidth::Mm0_2,
        BorderWidth::Mm0_25,
        BorderWidth::Mm0_3,
        BorderWidth::Mm0_4,
        BorderWidth::Mm0_5,
        BorderWidth::Mm0_6,
        BorderWidth::Mm0_7,
        BorderWidth::Mm1_0,
        BorderWidth::Mm1_5,
        BorderWidth::Mm2_0,
        BorderWidth::Mm3_0,
        BorderWidth::Mm4_0,
        BorderWidth::Mm5_0,
    ],
    fallback: BorderWidth::Mm0_1,
};

pub const UNDERLINE_KIND: CodeMap<UnderlineType> = CodeMap {
    name: "underline position",
    first: 0,
    table: &[
        UnderlineType::None,
        UnderlineType::Bottom,
        UnderlineType::Center,
        UnderlineType::Top,
    ],
    fallback: UnderlineType::None,
};

/// Underline and strikeout line shapes; the source has no "none" code here.
pub const LINE_SHAPE: CodeMap<LineType> = CodeMap {
    name: "line shape",
    first: 0,
    table: &[
        LineType::Solid,
        LineType::Dash,
        LineType::Dot,
        LineType::DashDot,
        LineType::DashDotDot,
        LineType::LongDash,
        LineType::Circle,
        LineType::DoubleSlim,
        LineType::SlimThick,
        LineType::ThickSlim,
        LineType::SlimThickSlim,
    ],
    fallback: LineType::Solid,
};

pub const OUTLINE: CodeMap<OutlineType> = CodeMap {
    name: "outline type",
    first: 0,
    table: &[
        OutlineType::None,
        OutlineType::Solid,
        OutlineType::Dot,
        OutlineType::Thick,
        OutlineType::Dash,
        OutlineType::DashDot,
        OutlineType::DashDotDot,
    ],
    fallback: OutlineType::None,
};

pub const SHADOW: CodeMap<ShadowType> = CodeMap {
    name: "shadow type",
    first: 0,
    table: &[ShadowType::None, ShadowType::Drop, ShadowType::Continuous],
    fallback: ShadowType::None,
};

pub const HEADING: CodeMap<HeadingType> = CodeMap {
    name: "heading type",
    first: 0,
    table: &[
        HeadingType::None,
        HeadingType::Outline,
        HeadingType::Number,
        HeadingType::Bullet,
    ],
    fallback: HeadingType::None,
};

pub const HEAD_ALIGN: CodeMap<HeadAlign> = CodeMap {
    name: "heading alignment",
    first: 0,
    table: &[HeadAlign::Left, HeadAlign::Center, HeadAlign::Right],
    fallback: HeadAlign::Left,
};

pub const BREAK_LATIN: CodeMap<BreakLatinWord> = CodeMap {
    name: "latin line break",
    first: 0,
    table: &[
        BreakLatinWord::KeepWord,
        BreakLatinWord::Hyphenation,
        BreakLatinWord::BreakWord,
    ],
    fallback: BreakLatinWord::KeepWord,
};

pub const BREAK_NON_LATIN: CodeMap<BreakNonLatinWord> = CodeMap {
    name: "non-latin line break",
    first: 0,
    table: &[BreakNonLatinWord::KeepWord, BreakNonLatinWord::BreakWord],
    fallback: BreakNonLatinWord::KeepWord,
};

pub const TAB_KIND: CodeMap<TabKind> = CodeMap {
    name: "tab kind",
    first: 0,
    table: &[TabKind::Left, TabKind::Right, TabKind::Center, TabKind::Decimal],
    fallback: TabKind::Left,
};

pub const STYLE_KIND: CodeMap<StyleKind> = CodeMap {
    name: "style kind",
    first: 0,
    table: &[StyleKind::Para, StyleKind::Char],
    fallback: StyleKind::Para,
};

pub const CELL_VALIGN: CodeMap<VerticalAlign> = CodeMap {
    name: "cell vertical alignment",
    first: 0,
    table: &[VerticalAlign::Top, VerticalAlign::Center, VerticalAlign::Bottom],
    fallback: VerticalAlign::Center,
};

pub const TEXT_WRAP: CodeMap<TextWrap> = CodeMap {
    name: "text wrap",
    first: 0,
    table: &[
        TextWrap::Square,
        TextWrap::TopAndBottom,
        TextWrap::BehindText,
        TextWrap::InFrontOfText,
    ],
    fallback: TextWrap::TopAndBottom,
};

pub const VERT_REL: CodeMap<VertRelTo> = CodeMap {
    name: "vertical anchor",
    first: 0,
    table: &[VertRelTo::Paper, VertRelTo::Page, VertRelTo::Para],
    fallback: VertRelTo::Para,
};

pub const HORZ_REL: CodeMap<HorzRelTo> = CodeMap {
    name: "horizontal anchor",
    first: 0,
    table: &[
        HorzRelTo::Paper,
        HorzRelTo::Page,
        HorzRelTo::Column,
        HorzRelTo::Para,
    ],
    fallback: HorzRelTo::Column,
};

pub const TEXT_DIRECTION: CodeMap<TextDirection> = CodeMap {
    name: "text direction",
    first: 0,
    table: &[TextDirection::Horizontal, TextDirection::Vertical],
    fallback: TextDirection::Horizontal,
};

pub const GUTTER: CodeMap<GutterType> = CodeMap {
    name: "gutter type",
    first: 0,
    table: &[GutterType::LeftOnly, GutterType::LeftRight, GutterType::TopBottom],
    fallback: GutterType::LeftOnly,
};

pub const PAGE_BORDER_KIND: CodeMap<PageBorderKind> = CodeMap {
    name: "page border kind",
    first: 0,
    table: &[PageBorderKind::Both, PageBorderKind::Even, PageBorderKind::Odd],
    fallback: PageBorderKind::Both,
};

pub const COLUMN_KIND: CodeMap<ColumnKind> = CodeMap {
    name: "column kind",
    first: 0,
    table: &[
        ColumnKind::Newspaper,
        ColumnKind::BalancedNewspaper,
        ColumnKind::Parallel,
    ],
    fallback: ColumnKind::Newspaper,
};

pub const COLUMN_LAYOUT: CodeMap<ColumnLayout> = CodeMap {
    name: "column layout",
    first: 0,
    table: &[ColumnLayout::Left, ColumnLayout::Right, ColumnLayout::Mirror],
    fallback: ColumnLayout::Left,
};

pub const APPLY_PAGE: CodeMap<ApplyPage> = CodeMap {
    name: "header/footer page",
    first: 0,
    table: &[ApplyPage::Both, ApplyPage::Even, ApplyPage::Odd],
    fallback: ApplyPage::Both,
};

pub const AUTONUM: CodeMap<AutoNumKind> = CodeMap {
    name: "auto number kind",
    first: 0,
    table: &[
        AutoNumKind::Page,
        AutoNumKind::Footnote,
        AutoNumKind::Endnote,
        AutoNumKind::Picture,
        AutoNumKind::Table,
        AutoNumKind::Equation,
    ],
    fallback: AutoNumKind::Page,
};

pub const PAGE_NUM_POS: CodeMap<PageNumPosition> = CodeMap {
    name: "page number position",
    first: 0,
    table: &[
        PageNumPosition::None,
        PageNumPosition::TopLeft,
        PageNumPosition::TopCenter,
        PageNumPosition::TopRight,
        PageNumPosition::BottomLeft,
        PageNumPosition::BottomCenter,
        PageNumPosition::BottomRight,
        PageNumPosition::OutsideTop,
        PageNumPosition::OutsideBottom,
        PageNumPosition::InsideTop,
        PageNumPosition::InsideBottom,
    ],
    fallback: PageNumPosition::BottomCenter,
};

pub const IMAGE_EFFECT: CodeMap<ImageEffect> = CodeMap {
    name: "image effect",
    first: 0,
    table: &[
        ImageEffect::RealPic,
        ImageEffect::GrayScale,
        ImageEffect::BlackWhite,
    ],
    fallback: ImageEffect::RealPic,
};

pub const OLE_TYPE: CodeMap<OleObjectType> = CodeMap {
    name: "OLE object type",
    first: 0,
    table: &[
        OleObjectType::Unknown,
        OleObjectType::Embedded,
        OleObjectType::Link,
        OleObjectType::Static,
        OleObjectType::Equation,
    ],
    fallback: OleObjectType::Embedded,
};

pub const GRADIENT: CodeMap<GradientKind> = CodeMap {
    name: "gradient kind",
    first: 1,
    table: &[
        GradientKind::Linear,
        GradientKind::Radial,
        GradientKind::Conical,
        GradientKind::Square,
    ],
    fallback: GradientKind::Linear,
};

pub const HATCH: CodeMap<HatchStyle> = CodeMap {
    name: "hatch style",
    first: 1,
    table: &[
        HatchStyle::Horizontal,
        HatchStyle::Vertical,
        HatchStyle::BackSlash,
        HatchStyle::Slash,
        HatchStyle::Cross,
        HatchStyle::CrossDiagonal,
    ],
    fallback: HatchStyle::Horizontal,
};

const NUMBER_FORMATS: [NumberFormat; 17] = [
    NumberFormat::Digit,
    NumberFormat::CircledDigit,
    NumberFormat::RomanCapital,
    NumberFormat::RomanSmall,
    NumberFormat::LatinCapital,
    NumberFormat::LatinSmall,
    NumberFormat::CircledLatinCapital,
    NumberFormat::CircledLatinSmall,
    NumberFormat::HangulSyllable,
    NumberFormat::CircledHangulSyllable,
    NumberFormat::HangulJamo,
    NumberFormat::CircledHangulJamo,
    NumberFormat::HangulPhonetic,
    NumberFormat::Ideograph,
    NumberFormat::CircledIdeograph,
    NumberFormat::DecagonCircle,
    NumberFormat::DecagonCircleHanja,
];

/// Number formats are dense from 0, with two sparse codes for symbols.
pub fn number_format(code: u8, location: &Location, diagnostics: &mut Diagnostics) -> NumberFormat {
    match code {
        0x80 => NumberFormat::Symbol,
        0x81 => NumberFormat::UserChar,
        _ => match NUMBER_FORMATS.get(code as usize) {
            Some(format) => *format,
            None => {
                diagnostics.push(
                    DiagnosticKind::UnsupportedEntity,
                    location.clone(),
                    format!("number format code {} has no equivalent; using DIGIT", code),
                );
                NumberFormat::Digit
            }
        },
    }
}

pub fn font_kind(code: u8) -> FontKind {
    match code {
        0 => FontKind::Rep,
        2 => FontKind::Hft,
        _ => FontKind::Ttf,
    }
}
