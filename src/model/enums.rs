//! Target-side enumerations.
//!
//! Each enumeration carries its OWPML attribute spelling through
//! [`as_str`](HorizontalAlign::as_str). Mapping from source codes lives in
//! the translators, not here.

use serde::{Deserialize, Serialize};

macro_rules! xml_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $xml:literal ),+ $(,)?
        }
        default = $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[doc = $xml]
                $variant,
            )+
        }

        impl $name {
            /// OWPML attribute value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $xml, )+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

xml_enum! {
    /// Horizontal paragraph alignment.
    pub enum HorizontalAlign {
        Justify => "JUSTIFY",
        Left => "LEFT",
        Right => "RIGHT",
        Center => "CENTER",
        Distribute => "DISTRIBUTE",
        DistributeSpace => "DISTRIBUTE_SPACE",
    }
    default = Justify
}

xml_enum! {
    /// Vertical alignment of text within a line.
    pub enum VerticalTextAlign {
        Baseline => "BASELINE",
        Top => "TOP",
        Center => "CENTER",
        Bottom => "BOTTOM",
    }
    default = Baseline
}

xml_enum! {
    /// Vertical alignment of a cell or sub-list.
    pub enum VerticalAlign {
        Top => "TOP",
        Center => "CENTER",
        Bottom => "BOTTOM",
    }
    default = Center
}

xml_enum! {
    pub enum LineSpacingType {
        Percent => "PERCENT",
        Fixed => "FIXED",
        BetweenLines => "BETWEEN_LINES",
        AtLeast => "AT_LEAST",
    }
    default = Percent
}

xml_enum! {
    /// Border and line stroke types.
    pub enum LineType {
        None => "NONE",
        Solid => "SOLID",
        Dash => "DASH",
        Dot => "DOT",
        DashDot => "DASH_DOT",
        DashDotDot => "DASH_DOT_DOT",
        LongDash => "LONG_DASH",
        Circle => "CIRCLE",
        DoubleSlim => "DOUBLE_SLIM",
        SlimThick => "SLIM_THICK",
        ThickSlim => "THICK_SLIM",
        SlimThickSlim => "SLIM_THICK_SLIM",
    }
    default = Solid
}

xml_enum! {
    /// Border stroke widths, fixed by the target format.
    pub enum BorderWidth {
        Mm0_1 => "0.1 mm",
        Mm0_12 => "0.12 mm",
        Mm0_15 => "0.15 mm",
        Mm0_2 => "0.2 mm",
        Mm0_25 => "0.25 mm",
        Mm0_3 => "0.3 mm",
        Mm0_4 => "0.4 mm",
        Mm0_5 => "0.5 mm",
        Mm0_6 => "0.6 mm",
        Mm0_7 => "0.7 mm",
        Mm1_0 => "1.0 mm",
        Mm1_5 => "1.5 mm",
        Mm2_0 => "2.0 mm",
        Mm3_0 => "3.0 mm",
        Mm4_0 => "4.0 mm",
        Mm5_0 => "5.0 mm",
    }
    default = Mm0_1
}

xml_enum! {
    pub enum UnderlineType {
        None => "NONE",
        Bottom => "BOTTOM",
        Center => "CENTER",
        Top => "TOP",
    }
    default = None
}

xml_enum! {
    pub enum OutlineType {
        None => "NONE",
        Solid => "SOLID",
        Dot => "DOT",
        Thick => "THICK",
        Dash => "DASH",
        DashDot => "DASH_DOT",
        DashDotDot => "DASH_DOT_DOT",
    }
    default = None
}

xml_enum! {
    pub enum ShadowType {
        None => "NONE",
        Drop => "DROP",
        Continuous => "CONTINUOUS",
    }
    default = None
}

xml_enum! {
    /// Numbering glyph formats.
    pub enum NumberFormat {
        Digit => "DIGIT",
        CircledDigit => "CIRCLED_DIGIT",
        RomanCapital => "ROMAN_CAPITAL",
        RomanSmall => "ROMAN_SMALL",
        LatinCapital => "LATIN_CAPITAL",
        LatinSmall => "LATIN_SMALL",
        CircledLatinCapital => "CIRCLED_LATIN_CAPITAL",
        CircledLatinSmall => "CIRCLED_LATIN_SMALL",
        HangulSyllable => "HANGUL_SYLLABLE",
        CircledHangulSyllable => "CIRCLED_HANGUL_SYLLABLE",
        HangulJamo => "HANGUL_JAMO",
        CircledHangulJamo => "CIRCLED_HANGUL_JAMO",
        HangulPhonetic => "HANGUL_PHONETIC",
        Ideograph => "IDEOGRAPH",
        CircledIdeograph => "CIRCLED_IDEOGRAPH",
        DecagonCircle => "DECAGON_CIRCLE",
        DecagonCircleHanja => "DECAGON_CIRCLE_HANJA",
        Symbol => "SYMBOL",
        UserChar => "USER_CHAR",
    }
    default = Digit
}

xml_enum! {
    pub enum HeadingType {
        None => "NONE",
        Outline => "OUTLINE",
        Number => "NUMBER",
        Bullet => "BULLET",
    }
    default = None
}

xml_enum! {
    pub enum HeadAlign {
        Left => "LEFT",
        Center => "CENTER",
        Right => "RIGHT",
    }
    default = Left
}

xml_enum! {
    pub enum BreakLatinWord {
        KeepWord => "KEEP_WORD",
        Hyphenation => "HYPHENATION",
        BreakWord => "BREAK_WORD",
    }
    default = KeepWord
}

xml_enum! {
    pub enum BreakNonLatinWord {
        KeepWord => "KEEP_WORD",
        BreakWord => "BREAK_WORD",
    }
    default = KeepWord
}

xml_enum! {
    pub enum TabKind {
        Left => "LEFT",
        Right => "RIGHT",
        Center => "CENTER",
        Decimal => "DECIMAL",
    }
    default = Left
}

xml_enum! {
    pub enum StyleKind {
        Para => "PARA",
        Char => "CHAR",
    }
    default = Para
}

xml_enum! {
    /// How floating objects interact with surrounding text.
    pub enum TextWrap {
        Square => "SQUARE",
        TopAndBottom => "TOP_AND_BOTTOM",
        BehindText => "BEHIND_TEXT",
        InFrontOfText => "IN_FRONT_OF_TEXT",
    }
    default = TopAndBottom
}

xml_enum! {
    pub enum VertRelTo {
        Paper => "PAPER",
        Page => "PAGE",
        Para => "PARA",
    }
    default = Para
}

xml_enum! {
    pub enum HorzRelTo {
        Paper => "PAPER",
        Page => "PAGE",
        Column => "COLUMN",
        Para => "PARA",
    }
    default = Column
}

xml_enum! {
    pub enum TextDirection {
        Horizontal => "HORIZONTAL",
        Vertical => "VERTICAL",
    }
    default = Horizontal
}

xml_enum! {
    pub enum GutterType {
        LeftOnly => "LEFT_ONLY",
        LeftRight => "LEFT_RIGHT",
        TopBottom => "TOP_BOTTOM",
    }
    default = LeftOnly
}

xml_enum! {
    pub enum PageBorderKind {
        Both => "BOTH",
        Even => "EVEN",
        Odd => "ODD",
    }
    default = Both
}

xml_enum! {
    pub enum ColumnKind {
        Newspaper => "NEWSPAPER",
        BalancedNewspaper => "BALANCED_NEWSPAPER",
        Parallel => "PARALLEL",
    }
    default = Newspaper
}

xml_enum! {
    pub enum ColumnLayout {
        Left => "LEFT",
        Right => "RIGHT",
        Mirror => "MIRROR",
    }
    default = Left
}

xml_enum! {
    pub enum ApplyPage {
        Both => "BOTH",
        Even => "EVEN",
        Odd => "ODD",
    }
    default = Both
}

xml_enum! {
    pub enum FieldKind {
        ClickHere => "CLICK_HERE",
        Hyperlink => "HYPERLINK",
        Bookmark => "BOOKMARK",
        Formula => "FORMULA",
        Summary => "SUMMARY",
        UserInfo => "USER_INFO",
        Date => "DATE",
        DocDate => "DOC_DATE",
        Path => "PATH",
        CrossRef => "CROSSREF",
        MailMerge => "MAILMERGE",
        Memo => "MEMO",
    }
    default = ClickHere
}

xml_enum! {
    pub enum AutoNumKind {
        Page => "PAGE",
        Footnote => "FOOTNOTE",
        Endnote => "ENDNOTE",
        Picture => "PICTURE",
        Table => "TABLE",
        Equation => "EQUATION",
    }
    default = Page
}

xml_enum! {
    pub enum PageNumPosition {
        None => "NONE",
        TopLeft => "TOP_LEFT",
        TopCenter => "TOP_CENTER",
        TopRight => "TOP_RIGHT",
        BottomLeft => "BOTTOM_LEFT",
        BottomCenter => "BOTTOM_CENTER",
        BottomRight => "BOTTOM_RIGHT",
        OutsideTop => "OUTSIDE_TOP",
        OutsideBottom => "OUTSIDE_BOTTOM",
        InsideTop => "INSIDE_TOP",
        InsideBottom => "INSIDE_BOTTOM",
    }
    default = BottomCenter
}

xml_enum! {
    pub enum ImageEffect {
        RealPic => "REAL_PIC",
        GrayScale => "GRAY_SCALE",
        BlackWhite => "BLACK_WHITE",
    }
    default = RealPic
}

xml_enum! {
    pub enum OleObjectType {
        Unknown => "UNKNOWN",
        Embedded => "EMBEDDED",
        Link => "LINK",
        Static => "STATIC",
        Equation => "EQUATION",
    }
    default = Embedded
}

xml_enum! {
    pub enum GradientKind {
        Linear => "LINEAR",
        Radial => "RADIAL",
        Conical => "CONICAL",
        Square => "SQUARE",
    }
    default = Linear
}

xml_enum! {
    pub enum HatchStyle {
        Horizontal => "HORIZONTAL",
        Vertical => "VERTICAL",
        BackSlash => "BACK_SLASH",
        Slash => "SLASH",
        Cross => "CROSS",
        CrossDiagonal => "CROSS_DIAGONAL",
    }
    default = Horizontal
}
