//! Controls anchored in paragraph text by extended control characters.

use serde::{Deserialize, Serialize};

use super::body::SourceParagraph;

/// A control record and its child records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "ctrl", rename_all = "snake_case")]
pub enum Control {
    SectionDef(SectionDef),
    ColumnDef(ColumnDef),
    Table(SourceTable),
    Picture(SourcePicture),
    Shape(SourceShape),
    Ole(SourceOle),
    Equation(SourceEquation),
    Header(SourceHeaderFooter),
    Footer(SourceHeaderFooter),
    Footnote(SourceNote),
    Endnote(SourceNote),
    Field(SourceField),
    Bookmark { name: String },
    AutoNumber(SourceAutoNumber),
    PageNumberPosition(SourcePageNumber),
    /// A control id the reader did not recognize, e.g. `"tcmt"`
    Unknown { ctrl_id: String },
}

impl Control {
    /// Four-character control id.
    pub fn ctrl_id(&self) -> &str {
        match self {
            Control::SectionDef(_) => "secd",
            Control::ColumnDef(_) => "cold",
            Control::Table(_) => "tbl ",
            Control::Picture(_) => "$pic",
            Control::Shape(shape) => match shape.kind {
                SourceShapeKind::Rectangle { .. } => "$rec",
                SourceShapeKind::Ellipse => "$ell",
                SourceShapeKind::Line { .. } => "$lin",
                SourceShapeKind::Polygon { .. } => "$pol",
                SourceShapeKind::Arc => "$arc",
                SourceShapeKind::Curve => "$cur",
            },
            Control::Ole(_) => "$ole",
            Control::Equation(_) => "eqed",
            Control::Header(_) => "head",
            Control::Footer(_) => "foot",
            Control::Footnote(_) => "fn  ",
            Control::Endnote(_) => "en  ",
            Control::Field(field) => &field.kind_id,
            Control::Bookmark { .. } => "bokm",
            Control::AutoNumber(_) => "atno",
            Control::PageNumberPosition(_) => "pgnp",
            Control::Unknown { ctrl_id } => ctrl_id,
        }
    }
}

/// Inner margins, HWPUNIT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: i16,
    pub right: i16,
    pub top: i16,
    pub bottom: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageDef {
    pub width: i32,
    pub height: i32,
    pub left_margin: i32,
    pub right_margin: i32,
    pub top_margin: i32,
    pub bottom_margin: i32,
    pub header_margin: i32,
    pub footer_margin: i32,
    pub gutter_margin: i32,
    pub landscape: bool,
    /// 0 left only, 1 left-right, 2 top-bottom
    pub gutter_type: u8,
}

impl Default for PageDef {
    fn default() -> Self {
        Self {
            width: 59528,
            height: 84186,
            left_margin: 8504,
            right_margin: 8504,
            top_margin: 5668,
            bottom_margin: 4252,
            header_margin: 4252,
            footer_margin: 4252,
            gutter_margin: 0,
            landscape: false,
            gutter_type: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePageBorderFill {
    /// 0 both, 1 even, 2 odd
    pub kind: u8,
    pub border_fill_id: u16,
    pub text_border: bool,
    pub header_inside: bool,
    pub footer_inside: bool,
    pub offset: Padding,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceStartNumbers {
    pub page: u16,
    pub picture: u16,
    pub table: u16,
    pub equation: u16,
}

/// Section definition control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionDef {
    /// 0 horizontal, 1 vertical
    pub text_direction: u8,
    pub space_columns: i32,
    pub tab_stop: i32,
    /// 1-based numbering id used for outline headings
    pub outline_numbering_id: u16,
    pub hide_first_header: bool,
    pub hide_first_footer: bool,
    pub hide_first_page_number: bool,
    pub start_numbers: SourceStartNumbers,
    pub page: PageDef,
    pub page_border_fills: Vec<SourcePageBorderFill>,
}

impl Default for SectionDef {
    fn default() -> Self {
        Self {
            text_direction: 0,
            space_columns: 1134,
            tab_stop: 8000,
            outline_numbering_id: 1,
            hide_first_header: false,
            hide_first_footer: false,
            hide_first_page_number: false,
            start_numbers: SourceStartNumbers::default(),
            page: PageDef::default(),
            page_border_fills: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceColumnWidth {
    pub width: i32,
    pub gap: i32,
}

/// Column definition control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnDef {
    /// 0 newspaper, 1 balanced, 2 parallel
    pub kind: u8,
    pub count: u16,
    /// 0 left, 1 right, 2 mirror
    pub layout: u8,
    pub same_size: bool,
    pub gap: i32,
    pub widths: Vec<SourceColumnWidth>,
    pub separator_kind: u8,
    pub separator_width: u8,
    pub separator_color: u32,
}

impl Default for ColumnDef {
    fn default() -> Self {
        Self {
            kind: 0,
            count: 1,
            layout: 0,
            same_size: true,
            gap: 0,
            widths: Vec::new(),
            separator_kind: 0,
            separator_width: 0,
            separator_color: 0,
        }
    }
}

/// Placement header shared by every positioned object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceObjectCommon {
    pub instance_id: u32,
    pub z_order: i32,
    pub width: i32,
    pub height: i32,
    pub treat_as_char: bool,
    /// 0 square, 1 top-and-bottom, 2 behind text, 3 in front of text
    pub text_wrap: u8,
    /// 0 paper, 1 page, 2 paragraph
    pub vert_rel_to: u8,
    /// 0 paper, 1 page, 2 column, 3 paragraph
    pub horz_rel_to: u8,
    pub vert_offset: i32,
    pub horz_offset: i32,
    pub out_margin: Padding,
    pub description: String,
}

impl Default for SourceObjectCommon {
    fn default() -> Self {
        Self {
            instance_id: 0,
            z_order: 0,
            width: 0,
            height: 0,
            treat_as_char: true,
            text_wrap: 1,
            vert_rel_to: 2,
            horz_rel_to: 2,
            vert_offset: 0,
            horz_offset: 0,
            out_margin: Padding::default(),
            description: String::new(),
        }
    }
}

/// A table cell; only anchor cells are stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceCell {
    pub col: i32,
    pub row: i32,
    pub col_span: i32,
    pub row_span: i32,
    pub width: i32,
    pub height: i32,
    pub margin: Padding,
    /// 1-based border fill id
    pub border_fill_id: u16,
    pub header: bool,
    /// 0 top, 1 center, 2 bottom
    pub vertical_align: u8,
    pub paragraphs: Vec<SourceParagraph>,
}

impl Default for SourceCell {
    fn default() -> Self {
        Self {
            col: 0,
            row: 0,
            col_span: 1,
            row_span: 1,
            width: 0,
            height: 0,
            margin: Padding::default(),
            border_fill_id: 1,
            header: false,
            vertical_align: 1,
            paragraphs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceTable {
    pub common: SourceObjectCommon,
    pub rows: u16,
    pub cols: u16,
    pub cell_spacing: i16,
    pub in_margin: Padding,
    pub border_fill_id: u16,
    pub repeat_header: bool,
    pub cells: Vec<SourceCell>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceCrop {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePicture {
    pub common: SourceObjectCommon,
    pub bin_data_id: u16,
    pub original_width: i32,
    pub original_height: i32,
    pub crop: SourceCrop,
    /// 0 real picture, 1 grayscale, 2 black and white
    pub effect: u8,
    pub bright: i8,
    pub contrast: i8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceShapeKind {
    Rectangle {
        #[serde(default)]
        ratio: u8,
    },
    Ellipse,
    Line {
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
    },
    Polygon {
        points: Vec<(i32, i32)>,
    },
    Arc,
    Curve,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceTextBox {
    /// 0 top, 1 center, 2 bottom
    pub vertical_align: u8,
    pub paragraphs: Vec<SourceParagraph>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceShape {
    #[serde(default)]
    pub common: SourceObjectCommon,
    pub kind: SourceShapeKind,
    #[serde(default)]
    pub line_color: u32,
    #[serde(default)]
    pub line_width: i32,
    #[serde(default)]
    pub line_kind: u8,
    #[serde(default)]
    pub fill_color: Option<u32>,
    #[serde(default)]
    pub text: Option<SourceTextBox>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOle {
    pub common: SourceObjectCommon,
    pub bin_data_id: u16,
    /// 0 unknown, 1 embedded, 2 link, 3 static, 4 equation
    pub object_type: u8,
    pub extent_x: i32,
    pub extent_y: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceEquation {
    pub common: SourceObjectCommon,
    pub script: String,
    pub base_unit: i32,
    pub color: u32,
    pub baseline: i16,
    pub version: String,
    pub font: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceHeaderFooter {
    pub instance_id: u32,
    /// 0 both, 1 even, 2 odd
    pub apply_page: u8,
    pub paragraphs: Vec<SourceParagraph>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceNote {
    pub number: u16,
    pub instance_id: u32,
    pub paragraphs: Vec<SourceParagraph>,
}

/// Field begin control; closed by the next unmatched field-end character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceField {
    /// Control id such as `%hlk` or `%xrf`
    pub kind_id: String,
    pub instance_id: u32,
    pub command: String,
    pub name: Option<String>,
    pub editable: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceAutoNumber {
    /// 0 page, 1 footnote, 2 endnote, 3 picture, 4 table, 5 equation
    pub kind: u8,
    pub number: u16,
    pub format: u8,
    pub user_char: Option<char>,
    pub prefix: Option<char>,
    pub suffix: Option<char>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePageNumber {
    /// 0 none ... 10 inside bottom
    pub position: u8,
    pub format: u8,
    pub side_char: Option<char>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_ids() {
        assert_eq!(Control::Table(SourceTable::default()).ctrl_id(), "tbl ");
        let field = SourceField {
            kind_id: "%hlk".into(),
            ..Default::default()
        };
        assert_eq!(Control::Field(field).ctrl_id(), "%hlk");
        let unknown = Control::Unknown {
            ctrl_id: "tcmt".into(),
        };
        assert_eq!(unknown.ctrl_id(), "tcmt");
    }

    #[test]
    fn test_control_json_tagging() {
        let json = r#"{ "ctrl": "bookmark", "name": "intro" }"#;
        let control: Control = serde_json::from_str(json).unwrap();
        assert_eq!(
            control,
            Control::Bookmark {
                name: "intro".into()
            }
        );
    }
}
