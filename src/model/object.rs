//! Inline and floating objects: pictures, shapes, OLE, equations, notes,
//! headers/footers, fields and numbering controls.

use serde::{Deserialize, Serialize};

use super::enums::{
    ApplyPage, AutoNumKind, FieldKind, HorzRelTo, ImageEffect, LineType, NumberFormat,
    OleObjectType, PageNumPosition, TextWrap, VertRelTo,
};
use super::header::Color;
use super::section::Margins;
use super::table::SubList;

/// Placement shared by every positioned object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectCommon {
    pub id: u32,
    pub z_order: i32,
    pub width: i32,
    pub height: i32,
    pub treat_as_char: bool,
    pub text_wrap: TextWrap,
    pub vert_rel_to: VertRelTo,
    pub horz_rel_to: HorzRelTo,
    pub vert_offset: i32,
    pub horz_offset: i32,
    pub out_margin: Margins,
    pub description: String,
}

impl Default for ObjectCommon {
    fn default() -> Self {
        Self {
            id: 0,
            z_order: 0,
            width: 0,
            height: 0,
            treat_as_char: true,
            text_wrap: TextWrap::TopAndBottom,
            vert_rel_to: VertRelTo::Para,
            horz_rel_to: HorzRelTo::Column,
            vert_offset: 0,
            horz_offset: 0,
            out_margin: Margins::default(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crop {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Embedded picture referencing a binary item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    pub common: ObjectCommon,
    /// Id of the owning [`BinItem`](super::BinItem)
    pub bin_item_id: String,
    pub original_width: i32,
    pub original_height: i32,
    pub crop: Crop,
    pub effect: ImageEffect,
    pub bright: i8,
    pub contrast: i8,
}

/// Outline stroke of a drawing object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineShape {
    pub color: Color,
    pub width: i32,
    pub style: LineType,
}

impl Default for LineShape {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 33,
            style: LineType::Solid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle {
        /// Corner rounding in percent
        ratio: u8,
    },
    Ellipse,
    Line {
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
    },
}

impl ShapeKind {
    /// OWPML element name.
    pub fn element(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle { .. } => "rect",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Line { .. } => "line",
        }
    }
}

/// Drawing object, optionally holding text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub common: ObjectCommon,
    pub kind: ShapeKind,
    pub line: LineShape,
    pub fill: Option<Color>,
    pub text: Option<SubList>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ole {
    pub common: ObjectCommon,
    pub bin_item_id: String,
    pub object_type: OleObjectType,
    pub extent_x: i32,
    pub extent_y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    pub common: ObjectCommon,
    /// Equation script in the target's equation language
    pub script: String,
    pub base_unit: i32,
    pub text_color: Color,
    pub baseline: i32,
    pub version: String,
    pub font: String,
}

/// Header or footer bound to a page parity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderFooter {
    pub id: u32,
    pub apply_page: ApplyPage,
    pub content: SubList,
}

/// Footnote or endnote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub number: u16,
    pub inst_id: u32,
    pub content: SubList,
}

/// Start marker of a field; the matching [`RunItem::FieldEnd`](super::RunItem::FieldEnd)
/// carries the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBegin {
    pub id: u32,
    pub kind: FieldKind,
    pub name: String,
    /// Field command; for cross-references, the target bookmark name
    pub command: String,
    pub editable: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoNumber {
    pub kind: AutoNumKind,
    pub num: u16,
    pub format: NumberFormat,
    pub user_char: Option<char>,
    pub prefix: Option<char>,
    pub suffix: Option<char>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNumber {
    pub position: PageNumPosition,
    pub format: NumberFormat,
    pub side_char: Option<char>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_element_names() {
        assert_eq!(ShapeKind::Rectangle { ratio: 0 }.element(), "rect");
        assert_eq!(ShapeKind::Ellipse.element(), "ellipse");
    }

    #[test]
    fn test_object_common_default_is_inline() {
        let common = ObjectCommon::default();
        assert!(common.treat_as_char);
        assert_eq!(common.text_wrap, TextWrap::TopAndBottom);
    }
}
