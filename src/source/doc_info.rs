//! DocInfo stream records: the document-wide definition tables.
//!
//! Indices into these tables are positional. Border fills, numberings and
//! bullets are addressed 1-based (0 means "none"); everything else is
//! 0-based.

use serde::{Deserialize, Serialize};

use crate::model::LangValues;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocInfo {
    pub properties: DocProperties,
    /// Face names per language group
    pub face_names: LangValues<Vec<FaceName>>,
    pub border_fills: Vec<SourceBorderFill>,
    pub char_shapes: Vec<CharShape>,
    pub tab_defs: Vec<TabDef>,
    pub numberings: Vec<SourceNumbering>,
    pub bullets: Vec<SourceBullet>,
    pub para_shapes: Vec<ParaShape>,
    pub styles: Vec<SourceStyle>,
    pub bin_data_refs: Vec<BinDataRef>,
}

impl DocInfo {
    /// Border fill by 1-based id.
    pub fn border_fill(&self, id: u16) -> Option<&SourceBorderFill> {
        (id as usize)
            .checked_sub(1)
            .and_then(|i| self.border_fills.get(i))
    }

    /// Numbering by 1-based id.
    pub fn numbering(&self, id: u16) -> Option<&SourceNumbering> {
        (id as usize).checked_sub(1).and_then(|i| self.numberings.get(i))
    }

    /// Bullet by 1-based id.
    pub fn bullet(&self, id: u16) -> Option<&SourceBullet> {
        (id as usize).checked_sub(1).and_then(|i| self.bullets.get(i))
    }

    pub fn bin_data_ref(&self, id: u16) -> Option<&BinDataRef> {
        self.bin_data_refs.iter().find(|b| b.id == id)
    }
}

/// Document properties record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocProperties {
    pub section_count: u16,
    pub begin_page: u16,
    pub begin_footnote: u16,
    pub begin_endnote: u16,
    pub begin_picture: u16,
    pub begin_table: u16,
    pub begin_equation: u16,
}

impl Default for DocProperties {
    fn default() -> Self {
        Self {
            section_count: 1,
            begin_page: 1,
            begin_footnote: 1,
            begin_endnote: 1,
            begin_picture: 1,
            begin_table: 1,
            begin_equation: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstituteFaceName {
    pub name: String,
    /// 0 unknown, 1 TrueType, 2 HFT
    #[serde(default)]
    pub kind: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceName {
    pub name: String,
    /// 0 unknown, 1 TrueType, 2 HFT
    pub kind: u8,
    pub substitute: Option<SubstituteFaceName>,
}

impl FaceName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: 1,
            substitute: None,
        }
    }
}

/// One edge of a border fill record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceBorder {
    /// Line type code
    pub kind: u8,
    /// Width index (0 = 0.1 mm ... 15 = 5.0 mm)
    pub width: u8,
    /// `0x00BBGGRR`
    pub color: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceFill {
    Color {
        background: u32,
        #[serde(default)]
        pattern_color: u32,
        /// 0 none, 1..=6 hatch styles
        #[serde(default)]
        pattern: u8,
    },
    Gradient {
        /// 1 linear, 2 radial, 3 conical, 4 square
        kind: u8,
        #[serde(default)]
        angle: i16,
        #[serde(default)]
        center_x: i16,
        #[serde(default)]
        center_y: i16,
        colors: Vec<u32>,
    },
    Image {
        bin_data_id: u16,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceBorderFill {
    pub three_d: bool,
    pub shadow: bool,
    pub left: SourceBorder,
    pub right: SourceBorder,
    pub top: SourceBorder,
    pub bottom: SourceBorder,
    pub diagonal: SourceBorder,
    pub fill: Option<SourceFill>,
}

/// Character shape record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharShape {
    /// Face-name index per language group
    pub face_ids: LangValues<u16>,
    pub ratios: LangValues<u8>,
    pub spacings: LangValues<i8>,
    pub rel_sizes: LangValues<u8>,
    pub offsets: LangValues<i8>,
    /// Base size in HWPUNIT
    pub base_size: i32,
    pub italic: bool,
    pub bold: bool,
    /// 0 none, 1 bottom, 2 center, 3 top
    pub underline_kind: u8,
    pub underline_shape: u8,
    /// 0..=6
    pub outline: u8,
    /// 0 none, 1 drop, 2 continuous
    pub shadow: u8,
    pub emboss: bool,
    pub engrave: bool,
    pub superscript: bool,
    pub subscript: bool,
    pub strikeout: bool,
    pub strikeout_shape: u8,
    pub shadow_gap_x: i8,
    pub shadow_gap_y: i8,
    pub text_color: u32,
    pub underline_color: u32,
    pub shade_color: u32,
    pub shadow_color: u32,
    pub strikeout_color: u32,
    /// 1-based border fill id
    pub border_fill_id: Option<u16>,
}

impl Default for CharShape {
    fn default() -> Self {
        Self {
            face_ids: LangValues::default(),
            ratios: LangValues::uniform(100),
            spacings: LangValues::default(),
            rel_sizes: LangValues::uniform(100),
            offsets: LangValues::default(),
            base_size: 1000,
            italic: false,
            bold: false,
            underline_kind: 0,
            underline_shape: 0,
            outline: 0,
            shadow: 0,
            emboss: false,
            engrave: false,
            superscript: false,
            subscript: false,
            strikeout: false,
            strikeout_shape: 0,
            shadow_gap_x: 10,
            shadow_gap_y: 10,
            text_color: 0,
            underline_color: 0,
            shade_color: 0xFFFF_FFFF,
            shadow_color: 0x00B2_B2B2,
            strikeout_color: 0,
            border_fill_id: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceTabItem {
    pub position: i32,
    /// 0 left, 1 right, 2 center, 3 decimal
    pub kind: u8,
    /// Leader line type code
    pub fill_type: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabDef {
    pub auto_tab_left: bool,
    pub auto_tab_right: bool,
    pub items: Vec<SourceTabItem>,
}

/// Paragraph head shared by numbering levels and bullets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceParaHead {
    /// 0 left, 1 center, 2 right
    pub align: u8,
    pub use_inst_width: bool,
    pub auto_indent: bool,
    /// Text offset is a percentage rather than HWPUNIT
    pub text_offset_percent: bool,
    pub width_adjust: i16,
    pub text_offset: i16,
    /// Number format code
    pub number_format: u8,
    /// 0-based char shape id; `None` uses the paragraph's shape
    pub char_shape_id: Option<u32>,
    pub start: u32,
    pub checkable: bool,
    /// Format string such as `^1.`
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceNumbering {
    pub start: u16,
    pub levels: Vec<SourceParaHead>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceBullet {
    pub char: char,
    pub checked_char: Option<char>,
    pub image_bullet: bool,
    pub head: SourceParaHead,
}

impl Default for SourceBullet {
    fn default() -> Self {
        Self {
            char: '●',
            checked_char: None,
            image_bullet: false,
            head: SourceParaHead::default(),
        }
    }
}

/// Paragraph shape record.
///
/// Margins, indent and spacing are stored at half-HWPUNIT resolution, as is
/// the line spacing value unless `line_spacing_type` is percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParaShape {
    /// 0 justify, 1 left, 2 right, 3 center, 4 distribute, 5 divide
    pub alignment: u8,
    pub left_margin: i32,
    pub right_margin: i32,
    pub indent: i32,
    pub prev_spacing: i32,
    pub next_spacing: i32,
    /// 0 percent, 1 fixed, 2 between lines, 3 at least
    pub line_spacing_type: u8,
    pub line_spacing: i32,
    pub tab_def_id: u16,
    /// 0 none, 1 outline, 2 number, 3 bullet
    pub heading_type: u8,
    /// 1-based numbering or bullet id
    pub numbering_bullet_id: u16,
    pub heading_level: u8,
    /// 1-based border fill id, 0 for none
    pub border_fill_id: u16,
    pub border_offset_left: i16,
    pub border_offset_right: i16,
    pub border_offset_top: i16,
    pub border_offset_bottom: i16,
    /// 0 baseline, 1 top, 2 center, 3 bottom
    pub vertical_align: u8,
    /// 0 keep word, 1 hyphenation, 2 break word
    pub break_latin_word: u8,
    /// 0 keep word, 1 break word
    pub break_non_latin_word: u8,
    pub widow_orphan: bool,
    pub keep_with_next: bool,
    pub keep_lines: bool,
    pub page_break_before: bool,
    pub snap_to_grid: bool,
    pub condense: u8,
    pub auto_spacing_eng: bool,
    pub auto_spacing_num: bool,
    pub connect_border: bool,
    pub ignore_margin: bool,
}

impl Default for ParaShape {
    fn default() -> Self {
        Self {
            alignment: 0,
            left_margin: 0,
            right_margin: 0,
            indent: 0,
            prev_spacing: 0,
            next_spacing: 0,
            line_spacing_type: 0,
            line_spacing: 160,
            tab_def_id: 0,
            heading_type: 0,
            numbering_bullet_id: 0,
            heading_level: 0,
            border_fill_id: 0,
            border_offset_left: 0,
            border_offset_right: 0,
            border_offset_top: 0,
            border_offset_bottom: 0,
            vertical_align: 0,
            break_latin_word: 0,
            break_non_latin_word: 0,
            widow_orphan: false,
            keep_with_next: false,
            keep_lines: false,
            page_break_before: false,
            snap_to_grid: true,
            condense: 0,
            auto_spacing_eng: false,
            auto_spacing_num: false,
            connect_border: false,
            ignore_margin: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceStyle {
    pub name: String,
    pub english_name: String,
    /// 0 paragraph style, 1 character style
    pub kind: u8,
    pub next_style_id: u16,
    pub lang_id: i16,
    pub para_shape_id: u16,
    pub char_shape_id: u16,
    pub lock_form: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinDataKind {
    /// External file; no payload in the container
    Link,
    #[default]
    Embedding,
    /// OLE storage
    Storage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinCompression {
    /// Follow the file header's compression flag
    #[default]
    Default,
    Compress,
    NoCompress,
}

/// Bin-data record pointing at an embedded stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinDataRef {
    /// 1-based stream id
    pub id: u16,
    pub kind: BinDataKind,
    pub compression: BinCompression,
    /// Original extension without the dot
    pub extension: Option<String>,
    pub link_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_based_lookups() {
        let info = DocInfo {
            border_fills: vec![SourceBorderFill::default()],
            numberings: vec![SourceNumbering::default()],
            ..Default::default()
        };
        assert!(info.border_fill(0).is_none());
        assert!(info.border_fill(1).is_some());
        assert!(info.border_fill(2).is_none());
        assert!(info.numbering(1).is_some());
        assert!(info.bullet(1).is_none());
    }

    #[test]
    fn test_char_shape_defaults() {
        let shape = CharShape::default();
        assert_eq!(shape.base_size, 1000);
        assert_eq!(shape.ratios.latin, 100);
        assert_eq!(shape.shade_color, 0xFFFF_FFFF);
    }
}
