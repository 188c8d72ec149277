//! Body text records: sections, paragraphs and their character streams.

use serde::{Deserialize, Serialize};

use super::control::Control;

/// Width in code units of inline and extended control characters.
pub const CONTROL_CHAR_WIDTH: u32 = 8;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSection {
    pub paragraphs: Vec<SourceParagraph>,
}

/// Paragraph header record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParaHeader {
    pub para_shape_id: u16,
    pub style_id: u16,
    pub page_break: bool,
    pub column_break: bool,
    pub instance_id: u32,
}

/// Position at which a character shape starts applying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharShapeRun {
    /// Offset in code units from the start of the paragraph
    pub position: u32,
    pub char_shape_id: u32,
}

/// One element of a paragraph's character stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum HwpChar {
    /// Consecutive ordinary characters
    Text(String),
    /// Single-unit control character (line break, paragraph break, hyphen...)
    CharControl(u16),
    /// Inline control (tab, field end) occupying eight units
    Inline(u16),
    /// Extended control occupying eight units; consumes the next [`Control`]
    Extended(u16),
}

impl HwpChar {
    pub const FIELD_END: u16 = 4;
    pub const TAB: u16 = 9;
    pub const LINE_BREAK: u16 = 10;
    pub const PARA_BREAK: u16 = 13;
    pub const HYPHEN: u16 = 24;
    pub const NB_SPACE: u16 = 30;
    pub const FW_SPACE: u16 = 31;

    /// Width in UTF-16 code units.
    pub fn width(&self) -> u32 {
        match self {
            HwpChar::Text(text) => text.encode_utf16().count() as u32,
            HwpChar::CharControl(_) => 1,
            HwpChar::Inline(_) | HwpChar::Extended(_) => CONTROL_CHAR_WIDTH,
        }
    }
}

/// A body paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceParagraph {
    pub header: ParaHeader,
    pub chars: Vec<HwpChar>,
    pub char_shape_runs: Vec<CharShapeRun>,
    /// Controls in the order their extended characters appear
    pub controls: Vec<Control>,
}

impl SourceParagraph {
    /// Paragraph with one text run in a single character shape.
    pub fn from_text(text: &str, para_shape_id: u16, style_id: u16, char_shape_id: u32) -> Self {
        let mut chars = Vec::new();
        if !text.is_empty() {
            chars.push(HwpChar::Text(text.to_string()));
        }
        chars.push(HwpChar::CharControl(HwpChar::PARA_BREAK));
        Self {
            header: ParaHeader {
                para_shape_id,
                style_id,
                ..Default::default()
            },
            chars,
            char_shape_runs: vec![CharShapeRun {
                position: 0,
                char_shape_id,
            }],
            controls: Vec::new(),
        }
    }

    /// Append an extended control and its anchor character.
    pub fn push_control(&mut self, code: u16, control: Control) {
        let at = self
            .chars
            .iter()
            .rposition(|c| *c == HwpChar::CharControl(HwpChar::PARA_BREAK))
            .unwrap_or(self.chars.len());
        self.chars.insert(at, HwpChar::Extended(code));
        self.controls.push(control);
    }

    /// Total length of the character stream in code units.
    pub fn text_len(&self) -> u32 {
        self.chars.iter().map(HwpChar::width).sum()
    }

    /// Number of extended characters, which should equal `controls.len()`.
    pub fn extended_count(&self) -> usize {
        self.chars
            .iter()
            .filter(|c| matches!(c, HwpChar::Extended(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_widths() {
        assert_eq!(HwpChar::Text("한글ab".into()).width(), 4);
        assert_eq!(HwpChar::Text("😀".into()).width(), 2);
        assert_eq!(HwpChar::CharControl(HwpChar::LINE_BREAK).width(), 1);
        assert_eq!(HwpChar::Inline(HwpChar::TAB).width(), 8);
        assert_eq!(HwpChar::Extended(11).width(), 8);
    }

    #[test]
    fn test_from_text() {
        let p = SourceParagraph::from_text("abc", 1, 2, 3);
        assert_eq!(p.text_len(), 4);
        assert_eq!(p.header.para_shape_id, 1);
        assert_eq!(p.char_shape_runs[0].char_shape_id, 3);
    }

    #[test]
    fn test_push_control_before_para_break() {
        let mut p = SourceParagraph::from_text("a", 0, 0, 0);
        p.push_control(22, Control::Bookmark { name: "b".into() });
        assert_eq!(p.chars[1], HwpChar::Extended(22));
        assert_eq!(p.chars.last(), Some(&HwpChar::CharControl(HwpChar::PARA_BREAK)));
        assert_eq!(p.extended_count(), 1);
    }
}
