//! Section-level types.

use serde::{Deserialize, Serialize};

use super::enums::{ColumnKind, ColumnLayout, GutterType, PageBorderKind, TextDirection};
use super::header::Border;
use super::Paragraph;

/// A document section: page setup plus an ordered paragraph list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section properties (page size, margins, numbering starts)
    pub properties: SectionProperties,

    /// Paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
}

impl Section {
    /// Create a section with default A4 properties.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Get plain text content of the section.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Four-sided margins in HWPUNIT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Margins {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Margins {
    pub fn uniform(value: i32) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMargin {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
    pub header: i32,
    pub footer: i32,
    pub gutter: i32,
}

impl Default for PageMargin {
    fn default() -> Self {
        // 30mm/20mm/15mm in HWPUNIT
        Self {
            left: 8504,
            right: 8504,
            top: 5668,
            bottom: 4252,
            header: 4252,
            footer: 4252,
            gutter: 0,
        }
    }
}

/// Paper size and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageProperties {
    pub landscape: bool,
    pub width: i32,
    pub height: i32,
    pub gutter: GutterType,
    pub margin: PageMargin,
}

impl Default for PageProperties {
    /// A4 portrait.
    fn default() -> Self {
        Self {
            landscape: false,
            width: 59528,
            height: 84186,
            gutter: GutterType::LeftOnly,
            margin: PageMargin::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartNumbers {
    pub page: u16,
    pub picture: u16,
    pub table: u16,
    pub equation: u16,
}

impl Default for StartNumbers {
    fn default() -> Self {
        Self {
            page: 0,
            picture: 0,
            table: 0,
            equation: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBorderFill {
    pub kind: PageBorderKind,
    pub border_fill_id: u32,
    /// Offsets measured from the text area instead of the paper edge
    pub text_border: bool,
    pub header_inside: bool,
    pub footer_inside: bool,
    pub offset: Margins,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionProperties {
    pub text_direction: TextDirection,
    pub space_columns: i32,
    pub tab_stop: i32,
    /// Numbering used by outline headings, 0 if none
    pub outline_numbering_id: u32,
    pub hide_first_header: bool,
    pub hide_first_footer: bool,
    pub hide_first_page_number: bool,
    pub start_numbers: StartNumbers,
    pub page: PageProperties,
    pub page_border_fills: Vec<PageBorderFill>,
}

impl Default for SectionProperties {
    fn default() -> Self {
        Self {
            text_direction: TextDirection::Horizontal,
            space_columns: 1134,
            tab_stop: 8000,
            outline_numbering_id: 0,
            hide_first_header: false,
            hide_first_footer: false,
            hide_first_page_number: false,
            start_numbers: StartNumbers::default(),
            page: PageProperties::default(),
            page_border_fills: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnWidth {
    pub width: i32,
    pub gap: i32,
}

/// Column layout change, effective from the paragraph that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProperties {
    pub kind: ColumnKind,
    pub count: u16,
    pub layout: ColumnLayout,
    pub same_size: bool,
    pub same_gap: i32,
    /// Explicit widths when `same_size` is false
    pub widths: Vec<ColumnWidth>,
    pub separator: Option<Border>,
}

impl Default for ColumnProperties {
    fn default() -> Self {
        Self {
            kind: ColumnKind::Newspaper,
            count: 1,
            layout: ColumnLayout::Left,
            same_size: true,
            same_gap: 0,
            widths: Vec::new(),
            separator: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_is_a4_portrait() {
        let page = PageProperties::default();
        assert!(!page.landscape);
        assert!(page.height > page.width);
    }

    #[test]
    fn test_section_plain_text() {
        let mut section = Section::new();
        section.add_paragraph(Paragraph::with_text("first"));
        section.add_paragraph(Paragraph::with_text("second"));
        assert_eq!(section.paragraph_count(), 2);
        assert_eq!(section.plain_text(), "first\nsecond");
    }
}
