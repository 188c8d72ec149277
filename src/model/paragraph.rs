//! Paragraph and run-level types.

use serde::{Deserialize, Serialize};

use super::object::{
    AutoNumber, Equation, FieldBegin, HeaderFooter, Note, Ole, PageNumber, Picture, Shape,
};
use super::section::ColumnProperties;
use super::table::Table;

/// A paragraph: an ordered list of runs plus its property references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph instance id
    pub id: u32,

    /// Paragraph property id (header `paraPr`)
    pub para_pr_id: u32,

    /// Style id (header `style`)
    pub style_id: u32,

    pub page_break: bool,
    pub column_break: bool,

    /// Runs in document order; together they partition the paragraph content
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with one plain text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.runs.push(Run::text(0, text));
        p
    }

    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.plain_text()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.items.is_empty())
    }

    /// Iterate every run item, without descending into nested objects.
    pub fn items(&self) -> impl Iterator<Item = &RunItem> {
        self.runs.iter().flat_map(|r| r.items.iter())
    }
}

/// A contiguous range of content sharing one character property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Character property id (header `charPr`)
    pub char_pr_id: u32,

    /// Content items in order
    pub items: Vec<RunItem>,
}

impl Run {
    pub fn new(char_pr_id: u32) -> Self {
        Self {
            char_pr_id,
            items: Vec::new(),
        }
    }

    /// Run holding a single text item.
    pub fn text(char_pr_id: u32, text: impl Into<String>) -> Self {
        Self {
            char_pr_id,
            items: vec![RunItem::Text(vec![TextSegment::Text(text.into())])],
        }
    }

    /// Append a text segment, merging into a trailing text item.
    pub fn push_segment(&mut self, segment: TextSegment) {
        if let Some(RunItem::Text(segments)) = self.items.last_mut() {
            if let (Some(TextSegment::Text(last)), TextSegment::Text(next)) =
                (segments.last_mut(), &segment)
            {
                last.push_str(next);
                return;
            }
            segments.push(segment);
            return;
        }
        self.items.push(RunItem::Text(vec![segment]));
    }

    pub fn push_char(&mut self, c: char) {
        self.push_segment(TextSegment::Text(c.to_string()));
    }

    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            if let RunItem::Text(segments) = item {
                for segment in segments {
                    match segment {
                        TextSegment::Text(s) => out.push_str(s),
                        TextSegment::Tab => out.push('\t'),
                        TextSegment::LineBreak => out.push('\n'),
                        TextSegment::Hyphen => out.push('-'),
                        TextSegment::NbSpace | TextSegment::FwSpace => out.push(' '),
                    }
                }
            }
        }
        out
    }
}

/// Piece of a text item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum TextSegment {
    Text(String),
    Tab,
    LineBreak,
    Hyphen,
    NbSpace,
    FwSpace,
}

/// Content of a run.
///
/// Nested object kinds (tables, shapes with text, notes, headers) own their
/// own paragraph lists; this is where the tree recurses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunItem {
    Text(Vec<TextSegment>),
    /// Anchor of the section properties (first paragraph of a section)
    SectionDefinition,
    Columns(ColumnProperties),
    Table(Box<Table>),
    Picture(Box<Picture>),
    Shape(Box<Shape>),
    Ole(Box<Ole>),
    Equation(Box<Equation>),
    Header(Box<HeaderFooter>),
    Footer(Box<HeaderFooter>),
    Footnote(Box<Note>),
    Endnote(Box<Note>),
    FieldBegin(FieldBegin),
    FieldEnd {
        begin_id: u32,
    },
    Bookmark {
        name: String,
    },
    AutoNumber(AutoNumber),
    PageNumber(PageNumber),
}

impl RunItem {
    /// Whether this item is a visual object owning a binary resource.
    pub fn bin_item_ref(&self) -> Option<&str> {
        match self {
            RunItem::Picture(p) => Some(&p.bin_item_id),
            RunItem::Ole(o) => Some(&o.bin_item_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_segment_merges_text() {
        let mut run = Run::new(0);
        run.push_char('a');
        run.push_char('b');
        run.push_segment(TextSegment::Tab);
        run.push_char('c');

        assert_eq!(run.items.len(), 1);
        match &run.items[0] {
            RunItem::Text(segments) => assert_eq!(segments.len(), 3),
            other => panic!("unexpected item {:?}", other),
        }
        assert_eq!(run.plain_text(), "ab\tc");
    }

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::new();
        p.add_run(Run::text(0, "Hello "));
        p.add_run(Run::text(1, "world"));
        assert_eq!(p.plain_text(), "Hello world");
        assert!(!p.is_empty());
        assert!(Paragraph::new().is_empty());
    }
}
