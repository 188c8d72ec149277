//! Document-level types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BinItem, Header, RunItem, Section, SubList};

/// A translated document, ready for serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, author, etc.)
    pub metadata: Metadata,

    /// Global definition tables
    pub header: Header,

    /// Sections in document order
    pub sections: Vec<Section>,

    /// Binary parts, each referenced by at least one object
    pub bin_items: Vec<BinItem>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of top-level paragraphs across all sections.
    pub fn paragraph_count(&self) -> usize {
        self.sections.iter().map(|s| s.paragraphs.len()).sum()
    }

    pub fn bin_item(&self, id: &str) -> Option<&BinItem> {
        self.bin_items.iter().find(|b| b.id == id)
    }

    /// Check if the document has any sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.sections
            .iter()
            .map(|section| section.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Visit every run item in document order, descending into nested
    /// paragraph lists (cells, notes, headers, shape text).
    pub fn walk_items<'a, F: FnMut(&'a RunItem)>(&'a self, mut f: F) {
        for section in &self.sections {
            for paragraph in &section.paragraphs {
                for item in paragraph.items() {
                    walk_item(item, &mut f);
                }
            }
        }
    }
}

fn walk_item<'a, F: FnMut(&'a RunItem)>(item: &'a RunItem, f: &mut F) {
    f(item);
    match item {
        RunItem::Table(table) => {
            for cell in table.anchors() {
                walk_list(&cell.content, f);
            }
        }
        RunItem::Shape(shape) => {
            if let Some(text) = &shape.text {
                walk_list(text, f);
            }
        }
        RunItem::Header(hf) | RunItem::Footer(hf) => walk_list(&hf.content, f),
        RunItem::Footnote(note) | RunItem::Endnote(note) => walk_list(&note.content, f),
        _ => {}
    }
}

fn walk_list<'a, F: FnMut(&'a RunItem)>(list: &'a SubList, f: &mut F) {
    for paragraph in &list.paragraphs {
        for item in paragraph.items() {
            walk_item(item, f);
        }
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub keywords: Option<String>,
    pub description: Option<String>,
    pub last_saved_by: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    /// Content language, e.g. "ko"
    pub language: String,
    /// Source format version, e.g. "5.1.0.1"
    pub source_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, Run};

    #[test]
    fn test_document_counts() {
        let mut doc = Document::new();
        assert!(doc.is_empty());

        let mut section = Section::new();
        section.add_paragraph(Paragraph::with_text("a"));
        section.add_paragraph(Paragraph::with_text("b"));
        doc.sections.push(section);

        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.paragraph_count(), 2);
        assert_eq!(doc.plain_text(), "a\nb");
    }

    #[test]
    fn test_walk_items_descends_into_notes() {
        let mut inner = Paragraph::new();
        inner.add_run(Run::text(0, "note"));
        let note = crate::model::Note {
            number: 1,
            inst_id: 0,
            content: SubList::new(vec![inner]),
        };

        let mut p = Paragraph::new();
        let mut run = Run::new(0);
        run.items.push(RunItem::Footnote(Box::new(note)));
        p.add_run(run);

        let mut section = Section::new();
        section.add_paragraph(p);
        let doc = Document {
            sections: vec![section],
            ..Default::default()
        };

        let mut count = 0;
        doc.walk_items(|_| count += 1);
        assert_eq!(count, 2);
    }
}
