//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Read};

use hwp2hwpx::model::LangValues;
use hwp2hwpx::source::{
    CharShape, Control, FaceName, HwpDocument, ParaShape, SectionDef, SourceBorderFill,
    SourceCell, SourceNumbering, SourceParagraph, SourceSection, SourceStyle, SourceTable,
};

/// Extended control code shared by section and column definitions.
pub const SECTION_CODE: u16 = 2;
/// Extended control code of tables and drawing objects.
pub const OBJECT_CODE: u16 = 11;

/// Source document with one definition of each kind, so a body that only
/// uses index 0 converts without diagnostics.
pub fn source_document(sections: Vec<Vec<SourceParagraph>>) -> HwpDocument {
    let mut doc = HwpDocument::default();
    doc.doc_info.face_names = LangValues::uniform(vec![FaceName::new("Batang")]);
    doc.doc_info.border_fills = vec![SourceBorderFill::default()];
    doc.doc_info.char_shapes = vec![CharShape::default()];
    doc.doc_info.numberings = vec![SourceNumbering::default()];
    doc.doc_info.para_shapes = vec![ParaShape::default()];
    doc.doc_info.styles = vec![SourceStyle {
        name: "Body".to_string(),
        english_name: "Normal".to_string(),
        ..Default::default()
    }];
    doc.doc_info.properties.section_count = sections.len() as u16;
    doc.sections = sections
        .into_iter()
        .map(|paragraphs| SourceSection { paragraphs })
        .collect();
    doc
}

/// Paragraph holding only the section definition.
pub fn section_def_paragraph() -> SourceParagraph {
    let mut paragraph = SourceParagraph::from_text("", 0, 0, 0);
    paragraph.push_control(SECTION_CODE, Control::SectionDef(SectionDef::default()));
    paragraph
}

pub fn text(text: &str) -> SourceParagraph {
    SourceParagraph::from_text(text, 0, 0, 0)
}

/// A section: the definition paragraph followed by one paragraph per text.
pub fn section(texts: &[&str]) -> Vec<SourceParagraph> {
    let mut paragraphs = vec![section_def_paragraph()];
    paragraphs.extend(texts.iter().map(|t| text(t)));
    paragraphs
}

/// Paragraph anchoring a single control.
pub fn control_paragraph(code: u16, control: Control) -> SourceParagraph {
    let mut paragraph = SourceParagraph::from_text("", 0, 0, 0);
    paragraph.push_control(code, control);
    paragraph
}

pub fn cell(row: i32, col: i32, row_span: i32, col_span: i32, content: &str) -> SourceCell {
    SourceCell {
        row,
        col,
        row_span,
        col_span,
        width: 4000,
        height: 1000,
        paragraphs: vec![text(content)],
        ..Default::default()
    }
}

pub fn table(rows: u16, cols: u16, cells: Vec<SourceCell>) -> SourceTable {
    let mut table = SourceTable {
        rows,
        cols,
        border_fill_id: 1,
        cells,
        ..Default::default()
    };
    table.common.width = 8000;
    table.common.height = 2000;
    table
}

/// Names of the package entries in archive order.
pub fn entry_names(package: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(Cursor::new(package)).unwrap();
    archive.file_names().map(String::from).collect()
}

/// Content of one package entry.
pub fn read_entry(package: &[u8], name: &str) -> Vec<u8> {
    let mut archive = zip::ZipArchive::new(Cursor::new(package)).unwrap();
    let mut entry = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("package has no entry {}", name));
    let mut data = Vec::new();
    entry.read_to_end(&mut data).unwrap();
    data
}

pub fn read_text_entry(package: &[u8], name: &str) -> String {
    String::from_utf8(read_entry(package, name)).unwrap()
}

/// Compare two XML documents element by element.
///
/// Element and attribute names compare by namespace URI and local name;
/// attribute order and whitespace-only text are ignored.
pub fn assert_xml_eq(actual: &str, expected: &str) {
    let actual_doc = roxmltree::Document::parse(actual).expect("actual XML parses");
    let expected_doc = roxmltree::Document::parse(expected).expect("expected XML parses");
    compare_nodes(actual_doc.root_element(), expected_doc.root_element(), "");
}

fn compare_nodes(actual: roxmltree::Node, expected: roxmltree::Node, path: &str) {
    let path = format!("{}/{}", path, expected.tag_name().name());
    assert_eq!(
        actual.tag_name(),
        expected.tag_name(),
        "element mismatch at {}",
        path
    );

    let attributes = |node: roxmltree::Node| {
        let mut attrs: Vec<(String, String)> = node
            .attributes()
            .map(|a| {
                let key = match a.namespace() {
                    Some(ns) => format!("{{{}}}{}", ns, a.name()),
                    None => a.name().to_string(),
                };
                (key, a.value().to_string())
            })
            .collect();
        attrs.sort();
        attrs
    };
    assert_eq!(
        attributes(actual),
        attributes(expected),
        "attribute mismatch at {}",
        path
    );

    let text = |node: roxmltree::Node| -> String {
        node.children()
            .filter(|c| c.is_text())
            .filter_map(|c| c.text())
            .filter(|t| !t.trim().is_empty())
            .collect()
    };
    assert_eq!(text(actual), text(expected), "text mismatch at {}", path);

    let actual_children: Vec<_> = actual.children().filter(|c| c.is_element()).collect();
    let expected_children: Vec<_> = expected.children().filter(|c| c.is_element()).collect();
    assert_eq!(
        actual_children.len(),
        expected_children.len(),
        "child count mismatch at {}",
        path
    );
    for (a, e) in actual_children.into_iter().zip(expected_children) {
        compare_nodes(a, e, &path);
    }
}
