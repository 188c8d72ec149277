//! Integration tests for the conversion engine and the written package.

mod common;

use common::*;
use hwp2hwpx::model::{CellSlot, Paragraph, RunItem, Table};
use std::collections::HashSet;

use hwp2hwpx::source::{
    BinCompression, BinDataRef, CharShape, Control, EmbeddedBinData, SectionDef, SourceNumbering,
    SourceParagraph, SourcePicture,
};
use hwp2hwpx::{
    convert, convert_bytes, convert_with_options, ConvertOptions, DiagnosticKind, Document, Error,
    Hwp2Hwpx, HwpDocument, Location, WriteOptions,
};
use hwp2hwpx::writer::write_package;

const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR\x00\x00\x00\x01";

fn with_image(doc: &mut HwpDocument, id: u16, data: &[u8]) {
    doc.doc_info.bin_data_refs.push(BinDataRef {
        id,
        extension: Some("png".to_string()),
        compression: BinCompression::NoCompress,
        ..Default::default()
    });
    doc.bin_data.push(EmbeddedBinData {
        id,
        data: data.to_vec(),
    });
}

fn picture(bin_data_id: u16) -> SourceParagraph {
    let mut picture = SourcePicture {
        bin_data_id,
        original_width: 1000,
        original_height: 1000,
        ..Default::default()
    };
    picture.common.width = 1000;
    picture.common.height = 1000;
    control_paragraph(OBJECT_CODE, Control::Picture(picture))
}

fn first_table(paragraph: &Paragraph) -> &Table {
    paragraph
        .items()
        .find_map(|item| match item {
            RunItem::Table(table) => Some(table.as_ref()),
            _ => None,
        })
        .expect("paragraph holds a table")
}

/// Every paragraph, including those nested in table cells.
fn all_paragraphs(doc: &Document) -> Vec<&Paragraph> {
    fn visit<'a>(paragraphs: &'a [Paragraph], out: &mut Vec<&'a Paragraph>) {
        for paragraph in paragraphs {
            out.push(paragraph);
            for item in paragraph.items() {
                if let RunItem::Table(table) = item {
                    for cell in table.anchors() {
                        visit(&cell.content.paragraphs, out);
                    }
                }
            }
        }
    }
    let mut out = Vec::new();
    for section in &doc.sections {
        visit(&section.paragraphs, &mut out);
    }
    out
}

fn rich_document() -> HwpDocument {
    let mut first = section(&["Hello", "World"]);
    first.push(picture(1));
    first.push(control_paragraph(
        OBJECT_CODE,
        Control::Table(table(
            2,
            2,
            vec![
                cell(0, 0, 1, 1, "a"),
                cell(0, 1, 1, 1, "b"),
                cell(1, 0, 1, 1, "c"),
                cell(1, 1, 1, 1, "d"),
            ],
        )),
    ));
    let second = section(&["Second section"]);
    let third = section(&["Third", "section"]);
    let mut doc = source_document(vec![first, second, third]);
    with_image(&mut doc, 1, PNG);
    doc
}

#[test]
fn test_round_trip_through_package() {
    let doc = rich_document();
    let result = Hwp2Hwpx::new().convert(&doc).unwrap();
    assert!(result.is_clean(), "unexpected: {:?}", result.diagnostics);

    let package = result.to_bytes().unwrap();
    let names = entry_names(&package);
    for expected in [
        "mimetype",
        "version.xml",
        "Contents/header.xml",
        "Contents/section0.xml",
        "Contents/section1.xml",
        "Contents/section2.xml",
        "BinData/image1.png",
        "Contents/content.hpf",
        "META-INF/container.xml",
    ] {
        assert!(names.contains(&expected.to_string()), "missing {}", expected);
    }
    assert_eq!(read_entry(&package, "BinData/image1.png"), PNG);

    let header = read_text_entry(&package, "Contents/header.xml");
    let header = roxmltree::Document::parse(&header).unwrap();
    let ids = |tag: &str| -> Vec<String> {
        header
            .descendants()
            .filter(|n| n.has_tag_name(tag))
            .filter_map(|n| n.attribute("id"))
            .map(String::from)
            .collect()
    };
    let char_pr_ids = ids("charPr");
    let para_pr_ids = ids("paraPr");
    let style_ids = ids("style");
    assert_eq!(char_pr_ids.len(), result.document.header.char_properties.len());

    let section = read_text_entry(&package, "Contents/section0.xml");
    let section = roxmltree::Document::parse(&section).unwrap();
    for node in section.descendants().filter(|n| n.is_element()) {
        if let Some(id) = node.attribute("charPrIDRef") {
            assert!(char_pr_ids.iter().any(|c| c == id), "charPr {} not in header", id);
        }
        if let Some(id) = node.attribute("paraPrIDRef") {
            assert!(para_pr_ids.iter().any(|p| p == id), "paraPr {} not in header", id);
        }
        if let Some(id) = node.attribute("styleIDRef") {
            assert!(style_ids.iter().any(|s| s == id), "style {} not in header", id);
        }
    }

    let texts: Vec<&str> = section
        .descendants()
        .filter(|n| n.has_tag_name("t"))
        .filter_map(|n| n.text())
        .collect();
    assert_eq!(texts, vec!["Hello", "World", "a", "b", "c", "d"]);

    let img = section
        .descendants()
        .find(|n| n.has_tag_name("img"))
        .expect("picture written");
    assert_eq!(img.attribute("binaryItemIDRef"), Some("image1"));
    assert_eq!(
        section.descendants().filter(|n| n.has_tag_name("tc")).count(),
        4
    );

    let hpf = read_text_entry(&package, "Contents/content.hpf");
    assert!(hpf.contains("href=\"BinData/image1.png\""));
}

#[test]
fn test_json_source_matches_in_memory_source() {
    let doc = rich_document();
    let json = doc.to_json().unwrap();

    let from_memory = convert(&doc).unwrap();
    let from_json = convert_bytes(json.as_bytes()).unwrap();
    assert_eq!(from_memory.document, from_json.document);
}

#[test]
fn test_unresolved_char_shape_reported_once_at_run() {
    let mut paragraphs = section(&[]);
    paragraphs.push(SourceParagraph::from_text("orphan", 0, 0, 99));
    let doc = source_document(vec![paragraphs]);

    let result = convert(&doc).unwrap();
    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = result.diagnostics.first().unwrap();
    assert_eq!(diagnostic.kind, DiagnosticKind::DanglingReference);
    assert_eq!(diagnostic.location, Location::section(0).paragraph(1).run(0));

    // the run falls back to an existing character property
    let paragraph = &result.document.sections[0].paragraphs[1];
    let char_pr_id = paragraph.runs[0].char_pr_id;
    assert!(result.document.header.char_pr(char_pr_id).is_some());
    assert_eq!(paragraph.plain_text(), "orphan");
}

#[test]
fn test_unresolved_style_reported_at_paragraph() {
    let mut paragraphs = section(&[]);
    paragraphs.push(SourceParagraph::from_text("x", 0, 5, 0));
    let doc = source_document(vec![paragraphs]);

    let result = convert(&doc).unwrap();
    let misses = result.diagnostics.of_kind(DiagnosticKind::DanglingReference);
    assert_eq!(misses.len(), 1);
    assert_eq!(misses[0].location, Location::section(0).paragraph(1));
    let style_id = result.document.sections[0].paragraphs[1].style_id;
    assert!(result.document.header.style(style_id).is_some());
}

#[test]
fn test_unknown_control_skipped_with_warning() {
    let mut paragraphs = section(&["before"]);
    paragraphs.push(control_paragraph(
        OBJECT_CODE,
        Control::Unknown {
            ctrl_id: "tcmt".to_string(),
        },
    ));
    let doc = source_document(vec![paragraphs]);

    let result = convert(&doc).unwrap();
    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = result.diagnostics.first().unwrap();
    assert_eq!(diagnostic.kind, DiagnosticKind::UnsupportedEntity);
    assert_eq!(
        diagnostic.location,
        Location::section(0).paragraph(2).control(0)
    );
    assert!(result.document.sections[0].paragraphs[2].is_empty());
}

#[test]
fn test_table_colspan_keeps_every_slot() {
    let mut paragraphs = section(&[]);
    paragraphs.push(control_paragraph(
        OBJECT_CODE,
        Control::Table(table(
            2,
            2,
            vec![
                cell(0, 0, 1, 2, "merged"),
                cell(1, 0, 1, 1, "left"),
                cell(1, 1, 1, 1, "right"),
            ],
        )),
    ));
    let doc = source_document(vec![paragraphs]);

    let result = convert(&doc).unwrap();
    assert!(result.is_clean(), "unexpected: {:?}", result.diagnostics);

    let table = first_table(&result.document.sections[0].paragraphs[1]);
    assert_eq!(table.slot_count(), 4);
    match table.slot(0, 0) {
        Some(CellSlot::Anchor(cell)) => {
            assert_eq!(cell.col_span, 2);
            assert_eq!(cell.content.plain_text(), "merged");
        }
        other => panic!("expected anchor, got {:?}", other),
    }
    assert_eq!(
        table.slot(0, 1),
        Some(&CellSlot::Covered {
            anchor_row: 0,
            anchor_col: 0
        })
    );
    assert!(table.slot(1, 0).is_some_and(|s| s.is_anchor()));
    assert!(table.slot(1, 1).is_some_and(|s| s.is_anchor()));
    assert_eq!(table.anchors().count(), 3);
    assert_eq!(table.plain_text(), "merged\nleft\tright");

    let package = write_package(&result.document, &WriteOptions::default()).unwrap();
    let xml = read_text_entry(&package, "Contents/section0.xml");
    assert_eq!(xml.matches("<hp:tc ").count(), 3);
    assert!(xml.contains("<hp:cellSpan colSpan=\"2\" rowSpan=\"1\"/>"));
}

#[test]
fn test_overlapping_cells_become_placeholder() {
    let mut paragraphs = section(&[]);
    paragraphs.push(control_paragraph(
        OBJECT_CODE,
        Control::Table(table(
            2,
            2,
            vec![cell(0, 0, 2, 2, "big"), cell(1, 1, 1, 1, "clash")],
        )),
    ));
    let doc = source_document(vec![paragraphs]);

    let result = convert(&doc).unwrap();
    let structural = result
        .diagnostics
        .of_kind(DiagnosticKind::StructuralIntegrity);
    assert_eq!(structural.len(), 1);
    assert_eq!(
        structural[0].location,
        Location::section(0).paragraph(1).control(0)
    );

    let table = first_table(&result.document.sections[0].paragraphs[1]);
    assert_eq!(table.slot_count(), 4);
    assert!(table.anchors().all(|c| c.content.paragraphs.len() == 1));
}

#[test]
fn test_discarded_table_leaves_no_orphans() {
    let mut big = cell(0, 0, 2, 2, "big");
    big.paragraphs.push(SourceParagraph::from_text("bold", 0, 0, 1));
    big.paragraphs.push(picture(1));
    let mut paragraphs = section(&["plain"]);
    paragraphs.push(control_paragraph(
        OBJECT_CODE,
        Control::Table(table(2, 2, vec![big, cell(1, 1, 1, 1, "clash")])),
    ));
    let mut doc = source_document(vec![paragraphs]);
    doc.doc_info.char_shapes.push(CharShape {
        bold: true,
        ..Default::default()
    });
    with_image(&mut doc, 1, PNG);

    let result = convert(&doc).unwrap();
    assert_eq!(
        result.diagnostics.count(DiagnosticKind::StructuralIntegrity),
        1
    );
    assert!(result.document.bin_items.is_empty());

    let header = &result.document.header;
    let mut used: HashSet<u32> = all_paragraphs(&result.document)
        .iter()
        .flat_map(|p| p.runs.iter().map(|r| r.char_pr_id))
        .collect();
    used.extend(header.styles.iter().map(|s| s.char_pr_id));
    assert_eq!(used.len(), header.char_properties.len());
    assert!(header.char_properties.iter().all(|c| !c.bold));

    let package = write_package(&result.document, &WriteOptions::default()).unwrap();
    assert!(entry_names(&package).iter().all(|n| !n.starts_with("BinData/")));
}

#[test]
fn test_misplaced_section_definition_leaves_no_numbering() {
    let mut paragraphs = section(&["a"]);
    paragraphs.push(control_paragraph(
        SECTION_CODE,
        Control::SectionDef(SectionDef {
            outline_numbering_id: 2,
            ..Default::default()
        }),
    ));
    let mut doc = source_document(vec![paragraphs]);
    doc.doc_info.numberings.push(SourceNumbering {
        start: 5,
        ..Default::default()
    });

    let result = convert(&doc).unwrap();
    assert_eq!(
        result.diagnostics.count(DiagnosticKind::StructuralIntegrity),
        1
    );
    assert_eq!(result.document.header.numberings.len(), 1);
}

#[test]
fn test_missing_section_definition_recovered() {
    let doc = source_document(vec![vec![text("no definition")]]);

    let result = convert(&doc).unwrap();
    let structural = result
        .diagnostics
        .of_kind(DiagnosticKind::StructuralIntegrity);
    assert_eq!(structural.len(), 1);
    assert_eq!(structural[0].location, Location::section(0).paragraph(0));

    let package = write_package(&result.document, &WriteOptions::default()).unwrap();
    let xml = read_text_entry(&package, "Contents/section0.xml");
    assert!(xml.contains("<hp:secPr "));
}

#[test]
fn test_empty_section_is_fatal() {
    let mut doc = source_document(vec![section(&["a"])]);
    doc.sections.push(Default::default());

    let err = convert(&doc).unwrap_err();
    assert!(err.is_fatal());
    match err {
        Error::StructuralIntegrity { location, .. } => assert_eq!(location, Location::section(1)),
        other => panic!("expected structural error, got {:?}", other),
    }
}

#[test]
fn test_strict_mode_rejects_recoverable_problem() {
    let mut paragraphs = section(&[]);
    paragraphs.push(SourceParagraph::from_text("x", 0, 0, 99));
    let doc = source_document(vec![paragraphs]);

    assert!(convert(&doc).is_ok());
    let err = Hwp2Hwpx::new().strict().convert(&doc).err().unwrap();
    assert!(matches!(err, Error::Strict(_)));
}

#[test]
fn test_missing_stream_drops_picture() {
    let mut paragraphs = section(&["caption"]);
    paragraphs.push(picture(7));
    let doc = source_document(vec![paragraphs]);

    let result = convert(&doc).unwrap();
    let failures = result.diagnostics.of_kind(DiagnosticKind::ResourcePipeline);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].location, Location::section(0).paragraph(2).control(0));
    assert!(result.document.bin_items.is_empty());

    let mut pictures = 0;
    result.document.walk_items(|item| {
        if matches!(item, RunItem::Picture(_)) {
            pictures += 1;
        }
    });
    assert_eq!(pictures, 0);
}

#[test]
fn test_identical_payloads_share_one_part() {
    let mut paragraphs = section(&[]);
    paragraphs.push(picture(1));
    paragraphs.push(picture(2));
    let mut doc = source_document(vec![paragraphs]);
    with_image(&mut doc, 1, PNG);
    with_image(&mut doc, 2, PNG);

    let options = ConvertOptions::new().with_stats(true);
    let result = convert_with_options(&doc, &options).unwrap();
    assert!(result.is_clean());
    assert_eq!(result.document.bin_items.len(), 1);

    let mut refs = Vec::new();
    result.document.walk_items(|item| {
        if let Some(id) = item.bin_item_ref() {
            refs.push(id.to_string());
        }
    });
    assert_eq!(refs, vec!["image1", "image1"]);

    let stats = result.stats.unwrap();
    assert_eq!(stats.picture_count, 2);
    assert_eq!(stats.bin_item_count, 1);
    assert_eq!(stats.deduplicated_resources, 1);
}

#[test]
fn test_every_reference_resolves() {
    let doc = rich_document();
    let result = convert(&doc).unwrap();
    let header = &result.document.header;

    for paragraph in all_paragraphs(&result.document) {
        assert!(header.para_pr(paragraph.para_pr_id).is_some());
        assert!(header.style(paragraph.style_id).is_some());
        for run in &paragraph.runs {
            assert!(header.char_pr(run.char_pr_id).is_some());
        }
    }
    for style in &header.styles {
        assert!(header.para_pr(style.para_pr_id).is_some());
        assert!(header.char_pr(style.char_pr_id).is_some());
        assert!(header.style(style.next_style_id).is_some());
    }
    let mut refs = Vec::new();
    result.document.walk_items(|item| refs.extend(item.bin_item_ref()));
    for id in refs {
        assert!(result.document.bin_item(id).is_some());
    }
}

#[test]
fn test_parallel_and_sequential_output_identical() {
    let doc = rich_document();

    let parallel = Hwp2Hwpx::new().convert(&doc).unwrap();
    let sequential = Hwp2Hwpx::new().sequential().convert(&doc).unwrap();
    assert_eq!(parallel.document, sequential.document);
    assert_eq!(parallel.diagnostics, sequential.diagnostics);
    assert_eq!(parallel.to_bytes().unwrap(), sequential.to_bytes().unwrap());

    let again = Hwp2Hwpx::new().convert(&doc).unwrap();
    assert_eq!(parallel.to_bytes().unwrap(), again.to_bytes().unwrap());
}

#[test]
fn test_diagnostics_follow_document_order() {
    let mut first = section(&[]);
    first.push(SourceParagraph::from_text("a", 0, 0, 50));
    let mut second = section(&[]);
    second.push(SourceParagraph::from_text("b", 0, 0, 60));
    let doc = source_document(vec![first, second]);

    let result = convert(&doc).unwrap();
    let locations: Vec<_> = result
        .diagnostics
        .iter()
        .map(|d| d.location.clone())
        .collect();
    assert_eq!(
        locations,
        vec![
            Location::section(0).paragraph(1).run(0),
            Location::section(1).paragraph(1).run(0),
        ]
    );
}
