//! Benchmarks for hwp2hwpx conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks convert synthetic decoded documents with many sections.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hwp2hwpx::model::LangValues;
use hwp2hwpx::source::{
    CharShape, Control, FaceName, HwpDocument, ParaShape, SectionDef, SourceBorderFill, SourceCell,
    SourceParagraph, SourceSection, SourceStyle, SourceTable,
};
use hwp2hwpx::writer::write_package;
use hwp2hwpx::{convert_with_options, ConvertOptions, WriteOptions};

/// Creates a synthetic document with `section_count` sections of text and
/// one table each.
fn create_test_document(section_count: usize, paragraphs_per_section: usize) -> HwpDocument {
    let mut doc = HwpDocument::default();
    doc.doc_info.face_names = LangValues::uniform(vec![FaceName::new("Batang")]);
    doc.doc_info.border_fills = vec![SourceBorderFill::default()];
    doc.doc_info.char_shapes = vec![
        CharShape::default(),
        CharShape {
            bold: true,
            ..Default::default()
        },
    ];
    doc.doc_info.para_shapes = vec![ParaShape::default()];
    doc.doc_info.styles = vec![SourceStyle {
        name: "Body".to_string(),
        ..Default::default()
    }];

    for s in 0..section_count {
        let mut paragraphs = Vec::with_capacity(paragraphs_per_section + 2);
        let mut first = SourceParagraph::from_text("", 0, 0, 0);
        first.push_control(
            2,
            Control::SectionDef(SectionDef {
                outline_numbering_id: 0,
                ..Default::default()
            }),
        );
        paragraphs.push(first);

        for p in 0..paragraphs_per_section {
            let text = format!(
                "Section {} paragraph {}: the quick brown fox jumps over the lazy dog.",
                s, p
            );
            paragraphs.push(SourceParagraph::from_text(&text, 0, 0, (p % 2) as u32));
        }

        let cells = (0..4)
            .map(|i| SourceCell {
                row: i / 2,
                col: i % 2,
                paragraphs: vec![SourceParagraph::from_text("cell", 0, 0, 0)],
                ..Default::default()
            })
            .collect();
        let mut table = SourceParagraph::from_text("", 0, 0, 0);
        table.push_control(
            11,
            Control::Table(SourceTable {
                rows: 2,
                cols: 2,
                cells,
                ..Default::default()
            }),
        );
        paragraphs.push(table);

        doc.sections.push(SourceSection { paragraphs });
    }
    doc
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for sections in [1, 8, 32] {
        let doc = create_test_document(sections, 200);
        group.bench_with_input(BenchmarkId::new("parallel", sections), &doc, |b, doc| {
            b.iter(|| convert_with_options(black_box(doc), &ConvertOptions::default()))
        });
        group.bench_with_input(BenchmarkId::new("sequential", sections), &doc, |b, doc| {
            b.iter(|| convert_with_options(black_box(doc), &ConvertOptions::new().sequential()))
        });
    }

    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let doc = create_test_document(8, 200);
    let Ok(result) = convert_with_options(&doc, &ConvertOptions::default()) else {
        return;
    };

    c.bench_function("write_package", |b| {
        b.iter(|| write_package(black_box(&result.document), &WriteOptions::default()))
    });
    c.bench_function("write_package_stored", |b| {
        b.iter(|| write_package(black_box(&result.document), &WriteOptions::new().stored()))
    });
}

criterion_group!(benches, bench_convert, bench_write);
criterion_main!(benches);
