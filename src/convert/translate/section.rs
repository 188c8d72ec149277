//! Section properties and column definitions.

use super::enums;
use super::units::{color, margins};
use super::Translator;
use crate::diagnostics::{DiagnosticKind, Location};
use crate::model::{
    Border, ColumnProperties, ColumnWidth, PageBorderFill, PageMargin, PageProperties, RunItem,
    Section, SectionProperties, StartNumbers,
};
use crate::source::{ColumnDef, SectionDef, SourceSection};

impl<'a> Translator<'a> {
    /// Translate one top-level section. The section must have at least one
    /// paragraph.
    pub fn section(&mut self, index: usize, source: &SourceSection) -> Section {
        let loc = Location::section(index);
        self.section_properties = None;

        let mut paragraphs = Vec::with_capacity(source.paragraphs.len());
        for (i, paragraph) in source.paragraphs.iter().enumerate() {
            self.accept_section_def = i == 0;
            paragraphs.push(self.paragraph(paragraph, &loc.paragraph(i)));
        }
        self.accept_section_def = false;

        let properties = match self.section_properties.take() {
            Some(properties) => properties,
            None => {
                self.warn(
                    DiagnosticKind::StructuralIntegrity,
                    &loc.paragraph(0),
                    "section has no section definition; using A4 defaults",
                );
                if let Some(run) = paragraphs.first_mut().and_then(|p| p.runs.first_mut()) {
                    run.items.insert(0, RunItem::SectionDefinition);
                }
                SectionProperties::default()
            }
        };

        Section {
            properties,
            paragraphs,
        }
    }

    pub(super) fn section_def(&mut self, def: &SectionDef, loc: &Location) -> Option<RunItem> {
        if !self.accept_section_def || self.section_properties.is_some() {
            self.warn(
                DiagnosticKind::StructuralIntegrity,
                loc,
                "section definition outside the first paragraph of a section; ignored",
            );
            return None;
        }
        let properties = self.section_properties(def, loc);
        self.section_properties = Some(properties);
        Some(RunItem::SectionDefinition)
    }

    fn section_properties(&mut self, def: &SectionDef, loc: &Location) -> SectionProperties {
        let tables = self.ctx.tables;
        let outline_numbering_id = match def.outline_numbering_id {
            0 => 0,
            id => self.resolve(&tables.numberings, id as u32, loc),
        };
        let page_border_fills = def
            .page_border_fills
            .iter()
            .map(|fill| PageBorderFill {
                kind: enums::PAGE_BORDER_KIND.map(fill.kind, loc, &mut self.diagnostics),
                border_fill_id: self.border_fill_ref(fill.border_fill_id, loc),
                text_border: fill.text_border,
                header_inside: fill.header_inside,
                footer_inside: fill.footer_inside,
                offset: margins(fill.offset),
            })
            .collect();

        let diags = &mut self.diagnostics;
        SectionProperties {
            text_direction: enums::TEXT_DIRECTION.map(def.text_direction, loc, diags),
            space_columns: def.space_columns,
            tab_stop: def.tab_stop,
            outline_numbering_id,
            hide_first_header: def.hide_first_header,
            hide_first_footer: def.hide_first_footer,
            hide_first_page_number: def.hide_first_page_number,
            start_numbers: StartNumbers {
                page: def.start_numbers.page,
                picture: def.start_numbers.picture,
                table: def.start_numbers.table,
                equation: def.start_numbers.equation,
            },
            page: PageProperties {
                landscape: def.page.landscape,
                width: def.page.width,
                height: def.page.height,
                gutter: enums::GUTTER.map(def.page.gutter_type, loc, diags),
                margin: PageMargin {
                    left: def.page.left_margin,
                    right: def.page.right_margin,
                    top: def.page.top_margin,
                    bottom: def.page.bottom_margin,
                    header: def.page.header_margin,
                    footer: def.page.footer_margin,
                    gutter: def.page.gutter_margin,
                },
            },
            page_border_fills,
        }
    }

    pub(super) fn columns(&mut self, def: &ColumnDef, loc: &Location) -> ColumnProperties {
        let diags = &mut self.diagnostics;
        let separator = match def.separator_kind {
            0 => None,
            kind => Some(Border {
                line: enums::BORDER_LINE.map(kind, loc, diags),
                width: enums::BORDER_WIDTH.map(def.separator_width, loc, diags),
                color: color(def.separator_color),
            }),
        };
        ColumnProperties {
            kind: enums::COLUMN_KIND.map(def.kind, loc, diags),
            count: def.count.max(1),
            layout: enums::COLUMN_LAYOUT.map(def.layout, loc, diags),
            same_size: def.same_size,
            same_gap: def.gap,
            widths: def
                .widths
                .iter()
                .map(|w| ColumnWidth {
                    width: w.width,
                    gap: w.gap,
                })
                .collect(),
            separator,
        }
    }
}
