//! Paragraph translation: char-shape runs, the character stream and the
//! controls anchored in it.

use super::field::FieldFrame;
use super::Translator;
use crate::diagnostics::{DiagnosticKind, Location};
use crate::model::{Paragraph, Run, RunItem, TextSegment};
use crate::source::{CharShapeRun, Control, HwpChar, SourceParagraph};

/// Check that char-shape runs partition the paragraph.
pub(crate) fn check_runs(runs: &[CharShapeRun]) -> Result<(), String> {
    let first = runs
        .first()
        .ok_or_else(|| "paragraph has no char shape runs".to_string())?;
    if first.position != 0 {
        return Err(format!(
            "first char shape run starts at {}, not 0",
            first.position
        ));
    }
    for pair in runs.windows(2) {
        if pair[1].position <= pair[0].position {
            return Err(format!(
                "char shape run positions not increasing ({} then {})",
                pair[0].position, pair[1].position
            ));
        }
    }
    Ok(())
}

/// Distributes content over runs by code-unit position.
struct RunCursor<'r> {
    starts: &'r [CharShapeRun],
    runs: Vec<Run>,
    current: usize,
}

impl<'r> RunCursor<'r> {
    fn new(starts: &'r [CharShapeRun], char_pr_ids: Vec<u32>) -> Self {
        Self {
            starts,
            runs: char_pr_ids.into_iter().map(Run::new).collect(),
            current: 0,
        }
    }

    /// Move to the run covering `position`.
    fn advance_to(&mut self, position: u32) -> &mut Run {
        while self.current + 1 < self.starts.len() && self.starts[self.current + 1].position <= position
        {
            self.current += 1;
        }
        &mut self.runs[self.current]
    }

    fn last(&mut self) -> &mut Run {
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Runs with content; the first run survives if every run is empty.
    fn finish(self) -> Vec<Run> {
        let mut runs = self.runs;
        if runs.iter().all(|r| r.items.is_empty()) {
            runs.truncate(1);
            return runs;
        }
        runs.retain(|r| !r.items.is_empty());
        runs
    }
}

impl<'a> Translator<'a> {
    pub(crate) fn paragraph(&mut self, source: &SourceParagraph, loc: &Location) -> Paragraph {
        let tables = self.ctx.tables;
        self.stats.paragraph_count += 1;

        let para_pr_id = self.resolve(&tables.para_prs, source.header.para_shape_id as u32, loc);
        let style_id = self.resolve(&tables.styles, source.header.style_id as u32, loc);
        let mut paragraph = Paragraph {
            id: source.header.instance_id,
            para_pr_id,
            style_id,
            page_break: source.header.page_break,
            column_break: source.header.column_break,
            runs: Vec::new(),
        };

        if let Err(detail) = check_runs(&source.char_shape_runs) {
            self.warn(
                DiagnosticKind::StructuralIntegrity,
                loc,
                format!("{}; paragraph replaced by an empty placeholder", detail),
            );
            paragraph.runs.push(Run::new(tables.char_prs.fallback_id()));
            return paragraph;
        }

        let char_pr_ids = source
            .char_shape_runs
            .iter()
            .enumerate()
            .map(|(i, run)| self.resolve(&tables.char_prs, run.char_shape_id, &loc.run(i)))
            .collect();
        let mut cursor = RunCursor::new(&source.char_shape_runs, char_pr_ids);

        let mut position = 0u32;
        let mut controls = source.controls.iter().enumerate();
        let mut fields: Vec<FieldFrame> = Vec::new();

        for ch in &source.chars {
            match ch {
                HwpChar::Text(text) => {
                    for c in text.chars() {
                        cursor.advance_to(position).push_char(c);
                        position += c.len_utf16() as u32;
                    }
                }
                HwpChar::CharControl(code) => {
                    let segment = match *code {
                        HwpChar::LINE_BREAK => Some(TextSegment::LineBreak),
                        HwpChar::HYPHEN => Some(TextSegment::Hyphen),
                        HwpChar::NB_SPACE => Some(TextSegment::NbSpace),
                        HwpChar::FW_SPACE => Some(TextSegment::FwSpace),
                        HwpChar::PARA_BREAK => None,
                        other => {
                            self.warn(
                                DiagnosticKind::UnsupportedEntity,
                                loc,
                                format!("char control {} dropped", other),
                            );
                            None
                        }
                    };
                    if let Some(segment) = segment {
                        cursor.advance_to(position).push_segment(segment);
                    }
                }
                HwpChar::Inline(code) => match *code {
                    HwpChar::TAB => cursor.advance_to(position).push_segment(TextSegment::Tab),
                    HwpChar::FIELD_END => {
                        if let Some(item) = self.field_end(&mut fields, loc) {
                            cursor.advance_to(position).items.push(item);
                        }
                    }
                    other => self.warn(
                        DiagnosticKind::UnsupportedEntity,
                        loc,
                        format!("inline control {} dropped", other),
                    ),
                },
                HwpChar::Extended(code) => match controls.next() {
                    Some((ci, control)) => {
                        if let Some(item) = self.control(control, &loc.control(ci), &mut fields) {
                            cursor.advance_to(position).items.push(item);
                        }
                    }
                    None => self.warn(
                        DiagnosticKind::StructuralIntegrity,
                        loc,
                        format!("extended control {} has no control record", code),
                    ),
                },
            }
            position += match ch {
                HwpChar::Text(_) => 0,
                other => other.width(),
            };
        }

        for (ci, control) in controls {
            let control_loc = loc.control(ci);
            self.warn(
                DiagnosticKind::StructuralIntegrity,
                &control_loc,
                format!(
                    "control '{}' has no anchor character; appended to paragraph end",
                    control.ctrl_id()
                ),
            );
            if let Some(item) = self.control(control, &control_loc, &mut fields) {
                cursor.last().items.push(item);
            }
        }

        for item in self.close_fields(&mut fields, loc) {
            cursor.last().items.push(item);
        }

        paragraph.runs = cursor.finish();
        paragraph
    }

    /// Translate one control; `None` when it produces no target item.
    fn control(
        &mut self,
        control: &Control,
        loc: &Location,
        fields: &mut Vec<FieldFrame>,
    ) -> Option<RunItem> {
        match control {
            Control::SectionDef(def) => self.section_def(def, loc),
            Control::ColumnDef(def) => Some(RunItem::Columns(self.columns(def, loc))),
            Control::Table(table) => Some(RunItem::Table(Box::new(self.table(table, loc)))),
            Control::Picture(picture) => self
                .picture(picture, loc)
                .map(|p| RunItem::Picture(Box::new(p))),
            Control::Shape(shape) => self.shape(shape, loc).map(|s| RunItem::Shape(Box::new(s))),
            Control::Ole(ole) => self.ole(ole, loc).map(|o| RunItem::Ole(Box::new(o))),
            Control::Equation(eq) => Some(RunItem::Equation(Box::new(self.equation(eq, loc)))),
            Control::Header(header) => Some(RunItem::Header(Box::new(
                self.header_footer(header, false, loc),
            ))),
            Control::Footer(footer) => Some(RunItem::Footer(Box::new(
                self.header_footer(footer, true, loc),
            ))),
            Control::Footnote(note) => {
                Some(RunItem::Footnote(Box::new(self.note(note, false, loc))))
            }
            Control::Endnote(note) => Some(RunItem::Endnote(Box::new(self.note(note, true, loc)))),
            Control::Field(field) => self.field_begin(field, fields, loc),
            Control::Bookmark { name } => Some(RunItem::Bookmark { name: name.clone() }),
            Control::AutoNumber(number) => Some(RunItem::AutoNumber(self.auto_number(number, loc))),
            Control::PageNumberPosition(number) => {
                Some(RunItem::PageNumber(self.page_number(number, loc)))
            }
            Control::Unknown { ctrl_id } => {
                self.warn(
                    DiagnosticKind::UnsupportedEntity,
                    loc,
                    format!("control '{}' has no target equivalent; skipped", ctrl_id),
                );
                None
            }
        }
    }
}
