//! Field translation and cross-reference repointing.

use super::Translator;
use crate::diagnostics::{DiagnosticKind, Location};
use crate::model::{FieldBegin, FieldKind, RunItem};
use crate::source::SourceField;

/// An open field begin awaiting its end character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldFrame {
    /// A begin marker was emitted; the end marker closes it.
    Open { begin_id: u32 },
    /// The field degraded to static text; begin and end are both dropped.
    Degraded,
}

/// Field kind for a field control id.
pub(crate) fn field_kind(kind_id: &str) -> Option<FieldKind> {
    let kind = match kind_id {
        "%clk" => FieldKind::ClickHere,
        "%hlk" => FieldKind::Hyperlink,
        "%bmk" => FieldKind::Bookmark,
        "%fmu" => FieldKind::Formula,
        "%smr" => FieldKind::Summary,
        "%usr" => FieldKind::UserInfo,
        "%dte" => FieldKind::Date,
        "%ddt" => FieldKind::DocDate,
        "%pat" => FieldKind::Path,
        "%xrf" => FieldKind::CrossRef,
        "%mmg" => FieldKind::MailMerge,
        "%%me" => FieldKind::Memo,
        _ => return None,
    };
    Some(kind)
}

/// Bookmark name a cross-reference or internal hyperlink points at.
///
/// Commands look like `?#name;...`: leading markers are stripped and the
/// name runs to the first `;`.
pub(crate) fn bookmark_target(command: &str) -> &str {
    command
        .trim_start_matches(&['?', '#'][..])
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
}

impl<'a> Translator<'a> {
    pub(super) fn field_begin(
        &mut self,
        field: &SourceField,
        fields: &mut Vec<FieldFrame>,
        loc: &Location,
    ) -> Option<RunItem> {
        let Some(kind) = field_kind(&field.kind_id) else {
            self.warn(
                DiagnosticKind::UnsupportedEntity,
                loc,
                format!("field '{}' degraded to text", field.kind_id),
            );
            fields.push(FieldFrame::Degraded);
            return None;
        };

        let internal_link = kind == FieldKind::Hyperlink && field.command.starts_with('#');
        if kind == FieldKind::CrossRef || internal_link {
            let target = bookmark_target(&field.command);
            if !self.ctx.bookmarks.contains(target) {
                self.warn(
                    DiagnosticKind::DanglingReference,
                    loc,
                    format!(
                        "{} target bookmark '{}' does not exist; degraded to text",
                        kind, target
                    ),
                );
                fields.push(FieldFrame::Degraded);
                return None;
            }
        }

        self.stats.field_count += 1;
        fields.push(FieldFrame::Open {
            begin_id: field.instance_id,
        });
        Some(RunItem::FieldBegin(FieldBegin {
            id: field.instance_id,
            kind,
            name: field.name.clone().unwrap_or_default(),
            command: field.command.clone(),
            editable: field.editable,
            dirty: field.dirty,
        }))
    }

    pub(super) fn field_end(
        &mut self,
        fields: &mut Vec<FieldFrame>,
        loc: &Location,
    ) -> Option<RunItem> {
        match fields.pop() {
            Some(FieldFrame::Open { begin_id }) => Some(RunItem::FieldEnd { begin_id }),
            Some(FieldFrame::Degraded) => None,
            None => {
                self.warn(
                    DiagnosticKind::StructuralIntegrity,
                    loc,
                    "field end without a matching begin; dropped",
                );
                None
            }
        }
    }

    /// Close fields left open at the end of a paragraph, innermost first.
    pub(super) fn close_fields(
        &mut self,
        fields: &mut Vec<FieldFrame>,
        loc: &Location,
    ) -> Vec<RunItem> {
        let mut items = Vec::new();
        while let Some(frame) = fields.pop() {
            if let FieldFrame::Open { begin_id } = frame {
                self.warn(
                    DiagnosticKind::StructuralIntegrity,
                    loc,
                    format!("field {} not closed before paragraph end", begin_id),
                );
                items.push(RunItem::FieldEnd { begin_id });
            }
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kinds() {
        assert_eq!(field_kind("%hlk"), Some(FieldKind::Hyperlink));
        assert_eq!(field_kind("%xrf"), Some(FieldKind::CrossRef));
        assert_eq!(field_kind("%%me"), Some(FieldKind::Memo));
        assert_eq!(field_kind("%unk"), None);
    }

    #[test]
    fn test_bookmark_target() {
        assert_eq!(bookmark_target("?#intro;0;0"), "intro");
        assert_eq!(bookmark_target("#intro"), "intro");
        assert_eq!(bookmark_target("chapter 2;1"), "chapter 2");
        assert_eq!(bookmark_target(""), "");
    }
}
