//! Entity translators.
//!
//! Pass 2 of the walk. A [`Translator`] turns one source section into a
//! target section, resolving every reference through the read-only
//! [`ConversionContext`] built by pass 1. Translators never register new
//! definitions; a reference that did not resolve during collection is
//! replaced by the table's default and reported at its usage site.

pub mod definitions;
pub mod enums;
mod field;
mod object;
mod paragraph;
mod section;
mod table;
pub mod units;

pub(crate) use field::{bookmark_target, field_kind};
pub(crate) use paragraph::check_runs;
pub use table::{layout_grid, GridSlot};

use std::collections::HashSet;
use std::hash::Hash;

use super::refs::{DefinitionTable, RefTables};
use super::resources::ResourcePipeline;
use super::ConvertStats;
use crate::diagnostics::{DiagnosticKind, Diagnostics, Location};
use crate::model::{Paragraph, Run, SectionProperties};
use crate::source::{HwpDocument, SourceParagraph};

/// Read-only state shared by all section translators.
#[derive(Debug)]
pub struct ConversionContext<'a> {
    pub source: &'a HwpDocument,
    pub tables: &'a RefTables,
    pub resources: &'a ResourcePipeline<'a>,
    /// Bookmark names present anywhere in the document
    pub bookmarks: &'a HashSet<String>,
}

/// Per-section translation state.
pub struct Translator<'a> {
    ctx: &'a ConversionContext<'a>,
    pub diagnostics: Diagnostics,
    pub stats: ConvertStats,
    section_properties: Option<SectionProperties>,
    /// Only the first body paragraph of a section may define the section.
    accept_section_def: bool,
}

impl<'a> Translator<'a> {
    pub fn new(ctx: &'a ConversionContext<'a>) -> Self {
        Self {
            ctx,
            diagnostics: Diagnostics::new(),
            stats: ConvertStats::default(),
            section_properties: None,
            accept_section_def: false,
        }
    }

    fn warn(&mut self, kind: DiagnosticKind, loc: &Location, detail: impl Into<String>) {
        self.diagnostics.push(kind, loc.clone(), detail);
    }

    /// Resolve a source index, substituting the default on a miss.
    fn resolve<T: Clone + Eq + Hash>(
        &mut self,
        table: &DefinitionTable<T>,
        index: u32,
        loc: &Location,
    ) -> u32 {
        match table.resolve(index) {
            Ok(id) => id,
            Err(err) => {
                let fallback = table.fallback_id();
                self.warn(
                    DiagnosticKind::DanglingReference,
                    loc,
                    format!("{}; using {} {}", err, table.kind(), fallback),
                );
                fallback
            }
        }
    }

    /// Resolve a 1-based border fill id where 0 means "default".
    fn border_fill_ref(&mut self, index: u16, loc: &Location) -> u32 {
        let tables = self.ctx.tables;
        if index == 0 {
            return tables.border_fills.fallback_id();
        }
        self.resolve(&tables.border_fills, index as u32, loc)
    }

    /// Paragraph used wherever the target requires content but none exists.
    fn empty_paragraph(&self) -> Paragraph {
        let tables = self.ctx.tables;
        Paragraph {
            para_pr_id: tables.para_prs.fallback_id(),
            style_id: tables.styles.fallback_id(),
            runs: vec![Run::new(tables.char_prs.fallback_id())],
            ..Default::default()
        }
    }

    /// Translate a nested paragraph list (cell, note, header, text box).
    ///
    /// The target requires at least one paragraph per list.
    fn sub_paragraphs(&mut self, list: &[SourceParagraph], loc: &Location) -> Vec<Paragraph> {
        let outer = std::mem::replace(&mut self.accept_section_def, false);
        let mut paragraphs: Vec<Paragraph> = list
            .iter()
            .enumerate()
            .map(|(i, p)| self.paragraph(p, &loc.paragraph(i)))
            .collect();
        if paragraphs.is_empty() {
            paragraphs.push(self.empty_paragraph());
        }
        self.accept_section_def = outer;
        paragraphs
    }
}
