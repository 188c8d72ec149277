//! Structural walker.
//!
//! Pass 1 ([`Registrar`]) walks the body in document order and registers
//! every definition a paragraph, run, cell or section actually references,
//! along with the definitions those depend on. It also pipelines the binary
//! resources objects point at and collects bookmark names for
//! cross-reference checks.
//!
//! Misses on body references are silent here: the registrar only makes sure
//! a default exists, and pass 2 reports the miss where the reference sits.
//! Misses between definitions have no body location and are reported at the
//! document level.
//!
//! Subtrees pass 2 replaces with placeholders (invalid run layouts, tables
//! whose cells do not fit the grid, misplaced section definitions) are not
//! walked, so nothing they reference is registered.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use rayon::prelude::*;

use super::refs::{DefinitionTable, RefTables};
use super::resources::ResourcePipeline;
use super::translate::{
    bookmark_target, check_runs, definitions, layout_grid, ConversionContext, Translator,
};
use super::{ConvertOptions, ConvertResult, ConvertStats, ErrorMode};
use crate::diagnostics::{DiagnosticKind, Diagnostics, Location};
use crate::error::{Error, Result};
use crate::model::{
    BeginNumbers, CharPr, Document, Font, HeadingType, LangValues, Language, Metadata, ParaBorder,
    ParaPr, Style,
};
use crate::source::{
    Control, DocProperties, HwpDocument, SourceParagraph, SourceSection, SourceShapeKind,
};

/// Pass 1 state.
struct Registrar<'a> {
    source: &'a HwpDocument,
    tables: RefTables,
    resources: ResourcePipeline<'a>,
    bookmarks: HashSet<String>,
    diagnostics: Diagnostics,
    /// Styles in first-encountered order, bound once successors are known
    styles: Vec<PendingStyle>,
    style_slots: HashMap<u16, usize>,
    default_style: Option<usize>,
    /// Whether a section definition here would be honoured by pass 2
    accept_section_def: bool,
    section_def_seen: bool,
}

/// A translated style whose next-style link is still a source index.
struct PendingStyle {
    /// `None` for the substitute style
    source_index: Option<u16>,
    value: Style,
    /// Source successor; `None` links the style to itself
    next: Option<u16>,
}

/// Label each key by the first position an equal key appears at, counting
/// distinct keys.
fn first_seen_labels<K: Hash + Eq>(keys: impl Iterator<Item = K>) -> (Vec<usize>, usize) {
    let mut seen = HashMap::new();
    let labels = keys
        .map(|key| {
            let next = seen.len();
            *seen.entry(key).or_insert(next)
        })
        .collect();
    (labels, seen.len())
}

impl<'a> Registrar<'a> {
    fn new(source: &'a HwpDocument) -> Self {
        Self {
            source,
            tables: RefTables::new(),
            resources: ResourcePipeline::new(source),
            bookmarks: HashSet::new(),
            diagnostics: Diagnostics::new(),
            styles: Vec::new(),
            style_slots: HashMap::new(),
            default_style: None,
            accept_section_def: false,
            section_def_seen: false,
        }
    }

    fn collect(&mut self, retain_unused_styles: bool) {
        let source = self.source;
        for (index, section) in source.sections.iter().enumerate() {
            log::debug!(
                "pass 1: section {} ({} paragraphs)",
                index,
                section.paragraphs.len()
            );
            self.section_def_seen = false;
            for (i, paragraph) in section.paragraphs.iter().enumerate() {
                self.accept_section_def = i == 0;
                self.paragraph(paragraph);
            }
            self.accept_section_def = false;
        }
        if retain_unused_styles {
            for index in 0..source.doc_info.styles.len() {
                self.style(index as u16);
            }
        }
        self.bind_styles();
        self.finish();
    }

    /// Every table a placeholder may draw from must hold at least one entry.
    /// Styles are covered by [`Self::bind_styles`].
    fn finish(&mut self) {
        if self.tables.border_fills.is_empty() {
            self.default_border_fill();
        }
        if self.tables.char_prs.is_empty() {
            self.default_char_pr();
        }
        if self.tables.para_prs.is_empty() {
            self.default_para_pr();
        }
    }

    fn nested_miss(&mut self, owner: &str, kind: &'static str, index: u32, fallback: u32) -> u32 {
        let err = Error::DanglingReference { kind, index };
        self.diagnostics.push(
            DiagnosticKind::DanglingReference,
            Location::document(),
            format!("{} refers to it: {}; using {} {}", owner, err, kind, fallback),
        );
        fallback
    }

    /// Id for a reference from one definition to another.
    fn or_fallback<T: Clone + Eq + Hash>(
        &mut self,
        found: Option<u32>,
        owner: &str,
        index: u32,
        table: impl Fn(&RefTables) -> &DefinitionTable<T>,
    ) -> u32 {
        if let Some(id) = found {
            return id;
        }
        let table = table(&self.tables);
        let (kind, fallback) = (table.kind(), table.fallback_id());
        self.nested_miss(owner, kind, index, fallback)
    }

    // Defaults

    fn default_font(&mut self, lang: Language) -> u32 {
        self.tables
            .fonts
            .get_mut(lang)
            .ensure_default_with(Font::new(definitions::DEFAULT_FACE))
    }

    fn default_border_fill(&mut self) -> u32 {
        self.tables.border_fills.ensure_default()
    }

    fn default_char_pr(&mut self) -> u32 {
        if let Some(id) = self.tables.char_prs.default_id() {
            return id;
        }
        let mut font_ref = LangValues::default();
        for lang in Language::ALL {
            *font_ref.get_mut(lang) = self.default_font(lang);
        }
        self.tables.char_prs.ensure_default_with(CharPr {
            font_ref,
            ..Default::default()
        })
    }

    fn default_para_pr(&mut self) -> u32 {
        if let Some(id) = self.tables.para_prs.default_id() {
            return id;
        }
        let tab_pr_id = self.tables.tab_prs.ensure_default();
        let border_fill_id = self.default_border_fill();
        self.tables.para_prs.ensure_default_with(ParaPr {
            tab_pr_id,
            border: ParaBorder {
                border_fill_id,
                ..Default::default()
            },
            ..Default::default()
        })
    }

    fn default_style(&mut self) -> usize {
        if let Some(slot) = self.default_style {
            return slot;
        }
        let para_pr_id = self.default_para_pr();
        let char_pr_id = self.default_char_pr();
        let slot = self.styles.len();
        self.styles.push(PendingStyle {
            source_index: None,
            value: definitions::default_style(para_pr_id, char_pr_id),
            next: None,
        });
        self.default_style = Some(slot);
        slot
    }

    // Definitions

    fn font(&mut self, lang: Language, index: u16) -> Option<u32> {
        let source = self.source;
        let table = self.tables.fonts.get_mut(lang);
        if let Some(id) = table.binding(index as u32) {
            return Some(id);
        }
        match source.doc_info.face_names.get(lang).get(index as usize) {
            Some(face) => Some(table.bind(index as u32, definitions::font(face))),
            None => {
                self.default_font(lang);
                None
            }
        }
    }

    fn border_fill(&mut self, id: u16) -> Option<u32> {
        if let Some(bound) = self.tables.border_fills.binding(id as u32) {
            return Some(bound);
        }
        let source = self.source;
        match source.doc_info.border_fill(id) {
            Some(fill) => {
                let fill =
                    definitions::border_fill(fill, &Location::document(), &mut self.diagnostics);
                Some(self.tables.border_fills.bind(id as u32, fill))
            }
            None => {
                self.default_border_fill();
                None
            }
        }
    }

    fn char_pr(&mut self, index: u32) -> Option<u32> {
        if let Some(id) = self.tables.char_prs.binding(index) {
            return Some(id);
        }
        let source = self.source;
        let Some(shape) = source.doc_info.char_shapes.get(index as usize) else {
            self.default_char_pr();
            return None;
        };

        let owner = format!("charShape {}", index);
        let mut font_ref = LangValues::default();
        for lang in Language::ALL {
            let face = *shape.face_ids.get(lang);
            let found = self.font(lang, face);
            *font_ref.get_mut(lang) =
                self.or_fallback(found, &owner, face as u32, |t| t.fonts.get(lang));
        }
        let border_fill_id = match shape.border_fill_id {
            None | Some(0) => None,
            Some(id) => {
                let found = self.border_fill(id);
                Some(self.or_fallback(found, &owner, id as u32, |t| &t.border_fills))
            }
        };

        let char_pr = definitions::char_pr(
            shape,
            font_ref,
            border_fill_id,
            &Location::document(),
            &mut self.diagnostics,
        );
        Some(self.tables.char_prs.bind(index, char_pr))
    }

    fn tab_pr(&mut self, index: u16) -> Option<u32> {
        if let Some(id) = self.tables.tab_prs.binding(index as u32) {
            return Some(id);
        }
        let source = self.source;
        match source.doc_info.tab_defs.get(index as usize) {
            Some(def) => {
                let tab_pr = definitions::tab_pr(def, &Location::document(), &mut self.diagnostics);
                Some(self.tables.tab_prs.bind(index as u32, tab_pr))
            }
            // tab def 0 is the implicit default set
            None if index == 0 && source.doc_info.tab_defs.is_empty() => {
                Some(self.tables.tab_prs.ensure_default())
            }
            None => {
                self.tables.tab_prs.ensure_default();
                None
            }
        }
    }

    /// Char pr of a numbering level or bullet head, `None` when the head
    /// follows the paragraph's shape.
    fn head_char_pr(&mut self, owner: &str, char_shape_id: Option<u32>) -> Option<u32> {
        let index = char_shape_id?;
        let found = self.char_pr(index);
        Some(self.or_fallback(found, owner, index, |t| &t.char_prs))
    }

    fn numbering(&mut self, id: u16) -> Option<u32> {
        if let Some(bound) = self.tables.numberings.binding(id as u32) {
            return Some(bound);
        }
        let source = self.source;
        let Some(numbering) = source.doc_info.numbering(id) else {
            self.tables.numberings.ensure_default();
            return None;
        };

        let owner = format!("numbering {}", id);
        let mut level_char_prs = Vec::with_capacity(numbering.levels.len());
        for head in &numbering.levels {
            level_char_prs.push(self.head_char_pr(&owner, head.char_shape_id));
        }
        let numbering = definitions::numbering(
            numbering,
            &level_char_prs,
            &Location::document(),
            &mut self.diagnostics,
        );
        Some(self.tables.numberings.bind(id as u32, numbering))
    }

    fn bullet(&mut self, id: u16) -> Option<u32> {
        if let Some(bound) = self.tables.bullets.binding(id as u32) {
            return Some(bound);
        }
        let source = self.source;
        let Some(bullet) = source.doc_info.bullet(id) else {
            self.tables.bullets.ensure_default();
            return None;
        };

        let char_pr_id = self.head_char_pr(&format!("bullet {}", id), bullet.head.char_shape_id);
        let bullet = definitions::bullet(
            bullet,
            char_pr_id,
            &Location::document(),
            &mut self.diagnostics,
        );
        Some(self.tables.bullets.bind(id as u32, bullet))
    }

    fn para_pr(&mut self, index: u16) -> Option<u32> {
        if let Some(id) = self.tables.para_prs.binding(index as u32) {
            return Some(id);
        }
        let source = self.source;
        let Some(shape) = source.doc_info.para_shapes.get(index as usize) else {
            self.default_para_pr();
            return None;
        };

        let owner = format!("paraShape {}", index);
        let loc = Location::document();
        let found = self.tab_pr(shape.tab_def_id);
        let tab_pr_id = self.or_fallback(found, &owner, shape.tab_def_id as u32, |t| &t.tab_prs);

        let heading_kind = definitions::heading_kind(shape, &loc, &mut self.diagnostics);
        let heading = shape.numbering_bullet_id;
        let heading_id = match heading_kind {
            HeadingType::Outline | HeadingType::Number if heading != 0 => {
                let found = self.numbering(heading);
                self.or_fallback(found, &owner, heading as u32, |t| &t.numberings)
            }
            HeadingType::Bullet => {
                let found = self.bullet(heading);
                self.or_fallback(found, &owner, heading as u32, |t| &t.bullets)
            }
            _ => 0,
        };

        let border_fill_id = match shape.border_fill_id {
            0 => self.default_border_fill(),
            id => {
                let found = self.border_fill(id);
                self.or_fallback(found, &owner, id as u32, |t| &t.border_fills)
            }
        };

        let refs = definitions::ParaPrRefs {
            tab_pr_id,
            heading_kind,
            heading_id,
            border_fill_id,
        };
        let para_pr = definitions::para_pr(shape, refs, &loc, &mut self.diagnostics);
        Some(self.tables.para_prs.bind(index as u32, para_pr))
    }

    /// Queue a style, returning its slot in the pending list.
    fn style(&mut self, index: u16) -> Option<usize> {
        if let Some(&slot) = self.style_slots.get(&index) {
            return Some(slot);
        }
        let source = self.source;
        let Some(style) = source.doc_info.styles.get(index as usize) else {
            self.default_style();
            return None;
        };

        let owner = format!("style {}", index);
        let found = self.para_pr(style.para_shape_id);
        let para_pr_id =
            self.or_fallback(found, &owner, style.para_shape_id as u32, |t| &t.para_prs);
        let found = self.char_pr(style.char_shape_id as u32);
        let char_pr_id =
            self.or_fallback(found, &owner, style.char_shape_id as u32, |t| &t.char_prs);

        let value = definitions::style(
            style,
            para_pr_id,
            char_pr_id,
            0,
            &Location::document(),
            &mut self.diagnostics,
        );
        let slot = self.styles.len();
        self.styles.push(PendingStyle {
            source_index: Some(index),
            value,
            next: Some(style.next_style_id),
        });
        self.style_slots.insert(index, slot);
        Some(slot)
    }

    /// Register the queued styles with next-style links as target ids.
    ///
    /// A style's identity includes its successor's identity, so equal styles
    /// are found by refining the partition by field equality with the
    /// successor's class until it stops splitting. Classes are numbered in
    /// first-encountered order.
    fn bind_styles(&mut self) {
        if self.styles.is_empty() {
            self.default_style();
        }

        // Queueing a successor can queue further styles; drain by position.
        let source = self.source;
        let mut successors = Vec::with_capacity(self.styles.len());
        let mut i = 0;
        while i < self.styles.len() {
            let (source_index, next) = (self.styles[i].source_index, self.styles[i].next);
            let successor = match next {
                Some(next) if source.doc_info.styles.get(next as usize).is_some() => {
                    self.style(next).unwrap_or(i)
                }
                Some(next) => {
                    let err = Error::DanglingReference {
                        kind: "style",
                        index: next as u32,
                    };
                    self.diagnostics.push(
                        DiagnosticKind::DanglingReference,
                        Location::document(),
                        format!(
                            "style {} refers to it: {}; linking the style to itself",
                            source_index.unwrap_or_default(),
                            err
                        ),
                    );
                    i
                }
                None => i,
            };
            successors.push(successor);
            i += 1;
        }

        let (mut classes, mut count) = first_seen_labels(self.styles.iter().map(|p| &p.value));
        loop {
            let (refined, refined_count) =
                first_seen_labels((0..classes.len()).map(|i| (classes[i], classes[successors[i]])));
            classes = refined;
            if refined_count == count {
                break;
            }
            count = refined_count;
        }

        let base = self.tables.styles.next_id();
        for (i, pending) in self.styles.iter().enumerate() {
            let mut value = pending.value.clone();
            value.next_style_id = base + classes[successors[i]] as u32;
            match pending.source_index {
                Some(index) => self.tables.styles.bind(index as u32, value),
                None => self.tables.styles.ensure_default_with(value),
            };
        }
    }

    // Body

    /// Paragraphs of a nested list, where section definitions are ignored.
    fn sub_paragraphs(&mut self, list: &[SourceParagraph]) {
        let outer = std::mem::replace(&mut self.accept_section_def, false);
        for paragraph in list {
            self.paragraph(paragraph);
        }
        self.accept_section_def = outer;
    }

    fn paragraph(&mut self, paragraph: &SourceParagraph) {
        self.para_pr(paragraph.header.para_shape_id);
        self.style(paragraph.header.style_id);
        if check_runs(&paragraph.char_shape_runs).is_err() {
            // replaced by an empty placeholder in pass 2
            self.default_char_pr();
            return;
        }
        for run in &paragraph.char_shape_runs {
            self.char_pr(run.char_shape_id);
        }
        for control in &paragraph.controls {
            self.control(control);
        }
    }

    /// Border fill referenced from the body, where 0 selects the default.
    fn body_border_fill(&mut self, id: u16) {
        if id == 0 {
            self.default_border_fill();
        } else {
            self.border_fill(id);
        }
    }

    fn request(&mut self, bin_data_id: u16) {
        if let Err(err) = self.resources.request(bin_data_id) {
            log::debug!("pass 1: {}", err);
        }
    }

    fn control(&mut self, control: &Control) {
        match control {
            Control::SectionDef(def) => {
                if !self.accept_section_def || self.section_def_seen {
                    return;
                }
                self.section_def_seen = true;
                if def.outline_numbering_id != 0 {
                    self.numbering(def.outline_numbering_id);
                }
                for fill in &def.page_border_fills {
                    self.body_border_fill(fill.border_fill_id);
                }
            }
            Control::Table(table) => {
                self.body_border_fill(table.border_fill_id);
                if layout_grid(table).is_err() {
                    return;
                }
                for cell in &table.cells {
                    self.body_border_fill(cell.border_fill_id);
                    self.sub_paragraphs(&cell.paragraphs);
                }
            }
            Control::Picture(picture) => self.request(picture.bin_data_id),
            Control::Ole(ole) => self.request(ole.bin_data_id),
            Control::Shape(shape) => {
                let translated = !matches!(
                    shape.kind,
                    SourceShapeKind::Polygon { .. } | SourceShapeKind::Arc | SourceShapeKind::Curve
                );
                if let (true, Some(text)) = (translated, &shape.text) {
                    self.sub_paragraphs(&text.paragraphs);
                }
            }
            Control::Header(header_footer) | Control::Footer(header_footer) => {
                self.sub_paragraphs(&header_footer.paragraphs)
            }
            Control::Footnote(note) | Control::Endnote(note) => self.sub_paragraphs(&note.paragraphs),
            Control::Field(field) if field.kind_id == "%bmk" => {
                let name = match &field.name {
                    Some(name) => name.clone(),
                    None => bookmark_target(&field.command).to_string(),
                };
                self.bookmarks.insert(name);
            }
            Control::Bookmark { name } => {
                self.bookmarks.insert(name.clone());
            }
            _ => {}
        }
    }
}

fn begin_numbers(properties: &DocProperties) -> BeginNumbers {
    BeginNumbers {
        page: properties.begin_page,
        footnote: properties.begin_footnote,
        endnote: properties.begin_endnote,
        picture: properties.begin_picture,
        table: properties.begin_table,
        equation: properties.begin_equation,
    }
}

fn metadata(source: &HwpDocument) -> Metadata {
    let mut metadata = Metadata {
        language: "ko".to_string(),
        source_version: source.header.version.clone(),
        ..Default::default()
    };
    if let Some(summary) = &source.summary {
        metadata.title = summary.title.clone();
        metadata.subject = summary.subject.clone();
        metadata.creator = summary.author.clone();
        metadata.keywords = summary.keywords.clone();
        metadata.description = summary.comments.clone();
        metadata.last_saved_by = summary.last_author.clone();
        metadata.created = summary.created;
        metadata.modified = summary.last_saved;
    }
    metadata
}

/// Structural checks that abort the conversion.
fn check_structure(source: &HwpDocument) -> Result<()> {
    if source.sections.is_empty() {
        return Err(Error::StructuralIntegrity {
            location: Location::document(),
            detail: "document has no sections".to_string(),
        });
    }
    if let Some(index) = source.sections.iter().position(|s| s.paragraphs.is_empty()) {
        return Err(Error::StructuralIntegrity {
            location: Location::section(index),
            detail: "section has no paragraphs".to_string(),
        });
    }
    Ok(())
}

/// Run both passes over `source`.
pub(super) fn walk(source: &HwpDocument, options: &ConvertOptions) -> Result<ConvertResult> {
    check_structure(source)?;

    let mut registrar = Registrar::new(source);
    registrar.collect(options.retain_unused_styles);
    let Registrar {
        tables,
        resources,
        bookmarks,
        mut diagnostics,
        ..
    } = registrar;
    log::debug!(
        "pass 1 done: {} char prs, {} para prs, {} styles, {} bin items",
        tables.char_prs.len(),
        tables.para_prs.len(),
        tables.styles.len(),
        resources.len()
    );

    let mut stats = ConvertStats::default();
    let sections = {
        let ctx = ConversionContext {
            source,
            tables: &tables,
            resources: &resources,
            bookmarks: &bookmarks,
        };
        let translate = |(index, section): (usize, &SourceSection)| {
            let mut translator = Translator::new(&ctx);
            let section = translator.section(index, section);
            translator.stats.section_count = 1;
            (section, translator.diagnostics, translator.stats)
        };
        let outputs: Vec<_> = if options.parallel {
            source.sections.par_iter().enumerate().map(translate).collect()
        } else {
            source.sections.iter().enumerate().map(translate).collect()
        };

        let mut sections = Vec::with_capacity(outputs.len());
        for (section, section_diagnostics, section_stats) in outputs {
            diagnostics.extend(section_diagnostics);
            stats.merge(&section_stats);
            sections.push(section);
        }
        sections
    };

    stats.deduplicated_definitions = tables.duplicates();
    stats.deduplicated_resources = resources.deduplicated();
    let bin_items = resources.into_items();
    let header = tables.into_header(begin_numbers(&source.doc_info.properties));
    stats.char_pr_count = header.char_properties.len();
    stats.para_pr_count = header.para_properties.len();
    stats.style_count = header.styles.len();
    stats.border_fill_count = header.border_fills.len();
    stats.font_count = header.font_count();
    stats.bin_item_count = bin_items.len();
    stats.warning_count = diagnostics.len();

    if options.error_mode == ErrorMode::Strict {
        if let Some(first) = diagnostics.first() {
            return Err(Error::Strict(first.to_string()));
        }
    }

    log::debug!(
        "converted {} sections with {} diagnostics",
        sections.len(),
        diagnostics.len()
    );
    Ok(ConvertResult {
        document: Document {
            metadata: metadata(source),
            header,
            sections,
            bin_items,
        },
        diagnostics,
        stats: options.collect_stats.then_some(stats),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{
        CharShape, CharShapeRun, FaceName, ParaShape, SectionDef, SourceCell, SourceNumbering,
        SourceStyle, SourceTable, SummaryInfo,
    };

    fn document(mut paragraphs: Vec<SourceParagraph>) -> HwpDocument {
        if let Some(first) = paragraphs.first_mut() {
            let def = SectionDef {
                outline_numbering_id: 0,
                ..Default::default()
            };
            first.push_control(2, Control::SectionDef(def));
        }
        let mut doc = HwpDocument::default();
        doc.doc_info.face_names = LangValues::uniform(vec![FaceName::new("Batang")]);
        doc.doc_info.char_shapes = vec![CharShape::default()];
        doc.doc_info.para_shapes = vec![ParaShape::default()];
        doc.doc_info.styles = vec![SourceStyle {
            name: "Body".to_string(),
            ..Default::default()
        }];
        doc.sections = vec![SourceSection { paragraphs }];
        doc
    }

    fn collect(doc: &HwpDocument) -> Registrar<'_> {
        let mut registrar = Registrar::new(doc);
        registrar.collect(false);
        registrar
    }

    #[test]
    fn test_collects_only_referenced_definitions() {
        let mut doc = document(vec![SourceParagraph::from_text("a", 0, 0, 0)]);
        doc.doc_info.char_shapes.push(CharShape {
            bold: true,
            ..Default::default()
        });
        let registrar = collect(&doc);

        assert_eq!(registrar.tables.char_prs.len(), 1);
        assert_eq!(registrar.tables.styles.len(), 1);
        assert!(registrar.diagnostics.is_empty());
    }

    #[test]
    fn test_equal_shapes_share_an_id() {
        let mut doc = document(vec![
            SourceParagraph::from_text("a", 0, 0, 0),
            SourceParagraph::from_text("b", 0, 0, 1),
        ]);
        doc.doc_info.char_shapes.push(CharShape::default());
        let registrar = collect(&doc);

        assert_eq!(registrar.tables.char_prs.len(), 1);
        assert_eq!(registrar.tables.char_prs.resolve(1).unwrap(), 0);
        assert_eq!(registrar.tables.char_prs.duplicates(), 1);
    }

    #[test]
    fn test_body_miss_is_silent_in_pass_one() {
        let doc = document(vec![SourceParagraph::from_text("a", 0, 0, 42)]);
        let registrar = collect(&doc);

        assert!(registrar.diagnostics.is_empty());
        assert!(registrar.tables.char_prs.default_id().is_some());
        assert!(registrar.tables.char_prs.resolve(42).is_err());
    }

    #[test]
    fn test_nested_font_miss_reported_once() {
        let mut doc = document(vec![
            SourceParagraph::from_text("a", 0, 0, 0),
            SourceParagraph::from_text("b", 0, 0, 0),
        ]);
        doc.doc_info.char_shapes[0].face_ids.latin = 9;
        let registrar = collect(&doc);

        let misses = registrar.diagnostics.of_kind(DiagnosticKind::DanglingReference);
        assert_eq!(misses.len(), 1);
        assert_eq!(misses[0].location, Location::document());
        let fallback = registrar.tables.fonts.latin.default_id().unwrap();
        let char_pr = registrar.tables.char_prs.get(0).unwrap();
        assert_eq!(char_pr.font_ref.latin, fallback);
    }

    #[test]
    fn test_next_style_linked_to_target_id() {
        let mut doc = document(vec![SourceParagraph::from_text("a", 0, 1, 0)]);
        doc.doc_info.styles.push(SourceStyle {
            name: "Heading".to_string(),
            next_style_id: 0,
            ..Default::default()
        });
        let registrar = collect(&doc);

        // style 1 is used first, so it takes id 0; its successor follows
        assert_eq!(registrar.tables.styles.resolve(1).unwrap(), 0);
        assert_eq!(registrar.tables.styles.resolve(0).unwrap(), 1);
        assert_eq!(registrar.tables.styles.get(0).unwrap().next_style_id, 1);
        assert_eq!(registrar.tables.styles.get(1).unwrap().next_style_id, 1);
    }

    #[test]
    fn test_missing_next_style_points_at_itself() {
        let mut doc = document(vec![SourceParagraph::from_text("a", 0, 0, 0)]);
        doc.doc_info.styles[0].next_style_id = 7;
        let registrar = collect(&doc);

        assert_eq!(registrar.tables.styles.get(0).unwrap().next_style_id, 0);
        assert_eq!(registrar.diagnostics.count(DiagnosticKind::DanglingReference), 1);
    }

    #[test]
    fn test_bookmarks_collected() {
        let mut p = SourceParagraph::from_text("a", 0, 0, 0);
        p.push_control(22, Control::Bookmark { name: "intro".into() });
        let doc = document(vec![p]);
        let registrar = collect(&doc);
        assert!(registrar.bookmarks.contains("intro"));
    }

    #[test]
    fn test_empty_document_is_fatal() {
        let doc = HwpDocument::default();
        let err = walk(&doc, &ConvertOptions::default()).unwrap_err();
        assert!(err.is_fatal());
        assert!(matches!(
            err,
            Error::StructuralIntegrity { ref location, .. } if *location == Location::document()
        ));
    }

    #[test]
    fn test_empty_section_is_fatal() {
        let mut doc = document(vec![SourceParagraph::from_text("a", 0, 0, 0)]);
        doc.sections.push(SourceSection::default());
        let err = walk(&doc, &ConvertOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::StructuralIntegrity { ref location, .. } if *location == Location::section(1)
        ));
    }

    #[test]
    fn test_strict_mode_fails_on_first_diagnostic() {
        let doc = document(vec![SourceParagraph::from_text("a", 0, 0, 42)]);
        assert!(walk(&doc, &ConvertOptions::default()).is_ok());
        let err = walk(&doc, &ConvertOptions::new().strict()).unwrap_err();
        assert!(matches!(err, Error::Strict(_)));
    }

    #[test]
    fn test_metadata_from_summary() {
        let mut doc = document(vec![SourceParagraph::from_text("a", 0, 0, 0)]);
        doc.summary = Some(SummaryInfo {
            title: Some("Report".to_string()),
            author: Some("Kim".to_string()),
            ..Default::default()
        });
        let result = walk(&doc, &ConvertOptions::default()).unwrap();
        let metadata = &result.document.metadata;
        assert_eq!(metadata.title.as_deref(), Some("Report"));
        assert_eq!(metadata.creator.as_deref(), Some("Kim"));
        assert_eq!(metadata.language, "ko");
        assert_eq!(metadata.source_version, "5.1.0.1");
    }

    #[test]
    fn test_stats_collected() {
        let doc = document(vec![
            SourceParagraph::from_text("a", 0, 0, 0),
            SourceParagraph::from_text("b", 0, 0, 0),
        ]);
        let result = walk(&doc, &ConvertOptions::new().with_stats(true)).unwrap();
        let stats = result.stats.unwrap();
        assert_eq!(stats.section_count, 1);
        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.char_pr_count, 1);
        assert_eq!(stats.warning_count, 0);
    }

    fn styled(name: &str, next_style_id: u16) -> SourceStyle {
        SourceStyle {
            name: name.to_string(),
            next_style_id,
            ..Default::default()
        }
    }

    fn bold_doc(paragraphs: Vec<SourceParagraph>) -> HwpDocument {
        let mut doc = document(paragraphs);
        doc.doc_info.char_shapes.push(CharShape {
            bold: true,
            ..Default::default()
        });
        doc
    }

    #[test]
    fn test_styles_equal_after_linking_share_an_id() {
        let mut doc = document(vec![
            SourceParagraph::from_text("a", 0, 0, 0),
            SourceParagraph::from_text("b", 0, 1, 0),
        ]);
        doc.doc_info.styles = vec![
            styled("S", 2),
            styled("S", 3),
            styled("S", 2),
            styled("S", 2),
        ];
        let registrar = collect(&doc);

        assert_eq!(registrar.tables.styles.len(), 1);
        for index in 0..4 {
            assert_eq!(registrar.tables.styles.resolve(index).unwrap(), 0);
        }
        assert_eq!(registrar.tables.styles.get(0).unwrap().next_style_id, 0);
    }

    #[test]
    fn test_styles_with_different_successors_stay_apart() {
        // 0 and 1 look alike but lead to different styles
        let mut doc = document(vec![
            SourceParagraph::from_text("a", 0, 0, 0),
            SourceParagraph::from_text("b", 0, 1, 0),
        ]);
        doc.doc_info.styles = vec![
            styled("S", 2),
            styled("S", 3),
            styled("Body", 2),
            styled("Title", 3),
        ];
        let registrar = collect(&doc);

        let styles = &registrar.tables.styles;
        assert_eq!(styles.len(), 4);
        let (s0, s1) = (styles.resolve(0).unwrap(), styles.resolve(1).unwrap());
        assert_eq!((s0, s1), (0, 1));
        assert_eq!(styles.get(s0).unwrap().next_style_id, styles.resolve(2).unwrap());
        assert_eq!(styles.get(s1).unwrap().next_style_id, styles.resolve(3).unwrap());
    }

    #[test]
    fn test_cyclic_successors_resolve() {
        let mut doc = document(vec![SourceParagraph::from_text("a", 0, 0, 0)]);
        doc.doc_info.styles = vec![styled("A", 1), styled("B", 0)];
        let registrar = collect(&doc);

        let styles = &registrar.tables.styles;
        assert_eq!(styles.get(0).unwrap().next_style_id, 1);
        assert_eq!(styles.get(1).unwrap().next_style_id, 0);
        assert!(registrar.diagnostics.is_empty());
    }

    #[test]
    fn test_invalid_table_contents_not_registered() {
        let cells = vec![
            SourceCell {
                row_span: 2,
                paragraphs: vec![SourceParagraph::from_text("x", 0, 0, 1)],
                ..Default::default()
            },
            SourceCell {
                row: 1,
                ..Default::default()
            },
        ];
        let mut p = SourceParagraph::from_text("", 0, 0, 0);
        p.push_control(
            11,
            Control::Table(SourceTable {
                rows: 2,
                cols: 2,
                cells,
                ..Default::default()
            }),
        );
        let doc = bold_doc(vec![SourceParagraph::from_text("a", 0, 0, 0), p]);
        let registrar = collect(&doc);

        assert_eq!(registrar.tables.char_prs.len(), 1);
        assert!(registrar.tables.char_prs.binding(1).is_none());
    }

    #[test]
    fn test_placeholder_paragraph_contents_not_registered() {
        let mut p = SourceParagraph::from_text("x", 0, 0, 1);
        p.char_shape_runs = vec![CharShapeRun {
            position: 3,
            char_shape_id: 1,
        }];
        let doc = bold_doc(vec![SourceParagraph::from_text("a", 0, 0, 0), p]);
        let registrar = collect(&doc);

        assert!(registrar.tables.char_prs.binding(1).is_none());
    }

    #[test]
    fn test_misplaced_section_def_not_registered() {
        let mut second = SourceParagraph::from_text("b", 0, 0, 0);
        second.push_control(
            2,
            Control::SectionDef(SectionDef {
                outline_numbering_id: 1,
                ..Default::default()
            }),
        );
        let mut doc = document(vec![SourceParagraph::from_text("a", 0, 0, 0), second]);
        doc.doc_info.numberings = vec![SourceNumbering::default()];
        let registrar = collect(&doc);

        assert!(registrar.tables.numberings.is_empty());
    }
}
