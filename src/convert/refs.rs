//! Reference resolution tables.
//!
//! One [`DefinitionTable`] per definition kind maps source-scoped indices to
//! freshly assigned target ids. Definitions are deduplicated by structural
//! equality of their translated target value, and ids are handed out in
//! first-registered order so repeated conversions are byte-identical.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::model::{
    BeginNumbers, BorderFill, Bullet, CharPr, Font, Header, LangValues, Language, Numbering,
    ParaPr, Style, TabPr,
};

/// Definitions of one kind, deduplicated by value.
#[derive(Debug, Clone)]
pub struct DefinitionTable<T> {
    kind: &'static str,
    base: u32,
    entries: Vec<T>,
    lookup: HashMap<T, u32>,
    bindings: HashMap<u32, u32>,
    default_id: Option<u32>,
    duplicates: usize,
}

impl<T: Clone + Eq + Hash> DefinitionTable<T> {
    /// Empty table whose first id is `base`.
    pub fn new(kind: &'static str, base: u32) -> Self {
        Self {
            kind,
            base,
            entries: Vec::new(),
            lookup: HashMap::new(),
            bindings: HashMap::new(),
            default_id: None,
            duplicates: 0,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Register a definition, returning the id of an equal definition if one
    /// exists.
    pub fn register(&mut self, definition: T) -> u32 {
        if let Some(&id) = self.lookup.get(&definition) {
            self.duplicates += 1;
            return id;
        }
        let id = self.next_id();
        self.lookup.insert(definition.clone(), id);
        self.entries.push(definition);
        id
    }

    /// Register a definition and remember which source index it came from.
    pub fn bind(&mut self, source_index: u32, definition: T) -> u32 {
        if let Some(&id) = self.bindings.get(&source_index) {
            return id;
        }
        let id = self.register(definition);
        self.bindings.insert(source_index, id);
        id
    }

    /// Target id previously bound to a source index, if any.
    pub fn binding(&self, source_index: u32) -> Option<u32> {
        self.bindings.get(&source_index).copied()
    }

    /// Resolve a source index to its target id.
    pub fn resolve(&self, source_index: u32) -> Result<u32> {
        self.binding(source_index)
            .ok_or(Error::DanglingReference {
                kind: self.kind,
                index: source_index,
            })
    }

    /// Register `definition` as the substitute for unresolvable indices.
    ///
    /// The first call wins; later calls return the existing default id.
    pub fn ensure_default_with(&mut self, definition: T) -> u32 {
        if let Some(id) = self.default_id {
            return id;
        }
        let id = self.register(definition);
        self.default_id = Some(id);
        id
    }

    pub fn default_id(&self) -> Option<u32> {
        self.default_id
    }

    /// Id to substitute for a dangling reference.
    pub fn fallback_id(&self) -> u32 {
        self.default_id.unwrap_or(self.base)
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        id.checked_sub(self.base)
            .and_then(|i| self.entries.get(i as usize))
    }

    /// Id the next new definition will receive.
    pub fn next_id(&self) -> u32 {
        self.base + self.entries.len() as u32
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of registrations that were folded into an existing entry.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn into_entries(self) -> Vec<T> {
        self.entries
    }
}

impl<T: Clone + Eq + Hash + Default> DefinitionTable<T> {
    /// Register the kind's `Default` value as the substitute definition.
    pub fn ensure_default(&mut self) -> u32 {
        self.ensure_default_with(T::default())
    }
}

/// All definition tables of one conversion.
#[derive(Debug, Clone)]
pub struct RefTables {
    pub fonts: LangValues<DefinitionTable<Font>>,
    pub border_fills: DefinitionTable<BorderFill>,
    pub char_prs: DefinitionTable<CharPr>,
    pub tab_prs: DefinitionTable<TabPr>,
    pub numberings: DefinitionTable<Numbering>,
    pub bullets: DefinitionTable<Bullet>,
    pub para_prs: DefinitionTable<ParaPr>,
    pub styles: DefinitionTable<Style>,
}

impl RefTables {
    pub fn new() -> Self {
        Self {
            fonts: LangValues::uniform(DefinitionTable::new("font", 0)),
            border_fills: DefinitionTable::new("borderFill", crate::model::BORDER_FILL_ID_BASE),
            char_prs: DefinitionTable::new("charPr", 0),
            tab_prs: DefinitionTable::new("tabPr", 0),
            numberings: DefinitionTable::new("numbering", crate::model::NUMBERING_ID_BASE),
            bullets: DefinitionTable::new("bullet", crate::model::BULLET_ID_BASE),
            para_prs: DefinitionTable::new("paraPr", 0),
            styles: DefinitionTable::new("style", 0),
        }
    }

    pub fn font_table(&self, lang: Language) -> &DefinitionTable<Font> {
        self.fonts.get(lang)
    }

    /// Total registrations folded into existing definitions.
    pub fn duplicates(&self) -> usize {
        self.fonts.iter().map(|(_, t)| t.duplicates()).sum::<usize>()
            + self.border_fills.duplicates()
            + self.char_prs.duplicates()
            + self.tab_prs.duplicates()
            + self.numberings.duplicates()
            + self.bullets.duplicates()
            + self.para_prs.duplicates()
            + self.styles.duplicates()
    }

    /// Move the registered definitions into a target header.
    pub fn into_header(self, begin_numbers: BeginNumbers) -> Header {
        let RefTables {
            fonts,
            border_fills,
            char_prs,
            tab_prs,
            numberings,
            bullets,
            para_prs,
            styles,
        } = self;
        let LangValues {
            hangul,
            latin,
            hanja,
            japanese,
            other,
            symbol,
            user,
        } = fonts;
        Header {
            begin_numbers,
            fonts: LangValues {
                hangul: hangul.into_entries(),
                latin: latin.into_entries(),
                hanja: hanja.into_entries(),
                japanese: japanese.into_entries(),
                other: other.into_entries(),
                symbol: symbol.into_entries(),
                user: user.into_entries(),
            },
            border_fills: border_fills.into_entries(),
            char_properties: char_prs.into_entries(),
            tab_properties: tab_prs.into_entries(),
            numberings: numberings.into_entries(),
            bullets: bullets.into_entries(),
            para_properties: para_prs.into_entries(),
            styles: styles.into_entries(),
        }
    }
}

impl Default for RefTables {
    fn default() -> Self {
        Self::new()
    }
}
