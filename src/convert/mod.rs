//! HWP to HWPX translation engine.
//!
//! Conversion runs in two passes over the decoded source tree. Pass 1
//! ([`walker`]) visits every body node in document order, registers the
//! definitions and binary resources the body actually uses, and collects
//! bookmark names. Pass 2 ([`translate`]) turns each section into its target
//! form against the now read-only tables, optionally in parallel.
//!
//! # Example
//!
//! ```no_run
//! use hwp2hwpx::convert::{convert_with_options, ConvertOptions};
//! use hwp2hwpx::source::HwpDocument;
//!
//! fn main() -> hwp2hwpx::Result<()> {
//!     let source = HwpDocument::from_json_path("document.json")?;
//!     let result = convert_with_options(&source, &ConvertOptions::new().with_stats(true))?;
//!     for diagnostic in &result.diagnostics {
//!         eprintln!("{}", diagnostic);
//!     }
//!     println!("{} sections", result.document.section_count());
//!     Ok(())
//! }
//! ```

pub mod refs;
pub mod resources;
pub mod translate;
mod walker;

pub use refs::{DefinitionTable, RefTables};
pub use resources::{ResourcePipeline, BIN_DATA_DIR};

use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::model::Document;
use crate::source::HwpDocument;

/// How recoverable problems are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Substitute, record a diagnostic and keep going
    #[default]
    Lenient,

    /// Fail on the first recorded diagnostic
    Strict,
}

/// Options for document conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Translate sections on the rayon thread pool
    pub parallel: bool,

    /// Recovery policy for non-fatal problems
    pub error_mode: ErrorMode,

    /// Register styles the body never references
    pub retain_unused_styles: bool,

    /// Whether to collect statistics during conversion
    pub collect_stats: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            error_mode: ErrorMode::Lenient,
            retain_unused_styles: false,
            collect_stats: false,
        }
    }
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Fail on the first diagnostic.
    pub fn strict(self) -> Self {
        self.with_error_mode(ErrorMode::Strict)
    }

    /// Recover from every non-fatal problem.
    pub fn lenient(self) -> Self {
        self.with_error_mode(ErrorMode::Lenient)
    }

    /// Enable or disable parallel section translation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Translate sections on the calling thread.
    pub fn sequential(self) -> Self {
        self.with_parallel(false)
    }

    /// Keep styles that no paragraph references.
    pub fn with_unused_styles(mut self, retain: bool) -> Self {
        self.retain_unused_styles = retain;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

/// Counters gathered while converting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertStats {
    pub section_count: usize,
    pub paragraph_count: usize,
    pub table_count: usize,
    pub picture_count: usize,
    /// Shapes, OLE objects and equations
    pub object_count: usize,
    pub field_count: usize,

    pub char_pr_count: usize,
    pub para_pr_count: usize,
    pub style_count: usize,
    pub border_fill_count: usize,
    pub font_count: usize,
    pub bin_item_count: usize,

    /// Registrations folded into an equal existing definition
    pub deduplicated_definitions: usize,
    /// Payloads that reused an identical earlier part
    pub deduplicated_resources: usize,
    pub warning_count: usize,
}

impl ConvertStats {
    /// Add the body counters of another (per-section) tally.
    pub fn merge(&mut self, other: &ConvertStats) {
        self.section_count += other.section_count;
        self.paragraph_count += other.paragraph_count;
        self.table_count += other.table_count;
        self.picture_count += other.picture_count;
        self.object_count += other.object_count;
        self.field_count += other.field_count;
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Translated document
    pub document: Document,

    /// Recovered problems in document order
    pub diagnostics: Diagnostics,

    /// Conversion statistics (if collected)
    pub stats: Option<ConvertStats>,
}

impl ConvertResult {
    /// Whether the conversion recorded no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Convert a decoded source document with default options.
pub fn convert(source: &HwpDocument) -> Result<ConvertResult> {
    convert_with_options(source, &ConvertOptions::default())
}

/// Convert a decoded source document.
pub fn convert_with_options(source: &HwpDocument, options: &ConvertOptions) -> Result<ConvertResult> {
    walker::walk(source, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new()
            .strict()
            .sequential()
            .with_unused_styles(true)
            .with_stats(true);

        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(!options.parallel);
        assert!(options.retain_unused_styles);
        assert!(options.collect_stats);
    }

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert!(options.parallel);
        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(!options.collect_stats);
    }

    #[test]
    fn test_stats_merge() {
        let mut total = ConvertStats {
            paragraph_count: 2,
            char_pr_count: 5,
            ..Default::default()
        };
        total.merge(&ConvertStats {
            section_count: 1,
            paragraph_count: 3,
            table_count: 1,
            ..Default::default()
        });
        assert_eq!(total.paragraph_count, 5);
        assert_eq!(total.section_count, 1);
        assert_eq!(total.table_count, 1);
        assert_eq!(total.char_pr_count, 5);
    }
}
