//! # hwp2hwpx
//!
//! Translation of decoded HWP 5.x documents into HWPX (OWPML) packages.
//!
//! The crate takes the record tree of a binary HWP document (the DocInfo
//! definition tables, the body sections and the embedded binary streams),
//! translates it into a format-neutral document model and serializes that
//! model as an OCF zip container.
//!
//! ## Quick Start
//!
//! ```no_run
//! use hwp2hwpx::{convert_file, WriteOptions};
//!
//! fn main() -> hwp2hwpx::Result<()> {
//!     let result = convert_file("document.json")?;
//!     for diagnostic in &result.diagnostics {
//!         eprintln!("warning: {}", diagnostic);
//!     }
//!     hwp2hwpx::writer::write_file(&result.document, &WriteOptions::default(), "document.hwpx")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Reference resolution**: source-scoped indices are remapped into
//!   deduplicated target tables, only for definitions the body uses
//! - **Lenient recovery**: dangling references, unsupported entities and
//!   unreadable payloads degrade to defaults with a recorded diagnostic
//! - **Parallel processing**: sections translate on Rayon, merged in order
//! - **Deterministic output**: identical input yields identical bytes

pub mod convert;
pub mod detect;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod source;
pub mod writer;

// Re-export commonly used types
pub use convert::{ConvertOptions, ConvertResult, ConvertStats, ErrorMode};
pub use detect::{detect_format_from_bytes, detect_format_from_path, InputFormat};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Location};
pub use error::{Error, Result};
pub use model::{Document, Header, Metadata, Paragraph, Run, RunItem, Section, Table};
pub use source::HwpDocument;
pub use writer::{JsonFormat, WriteOptions};

use std::path::Path;

/// Convert a decoded source document with default options.
///
/// # Example
///
/// ```no_run
/// use hwp2hwpx::{convert, HwpDocument};
///
/// let source = HwpDocument::from_json_path("document.json").unwrap();
/// let result = convert(&source).unwrap();
/// println!("Sections: {}", result.document.section_count());
/// ```
pub fn convert(source: &HwpDocument) -> Result<ConvertResult> {
    convert::convert(source)
}

/// Convert a decoded source document with custom options.
pub fn convert_with_options(source: &HwpDocument, options: &ConvertOptions) -> Result<ConvertResult> {
    convert::convert_with_options(source, options)
}

/// Read a decoded document from a JSON file and convert it.
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<Hwp2HwpxResult> {
    Hwp2Hwpx::new().convert_file(path)
}

/// Convert a decoded document given as bytes.
///
/// Binary HWP and HWPX inputs are recognized and rejected with
/// [`Error::UnknownFormat`].
pub fn convert_bytes(data: &[u8]) -> Result<Hwp2HwpxResult> {
    Hwp2Hwpx::new().convert_bytes(data)
}

/// Convert a decoded JSON document file straight to an HWPX file.
///
/// # Example
///
/// ```no_run
/// let result = hwp2hwpx::to_hwpx("document.json", "document.hwpx").unwrap();
/// assert!(result.document.section_count() > 0);
/// ```
pub fn to_hwpx<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<Hwp2HwpxResult> {
    let result = Hwp2Hwpx::new().convert_file(input)?;
    result.write_file(output)?;
    Ok(result)
}

/// Builder for converting documents.
///
/// # Example
///
/// ```no_run
/// use hwp2hwpx::Hwp2Hwpx;
///
/// let bytes = Hwp2Hwpx::new()
///     .strict()
///     .sequential()
///     .convert_file("document.json")?
///     .to_bytes()?;
/// # Ok::<(), hwp2hwpx::Error>(())
/// ```
pub struct Hwp2Hwpx {
    convert_options: ConvertOptions,
    write_options: WriteOptions,
}

impl Hwp2Hwpx {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            convert_options: ConvertOptions::default(),
            write_options: WriteOptions::default(),
        }
    }

    /// Fail on the first recoverable problem.
    pub fn strict(mut self) -> Self {
        self.convert_options = self.convert_options.strict();
        self
    }

    /// Substitute defaults and keep going (the default).
    pub fn lenient(mut self) -> Self {
        self.convert_options = self.convert_options.lenient();
        self
    }

    /// Disable parallel section translation.
    pub fn sequential(mut self) -> Self {
        self.convert_options = self.convert_options.sequential();
        self
    }

    /// Keep styles no paragraph references.
    pub fn with_unused_styles(mut self, retain: bool) -> Self {
        self.convert_options = self.convert_options.with_unused_styles(retain);
        self
    }

    /// Collect conversion statistics.
    pub fn with_stats(mut self) -> Self {
        self.convert_options = self.convert_options.with_stats(true);
        self
    }

    /// Enable or disable compression of XML parts.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.write_options = self.write_options.with_compression(compress);
        self
    }

    /// Convert a decoded source document.
    pub fn convert(self, source: &HwpDocument) -> Result<Hwp2HwpxResult> {
        let result = convert::convert_with_options(source, &self.convert_options)?;
        Ok(Hwp2HwpxResult {
            document: result.document,
            diagnostics: result.diagnostics,
            stats: result.stats,
            write_options: self.write_options,
        })
    }

    /// Read and convert a decoded JSON document file.
    pub fn convert_file<P: AsRef<Path>>(self, path: P) -> Result<Hwp2HwpxResult> {
        let data = std::fs::read(path)?;
        self.convert_bytes(&data)
    }

    /// Convert a decoded JSON document from bytes.
    pub fn convert_bytes(self, data: &[u8]) -> Result<Hwp2HwpxResult> {
        detect::ensure_convertible(data)?;
        let source = HwpDocument::from_json_slice(data)?;
        self.convert(&source)
    }
}

impl Default for Hwp2Hwpx {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of converting a document through [`Hwp2Hwpx`].
pub struct Hwp2HwpxResult {
    /// The translated document
    pub document: Document,
    /// Recovered problems in document order
    pub diagnostics: Diagnostics,
    /// Conversion statistics (if collected)
    pub stats: Option<ConvertStats>,
    write_options: WriteOptions,
}

impl Hwp2HwpxResult {
    /// Serialize as an HWPX package in memory.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        writer::write_package(&self.document, &self.write_options)
    }

    /// Write the HWPX package to a file.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        writer::write_file(&self.document, &self.write_options, path)
    }

    /// Render the translated model as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        writer::to_json(&self.document, format)
    }

    /// Get plain text of the translated document.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Whether the conversion recorded no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let builder = Hwp2Hwpx::new()
            .strict()
            .sequential()
            .with_stats()
            .with_compression(false);

        assert_eq!(builder.convert_options.error_mode, ErrorMode::Strict);
        assert!(!builder.convert_options.parallel);
        assert!(builder.convert_options.collect_stats);
        assert!(!builder.write_options.compress);
    }

    #[test]
    fn test_builder_default() {
        let builder = Hwp2Hwpx::default();
        assert_eq!(builder.convert_options.error_mode, ErrorMode::Lenient);
        assert!(builder.convert_options.parallel);
    }

    #[test]
    fn test_convert_bytes_empty_data() {
        let result = convert_bytes(&[]);
        assert!(matches!(result, Err(Error::UnknownFormat(_))));
    }

    #[test]
    fn test_convert_bytes_rejects_binary_hwp() {
        let data = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, 0, 0];
        assert!(matches!(convert_bytes(&data), Err(Error::UnknownFormat(_))));
    }

    #[test]
    fn test_convert_bytes_malformed_json() {
        let result = convert_bytes(b"{\"sections\": 3}");
        assert!(matches!(result, Err(Error::SourceModel(_))));
    }

    #[test]
    fn test_convert_bytes_no_sections_is_fatal() {
        let result = convert_bytes(b"{}");
        assert!(matches!(result, Err(Error::StructuralIntegrity { .. })));
    }
}
