//! Decoded source document model.
//!
//! This is the record tree produced by a binary HWP reader: the file header,
//! the DocInfo definition tables, one record list per body section, and the
//! embedded binary streams. Values keep their on-disk encoding (raw enum
//! codes, `0x00BBGGRR` colors, half-unit paragraph spacing); translating them
//! is the converter's job.
//!
//! The tree is serde-deserializable so a decoded document can be exchanged
//! as JSON.

mod body;
mod control;
mod doc_info;

pub use body::{CharShapeRun, HwpChar, ParaHeader, SourceParagraph, SourceSection};
pub use control::{
    ColumnDef, Control, PageDef, Padding, SourceAutoNumber, SourceCell, SourceColumnWidth,
    SourceCrop, SourceEquation, SourceField, SourceHeaderFooter, SourceNote, SourceObjectCommon,
    SourceOle, SourcePageBorderFill, SourcePageNumber, SourcePicture, SourceShape,
    SourceShapeKind, SourceStartNumbers, SourceTable, SourceTextBox, SectionDef,
};
pub use doc_info::{
    BinCompression, BinDataKind, BinDataRef, CharShape, DocInfo, DocProperties, FaceName,
    ParaShape, SourceBorder, SourceBorderFill, SourceBullet, SourceFill, SourceNumbering,
    SourceParaHead, SourceStyle, SourceTabItem, SubstituteFaceName, TabDef,
};

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// A fully decoded source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HwpDocument {
    pub header: FileHeader,
    pub doc_info: DocInfo,
    pub sections: Vec<SourceSection>,
    /// Embedded `BinData` streams, as stored (possibly deflated)
    pub bin_data: Vec<EmbeddedBinData>,
    pub summary: Option<SummaryInfo>,
}

impl HwpDocument {
    /// Parse a decoded document from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a decoded document from a reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a decoded document from a JSON file.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// Parse a decoded document from JSON bytes.
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Serialize back to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up an embedded stream by bin-data id.
    pub fn bin_stream(&self, id: u16) -> Option<&EmbeddedBinData> {
        self.bin_data.iter().find(|b| b.id == id)
    }

    pub fn paragraph_count(&self) -> usize {
        self.sections.iter().map(|s| s.paragraphs.len()).sum()
    }
}

/// File header flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHeader {
    /// Format version, e.g. "5.1.0.1"
    pub version: String,
    /// Body and bin-data streams are deflate-compressed
    pub compressed: bool,
    pub distributable: bool,
}

impl Default for FileHeader {
    fn default() -> Self {
        Self {
            version: "5.1.0.1".to_string(),
            compressed: true,
            distributable: false,
        }
    }
}

/// One embedded binary stream (`BIN0001.png` and friends).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedBinData {
    pub id: u16,
    pub data: Vec<u8>,
}

/// Summary information stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryInfo {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub author: Option<String>,
    pub keywords: Option<String>,
    pub comments: Option<String>,
    pub last_author: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub last_saved: Option<DateTime<Utc>>,
}
