//! HWPX serialization.
//!
//! The writer turns a translated [`Document`](crate::model::Document) into
//! an OCF zip container: a stored `mimetype` entry, `version.xml`, the
//! `Contents/` header and section parts, `BinData/` payloads and the
//! package manifests. Output is deterministic for a given document.

mod header;
mod json;
mod options;
mod package;
mod section;
mod xml;

pub use header::{header_xml, HEADER_VERSION};
pub use json::{to_json, JsonFormat};
pub use options::WriteOptions;
pub use package::{
    section_path, write_file, write_package, write_package_to, CONTENT_PATH, HEADER_PATH,
    MIMETYPE,
};
pub use section::section_xml;
