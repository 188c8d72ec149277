//! OCF container assembly: zip entries, manifests and the package metadata
//! parts around the header and section XML.

use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::header::{header_xml, HEADER_VERSION};
use super::section::section_xml;
use super::xml::{
    Attrs, XmlWriter, NS_APP, NS_CONFIG, NS_DC, NS_HPF, NS_OCF, NS_ODF_MANIFEST, NS_OPF,
    NS_VERSION,
};
use super::WriteOptions;
use crate::error::Result;
use crate::model::{Document, Metadata};

/// Content of the leading `mimetype` entry.
pub const MIMETYPE: &str = "application/hwp+zip";

pub const HEADER_PATH: &str = "Contents/header.xml";
pub const CONTENT_PATH: &str = "Contents/content.hpf";

/// Part name of section `index`.
pub fn section_path(index: usize) -> String {
    format!("Contents/section{}.xml", index)
}

/// Write `document` as an HWPX package into memory.
pub fn write_package(document: &Document, options: &WriteOptions) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    write_package_to(document, options, &mut cursor)?;
    Ok(cursor.into_inner())
}

/// Write `document` as an HWPX package to a file.
pub fn write_file(document: &Document, options: &WriteOptions, path: impl AsRef<Path>) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_package_to(document, options, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write `document` as an HWPX package to any seekable sink.
///
/// Entry order and timestamps are fixed, so equal documents produce
/// byte-identical packages.
pub fn write_package_to<W: Write + Seek>(
    document: &Document,
    options: &WriteOptions,
    sink: W,
) -> Result<()> {
    let stored = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .last_modified_time(zip::DateTime::default());
    let packed = if options.compress {
        stored.compression_method(CompressionMethod::Deflated)
    } else {
        stored
    };

    let mut zip = ZipWriter::new(sink);

    // must be first and uncompressed for format sniffing
    zip.start_file("mimetype", stored)?;
    zip.write_all(MIMETYPE.as_bytes())?;

    zip.start_file("version.xml", packed)?;
    zip.write_all(&version_xml(&document.metadata)?)?;

    zip.start_file(HEADER_PATH, packed)?;
    zip.write_all(&header_xml(&document.header, document.sections.len())?)?;

    for (index, section) in document.sections.iter().enumerate() {
        zip.start_file(section_path(index), packed)?;
        zip.write_all(&section_xml(section)?)?;
    }

    for item in &document.bin_items {
        // payloads are already compressed media
        zip.start_file(item.href.as_str(), stored)?;
        zip.write_all(&item.data)?;
    }

    zip.start_file("settings.xml", packed)?;
    zip.write_all(&settings_xml()?)?;

    zip.start_file(CONTENT_PATH, packed)?;
    zip.write_all(&content_hpf(document)?)?;

    zip.start_file("META-INF/container.xml", packed)?;
    zip.write_all(&container_xml()?)?;

    zip.start_file("META-INF/manifest.xml", packed)?;
    zip.write_all(&manifest_xml()?)?;

    zip.finish()?;
    log::debug!(
        "wrote package with {} sections and {} binary items",
        document.sections.len(),
        document.bin_items.len()
    );
    Ok(())
}

/// Split a dotted version such as `5.1.0.1`; missing or malformed parts
/// fall back to 5.1.0.1.
fn version_parts(version: &str) -> [u32; 4] {
    let mut parts = [5, 1, 0, 1];
    let parsed: Vec<u32> = version
        .split('.')
        .map_while(|part| part.trim().parse().ok())
        .collect();
    if parsed.len() == 4 {
        parts.copy_from_slice(&parsed);
    }
    parts
}

fn version_xml(metadata: &Metadata) -> Result<Vec<u8>> {
    let [major, minor, micro, build] = version_parts(&metadata.source_version);
    let mut xml = XmlWriter::new()?;
    xml.empty(
        "hv:HCFVersion",
        Attrs::new()
            .add("xmlns:hv", NS_VERSION)
            // sic
            .add("tagetApplication", "WORDPROCESSOR")
            .add("major", major)
            .add("minor", minor)
            .add("micro", micro)
            .add("buildNumber", build)
            .add("os", 1)
            .add("xmlVersion", HEADER_VERSION)
            .add("application", "hwp2hwpx")
            .add("appVersion", env!("CARGO_PKG_VERSION")),
    )?;
    Ok(xml.finish())
}

fn settings_xml() -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start(
        "ha:HWPApplicationSetting",
        Attrs::new()
            .add("xmlns:ha", NS_APP)
            .add("xmlns:config", NS_CONFIG),
    )?;
    xml.empty(
        "ha:CaretPosition",
        Attrs::new()
            .add("listIDRef", 0)
            .add("paraIDRef", 0)
            .add("pos", 0),
    )?;
    xml.end("ha:HWPApplicationSetting")?;
    Ok(xml.finish())
}

fn timestamp(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

fn content_hpf(document: &Document) -> Result<Vec<u8>> {
    let metadata = &document.metadata;
    let mut xml = XmlWriter::new()?;
    xml.start(
        "opf:package",
        Attrs::new()
            .add("xmlns:opf", NS_OPF)
            .add("xmlns:dc", NS_DC)
            .add("xmlns:hpf", NS_HPF)
            .add("version", "")
            .add("unique-identifier", "")
            .add("id", ""),
    )?;

    xml.start("opf:metadata", Attrs::new())?;
    xml.leaf(
        "opf:title",
        Attrs::new(),
        metadata.title.as_deref().unwrap_or_default(),
    )?;
    xml.leaf("opf:language", Attrs::new(), &metadata.language)?;
    let meta = [
        ("creator", metadata.creator.clone()),
        ("subject", metadata.subject.clone()),
        ("description", metadata.description.clone()),
        ("lastsaveby", metadata.last_saved_by.clone()),
        ("CreatedDate", metadata.created.as_ref().map(timestamp)),
        ("ModifiedDate", metadata.modified.as_ref().map(timestamp)),
        ("keyword", metadata.keywords.clone()),
    ];
    for (name, value) in meta {
        if let Some(value) = value {
            xml.leaf(
                "opf:meta",
                Attrs::new().add("name", name).add("content", "text"),
                &value,
            )?;
        }
    }
    xml.end("opf:metadata")?;

    xml.start("opf:manifest", Attrs::new())?;
    let item = |id: &str, href: &str, media_type: &str| {
        Attrs::new()
            .add("id", id)
            .add("href", href)
            .add("media-type", media_type)
    };
    xml.empty("opf:item", item("header", HEADER_PATH, "application/xml"))?;
    for index in 0..document.sections.len() {
        xml.empty(
            "opf:item",
            item(&format!("section{}", index), &section_path(index), "application/xml"),
        )?;
    }
    for bin in &document.bin_items {
        xml.empty(
            "opf:item",
            item(&bin.id, &bin.href, &bin.media_type).flag("isEmbeded", true),
        )?;
    }
    xml.empty("opf:item", item("settings", "settings.xml", "application/xml"))?;
    xml.end("opf:manifest")?;

    xml.start("opf:spine", Attrs::new())?;
    xml.empty(
        "opf:itemref",
        Attrs::new().add("idref", "header").flag("linear", false),
    )?;
    for index in 0..document.sections.len() {
        xml.empty(
            "opf:itemref",
            Attrs::new()
                .add("idref", format!("section{}", index))
                .flag("linear", true),
        )?;
    }
    xml.end("opf:spine")?;

    xml.end("opf:package")?;
    Ok(xml.finish())
}

fn container_xml() -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start("ocf:container", Attrs::new().add("xmlns:ocf", NS_OCF))?;
    xml.start("ocf:rootfiles", Attrs::new())?;
    xml.empty(
        "ocf:rootfile",
        Attrs::new()
            .add("full-path", CONTENT_PATH)
            .add("media-type", "application/hwpml-package+xml"),
    )?;
    xml.end("ocf:rootfiles")?;
    xml.end("ocf:container")?;
    Ok(xml.finish())
}

fn manifest_xml() -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.empty(
        "odf:manifest",
        Attrs::new().add("xmlns:odf", NS_ODF_MANIFEST),
    )?;
    Ok(xml.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BinItem, ResourceKind, Section};
    use std::io::Read;

    fn entry_names(bytes: &[u8]) -> Vec<String> {
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        archive.file_names().map(String::from).collect()
    }

    #[test]
    fn test_version_parts() {
        assert_eq!(version_parts("5.0.3.4"), [5, 0, 3, 4]);
        assert_eq!(version_parts("garbage"), [5, 1, 0, 1]);
        assert_eq!(version_parts("5.0"), [5, 1, 0, 1]);
    }

    #[test]
    fn test_mimetype_is_first_and_stored() {
        let doc = Document {
            sections: vec![Section::new()],
            ..Default::default()
        };
        let bytes = write_package(&doc, &WriteOptions::default()).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let mut first = archive.by_index(0).unwrap();
        assert_eq!(first.name(), "mimetype");
        assert_eq!(first.compression(), CompressionMethod::Stored);
        let mut content = String::new();
        first.read_to_string(&mut content).unwrap();
        assert_eq!(content, MIMETYPE);
    }

    #[test]
    fn test_bin_items_listed_in_manifest() {
        let doc = Document {
            sections: vec![Section::new(), Section::new()],
            bin_items: vec![BinItem {
                id: "image1".to_string(),
                href: "BinData/image1.png".to_string(),
                media_type: "image/png".to_string(),
                kind: ResourceKind::Image,
                data: vec![1, 2, 3],
                hash: String::new(),
            }],
            ..Default::default()
        };
        let bytes = write_package(&doc, &WriteOptions::default()).unwrap();
        let names = entry_names(&bytes);
        assert!(names.contains(&"Contents/section1.xml".to_string()));
        assert!(names.contains(&"BinData/image1.png".to_string()));

        let hpf = String::from_utf8(content_hpf(&doc).unwrap()).unwrap();
        assert!(hpf.contains("href=\"BinData/image1.png\" media-type=\"image/png\""));
        assert!(hpf.contains("<opf:itemref idref=\"section1\" linear=\"1\"/>"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let doc = Document {
            sections: vec![Section::new()],
            ..Default::default()
        };
        let a = write_package(&doc, &WriteOptions::default()).unwrap();
        let b = write_package(&doc, &WriteOptions::default()).unwrap();
        assert_eq!(a, b);
    }
}
