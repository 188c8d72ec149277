//! Resource pipeline: moves embedded binary payloads into target parts.
//!
//! Each bin-data id is pipelined at most once: look up the record, fetch the
//! stream, inflate it when stored compressed, hash it, and either reuse the
//! part of an identical earlier payload or allocate a new one. Failures are
//! remembered per id so every dependent object sees the same outcome.

use std::collections::HashMap;
use std::io::Read;

use flate2::read::DeflateDecoder;
use md5::{Digest, Md5};

use crate::error::{Error, Result};
use crate::model::{BinItem, ResourceKind};
use crate::source::{BinCompression, BinDataKind, HwpDocument};

/// Directory of binary parts inside the container.
pub const BIN_DATA_DIR: &str = "BinData";

#[derive(Debug)]
pub struct ResourcePipeline<'a> {
    source: &'a HwpDocument,
    items: Vec<BinItem>,
    by_hash: HashMap<String, usize>,
    outcomes: HashMap<u16, std::result::Result<usize, String>>,
    deduplicated: usize,
}

impl<'a> ResourcePipeline<'a> {
    pub fn new(source: &'a HwpDocument) -> Self {
        Self {
            source,
            items: Vec::new(),
            by_hash: HashMap::new(),
            outcomes: HashMap::new(),
            deduplicated: 0,
        }
    }

    /// Pipeline a bin-data id and return the id of its target part.
    pub fn request(&mut self, bin_data_id: u16) -> Result<&str> {
        if !self.outcomes.contains_key(&bin_data_id) {
            let outcome = self.pipeline(bin_data_id).map_err(|e| match e {
                Error::ResourcePipeline { reason, .. } => reason,
                other => other.to_string(),
            });
            self.outcomes.insert(bin_data_id, outcome);
        }
        self.resolve(bin_data_id)
    }

    /// Outcome of an earlier [`request`](Self::request).
    pub fn resolve(&self, bin_data_id: u16) -> Result<&str> {
        match self.outcomes.get(&bin_data_id) {
            Some(Ok(index)) => Ok(&self.items[*index].id),
            Some(Err(reason)) => Err(Error::ResourcePipeline {
                id: bin_data_id,
                reason: reason.clone(),
            }),
            None => Err(Error::ResourcePipeline {
                id: bin_data_id,
                reason: "not referenced during collection".to_string(),
            }),
        }
    }

    /// Number of requests that reused an identical payload.
    pub fn deduplicated(&self) -> usize {
        self.deduplicated
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<BinItem> {
        self.items
    }

    fn pipeline(&mut self, bin_data_id: u16) -> Result<usize> {
        let fail = |reason: String| Error::ResourcePipeline {
            id: bin_data_id,
            reason,
        };

        let source = self.source;
        let record = source
            .doc_info
            .bin_data_ref(bin_data_id)
            .ok_or_else(|| fail("no bin data record".to_string()))?;
        if record.kind == BinDataKind::Link {
            let path = record.link_path.as_deref().unwrap_or("");
            return Err(fail(format!("linked file '{}' is not embedded", path)));
        }

        let stream = source
            .bin_stream(bin_data_id)
            .ok_or_else(|| fail("embedded stream is missing".to_string()))?;

        let compressed = match record.compression {
            BinCompression::Default => source.header.compressed,
            BinCompression::Compress => true,
            BinCompression::NoCompress => false,
        };
        let data = if compressed {
            inflate(&stream.data).map_err(|e| fail(format!("inflate failed: {}", e)))?
        } else {
            stream.data.clone()
        };
        if data.is_empty() {
            return Err(fail("empty payload".to_string()));
        }

        let hash = format!("{:x}", Md5::digest(&data));
        if let Some(&index) = self.by_hash.get(&hash) {
            log::debug!(
                "bin data {} shares part {} (md5 {})",
                bin_data_id,
                self.items[index].id,
                hash
            );
            self.deduplicated += 1;
            return Ok(index);
        }

        let extension = match record.extension.as_deref() {
            Some(ext) if !ext.is_empty() => ext.to_ascii_lowercase(),
            _ => BinItem::detect_media_type(&data)
                .map(BinItem::extension_for)
                .unwrap_or("bin")
                .to_string(),
        };
        let media_type = BinItem::media_type_for(&extension);
        let kind = if record.kind == BinDataKind::Storage || extension == "ole" {
            ResourceKind::Ole
        } else if media_type.starts_with("image/") {
            ResourceKind::Image
        } else {
            ResourceKind::Other
        };

        // numbered per kind: image1, ole1, image2
        let number = self.items.iter().filter(|item| item.kind == kind).count() + 1;
        let id = format!("{}{}", kind.stem(), number);
        let item = BinItem {
            href: format!("{}/{}.{}", BIN_DATA_DIR, id, extension),
            id,
            media_type: media_type.to_string(),
            kind,
            data,
            hash: hash.clone(),
        };
        log::debug!("bin data {} -> {} ({} bytes)", bin_data_id, item.href, item.size());

        let index = self.items.len();
        self.items.push(item);
        self.by_hash.insert(hash, index);
        Ok(index)
    }
}

/// Raw deflate, as used for compressed source streams.
fn inflate(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut decoder = DeflateDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{BinDataRef, EmbeddedBinData};
    use flate2::write::DeflateEncoder;
    use flate2::Compression;
    use std::io::Write;

    const PNG: [u8; 12] = [
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
    ];

    fn deflate(data: &[u8]) -> Vec<u8> {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    fn source_with(refs: Vec<BinDataRef>, streams: Vec<EmbeddedBinData>) -> HwpDocument {
        let mut doc = HwpDocument::default();
        doc.doc_info.bin_data_refs = refs;
        doc.bin_data = streams;
        doc
    }

    fn embedded(id: u16, ext: Option<&str>) -> BinDataRef {
        BinDataRef {
            id,
            extension: ext.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_compressed_payload_is_inflated_and_named() {
        let doc = source_with(
            vec![embedded(1, Some("PNG"))],
            vec![EmbeddedBinData {
                id: 1,
                data: deflate(&PNG),
            }],
        );
        let mut pipeline = ResourcePipeline::new(&doc);
        assert_eq!(pipeline.request(1).unwrap(), "image1");

        let items = pipeline.into_items();
        assert_eq!(items[0].href, "BinData/image1.png");
        assert_eq!(items[0].media_type, "image/png");
        assert_eq!(items[0].data, PNG.to_vec());
        assert_eq!(items[0].hash.len(), 32);
    }

    #[test]
    fn test_identical_payloads_share_a_part() {
        let mut doc = source_with(
            vec![embedded(1, Some("png")), embedded(2, Some("png"))],
            vec![
                EmbeddedBinData {
                    id: 1,
                    data: PNG.to_vec(),
                },
                EmbeddedBinData {
                    id: 2,
                    data: PNG.to_vec(),
                },
            ],
        );
        doc.header.compressed = false;
        let mut pipeline = ResourcePipeline::new(&doc);
        let first = pipeline.request(1).unwrap().to_string();
        let second = pipeline.request(2).unwrap().to_string();

        assert_eq!(first, second);
        assert_eq!(pipeline.len(), 1);
        assert_eq!(pipeline.deduplicated(), 1);
    }

    #[test]
    fn test_extension_detected_from_magic() {
        let mut doc = source_with(
            vec![embedded(3, None)],
            vec![EmbeddedBinData {
                id: 3,
                data: PNG.to_vec(),
            }],
        );
        doc.header.compressed = false;
        let mut pipeline = ResourcePipeline::new(&doc);
        pipeline.request(3).unwrap();
        assert_eq!(pipeline.into_items()[0].href, "BinData/image1.png");
    }

    #[test]
    fn test_link_and_missing_stream_fail() {
        let link = BinDataRef {
            id: 1,
            kind: BinDataKind::Link,
            link_path: Some("C:\\a.png".into()),
            ..Default::default()
        };
        let doc = source_with(vec![link, embedded(2, Some("png"))], Vec::new());
        let mut pipeline = ResourcePipeline::new(&doc);

        assert!(matches!(
            pipeline.request(1),
            Err(Error::ResourcePipeline { id: 1, .. })
        ));
        assert!(matches!(
            pipeline.request(2),
            Err(Error::ResourcePipeline { id: 2, .. })
        ));
        assert!(matches!(
            pipeline.request(9),
            Err(Error::ResourcePipeline { id: 9, .. })
        ));
        // failures are remembered, not retried
        assert!(pipeline.resolve(1).is_err());
        assert!(pipeline.is_empty());
    }

    #[test]
    fn test_storage_is_ole() {
        let record = BinDataRef {
            id: 1,
            kind: BinDataKind::Storage,
            compression: BinCompression::NoCompress,
            extension: Some("ole".into()),
            ..Default::default()
        };
        let doc = source_with(
            vec![record],
            vec![EmbeddedBinData {
                id: 1,
                data: vec![0xD0, 0xCF, 0x11, 0xE0, 1, 2, 3, 4],
            }],
        );
        let mut pipeline = ResourcePipeline::new(&doc);
        assert_eq!(pipeline.request(1).unwrap(), "ole1");
    }

    #[test]
    fn test_parts_numbered_per_kind() {
        let ole = BinDataRef {
            id: 2,
            kind: BinDataKind::Storage,
            compression: BinCompression::NoCompress,
            extension: Some("ole".into()),
            ..Default::default()
        };
        let mut gif = embedded(3, Some("gif"));
        gif.compression = BinCompression::NoCompress;
        let mut png = embedded(1, Some("png"));
        png.compression = BinCompression::NoCompress;
        let doc = source_with(
            vec![png, ole, gif],
            vec![
                EmbeddedBinData {
                    id: 1,
                    data: PNG.to_vec(),
                },
                EmbeddedBinData {
                    id: 2,
                    data: vec![0xD0, 0xCF, 0x11, 0xE0, 1, 2, 3, 4],
                },
                EmbeddedBinData {
                    id: 3,
                    data: b"GIF89a".to_vec(),
                },
            ],
        );
        let mut pipeline = ResourcePipeline::new(&doc);
        let ids: Vec<String> = [1, 2, 3]
            .into_iter()
            .map(|id| pipeline.request(id).unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["image1", "ole1", "image2"]);
    }
}
