//! Binary items (images, OLE payloads) packaged under `BinData/`.

use serde::{Deserialize, Serialize};

/// A binary part of the target container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinItem {
    /// Manifest id, e.g. `image1`
    pub id: String,

    /// Part path inside the container, e.g. `BinData/image1.png`
    pub href: String,

    /// MIME type (e.g., "image/png")
    pub media_type: String,

    /// Resource type
    pub kind: ResourceKind,

    /// Decoded payload
    #[serde(skip_serializing, default)]
    pub data: Vec<u8>,

    /// Hex content hash
    pub hash: String,
}

impl BinItem {
    /// Get the size of the payload in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_image(&self) -> bool {
        matches!(self.kind, ResourceKind::Image)
    }

    /// File extension for a MIME type.
    pub fn extension_for(media_type: &str) -> &'static str {
        match media_type {
            "image/jpeg" => "jpg",
            "image/png" => "png",
            "image/gif" => "gif",
            "image/tiff" => "tif",
            "image/bmp" => "bmp",
            "image/webp" => "webp",
            "image/x-wmf" => "wmf",
            "image/x-emf" => "emf",
            "application/ole" => "ole",
            _ => "bin",
        }
    }

    /// MIME type for a file extension, case-insensitive.
    pub fn media_type_for(extension: &str) -> &'static str {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            "tif" | "tiff" => "image/tiff",
            "bmp" => "image/bmp",
            "webp" => "image/webp",
            "wmf" => "image/x-wmf",
            "emf" => "image/x-emf",
            "ole" => "application/ole",
            _ => "application/octet-stream",
        }
    }

    /// Detect MIME type from data magic bytes.
    pub fn detect_media_type(data: &[u8]) -> Option<&'static str> {
        if data.len() < 8 {
            return None;
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some("image/jpeg");
        }

        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some("image/png");
        }

        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some("image/gif");
        }

        if data.starts_with(&[0x49, 0x49, 0x2A, 0x00])
            || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
        {
            return Some("image/tiff");
        }

        if data.starts_with(b"BM") {
            return Some("image/bmp");
        }

        // WMF placeable header: D7 CD C6 9A
        if data.starts_with(&[0xD7, 0xCD, 0xC6, 0x9A]) {
            return Some("image/x-wmf");
        }

        // EMF: EMR_HEADER record type 1, signature " EMF" at offset 40
        if data.len() >= 44 && data.starts_with(&[0x01, 0x00, 0x00, 0x00]) && &data[40..44] == b" EMF"
        {
            return Some("image/x-emf");
        }

        if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
            return Some("image/webp");
        }

        None
    }
}

/// Type of binary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Image,
    Ole,
    Other,
}

impl ResourceKind {
    /// File-name stem used for generated part names.
    pub fn stem(&self) -> &'static str {
        match self {
            ResourceKind::Image => "image",
            ResourceKind::Ole => "ole",
            ResourceKind::Other => "bin",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_media_type() {
        let jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
        assert_eq!(BinItem::detect_media_type(&jpeg), Some("image/jpeg"));

        let png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(BinItem::detect_media_type(&png), Some("image/png"));

        let unknown = vec![0x00; 8];
        assert_eq!(BinItem::detect_media_type(&unknown), None);
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(BinItem::media_type_for("JPG"), "image/jpeg");
        assert_eq!(BinItem::extension_for("image/png"), "png");
        assert_eq!(BinItem::extension_for("text/plain"), "bin");
        assert_eq!(ResourceKind::Ole.stem(), "ole");
    }
}
