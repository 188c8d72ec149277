//! Input format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Kind of input recognized from its leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Decoded HWP record tree in JSON form
    DecodedJson,
    /// Binary HWP 5.x (OLE compound file)
    BinaryHwp,
    /// HWPX (zip container)
    Hwpx,
}

impl InputFormat {
    /// Whether the converter can take this input directly.
    pub fn is_convertible(&self) -> bool {
        matches!(self, InputFormat::DecodedJson)
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::DecodedJson => write!(f, "decoded HWP (JSON)"),
            InputFormat::BinaryHwp => write!(f, "HWP 5.x binary"),
            InputFormat::Hwpx => write!(f, "HWPX"),
        }
    }
}

/// OLE compound file signature.
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
/// Local file header signature of a zip archive.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const HEADER_LEN: usize = 64;

/// Detect the input format of a file.
///
/// # Example
/// ```no_run
/// use hwp2hwpx::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("document.json").unwrap();
/// println!("input: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    BufReader::new(file)
        .take(HEADER_LEN as u64)
        .read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the input format from the first bytes of the data.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<InputFormat> {
    if data.starts_with(OLE_MAGIC) {
        return Ok(InputFormat::BinaryHwp);
    }
    if data.starts_with(ZIP_MAGIC) {
        return Ok(InputFormat::Hwpx);
    }

    let text = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    match text.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => Ok(InputFormat::DecodedJson),
        Some(_) => Err(Error::UnknownFormat(
            "expected a decoded HWP document".to_string(),
        )),
        None => Err(Error::UnknownFormat("empty input".to_string())),
    }
}

/// Ensure the data is something the converter accepts.
pub fn ensure_convertible(data: &[u8]) -> Result<()> {
    match detect_format_from_bytes(data)? {
        InputFormat::DecodedJson => Ok(()),
        InputFormat::BinaryHwp => Err(Error::UnknownFormat(
            "binary HWP requires a record decoder; supply the decoded document as JSON"
                .to_string(),
        )),
        InputFormat::Hwpx => Err(Error::UnknownFormat("input is already HWPX".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_json() {
        assert_eq!(
            detect_format_from_bytes(b"  \n{\"sections\": []}").unwrap(),
            InputFormat::DecodedJson
        );
        assert_eq!(
            detect_format_from_bytes(b"\xEF\xBB\xBF{}").unwrap(),
            InputFormat::DecodedJson
        );
    }

    #[test]
    fn test_detect_containers() {
        let mut ole = OLE_MAGIC.to_vec();
        ole.extend_from_slice(&[0; 8]);
        assert_eq!(detect_format_from_bytes(&ole).unwrap(), InputFormat::BinaryHwp);
        assert_eq!(
            detect_format_from_bytes(b"PK\x03\x04rest").unwrap(),
            InputFormat::Hwpx
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert!(matches!(
            detect_format_from_bytes(b"<!DOCTYPE html>"),
            Err(Error::UnknownFormat(_))
        ));
        assert!(matches!(
            detect_format_from_bytes(b""),
            Err(Error::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_binary_hwp_not_convertible() {
        let err = ensure_convertible(OLE_MAGIC).unwrap_err();
        assert!(err.to_string().contains("record decoder"));
        assert!(ensure_convertible(b"{}").is_ok());
        assert!(!InputFormat::Hwpx.is_convertible());
    }
}
