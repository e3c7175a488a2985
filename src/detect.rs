//! Engine output format detection.
//!
//! Sniffs the leading bytes of a page file to decide which ingestion path
//! handles it: structured XML, glyph-level JSON, or gzip-wrapped glyph JSON.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The shape of a raw OCR engine page file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Region/line structured XML with baseline geometry.
    StructuredXml,
    /// Flat glyph annotation list as JSON.
    GlyphJson,
    /// Glyph annotation list compressed with gzip.
    GlyphJsonGzip,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::StructuredXml => write!(f, "structured XML"),
            SourceFormat::GlyphJson => write!(f, "glyph JSON"),
            SourceFormat::GlyphJsonGzip => write!(f, "glyph JSON (gzip)"),
        }
    }
}

/// Gzip magic bytes.
const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];

/// UTF-8 byte order mark, occasionally prepended by XML exporters.
const UTF8_BOM: &[u8] = &[0xef, 0xbb, 0xbf];

/// Detect the engine output format from a file path.
///
/// # Example
/// ```no_run
/// use unocr::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("page_0001.xml").unwrap();
/// println!("format: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SourceFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 16];
    let n = reader.read(&mut header)?;
    detect_format_from_bytes(&header[..n])
}

/// Detect the engine output format from leading bytes.
///
/// Gzip magic selects the compressed glyph path; otherwise the first
/// non-whitespace byte decides: `<` is structured XML, `{` or `[` is
/// glyph JSON. Anything else is `Error::UnknownFormat`.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<SourceFormat> {
    if data.starts_with(GZIP_MAGIC) {
        return Ok(SourceFormat::GlyphJsonGzip);
    }

    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    let first = data
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .ok_or(Error::UnknownFormat)?;

    match first {
        b'<' => Ok(SourceFormat::StructuredXml),
        b'{' | b'[' => Ok(SourceFormat::GlyphJson),
        _ => Err(Error::UnknownFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_xml() {
        assert_eq!(
            detect_format_from_bytes(b"<?xml version=\"1.0\"?>").unwrap(),
            SourceFormat::StructuredXml
        );
        // Leading whitespace is tolerated
        assert_eq!(
            detect_format_from_bytes(b"  \n<PcGts>").unwrap(),
            SourceFormat::StructuredXml
        );
    }

    #[test]
    fn test_detect_xml_with_bom() {
        let mut data = vec![0xef, 0xbb, 0xbf];
        data.extend_from_slice(b"<PcGts>");
        assert_eq!(
            detect_format_from_bytes(&data).unwrap(),
            SourceFormat::StructuredXml
        );
    }

    #[test]
    fn test_detect_json() {
        assert_eq!(
            detect_format_from_bytes(b"{\"textAnnotations\": []}").unwrap(),
            SourceFormat::GlyphJson
        );
        assert_eq!(
            detect_format_from_bytes(b"[{\"description\": \"x\"}]").unwrap(),
            SourceFormat::GlyphJson
        );
    }

    #[test]
    fn test_detect_gzip() {
        assert_eq!(
            detect_format_from_bytes(&[0x1f, 0x8b, 0x08, 0x00]).unwrap(),
            SourceFormat::GlyphJsonGzip
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert!(detect_format_from_bytes(b"%PDF-1.7").is_err());
        assert!(detect_format_from_bytes(b"").is_err());
        assert!(detect_format_from_bytes(b"   ").is_err());
    }
}
