//! Engine output parsing and fragment ingestion.

mod glyph;
mod ingest;
mod options;
mod source;
mod xml;

pub use glyph::{parse_glyphs, parse_glyphs_gzip};
pub use ingest::{fragments_from_glyphs, fragments_from_structured, select_main_region};
pub use options::ParseOptions;
pub use source::{
    GlyphFragmentSource, GlyphSource, LineSource, PageSource, RegionSource, StructuredLineSource,
};
pub use xml::parse_structured;

use crate::detect::{detect_format_from_bytes, SourceFormat};
use crate::error::{Error, Result};

/// Detect the engine format of a raw page file and parse it into its typed
/// source representation.
pub fn parse_page_bytes(data: &[u8]) -> Result<PageSource> {
    match detect_format_from_bytes(data)? {
        SourceFormat::StructuredXml => {
            let xml = std::str::from_utf8(data)
                .map_err(|e| Error::XmlParse(format!("invalid UTF-8: {e}")))?;
            Ok(PageSource::Structured(parse_structured(xml)?))
        }
        SourceFormat::GlyphJson => Ok(PageSource::Glyph(parse_glyphs(data)?)),
        SourceFormat::GlyphJsonGzip => Ok(PageSource::Glyph(parse_glyphs_gzip(data)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_bytes_dispatch() {
        let xml = b"<PcGts><Page/></PcGts>";
        assert!(matches!(
            parse_page_bytes(xml).unwrap(),
            PageSource::Structured(_)
        ));

        let json = br#"{"textAnnotations": []}"#;
        assert!(matches!(
            parse_page_bytes(json).unwrap(),
            PageSource::Glyph(_)
        ));

        assert!(parse_page_bytes(b"plain text").is_err());
    }
}
