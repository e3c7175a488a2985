//! Typed ingestion boundary for raw engine output.
//!
//! The two engines emit heterogeneous trees (region/line XML, flat glyph
//! JSON). Everything past this boundary works on these explicit variant
//! types; no raw tree escapes the parser module.

use crate::model::Point;

/// One engine-declared line inside a structured-XML region.
#[derive(Debug, Clone, Default)]
pub struct LineSource {
    /// Baseline polyline points, in declaration order.
    pub baseline: Vec<Point>,
    /// Recognized text, absent when the engine produced no transcription.
    pub text: Option<String>,
}

/// A candidate text region on a structured-XML page.
#[derive(Debug, Clone, Default)]
pub struct RegionSource {
    /// Declared lines, in document order.
    pub lines: Vec<LineSource>,
}

impl RegionSource {
    /// Total character length of the region's recognized text, the proxy
    /// used to pick the main body region.
    pub fn text_len(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.text.as_deref().map_or(0, |t| t.chars().count()))
            .sum()
    }
}

/// A full structured-XML page: its candidate regions.
#[derive(Debug, Clone, Default)]
pub struct StructuredLineSource {
    /// Candidate regions, in document order.
    pub regions: Vec<RegionSource>,
}

/// One token annotation from the glyph-level engine, with normalized
/// bounding geometry.
#[derive(Debug, Clone)]
pub struct GlyphSource {
    /// Recognized token text.
    pub text: String,
    /// Bounding polygon vertices. Missing y values have already been
    /// defaulted to zero by the geometry normalization step.
    pub vertices: Vec<Point>,
}

/// A full glyph-level page.
#[derive(Debug, Clone, Default)]
pub struct GlyphFragmentSource {
    /// The whole-page description carried by annotation 0: the spaced
    /// reference text consumed by space restoration. Absent when the
    /// engine response is malformed.
    pub page_text: Option<String>,
    /// Per-token annotations 1..N, in native emission order.
    pub glyphs: Vec<GlyphSource>,
}

/// A parsed page from either engine.
#[derive(Debug, Clone)]
pub enum PageSource {
    /// Region/line structured output.
    Structured(StructuredLineSource),
    /// Flat glyph annotation output.
    Glyph(GlyphFragmentSource),
}
