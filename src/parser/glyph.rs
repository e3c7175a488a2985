//! Glyph-level JSON engine output parsing.
//!
//! Consumes the flat `textAnnotations` list where element 0 describes the
//! whole page (spaced text plus page-covering geometry) and elements 1..N
//! are per-token fragments. Files may be gzip-compressed on disk.

use std::io::Read;

use flate2::read::GzDecoder;
use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::Point;
use crate::parser::source::{GlyphFragmentSource, GlyphSource};

#[derive(Debug, Deserialize)]
struct RawVertex {
    #[serde(default)]
    x: Option<f32>,
    #[serde(default)]
    y: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
struct RawBoundingPoly {
    #[serde(default)]
    vertices: Vec<RawVertex>,
}

#[derive(Debug, Deserialize)]
struct RawAnnotation {
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "boundingPoly", default)]
    bounding_poly: Option<RawBoundingPoly>,
}

/// The engine wraps the annotation list in a response object, but some
/// archives store the bare array; both shapes are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawResponse {
    Page {
        #[serde(rename = "textAnnotations", default)]
        text_annotations: Vec<RawAnnotation>,
    },
    List(Vec<RawAnnotation>),
}

/// Parse a glyph-level page from raw (uncompressed) JSON bytes.
///
/// Annotation 0 is withheld from the fragment stream and retained as the
/// spaced reference text; an empty annotation list yields an empty source.
/// Per-token annotations with no whole-page text to align against are a
/// malformed engine response.
pub fn parse_glyphs(data: &[u8]) -> Result<GlyphFragmentSource> {
    let response: RawResponse = serde_json::from_slice(data)?;
    let annotations = match response {
        RawResponse::Page { text_annotations } => text_annotations,
        RawResponse::List(list) => list,
    };

    let mut annotations = annotations.into_iter();
    let Some(whole_page) = annotations.next() else {
        return Ok(GlyphFragmentSource::default());
    };

    let glyphs: Vec<GlyphSource> = annotations
        .filter_map(|annotation| {
            let text = annotation.description?;
            let vertices = normalize_vertices(annotation.bounding_poly.as_ref())?;
            Some(GlyphSource { text, vertices })
        })
        .collect();

    if whole_page.description.is_none() && !glyphs.is_empty() {
        return Err(Error::MalformedResponse(
            "whole-page annotation has no description".to_string(),
        ));
    }

    Ok(GlyphFragmentSource {
        page_text: whole_page.description,
        glyphs,
    })
}

/// Parse a gzip-compressed glyph-level page.
pub fn parse_glyphs_gzip(data: &[u8]) -> Result<GlyphFragmentSource> {
    let mut decoder = GzDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed)?;
    parse_glyphs(&decompressed)
}

/// Normalize a raw bounding polygon into points.
///
/// This is the single place the missing-geometry policy lives: a vertex
/// without a `y` value legitimately defaults to 0, while a vertex without
/// an `x` value (or a polygon with fewer than three vertices) makes the
/// whole glyph unusable and it is dropped.
fn normalize_vertices(poly: Option<&RawBoundingPoly>) -> Option<Vec<Point>> {
    let vertices = &poly?.vertices;
    if vertices.len() < 3 {
        debug!("dropping glyph with {} vertices", vertices.len());
        return None;
    }
    let mut points = Vec::with_capacity(vertices.len());
    for vertex in vertices {
        let Some(x) = vertex.x else {
            debug!("dropping glyph with missing x vertex");
            return None;
        };
        points.push(Point::new(x, vertex.y.unwrap_or(0.0)));
    }
    Some(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const PAGE_JSON: &str = r#"{
        "textAnnotations": [
            {
                "description": "ab cd",
                "boundingPoly": {"vertices": [
                    {"x": 0, "y": 0}, {"x": 2000, "y": 0},
                    {"x": 2000, "y": 1400}, {"x": 0, "y": 1400}
                ]}
            },
            {
                "description": "ab",
                "boundingPoly": {"vertices": [
                    {"x": 100, "y": 90}, {"x": 140, "y": 90},
                    {"x": 140, "y": 110}, {"x": 100, "y": 110}
                ]}
            },
            {
                "description": "cd",
                "boundingPoly": {"vertices": [
                    {"x": 150}, {"x": 190},
                    {"x": 190, "y": 110}, {"x": 150, "y": 110}
                ]}
            }
        ]
    }"#;

    #[test]
    fn test_element_zero_becomes_reference() {
        let source = parse_glyphs(PAGE_JSON.as_bytes()).unwrap();
        assert_eq!(source.page_text.as_deref(), Some("ab cd"));
        assert_eq!(source.glyphs.len(), 2);
        assert_eq!(source.glyphs[0].text, "ab");
    }

    #[test]
    fn test_missing_y_defaults_to_zero() {
        let source = parse_glyphs(PAGE_JSON.as_bytes()).unwrap();
        let cd = &source.glyphs[1];
        assert_eq!(cd.vertices[0].y, 0.0);
        assert_eq!(cd.vertices[2].y, 110.0);
    }

    #[test]
    fn test_missing_x_drops_the_glyph() {
        let json = r#"[
            {"description": "page", "boundingPoly": {"vertices": [
                {"x": 0, "y": 0}, {"x": 10, "y": 0}, {"x": 10, "y": 10}, {"x": 0, "y": 10}
            ]}},
            {"description": "bad", "boundingPoly": {"vertices": [
                {"y": 5}, {"x": 10, "y": 5}, {"x": 10, "y": 15}, {"x": 0, "y": 15}
            ]}}
        ]"#;
        let source = parse_glyphs(json.as_bytes()).unwrap();
        assert!(source.glyphs.is_empty());
    }

    #[test]
    fn test_empty_annotation_list() {
        let source = parse_glyphs(br#"{"textAnnotations": []}"#).unwrap();
        assert!(source.page_text.is_none());
        assert!(source.glyphs.is_empty());
    }

    #[test]
    fn test_missing_whole_page_description_alone_is_empty() {
        let json = r#"[{"boundingPoly": {"vertices": [
            {"x": 0, "y": 0}, {"x": 10, "y": 0}, {"x": 10, "y": 10}, {"x": 0, "y": 10}
        ]}}]"#;
        let source = parse_glyphs(json.as_bytes()).unwrap();
        assert!(source.page_text.is_none());
        assert!(source.glyphs.is_empty());
    }

    #[test]
    fn test_tokens_without_whole_page_text_are_malformed() {
        let json = r#"[
            {"boundingPoly": {"vertices": [
                {"x": 0, "y": 0}, {"x": 10, "y": 0}, {"x": 10, "y": 10}, {"x": 0, "y": 10}
            ]}},
            {"description": "ab", "boundingPoly": {"vertices": [
                {"x": 1, "y": 1}, {"x": 5, "y": 1}, {"x": 5, "y": 9}, {"x": 1, "y": 9}
            ]}}
        ]"#;
        let err = parse_glyphs(json.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_gzip_round_trip() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(PAGE_JSON.as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();

        let source = parse_glyphs_gzip(&compressed).unwrap();
        assert_eq!(source.page_text.as_deref(), Some("ab cd"));
        assert_eq!(source.glyphs.len(), 2);
    }
}
