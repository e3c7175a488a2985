//! # unocr
//!
//! Reading-order and spacing reconstruction from spatial OCR output.
//!
//! OCR engines that report per-line or per-glyph bounding geometry leave
//! the caller with unordered text fragments instead of flowing text. This
//! library recovers natural reading order (which fragments share a visual
//! line, how lines stack vertically, how fragments order horizontally)
//! and, on the glyph path, re-inserts the inter-word spacing the engine
//! dropped, by aligning against the page's own spaced reference text.
//!
//! Two engine output shapes are supported:
//!
//! - **Structured XML**: regions of declared lines, each with a baseline
//!   polyline and optional recognized text. Clustered with a fixed
//!   quantization bucket.
//! - **Glyph-level JSON** (optionally gzip-compressed): a flat
//!   `textAnnotations` list whose element 0 is the spaced whole-page text.
//!   Clustered with a page-adaptive break threshold.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> unocr::Result<()> {
//!     // Reconstruct one page
//!     let page = unocr::extract_page_text("page_0001.xml")?;
//!     println!("{}", page);
//!
//!     // Reconstruct a whole volume directory into one text blob
//!     let options = unocr::ParseOptions::default();
//!     let volume = unocr::process_volume("volumes/I2KG212285", &options)?;
//!     unocr::write_volume(&volume, "I2KG212285.txt")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two clustering strategies** behind one interface, selected by input
//!   shape and independently tunable
//! - **Per-page failure isolation**: a malformed page yields a marker, not
//!   a failed batch
//! - **Parallel volumes**: pages are processed with Rayon and merged back
//!   in filename order
//! - **Injectable space aligner** for testing or alternative alignment

pub mod cluster;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod spacing;
pub mod volume;

// Re-export commonly used types
pub use cluster::{AdaptiveCluster, BucketCluster, ClusterStrategy};
pub use detect::{detect_format_from_bytes, detect_format_from_path, SourceFormat};
pub use error::{Error, Result};
pub use model::{Fragment, Line, Page, PageResult, PageStatus, Point, Volume};
pub use parser::{
    parse_page_bytes, GlyphFragmentSource, GlyphSource, LineSource, PageSource, ParseOptions,
    RegionSource, StructuredLineSource,
};
pub use volume::{
    process_page, process_page_with_aligner, process_volume, process_volume_range, write_volume,
};

use std::path::Path;

/// Reconstruct one page's text with default options.
///
/// # Example
///
/// ```no_run
/// let text = unocr::extract_page_text("page_0001.json.gz").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_page_text<P: AsRef<Path>>(path: P) -> Result<String> {
    extract_page_text_with_options(path, &ParseOptions::default())
}

/// Reconstruct one page's text with custom options.
pub fn extract_page_text_with_options<P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> Result<String> {
    Ok(process_page(path, options)?.text)
}

/// Reconstruct a volume directory into its aggregated text with default
/// options.
pub fn extract_volume_text<P: AsRef<Path>>(input_dir: P) -> Result<String> {
    let volume = process_volume(input_dir, &ParseOptions::default())?;
    Ok(volume.plain_text())
}
