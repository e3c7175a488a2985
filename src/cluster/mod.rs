//! Line clustering: grouping spatially-positioned fragments into visual
//! lines and ordering them top-to-bottom.
//!
//! Two strategies share one interface because the two ingestion paths have
//! different noise characteristics. Structured-XML fragments are already
//! engine-declared lines with low vertical noise, so a fixed quantization
//! bucket is cheap and stable. Glyph-level fragments carry per-character
//! noise, so the break threshold adapts to the page's average glyph height.

mod adaptive;
mod bucket;

pub use adaptive::AdaptiveCluster;
pub use bucket::BucketCluster;

use crate::model::{Fragment, Line};

/// A line clustering strategy: partition fragments into lines, returned in
/// top-to-bottom reading order.
///
/// Every input fragment ends up in exactly one output line; strategies
/// never drop or duplicate fragments.
pub trait ClusterStrategy {
    /// Partition the fragments into ordered lines.
    fn cluster(&self, fragments: Vec<Fragment>) -> Vec<Line>;
}
