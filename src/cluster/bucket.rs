//! Quantized-bucket clustering for engine-declared line fragments.

use std::collections::BTreeMap;

use super::ClusterStrategy;
use crate::model::{Fragment, Line};

/// Clusters fragments by quantizing their vertical position into fixed-size
/// buckets; fragments landing in the same bucket form one line.
///
/// Suited to the structured path, where each fragment is already an
/// engine-declared line and vertical noise is small. Brittle to page skew
/// or strong font-size variance; the adaptive strategy covers those on the
/// glyph path.
#[derive(Debug, Clone)]
pub struct BucketCluster {
    bucket_size: f32,
}

impl BucketCluster {
    /// Create a strategy with the given bucket size (one expected line
    /// height, in page pixels).
    pub fn new(bucket_size: f32) -> Self {
        Self { bucket_size }
    }

    /// Round-half-up quantization: a position past the bucket midpoint
    /// rounds up to the next bucket boundary, otherwise down.
    ///
    /// With bucket size 70: y 55 → 70, y 30 → 0, y 105 (exact midpoint of
    /// bucket 1) → 70.
    pub fn quantize(&self, y: f32) -> f32 {
        let base = (y / self.bucket_size).floor();
        if y % self.bucket_size > self.bucket_size / 2.0 {
            (base + 1.0) * self.bucket_size
        } else {
            base * self.bucket_size
        }
    }
}

impl ClusterStrategy for BucketCluster {
    fn cluster(&self, fragments: Vec<Fragment>) -> Vec<Line> {
        // Key by bucket index, not the quantized position: the quantized
        // value is an exact multiple of the bucket size, so the index is an
        // exact integer and stays distinct even for sub-unit bucket sizes.
        let mut buckets: BTreeMap<i64, Vec<Fragment>> = BTreeMap::new();
        for fragment in fragments {
            let index = (self.quantize(fragment.vertical_position) / self.bucket_size).round();
            buckets.entry(index as i64).or_default().push(fragment);
        }

        buckets
            .into_iter()
            .map(|(index, fragments)| {
                Line::from_cluster(index as f32 * self.bucket_size, fragments)
            })
            .collect()
    }
}
