//! Line-level types.

use super::Fragment;
use serde::{Deserialize, Serialize};

/// A visual line: fragments that share one cluster assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    /// The clustering key used to order lines vertically. Quantized bucket
    /// value on the bucket path; `None` on the adaptive path, where line
    /// order is emission order.
    pub line_indicator: Option<f32>,

    /// The fragments in this line.
    pub fragments: Vec<Fragment>,
}

impl Line {
    /// Create a line from fragments, keeping their given order.
    pub fn new(line_indicator: Option<f32>, fragments: Vec<Fragment>) -> Self {
        Self {
            line_indicator,
            fragments,
        }
    }

    /// Create a line and stably sort its fragments by horizontal start.
    ///
    /// Fragments with identical `horizontal_start` keep their relative
    /// ingestion order.
    pub fn from_cluster(line_indicator: f32, mut fragments: Vec<Fragment>) -> Self {
        fragments.sort_by(|a, b| {
            a.horizontal_start
                .partial_cmp(&b.horizontal_start)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self {
            line_indicator: Some(line_indicator),
            fragments,
        }
    }

    /// Concatenate fragment texts in order, keeping only fragments whose
    /// text length exceeds `min_fragment_len` characters.
    ///
    /// The minimum-length filter suppresses spurious one- and two-character
    /// marginal detections on the structured path; pass 0 to keep everything.
    pub fn text(&self, min_fragment_len: usize) -> String {
        let mut result = String::new();
        for fragment in &self.fragments {
            if fragment.text_len() > min_fragment_len {
                result.push_str(fragment.text_or_empty());
            }
        }
        result
    }

    /// Check if the line has no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Get the number of fragments in the line.
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }
}
