//! Adaptive-threshold clustering for glyph-level fragments.

use super::ClusterStrategy;
use crate::model::{Fragment, Line};

/// Clusters fragments by walking them in native emission order and closing
/// the current line whenever the vertical midpoint jumps by more than the
/// page-adaptive threshold (average fragment height / divisor).
///
/// This only detects line *breaks* within the engine's own output order; it
/// never re-sorts fragments. That is valid because the glyph engine emits
/// roughly raster order. Severely rotated, multi-column, or right-to-left
/// pages can produce incorrect joins under this assumption; that is a known
/// limitation of the strategy, not something it tries to repair.
#[derive(Debug, Clone)]
pub struct AdaptiveCluster {
    threshold_divisor: f32,
}

impl AdaptiveCluster {
    /// Create a strategy with the given threshold divisor.
    pub fn new(threshold_divisor: f32) -> Self {
        Self { threshold_divisor }
    }

    /// The per-page line-break threshold: average fragment height divided
    /// by the configured divisor.
    pub fn threshold(&self, fragments: &[Fragment]) -> f32 {
        if fragments.is_empty() {
            return 0.0;
        }
        let avg_height =
            fragments.iter().map(|f| f.height).sum::<f32>() / fragments.len() as f32;
        avg_height / self.threshold_divisor
    }
}

impl ClusterStrategy for AdaptiveCluster {
    fn cluster(&self, fragments: Vec<Fragment>) -> Vec<Line> {
        if fragments.is_empty() {
            return Vec::new();
        }

        let threshold = self.threshold(&fragments);
        let mut lines = Vec::new();
        let mut current: Vec<Fragment> = Vec::new();
        let mut prev_position = fragments[0].vertical_position;

        for fragment in fragments {
            let delta = (fragment.vertical_position - prev_position).abs();
            prev_position = fragment.vertical_position;

            if current.is_empty() || delta <= threshold {
                current.push(fragment);
            } else {
                lines.push(Line::new(None, std::mem::take(&mut current)));
                current.push(fragment);
            }
        }

        // Flush the still-open accumulator as the final line
        if !current.is_empty() {
            lines.push(Line::new(None, current));
        }

        lines
    }
}
