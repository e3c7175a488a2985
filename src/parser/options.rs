//! Parsing options and configuration.

/// Options controlling ingestion, clustering and assembly.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Vertical bucket size for the quantized clustering strategy, in page
    /// pixels. One bucket is one expected line height.
    pub bucket_size: f32,

    /// Divisor applied to the page's average fragment height to obtain the
    /// adaptive line-break threshold.
    pub threshold_divisor: f32,

    /// Minimum fragment text length (exclusive) for a fragment to
    /// contribute to assembled output on the structured path. Suppresses
    /// spurious marginal detections.
    pub min_fragment_len: usize,

    /// Whether to restore original spacing on the glyph path by aligning
    /// against the page's spaced reference text.
    pub restore_spacing: bool,

    /// Whether to process a volume's pages in parallel.
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quantization bucket size.
    pub fn with_bucket_size(mut self, bucket_size: f32) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    /// Set the adaptive threshold divisor.
    pub fn with_threshold_divisor(mut self, divisor: f32) -> Self {
        self.threshold_divisor = divisor;
        self
    }

    /// Set the minimum fragment length for assembly filtering.
    pub fn with_min_fragment_len(mut self, len: usize) -> Self {
        self.min_fragment_len = len;
        self
    }

    /// Keep every fragment regardless of length.
    pub fn keep_short_fragments(mut self) -> Self {
        self.min_fragment_len = 0;
        self
    }

    /// Disable space restoration on the glyph path.
    pub fn without_spacing(mut self) -> Self {
        self.restore_spacing = false;
        self
    }

    /// Disable parallel page processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            bucket_size: 70.0,
            threshold_divisor: 10.0,
            min_fragment_len: 5,
            restore_spacing: true,
            parallel: true,
        }
    }
}
