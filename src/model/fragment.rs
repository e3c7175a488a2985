//! Fragment-level types.

use serde::{Deserialize, Serialize};

/// A point on the page image, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One OCR-recognized unit of text with its position on the page.
///
/// A fragment is a whole engine-declared line on the structured-XML path,
/// or a single token/glyph on the glyph-level path. Geometry is reduced to
/// the three values the clustering stages need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    /// Recognized text; `None` when the engine declared the geometry but
    /// produced no transcription.
    pub text: Option<String>,

    /// Vertical placement: the mean baseline y on the structured path, or
    /// the bounding-box vertical midpoint on the glyph path.
    pub vertical_position: f32,

    /// X coordinate of the fragment's leftmost point.
    pub horizontal_start: f32,

    /// Bounding-box height. Only meaningful on the glyph path, where it
    /// drives the adaptive clustering threshold; zero on the structured path.
    pub height: f32,
}

impl Fragment {
    /// Create a new fragment.
    pub fn new(
        text: Option<String>,
        vertical_position: f32,
        horizontal_start: f32,
        height: f32,
    ) -> Self {
        Self {
            text,
            vertical_position,
            horizontal_start,
            height,
        }
    }

    /// The fragment's text, or the empty string when none was recognized.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Number of characters in the recognized text.
    pub fn text_len(&self) -> usize {
        self.text_or_empty().chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_text_or_empty() {
        let frag = Fragment::new(Some("བཀྲ་ཤིས".to_string()), 100.0, 12.0, 20.0);
        assert_eq!(frag.text_or_empty(), "བཀྲ་ཤིས");

        let silent = Fragment::new(None, 100.0, 12.0, 0.0);
        assert_eq!(silent.text_or_empty(), "");
        assert_eq!(silent.text_len(), 0);
    }

    #[test]
    fn test_text_len_counts_chars_not_bytes() {
        let frag = Fragment::new(Some("ཀཁག".to_string()), 0.0, 0.0, 0.0);
        assert_eq!(frag.text_len(), 3);
    }
}
