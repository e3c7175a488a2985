//! Page-level types.

use super::Line;
use serde::{Deserialize, Serialize};

/// A single page: ordered lines plus the page identifier (filename stem).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page identifier, typically the input file's stem.
    pub id: String,

    /// Lines in top-to-bottom reading order.
    pub lines: Vec<Line>,
}

impl Page {
    /// Create a new page.
    pub fn new(id: impl Into<String>, lines: Vec<Line>) -> Self {
        Self {
            id: id.into(),
            lines,
        }
    }

    /// Create an empty page.
    pub fn empty(id: impl Into<String>) -> Self {
        Self::new(id, Vec::new())
    }

    /// Assemble the page's plain text: one string per line, joined with
    /// newlines, applying the minimum-length fragment filter.
    ///
    /// A line whose every fragment is filtered out still occupies its line
    /// slot, so page geometry stays auditable in the output.
    pub fn text(&self, min_fragment_len: usize) -> String {
        self.lines
            .iter()
            .map(|line| line.text(min_fragment_len))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the page has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total number of fragments across all lines.
    pub fn fragment_count(&self) -> usize {
        self.lines.iter().map(|l| l.fragment_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Fragment;

    fn line_of(text: &str, indicator: f32) -> Line {
        Line::new(
            Some(indicator),
            vec![Fragment::new(Some(text.to_string()), indicator, 0.0, 0.0)],
        )
    }

    #[test]
    fn test_page_text_joins_lines() {
        let page = Page::new(
            "0001",
            vec![line_of("first line", 0.0), line_of("second line", 70.0)],
        );
        assert_eq!(page.text(5), "first line\nsecond line");
        assert_eq!(page.line_count(), 2);
    }

    #[test]
    fn test_empty_page() {
        let page = Page::empty("0002");
        assert!(page.is_empty());
        assert_eq!(page.text(5), "");
        assert_eq!(page.fragment_count(), 0);
    }

    #[test]
    fn test_filtered_line_keeps_its_slot() {
        let page = Page::new(
            "0003",
            vec![line_of("ab", 0.0), line_of("long enough", 70.0)],
        );
        assert_eq!(page.text(5), "\nlong enough");
    }
}
