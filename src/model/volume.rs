//! Volume-level types and the per-page processing result.

use serde::{Deserialize, Serialize};

/// Outcome of processing one page, exposed instead of a bare log line so
/// batch callers can audit what each page contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    /// The page produced reconstructed text.
    Ok,
    /// The page had zero usable regions or fragments.
    Empty,
    /// The engine response was malformed; a placeholder marker was emitted.
    Malformed,
}

/// Marker line emitted for a page whose engine response was malformed.
pub const MALFORMED_PAGE_MARKER: &str = "[malformed page]";

/// The reconstructed text of one page together with its status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    /// Page identifier (input filename stem).
    pub id: String,

    /// What the page contributed.
    pub status: PageStatus,

    /// Reconstructed page text; empty for `Empty` pages, the placeholder
    /// marker for `Malformed` pages.
    pub text: String,
}

impl PageResult {
    /// A successfully reconstructed page.
    pub fn ok(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: PageStatus::Ok,
            text: text.into(),
        }
    }

    /// A page with no usable content.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: PageStatus::Empty,
            text: String::new(),
        }
    }

    /// A page whose engine response could not be used.
    pub fn malformed(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: PageStatus::Malformed,
            text: MALFORMED_PAGE_MARKER.to_string(),
        }
    }
}

/// A volume: the ordered sequence of page results for one document,
/// the only artifact written to durable storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volume {
    /// Volume identifier.
    pub id: String,

    /// Page results in filename-sort order.
    pub pages: Vec<PageResult>,
}

impl Volume {
    /// Create a new empty volume.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pages: Vec::new(),
        }
    }

    /// Append a page result. Pages must be pushed in filename order.
    pub fn add_page(&mut self, page: PageResult) {
        self.pages.push(page);
    }

    /// Get the number of pages in the volume.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check if the volume has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Aggregate the volume text: the volume header, then per page a
    /// page-identifier header, the page text, and a blank-line separator.
    ///
    /// Empty pages keep their header and separator so page boundaries stay
    /// auditable in the output file.
    pub fn plain_text(&self) -> String {
        let mut content = format!("{}\n\n", self.id);
        for page in &self.pages {
            content.push_str(&page.id);
            content.push('\n');
            content.push_str(&page.text);
            content.push_str("\n\n");
        }
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_aggregation() {
        let mut vol = Volume::new("I2KG212285");
        vol.add_page(PageResult::ok("0001", "line one\nline two"));
        vol.add_page(PageResult::empty("0002"));
        vol.add_page(PageResult::ok("0003", "last"));

        let text = vol.plain_text();
        assert_eq!(
            text,
            "I2KG212285\n\n0001\nline one\nline two\n\n0002\n\n\n0003\nlast\n\n"
        );
    }

    #[test]
    fn test_empty_page_keeps_separator() {
        let mut vol = Volume::new("V1");
        vol.add_page(PageResult::empty("p1"));
        assert!(vol.plain_text().contains("p1\n\n"));
        assert_eq!(vol.page_count(), 1);
    }

    #[test]
    fn test_malformed_page_marker() {
        let page = PageResult::malformed("p9");
        assert_eq!(page.status, PageStatus::Malformed);
        assert_eq!(page.text, MALFORMED_PAGE_MARKER);
    }
}
