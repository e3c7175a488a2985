//! Data model for reading-order reconstruction.
//!
//! This module defines the intermediate representation that bridges engine
//! output ingestion and text assembly: fragments cluster into lines, lines
//! form pages, and page results aggregate into a volume.

mod fragment;
mod line;
mod page;
mod volume;

pub use fragment::{Fragment, Point};
pub use line::Line;
pub use page::Page;
pub use volume::{PageResult, PageStatus, Volume, MALFORMED_PAGE_MARKER};
