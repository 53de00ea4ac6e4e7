pub mod backend;
pub mod dispatcher;
pub mod normalize;

pub use backend::{BackendError, BackendKind, ExtractionBackend};
pub use dispatcher::Dispatcher;
pub use normalize::normalize;

/// Text extracted from a single page.
///
/// `page_number` is the 1-based physical position of the page in the source
/// document as seen by the backend that produced it. Pages without
/// extractable text are never represented; see [`PageText::from_raw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub page_number: u32,
    pub content: String,
}

impl PageText {
    /// Build a page entry from raw backend output.
    ///
    /// Returns `None` when the raw text trims to nothing, so blank pages are
    /// skipped rather than emitted as empty entries. Non-blank text is run
    /// through [`normalize`].
    pub fn from_raw(page_number: u32, raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self {
            page_number,
            content: normalize(raw),
        })
    }
}

/// Result of running the extraction dispatcher over one document.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub pages: Vec<PageText>,
    pub backend: BackendKind,
}
