use std::panic::{self, AssertUnwindSafe};

use pagesift_core::{BackendError, BackendKind, ExtractionBackend, PageText};

/// pdf-extract-based implementation of [`ExtractionBackend`].
///
/// Pure Rust and present in every build; the dispatcher uses it as the
/// terminal fallback. `pdf_extract` can panic on malformed input rather than
/// return an error, so the call is wrapped in [`std::panic::catch_unwind`]
/// and a panic is reported as an extraction failure.
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExtractBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionBackend for PdfExtractBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::PdfExtract
    }

    fn extract_pages(&self, data: &[u8]) -> Result<Vec<PageText>, BackendError> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(data)
        }));
        let raw_pages = match result {
            Ok(Ok(pages)) => pages,
            Ok(Err(e)) => return Err(BackendError::Extraction(e.to_string())),
            Err(_) => {
                return Err(BackendError::Extraction(
                    "extraction panicked (malformed document)".into(),
                ));
            }
        };

        Ok(raw_pages
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| PageText::from_raw(index as u32 + 1, raw))
            .collect())
    }
}
