use pagesift_core::{BackendError, BackendKind, ExtractionBackend, PageText};
use pdfium_render::prelude::*;

/// PDFium-based implementation of [`ExtractionBackend`].
///
/// Binds the PDFium shared library at call time: first `./libpdfium` next to
/// the binary, then the system library path. A missing library is reported as
/// [`BackendError::Unavailable`] so the dispatcher moves on to the next
/// backend instead of failing the request.
pub struct PdfiumBackend;

impl PdfiumBackend {
    pub fn new() -> Self {
        Self
    }

    fn bind() -> Result<Pdfium, BackendError> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| BackendError::Unavailable(format!("pdfium library not found: {e:?}")))?;
        Ok(Pdfium::new(bindings))
    }
}

impl Default for PdfiumBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionBackend for PdfiumBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Pdfium
    }

    fn extract_pages(&self, data: &[u8]) -> Result<Vec<PageText>, BackendError> {
        let pdfium = Self::bind()?;
        let document = pdfium
            .load_pdf_from_byte_slice(data, None)
            .map_err(|e| BackendError::Open(format!("{e:?}")))?;

        let mut pages = Vec::new();
        for (index, page) in document.pages().iter().enumerate() {
            let text = page
                .text()
                .map_err(|e| BackendError::Extraction(format!("{e:?}")))?
                .all();
            if let Some(page_text) = PageText::from_raw(index as u32 + 1, &text) {
                pages.push(page_text);
            }
        }
        Ok(pages)
    }
}
