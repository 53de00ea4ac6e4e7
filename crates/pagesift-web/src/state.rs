use std::sync::Arc;

use pagesift_core::{Dispatcher, ExtractionBackend};
use pagesift_pdf_extract::PdfExtractBackend;
use pagesift_pdfium::PdfiumBackend;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Build the state with every backend compiled into this binary.
    pub fn new() -> Self {
        let mut backends: Vec<Box<dyn ExtractionBackend>> = vec![Box::new(PdfiumBackend::new())];
        #[cfg(feature = "mupdf")]
        backends.push(Box::new(pagesift_mupdf::MupdfBackend::new()));
        backends.push(Box::new(PdfExtractBackend::new()));

        Self::with_backends(backends)
    }

    /// State over an explicit backend set; tests use this to inject stubs.
    pub fn with_backends(backends: Vec<Box<dyn ExtractionBackend>>) -> Self {
        Self {
            dispatcher: Arc::new(Dispatcher::new(backends)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
