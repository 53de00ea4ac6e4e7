use std::fmt;

use thiserror::Error;

use crate::PageText;

#[derive(Error, Debug)]
pub enum BackendError {
    /// The extraction capability is not present in this environment
    /// (shared library not found, or the backend not compiled in).
    /// Distinct from a document that simply contains no text.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
}

/// Identifier for one extraction backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    Pdfium,
    Mupdf,
    PdfExtract,
}

impl BackendKind {
    /// Fixed priority order of the fallback chain: layout fidelity first,
    /// speed second, broad compatibility last.
    pub const FALLBACK_ORDER: [BackendKind; 3] = [
        BackendKind::Pdfium,
        BackendKind::Mupdf,
        BackendKind::PdfExtract,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Pdfium => "pdfium",
            BackendKind::Mupdf => "mupdf",
            BackendKind::PdfExtract => "pdf-extract",
        }
    }

    /// Parse a backend name as supplied in a request path. Case-insensitive.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "pdfium" => Some(BackendKind::Pdfium),
            "mupdf" => Some(BackendKind::Mupdf),
            "pdf-extract" | "pdf_extract" | "pdfextract" => Some(BackendKind::PdfExtract),
            _ => None,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for PDF text extraction backends.
///
/// Implementors wrap one third-party extraction library. Every call receives
/// the complete document bytes and is independent of any previous call; an
/// implementation holds no per-document state.
pub trait ExtractionBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Extract per-page text in physical page order, skipping blank pages.
    ///
    /// `Ok` with an empty vector means the backend ran but found no
    /// extractable text anywhere in the document.
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<PageText>, BackendError>;
}
