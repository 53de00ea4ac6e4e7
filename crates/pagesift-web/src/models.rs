use serde::Serialize;

use pagesift_core::{BackendKind, ExtractionResult, PageText};

/// One page of extracted text as returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct PageJson {
    pub page_number: u32,
    pub content: String,
}

impl From<PageText> for PageJson {
    fn from(page: PageText) -> Self {
        Self {
            page_number: page.page_number,
            content: page.content,
        }
    }
}

/// Response body for a successful extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResponse {
    pub success: bool,
    pub message: String,
    pub total_pages: usize,
    pub extraction_method: String,
    pub pages: Vec<PageJson>,
}

impl ExtractionResponse {
    /// Envelope for the fallback route, tagged with the winning backend.
    pub fn from_result(result: ExtractionResult) -> Self {
        let pages: Vec<PageJson> = result.pages.into_iter().map(PageJson::from).collect();
        Self {
            success: true,
            message: format!("successfully extracted text from {} pages", pages.len()),
            total_pages: pages.len(),
            extraction_method: result.backend.to_string(),
            pages,
        }
    }

    /// Envelope for the pinned-method route.
    pub fn from_pages(method: BackendKind, pages: Vec<PageText>) -> Self {
        let pages: Vec<PageJson> = pages.into_iter().map(PageJson::from).collect();
        Self {
            success: true,
            message: format!(
                "successfully extracted text from {} pages using {}",
                pages.len(),
                method
            ),
            total_pages: pages.len(),
            extraction_method: method.to_string(),
            pages,
        }
    }
}

/// Error envelope shared by all failure responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error_type: &'static str,
}
