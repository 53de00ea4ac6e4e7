use axum::Json;
use serde_json::{Value, json};

/// Service metadata. No side effects.
pub async fn index() -> Json<Value> {
    Json(json!({
        "name": "pagesift",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/": "GET - service metadata",
            "/health": "GET - health check",
            "/extract": "POST - extract text from an uploaded PDF",
            "/extract/{method}": "POST - extract with a specific backend (pdfium, mupdf, pdf-extract)",
        },
    }))
}
