use axum::extract::Multipart;

use crate::error::ApiError;

/// An uploaded PDF with its multipart metadata.
pub struct UploadedPdf {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Read the `file` field of a multipart upload.
///
/// A filename without a `.pdf` extension is a client error. Everything that
/// goes wrong while reading the stream itself (malformed multipart, missing
/// field) maps to the internal error path.
pub async fn read_pdf_upload(mut multipart: Multipart) -> Result<UploadedPdf, ApiError> {
    let mut file: Option<UploadedPdf> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Internal(format!("failed to read form field: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                if !filename.to_lowercase().ends_with(".pdf") {
                    return Err(ApiError::UnsupportedFile);
                }
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Internal(format!("failed to read file data: {e}")))?
                    .to_vec();
                file = Some(UploadedPdf { filename, data });
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    file.ok_or_else(|| ApiError::Internal("no file field in upload".to_string()))
}
