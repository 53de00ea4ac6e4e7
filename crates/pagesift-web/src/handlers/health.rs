use axum::Json;
use serde_json::{Value, json};

/// Liveness check; answers as long as the process is reachable.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "pagesift is running",
    }))
}
