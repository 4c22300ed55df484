use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "resume-analyzer-api";

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": SERVICE_NAME
    }))
}

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Resume Analyzer API is running",
        "endpoints": [
            "/api/upload-resume",
            "/api/analyze-linkedin-url",
            "/api/analyses"
        ]
    }))
}

/// GET /api
pub async fn api_info_handler() -> Json<Value> {
    Json(json!({
        "message": "Resume Analyzer API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
