pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/api", get(health::api_info_handler))
        .route("/health", get(health::health_handler))
        // Analysis API
        .route(
            "/api/upload-resume",
            post(handlers::handle_upload_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/analyze-linkedin-url",
            post(handlers::handle_analyze_profile_url),
        )
        .route("/api/analyses", get(handlers::handle_list_analyses))
        .route("/api/analysis/:id", get(handlers::handle_get_analysis))
        .with_state(state)
}
