use axum::{
    extract::{rejection::JsonRejection, Multipart, Path, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::pipeline::{analyze_profile_or_fallback, analyze_resume_document};
use crate::errors::AppError;
use crate::extraction::text::{DocumentFormat, RawDocument};
use crate::models::analysis::{AnalysisPayload, AnalysisRecord};
use crate::models::profile::ProfileSummary;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

#[derive(Deserialize)]
pub struct ProfileUrlRequest {
    #[serde(default)]
    pub url: String,
}

/// POST /api/upload-resume
/// Multipart upload; the `file` field must be a .pdf or .docx.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisRecord>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((filename, bytes));
        break;
    }

    let (raw_filename, bytes) =
        upload.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;
    let format = DocumentFormat::from_filename(&raw_filename)?;
    let filename = sanitize_filename(&raw_filename, format);

    let document = RawDocument::new(bytes, format);
    let (parsed_data, analysis) =
        tokio::task::spawn_blocking(move || analyze_resume_document(&document))
            .await
            .map_err(|e| AppError::Internal(e.into()))??;

    let record = state
        .store
        .save(AnalysisPayload::Resume {
            filename,
            parsed_data,
            analysis,
        })
        .await?;

    info!(
        analysis_id = %record.id,
        overall_score = record.payload.overall_score(),
        "Resume analysis stored"
    );
    Ok(Json(record))
}

/// POST /api/analyze-linkedin-url
/// Always answers with a report; analysis failures yield the fallback report.
pub async fn handle_analyze_profile_url(
    State(state): State<AppState>,
    body: Result<Json<ProfileUrlRequest>, JsonRejection>,
) -> Result<Json<AnalysisRecord>, AppError> {
    let Json(req) = body?;
    let url = req.url.trim();
    if url.is_empty() {
        return Err(AppError::Validation("LinkedIn URL is required".to_string()));
    }

    let today = Utc::now().date_naive();
    let analysis = analyze_profile_or_fallback(state.profile_source.as_ref(), url, today).await;

    let fallback = analysis.error.is_some();
    let record = state
        .store
        .save(AnalysisPayload::LinkedinUrl {
            url: url.to_string(),
            parsed_data: ProfileSummary::from_report(url, &analysis),
            analysis,
        })
        .await?;

    info!(
        analysis_id = %record.id,
        source = state.profile_source.name(),
        overall_score = record.payload.overall_score(),
        fallback,
        "Profile analysis stored"
    );
    Ok(Json(record))
}

/// GET /api/analyses
pub async fn handle_list_analyses(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnalysisRecord>>, AppError> {
    Ok(Json(state.store.list().await?))
}

/// GET /api/analysis/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AnalysisRecord>, AppError> {
    let not_found = || AppError::NotFound("Analysis not found".to_string());
    let id = Uuid::parse_str(&id).map_err(|_| not_found())?;
    state.store.get(id).await?.map(Json).ok_or_else(not_found)
}

/// Basename only, restricted to `[A-Za-z0-9._-]`; falls back to `upload.<ext>`.
fn sanitize_filename(raw: &str, format: DocumentFormat) -> String {
    let basename = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    let cleaned: String = basename
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(*c, '.' | '-' | '_'))
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() || !cleaned.contains('.') {
        format!("upload.{format}")
    } else {
        cleaned.to_string()
    }
}
