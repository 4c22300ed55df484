use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::errors::AnalysisError;
use crate::extraction::fields::extract_fields;
use crate::extraction::text::RawDocument;
use crate::models::profile::ProfileReport;
use crate::models::resume::{ExtractedFields, ScoreReport};
use crate::profile::source::ProfileFactSource;
use crate::scoring::profile::{fallback_report, score_profile};
use crate::scoring::resume::score_resume;

/// Document path: bytes → text → fields → score. Blocking; run it off the
/// async executor.
pub fn analyze_resume_document(
    document: &RawDocument,
) -> Result<(ExtractedFields, ScoreReport), AnalysisError> {
    let text = document.extract_text()?;
    let fields = extract_fields(text);
    let report = score_resume(&fields);

    debug!(
        format = %document.format,
        skills = fields.skills.len(),
        education = fields.education.len(),
        overall_score = report.overall_score,
        "Resume analyzed"
    );
    Ok((fields, report))
}

/// Profile path with errors surfaced.
pub async fn analyze_profile(
    source: &dyn ProfileFactSource,
    url: &str,
    today: NaiveDate,
) -> Result<ProfileReport, AnalysisError> {
    let facts = source.fetch(url).await?;
    Ok(score_profile(&facts, today))
}

/// Profile path as served to users: any failure becomes the fixed fallback report.
pub async fn analyze_profile_or_fallback(
    source: &dyn ProfileFactSource,
    url: &str,
    today: NaiveDate,
) -> ProfileReport {
    match analyze_profile(source, url, today).await {
        Ok(report) => report,
        Err(e) => {
            warn!(source = source.name(), "Profile analysis failed, using fallback: {e}");
            fallback_report(&e.to_string())
        }
    }
}
