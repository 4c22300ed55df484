use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::profile::{ProfileReport, ProfileSummary};
use crate::models::resume::{ExtractedFields, ScoreReport};

/// What a single analysis request produced, before the store assigns it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum AnalysisPayload {
    Resume {
        filename: String,
        parsed_data: ExtractedFields,
        analysis: ScoreReport,
    },
    LinkedinUrl {
        url: String,
        parsed_data: ProfileSummary,
        analysis: ProfileReport,
    },
}

impl AnalysisPayload {
    pub fn overall_score(&self) -> f64 {
        match self {
            AnalysisPayload::Resume { analysis, .. } => analysis.overall_score,
            AnalysisPayload::LinkedinUrl { analysis, .. } => analysis.overall_score,
        }
    }
}

/// Persisted envelope. Created once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: AnalysisPayload,
}

impl AnalysisRecord {
    pub fn new(payload: AnalysisPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            payload,
        }
    }
}
