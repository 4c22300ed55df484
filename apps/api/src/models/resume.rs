use serde::{Deserialize, Serialize};

use crate::models::SourceKind;

/// Structured facts pulled out of a resume's plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub text: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Vocabulary order, each skill at most once.
    pub skills: Vec<String>,
    /// At most five entries; never empty once produced by the extractor.
    pub education: Vec<String>,
    #[serde(rename = "type")]
    pub kind: SourceKind,
}

impl ExtractedFields {
    pub fn has_email(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.is_empty())
    }

    pub fn has_phone(&self) -> bool {
        self.phone.as_deref().is_some_and(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResumeSubScores {
    pub technical_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub completeness_score: f64,
}

/// Weighted resume score. Every field is derived from `ExtractedFields` alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub overall_score: f64,
    pub detailed_scores: ResumeSubScores,
    pub recommendations: Vec<String>,
}
