use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::SourceKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub name: String,
    pub skill: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub content: String,
    pub date: NaiveDate,
}

/// Facts about a professional profile, as delivered by a `ProfileFactSource`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileFacts {
    pub profile_id: Option<String>,
    pub is_custom_url: bool,
    pub certificates: Vec<Certificate>,
    pub posts: Vec<Post>,
    pub connections: u32,
    pub profile_completeness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSubScores {
    pub certificates_and_skills: f64,
    pub activity_and_engagement: f64,
    pub professional_networking: f64,
    pub profile_completeness: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificatesSummary {
    pub total_certificates: usize,
    pub recent_certificates: Vec<Certificate>,
    pub trending_skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementLevel {
    High,
    Medium,
    Low,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentQuality {
    Professional,
    Moderate,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub post_frequency: usize,
    pub engagement_level: EngagementLevel,
    pub content_quality: ContentQuality,
}

/// Profile analysis. Shaped like `ScoreReport` plus certificate and activity
/// detail; `error` is only set on the fallback report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReport {
    pub overall_score: f64,
    pub detailed_scores: ProfileSubScores,
    pub certificates_analysis: CertificatesSummary,
    pub activity_analysis: ActivitySummary,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `parsed_data` of a profile analysis record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub profile_url: String,
    pub certificates: CertificatesSummary,
    pub activity: ActivitySummary,
    #[serde(rename = "type")]
    pub kind: SourceKind,
}

impl ProfileSummary {
    pub fn from_report(profile_url: &str, report: &ProfileReport) -> Self {
        Self {
            profile_url: profile_url.to_string(),
            certificates: report.certificates_analysis.clone(),
            activity: report.activity_analysis.clone(),
            kind: SourceKind::LinkedinUrl,
        }
    }
}
