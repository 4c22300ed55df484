use chrono::{Duration, NaiveDate};

use crate::models::profile::{
    ActivitySummary, Certificate, CertificatesSummary, ContentQuality, EngagementLevel, Post,
    ProfileFacts, ProfileReport, ProfileSubScores,
};

pub const TRENDING_SKILLS: &[&str] = &[
    "AI",
    "Machine Learning",
    "Cloud Computing",
    "Data Science",
    "Cybersecurity",
];

pub const PROFESSIONAL_KEYWORDS: &[&str] = &[
    "project",
    "achievement",
    "learning",
    "certification",
    "industry",
    "innovation",
];

const RECENCY_WINDOW_DAYS: i64 = 180;
const RECENT_CERTIFICATE_POINTS: u32 = 15;
const TRENDING_SKILL_POINTS: u32 = 10;
const CERTIFICATE_CAP: u32 = 30;
const CONTENT_POINTS_PER_POST: u32 = 5;
const CONTENT_CAP: u32 = 25;

const GENERIC_RECOMMENDATIONS: &[&str] = &[
    "Share industry insights and thought leadership content",
    "Engage with others' posts through meaningful comments",
    "Update your profile regularly with new achievements",
    "Join relevant professional groups and participate in discussions",
];

const FALLBACK_RECOMMENDATIONS: &[&str] = &[
    "Unable to analyze profile completely due to privacy settings",
    "Ensure your LinkedIn profile is public for better analysis",
    "Add recent certifications and skills to your profile",
    "Post regular updates about your professional journey",
];

// ============================================================================
// Certificates
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CertificateAnalysis {
    pub total: usize,
    pub recent: Vec<Certificate>,
    pub trending_skills: Vec<String>,
    /// Uncapped running total; the sub-score caps it.
    pub raw_score: u32,
}

impl CertificateAnalysis {
    pub fn sub_score(&self) -> f64 {
        self.raw_score.min(CERTIFICATE_CAP) as f64
    }
}

/// A certificate is recent when dated strictly after `today - 180 days`.
pub fn analyze_certificates(certificates: &[Certificate], today: NaiveDate) -> CertificateAnalysis {
    let cutoff = today - Duration::days(RECENCY_WINDOW_DAYS);
    let mut analysis = CertificateAnalysis {
        total: certificates.len(),
        recent: Vec::new(),
        trending_skills: Vec::new(),
        raw_score: 0,
    };

    for cert in certificates {
        if cert.date > cutoff {
            analysis.recent.push(cert.clone());
            analysis.raw_score += RECENT_CERTIFICATE_POINTS;
        }
        if TRENDING_SKILLS.contains(&cert.skill.as_str()) {
            analysis.trending_skills.push(cert.skill.clone());
            analysis.raw_score += TRENDING_SKILL_POINTS;
        }
    }

    analysis
}

// ============================================================================
// Activity
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityAnalysis {
    pub post_frequency: usize,
    pub engagement_score: u32,
    pub content_quality: u32,
    pub networking_score: u32,
}

impl ActivityAnalysis {
    pub fn engagement_level(&self) -> EngagementLevel {
        match self.engagement_score {
            s if s >= 20 => EngagementLevel::High,
            s if s >= 10 => EngagementLevel::Medium,
            _ => EngagementLevel::Low,
        }
    }

    pub fn content_label(&self) -> ContentQuality {
        if self.content_quality >= 15 {
            ContentQuality::Professional
        } else {
            ContentQuality::Moderate
        }
    }
}

pub fn analyze_activity(posts: &[Post], connections: u32) -> ActivityAnalysis {
    let engagement_score = match posts.len() {
        n if n >= 10 => 25,
        n if n >= 5 => 15,
        n if n >= 1 => 10,
        _ => 0,
    };

    let professional_posts = posts
        .iter()
        .filter(|post| is_professional(&post.content))
        .count() as u32;
    let content_quality = professional_posts
        .saturating_mul(CONTENT_POINTS_PER_POST)
        .min(CONTENT_CAP);

    let networking_score = match connections {
        c if c >= 500 => 25,
        c if c >= 200 => 20,
        c if c >= 100 => 15,
        _ => 10,
    };

    ActivityAnalysis {
        post_frequency: posts.len(),
        engagement_score,
        content_quality,
        networking_score,
    }
}

fn is_professional(content: &str) -> bool {
    let content = content.to_lowercase();
    PROFESSIONAL_KEYWORDS.iter().any(|kw| content.contains(kw))
}

// ============================================================================
// Report
// ============================================================================

/// Scores a fact set. `today` anchors certificate recency, nothing else is
/// time-dependent.
pub fn score_profile(facts: &ProfileFacts, today: NaiveDate) -> ProfileReport {
    let certificates = analyze_certificates(&facts.certificates, today);
    let activity = analyze_activity(&facts.posts, facts.connections);

    let detailed_scores = ProfileSubScores {
        certificates_and_skills: certificates.sub_score(),
        activity_and_engagement: (activity.engagement_score + activity.content_quality) as f64,
        professional_networking: activity.networking_score as f64,
        profile_completeness: facts.profile_completeness,
    };
    let overall_score = (detailed_scores.certificates_and_skills
        + detailed_scores.activity_and_engagement
        + detailed_scores.professional_networking
        + detailed_scores.profile_completeness)
        .min(100.0);

    let recommendations = build_recommendations(&certificates, &activity, facts.is_custom_url);

    ProfileReport {
        overall_score,
        detailed_scores,
        certificates_analysis: CertificatesSummary {
            total_certificates: certificates.total,
            recent_certificates: certificates.recent,
            trending_skills: certificates.trending_skills,
        },
        activity_analysis: ActivitySummary {
            post_frequency: activity.post_frequency,
            engagement_level: activity.engagement_level(),
            content_quality: activity.content_label(),
        },
        recommendations,
        error: None,
    }
}

fn build_recommendations(
    certificates: &CertificateAnalysis,
    activity: &ActivityAnalysis,
    is_custom_url: bool,
) -> Vec<String> {
    let checks = [
        (
            certificates.total < 3,
            "Add more professional certifications to showcase your expertise",
        ),
        (
            certificates.recent.is_empty(),
            "Obtain recent certifications to show continuous learning",
        ),
        (
            certificates.trending_skills.is_empty(),
            "Consider certifications in trending skills like AI, Cloud Computing, or Data Science",
        ),
        (
            activity.post_frequency < 5,
            "Increase your posting frequency to improve visibility and engagement",
        ),
        (
            activity.content_quality < 15,
            "Share more professional content about your projects and achievements",
        ),
        (
            activity.networking_score < 20,
            "Expand your professional network by connecting with industry peers",
        ),
        (
            !is_custom_url,
            "Create a custom LinkedIn URL for better professional branding",
        ),
    ];

    checks
        .iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, message)| *message)
        .chain(GENERIC_RECOMMENDATIONS.iter().copied())
        .map(String::from)
        .collect()
}

/// Fixed report returned when a profile cannot be analyzed at all.
pub fn fallback_report(error: &str) -> ProfileReport {
    ProfileReport {
        overall_score: 45.0,
        detailed_scores: ProfileSubScores {
            certificates_and_skills: 10.0,
            activity_and_engagement: 15.0,
            professional_networking: 10.0,
            profile_completeness: 10.0,
        },
        certificates_analysis: CertificatesSummary::default(),
        activity_analysis: ActivitySummary {
            post_frequency: 0,
            engagement_level: EngagementLevel::Unknown,
            content_quality: ContentQuality::Unknown,
        },
        recommendations: FALLBACK_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
        error: Some(error.to_string()),
    }
}
