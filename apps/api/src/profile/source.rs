//! Profile fact sources: where `ProfileFacts` come from.
//!
//! Default: `SimulatedProfileSource`. Authorized access to profile data is not
//! available, so it fabricates a fixed fact set and only derives the id fields
//! from the URL. A real fetcher implements `ProfileFactSource` and is swapped
//! in through `AppState` without touching the scoring engine.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::AnalysisError;
use crate::models::profile::{Certificate, Post, ProfileFacts};
use crate::profile::url::parse_profile_url;

const SIMULATED_CONNECTIONS: u32 = 350;
const SIMULATED_COMPLETENESS: f64 = 20.0;

const SIMULATED_CERTIFICATES: &[(&str, &str, (i32, u32, u32))] = &[
    ("AWS Cloud Practitioner", "Cloud Computing", (2024, 8, 15)),
    ("Google Analytics Certified", "Digital Marketing", (2024, 6, 20)),
    ("Python for Data Science", "Data Science", (2024, 5, 10)),
];

const SIMULATED_POSTS: &[(&str, (i32, u32, u32))] = &[
    (
        "Excited to share my latest project on machine learning",
        (2024, 9, 1),
    ),
    (
        "Just completed AWS certification, learning never stops!",
        (2024, 8, 28),
    ),
    (
        "Great networking event today, met amazing professionals",
        (2024, 8, 25),
    ),
];

/// Carried in `AppState` as `Arc<dyn ProfileFactSource>`.
#[async_trait]
pub trait ProfileFactSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<ProfileFacts, AnalysisError>;

    /// Backend label for logs.
    fn name(&self) -> &'static str;
}

pub struct SimulatedProfileSource;

#[async_trait]
impl ProfileFactSource for SimulatedProfileSource {
    async fn fetch(&self, url: &str) -> Result<ProfileFacts, AnalysisError> {
        let parsed = parse_profile_url(url)?;

        Ok(ProfileFacts {
            profile_id: Some(parsed.profile_id),
            is_custom_url: parsed.is_custom_url,
            certificates: SIMULATED_CERTIFICATES
                .iter()
                .filter_map(|(name, skill, (y, m, d))| {
                    Some(Certificate {
                        name: name.to_string(),
                        skill: skill.to_string(),
                        date: NaiveDate::from_ymd_opt(*y, *m, *d)?,
                    })
                })
                .collect(),
            posts: SIMULATED_POSTS
                .iter()
                .filter_map(|(content, (y, m, d))| {
                    Some(Post {
                        content: content.to_string(),
                        date: NaiveDate::from_ymd_opt(*y, *m, *d)?,
                    })
                })
                .collect(),
            connections: SIMULATED_CONNECTIONS,
            profile_completeness: SIMULATED_COMPLETENESS,
        })
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_facts_are_fixed() {
        let facts = SimulatedProfileSource
            .fetch("https://www.linkedin.com/in/jane-doe")
            .await
            .unwrap();
        assert_eq!(facts.profile_id.as_deref(), Some("jane-doe"));
        assert!(facts.is_custom_url);
        assert_eq!(facts.certificates.len(), 3);
        assert_eq!(facts.certificates[0].skill, "Cloud Computing");
        assert_eq!(
            facts.certificates[0].date,
            NaiveDate::from_ymd_opt(2024, 8, 15).unwrap()
        );
        assert_eq!(facts.posts.len(), 3);
        assert_eq!(facts.connections, 350);
        assert_eq!(facts.profile_completeness, 20.0);
    }

    #[tokio::test]
    async fn test_only_id_fields_vary_by_url() {
        let a = SimulatedProfileSource
            .fetch("https://linkedin.com/in/jane-doe")
            .await
            .unwrap();
        let b = SimulatedProfileSource
            .fetch("https://linkedin.com/in/ACoAAxyz")
            .await
            .unwrap();
        assert!(!b.is_custom_url);
        assert_eq!(a.certificates, b.certificates);
        assert_eq!(a.posts, b.posts);
    }

    #[tokio::test]
    async fn test_invalid_url_propagates() {
        let err = SimulatedProfileSource
            .fetch("https://example.com/in/jane")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidProfileUrl(_)));
    }
}
