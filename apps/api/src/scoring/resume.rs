use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::{ExtractedFields, ResumeSubScores, ScoreReport};

const RECOMMENDATION_THRESHOLD: f64 = 50.0;
const COMPLETENESS_THRESHOLD: f64 = 80.0;

static YEARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\s*(?:years?|yrs?)").expect("valid years regex"));
static CGPA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"cgpa[:\s]*([0-9]\.[0-9]{1,2})").expect("valid cgpa regex"));
static PERCENTAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"percentage[:\s]*([0-9]{1,2}\.[0-9]{1,2})|([0-9]{1,2})%")
        .expect("valid percentage regex")
});

/// (keywords, bonus), highest tier first. Only the first tier that matches counts.
const DEGREE_TIERS: &[(&[&str], f64)] = &[
    (&["phd", "doctorate"], 20.0),
    (&["master", "mba", "m.tech"], 15.0),
    (&["bachelor", "b.tech", "degree"], 10.0),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub technical: f64,
    pub experience: f64,
    pub education: f64,
    pub completeness: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            technical: 0.4,
            experience: 0.3,
            education: 0.2,
            completeness: 0.1,
        }
    }
}

/// 10 points per recognised skill, saturating at 100.
pub fn score_technical(skills: &[String]) -> f64 {
    (skills.len().saturating_mul(10)).min(100) as f64
}

/// Sums every "N years" / "N yrs" mention, 10 points per year, capped at 100.
pub fn score_experience(text: &str) -> f64 {
    let text_lower = text.to_lowercase();
    let total_years = YEARS_RE
        .captures_iter(&text_lower)
        .map(|caps| caps[1].parse::<u64>().unwrap_or(u64::MAX))
        .fold(0u64, u64::saturating_add);
    total_years.saturating_mul(10).min(100) as f64
}

/// Base 30 (20 with no entries) plus grade, degree-level and detail bonuses.
pub fn score_education(education: &[String]) -> f64 {
    if education.is_empty() {
        return 20.0;
    }

    let education_text = education.join(" ").to_lowercase();
    let mut score = 30.0;

    let cgpa = CGPA_RE
        .captures(&education_text)
        .and_then(|caps| caps[1].parse::<f64>().ok());
    // Percentages only count when no CGPA was found.
    let percentage = if cgpa.is_none() {
        PERCENTAGE_RE.captures(&education_text).and_then(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .and_then(|m| m.as_str().parse::<f64>().ok())
        })
    } else {
        None
    };

    if let Some(value) = cgpa {
        score += cgpa_bonus(value);
    } else if let Some(value) = percentage {
        score += percentage_bonus(value);
    }

    if let Some((_, bonus)) = DEGREE_TIERS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| education_text.contains(k)))
    {
        score += bonus;
    }

    let grade_found = cgpa.is_some() || percentage.is_some();
    if grade_found && education.len() > 1 {
        score += 10.0;
    }

    f64::min(score, 100.0)
}

fn cgpa_bonus(cgpa: f64) -> f64 {
    match cgpa {
        v if v >= 9.0 => 25.0,
        v if v >= 8.0 => 20.0,
        v if v >= 7.0 => 15.0,
        _ => 10.0,
    }
}

fn percentage_bonus(percentage: f64) -> f64 {
    match percentage {
        v if v >= 85.0 => 25.0,
        v if v >= 75.0 => 20.0,
        v if v >= 65.0 => 15.0,
        _ => 10.0,
    }
}

/// Share of {email, phone, skills, education} that are present, as a percentage.
pub fn score_completeness(fields: &ExtractedFields) -> f64 {
    let present = [
        fields.has_email(),
        fields.has_phone(),
        !fields.skills.is_empty(),
        !fields.education.is_empty(),
    ];
    let count = present.iter().filter(|p| **p).count();
    count as f64 / present.len() as f64 * 100.0
}

/// Weighted sum of the sub-scores, rounded to one decimal place.
pub fn compute_combined_score(scores: &ResumeSubScores, weights: &ScoringWeights) -> f64 {
    let raw = scores.technical_score * weights.technical
        + scores.experience_score * weights.experience
        + scores.education_score * weights.education
        + scores.completeness_score * weights.completeness;
    (raw * 10.0).round() / 10.0
}

pub fn score_resume(fields: &ExtractedFields) -> ScoreReport {
    score_resume_with(fields, &ScoringWeights::default())
}

pub fn score_resume_with(fields: &ExtractedFields, weights: &ScoringWeights) -> ScoreReport {
    let detailed_scores = ResumeSubScores {
        technical_score: score_technical(&fields.skills),
        experience_score: score_experience(&fields.text),
        education_score: score_education(&fields.education),
        completeness_score: score_completeness(fields),
    };

    ScoreReport {
        overall_score: compute_combined_score(&detailed_scores, weights),
        recommendations: build_recommendations(&detailed_scores),
        detailed_scores,
    }
}

fn build_recommendations(scores: &ResumeSubScores) -> Vec<String> {
    let checks = [
        (
            scores.technical_score < RECOMMENDATION_THRESHOLD,
            "Add more technical skills relevant to your field",
        ),
        (
            scores.experience_score < RECOMMENDATION_THRESHOLD,
            "Highlight more work experience and achievements",
        ),
        (
            scores.education_score < RECOMMENDATION_THRESHOLD,
            "Include educational background and certifications",
        ),
        (
            scores.completeness_score < COMPLETENESS_THRESHOLD,
            "Complete missing contact information",
        ),
    ];

    checks
        .iter()
        .filter(|(below, _)| *below)
        .map(|(_, message)| message.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::fields::extract_fields;
    use crate::models::SourceKind;
    use crate::test_fixtures::SAMPLE_RESUME;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn fields_with(skills: &[&str], education: &[&str], text: &str) -> ExtractedFields {
        ExtractedFields {
            text: text.to_string(),
            email: None,
            phone: None,
            skills: strings(skills),
            education: strings(education),
            kind: SourceKind::Resume,
        }
    }

    #[test]
    fn test_technical_zero_without_skills() {
        assert_eq!(score_technical(&[]), 0.0);
    }

    #[test]
    fn test_technical_monotone_and_saturating() {
        let mut previous = 0.0;
        for n in 0..15 {
            let skills: Vec<String> = (0..n).map(|i| format!("skill-{i}")).collect();
            let score = score_technical(&skills);
            assert!(score >= previous);
            previous = score;
        }
        let ten: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        assert_eq!(score_technical(&ten), 100.0);
    }

    #[test]
    fn test_experience_zero_without_year_mentions() {
        assert_eq!(score_experience("Led a team of five engineers since 2019"), 0.0);
    }

    #[test]
    fn test_experience_sums_all_mentions() {
        assert_eq!(score_experience("3 Years at Acme, 2yrs at Initech"), 50.0);
    }

    #[test]
    fn test_experience_capped_at_100() {
        assert_eq!(score_experience("15 years of experience"), 100.0);
    }

    #[test]
    fn test_experience_survives_absurd_numbers() {
        assert_eq!(score_experience("99999999999999999999999 years"), 100.0);
    }

    #[test]
    fn test_education_empty_is_exactly_20() {
        assert_eq!(score_education(&[]), 20.0);
    }

    #[test]
    fn test_education_single_cgpa_entry() {
        // 30 base + 25 for CGPA >= 9; no multi-entry bonus with one entry
        assert_eq!(score_education(&strings(&["CGPA: 9.2"])), 55.0);
    }

    #[test]
    fn test_education_repeated_grades_earn_detail_bonus() {
        use crate::extraction::fields::extract_education;

        let cgpa = extract_education("B.Tech CGPA: 8.5\nM.Tech CGPA: 8.5");
        assert_eq!(score_education(&cgpa), 60.0);
        let percentage = extract_education("Class X: 90%\nClass XII: 90%");
        assert_eq!(score_education(&percentage), 65.0);
    }

    #[test]
    fn test_education_cgpa_tiers() {
        assert_eq!(score_education(&strings(&["CGPA: 8.0"])), 50.0);
        assert_eq!(score_education(&strings(&["CGPA: 7.5"])), 45.0);
        assert_eq!(score_education(&strings(&["CGPA: 6.9"])), 40.0);
    }

    #[test]
    fn test_education_percentage_used_only_without_cgpa() {
        assert_eq!(score_education(&strings(&["Percentage: 86%"])), 55.0);
        // CGPA 7.1 (+15) wins over the 95% entry; bonus for grade + two entries
        assert_eq!(
            score_education(&strings(&["CGPA: 7.1", "Percentage: 95%"])),
            55.0
        );
    }

    #[test]
    fn test_education_first_percentage_only() {
        let entries = strings(&["Percentage: 66%", "Percentage: 90%"]);
        // 30 + 15 (66%) + 10 multi-entry bonus
        assert_eq!(score_education(&entries), 55.0);
    }

    #[test]
    fn test_education_highest_degree_tier_only() {
        let entries = strings(&["PhD in Physics, MIT 2020", "Master of Science 2015"]);
        assert_eq!(score_education(&entries), 50.0);
    }

    #[test]
    fn test_education_sentinel_scores_base() {
        assert_eq!(
            score_education(&strings(&["Education details not clearly specified"])),
            30.0
        );
    }

    #[test]
    fn test_education_capped_at_100() {
        let entries = strings(&[
            "CGPA: 9.8",
            "PhD, Stanford University 2020",
            "Master degree 2016",
        ]);
        // 30 + 25 + 20 + 10 = 85
        assert_eq!(score_education(&entries), 85.0);
        for entries in [vec![], strings(&["x"]), entries] {
            let s = score_education(&entries);
            assert!((0.0..=100.0).contains(&s));
        }
    }

    #[test]
    fn test_completeness_counts_present_fields() {
        let mut fields = fields_with(&["Python"], &[], "");
        assert_eq!(score_completeness(&fields), 25.0);
        fields.email = Some("a@b.co".to_string());
        fields.phone = Some(String::new());
        assert_eq!(score_completeness(&fields), 50.0);
    }

    #[test]
    fn test_recommendations_in_check_order() {
        let report = score_resume(&fields_with(&[], &[], ""));
        assert_eq!(
            report.recommendations,
            vec![
                "Add more technical skills relevant to your field",
                "Highlight more work experience and achievements",
                "Include educational background and certifications",
                "Complete missing contact information",
            ]
        );
    }

    #[test]
    fn test_no_recommendations_at_threshold() {
        let scores = ResumeSubScores {
            technical_score: 50.0,
            experience_score: 50.0,
            education_score: 50.0,
            completeness_score: 80.0,
        };
        assert!(build_recommendations(&scores).is_empty());
    }

    #[test]
    fn test_detailed_scores_reproduce_overall() {
        let report = score_resume(&extract_fields(SAMPLE_RESUME.to_string()));
        let recombined = compute_combined_score(&report.detailed_scores, &ScoringWeights::default());
        assert_eq!(recombined, report.overall_score);
    }

    #[test]
    fn test_sample_resume_scores() {
        let report = score_resume(&extract_fields(SAMPLE_RESUME.to_string()));
        assert_eq!(report.detailed_scores.technical_score, 70.0);
        assert_eq!(report.detailed_scores.experience_score, 60.0);
        assert_eq!(report.detailed_scores.education_score, 70.0);
        assert_eq!(report.detailed_scores.completeness_score, 100.0);
        assert_eq!(report.overall_score, 70.0);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_combined_score_rounds_to_one_decimal() {
        let scores = ResumeSubScores {
            technical_score: 10.0,
            experience_score: 0.0,
            education_score: 20.0,
            completeness_score: 25.0,
        };
        // 4.0 + 0 + 4.0 + 2.5
        assert_eq!(compute_combined_score(&scores, &ScoringWeights::default()), 10.5);
    }
}
