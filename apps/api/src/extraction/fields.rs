//! Plain text → contact info, skills and education entries.
//!
//! A miss is data, not an error: each extractor degrades to `None`, an empty
//! list or the education sentinel.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::patterns::{all_matches, first_match, verbatim, PatternRule};
use crate::models::resume::ExtractedFields;
use crate::models::SourceKind;

pub const EDUCATION_SENTINEL: &str = "Education details not clearly specified";

const MAX_EDUCATION_ENTRIES: usize = 5;
const MIN_PHONE_DIGITS: usize = 10;
const MIN_DEGREE_LINE_CHARS: usize = 10;

pub const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "JavaScript",
    "Java",
    "React",
    "Node.js",
    "SQL",
    "MongoDB",
    "AWS",
    "Docker",
    "Kubernetes",
    "Git",
    "HTML",
    "CSS",
    "Angular",
    "Vue.js",
    "Flask",
    "Django",
    "Express",
    "PostgreSQL",
    "MySQL",
];

const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "degree", "diploma", "b.tech", "m.tech", "mba",
];

const DEGREE_LINE_STOP_WORDS: &[&str] = &["email", "phone", "address", "skill", "experience", "work"];

const INSTITUTION_WORDS: &[&str] = &["university", "college", "institute"];

static EMAIL_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        PatternRule::new(
            "bounded address",
            r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b",
            verbatim,
        ),
        PatternRule::new(
            "address",
            r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}",
            verbatim,
        ),
        PatternRule::new(
            "labeled address",
            r"(?i)email[:\s]*([a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,})",
            verbatim,
        ),
    ]
});

static PHONE_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        PatternRule::new(
            "labeled",
            r"(?i)(?:phone|mobile|tel|contact)[:\s]*((?:\+?[0-9]{1,3}[\s.-]?)?\(?[0-9]{3}\)?[\s.-]?[0-9]{3}[\s.-]?[0-9]{4})",
            accept_phone,
        ),
        PatternRule::new(
            "international",
            r"(\+?[0-9]{1,3}[\s.-]?\(?[0-9]{3}\)?[\s.-]?[0-9]{3}[\s.-]?[0-9]{4})",
            accept_phone,
        ),
        PatternRule::new(
            "separated",
            r"([0-9]{3}[\s.-][0-9]{3}[\s.-][0-9]{4})",
            accept_phone,
        ),
        PatternRule::new("digit run", r"(\+?[0-9]{10,15})", accept_phone),
    ]
});

static CGPA_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        PatternRule::new("cgpa label", r"(?i)CGPA[:\s]*([0-9]\.[0-9]{1,2})", format_cgpa),
        PatternRule::new("gpa label", r"(?i)\bGPA[:\s]*([0-9]\.[0-9]{1,2})", format_cgpa),
        PatternRule::new("cgpa suffix", r"(?i)([0-9]\.[0-9]{1,2})\s*CGPA", format_cgpa),
        PatternRule::new(
            "grade ratio",
            r"([0-9]\.[0-9]{1,2})\s*/\s*[0-9]\.[0-9]{1,2}",
            format_cgpa,
        ),
    ]
});

// The leading `[^0-9.]` keeps "85.75%" from also yielding "75%".
static PERCENTAGE_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        PatternRule::new(
            "decimal percent sign",
            r"(?:^|[^0-9.])([0-9]{1,2}\.[0-9]{1,2})%",
            format_percentage,
        ),
        PatternRule::new(
            "whole percent sign",
            r"(?:^|[^0-9.])([0-9]{1,2})%",
            format_percentage,
        ),
        PatternRule::new(
            "percentage label",
            r"(?i)percentage[:\s]*([0-9]{1,2}\.[0-9]{1,2})",
            format_percentage,
        ),
        PatternRule::new(
            "percent word",
            r"(?i)(?:^|[^0-9.])([0-9]{1,2}\.[0-9]{1,2})\s*percent",
            format_percentage,
        ),
    ]
});

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(19|20)[0-9]{2}").expect("valid year regex"));

fn accept_phone(raw: &str) -> Option<String> {
    let digits = raw.chars().filter(char::is_ascii_digit).count();
    (digits >= MIN_PHONE_DIGITS).then(|| raw.trim().to_string())
}

fn format_cgpa(raw: &str) -> Option<String> {
    Some(format!("CGPA: {raw}"))
}

fn format_percentage(raw: &str) -> Option<String> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| (30.0..=100.0).contains(value))
        .map(|_| format!("Percentage: {raw}%"))
}

pub fn extract_email(text: &str) -> Option<String> {
    first_match(&EMAIL_RULES, text)
}

/// First candidate, most specific pattern first, with at least ten digits.
/// Returned as written in the text.
pub fn extract_phone(text: &str) -> Option<String> {
    first_match(&PHONE_RULES, text)
}

/// Known skills mentioned anywhere in the text, in vocabulary order.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect()
}

/// Grades first (CGPA, then percentages), then degree lines; at most five.
pub fn extract_education(text: &str) -> Vec<String> {
    let mut entries = all_matches(&CGPA_RULES, text);
    entries.extend(all_matches(&PERCENTAGE_RULES, text));
    entries.extend(degree_lines(text));
    entries.truncate(MAX_EDUCATION_ENTRIES);

    if entries.is_empty() {
        vec![EDUCATION_SENTINEL.to_string()]
    } else {
        entries
    }
}

fn degree_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| is_degree_line(line))
        .map(|line| line.trim().to_string())
        .collect()
}

fn is_degree_line(line: &str) -> bool {
    if line.trim().chars().count() <= MIN_DEGREE_LINE_CHARS {
        return false;
    }
    let lower = line.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    mentions(DEGREE_KEYWORDS)
        && !mentions(DEGREE_LINE_STOP_WORDS)
        && (YEAR_RE.is_match(line) || mentions(INSTITUTION_WORDS))
}

/// Runs every field extractor over `text`.
pub fn extract_fields(text: String) -> ExtractedFields {
    let email = extract_email(&text);
    let phone = extract_phone(&text);
    let skills = extract_skills(&text);
    let education = extract_education(&text);

    ExtractedFields {
        text,
        email,
        phone,
        skills,
        education,
        kind: SourceKind::Resume,
    }
}
