//! Ordered `(pattern, formatter)` rules.
//!
//! Each field extractor is a list of rules evaluated in order. A rule's
//! formatter turns the captured text into the output value or rejects it, so
//! validation (digit counts, numeric ranges) lives next to the pattern it
//! guards.

use regex::Regex;
use tracing::trace;

/// Maps a captured value to the extractor's output, or rejects the candidate.
pub type Formatter = fn(&str) -> Option<String>;

pub struct PatternRule {
    pub label: &'static str,
    regex: Regex,
    formatter: Formatter,
}

impl PatternRule {
    /// Compiles a rule. Patterns are compile-time constants, so a bad one is a
    /// programming error.
    pub fn new(label: &'static str, pattern: &str, formatter: Formatter) -> Self {
        Self {
            label,
            regex: Regex::new(pattern).expect("valid extraction pattern"),
            formatter,
        }
    }

    /// Accepted values of every match, in text order, with the byte offset
    /// where the value starts. Capture group 1 is the value when the pattern
    /// has one, otherwise the whole match.
    pub fn candidates<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (usize, String)> + 'a {
        self.regex.captures_iter(text).filter_map(move |caps| {
            let value = caps.get(1).or_else(|| caps.get(0))?;
            (self.formatter)(value.as_str()).map(|formatted| (value.start(), formatted))
        })
    }
}

/// First accepted value of the first rule that yields one.
pub fn first_match(rules: &[PatternRule], text: &str) -> Option<String> {
    rules.iter().find_map(|rule| {
        let (_, value) = rule.candidates(text).next()?;
        trace!(rule = rule.label, "pattern matched");
        Some(value)
    })
}

/// Every accepted value, rule by rule. A span already claimed by an earlier
/// rule is skipped; equal values at different positions are all kept.
pub fn all_matches(rules: &[PatternRule], text: &str) -> Vec<String> {
    let mut claimed: Vec<usize> = Vec::new();
    let mut values = Vec::new();
    for (start, value) in rules.iter().flat_map(|rule| rule.candidates(text)) {
        if !claimed.contains(&start) {
            claimed.push(start);
            values.push(value);
        }
    }
    values
}

pub fn verbatim(raw: &str) -> Option<String> {
    Some(raw.trim().to_string())
}
