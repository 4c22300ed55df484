use crate::errors::AnalysisError;

/// LinkedIn's auto-generated member ids start with this prefix; vanity slugs don't.
const GENERATED_ID_PREFIX: &str = "ACoAA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUrl {
    pub profile_id: String,
    pub is_custom_url: bool,
}

/// Parses `http(s)://[*.]linkedin.com/.../in/<id>/...`.
pub fn parse_profile_url(url: &str) -> Result<ProfileUrl, AnalysisError> {
    let invalid = |reason: &str| AnalysisError::InvalidProfileUrl(format!("{reason}: {url}"));

    let (scheme, rest) = url.trim().split_once("://").ok_or_else(|| invalid("missing scheme"))?;
    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return Err(invalid("unsupported scheme"));
    }

    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let (authority, remainder) = rest.split_at(authority_end);
    let host = authority.rsplit('@').next().unwrap_or(authority);
    let host = host.split(':').next().unwrap_or(host).to_ascii_lowercase();
    if !is_linkedin_host(&host) {
        return Err(invalid("not a LinkedIn host"));
    }

    let path = remainder.split(['?', '#']).next().unwrap_or("");
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let profile_id = segments
        .iter()
        .position(|s| *s == "in")
        .and_then(|idx| segments.get(idx + 1))
        .ok_or_else(|| invalid("no /in/<id> segment"))?;

    Ok(ProfileUrl {
        profile_id: profile_id.to_string(),
        is_custom_url: !profile_id.starts_with(GENERATED_ID_PREFIX),
    })
}

fn is_linkedin_host(host: &str) -> bool {
    host == "linkedin.com" || host.ends_with(".linkedin.com")
}
