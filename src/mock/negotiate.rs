//! Response media type selection.
//!
//! # Precedence
//! 1. Accept header, if it is one of the accepted media types (case-insensitive)
//! 2. `content-type` from the domain's `_meta.yml`
//! 3. The process-wide default content type

use std::collections::HashSet;

/// Media type settings shared by every domain of one process.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    default_content_type: String,
    accepted: HashSet<String>,
}

impl MediaConfig {
    /// Create the settings. Accepted media types are stored lower-cased.
    pub fn new<I, S>(default_content_type: impl Into<String>, accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            default_content_type: default_content_type.into(),
            accepted: accepted
                .into_iter()
                .map(|m| m.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn accepted(&self) -> &HashSet<String> {
        &self.accepted
    }

    /// Pick the media type for a response given the request's Accept header and
    /// the domain override.
    pub fn choose<'a>(&'a self, accept: &'a str, domain_override: Option<&'a str>) -> &'a str {
        choose(
            accept,
            &self.accepted,
            domain_override,
            &self.default_content_type,
        )
    }
}

/// Case-insensitive membership test against a lower-cased set.
pub fn is_accepted(accept: &str, accepted: &HashSet<String>) -> bool {
    accepted.contains(&accept.to_ascii_lowercase())
}

/// Choose a media type. A matching Accept value is returned verbatim, not in
/// its lower-cased form.
pub fn choose<'a>(
    accept: &'a str,
    accepted: &HashSet<String>,
    domain_override: Option<&'a str>,
    default: &'a str,
) -> &'a str {
    if !accept.is_empty() && is_accepted(accept, accepted) {
        return accept;
    }

    match domain_override {
        Some(content_type) if !content_type.is_empty() => content_type,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_accept_match_wins() {
        let accepted = set(&["application/json", "application/xml"]);
        assert_eq!(
            choose("application/json", &accepted, None, "text/plain"),
            "application/json"
        );
        assert_eq!(
            choose("application/json", &accepted, Some("text/csv"), "text/plain"),
            "application/json"
        );
    }

    #[test]
    fn test_accept_match_preserves_case() {
        let accepted = set(&["application/json"]);
        assert_eq!(
            choose("Application/JSON", &accepted, None, "text/plain"),
            "Application/JSON"
        );
    }

    #[test]
    fn test_wildcard_falls_through_to_override() {
        let accepted = set(&["application/json"]);
        assert_eq!(
            choose("*/*", &accepted, Some("application/xml"), "text/plain"),
            "application/xml"
        );
    }

    #[test]
    fn test_default_when_nothing_else() {
        let accepted = set(&["application/json"]);
        assert_eq!(choose("*/*", &accepted, None, "text/plain"), "text/plain");
        assert_eq!(choose("", &accepted, Some(""), "text/plain"), "text/plain");
    }

    #[test]
    fn test_media_config_lowercases_accepted() {
        let media = MediaConfig::new("application/json", ["Application/XML"]);
        assert!(media.accepted().contains("application/xml"));
        assert_eq!(media.choose("application/xml", None), "application/xml");
        assert_eq!(media.choose("text/html", None), "application/json");
    }
}
