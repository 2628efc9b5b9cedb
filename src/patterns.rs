//! Built-in detection patterns
//!
//! Holds the compiled patterns the analyzer scans with, plus the
//! user-facing exclusion rule type.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Markup tag pattern.
///
/// Requires a letter after the optional slash so prose comparisons
/// (`2 < 3`) are never treated as tags.
pub(crate) const TAG_PATTERN: &str = r"</?[A-Za-z][^<>]*>";

/// Numeric token pattern.
///
/// A token must begin a "word": it is preceded by start-of-input,
/// whitespace, or one of `, ; : ( ) [ ] { }`. The engine has no
/// lookbehind, so the delimiter is consumed by the leading group and the
/// token itself is capture group 1; the scan resumes at the token end, so
/// adjacent tokens sharing a delimiter still all match. The body is an
/// optional `-` sign, then either a comma-grouped integer (`10,000`) or a
/// plain digit run, then an optional decimal part. The grouped alternative
/// comes first so it wins under leftmost-first alternation. The trailing
/// boundary and the digit class are ASCII, so `3pm` is rejected while
/// `42€` is accepted.
pub(crate) const NUMBER_TOKEN_PATTERN: &str =
    r"(?:^|[\s,;:()\[\]{}])(-?(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\.[0-9]+)?)(?-u:\b)";

/// Compiled tag pattern
pub(crate) static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(TAG_PATTERN).expect("built-in tag pattern must compile"));

/// Compiled numeric token pattern
pub(crate) static NUMBER_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(NUMBER_TOKEN_PATTERN).expect("built-in token pattern must compile"));

/// Exclusion rule
///
/// A rule's pattern marks spans of text whose numeric tokens are ignored,
/// e.g. clock times (`\d{1,2}:\d{2}`) or ticket numbers. Rules are
/// supplied by the caller; the date-like heuristic is built into the
/// analyzer and is not expressed as a rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExclusionRule {
    /// Rule name
    pub name: String,
    /// Regex pattern
    pub pattern: String,
    /// Whether the rule is applied
    pub enabled: bool,
}

impl ExclusionRule {
    /// Create a new enabled rule
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            enabled: true,
        }
    }
}

#[cfg(test)]
mod pattern_tests {
    use super::*;

    #[test]
    fn test_builtin_patterns_compile() {
        for pattern in [TAG_PATTERN, NUMBER_TOKEN_PATTERN] {
            let result = Regex::new(pattern);
            assert!(result.is_ok(), "Pattern '{}' failed to compile: {:?}", pattern, result.err());
        }
    }

    #[test]
    fn test_tag_pattern_matches_tags() {
        assert!(TAG_RE.is_match("<b>"));
        assert!(TAG_RE.is_match("</b>"));
        assert!(TAG_RE.is_match("<br/>"));
        assert!(TAG_RE.is_match(r#"<img src="photo.png" width="500">"#));
    }

    #[test]
    fn test_tag_pattern_ignores_comparisons() {
        assert!(!TAG_RE.is_match("2 < 3 and 5 > 4"));
        assert!(!TAG_RE.is_match("I <3 counting"));
    }

    #[test]
    fn test_token_pattern_prefers_grouped_form() {
        let caps = NUMBER_TOKEN_RE.captures("10,000").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "10,000");
    }

    #[test]
    fn test_token_pattern_requires_word_start() {
        assert!(NUMBER_TOKEN_RE.captures("abc123").is_none());
        assert!(NUMBER_TOKEN_RE.captures("(123").is_some());
    }

    #[test]
    fn test_token_pattern_requires_trailing_boundary() {
        assert!(NUMBER_TOKEN_RE.captures("3pm").is_none());
        assert!(NUMBER_TOKEN_RE.captures("3 pm").is_some());
    }

    #[test]
    fn test_exclusion_rule_constructor() {
        let rule = ExclusionRule::new("Clock time", r"\d{1,2}:\d{2}");
        assert_eq!(rule.name, "Clock time");
        assert!(rule.enabled);
    }
}
