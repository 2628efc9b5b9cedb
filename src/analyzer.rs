//! Numeric detection engine
//!
//! Scans note text for standalone numeric tokens and aggregates them into
//! calculation statistics. Detection never modifies the input, holds no
//! state between calls, and reports matches in order of appearance.

use std::borrow::Cow;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;
use crate::patterns::{ExclusionRule, NUMBER_TOKEN_RE, TAG_RE};
use crate::stats::CalculationStats;

/// A numeric token found in the text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberMatch {
    /// Parsed value
    pub value: f64,
    /// Token text as it appeared, e.g. `1,000.50`
    pub matched_text: String,
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

/// Analyzer construction options
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    /// Strip angle-bracket markup before scanning
    pub strip_markup: bool,
    /// Minimum detected numbers before the statistics surface is shown
    pub min_display_count: usize,
    /// User-supplied ignore patterns
    pub exclusions: Vec<ExclusionRule>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            strip_markup: true,
            min_display_count: 2,
            exclusions: Vec::new(),
        }
    }
}

/// Numeric detection engine
pub struct NumericAnalyzer {
    strip_markup: bool,
    min_display_count: usize,
    exclusion_regexes: Vec<Regex>,
}

impl NumericAnalyzer {
    /// Create an analyzer from options.
    ///
    /// Compiles the enabled exclusion rules; an invalid user pattern is
    /// the only construction failure.
    pub fn new(options: AnalyzerOptions) -> Result<Self, AnalyzerError> {
        let exclusion_regexes: Result<Vec<_>, _> = options
            .exclusions
            .iter()
            .filter(|rule| rule.enabled)
            .map(|rule| Regex::new(&rule.pattern))
            .collect();

        Ok(Self {
            strip_markup: options.strip_markup,
            min_display_count: options.min_display_count,
            exclusion_regexes: exclusion_regexes?,
        })
    }

    /// Create an analyzer with default options and no exclusions.
    pub fn with_defaults() -> Self {
        let options = AnalyzerOptions::default();
        Self {
            strip_markup: options.strip_markup,
            min_display_count: options.min_display_count,
            exclusion_regexes: Vec::new(),
        }
    }

    /// Scan text and report every numeric token with its position.
    ///
    /// Positions are 1-based and refer to the input text; markup
    /// stripping replaces each tag with a same-length run of spaces so
    /// offsets survive it.
    pub fn detect_matches(&self, text: &str) -> Vec<NumberMatch> {
        if text.is_empty() {
            return Vec::new();
        }

        let scanned = if self.strip_markup {
            strip_markup(text)
        } else {
            Cow::Borrowed(text)
        };
        let excluded = self.excluded_spans(&scanned);

        let mut matches = Vec::new();
        for caps in NUMBER_TOKEN_RE.captures_iter(&scanned) {
            let token = caps.get(1).unwrap();

            if is_date_component(&scanned, token.start(), token.end()) {
                continue;
            }
            if excluded
                .iter()
                .any(|&(start, end)| token.start() < end && start < token.end())
            {
                continue;
            }

            // Thousands separators are display syntax, not value syntax
            let value = match token.as_str().replace(',', "").parse::<f64>() {
                Ok(value) if value.is_finite() => value,
                _ => continue,
            };

            let (line, column) = position_at(&scanned, token.start());
            matches.push(NumberMatch {
                value,
                matched_text: token.as_str().to_string(),
                line,
                column,
            });
        }

        matches
    }

    /// Detected values only, in order of appearance.
    pub fn detect_numbers(&self, text: &str) -> Vec<f64> {
        self.detect_matches(text)
            .into_iter()
            .map(|m| m.value)
            .collect()
    }

    /// Detect numbers and compute their statistics.
    ///
    /// Returns `None` when the text holds no detectable numbers.
    pub fn analyze(&self, text: &str) -> Option<CalculationStats> {
        CalculationStats::from_values(&self.detect_numbers(text))
    }

    /// Whether the statistics surface should be shown for this text.
    ///
    /// True iff at least `min_display_count` numbers are detected
    /// (default 2).
    pub fn should_show_calculation(&self, text: &str) -> bool {
        self.detect_numbers(text).len() >= self.min_display_count
    }

    /// Number of active exclusion rules
    pub fn exclusion_count(&self) -> usize {
        self.exclusion_regexes.len()
    }

    /// Spans matched by the exclusion rules; tokens overlapping any of
    /// them are dropped.
    fn excluded_spans(&self, text: &str) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        for regex in &self.exclusion_regexes {
            for mat in regex.find_iter(text) {
                spans.push((mat.start(), mat.end()));
            }
        }
        spans
    }
}

impl Default for NumericAnalyzer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Replace each markup tag with a same-length run of spaces.
///
/// Keeps adjacent words from merging and keeps byte offsets stable, so
/// match positions refer to the original text. Numbers inside tag
/// attributes are wiped along with the tag.
fn strip_markup(text: &str) -> Cow<'_, str> {
    TAG_RE.replace_all(text, |caps: &regex::Captures| {
        " ".repeat(caps.get(0).unwrap().as_str().len())
    })
}

/// Date-component heuristic.
///
/// A token counts as part of a date-like pattern when it is immediately
/// followed by `-` or `/` plus a digit (the `20` in `20-10-2025`), or
/// immediately preceded by `-` or `/` that itself follows a digit (the
/// `2025`). The two sides are OR'd, so a token adjacent to a date
/// separator on either side is dropped even in malformed input. This
/// inspects the immediate neighbor characters only; it is not a date
/// parser, and separators like `:` or `.` are outside its scope.
pub(crate) fn is_date_component(text: &str, start: usize, end: usize) -> bool {
    let mut after = text[end..].chars();
    let followed = matches!(
        (after.next(), after.next()),
        (Some('-' | '/'), Some(digit)) if digit.is_ascii_digit()
    );

    let mut before = text[..start].chars().rev();
    let preceded = matches!(
        (before.next(), before.next()),
        (Some('-' | '/'), Some(digit)) if digit.is_ascii_digit()
    );

    followed || preceded
}

/// Line and column (1-based) of a byte offset.
fn position_at(text: &str, byte_offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut line_start = 0;

    for (i, c) in text[..byte_offset].char_indices() {
        if c == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    let column = text[line_start..byte_offset].chars().count() + 1;
    (line, column)
}
