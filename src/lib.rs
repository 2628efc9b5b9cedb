//! note-calc - numeric detection and statistics engine
//!
//! Extracts standalone numeric tokens from note text (skipping date-like
//! patterns and markup) and computes descriptive statistics over them,
//! plus display formatting for the result. All operations are pure and
//! synchronous; the consuming UI layer decides when to call them.

mod analyzer;
mod error;
mod format;
mod patterns;
mod stats;

pub use analyzer::{AnalyzerOptions, NumberMatch, NumericAnalyzer};
pub use error::AnalyzerError;
pub use format::{calculation_summary, format_number, format_number_with};
pub use patterns::ExclusionRule;
pub use stats::CalculationStats;

#[cfg(test)]
mod tests;
