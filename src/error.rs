//! Analyzer error types

use thiserror::Error;

/// Errors produced while constructing an analyzer
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Invalid user-supplied exclusion pattern
    #[error("Invalid exclusion pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
