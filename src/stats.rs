//! Calculation statistics
//!
//! The aggregate value object produced from a text's detected numbers.

use serde::{Deserialize, Serialize};

/// Descriptive statistics over the numbers detected in a text.
///
/// Built fresh from every analysis pass and never mutated; the consuming
/// layer discards it whenever the source text changes. `count` always
/// equals `numbers.len()` and is at least 1: empty input produces no
/// stats object at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationStats {
    /// Detected values, in order of appearance (duplicates retained)
    pub numbers: Vec<f64>,
    /// Arithmetic sum
    pub sum: f64,
    /// `sum / count`
    pub average: f64,
    /// Number of detected values
    pub count: usize,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl CalculationStats {
    /// Compute statistics from detected values.
    ///
    /// Returns `None` for an empty slice; callers treat that as "nothing
    /// to show". Summation is plain left-to-right addition and no
    /// rounding is applied; formatting belongs to the presentation layer.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let sum: f64 = values.iter().sum();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            numbers: values.to_vec(),
            sum,
            average: sum / count as f64,
            count,
            min,
            max,
        })
    }
}
