//! Presentation helpers
//!
//! Display-side formatting for detected numbers and the compact summary
//! line. Grouping follows the en-US convention (comma every three digits
//! left of the decimal point) regardless of host locale.

use crate::stats::CalculationStats;

/// Format a number with the default of 2 decimal places.
pub fn format_number(value: f64) -> String {
    format_number_with(value, 2)
}

/// Format a number for display.
///
/// Non-finite values render as the literal `"0"`. Integral values are
/// grouped with no decimal point (`1000` renders as `"1,000"`); anything
/// else gets exactly `decimals` fractional digits (`1000.5` renders as
/// `"1,000.50"`).
pub fn format_number_with(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let rendered = if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.*}", decimals, value)
    };

    group_thousands(&rendered)
}

/// Compact one-line summary of a calculation.
///
/// A single number reads `"1 number: <sum>"`; two or more read
/// `"<count> numbers • Sum: <sum> • Avg: <avg>"`. A zero count returns an
/// empty string; the analyzer reports "no numbers" as `None` rather than a
/// zero-count stats object, so that branch is normally unreachable.
pub fn calculation_summary(stats: &CalculationStats) -> String {
    match stats.count {
        0 => String::new(),
        1 => format!("1 number: {}", format_number(stats.sum)),
        _ => format!(
            "{} numbers • Sum: {} • Avg: {}",
            stats.count,
            format_number(stats.sum),
            format_number(stats.average)
        ),
    }
}

/// Insert en-US thousands separators into a rendered decimal string.
fn group_thousands(rendered: &str) -> String {
    let (sign, rest) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
