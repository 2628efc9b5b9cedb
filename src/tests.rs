//! Crate integration tests

use super::*;

#[test]
fn test_module_exports() {
    let _rule = ExclusionRule::new("test", r"test");
    let _options = AnalyzerOptions::default();
    let analyzer = NumericAnalyzer::with_defaults();
    assert_eq!(analyzer.exclusion_count(), 0);
}

#[test]
fn test_end_to_end_note() {
    let analyzer = NumericAnalyzer::with_defaults();

    let note = "\
Shopping for the 20-10-2025 party:
<b>Drinks</b>: 1,200.50
Snacks: 800
Deposit returned: -500";

    let stats = analyzer.analyze(note).unwrap();
    assert_eq!(stats.numbers, vec![1200.50, 800.0, -500.0]);
    assert_eq!(stats.count, 3);
    assert_eq!(stats.sum, 1500.5);
    assert_eq!(stats.min, -500.0);
    assert_eq!(stats.max, 1200.5);

    assert!(analyzer.should_show_calculation(note));
    assert_eq!(
        calculation_summary(&stats),
        "3 numbers • Sum: 1,500.50 • Avg: 500.17"
    );
}

#[test]
fn test_single_number_summary() {
    let analyzer = NumericAnalyzer::with_defaults();

    let stats = analyzer.analyze("paid 1000 back").unwrap();
    assert!(!analyzer.should_show_calculation("paid 1000 back"));
    assert_eq!(calculation_summary(&stats), "1 number: 1,000");
}

#[test]
fn test_empty_and_markup_only_text() {
    let analyzer = NumericAnalyzer::with_defaults();

    assert!(analyzer.analyze("").is_none());
    assert!(analyzer.analyze("<b></b><i></i>").is_none());
    assert!(!analyzer.should_show_calculation(""));
}

#[test]
fn test_stats_serialization() {
    let analyzer = NumericAnalyzer::with_defaults();
    let stats = analyzer.analyze("10 and 20").unwrap();

    let json = serde_json::to_string(&stats).unwrap();
    let back: CalculationStats = serde_json::from_str(&json).unwrap();
    assert_eq!(back, stats);
}

#[test]
fn test_match_serialization() {
    let analyzer = NumericAnalyzer::with_defaults();
    let matches = analyzer.detect_matches("total 1,000.50");

    let json = serde_json::to_string(&matches).unwrap();
    assert!(json.contains("\"matched_text\":\"1,000.50\""));
    assert!(json.contains("\"line\":1"));
}

#[test]
fn test_exclusion_rule_serialization() {
    let rule = ExclusionRule::new("Clock time", r"[0-9]{1,2}:[0-9]{2}");
    let json = serde_json::to_string(&rule).unwrap();
    let back: ExclusionRule = serde_json::from_str(&json).unwrap();
    assert_eq!(back.name, rule.name);
    assert_eq!(back.pattern, rule.pattern);
    assert!(back.enabled);
}
