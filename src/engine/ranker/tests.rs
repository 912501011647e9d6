use super::ResultRanker;
use crate::domain::analysis::{CalculationResult, TIME_UNIT_HOURS};
use crate::domain::types::{CompatibilityLevel, EquipmentType};

// ==========================================
// 测试辅助函数
// ==========================================

fn result(id: &str, compatible: bool, time: f64, cost: f64) -> CalculationResult {
    CalculationResult {
        id: id.to_string(),
        name: format!("Equipment {}", id),
        equipment_type: EquipmentType::Machinery,
        time,
        cost,
        compatible,
        compatibility_level: if compatible {
            CompatibilityLevel::Full
        } else {
            CompatibilityLevel::Incompatible
        },
        unit: TIME_UNIT_HOURS.to_string(),
        slope_compatible: None,
        max_slope_exceeded: None,
        drops: None,
        over_limit_percent: None,
        note: None,
        validation_errors: Vec::new(),
    }
}

fn ids(results: &[CalculationResult]) -> Vec<&str> {
    results.iter().map(|r| r.id.as_str()).collect()
}

// ==========================================
// 排序规则
// ==========================================

#[test]
fn test_compatible_before_incompatible() {
    let ranker = ResultRanker::default();
    let sorted = ranker.rank(vec![
        result("X", false, 0.0, 0.0),
        result("A", true, 20.0, 900.0),
        result("Y", false, 0.0, 0.0),
        result("B", true, 3.0, 100.0),
    ]);

    assert_eq!(ids(&sorted), vec!["B", "A", "X", "Y"]);
}

#[test]
fn test_time_ascending() {
    let ranker = ResultRanker::default();
    let sorted = ranker.rank(vec![
        result("slow", true, 12.0, 10.0),
        result("fast", true, 2.0, 500.0),
        result("mid", true, 6.0, 50.0),
    ]);

    assert_eq!(ids(&sorted), vec!["fast", "mid", "slow"]);
}

#[test]
fn test_time_within_tolerance_breaks_by_cost() {
    let ranker = ResultRanker::default();

    // 5.00h 与 5.05h 视为并列，成本低者优先
    let sorted = ranker.rank(vec![
        result("A", true, 5.00, 300.0),
        result("B", true, 5.05, 200.0),
    ]);
    assert_eq!(ids(&sorted), vec!["B", "A"]);

    // 输入顺序反过来结果一致
    let sorted = ranker.rank(vec![
        result("B", true, 5.05, 200.0),
        result("A", true, 5.00, 300.0),
    ]);
    assert_eq!(ids(&sorted), vec!["B", "A"]);
}

#[test]
fn test_time_outside_tolerance_ignores_cost() {
    let ranker = ResultRanker::default();
    let sorted = ranker.rank(vec![
        result("cheap", true, 5.2, 10.0),
        result("quick", true, 5.0, 1000.0),
    ]);

    assert_eq!(ids(&sorted), vec!["quick", "cheap"]);
}

#[test]
fn test_incompatible_keep_input_order() {
    let ranker = ResultRanker::default();
    let sorted = ranker.rank(vec![
        result("C", false, 9.0, 1.0),
        result("A", false, 1.0, 9.0),
        result("B", false, 5.0, 5.0),
    ]);

    assert_eq!(ids(&sorted), vec!["C", "A", "B"]);
}

#[test]
fn test_full_ties_are_stable() {
    let ranker = ResultRanker::default();
    let sorted = ranker.rank(vec![
        result("first", true, 4.0, 100.0),
        result("second", true, 4.0, 100.0),
    ]);

    assert_eq!(ids(&sorted), vec!["first", "second"]);
}

#[test]
fn test_custom_tolerance() {
    let ranker = ResultRanker::new(1.0);
    let sorted = ranker.rank(vec![
        result("A", true, 5.0, 300.0),
        result("B", true, 5.8, 200.0),
    ]);

    assert_eq!(ids(&sorted), vec!["B", "A"]);
}

#[test]
fn test_empty_input() {
    let ranker = ResultRanker::default();
    assert!(ranker.rank(Vec::new()).is_empty());
}
