use super::common::*;
use crate::survey::interpretation::warnings::{
    collect_warnings, detect_category_warning, detect_systemic_warnings,
};
use crate::survey::interpretation::{
    Category, CategoryScore, EarlyWarning, WarningRule, WarningSeverity,
};

fn rule_for(average: f64, critical: usize, risk: usize) -> Option<WarningRule> {
    let score = CategoryScore::fixture(Category::MentalHealthStress, average, critical, risk);
    detect_category_warning(&score).map(|warning| warning.rule)
}

fn rules(warnings: &[EarlyWarning]) -> Vec<WarningRule> {
    warnings.iter().map(|warning| warning.rule).collect()
}

#[test]
fn critical_items_take_precedence_over_a_healthy_average() {
    assert_eq!(rule_for(4.8, 2, 0), Some(WarningRule::CriticalItems));
    assert_eq!(rule_for(1.5, 3, 5), Some(WarningRule::CriticalItems));
}

#[test]
fn average_bands_select_the_first_matching_rule() {
    assert_eq!(rule_for(1.99, 1, 0), Some(WarningRule::ExtremeRisk));
    assert_eq!(rule_for(2.0, 0, 0), Some(WarningRule::HighRisk));
    assert_eq!(rule_for(2.59, 0, 4), Some(WarningRule::HighRisk));
    assert_eq!(rule_for(2.6, 0, 0), Some(WarningRule::ElevatedRisk));
    assert_eq!(rule_for(3.39, 0, 0), Some(WarningRule::ElevatedRisk));
    assert_eq!(rule_for(3.4, 0, 0), Some(WarningRule::Monitor));
    assert_eq!(rule_for(3.99, 0, 0), Some(WarningRule::Monitor));
    assert_eq!(rule_for(4.0, 0, 0), None);
    assert_eq!(rule_for(5.0, 1, 2), None);
}

#[test]
fn risk_items_outrank_elevated_and_monitor_bands() {
    assert_eq!(rule_for(3.0, 0, 3), Some(WarningRule::RiskItems));
    assert_eq!(rule_for(4.5, 1, 3), Some(WarningRule::RiskItems));
    assert_eq!(rule_for(3.0, 0, 2), Some(WarningRule::ElevatedRisk));
}

#[test]
fn category_warning_carries_severity_and_action() {
    let score = CategoryScore::fixture(Category::WorkplaceEnvironment, 1.5, 0, 0);
    let warning = detect_category_warning(&score).expect("warning raised");

    assert_eq!(warning.category, Some(Category::WorkplaceEnvironment));
    assert_eq!(warning.category_label, Category::WorkplaceEnvironment.label());
    assert_eq!(warning.severity, WarningSeverity::Critical);
    assert_eq!(
        warning.action_required,
        WarningSeverity::Critical.action_required()
    );
    assert!(warning.message.contains("1.50"), "{}", warning.message);
}

#[test]
fn systemic_rule_fires_when_stress_and_culture_are_both_low() {
    let scores = vec![
        CategoryScore::fixture(Category::MentalHealthStress, 2.5, 0, 0),
        CategoryScore::fixture(Category::WorkplaceEnvironment, 2.5, 0, 0),
    ];
    let warnings = detect_systemic_warnings(&scores, 3.5);
    assert_eq!(rules(&warnings), vec![WarningRule::SystemicStressCulture]);
    assert_eq!(warnings[0].category, None);

    let scores = vec![
        CategoryScore::fixture(Category::MentalHealthStress, 2.5, 0, 0),
        CategoryScore::fixture(Category::WorkplaceEnvironment, 2.51, 0, 0),
    ];
    assert!(detect_systemic_warnings(&scores, 3.5).is_empty());
}

#[test]
fn burnout_rule_needs_critical_items_and_a_low_index() {
    let scores = vec![CategoryScore::fixture(Category::OverallWellbeing, 4.5, 2, 0)];
    assert_eq!(
        rules(&detect_systemic_warnings(&scores, 2.99)),
        vec![WarningRule::BurnoutSignals]
    );
    assert!(detect_systemic_warnings(&scores, 3.0).is_empty());

    let scores = vec![CategoryScore::fixture(Category::OverallWellbeing, 1.0, 1, 6)];
    assert!(detect_systemic_warnings(&scores, 1.0).is_empty());
}

#[test]
fn category_warnings_precede_systemic_ones_in_category_order() {
    let scores: Vec<CategoryScore> = vec![
        CategoryScore::fixture(Category::MentalHealthStress, 2.4, 2, 0),
        CategoryScore::fixture(Category::WorkplaceEnvironment, 2.4, 0, 0),
        CategoryScore::fixture(Category::PersonalState, 3.5, 0, 0),
        CategoryScore::fixture(Category::BehaviorInteraction, 4.5, 0, 0),
        CategoryScore::fixture(Category::OverallWellbeing, 3.0, 0, 0),
    ];
    let warnings = collect_warnings(&scores, 2.9);

    assert_eq!(
        rules(&warnings),
        vec![
            WarningRule::CriticalItems,
            WarningRule::HighRisk,
            WarningRule::Monitor,
            WarningRule::ElevatedRisk,
            WarningRule::SystemicStressCulture,
            WarningRule::BurnoutSignals,
        ]
    );
}

#[test]
fn critical_answers_raise_an_immediate_flag_despite_a_healthy_average() {
    // positions 4 and 8 are critical items in the stress block
    let mut values = [5u8; 12];
    values[4] = 1;
    values[8] = 1;
    let result = analyze(&answers_for(Category::MentalHealthStress, &values));

    let stress = result
        .category(Category::MentalHealthStress)
        .expect("stress category scored");
    assert_eq!(stress.impact_items.critical, 2);
    assert_eq!(stress.average_score, 4.33);
    assert_eq!(
        stress.level,
        crate::survey::interpretation::ScoreLevel::Healthy
    );

    let first = result.early_warnings.first().expect("warning raised");
    assert_eq!(first.rule, WarningRule::CriticalItems);
    assert_eq!(first.category, Some(Category::MentalHealthStress));
    assert_eq!(first.severity, WarningSeverity::Critical);
    assert!(first.message.starts_with("IMMEDIATE FLAG"));
    assert!(result.has_critical_warning());
}
