use survey_insight::survey::interpretation::{
    diagnose, Answer, Category, CompliancePolicy, ComplianceRating, DiagnosisSeverity,
    DomainModel, ModelError, QuestionRef, ScoreLevel, SurveyInterpreter,
};

fn layout() -> Vec<QuestionRef> {
    (1..=60)
        .map(|order| QuestionRef::new(format!("q{order}"), order))
        .collect()
}

fn uniform_answers(value: u8) -> Vec<Answer> {
    (1..=60)
        .map(|order| Answer::new(format!("q{order}"), value.to_string()))
        .collect()
}

#[test]
fn every_level_pair_has_a_diagnosis() {
    let levels = [
        ScoreLevel::Healthy,
        ScoreLevel::Attention,
        ScoreLevel::Risk,
        ScoreLevel::HighRisk,
    ];
    for stress in levels {
        for culture in levels {
            let diagnosis = diagnose(stress, culture);
            assert!(!diagnosis.diagnosis.is_empty());
            assert!(!diagnosis.recommendation.is_empty());
        }
    }

    assert_eq!(
        diagnose(ScoreLevel::Risk, ScoreLevel::HighRisk).diagnosis,
        "Mixed indicators"
    );
    assert_eq!(
        diagnose(ScoreLevel::HighRisk, ScoreLevel::HighRisk).severity,
        DiagnosisSeverity::Critical
    );
}

#[test]
fn stricter_compliance_policy_changes_the_rating() {
    let answers = uniform_answers(4);
    let standard = SurveyInterpreter::standard()
        .expect("standard model is valid")
        .analyze(&answers, &layout())
        .expect("analysis succeeds");
    assert_eq!(standard.overall_index, 4.0);
    assert_eq!(standard.compliance.rating, ComplianceRating::Low);

    let policy = CompliancePolicy::new(3.0, 3.8, 4.5).expect("thresholds are ordered");
    let strict = SurveyInterpreter::standard()
        .expect("standard model is valid")
        .with_compliance_policy(policy)
        .analyze(&answers, &layout())
        .expect("analysis succeeds");
    assert_eq!(strict.compliance.rating, ComplianceRating::Medium);
    assert!(strict.compliance.requires_action);
}

#[test]
fn unbalanced_weights_are_rejected_up_front() {
    match DomainModel::with_weights([0.5, 0.5, 0.5, 0.0, 0.0]) {
        Err(ModelError::WeightSum { sum }) => assert!((sum - 1.5).abs() < 1e-9),
        other => panic!("expected weight sum error, got {other:?}"),
    }
}

#[test]
fn misordered_compliance_thresholds_are_rejected() {
    match CompliancePolicy::new(3.4, 2.5, 4.0) {
        Err(ModelError::ComplianceThresholds { .. }) => {}
        other => panic!("expected threshold error, got {other:?}"),
    }
}

#[test]
fn interpretation_serialises_to_json() {
    let result = SurveyInterpreter::standard()
        .expect("standard model is valid")
        .analyze(&uniform_answers(5), &layout())
        .expect("analysis succeeds");

    let json = serde_json::to_value(&result).expect("serialises");
    assert_eq!(json["overall_index"], 5.0);
    assert_eq!(json["social"]["rating"], "A");
    assert_eq!(
        json["categories"].as_array().map(Vec::len),
        Some(Category::COUNT)
    );
    assert!(json["generated_at"].is_string());
}
