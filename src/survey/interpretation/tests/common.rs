use crate::survey::interpretation::domain::CANONICAL_LAYOUT_SIZE;
use crate::survey::interpretation::{
    Answer, Category, QuestionRef, SurveyInterpretation, SurveyInterpreter,
};

pub(super) fn interpreter() -> SurveyInterpreter {
    SurveyInterpreter::standard().expect("standard model is valid")
}

pub(super) fn question_id(position: usize) -> String {
    format!("q{}", position + 1)
}

/// Full 60-slot layout with display orders 1..=60.
pub(super) fn layout() -> Vec<QuestionRef> {
    (0..CANONICAL_LAYOUT_SIZE)
        .map(|position| QuestionRef::new(question_id(position), position as u32 + 1))
        .collect()
}

/// Answers for the first `values.len()` positions of a category.
pub(super) fn answers_for(category: Category, values: &[u8]) -> Vec<Answer> {
    category
        .positions()
        .zip(values)
        .map(|(position, value)| Answer::new(question_id(position), value.to_string()))
        .collect()
}

pub(super) fn uniform(category: Category, value: u8) -> Vec<Answer> {
    answers_for(category, &[value; 12])
}

/// Answer for one 0-based position.
pub(super) fn answer_at(position: usize, value: &str) -> Answer {
    Answer::new(question_id(position), value)
}

pub(super) fn every_category(values: &[u8]) -> Vec<Answer> {
    Category::ordered()
        .into_iter()
        .flat_map(|category| answers_for(category, values))
        .collect()
}

pub(super) fn analyze(responses: &[Answer]) -> SurveyInterpretation {
    interpreter()
        .analyze(responses, &layout())
        .expect("analysis succeeds")
}
