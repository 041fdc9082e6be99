use crate::survey::interpretation::{Answer, QuestionRef};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum SurveyImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for SurveyImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurveyImportError::Io(err) => write!(f, "failed to read survey export: {}", err),
            SurveyImportError::Csv(err) => write!(f, "invalid survey CSV data: {}", err),
        }
    }
}

impl std::error::Error for SurveyImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SurveyImportError::Io(err) => Some(err),
            SurveyImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SurveyImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for SurveyImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct QuestionRow {
    #[serde(rename = "Question ID")]
    question_id: String,
    #[serde(rename = "Display Order")]
    display_order: u32,
}

#[derive(Debug, Deserialize)]
struct ResponseRow {
    #[serde(rename = "Respondent ID")]
    respondent_id: String,
    #[serde(rename = "Question ID")]
    question_id: String,
    #[serde(rename = "Answer", default)]
    answer: String,
}

/// All answers submitted by one respondent, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseSet {
    pub respondent_id: String,
    pub answers: Vec<Answer>,
}

fn reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

pub struct SurveyImporter;

impl SurveyImporter {
    pub fn questions_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<QuestionRef>, SurveyImportError> {
        let file = std::fs::File::open(path)?;
        Self::questions_from_reader(file)
    }

    /// Read a question layout with `Question ID` and `Display Order` columns.
    pub fn questions_from_reader<R: Read>(
        source: R,
    ) -> Result<Vec<QuestionRef>, SurveyImportError> {
        let mut csv_reader = reader(source);
        let mut questions = Vec::new();
        for record in csv_reader.deserialize::<QuestionRow>() {
            let row = record?;
            questions.push(QuestionRef::new(row.question_id, row.display_order));
        }
        Ok(questions)
    }

    pub fn responses_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<ResponseSet>, SurveyImportError> {
        let file = std::fs::File::open(path)?;
        Self::responses_from_reader(file)
    }

    /// Read long-format responses and group them per respondent.
    ///
    /// Respondents keep the order in which they first appear; each respondent's
    /// answers keep file order so later rows for the same question win.
    pub fn responses_from_reader<R: Read>(
        source: R,
    ) -> Result<Vec<ResponseSet>, SurveyImportError> {
        let mut csv_reader = reader(source);
        let mut sets: Vec<ResponseSet> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in csv_reader.deserialize::<ResponseRow>() {
            let row = record?;
            let answer = Answer::new(row.question_id, row.answer);
            match index.get(&row.respondent_id) {
                Some(&position) => sets[position].answers.push(answer),
                None => {
                    index.insert(row.respondent_id.clone(), sets.len());
                    sets.push(ResponseSet {
                        respondent_id: row.respondent_id,
                        answers: vec![answer],
                    });
                }
            }
        }

        Ok(sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_question_layout() {
        let data = "Question ID,Display Order\n q1 , 1\nq2,2\n";
        let questions =
            SurveyImporter::questions_from_reader(Cursor::new(data)).expect("layout parses");
        assert_eq!(
            questions,
            vec![QuestionRef::new("q1", 1), QuestionRef::new("q2", 2)]
        );
    }

    #[test]
    fn groups_responses_in_first_seen_order() {
        let data = "Respondent ID,Question ID,Answer\n\
                    r2,q1,4\n\
                    r1,q1,3\n\
                    r2,q2,\n\
                    r2,q1,5\n";
        let sets =
            SurveyImporter::responses_from_reader(Cursor::new(data)).expect("responses parse");

        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].respondent_id, "r2");
        assert_eq!(
            sets[0].answers,
            vec![
                Answer::new("q1", "4"),
                Answer::new("q2", ""),
                Answer::new("q1", "5"),
            ]
        );
        assert_eq!(sets[1].respondent_id, "r1");
        assert_eq!(sets[1].answers, vec![Answer::new("q1", "3")]);
    }

    #[test]
    fn rejects_non_numeric_display_order() {
        let data = "Question ID,Display Order\nq1,first\n";
        match SurveyImporter::questions_from_reader(Cursor::new(data)) {
            Err(SurveyImportError::Csv(_)) => {}
            other => panic!("expected csv error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        match SurveyImporter::responses_from_path("/nonexistent/responses.csv") {
            Err(SurveyImportError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
